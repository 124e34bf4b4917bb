// ==========================================
// 物流バックオフィス - 主数据表单模型
// ==========================================
// 职责: 商品/资材/仕入先 登録表单的数据与字段更新命令
// 红线: code / name / category 提交前必填
// 说明: 字段更新使用带类型的命令，禁止按字段名动态赋值
// ==========================================

use crate::domain::types::{MasterKind, PaymentTerms, Unit};
use serde::{Deserialize, Serialize};

// ==========================================
// FieldViolation - 字段校验违规
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationRule {
    Required,      // 必填
    MustBePositive, // 必须大于 0
    InvalidFormat, // 格式错误
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: ViolationRule,
}

impl FieldViolation {
    pub fn new(field: &str, rule: ViolationRule) -> Self {
        Self {
            field: field.to_string(),
            rule,
        }
    }
}

/// 必填检查（去除首尾空白后为空即违规）
pub(crate) fn require(violations: &mut Vec<FieldViolation>, field: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(FieldViolation::new(field, ViolationRule::Required));
    }
}

// ==========================================
// ProductForm - 商品登録
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub code: String,
    pub name: String,
    pub category: String,
    pub unit: Unit,
    pub price: Option<u64>,
    pub cost: Option<u64>,
    pub pieces_per_case: Option<u32>,
    pub lead_time_days: Option<u32>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductFieldUpdate {
    Code(String),
    Name(String),
    Category(String),
    Unit(Unit),
    Price(Option<u64>),
    Cost(Option<u64>),
    PiecesPerCase(Option<u32>),
    LeadTimeDays(Option<u32>),
    Description(String),
}

impl ProductForm {
    pub fn apply(&mut self, update: ProductFieldUpdate) {
        match update {
            ProductFieldUpdate::Code(v) => self.code = v,
            ProductFieldUpdate::Name(v) => self.name = v,
            ProductFieldUpdate::Category(v) => self.category = v,
            ProductFieldUpdate::Unit(v) => self.unit = v,
            ProductFieldUpdate::Price(v) => self.price = v,
            ProductFieldUpdate::Cost(v) => self.cost = v,
            ProductFieldUpdate::PiecesPerCase(v) => self.pieces_per_case = v,
            ProductFieldUpdate::LeadTimeDays(v) => self.lead_time_days = v,
            ProductFieldUpdate::Description(v) => self.description = v,
        }
    }

    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        require(&mut violations, "code", &self.code);
        require(&mut violations, "name", &self.name);
        require(&mut violations, "category", &self.category);
        if self.pieces_per_case == Some(0) {
            violations.push(FieldViolation::new("pieces_per_case", ViolationRule::MustBePositive));
        }
        violations
    }
}

// ==========================================
// MaterialForm - 资材登録
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialForm {
    pub code: String,
    pub name: String,
    pub category: String,
    pub unit: Unit,
    pub unit_cost: Option<u64>,
    pub storage_location: String,
    pub lead_time_days: Option<u32>,
    pub minimum_stock: Option<u32>,
    pub supplier_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MaterialFieldUpdate {
    Code(String),
    Name(String),
    Category(String),
    Unit(Unit),
    UnitCost(Option<u64>),
    StorageLocation(String),
    LeadTimeDays(Option<u32>),
    MinimumStock(Option<u32>),
    SupplierCode(String),
}

impl MaterialForm {
    pub fn apply(&mut self, update: MaterialFieldUpdate) {
        match update {
            MaterialFieldUpdate::Code(v) => self.code = v,
            MaterialFieldUpdate::Name(v) => self.name = v,
            MaterialFieldUpdate::Category(v) => self.category = v,
            MaterialFieldUpdate::Unit(v) => self.unit = v,
            MaterialFieldUpdate::UnitCost(v) => self.unit_cost = v,
            MaterialFieldUpdate::StorageLocation(v) => self.storage_location = v,
            MaterialFieldUpdate::LeadTimeDays(v) => self.lead_time_days = v,
            MaterialFieldUpdate::MinimumStock(v) => self.minimum_stock = v,
            MaterialFieldUpdate::SupplierCode(v) => self.supplier_code = v,
        }
    }

    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        require(&mut violations, "code", &self.code);
        require(&mut violations, "name", &self.name);
        require(&mut violations, "category", &self.category);
        violations
    }
}

// ==========================================
// SupplierForm - 仕入先登録
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierForm {
    pub code: String,
    pub name: String,
    pub category: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub payment_terms: PaymentTerms,
    pub lead_time_days: Option<u32>,
    pub materials: Vec<String>, // 取扱資材コード
}

#[derive(Debug, Clone, PartialEq)]
pub enum SupplierFieldUpdate {
    Code(String),
    Name(String),
    Category(String),
    ContactPerson(String),
    Phone(String),
    Email(String),
    Address(String),
    PaymentTerms(PaymentTerms),
    LeadTimeDays(Option<u32>),
    AddMaterial(String),
    RemoveMaterial(String),
}

impl SupplierForm {
    pub fn apply(&mut self, update: SupplierFieldUpdate) {
        match update {
            SupplierFieldUpdate::Code(v) => self.code = v,
            SupplierFieldUpdate::Name(v) => self.name = v,
            SupplierFieldUpdate::Category(v) => self.category = v,
            SupplierFieldUpdate::ContactPerson(v) => self.contact_person = v,
            SupplierFieldUpdate::Phone(v) => self.phone = v,
            SupplierFieldUpdate::Email(v) => self.email = v,
            SupplierFieldUpdate::Address(v) => self.address = v,
            SupplierFieldUpdate::PaymentTerms(v) => self.payment_terms = v,
            SupplierFieldUpdate::LeadTimeDays(v) => self.lead_time_days = v,
            SupplierFieldUpdate::AddMaterial(code) => {
                let code = code.trim().to_string();
                if !code.is_empty() && !self.materials.contains(&code) {
                    self.materials.push(code);
                }
            }
            SupplierFieldUpdate::RemoveMaterial(code) => {
                self.materials.retain(|m| m != &code);
            }
        }
    }

    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        require(&mut violations, "code", &self.code);
        require(&mut violations, "name", &self.name);
        require(&mut violations, "category", &self.category);
        // 邮箱仅做最低限度格式检查
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            violations.push(FieldViolation::new("email", ViolationRule::InvalidFormat));
        }
        violations
    }
}

// ==========================================
// MasterRecord - 提交单元
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MasterRecord {
    Product(ProductForm),
    Material(MaterialForm),
    Supplier(SupplierForm),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MasterFieldUpdate {
    Product(ProductFieldUpdate),
    Material(MaterialFieldUpdate),
    Supplier(SupplierFieldUpdate),
}

impl MasterRecord {
    /// 创建空表单
    pub fn empty(kind: MasterKind) -> Self {
        match kind {
            MasterKind::Product => MasterRecord::Product(ProductForm::default()),
            MasterKind::Material => MasterRecord::Material(MaterialForm::default()),
            MasterKind::Supplier => MasterRecord::Supplier(SupplierForm::default()),
        }
    }

    pub fn kind(&self) -> MasterKind {
        match self {
            MasterRecord::Product(_) => MasterKind::Product,
            MasterRecord::Material(_) => MasterKind::Material,
            MasterRecord::Supplier(_) => MasterKind::Supplier,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            MasterRecord::Product(f) => &f.code,
            MasterRecord::Material(f) => &f.code,
            MasterRecord::Supplier(f) => &f.code,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MasterRecord::Product(f) => &f.name,
            MasterRecord::Material(f) => &f.name,
            MasterRecord::Supplier(f) => &f.name,
        }
    }

    /// 应用字段更新
    ///
    /// # 返回
    /// - true: 已应用
    /// - false: 命令种别与表单种别不一致，忽略
    pub fn apply(&mut self, update: MasterFieldUpdate) -> bool {
        match (self, update) {
            (MasterRecord::Product(f), MasterFieldUpdate::Product(u)) => f.apply(u),
            (MasterRecord::Material(f), MasterFieldUpdate::Material(u)) => f.apply(u),
            (MasterRecord::Supplier(f), MasterFieldUpdate::Supplier(u)) => f.apply(u),
            _ => return false,
        }
        true
    }

    pub fn validate(&self) -> Vec<FieldViolation> {
        match self {
            MasterRecord::Product(f) => f.validate(),
            MasterRecord::Material(f) => f.validate(),
            MasterRecord::Supplier(f) => f.validate(),
        }
    }
}
