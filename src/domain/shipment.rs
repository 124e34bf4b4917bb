// ==========================================
// 物流バックオフィス - 出荷领域模型
// ==========================================
// 职责: 出荷履历记录、检索条件、汇总结果
// 生命周期: 画面挂载时由 fixture 构造，之后只读
// ==========================================

use crate::domain::types::{DateRange, ShipmentStatus, StatusFilter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ShipmentHistoryRecord - 出荷履历记录
// ==========================================
// 金额单位: 円（整数）
// 约定: total_amount ≈ unit_price × piece_quantity，不强制
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentHistoryRecord {
    pub id: String,

    // ===== 商品 =====
    pub product_code: String,
    pub product_name: String,

    // ===== 伝票番号 =====
    pub delivery_no: String, // 納品書番号
    pub order_no: String,    // 受注番号

    // ===== 数量（两种单位）=====
    pub case_quantity: u32,  // c/s
    pub piece_quantity: u32, // 本

    // ===== 日期 =====
    pub shipment_date: NaiveDate,
    pub delivery_date: NaiveDate,

    // ===== 配送 =====
    pub destination: String,
    pub carrier: String,
    pub counterparty_name: String, // 取引先名（非正规化）

    // ===== 金额 =====
    pub unit_price: u64,
    pub total_amount: u64,

    pub status: ShipmentStatus,
}

impl ShipmentHistoryRecord {
    /// 按单价×本数计算的理论金额
    pub fn expected_amount(&self) -> u64 {
        self.unit_price * u64::from(self.piece_quantity)
    }

    /// 金额偏差（实际 - 理论），一致时为 0
    pub fn amount_discrepancy(&self) -> i64 {
        self.total_amount as i64 - self.expected_amount() as i64
    }

    /// 参与自由检索的文本字段
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            &self.product_name,
            &self.product_code,
            &self.delivery_no,
            &self.order_no,
            &self.destination,
        ]
    }
}

// ==========================================
// ShipmentQuery - 检索条件
// ==========================================
// 自由词: 大小写不敏感，任一字段包含即命中
// 状态: All 或精确匹配
// 期间: 以 reference_date 为基准，默认不限
// 取引先: 画面范围（完全一致），不参与自由检索
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentQuery {
    pub term: String,
    pub status: StatusFilter,
    pub date_range: DateRange,
    pub reference_date: Option<NaiveDate>,
    pub counterparty: Option<String>,
}

impl ShipmentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_date_range(mut self, range: DateRange, reference_date: NaiveDate) -> Self {
        self.date_range = range;
        self.reference_date = Some(reference_date);
        self
    }

    /// 限定到单一取引先
    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }
}

// ==========================================
// ShipmentSummary - 汇总卡片
// ==========================================
// average_unit_price: total_pieces 为 0 时为 None
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShipmentSummary {
    pub total_shipments: usize,
    pub total_amount: u64,
    pub total_cases: u64,
    pub total_pieces: u64,
    pub average_unit_price: Option<f64>,
}

impl ShipmentSummary {
    /// 平均单价显示文本
    pub fn average_unit_price_text(&self, not_available: &str) -> String {
        match self.average_unit_price {
            Some(avg) => format!("{:.1}", avg),
            None => not_available.to_string(),
        }
    }
}
