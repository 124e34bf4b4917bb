// ==========================================
// 物流バックオフィス - パレット回収依頼書
// ==========================================
// 职责: 托盘回收申请单的数据、明细行与字段更新命令
// 红线: 依頼元会社 / 回収先住所 / 回収日 必填，至少一行且数量 > 0
// ==========================================

use crate::domain::master::{require, FieldViolation, ViolationRule};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PalletType {
    #[default]
    T11, // 1100×1100
    T12, // 1200×1000
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Morning,   // 午前
    Afternoon, // 午後
    #[default]
    Unspecified, // 指定なし
}

/// 明细行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalletLine {
    pub pallet_type: PalletType,
    pub quantity: u32,
    pub remarks: String,
}

/// 回收申请单
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PalletPickupRequest {
    pub request_no: String,

    // ===== 依頼元 =====
    pub requester_company: String,
    pub contact_person: String,
    pub phone: String,

    // ===== 回収 =====
    pub pickup_address: String,
    pub pickup_date: Option<NaiveDate>,
    pub time_slot: TimeSlot,
    pub destination: String, // 返却先倉庫

    pub lines: Vec<PalletLine>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PickupFieldUpdate {
    RequestNo(String),
    RequesterCompany(String),
    ContactPerson(String),
    Phone(String),
    PickupAddress(String),
    PickupDate(Option<NaiveDate>),
    TimeSlot(TimeSlot),
    Destination(String),
    Notes(String),
    AddLine(PalletLine),
    RemoveLine(usize),
    LineType(usize, PalletType),
    LineQuantity(usize, u32),
    LineRemarks(usize, String),
}

impl PalletPickupRequest {
    /// 应用字段更新，越界的行下标忽略
    pub fn apply(&mut self, update: PickupFieldUpdate) {
        match update {
            PickupFieldUpdate::RequestNo(v) => self.request_no = v,
            PickupFieldUpdate::RequesterCompany(v) => self.requester_company = v,
            PickupFieldUpdate::ContactPerson(v) => self.contact_person = v,
            PickupFieldUpdate::Phone(v) => self.phone = v,
            PickupFieldUpdate::PickupAddress(v) => self.pickup_address = v,
            PickupFieldUpdate::PickupDate(v) => self.pickup_date = v,
            PickupFieldUpdate::TimeSlot(v) => self.time_slot = v,
            PickupFieldUpdate::Destination(v) => self.destination = v,
            PickupFieldUpdate::Notes(v) => self.notes = v,
            PickupFieldUpdate::AddLine(line) => self.lines.push(line),
            PickupFieldUpdate::RemoveLine(index) => {
                if index < self.lines.len() {
                    self.lines.remove(index);
                }
            }
            PickupFieldUpdate::LineType(index, v) => {
                if let Some(line) = self.lines.get_mut(index) {
                    line.pallet_type = v;
                }
            }
            PickupFieldUpdate::LineQuantity(index, v) => {
                if let Some(line) = self.lines.get_mut(index) {
                    line.quantity = v;
                }
            }
            PickupFieldUpdate::LineRemarks(index, v) => {
                if let Some(line) = self.lines.get_mut(index) {
                    line.remarks = v;
                }
            }
        }
    }

    /// 托盘合计枚数
    pub fn total_pallets(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// 按托盘种别合计
    pub fn total_by_type(&self, pallet_type: PalletType) -> u64 {
        self.lines
            .iter()
            .filter(|l| l.pallet_type == pallet_type)
            .map(|l| u64::from(l.quantity))
            .sum()
    }

    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        require(&mut violations, "requester_company", &self.requester_company);
        require(&mut violations, "pickup_address", &self.pickup_address);
        if self.pickup_date.is_none() {
            violations.push(FieldViolation::new("pickup_date", ViolationRule::Required));
        }
        if self.lines.is_empty() {
            violations.push(FieldViolation::new("lines", ViolationRule::Required));
        }
        for (index, line) in self.lines.iter().enumerate() {
            if line.quantity == 0 {
                violations.push(FieldViolation::new(
                    &format!("lines[{}].quantity", index),
                    ViolationRule::MustBePositive,
                ));
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(pallet_type: PalletType, quantity: u32) -> PalletLine {
        PalletLine {
            pallet_type,
            quantity,
            remarks: String::new(),
        }
    }

    #[test]
    fn test_line_commands_and_totals() {
        let mut req = PalletPickupRequest::default();
        req.apply(PickupFieldUpdate::AddLine(line(PalletType::T11, 10)));
        req.apply(PickupFieldUpdate::AddLine(line(PalletType::T12, 4)));
        req.apply(PickupFieldUpdate::AddLine(line(PalletType::T11, 6)));
        assert_eq!(req.total_pallets(), 20);
        assert_eq!(req.total_by_type(PalletType::T11), 16);

        req.apply(PickupFieldUpdate::LineQuantity(1, 5));
        req.apply(PickupFieldUpdate::RemoveLine(0));
        assert_eq!(req.lines.len(), 2);
        assert_eq!(req.total_pallets(), 11);

        // 越界下标不生效
        req.apply(PickupFieldUpdate::RemoveLine(9));
        req.apply(PickupFieldUpdate::LineQuantity(9, 100));
        assert_eq!(req.total_pallets(), 11);
    }

    #[test]
    fn test_validate_requires_header_and_lines() {
        let req = PalletPickupRequest::default();
        let fields: Vec<_> = req.validate().into_iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec!["requester_company", "pickup_address", "pickup_date", "lines"]
        );
    }

    #[test]
    fn test_validate_zero_quantity_line() {
        let mut req = PalletPickupRequest {
            requester_company: "東洋飲料株式会社".to_string(),
            pickup_address: "埼玉県川口市".to_string(),
            pickup_date: NaiveDate::from_ymd_opt(2024, 3, 20),
            ..Default::default()
        };
        req.apply(PickupFieldUpdate::AddLine(line(PalletType::T11, 0)));

        let violations = req.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "lines[0].quantity");
        assert_eq!(violations[0].rule, ViolationRule::MustBePositive);
    }
}
