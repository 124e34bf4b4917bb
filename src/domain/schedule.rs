// ==========================================
// 物流バックオフィス - 出荷予定领域模型
// ==========================================
// 结构: 商品 → 取引先 → 納品先 → 日期别数量
// 生命周期: 画面挂载时生成一次，之后不可变
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 納品先（日期 → 数量）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDestination {
    pub name: String,
    pub quantities: BTreeMap<NaiveDate, u32>,
}

impl ScheduleDestination {
    /// 指定日期数量，缺失视为 0
    pub fn quantity_on(&self, date: NaiveDate) -> u32 {
        self.quantities.get(&date).copied().unwrap_or(0)
    }
}

/// 取引先
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCustomer {
    pub name: String,
    pub destinations: Vec<ScheduleDestination>,
}

/// 出荷予定（商品节点）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentScheduleItem {
    pub product_code: String,
    pub product_name: String,
    pub customers: Vec<ScheduleCustomer>,
}
