// ==========================================
// 物流バックオフィス - 出荷予定合计引擎
// ==========================================
// 规则: 商品合计(date) = Σ取引先 Σ納品先 quantity(date)，缺失按 0
// 红线: 纯函数，不修改输入结构
// ==========================================

use crate::domain::schedule::{ScheduleCustomer, ShipmentScheduleItem};
use chrono::NaiveDate;

/// 取引先在指定日期的合计
pub fn customer_total_for_date(customer: &ScheduleCustomer, date: NaiveDate) -> u64 {
    customer
        .destinations
        .iter()
        .map(|d| u64::from(d.quantity_on(date)))
        .sum()
}

/// 商品在指定日期的出荷合计
pub fn product_total_for_date(item: &ShipmentScheduleItem, date: NaiveDate) -> u64 {
    item.customers
        .iter()
        .map(|c| customer_total_for_date(c, date))
        .sum()
}

/// 商品按日期合计（顺序与 dates 一致）
pub fn product_totals_for_dates(item: &ShipmentScheduleItem, dates: &[NaiveDate]) -> Vec<u64> {
    dates
        .iter()
        .map(|d| product_total_for_date(item, *d))
        .collect()
}

/// 全商品在日期集合上的总计
pub fn grand_total(items: &[ShipmentScheduleItem], dates: &[NaiveDate]) -> u64 {
    items
        .iter()
        .flat_map(|item| dates.iter().map(move |d| product_total_for_date(item, *d)))
        .sum()
}
