// ==========================================
// 物流バックオフィス - 检索筛选引擎
// ==========================================
// 输入: 记录集合 + ShipmentQuery
// 输出: 保持原顺序的子序列（不排序，不分页）
// 规则:
//   1. 自由词大小写不敏感，任一检索字段包含即命中，空词全部命中
//   2. 状态为 All 或精确匹配
//   3. 期间按 shipment_date 判断（未给基准日时不限）
//   4. 取引先范围完全一致（未指定时不限）
// ==========================================

use crate::domain::shipment::{ShipmentHistoryRecord, ShipmentQuery};
use crate::domain::types::DateRange;
use crate::repository::record_repo::RecordFilter;

/// 单条记录是否命中检索条件
pub fn matches(record: &ShipmentHistoryRecord, query: &ShipmentQuery) -> bool {
    matches_term(record, &normalize_term(&query.term))
        && query.status.matches(record.status)
        && matches_date(record, query)
        && matches_counterparty(record, query)
}

impl RecordFilter<ShipmentHistoryRecord> for ShipmentQuery {
    fn accepts(&self, record: &ShipmentHistoryRecord) -> bool {
        matches(record, self)
    }
}

/// 筛选记录，保持原顺序
pub fn filter_records<'a>(
    records: &'a [ShipmentHistoryRecord],
    query: &ShipmentQuery,
) -> Vec<&'a ShipmentHistoryRecord> {
    let term = normalize_term(&query.term);
    records
        .iter()
        .filter(|r| {
            matches_term(r, &term)
                && query.status.matches(r.status)
                && matches_date(r, query)
                && matches_counterparty(r, query)
        })
        .collect()
}

/// 筛选并克隆结果（供仓储层返回所有权数据）
pub fn filter_owned(records: &[ShipmentHistoryRecord], query: &ShipmentQuery) -> Vec<ShipmentHistoryRecord> {
    filter_records(records, query).into_iter().cloned().collect()
}

// 不做 trim: 空白也是检索内容
fn normalize_term(term: &str) -> String {
    term.to_lowercase()
}

fn matches_term(record: &ShipmentHistoryRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

fn matches_date(record: &ShipmentHistoryRecord, query: &ShipmentQuery) -> bool {
    match (query.date_range, query.reference_date) {
        (DateRange::All, _) | (_, None) => true,
        (range, Some(today)) => range.contains(record.shipment_date, today),
    }
}

fn matches_counterparty(record: &ShipmentHistoryRecord, query: &ShipmentQuery) -> bool {
    query
        .counterparty
        .as_deref()
        .map_or(true, |name| record.counterparty_name == name)
}
