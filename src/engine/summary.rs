// ==========================================
// 物流バックオフィス - 汇总引擎
// ==========================================
// 输入: 筛选后的记录子序列
// 输出: 件数 / 金额合计 / c/s 合计 / 本数合计 / 平均单价
// 红线: 本数合计为 0 时平均单价为 None，不产生非有限值
// ==========================================

use crate::domain::shipment::{ShipmentHistoryRecord, ShipmentSummary};
use std::borrow::Borrow;

/// 计算汇总卡片
pub fn summarize<R>(records: &[R]) -> ShipmentSummary
where
    R: Borrow<ShipmentHistoryRecord>,
{
    let mut summary = ShipmentSummary::default();
    for record in records {
        let r = <R as Borrow<ShipmentHistoryRecord>>::borrow(record);
        summary.total_shipments += 1;
        summary.total_amount += r.total_amount;
        summary.total_cases += u64::from(r.case_quantity);
        summary.total_pieces += u64::from(r.piece_quantity);
    }
    summary.average_unit_price = average_unit_price(summary.total_amount, summary.total_pieces);
    summary
}

/// 平均单价 = 金额合计 ÷ 本数合计
pub fn average_unit_price(total_amount: u64, total_pieces: u64) -> Option<f64> {
    if total_pieces == 0 {
        return None;
    }
    Some(total_amount as f64 / total_pieces as f64)
}
