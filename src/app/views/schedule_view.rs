// ==========================================
// 物流バックオフィス - 出荷予定 画面
// ==========================================
// 职责: 日期窗口、品目检索、展开/折叠、各日合计
// 约束: 窗口内数据生成后只读，合计每次按需计算
// ==========================================

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::schedule_api::{ScheduleApi, ScheduleWindow};
use crate::domain::schedule::ShipmentScheduleItem;
use crate::engine::schedule_rollup::{customer_total_for_date, product_totals_for_dates};

/// 得意先行（展开时显示）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRow {
    pub name: String,
    pub totals: Vec<u64>,
}

/// 品目行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub product_code: String,
    pub product_name: String,
    pub expanded: bool,
    pub totals: Vec<u64>,
    pub row_total: u64,
    pub customers: Vec<CustomerRow>,
}

/// 画面快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSnapshot {
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<ScheduleRow>,
    pub date_totals: Vec<u64>,
    pub grand_total: u64,
}

/// 出荷予定画面
pub struct ShipmentScheduleView {
    api: ScheduleApi,
    days: u32,
    window: ScheduleWindow,
    search_term: String,
    expanded: BTreeSet<String>,
}

impl ShipmentScheduleView {
    /// 挂载: 生成 [start, start + days) 的出荷予定
    pub fn mount(api: ScheduleApi, start: NaiveDate, days: u32) -> ApiResult<Self> {
        let window = api.window(start, days)?;
        info!(start = %start, days = days, "出荷予定画面已挂载");
        Ok(Self {
            api,
            days,
            window,
            search_term: String::new(),
            expanded: BTreeSet::new(),
        })
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.window.dates.first().copied()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.window.dates
    }

    pub fn items(&self) -> &[ShipmentScheduleItem] {
        &self.window.items
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// 检索命中的品目（编码或名称，大小写不敏感）
    pub fn visible_items(&self) -> Vec<&ShipmentScheduleItem> {
        let term = self.search_term.trim().to_lowercase();
        self.window
            .items
            .iter()
            .filter(|item| {
                term.is_empty()
                    || item.product_code.to_lowercase().contains(&term)
                    || item.product_name.to_lowercase().contains(&term)
            })
            .collect()
    }

    // ==========================================
    // 展开 / 折叠
    // ==========================================

    pub fn toggle_expanded(&mut self, product_code: &str) {
        if !self.expanded.remove(product_code) {
            self.expanded.insert(product_code.to_string());
        }
    }

    pub fn expand_all(&mut self) {
        self.expanded = self
            .window
            .items
            .iter()
            .map(|item| item.product_code.clone())
            .collect();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn is_expanded(&self, product_code: &str) -> bool {
        self.expanded.contains(product_code)
    }

    // ==========================================
    // 窗口移动（重新生成，展开状态保留）
    // ==========================================

    pub fn next_window(&mut self) -> ApiResult<()> {
        self.shift(i64::from(self.days))
    }

    pub fn prev_window(&mut self) -> ApiResult<()> {
        self.shift(-i64::from(self.days))
    }

    fn shift(&mut self, offset_days: i64) -> ApiResult<()> {
        let Some(start) = self.start() else {
            return Ok(());
        };
        let start = start + Duration::days(offset_days);
        self.window = self.api.window(start, self.days)?;
        info!(start = %start, "出荷予定窗口已移动");
        Ok(())
    }

    /// 渲染快照（仅检索命中的品目参与合计）
    pub fn snapshot(&self) -> ScheduleSnapshot {
        let dates = &self.window.dates;
        let rows: Vec<ScheduleRow> = self
            .visible_items()
            .into_iter()
            .map(|item| {
                let expanded = self.is_expanded(&item.product_code);
                let totals = product_totals_for_dates(item, dates);
                let customers = if expanded {
                    item.customers
                        .iter()
                        .map(|customer| CustomerRow {
                            name: customer.name.clone(),
                            totals: dates
                                .iter()
                                .map(|d| customer_total_for_date(customer, *d))
                                .collect(),
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                ScheduleRow {
                    product_code: item.product_code.clone(),
                    product_name: item.product_name.clone(),
                    expanded,
                    row_total: totals.iter().sum(),
                    totals,
                    customers,
                }
            })
            .collect();

        let date_totals: Vec<u64> = (0..dates.len())
            .map(|i| rows.iter().map(|row| row.totals[i]).sum())
            .collect();
        let grand_total = date_totals.iter().sum();

        ScheduleSnapshot {
            dates: dates.clone(),
            rows,
            date_totals,
            grand_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    }

    fn view() -> ShipmentScheduleView {
        ShipmentScheduleView::mount(ScheduleApi::new(Some(11)), start(), 7).unwrap()
    }

    #[test]
    fn test_snapshot_totals_are_consistent() {
        let view = view();
        let snapshot = view.snapshot();
        assert_eq!(snapshot.dates.len(), 7);
        assert_eq!(snapshot.rows.len(), view.items().len());
        let row_sum: u64 = snapshot.rows.iter().map(|r| r.row_total).sum();
        assert_eq!(row_sum, snapshot.grand_total);
        assert_eq!(snapshot.grand_total, view.window.grand_total());
    }

    #[test]
    fn test_search_limits_rows() {
        let mut view = view();
        view.set_search_term("mw-500");
        let snapshot = view.snapshot();
        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.rows[0].product_code, "MW-500");

        view.set_search_term("存在しない");
        let snapshot = view.snapshot();
        assert!(snapshot.rows.is_empty());
        assert_eq!(snapshot.grand_total, 0);
    }

    #[test]
    fn test_expand_shows_customer_rows() {
        let mut view = view();
        assert!(view.snapshot().rows.iter().all(|r| r.customers.is_empty()));

        view.toggle_expanded("MW-500");
        let snapshot = view.snapshot();
        let row = &snapshot.rows[0];
        assert!(row.expanded);
        assert!(!row.customers.is_empty());
        for (i, total) in row.totals.iter().enumerate() {
            let customer_sum: u64 = row.customers.iter().map(|c| c.totals[i]).sum();
            assert_eq!(customer_sum, *total);
        }

        view.toggle_expanded("MW-500");
        assert!(!view.is_expanded("MW-500"));
    }

    #[test]
    fn test_window_shift_round_trip() {
        let mut view = view();
        let original = view.snapshot();
        view.expand_all();

        view.next_window().unwrap();
        assert_eq!(view.start(), Some(start() + Duration::days(7)));
        assert!(view.is_expanded("GT-500"));

        view.prev_window().unwrap();
        view.collapse_all();
        assert_eq!(view.snapshot(), original);
    }
}
