// ==========================================
// 物流バックオフィス - 出荷予定 API
// ==========================================
// 职责: 按日期窗口生成出荷予定，并计算品目别 / 全体合计
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::schedule::ShipmentScheduleItem;
use crate::engine::schedule_rollup::{grand_total, product_totals_for_dates};
use crate::repository::fixtures::generate_schedule;

/// 窗口天数上限
pub const MAX_WINDOW_DAYS: u32 = 31;

/// 出荷予定窗口
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleWindow {
    pub dates: Vec<NaiveDate>,
    pub items: Vec<ShipmentScheduleItem>,
}

impl ScheduleWindow {
    /// 品目别各日合计（与 items 同序）
    pub fn product_totals(&self) -> Vec<Vec<u64>> {
        self.items
            .iter()
            .map(|item| product_totals_for_dates(item, &self.dates))
            .collect()
    }

    pub fn grand_total(&self) -> u64 {
        grand_total(&self.items, &self.dates)
    }
}

/// 出荷予定API
#[derive(Debug, Clone, Default)]
pub struct ScheduleApi {
    seed: Option<u64>,
}

impl ScheduleApi {
    /// # 参数
    /// - seed: 随机种子（None 时每次生成不同数据）
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// 生成窗口
    ///
    /// 同一种子下，窗口起始日相同则结果相同
    pub fn window(&self, start: NaiveDate, days: u32) -> ApiResult<ScheduleWindow> {
        if days == 0 || days > MAX_WINDOW_DAYS {
            return Err(ApiError::InvalidInput(format!(
                "窗口天数必须在 1..={} 之间: {}",
                MAX_WINDOW_DAYS, days
            )));
        }
        let dates: Vec<NaiveDate> = (0..days)
            .map(|offset| start + Duration::days(i64::from(offset)))
            .collect();
        let seed = self.seed.map(|s| s.wrapping_add(start.num_days_from_ce() as u64));
        let items = generate_schedule(start, days, seed);
        debug!(start = %start, days = days, products = items.len(), "出荷予定已生成");
        Ok(ScheduleWindow { dates, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    }

    #[test]
    fn test_window_dates_are_consecutive() {
        let window = ScheduleApi::new(Some(7)).window(start(), 7).unwrap();
        assert_eq!(window.dates.len(), 7);
        assert_eq!(window.dates[0], start());
        assert_eq!(window.dates[6].day(), 24);
    }

    #[test]
    fn test_same_seed_same_window() {
        let api = ScheduleApi::new(Some(42));
        let a = api.window(start(), 7).unwrap();
        let b = api.window(start(), 7).unwrap();
        assert_eq!(a.items, b.items);
        assert_eq!(a.grand_total(), b.grand_total());
    }

    #[test]
    fn test_grand_total_equals_sum_of_product_totals() {
        let window = ScheduleApi::new(Some(3)).window(start(), 5).unwrap();
        let sum: u64 = window.product_totals().iter().flatten().sum();
        assert_eq!(sum, window.grand_total());
    }

    #[test]
    fn test_invalid_window_days() {
        let api = ScheduleApi::default();
        assert!(matches!(api.window(start(), 0), Err(ApiError::InvalidInput(_))));
        assert!(matches!(api.window(start(), 32), Err(ApiError::InvalidInput(_))));
    }
}
