// ==========================================
// 物流バックオフィス - 领域类型定义
// ==========================================
// 职责: 出荷状态、筛选条件、主数据种别等枚举
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 出荷状态 (Shipment Status)
// ==========================================
// 画面上显示日文标签，内部使用 snake_case 代码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Shipped,   // 出荷済
    InTransit, // 配送中
    Delivered, // 配達完了
    Returned,  // 返品・キャンセル
}

impl ShipmentStatus {
    /// 全部状态（枚举顺序）
    pub const ALL: [ShipmentStatus; 4] = [
        ShipmentStatus::Shipped,
        ShipmentStatus::InTransit,
        ShipmentStatus::Delivered,
        ShipmentStatus::Returned,
    ];

    /// 画面标签
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::Shipped => "出荷済",
            ShipmentStatus::InTransit => "配送中",
            ShipmentStatus::Delivered => "配達完了",
            ShipmentStatus::Returned => "返品・キャンセル",
        }
    }

    /// 内部代码
    pub fn code(&self) -> &'static str {
        match self {
            ShipmentStatus::Shipped => "shipped",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Returned => "returned",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 状态筛选 (Status Filter)
// ==========================================
// 下拉框取值: "all" 为哨兵值，其余按字符串精确匹配
// 未知取值不做校验，结果为空
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Exact(String),
}

impl StatusFilter {
    /// 下拉框哨兵值
    pub const ALL_SENTINEL: &'static str = "all";

    /// 从下拉框取值解析
    pub fn from_selection(value: &str) -> Self {
        if value == Self::ALL_SENTINEL {
            StatusFilter::All
        } else {
            StatusFilter::Exact(value.to_string())
        }
    }

    /// 精确匹配（标签或代码）
    pub fn matches(&self, status: ShipmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Exact(value) => value == status.label() || value == status.code(),
        }
    }
}

impl From<ShipmentStatus> for StatusFilter {
    fn from(status: ShipmentStatus) -> Self {
        StatusFilter::Exact(status.label().to_string())
    }
}

// ==========================================
// 期间筛选 (Date Range)
// ==========================================
// 以基准日(today)为锚点，闭区间判断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Last7Days,
    Last30Days,
    ThisMonth,
}

impl DateRange {
    /// 从下拉框取值解析，未知取值视为 All
    pub fn from_selection(value: &str) -> Self {
        match value {
            "today" => DateRange::Today,
            "7days" | "last_7_days" => DateRange::Last7Days,
            "30days" | "last_30_days" => DateRange::Last30Days,
            "month" | "this_month" => DateRange::ThisMonth,
            _ => DateRange::All,
        }
    }

    /// 判断日期是否落在区间内
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateRange::All => true,
            DateRange::Today => date == today,
            DateRange::Last7Days => date <= today && date > today - Duration::days(7),
            DateRange::Last30Days => date <= today && date > today - Duration::days(30),
            DateRange::ThisMonth => date.year() == today.year() && date.month() == today.month(),
        }
    }
}

// ==========================================
// 主数据种别 (Master Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MasterKind {
    Product,  // 商品
    Material, // 资材
    Supplier, // 仕入先
}

impl fmt::Display for MasterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasterKind::Product => write!(f, "PRODUCT"),
            MasterKind::Material => write!(f, "MATERIAL"),
            MasterKind::Supplier => write!(f, "SUPPLIER"),
        }
    }
}

// ==========================================
// 单位 (Unit)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    Piece, // 本
    Case,  // c/s
    Kg,
    Liter,
    Sheet, // 枚
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Piece => write!(f, "本"),
            Unit::Case => write!(f, "c/s"),
            Unit::Kg => write!(f, "kg"),
            Unit::Liter => write!(f, "L"),
            Unit::Sheet => write!(f, "枚"),
        }
    }
}

// ==========================================
// 支付条件 (Payment Terms)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentTerms {
    #[default]
    EndOfMonthNextMonth, // 月末締め翌月末払い
    EndOfMonthNextMonth15, // 月末締め翌月15日払い
    CashOnDelivery,      // 代引き
    Prepaid,             // 前払い
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_sentinel_and_exact() {
        assert_eq!(StatusFilter::from_selection("all"), StatusFilter::All);
        let f = StatusFilter::from_selection("配送中");
        assert!(f.matches(ShipmentStatus::InTransit));
        assert!(!f.matches(ShipmentStatus::Shipped));

        // 代码同样可匹配
        assert!(StatusFilter::from_selection("delivered").matches(ShipmentStatus::Delivered));
    }

    #[test]
    fn test_status_filter_unknown_matches_nothing() {
        let f = StatusFilter::from_selection("保留中");
        for status in ShipmentStatus::ALL {
            assert!(!f.matches(status));
        }
        // 大小写不同视为未知
        assert!(!StatusFilter::from_selection("ALL").matches(ShipmentStatus::Shipped));
    }

    #[test]
    fn test_date_range_contains() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();

        assert!(DateRange::Today.contains(today, today));
        assert!(!DateRange::Today.contains(d(3, 14), today));

        assert!(DateRange::Last7Days.contains(d(3, 9), today));
        assert!(!DateRange::Last7Days.contains(d(3, 8), today));
        assert!(!DateRange::Last7Days.contains(d(3, 16), today));

        assert!(DateRange::ThisMonth.contains(d(3, 1), today));
        assert!(!DateRange::ThisMonth.contains(d(2, 29), today));

        assert!(DateRange::All.contains(d(1, 1), today));
        assert_eq!(DateRange::from_selection("bogus"), DateRange::All);
    }
}
