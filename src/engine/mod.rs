// ==========================================
// 物流バックオフィス - 引擎层
// ==========================================
// 职责: 检索筛选 / 汇总 / 分页 / 出荷予定合计
// 红线: 全部为纯函数，输入不变则输出不变，不持有状态
// ==========================================

pub mod filter;
pub mod paginator;
pub mod schedule_rollup;
pub mod summary;

// 重导出核心函数
pub use filter::{filter_owned, filter_records};
pub use paginator::{paginate, page_info, PageInfo, DEFAULT_PAGE_SIZE};
pub use schedule_rollup::{
    customer_total_for_date, grand_total, product_total_for_date, product_totals_for_dates,
};
pub use summary::{average_unit_price, summarize};
