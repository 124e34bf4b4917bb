// ==========================================
// 物流バックオフィス - 核心库
// ==========================================
// 范围: 出荷一覧 / 出荷履历 / 出荷予定 / マスタ登録 / パレット回収依頼 的画面核心
// 数据: 静态 fixture + 内存仓储，无持久化
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - list / submit 接口
pub mod repository;

// 引擎层 - 筛选 / 汇总 / 分页 / 合计
pub mod engine;

// 配置层 - 画面配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 画面状态
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DateRange, MasterKind, ShipmentStatus, StatusFilter};

// 领域实体
pub use domain::{
    MasterRecord, PalletPickupRequest, ShipmentHistoryRecord, ShipmentQuery,
    ShipmentScheduleItem, ShipmentSummary,
};

// 引擎
pub use engine::{filter_records, paginate, product_total_for_date, summarize, PageInfo};

// API
pub use api::{ApiError, ApiResult, MasterDataApi, PickupApi, ScheduleApi, ShipmentApi};

// 应用
pub use app::{AppState, FormStatus};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "物流バックオフィス";
