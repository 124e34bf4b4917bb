// ==========================================
// 物流バックオフィス - API 层
// ==========================================
// 职责: 组合仓储与引擎，提供画面使用的业务接口
// ==========================================

pub mod error;
pub mod master_api;
pub mod pickup_api;
pub mod schedule_api;
pub mod shipment_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use master_api::{master_unique_key, MasterDataApi};
pub use pickup_api::{next_request_no, PickupApi};
pub use schedule_api::{ScheduleApi, ScheduleWindow, MAX_WINDOW_DAYS};
pub use shipment_api::{ShipmentApi, ShipmentPage};
pub use validator::FormValidator;
