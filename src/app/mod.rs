// ==========================================
// 物流バックオフィス - 应用层
// ==========================================
// 职责: 组装仓储与 API，提供各画面的挂载入口
// ==========================================

pub mod state;
pub mod submission;
pub mod views;

// 重导出
pub use state::AppState;
pub use submission::{run_cancellable, FormFeedback, FormStatus};
pub use views::{
    HistorySnapshot, MasterFormView, PickupRequestView, ScheduleSnapshot, ShipmentHistoryView,
    ShipmentScheduleView, ShipmentViewKind,
};
