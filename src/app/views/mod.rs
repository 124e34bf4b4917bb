// ==========================================
// 物流バックオフィス - 画面模型
// ==========================================
// 职责: 各画面的本地状态，渲染本身不在此处
// ==========================================

pub mod master_form_view;
pub mod pickup_view;
pub mod schedule_view;
pub mod shipment_view;

pub use master_form_view::MasterFormView;
pub use pickup_view::PickupRequestView;
pub use schedule_view::{CustomerRow, ScheduleRow, ScheduleSnapshot, ShipmentScheduleView};
pub use shipment_view::{HistorySnapshot, ShipmentHistoryView, ShipmentViewKind};
