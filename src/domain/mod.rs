// ==========================================
// 物流バックオフィス - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、字段更新命令
// 红线: 不含数据访问逻辑，不含筛选/汇总逻辑
// ==========================================

pub mod master;
pub mod pickup;
pub mod schedule;
pub mod shipment;
pub mod types;

// 重导出核心类型
pub use master::{
    FieldViolation, MasterFieldUpdate, MasterRecord, MaterialFieldUpdate, MaterialForm,
    ProductFieldUpdate, ProductForm, SupplierFieldUpdate, SupplierForm, ViolationRule,
};
pub use pickup::{PalletLine, PalletPickupRequest, PalletType, PickupFieldUpdate, TimeSlot};
pub use schedule::{ScheduleCustomer, ScheduleDestination, ShipmentScheduleItem};
pub use shipment::{ShipmentHistoryRecord, ShipmentQuery, ShipmentSummary};
pub use types::{DateRange, MasterKind, PaymentTerms, ShipmentStatus, StatusFilter, Unit};
