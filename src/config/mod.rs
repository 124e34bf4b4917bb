// ==========================================
// 物流バックオフィス - 配置层
// ==========================================
// 职责: 画面配置管理，支持文件覆写与快照恢复
// ==========================================

pub mod config_manager;
pub mod view_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, get_default_config_path, ConfigManager};
pub use view_config_trait::{ViewConfigReader, ViewSettings};
