// ==========================================
// 物流バックオフィス - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// 职责: 提供 list / submit 接口，屏蔽数据源细节
// 现状: 无持久化，由内存实现 + 静态 fixture 提供数据
// ==========================================

pub mod error;
pub mod fixtures;
pub mod memory_repo;
pub mod record_repo;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use memory_repo::{InMemoryRepository, UniqueKeyFn};
pub use record_repo::{ListAll, RecordFilter, Repository, SubmitAck};
