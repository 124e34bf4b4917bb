// ==========================================
// 物流バックオフィス - 仓储接口
// ==========================================
// 职责: 定义画面与数据源之间的抽象边界
//   list(filter)   -> 记录集合
//   submit(record) -> 受理回执
// 当前由内存实现（InMemoryRepository）满足，真实 API 层未实现
// ==========================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::master::MasterRecord;
use crate::domain::types::MasterKind;
use crate::repository::error::RepositoryResult;

/// 提交受理回执
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub id: Uuid,
    pub entity: String,
    pub accepted_at: DateTime<Utc>,
}

/// 记录筛选条件
pub trait RecordFilter<R>: Send + Sync {
    fn accepts(&self, record: &R) -> bool;
}

/// 不筛选
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAll;

impl<R> RecordFilter<R> for ListAll {
    fn accepts(&self, _record: &R) -> bool {
        true
    }
}

impl RecordFilter<MasterRecord> for MasterKind {
    fn accepts(&self, record: &MasterRecord) -> bool {
        record.kind() == *self
    }
}

/// 记录仓储
#[async_trait]
pub trait Repository<R>: Send + Sync
where
    R: Send + Sync + 'static,
{
    /// 按条件列出记录（保持数据源顺序）
    async fn list(&self, filter: &dyn RecordFilter<R>) -> RepositoryResult<Vec<R>>;

    /// 提交记录（创建/更新请求）
    async fn submit(&self, record: R) -> RepositoryResult<SubmitAck>;
}
