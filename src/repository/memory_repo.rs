// ==========================================
// 物流バックオフィス - 内存仓储
// ==========================================
// 职责: 以静态 fixture 为初始数据的 Repository 实现
// 模拟: 提交前固定延迟 / 下一次提交失败注入 / 唯一键冲突
// 约束: 锁不跨越 await 持有
// ==========================================

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::record_repo::{RecordFilter, Repository, SubmitAck};

/// 唯一键提取函数
pub type UniqueKeyFn<R> = fn(&R) -> String;

/// 内存仓储
pub struct InMemoryRepository<R> {
    entity: &'static str,
    records: RwLock<Vec<R>>,
    latency: Duration,
    fail_next: AtomicBool,
    unique_key: Option<UniqueKeyFn<R>>,
}

impl<R> InMemoryRepository<R>
where
    R: Clone + Send + Sync + 'static,
{
    /// 创建内存仓储
    ///
    /// # 参数
    /// - entity: 实体名（日志/回执用）
    /// - records: 初始数据
    pub fn new(entity: &'static str, records: Vec<R>) -> Self {
        Self {
            entity,
            records: RwLock::new(records),
            latency: Duration::ZERO,
            fail_next: AtomicBool::new(false),
            unique_key: None,
        }
    }

    /// 设置模拟网络延迟
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// 设置唯一键（提交时检查重复）
    pub fn with_unique_key(mut self, key: UniqueKeyFn<R>) -> Self {
        self.unique_key = Some(key);
        self
    }

    /// 让下一次提交失败（模拟通信异常）
    pub fn fail_next_submission(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// 当前记录数
    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.records.read()?.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    /// 全部记录快照
    pub fn snapshot(&self) -> RepositoryResult<Vec<R>> {
        Ok(self.records.read()?.clone())
    }
}

#[async_trait]
impl<R> Repository<R> for InMemoryRepository<R>
where
    R: Clone + Send + Sync + 'static,
{
    async fn list(&self, filter: &dyn RecordFilter<R>) -> RepositoryResult<Vec<R>> {
        let records = self.records.read()?;
        let result: Vec<R> = records.iter().filter(|r| filter.accepts(r)).cloned().collect();
        debug!(
            entity = self.entity,
            total = records.len(),
            matched = result.len(),
            "内存仓储查询"
        );
        Ok(result)
    }

    async fn submit(&self, record: R) -> RepositoryResult<SubmitAck> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.fail_next.swap(false, Ordering::SeqCst) {
            warn!(entity = self.entity, "模拟提交失败");
            return Err(RepositoryError::SubmissionRejected(format!(
                "{} 提交失败（模拟通信异常）",
                self.entity
            )));
        }

        let mut records = self.records.write()?;
        if let Some(key_fn) = self.unique_key {
            let key = key_fn(&record);
            if records.iter().any(|r| key_fn(r) == key) {
                warn!(entity = self.entity, key = %key, "唯一键冲突");
                return Err(RepositoryError::UniqueConstraintViolation(key));
            }
        }
        records.push(record);

        let ack = SubmitAck {
            id: Uuid::new_v4(),
            entity: self.entity.to_string(),
            accepted_at: Utc::now(),
        };
        info!(entity = self.entity, ack_id = %ack.id, total = records.len(), "提交已受理");
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::record_repo::ListAll;

    struct Even;

    impl RecordFilter<u32> for Even {
        fn accepts(&self, record: &u32) -> bool {
            record % 2 == 0
        }
    }

    #[tokio::test]
    async fn test_list_preserves_order() {
        let repo = InMemoryRepository::new("Number", vec![5u32, 2, 8, 3, 4]);
        assert_eq!(repo.list(&ListAll).await.unwrap(), vec![5, 2, 8, 3, 4]);
        assert_eq!(repo.list(&Even).await.unwrap(), vec![2, 8, 4]);
    }

    #[tokio::test]
    async fn test_submit_appends_and_acks() {
        let repo = InMemoryRepository::new("Number", Vec::<u32>::new());
        let ack = repo.submit(7).await.unwrap();
        assert_eq!(ack.entity, "Number");
        assert_eq!(repo.snapshot().unwrap(), vec![7]);
    }

    #[tokio::test]
    async fn test_fail_next_submission_only_once() {
        let repo = InMemoryRepository::new("Number", Vec::<u32>::new());
        repo.fail_next_submission();
        assert!(matches!(
            repo.submit(1).await,
            Err(RepositoryError::SubmissionRejected(_))
        ));
        assert!(repo.is_empty().unwrap());
        assert!(repo.submit(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_unique_key_rejects_duplicates() {
        let repo = InMemoryRepository::new("Number", vec![1u32])
            .with_unique_key(|n: &u32| n.to_string());
        assert!(matches!(
            repo.submit(1).await,
            Err(RepositoryError::UniqueConstraintViolation(key)) if key == "1"
        ));
        assert!(repo.submit(2).await.is_ok());
        assert_eq!(repo.len().unwrap(), 2);
    }
}
