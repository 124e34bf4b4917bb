// ==========================================
// 物流バックオフィス - マスタ API
// ==========================================
// 职责: 商品 / 資材 / 仕入先 主数据的校验与提交
// 红线: 校验未通过的记录不进入仓储
// ==========================================

use std::sync::Arc;

use tracing::{info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::FormValidator;
use crate::domain::master::MasterRecord;
use crate::domain::types::MasterKind;
use crate::repository::error::RepositoryError;
use crate::repository::record_repo::{Repository, SubmitAck};

/// 主数据API
pub struct MasterDataApi {
    repo: Arc<dyn Repository<MasterRecord>>,
}

impl MasterDataApi {
    pub fn new(repo: Arc<dyn Repository<MasterRecord>>) -> Self {
        Self { repo }
    }

    /// 按种别列出已登録的主数据
    pub async fn list(&self, kind: MasterKind) -> ApiResult<Vec<MasterRecord>> {
        Ok(self.repo.list(&kind).await?)
    }

    /// 校验并提交
    ///
    /// # 参数
    /// - record: 表单内容
    /// - validator: 决定行内消息的语言
    ///
    /// # 返回
    /// - Ok(SubmitAck): 已受理
    /// - Err(ApiError::ValidationFailed): 必填项缺失等
    /// - Err(ApiError::DuplicateCode): 编码已存在
    /// - Err(ApiError::SubmissionFailed): 模拟通信异常
    #[instrument(skip(self, record, validator), fields(kind = %record.kind(), code = %record.code()))]
    pub async fn submit(
        &self,
        record: MasterRecord,
        validator: &FormValidator,
    ) -> ApiResult<SubmitAck> {
        validator.check(record.validate())?;

        let code = record.code().trim().to_string();
        let ack = self.repo.submit(record).await.map_err(|e| match e {
            RepositoryError::UniqueConstraintViolation(_) => ApiError::DuplicateCode(code.clone()),
            other => ApiError::from(other),
        })?;

        info!(ack_id = %ack.id, "主数据已登録");
        Ok(ack)
    }
}

/// 主数据唯一键: 种别 + 编码
pub fn master_unique_key(record: &MasterRecord) -> String {
    format!("{}:{}", record.kind(), record.code().trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::master::{MasterFieldUpdate, ProductFieldUpdate};
    use crate::repository::fixtures::master_fixture;
    use crate::repository::memory_repo::InMemoryRepository;

    fn product(code: &str) -> MasterRecord {
        let mut record = MasterRecord::empty(MasterKind::Product);
        for update in [
            ProductFieldUpdate::Code(code.to_string()),
            ProductFieldUpdate::Name("緑茶 2L".to_string()),
            ProductFieldUpdate::Category("飲料".to_string()),
        ] {
            assert!(record.apply(MasterFieldUpdate::Product(update)));
        }
        record
    }

    fn api() -> (MasterDataApi, Arc<InMemoryRepository<MasterRecord>>) {
        let repo = Arc::new(
            InMemoryRepository::new("MasterRecord", master_fixture())
                .with_unique_key(master_unique_key),
        );
        (MasterDataApi::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_submit_valid_product() {
        let (api, repo) = api();
        let ack = api
            .submit(product("GT-2L"), &FormValidator::new("ja"))
            .await
            .unwrap();
        assert_eq!(ack.entity, "MasterRecord");
        assert_eq!(repo.len().unwrap(), 4);
        assert_eq!(api.list(MasterKind::Product).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_invalid_is_not_recorded() {
        let (api, repo) = api();
        let result = api
            .submit(MasterRecord::empty(MasterKind::Supplier), &FormValidator::new("ja"))
            .await;
        assert!(matches!(
            result,
            Err(ApiError::ValidationFailed { ref violations, .. }) if violations.len() == 3
        ));
        assert_eq!(repo.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_code_rejected() {
        let (api, repo) = api();
        let result = api.submit(product(" MW-500 "), &FormValidator::new("ja")).await;
        assert!(matches!(result, Err(ApiError::DuplicateCode(code)) if code == "MW-500"));
        assert_eq!(repo.len().unwrap(), 3);
    }

    #[test]
    fn test_unique_key_separates_kinds() {
        let product = product("SUP-001");
        assert_eq!(master_unique_key(&product), "PRODUCT:SUP-001");
    }
}
