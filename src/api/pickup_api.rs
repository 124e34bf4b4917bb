// ==========================================
// 物流バックオフィス - パレット回収 API
// ==========================================
// 职责: 回收申请单的校验、依頼番号分配与提交
// ==========================================

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::api::validator::FormValidator;
use crate::domain::pickup::PalletPickupRequest;
use crate::repository::record_repo::{ListAll, Repository, SubmitAck};

/// 回收申请API
pub struct PickupApi {
    repo: Arc<dyn Repository<PalletPickupRequest>>,
}

impl PickupApi {
    pub fn new(repo: Arc<dyn Repository<PalletPickupRequest>>) -> Self {
        Self { repo }
    }

    /// 已受理的申请单
    pub async fn list(&self) -> ApiResult<Vec<PalletPickupRequest>> {
        Ok(self.repo.list(&ListAll).await?)
    }

    /// 校验并提交
    ///
    /// 依頼番号为空时自动分配，返回实际提交的依頼番号
    pub async fn submit(
        &self,
        mut request: PalletPickupRequest,
        validator: &FormValidator,
    ) -> ApiResult<(String, SubmitAck)> {
        validator.check(request.validate())?;

        if request.request_no.trim().is_empty() {
            request.request_no = next_request_no(Utc::now().date_naive());
        }
        let request_no = request.request_no.clone();
        let pallets = request.total_pallets();

        let ack = self.repo.submit(request).await?;
        info!(request_no = %request_no, pallets = pallets, ack_id = %ack.id, "回收申请已受理");
        Ok((request_no, ack))
    }
}

/// 依頼番号: PR-YYYYMMDD-xxxxxx
pub fn next_request_no(date: NaiveDate) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("PR-{}-{}", date.format("%Y%m%d"), &suffix[..6].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::domain::pickup::{PalletLine, PalletType, PickupFieldUpdate};
    use crate::repository::memory_repo::InMemoryRepository;

    fn filled_request() -> PalletPickupRequest {
        let mut request = PalletPickupRequest::default();
        request.apply(PickupFieldUpdate::RequesterCompany("関東食品商事".to_string()));
        request.apply(PickupFieldUpdate::PickupAddress("東京都江東区新木場1-1".to_string()));
        request.apply(PickupFieldUpdate::PickupDate(NaiveDate::from_ymd_opt(2024, 3, 20)));
        request.apply(PickupFieldUpdate::AddLine(PalletLine {
            pallet_type: PalletType::T11,
            quantity: 30,
            remarks: String::new(),
        }));
        request
    }

    #[test]
    fn test_request_no_format() {
        let no = next_request_no(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        assert!(no.starts_with("PR-20240320-"));
        assert_eq!(no.len(), "PR-20240320-".len() + 6);
    }

    #[tokio::test]
    async fn test_submit_assigns_request_no() {
        let repo = Arc::new(InMemoryRepository::new("PalletPickupRequest", Vec::new()));
        let api = PickupApi::new(repo.clone());

        let (no, _ack) = api
            .submit(filled_request(), &FormValidator::new("ja"))
            .await
            .unwrap();
        assert!(no.starts_with("PR-"));

        let stored = api.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].request_no, no);
    }

    #[tokio::test]
    async fn test_submit_keeps_given_request_no() {
        let api = PickupApi::new(Arc::new(InMemoryRepository::new("PalletPickupRequest", Vec::new())));
        let mut request = filled_request();
        request.apply(PickupFieldUpdate::RequestNo("PR-MANUAL-1".to_string()));

        let (no, _) = api.submit(request, &FormValidator::new("ja")).await.unwrap();
        assert_eq!(no, "PR-MANUAL-1");
    }

    #[tokio::test]
    async fn test_submit_zero_quantity_rejected() {
        let repo = Arc::new(InMemoryRepository::new("PalletPickupRequest", Vec::new()));
        let api = PickupApi::new(repo.clone());
        let mut request = filled_request();
        request.apply(PickupFieldUpdate::LineQuantity(0, 0));

        let result = api.submit(request, &FormValidator::new("en")).await;
        match result {
            Err(ApiError::ValidationFailed { message, .. }) => {
                assert_eq!(message, "Quantity of line 1 must be 1 or more");
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
        assert!(repo.is_empty().unwrap());
    }
}
