// ==========================================
// 物流バックオフィス - パレット回収依頼書 画面
// ==========================================
// 职责: 回收申请单编辑（明细行增删改）与提交
// 约束: unmount / Drop 后进行中的提交被丢弃
// ==========================================

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::api::pickup_api::PickupApi;
use crate::api::validator::FormValidator;
use crate::app::submission::{run_cancellable, FormFeedback, FormStatus};
use crate::domain::pickup::{PalletLine, PalletPickupRequest, PalletType, PickupFieldUpdate};

/// 回收申请单编辑画面
pub struct PickupRequestView {
    api: Arc<PickupApi>,
    validator: FormValidator,
    request: PalletPickupRequest,
    feedback: FormFeedback,
    last_request_no: Option<String>,
    cancellation: CancellationToken,
}

impl PickupRequestView {
    /// 打开空白申请单（预置一行明细）
    pub fn new(api: Arc<PickupApi>, validator: FormValidator) -> Self {
        let mut request = PalletPickupRequest::default();
        request.apply(PickupFieldUpdate::AddLine(PalletLine::default()));
        Self {
            api,
            validator,
            request,
            feedback: FormFeedback::default(),
            last_request_no: None,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn request(&self) -> &PalletPickupRequest {
        &self.request
    }

    pub fn feedback(&self) -> &FormFeedback {
        &self.feedback
    }

    /// 最近一次受理的依頼番号
    pub fn last_request_no(&self) -> Option<&str> {
        self.last_request_no.as_deref()
    }

    pub fn total_pallets(&self) -> u64 {
        self.request.total_pallets()
    }

    pub fn total_by_type(&self, pallet_type: PalletType) -> u64 {
        self.request.total_by_type(pallet_type)
    }

    pub fn is_mounted(&self) -> bool {
        !self.cancellation.is_cancelled()
    }

    pub fn apply(&mut self, update: PickupFieldUpdate) {
        self.request.apply(update);
    }

    pub fn add_line(&mut self) {
        self.apply(PickupFieldUpdate::AddLine(PalletLine::default()));
    }

    pub fn remove_line(&mut self, index: usize) {
        self.apply(PickupFieldUpdate::RemoveLine(index));
    }

    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    pub fn unmount(&mut self) {
        self.cancellation.cancel();
    }

    /// 校验并提交，成功后重置为空白申请单
    pub async fn submit(&mut self) -> FormStatus {
        if !self.is_mounted() {
            return FormStatus::Cancelled;
        }

        self.feedback = FormFeedback::submitting(&self.validator);
        info!(pallets = self.request.total_pallets(), "回收申请提交开始");

        let result = run_cancellable(
            &self.cancellation,
            self.api.submit(self.request.clone(), &self.validator),
        )
        .await;

        self.feedback = match result {
            None => {
                info!("回收申请提交已取消");
                FormFeedback::cancelled(&self.validator)
            }
            Some(Ok((request_no, ack))) => {
                self.last_request_no = Some(request_no);
                self.request = PalletPickupRequest::default();
                self.request.apply(PickupFieldUpdate::AddLine(PalletLine::default()));
                FormFeedback::submitted(&self.validator, ack.id)
            }
            Some(Err(err)) => FormFeedback::from_error(&self.validator, err),
        };
        self.feedback.status
    }
}

impl Drop for PickupRequestView {
    fn drop(&mut self) {
        if self.is_mounted() {
            debug!("回收申请画面已释放");
            self.cancellation.cancel();
        }
    }
}
