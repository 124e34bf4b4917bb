// ==========================================
// 物流バックオフィス - マスタ登録 画面
// ==========================================
// 职责: 商品 / 資材 / 仕入先 登録表单的本地状态与提交
// 生命周期: 空表单创建 → 字段更新 → 校验 → 模拟延迟提交 → 清空
// 约束: unmount / Drop 后进行中的提交被丢弃，结果不写入
// ==========================================

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::api::master_api::MasterDataApi;
use crate::api::validator::FormValidator;
use crate::app::submission::{run_cancellable, FormFeedback, FormStatus};
use crate::domain::master::{MasterFieldUpdate, MasterRecord};
use crate::domain::types::MasterKind;

/// 主数据登録画面
pub struct MasterFormView {
    api: Arc<MasterDataApi>,
    validator: FormValidator,
    record: MasterRecord,
    feedback: FormFeedback,
    cancellation: CancellationToken,
}

impl MasterFormView {
    pub fn new(kind: MasterKind, api: Arc<MasterDataApi>, validator: FormValidator) -> Self {
        debug!(kind = %kind, "主数据表单已打开");
        Self {
            api,
            validator,
            record: MasterRecord::empty(kind),
            feedback: FormFeedback::default(),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn kind(&self) -> MasterKind {
        self.record.kind()
    }

    pub fn record(&self) -> &MasterRecord {
        &self.record
    }

    pub fn feedback(&self) -> &FormFeedback {
        &self.feedback
    }

    pub fn is_mounted(&self) -> bool {
        !self.cancellation.is_cancelled()
    }

    /// 应用字段更新，种别不一致时返回 false
    pub fn apply(&mut self, update: MasterFieldUpdate) -> bool {
        let applied = self.record.apply(update);
        if !applied {
            warn!(kind = %self.kind(), "字段更新种别不一致,已忽略");
        }
        applied
    }

    /// 取消句柄（画面离开时触发）
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// 离开画面
    pub fn unmount(&mut self) {
        self.cancellation.cancel();
    }

    /// 校验并提交
    ///
    /// 成功时表单清空；校验失败 / 提交失败时保留输入并显示行内消息；
    /// 取消时仓储与表单都不变
    pub async fn submit(&mut self) -> FormStatus {
        if !self.is_mounted() {
            return FormStatus::Cancelled;
        }

        self.feedback = FormFeedback::submitting(&self.validator);
        let kind = self.kind();
        info!(kind = %kind, code = %self.record.code(), "主数据提交开始");

        let result = run_cancellable(
            &self.cancellation,
            self.api.submit(self.record.clone(), &self.validator),
        )
        .await;

        self.feedback = match result {
            None => {
                info!(kind = %kind, "主数据提交已取消");
                FormFeedback::cancelled(&self.validator)
            }
            Some(Ok(ack)) => {
                self.record = MasterRecord::empty(kind);
                FormFeedback::submitted(&self.validator, ack.id)
            }
            Some(Err(err)) => FormFeedback::from_error(&self.validator, err),
        };
        self.feedback.status
    }
}

impl Drop for MasterFormView {
    fn drop(&mut self) {
        if self.is_mounted() {
            debug!(kind = %self.kind(), "主数据表单已释放");
            self.cancellation.cancel();
        }
    }
}
