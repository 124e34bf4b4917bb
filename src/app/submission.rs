// ==========================================
// 物流バックオフィス - 表单提交状态
// ==========================================
// 职责: 表单提交的状态机、行内消息、可取消执行
// 约束: 取消后不得写入任何结果（仓储与画面状态都不变）
// ==========================================

use std::collections::BTreeMap;
use std::future::Future;

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::validator::FormValidator;
use crate::i18n::{t_in, t_with_args};

/// 表单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
    Invalid,
    Failed,
    Cancelled,
}

/// 画面显示用的提交反馈
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormFeedback {
    pub status: FormStatus,
    pub message: Option<String>,
    pub field_messages: BTreeMap<String, String>,
    pub ack_id: Option<Uuid>,
}

impl FormFeedback {
    pub fn submitting(validator: &FormValidator) -> Self {
        Self {
            status: FormStatus::Submitting,
            message: Some(t_in(validator.locale(), "submit.in_progress")),
            ..Self::default()
        }
    }

    pub fn submitted(validator: &FormValidator, ack_id: Uuid) -> Self {
        Self {
            status: FormStatus::Submitted,
            message: Some(t_in(validator.locale(), "submit.success")),
            field_messages: BTreeMap::new(),
            ack_id: Some(ack_id),
        }
    }

    pub fn cancelled(validator: &FormValidator) -> Self {
        Self {
            status: FormStatus::Cancelled,
            message: Some(t_in(validator.locale(), "submit.cancelled")),
            ..Self::default()
        }
    }

    /// API 错误转为行内消息
    pub fn from_error(validator: &FormValidator, err: ApiError) -> Self {
        let locale = validator.locale();
        match err {
            ApiError::ValidationFailed { message, violations } => Self {
                status: FormStatus::Invalid,
                message: Some(message),
                field_messages: validator.field_messages(&violations),
                ack_id: None,
            },
            ApiError::DuplicateCode(code) => {
                let message = t_with_args(locale, "submit.duplicate", &[("code", &code)]);
                let mut field_messages = BTreeMap::new();
                field_messages.insert("code".to_string(), message.clone());
                Self {
                    status: FormStatus::Invalid,
                    message: Some(message),
                    field_messages,
                    ack_id: None,
                }
            }
            ApiError::Cancelled => Self::cancelled(validator),
            other => {
                tracing::warn!(error = %other, "提交失败");
                Self {
                    status: FormStatus::Failed,
                    message: Some(t_in(locale, "submit.failed")),
                    ..Self::default()
                }
            }
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }
}

/// 可取消地执行 future
///
/// # 返回
/// - Some(output): 正常完成
/// - None: 令牌先被取消，future 已被丢弃
pub async fn run_cancellable<F>(token: &CancellationToken, fut: F) -> Option<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => None,
        output = fut => Some(output),
    }
}
