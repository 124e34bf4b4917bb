// ==========================================
// 物流バックオフィス - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换Repository错误为画面可显示的错误
// 说明: 画面层不向上抛出，统一转为行内消息
// ==========================================

use crate::domain::master::FieldViolation;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 必填项缺失等表单校验失败
    #[error("表单校验失败: {message}")]
    ValidationFailed {
        message: String,
        violations: Vec<FieldViolation>,
    },

    // ==========================================
    // 提交错误
    // ==========================================
    #[error("编码重复: {0}")]
    DuplicateCode(String),

    #[error("提交失败: {0}")]
    SubmissionFailed(String),

    #[error("提交已取消")]
    Cancelled,

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("数据访问错误: {0}")]
    DataAccessError(String),

    #[error("导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueConstraintViolation(key) => ApiError::DuplicateCode(key),
            RepositoryError::LockError(msg) => {
                ApiError::DataAccessError(format!("数据锁获取失败: {}", msg))
            }
            RepositoryError::SubmissionRejected(msg) => ApiError::SubmissionFailed(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
