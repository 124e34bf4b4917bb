// ==========================================
// 物流バックオフィス - 表单校验器
// ==========================================
// 职责: 将领域校验违规转为本地化的行内消息
// 说明: 校验失败不抛出，作为 ApiError::ValidationFailed 返回给画面
// ==========================================

use std::collections::BTreeMap;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::master::{FieldViolation, ViolationRule};
use crate::i18n::{t_in, t_with_args};

/// 表单校验器
#[derive(Debug, Clone)]
pub struct FormValidator {
    locale: String,
}

impl FormValidator {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 校验结果转换
    ///
    /// # 返回
    /// - Ok(()): 无违规
    /// - Err(ApiError::ValidationFailed): 带汇总消息与违规列表
    pub fn check(&self, violations: Vec<FieldViolation>) -> ApiResult<()> {
        if violations.is_empty() {
            return Ok(());
        }
        tracing::debug!(count = violations.len(), "表单校验未通过");
        Err(ApiError::ValidationFailed {
            message: self.summary(&violations),
            violations,
        })
    }

    /// 汇总消息（1 件时直接显示该消息）
    pub fn summary(&self, violations: &[FieldViolation]) -> String {
        match violations {
            [single] => self.message_for(single),
            _ => t_with_args(
                &self.locale,
                "validation.summary",
                &[("count", &violations.len().to_string())],
            ),
        }
    }

    /// 字段别消息
    pub fn field_messages(&self, violations: &[FieldViolation]) -> BTreeMap<String, String> {
        violations
            .iter()
            .map(|v| (v.field.clone(), self.message_for(v)))
            .collect()
    }

    /// 单条违规的本地化消息
    pub fn message_for(&self, violation: &FieldViolation) -> String {
        let label = self.field_label(&violation.field);
        let key = match violation.rule {
            ViolationRule::Required => "validation.required",
            ViolationRule::MustBePositive => "validation.must_be_positive",
            ViolationRule::InvalidFormat => "validation.invalid_format",
        };
        t_with_args(&self.locale, key, &[("field", &label)])
    }

    /// 字段显示名，"lines[i].quantity" 形式显示为第 i+1 行
    fn field_label(&self, field: &str) -> String {
        if let Some(index) = parse_line_index(field) {
            return t_with_args(
                &self.locale,
                "field.line_quantity",
                &[("index", &(index + 1).to_string())],
            );
        }
        let key = format!("field.{}", field);
        let label = t_in(&self.locale, &key);
        // 未定义的键 rust-i18n 返回带 locale 前缀的键名
        if label.ends_with(&key) {
            field.to_string()
        } else {
            label
        }
    }
}

fn parse_line_index(field: &str) -> Option<usize> {
    field
        .strip_prefix("lines[")?
        .split_once(']')
        .and_then(|(index, _)| index.parse().ok())
}
