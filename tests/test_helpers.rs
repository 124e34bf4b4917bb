// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试用配置、应用状态、临时配置文件
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use logistics_backoffice::app::AppState;
use logistics_backoffice::config::{config_keys, ConfigManager};
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 期间筛选基准日（fixture 的最新出荷日）
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// 创建测试配置（固定种子、指定提交延迟）
pub fn test_config(submit_delay_ms: u64) -> ConfigManager {
    let config = ConfigManager::new();
    config
        .update_config(config_keys::SUBMIT_DELAY_MS, &submit_delay_ms.to_string())
        .unwrap();
    config.update_config(config_keys::SCHEDULE_SEED, "20240318").unwrap();
    config
}

/// 创建测试用 AppState
pub async fn test_state(submit_delay_ms: u64) -> AppState {
    logistics_backoffice::logging::init_test();
    AppState::new(&test_config(submit_delay_ms))
        .await
        .expect("Failed to create AppState")
}

/// 写出临时 JSON 配置文件
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn write_config_file(json: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}
