// ==========================================
// 物流バックオフィス - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写、快照
// 存储: 内存 key-value（可从 JSON 文件加载）
// 约束: 非法取值回退默认值并记录警告
// ==========================================

use crate::config::view_config_trait::ViewConfigReader;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    /// 每页件数
    pub const PAGE_SIZE: &str = "view.page_size";
    /// 提交模拟延迟（毫秒）
    pub const SUBMIT_DELAY_MS: &str = "form.submit_delay_ms";
    /// 出荷予定窗口天数
    pub const SCHEDULE_WINDOW_DAYS: &str = "schedule.window_days";
    /// 出荷予定随机种子（空=不固定）
    pub const SCHEDULE_SEED: &str = "schedule.seed";
    /// 界面语言
    pub const LOCALE: &str = "ui.locale";
    /// 无法计算时的显示文本
    pub const NOT_AVAILABLE_TEXT: &str = "display.not_available_text";
}

/// 默认配置
const DEFAULTS: &[(&str, &str)] = &[
    (config_keys::PAGE_SIZE, "20"),
    (config_keys::SUBMIT_DELAY_MS, "800"),
    (config_keys::SCHEDULE_WINDOW_DAYS, "7"),
    (config_keys::SCHEDULE_SEED, ""),
    (config_keys::LOCALE, "ja"),
    (config_keys::NOT_AVAILABLE_TEXT, "N/A"),
];

/// 默认配置文件路径（<config_dir>/logistics-backoffice/config.json）
pub fn get_default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logistics-backoffice")
        .join("config.json")
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Clone)]
pub struct ConfigManager {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// 创建仅含默认值的 ConfigManager
    pub fn new() -> Self {
        let values = DEFAULTS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: Arc::new(Mutex::new(values)),
        }
    }

    /// 从 JSON 文件加载（对象形式，值可为字符串/数字/布尔）
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// # 返回
    /// - Ok(ConfigManager): 默认值 + 文件覆写
    /// - Err: 文件读取或解析失败
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let manager = Self::new();
        manager.merge_json(&raw)?;
        tracing::info!(path = %path.display(), "配置文件已加载");
        Ok(manager)
    }

    /// 从默认路径加载，文件不存在时使用默认值
    pub fn load_or_default() -> Self {
        let path = get_default_config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "配置文件不存在,使用默认配置");
            return Self::new();
        }
        match Self::from_json_file(&path) {
            Ok(manager) => manager,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "配置文件加载失败,使用默认配置");
                Self::new()
            }
        }
    }

    fn merge_json(&self, raw: &str) -> Result<(), Box<dyn Error>> {
        let parsed: BTreeMap<String, Value> = serde_json::from_str(raw)?;
        let mut values = self.values.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        for (key, value) in parsed {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            values.insert(key, text);
        }
        Ok(())
    }

    /// 读取配置值
    pub fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let values = self.values.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        Ok(values.get(key).cloned())
    }

    /// 读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 解析数值配置，非法或越界时回退默认值
    fn get_parsed_or_default<T>(&self, key: &str, default: T, valid: impl Fn(&T) -> bool) -> Result<T, Box<dyn Error>>
    where
        T: std::str::FromStr + Copy + std::fmt::Display,
    {
        let raw = self.get_config_or_default(key, &default.to_string())?;
        match raw.trim().parse::<T>() {
            Ok(v) if valid(&v) => Ok(v),
            _ => {
                tracing::warn!(config_key = key, raw_value = %raw, default = %default, "配置值非法,使用默认值");
                Ok(default)
            }
        }
    }

    /// 更新配置
    pub fn update_config(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let mut values = self.values.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        values.insert(key.to_string(), value.to_string());
        tracing::info!(config_key = key, value = value, "配置已更新");
        Ok(())
    }

    /// 获取所有配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let values = self.values.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        Ok(serde_json::to_string(&*values)?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> Result<usize, Box<dyn Error>> {
        let snapshot: BTreeMap<String, String> = serde_json::from_str(snapshot_json)?;
        let count = snapshot.len();
        let mut values = self.values.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        *values = snapshot;
        tracing::info!(count = count, "配置已从快照恢复");
        Ok(count)
    }
}

// ==========================================
// ViewConfigReader Trait 实现
// ==========================================
#[async_trait]
impl ViewConfigReader for ConfigManager {
    async fn get_page_size(&self) -> Result<usize, Box<dyn Error + Send + Sync>> {
        self.get_parsed_or_default(config_keys::PAGE_SIZE, 20usize, |v| *v > 0)
            .map_err(to_send_error)
    }

    async fn get_submit_delay_ms(&self) -> Result<u64, Box<dyn Error + Send + Sync>> {
        self.get_parsed_or_default(config_keys::SUBMIT_DELAY_MS, 800u64, |_| true)
            .map_err(to_send_error)
    }

    async fn get_schedule_window_days(&self) -> Result<u32, Box<dyn Error + Send + Sync>> {
        self.get_parsed_or_default(config_keys::SCHEDULE_WINDOW_DAYS, 7u32, |v| (1..=31).contains(v))
            .map_err(to_send_error)
    }

    async fn get_schedule_seed(&self) -> Result<Option<u64>, Box<dyn Error + Send + Sync>> {
        let raw = self
            .get_config_or_default(config_keys::SCHEDULE_SEED, "")
            .map_err(to_send_error)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<u64>() {
            Ok(seed) => Ok(Some(seed)),
            Err(_) => {
                tracing::warn!(config_key = config_keys::SCHEDULE_SEED, raw_value = %raw, "随机种子非法,不固定种子");
                Ok(None)
            }
        }
    }

    async fn get_locale(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        let value = self
            .get_config_or_default(config_keys::LOCALE, "ja")
            .map_err(to_send_error)?;
        match value.as_str() {
            "ja" | "en" => Ok(value),
            _ => {
                tracing::warn!(config_key = config_keys::LOCALE, raw_value = %value, "不支持的语言,使用 ja");
                Ok("ja".to_string())
            }
        }
    }

    async fn get_not_available_text(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        self.get_config_or_default(config_keys::NOT_AVAILABLE_TEXT, "N/A")
            .map_err(to_send_error)
    }
}

// Box<dyn Error> 不是 Send，转为字符串错误
fn to_send_error(e: Box<dyn Error>) -> Box<dyn Error + Send + Sync> {
    e.to_string().into()
}
