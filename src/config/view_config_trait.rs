// ==========================================
// 物流バックオフィス - 画面配置读取接口
// ==========================================
// 职责: 为各画面提供类型化配置，屏蔽存储细节
// ==========================================

use async_trait::async_trait;
use std::error::Error;
use std::time::Duration;

/// 画面配置读取接口
#[async_trait]
pub trait ViewConfigReader: Send + Sync {
    /// 每页件数（> 0）
    async fn get_page_size(&self) -> Result<usize, Box<dyn Error + Send + Sync>>;

    /// 提交模拟延迟（毫秒）
    async fn get_submit_delay_ms(&self) -> Result<u64, Box<dyn Error + Send + Sync>>;

    /// 出荷予定窗口天数（1..=31）
    async fn get_schedule_window_days(&self) -> Result<u32, Box<dyn Error + Send + Sync>>;

    /// 出荷予定随机种子
    async fn get_schedule_seed(&self) -> Result<Option<u64>, Box<dyn Error + Send + Sync>>;

    /// 界面语言（ja / en）
    async fn get_locale(&self) -> Result<String, Box<dyn Error + Send + Sync>>;

    /// 无法计算时的显示文本
    async fn get_not_available_text(&self) -> Result<String, Box<dyn Error + Send + Sync>>;
}

/// 画面配置（挂载时读取一次）
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub page_size: usize,
    pub submit_delay: Duration,
    pub schedule_window_days: u32,
    pub schedule_seed: Option<u64>,
    pub locale: String,
    pub not_available_text: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            submit_delay: Duration::from_millis(800),
            schedule_window_days: 7,
            schedule_seed: None,
            locale: "ja".to_string(),
            not_available_text: "N/A".to_string(),
        }
    }
}

impl ViewSettings {
    /// 从配置读取器加载
    pub async fn load<C>(reader: &C) -> Result<Self, Box<dyn Error + Send + Sync>>
    where
        C: ViewConfigReader + ?Sized,
    {
        Ok(Self {
            page_size: reader.get_page_size().await?,
            submit_delay: Duration::from_millis(reader.get_submit_delay_ms().await?),
            schedule_window_days: reader.get_schedule_window_days().await?,
            schedule_seed: reader.get_schedule_seed().await?,
            locale: reader.get_locale().await?,
            not_available_text: reader.get_not_available_text().await?,
        })
    }
}
