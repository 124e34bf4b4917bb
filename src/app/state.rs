// ==========================================
// 物流バックオフィス - 应用状态
// ==========================================
// 职责: 管理仓储与 API 实例，提供画面挂载入口
// 说明: 各画面持有自己的本地状态，这里只共享仓储与配置
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::{
    master_unique_key, ApiResult, FormValidator, MasterDataApi, PickupApi, ScheduleApi,
    ShipmentApi,
};
use crate::app::views::{
    MasterFormView, PickupRequestView, ShipmentHistoryView, ShipmentScheduleView,
    ShipmentViewKind,
};
use crate::config::{ConfigManager, ViewSettings};
use crate::domain::master::MasterRecord;
use crate::domain::pickup::PalletPickupRequest;
use crate::domain::shipment::ShipmentHistoryRecord;
use crate::domain::types::MasterKind;
use crate::repository::fixtures::{master_fixture, shipment_history_fixture, shipment_list_fixture};
use crate::repository::memory_repo::InMemoryRepository;

/// 应用状态
pub struct AppState {
    /// 画面配置（启动时读取一次）
    pub settings: ViewSettings,

    /// 出荷一覧 API（8 件 fixture）
    pub shipment_list_api: Arc<ShipmentApi>,

    /// 出荷履历 API（5 件 fixture）
    pub shipment_history_api: Arc<ShipmentApi>,

    pub master_api: Arc<MasterDataApi>,
    pub pickup_api: Arc<PickupApi>,
    pub schedule_api: ScheduleApi,

    /// 主数据仓储（测试与演示中检查提交结果）
    pub master_repo: Arc<InMemoryRepository<MasterRecord>>,

    /// 回收申请仓储
    pub pickup_repo: Arc<InMemoryRepository<PalletPickupRequest>>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config: 配置管理器
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    pub async fn new(config: &ConfigManager) -> Result<Self, String> {
        let settings = ViewSettings::load(config)
            .await
            .map_err(|e| format!("无法读取画面配置: {}", e))?;
        tracing::info!(
            page_size = settings.page_size,
            submit_delay_ms = settings.submit_delay.as_millis() as u64,
            locale = %settings.locale,
            "初始化AppState"
        );

        // ==========================================
        // 初始化Repository层
        // ==========================================
        let shipment_list_repo: Arc<InMemoryRepository<ShipmentHistoryRecord>> =
            Arc::new(InMemoryRepository::new("ShipmentList", shipment_list_fixture()));
        let shipment_history_repo: Arc<InMemoryRepository<ShipmentHistoryRecord>> =
            Arc::new(InMemoryRepository::new("ShipmentHistory", shipment_history_fixture()));
        let master_repo = Arc::new(
            InMemoryRepository::new("MasterRecord", master_fixture())
                .with_latency(settings.submit_delay)
                .with_unique_key(master_unique_key),
        );
        let pickup_repo = Arc::new(
            InMemoryRepository::new("PalletPickupRequest", Vec::new())
                .with_latency(settings.submit_delay),
        );

        // ==========================================
        // 初始化API层
        // ==========================================
        let shipment_list_api = Arc::new(ShipmentApi::new(shipment_list_repo));
        let shipment_history_api = Arc::new(ShipmentApi::new(shipment_history_repo));
        let master_api = Arc::new(MasterDataApi::new(master_repo.clone()));
        let pickup_api = Arc::new(PickupApi::new(pickup_repo.clone()));
        let schedule_api = ScheduleApi::new(settings.schedule_seed);

        tracing::info!("AppState初始化完成");

        Ok(Self {
            settings,
            shipment_list_api,
            shipment_history_api,
            master_api,
            pickup_api,
            schedule_api,
            master_repo,
            pickup_repo,
        })
    }

    /// 当前语言的表单校验器
    pub fn validator(&self) -> FormValidator {
        FormValidator::new(self.settings.locale.clone())
    }

    // ==========================================
    // 画面挂载
    // ==========================================

    pub async fn mount_shipment_list(&self, today: NaiveDate) -> ApiResult<ShipmentHistoryView> {
        ShipmentHistoryView::mount(
            ShipmentViewKind::List,
            &self.shipment_list_api,
            &self.settings,
            today,
            None,
        )
        .await
    }

    /// 取引先别出荷履历
    pub async fn mount_shipment_history(
        &self,
        today: NaiveDate,
        counterparty: &str,
    ) -> ApiResult<ShipmentHistoryView> {
        ShipmentHistoryView::mount(
            ShipmentViewKind::History,
            &self.shipment_history_api,
            &self.settings,
            today,
            Some(counterparty),
        )
        .await
    }

    pub fn mount_schedule(&self, start: NaiveDate) -> ApiResult<ShipmentScheduleView> {
        ShipmentScheduleView::mount(
            self.schedule_api.clone(),
            start,
            self.settings.schedule_window_days,
        )
    }

    pub fn open_master_form(&self, kind: MasterKind) -> MasterFormView {
        MasterFormView::new(kind, self.master_api.clone(), self.validator())
    }

    pub fn open_pickup_request(&self) -> PickupRequestView {
        PickupRequestView::new(self.pickup_api.clone(), self.validator())
    }
}
