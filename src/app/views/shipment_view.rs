// ==========================================
// 物流バックオフィス - 出荷一覧 / 出荷履历 画面
// ==========================================
// 职责: 持有画面本地状态（检索词、状态、期间、页码）
//       每次状态变化同步重算 筛选 → 汇总 → 分页
// 约束: 挂载后记录只读
// ==========================================

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::api::error::ApiResult;
use crate::api::shipment_api::ShipmentApi;
use crate::config::ViewSettings;
use crate::domain::shipment::{ShipmentHistoryRecord, ShipmentQuery, ShipmentSummary};
use crate::domain::types::{DateRange, StatusFilter};
use crate::engine::filter::filter_records;
use crate::engine::paginator::{paginate, PageInfo};
use crate::engine::summary::summarize;
use crate::i18n::t_in;

/// 画面种别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentViewKind {
    /// 出荷一覧（显示平均单价）
    List,
    /// 取引先别出荷履历
    History,
}

/// 画面快照（渲染用）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySnapshot {
    pub kind: ShipmentViewKind,
    pub items: Vec<ShipmentHistoryRecord>,
    pub page: PageInfo,
    pub summary: ShipmentSummary,
    /// 取引先范围（出荷履历）
    pub counterparty: Option<String>,
    /// 仅出荷一覧
    pub average_unit_price_text: Option<String>,
    /// 无命中时的空状态消息
    pub empty_message: Option<String>,
}

/// 出荷画面
pub struct ShipmentHistoryView {
    kind: ShipmentViewKind,
    records: Vec<ShipmentHistoryRecord>,
    query: ShipmentQuery,
    page: usize,
    page_size: usize,
    locale: String,
    not_available_text: String,
    snapshot: HistorySnapshot,
}

impl ShipmentHistoryView {
    /// 挂载: 读取记录并计算初始快照
    ///
    /// # 参数
    /// - today: 期间筛选的基准日
    /// - counterparty: 取引先范围，出荷一覧传 None
    pub async fn mount(
        kind: ShipmentViewKind,
        api: &ShipmentApi,
        settings: &ViewSettings,
        today: NaiveDate,
        counterparty: Option<&str>,
    ) -> ApiResult<Self> {
        let records = api.load_records(counterparty).await?;
        info!(kind = ?kind, records = records.len(), counterparty = ?counterparty, "出荷画面已挂载");
        let mut view = Self::with_records(kind, records, settings, today);
        if let Some(name) = counterparty {
            view.query.counterparty = Some(name.to_string());
            view.recompute();
        }
        Ok(view)
    }

    /// 以给定记录构造（不经过仓储）
    pub fn with_records(
        kind: ShipmentViewKind,
        records: Vec<ShipmentHistoryRecord>,
        settings: &ViewSettings,
        today: NaiveDate,
    ) -> Self {
        let query = ShipmentQuery {
            reference_date: Some(today),
            ..ShipmentQuery::default()
        };
        let mut view = Self {
            kind,
            records,
            query,
            page: 1,
            page_size: settings.page_size,
            locale: settings.locale.clone(),
            not_available_text: settings.not_available_text.clone(),
            snapshot: HistorySnapshot {
                kind,
                items: Vec::new(),
                page: crate::engine::paginator::page_info(0, 1, settings.page_size),
                summary: ShipmentSummary::default(),
                counterparty: None,
                average_unit_price_text: None,
                empty_message: None,
            },
        };
        view.recompute();
        view
    }

    // ==========================================
    // 状态变更（检索条件变化时回到第 1 页）
    // ==========================================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.term = term.into();
        self.page = 1;
        self.recompute();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.query.status = status;
        self.page = 1;
        self.recompute();
    }

    /// 下拉框取值（"all" 或状态文字）
    pub fn select_status(&mut self, value: &str) {
        self.set_status_filter(StatusFilter::from_selection(value));
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.query.date_range = range;
        self.page = 1;
        self.recompute();
    }

    /// 跳转页码（越界钳制）
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
        self.recompute();
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    // ==========================================
    // 读取
    // ==========================================

    pub fn kind(&self) -> ShipmentViewKind {
        self.kind
    }

    pub fn query(&self) -> &ShipmentQuery {
        &self.query
    }

    pub fn records(&self) -> &[ShipmentHistoryRecord] {
        &self.records
    }

    pub fn snapshot(&self) -> &HistorySnapshot {
        &self.snapshot
    }

    /// 导出当前条件下的全部命中记录（不限当前页）
    pub fn export_csv<W: Write>(&self, writer: W) -> ApiResult<usize> {
        let filtered = filter_records(&self.records, &self.query);
        ShipmentApi::export_csv(&filtered, writer)
    }

    fn recompute(&mut self) {
        let filtered = filter_records(&self.records, &self.query);
        let summary = summarize(&filtered);
        let (page, window) = paginate(&filtered, self.page, self.page_size);
        self.page = page.current_page;

        let average_unit_price_text = match self.kind {
            ShipmentViewKind::List => Some(summary.average_unit_price_text(&self.not_available_text)),
            ShipmentViewKind::History => None,
        };
        let empty_message = page
            .is_empty
            .then(|| t_in(&self.locale, "history.empty"));

        debug!(
            term = %self.query.term,
            matched = filtered.len(),
            page = page.current_page,
            total_pages = page.total_pages,
            "出荷画面重算"
        );

        self.snapshot = HistorySnapshot {
            kind: self.kind,
            items: window.iter().map(|r| (*r).clone()).collect(),
            page,
            summary,
            counterparty: self.query.counterparty.clone(),
            average_unit_price_text,
            empty_message,
        };
    }
}
