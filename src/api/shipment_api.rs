// ==========================================
// 物流バックオフィス - 出荷 API
// ==========================================
// 职责: 出荷一覧 / 出荷履历 的数据读取、一次性检索、CSV 导出
// ==========================================

use std::borrow::Borrow;
use std::io::Write;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::error::ApiResult;
use crate::domain::shipment::{ShipmentHistoryRecord, ShipmentQuery, ShipmentSummary};
use crate::engine::paginator::{paginate, PageInfo};
use crate::engine::summary::summarize;
use crate::repository::record_repo::{ListAll, Repository};

// ==========================================
// ShipmentPage - 检索结果（一页）
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentPage {
    pub items: Vec<ShipmentHistoryRecord>,
    pub page: PageInfo,
    pub summary: ShipmentSummary,
}

// ==========================================
// CSV 行
// ==========================================

/// 表头（与 ShipmentCsvRow 字段顺序一致）
const CSV_HEADERS: [&str; 14] = [
    "出荷日", "納品日", "納品書番号", "受注番号", "商品コード", "商品名", "ケース数",
    "本数", "単価", "金額", "届け先", "運送会社", "取引先", "ステータス",
];

#[derive(Debug, Serialize)]
struct ShipmentCsvRow<'a> {
    #[serde(rename = "出荷日")]
    shipment_date: String,
    #[serde(rename = "納品日")]
    delivery_date: String,
    #[serde(rename = "納品書番号")]
    delivery_no: &'a str,
    #[serde(rename = "受注番号")]
    order_no: &'a str,
    #[serde(rename = "商品コード")]
    product_code: &'a str,
    #[serde(rename = "商品名")]
    product_name: &'a str,
    #[serde(rename = "ケース数")]
    case_quantity: u32,
    #[serde(rename = "本数")]
    piece_quantity: u32,
    #[serde(rename = "単価")]
    unit_price: u64,
    #[serde(rename = "金額")]
    total_amount: u64,
    #[serde(rename = "届け先")]
    destination: &'a str,
    #[serde(rename = "運送会社")]
    carrier: &'a str,
    #[serde(rename = "取引先")]
    counterparty_name: &'a str,
    #[serde(rename = "ステータス")]
    status: &'static str,
}

impl<'a> From<&'a ShipmentHistoryRecord> for ShipmentCsvRow<'a> {
    fn from(r: &'a ShipmentHistoryRecord) -> Self {
        Self {
            shipment_date: r.shipment_date.format("%Y-%m-%d").to_string(),
            delivery_date: r.delivery_date.format("%Y-%m-%d").to_string(),
            delivery_no: &r.delivery_no,
            order_no: &r.order_no,
            product_code: &r.product_code,
            product_name: &r.product_name,
            case_quantity: r.case_quantity,
            piece_quantity: r.piece_quantity,
            unit_price: r.unit_price,
            total_amount: r.total_amount,
            destination: &r.destination,
            carrier: &r.carrier,
            counterparty_name: &r.counterparty_name,
            status: r.status.label(),
        }
    }
}

// ==========================================
// ShipmentApi - 出荷 API
// ==========================================

/// 出荷API
///
/// 职责：
/// 1. 画面挂载时读取记录（可限定取引先，只读）
/// 2. 金额偏差检查（只告警，不修正）
/// 3. 一次性检索（筛选 + 汇总 + 分页）
/// 4. CSV 导出
pub struct ShipmentApi {
    repo: Arc<dyn Repository<ShipmentHistoryRecord>>,
}

impl ShipmentApi {
    pub fn new(repo: Arc<dyn Repository<ShipmentHistoryRecord>>) -> Self {
        Self { repo }
    }

    /// 读取记录（数据源顺序）
    ///
    /// # 参数
    /// - counterparty: 取引先范围，None 时读取全部
    pub async fn load_records(
        &self,
        counterparty: Option<&str>,
    ) -> ApiResult<Vec<ShipmentHistoryRecord>> {
        let records = match counterparty {
            Some(name) => {
                self.repo
                    .list(&ShipmentQuery::new().with_counterparty(name))
                    .await?
            }
            None => self.repo.list(&ListAll).await?,
        };
        for r in &records {
            let drift = r.amount_discrepancy();
            if drift != 0 {
                warn!(
                    id = %r.id,
                    unit_price = r.unit_price,
                    piece_quantity = r.piece_quantity,
                    total_amount = r.total_amount,
                    drift = drift,
                    "金额与 单价×本数 不一致"
                );
            }
        }
        info!(count = records.len(), counterparty = ?counterparty, "出荷记录已读取");
        Ok(records)
    }

    /// 一次性检索
    ///
    /// # 参数
    /// - query: 检索条件
    /// - page: 请求页码（越界钳制）
    /// - page_size: 每页件数
    pub async fn query(
        &self,
        query: &ShipmentQuery,
        page: usize,
        page_size: usize,
    ) -> ApiResult<ShipmentPage> {
        let filtered = self.repo.list(query).await?;
        let summary = summarize(&filtered);
        let (info, window) = paginate(&filtered, page, page_size);
        Ok(ShipmentPage {
            items: window.to_vec(),
            page: info,
            summary,
        })
    }

    /// CSV 导出（带表头，0 件时仅输出表头）
    ///
    /// # 返回
    /// - Ok(usize): 写出的数据行数
    pub fn export_csv<R, W>(records: &[R], writer: W) -> ApiResult<usize>
    where
        R: Borrow<ShipmentHistoryRecord>,
        W: Write,
    {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(CSV_HEADERS)?;
        for record in records {
            csv_writer.serialize(ShipmentCsvRow::from(record.borrow()))?;
        }
        csv_writer
            .flush()
            .map_err(|e| crate::api::error::ApiError::ExportError(e.to_string()))?;
        info!(rows = records.len(), "CSV 导出完成");
        Ok(records.len())
    }
}
