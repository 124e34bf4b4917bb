// ==========================================
// 物流バックオフィス - 静态 fixture
// ==========================================
// 职责: 代替真实数据源的固定数据与模拟出荷予定生成
// 说明: 出荷一覧 8 件、出荷履历 5 件，金额均满足 单价×本数
// ==========================================

use crate::domain::master::{MasterRecord, MaterialForm, ProductForm, SupplierForm};
use crate::domain::schedule::{ScheduleCustomer, ScheduleDestination, ShipmentScheduleItem};
use crate::domain::shipment::ShipmentHistoryRecord;
use crate::domain::types::{PaymentTerms, ShipmentStatus, Unit};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// fixture 中的日期均为合法常量
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn shipment(
    id: &str,
    product: (&str, &str),
    docs: (&str, &str),
    cases: u32,
    pieces: u32,
    dates: (NaiveDate, NaiveDate),
    destination: &str,
    carrier: &str,
    counterparty: &str,
    unit_price: u64,
    status: ShipmentStatus,
) -> ShipmentHistoryRecord {
    ShipmentHistoryRecord {
        id: id.to_string(),
        product_code: product.0.to_string(),
        product_name: product.1.to_string(),
        delivery_no: docs.0.to_string(),
        order_no: docs.1.to_string(),
        case_quantity: cases,
        piece_quantity: pieces,
        shipment_date: dates.0,
        delivery_date: dates.1,
        destination: destination.to_string(),
        carrier: carrier.to_string(),
        counterparty_name: counterparty.to_string(),
        unit_price,
        total_amount: unit_price * u64::from(pieces),
        status,
    }
}

const MW_500: (&str, &str) = ("MW-500", "ミネラルウォーター 500ml");
const MW_350: (&str, &str) = ("MW-350", "ミネラルウォーター 350ml");
const MW_2L: (&str, &str) = ("MW-2L", "ミネラルウォーター 2L");
const GT_500: (&str, &str) = ("GT-500", "緑茶 500ml");
const SD_500: (&str, &str) = ("SD-500", "スポーツドリンク 500ml");
const SW_1500: (&str, &str) = ("SW-1500", "炭酸水 1.5L");
const CF_185: (&str, &str) = ("CF-185", "缶コーヒー 185g");
const HT_600: (&str, &str) = ("HT-600", "ほうじ茶 600ml");
const HT_1500: (&str, &str) = ("HT-1500", "ほうじ茶 1.5L");

/// 出荷一覧 fixture（8 件）
///
/// 入数: 500ml/350ml 24 本、1.5L 8 本、缶コーヒー 30 本
/// 合计: 300 c/s / 7,200 本 / 1,197,200 円
pub fn shipment_list_fixture() -> Vec<ShipmentHistoryRecord> {
    use ShipmentStatus::*;
    vec![
        shipment("SH-001", MW_500, ("DN-2024-0001", "ORD-2024-0101"), 55, 1320,
            (date(2024, 3, 15), date(2024, 3, 16)), "東京都江東区 東京物流センター",
            "ヤマト運輸", "関東食品商事", 120, Shipped),
        shipment("SH-002", GT_500, ("DN-2024-0002", "ORD-2024-0102"), 45, 1080,
            (date(2024, 3, 14), date(2024, 3, 15)), "大阪府大阪市 関西配送センター",
            "佐川急便", "関西フーズ商事", 150, Delivered),
        shipment("SH-003", MW_350, ("DN-2024-0003", "ORD-2024-0103"), 40, 960,
            (date(2024, 3, 13), date(2024, 3, 15)), "愛知県名古屋市 中部倉庫",
            "西濃運輸", "中部流通商事", 150, InTransit),
        shipment("SH-004", SD_500, ("DN-2024-0004", "ORD-2024-0104"), 50, 1200,
            (date(2024, 3, 12), date(2024, 3, 13)), "福岡県福岡市 九州センター",
            "日本通運", "九州ドリンク商事", 160, Delivered),
        shipment("SH-005", MW_500, ("DN-2024-0005", "ORD-2024-0105"), 44, 1056,
            (date(2024, 3, 11), date(2024, 3, 12)), "大阪府堺市 堺デポ",
            "佐川急便", "関西フーズ商事", 130, Delivered),
        shipment("SH-006", SW_1500, ("DN-2024-0006", "ORD-2024-0106"), 10, 80,
            (date(2024, 3, 8), date(2024, 3, 9)), "北海道札幌市 北海道センター",
            "日本通運", "北海道食品商事", 260, Returned),
        shipment("SH-007", CF_185, ("DN-2024-0007", "ORD-2024-0107"), 48, 1440,
            (date(2024, 3, 5), date(2024, 3, 6)), "宮城県仙台市 東北センター",
            "ヤマト運輸", "東北飲料商事", 250, Delivered),
        shipment("SH-008", HT_1500, ("DN-2024-0008", "ORD-2024-0108"), 8, 64,
            (date(2024, 2, 28), date(2024, 2, 29)), "東京都大田区 羽田デポ",
            "西濃運輸", "関東食品商事", 355, Delivered),
    ]
}

/// 出荷履历 fixture 的取引先
pub const HISTORY_CUSTOMER: &str = "関東食品商事";

/// 出荷履历 fixture（5 件，取引先: 関東食品商事）
///
/// 合计: 87 c/s / 2,088 本 / 330,480 円
pub fn shipment_history_fixture() -> Vec<ShipmentHistoryRecord> {
    use ShipmentStatus::*;
    vec![
        shipment("H-001", MW_500, ("DN-2024-0101", "ORD-2024-0201"), 20, 480,
            (date(2024, 3, 14), date(2024, 3, 15)), "東京都江東区 東京物流センター",
            "ヤマト運輸", HISTORY_CUSTOMER, 120, Shipped),
        shipment("H-002", GT_500, ("DN-2024-0102", "ORD-2024-0202"), 15, 360,
            (date(2024, 3, 12), date(2024, 3, 14)), "東京都江東区 東京物流センター",
            "ヤマト運輸", HISTORY_CUSTOMER, 150, InTransit),
        shipment("H-003", MW_2L, ("DN-2024-0103", "ORD-2024-0203"), 10, 240,
            (date(2024, 3, 8), date(2024, 3, 9)), "東京都大田区 羽田デポ",
            "西濃運輸", HISTORY_CUSTOMER, 180, Delivered),
        shipment("H-004", SD_500, ("DN-2024-0104", "ORD-2024-0204"), 30, 720,
            (date(2024, 3, 4), date(2024, 3, 5)), "千葉県市川市 京葉デポ",
            "日本通運", HISTORY_CUSTOMER, 160, Delivered),
        shipment("H-005", HT_600, ("DN-2024-0105", "ORD-2024-0205"), 12, 288,
            (date(2024, 2, 26), date(2024, 2, 27)), "東京都大田区 羽田デポ",
            "西濃運輸", HISTORY_CUSTOMER, 210, Returned),
    ]
}

// ==========================================
// 出荷予定模拟生成
// ==========================================

/// 商品 → 取引先 → 納品先 的骨架
const SCHEDULE_TREE: &[(&str, &str, &[(&str, &[&str])])] = &[
    (
        "MW-500",
        "ミネラルウォーター 500ml",
        &[
            ("関東食品商事", &["東京物流センター", "羽田デポ"]),
            ("関西フーズ商事", &["関西配送センター"]),
        ],
    ),
    (
        "GT-500",
        "緑茶 500ml",
        &[
            ("関東食品商事", &["東京物流センター"]),
            ("中部流通商事", &["中部倉庫", "静岡デポ"]),
        ],
    ),
    (
        "SD-500",
        "スポーツドリンク 500ml",
        &[("九州ドリンク商事", &["九州センター"])],
    ),
];

/// 生成出荷予定（随机数量）
///
/// # 参数
/// - start: 窗口起始日
/// - days: 窗口天数
/// - seed: 随机种子（None 时使用熵源）
///
/// # 说明
/// 数量为 0 的日期不写入映射，读取时按 0 处理
pub fn generate_schedule(start: NaiveDate, days: u32, seed: Option<u64>) -> Vec<ShipmentScheduleItem> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    SCHEDULE_TREE
        .iter()
        .map(|(code, name, customers)| ShipmentScheduleItem {
            product_code: code.to_string(),
            product_name: name.to_string(),
            customers: customers
                .iter()
                .map(|(customer, destinations)| ScheduleCustomer {
                    name: customer.to_string(),
                    destinations: destinations
                        .iter()
                        .map(|dest| ScheduleDestination {
                            name: dest.to_string(),
                            quantities: (0..days)
                                .filter_map(|offset| {
                                    let qty: u32 = rng.gen_range(0..=40);
                                    let day = start + Duration::days(i64::from(offset));
                                    (qty > 0).then_some((day, qty))
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

// ==========================================
// 既存主数据
// ==========================================

/// 已登録的主数据（用于编码重复检查）
pub fn master_fixture() -> Vec<MasterRecord> {
    vec![
        MasterRecord::Product(ProductForm {
            code: "MW-500".to_string(),
            name: "ミネラルウォーター 500ml".to_string(),
            category: "飲料水".to_string(),
            unit: Unit::Piece,
            price: Some(120),
            cost: Some(70),
            pieces_per_case: Some(24),
            lead_time_days: Some(3),
            description: String::new(),
        }),
        MasterRecord::Material(MaterialForm {
            code: "PET-500".to_string(),
            name: "PETボトル 500ml".to_string(),
            category: "容器".to_string(),
            unit: Unit::Piece,
            unit_cost: Some(12),
            storage_location: "第2倉庫 A-3".to_string(),
            lead_time_days: Some(14),
            minimum_stock: Some(20_000),
            supplier_code: "SUP-001".to_string(),
        }),
        MasterRecord::Supplier(SupplierForm {
            code: "SUP-001".to_string(),
            name: "東日本容器株式会社".to_string(),
            category: "容器".to_string(),
            contact_person: "佐藤".to_string(),
            phone: "03-1234-5678".to_string(),
            email: "sato@example.co.jp".to_string(),
            address: "東京都墨田区".to_string(),
            payment_terms: PaymentTerms::EndOfMonthNextMonth,
            lead_time_days: Some(14),
            materials: vec!["PET-500".to_string()],
        }),
    ]
}
