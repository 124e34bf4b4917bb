// ==========================================
// 出荷检索 性质测试
// ==========================================
// 测试目标: 任意记录集合上的 筛选 / 状态分区 / 分页 / 汇总 性质
// 工具: proptest 生成记录集合、检索词、页大小与请求页码
// ==========================================

use chrono::{Duration, NaiveDate};
use logistics_backoffice::domain::types::{DateRange, ShipmentStatus, StatusFilter};
use logistics_backoffice::engine::{filter_owned, filter_records, paginate, summarize};
use logistics_backoffice::{ShipmentHistoryRecord, ShipmentQuery};
use proptest::prelude::*;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

// ==========================================
// 生成策略
// ==========================================

fn status_strategy() -> impl Strategy<Value = ShipmentStatus> {
    prop::sample::select(ShipmentStatus::ALL.to_vec())
}

fn product_strategy() -> impl Strategy<Value = (String, String)> {
    (
        "[A-Z]{2}-[0-9]{3}",
        prop::sample::select(vec![
            "ミネラルウォーター 500ml",
            "緑茶 500ml",
            "炭酸水 1.5L",
            "缶コーヒー 185g",
            "Sports Drink",
        ]),
    )
        .prop_map(|(code, name)| (code, name.to_string()))
}

fn destination_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "東京都江東区 東京物流センター",
        "大阪府堺市 堺デポ",
        "愛知県名古屋市 中部倉庫",
        "Hokkaido DC",
    ])
    .prop_map(str::to_string)
}

fn record_strategy() -> impl Strategy<Value = ShipmentHistoryRecord> {
    (
        product_strategy(),
        ("DN-[0-9]{4}", "ORD-[0-9]{4}"),
        (0u32..100, 0u32..2_400),
        (0i64..90, 0i64..5),
        destination_strategy(),
        prop::sample::select(vec!["関東食品商事", "関西フーズ商事"]),
        0u64..1_000,
        status_strategy(),
    )
        .prop_map(
            |(product, docs, qty, days, destination, counterparty, unit_price, status)| {
                let shipment_date = reference_date() - Duration::days(days.0);
                ShipmentHistoryRecord {
                    id: String::new(),
                    product_code: product.0,
                    product_name: product.1,
                    delivery_no: docs.0,
                    order_no: docs.1,
                    case_quantity: qty.0,
                    piece_quantity: qty.1,
                    shipment_date,
                    delivery_date: shipment_date + Duration::days(days.1),
                    destination,
                    carrier: "ヤマト運輸".to_string(),
                    counterparty_name: counterparty.to_string(),
                    unit_price,
                    total_amount: unit_price * u64::from(qty.1),
                    status,
                }
            },
        )
}

/// 记录集合（id 按位置编号）
fn records_strategy() -> impl Strategy<Value = Vec<ShipmentHistoryRecord>> {
    prop::collection::vec(record_strategy(), 0..40).prop_map(|mut records| {
        for (i, r) in records.iter_mut().enumerate() {
            r.id = format!("SH-{:03}", i + 1);
        }
        records
    })
}

fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(vec!["ミネラル", "500ml", "東京", "dn-0", "ORD", " ", " 500ml"])
            .prop_map(str::to_string),
        "[a-zA-Z0-9 -]{1,4}",
    ]
}

fn query_strategy() -> impl Strategy<Value = ShipmentQuery> {
    (
        term_strategy(),
        prop_oneof![
            Just(StatusFilter::All),
            status_strategy().prop_map(StatusFilter::from),
            Just(StatusFilter::from_selection("unknown")),
        ],
        prop::sample::select(vec![
            DateRange::All,
            DateRange::Today,
            DateRange::Last7Days,
            DateRange::Last30Days,
            DateRange::ThisMonth,
        ]),
    )
        .prop_map(|(term, status, range)| {
            ShipmentQuery::new()
                .with_term(term)
                .with_status(status)
                .with_date_range(range, reference_date())
        })
}

fn term_hits(record: &ShipmentHistoryRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    record
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

// ==========================================
// 筛选
// ==========================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn filter_is_idempotent(records in records_strategy(), query in query_strategy()) {
        let once = filter_owned(&records, &query);
        let twice = filter_owned(&once, &query);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_keeps_source_order(records in records_strategy(), query in query_strategy()) {
        let ids: Vec<usize> = filter_records(&records, &query)
            .iter()
            .map(|r| records.iter().position(|x| x.id == r.id).unwrap())
            .collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn term_matches_exactly_the_substring_hits(
        records in records_strategy(),
        term in term_strategy(),
    ) {
        let query = ShipmentQuery::new().with_term(term.clone());
        let matched = filter_records(&records, &query);
        let expected: Vec<&ShipmentHistoryRecord> = records
            .iter()
            .filter(|r| term.is_empty() || term_hits(r, &term))
            .collect();
        prop_assert_eq!(matched, expected);
    }

    #[test]
    fn status_filters_partition_records(records in records_strategy(), term in term_strategy()) {
        let base = ShipmentQuery::new().with_term(term);
        let all = filter_records(&records, &base);
        let mut total = 0;
        for status in ShipmentStatus::ALL {
            let part = filter_records(&records, &base.clone().with_status(status.into()));
            prop_assert!(part.iter().all(|r| r.status == status));
            total += part.len();
        }
        prop_assert_eq!(total, all.len());
    }
}

// ==========================================
// 分页
// ==========================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn pages_concatenate_to_filtered_set(
        records in records_strategy(),
        query in query_strategy(),
        page_size in 1usize..25,
    ) {
        let filtered = filter_records(&records, &query);
        let (info, _) = paginate(&filtered, 1, page_size);
        prop_assert_eq!(info.total_pages, filtered.len().div_ceil(page_size));

        let mut joined = Vec::new();
        for page in 1..=info.total_pages {
            let (_, window) = paginate(&filtered, page, page_size);
            prop_assert!(!window.is_empty());
            if page < info.total_pages {
                prop_assert_eq!(window.len(), page_size);
            }
            joined.extend_from_slice(window);
        }
        prop_assert_eq!(joined, filtered);
    }

    #[test]
    fn requested_page_is_clamped(
        records in records_strategy(),
        page_size in 0usize..25,
        requested in 0usize..100,
    ) {
        let (info, window) = paginate(&records, requested, page_size);
        let size = page_size.max(1);
        prop_assert!(info.current_page >= 1);
        prop_assert!(info.current_page <= info.total_pages.max(1));
        prop_assert_eq!(info.is_empty, records.is_empty());

        let start = (info.current_page - 1) * size;
        let end = (start + size).min(records.len());
        prop_assert_eq!(window, &records[start.min(records.len())..end]);
    }
}

// ==========================================
// 汇总
// ==========================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn summary_equals_manual_sums(records in records_strategy(), query in query_strategy()) {
        let filtered = filter_records(&records, &query);
        let summary = summarize(&filtered);
        prop_assert_eq!(summary.total_shipments, filtered.len());
        prop_assert_eq!(summary.total_amount, filtered.iter().map(|r| r.total_amount).sum::<u64>());
        prop_assert_eq!(
            summary.total_cases,
            filtered.iter().map(|r| u64::from(r.case_quantity)).sum::<u64>()
        );
        prop_assert_eq!(
            summary.total_pieces,
            filtered.iter().map(|r| u64::from(r.piece_quantity)).sum::<u64>()
        );
        prop_assert_eq!(summary.average_unit_price.is_none(), summary.total_pieces == 0);
    }

    #[test]
    fn status_summaries_add_up_without_double_counting(records in records_strategy()) {
        let whole = summarize(&records);
        let mut amount = 0;
        let mut shipments = 0;
        for status in ShipmentStatus::ALL {
            let part = filter_records(&records, &ShipmentQuery::new().with_status(status.into()));
            let summary = summarize(&part);
            amount += summary.total_amount;
            shipments += summary.total_shipments;
        }
        prop_assert_eq!(amount, whole.total_amount);
        prop_assert_eq!(shipments, whole.total_shipments);
    }
}
