// ==========================================
// パレット回収依頼書 集成测试
// ==========================================
// 测试目标: 明细行编辑 / 必填校验 / 依頼番号分配 / 取消
// ==========================================

mod test_helpers;

use std::time::Duration;

use chrono::NaiveDate;
use logistics_backoffice::app::{FormStatus, PickupRequestView};
use logistics_backoffice::domain::{PalletLine, PalletType, PickupFieldUpdate, TimeSlot};
use test_helpers::test_state;

fn fill(view: &mut PickupRequestView) {
    view.apply(PickupFieldUpdate::RequesterCompany("関西フーズ商事".to_string()));
    view.apply(PickupFieldUpdate::ContactPerson("田中".to_string()));
    view.apply(PickupFieldUpdate::PickupAddress("大阪府大阪市 関西配送センター".to_string()));
    view.apply(PickupFieldUpdate::PickupDate(NaiveDate::from_ymd_opt(2024, 3, 22)));
    view.apply(PickupFieldUpdate::TimeSlot(TimeSlot::Morning));
    view.apply(PickupFieldUpdate::LineQuantity(0, 40));
    view.apply(PickupFieldUpdate::AddLine(PalletLine {
        pallet_type: PalletType::Other,
        quantity: 5,
        remarks: "破損あり".to_string(),
    }));
}

#[tokio::test]
async fn test_required_fields_reported_in_english() {
    let config = test_helpers::test_config(0);
    config
        .update_config(logistics_backoffice::config::config_keys::LOCALE, "en")
        .unwrap();
    let state = logistics_backoffice::app::AppState::new(&config).await.unwrap();
    let mut view = state.open_pickup_request();
    view.remove_line(0);

    assert_eq!(view.submit().await, FormStatus::Invalid);
    let feedback = view.feedback();
    assert_eq!(
        feedback.message.as_deref(),
        Some("Please correct the input (4 issues)")
    );
    assert_eq!(feedback.field_messages["pickup_date"], "Pickup date is required");
    assert_eq!(feedback.field_messages["lines"], "Lines is required");
    assert!(state.pickup_repo.is_empty().unwrap());
}

#[tokio::test]
async fn test_submitted_request_gets_number_and_totals() {
    let state = test_state(0).await;
    let mut view = state.open_pickup_request();
    fill(&mut view);
    assert_eq!(view.total_pallets(), 45);
    assert_eq!(view.total_by_type(PalletType::Other), 5);

    assert_eq!(view.submit().await, FormStatus::Submitted);
    let request_no = view.last_request_no().unwrap().to_string();
    assert!(request_no.starts_with("PR-"));

    let stored = state.pickup_api.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].request_no, request_no);
    assert_eq!(stored[0].total_pallets(), 45);
    assert_eq!(stored[0].time_slot, TimeSlot::Morning);
}

#[tokio::test]
async fn test_unmount_before_delay_records_nothing() {
    let state = test_state(300).await;
    let mut view = state.open_pickup_request();
    fill(&mut view);

    let handle = view.cancel_handle();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        handle.cancel();
    });
    assert_eq!(view.submit().await, FormStatus::Cancelled);
    drop(view);

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(state.pickup_repo.is_empty().unwrap());
}
