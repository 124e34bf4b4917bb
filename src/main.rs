// ==========================================
// 物流バックオフィス - 演示入口
// ==========================================
// 挂载各画面，输出 JSON 快照，并演示一次主数据提交
// ==========================================

use chrono::Local;
use logistics_backoffice::app::AppState;
use logistics_backoffice::config::ConfigManager;
use logistics_backoffice::domain::{MasterFieldUpdate, ProductFieldUpdate};
use logistics_backoffice::repository::fixtures::HISTORY_CUSTOMER;
use logistics_backoffice::{i18n, logging, MasterKind, APP_NAME, VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    let config = ConfigManager::load_or_default();
    let state = AppState::new(&config).await.map_err(anyhow::Error::msg)?;
    i18n::set_locale(&state.settings.locale);

    let today = Local::now().date_naive();

    // ==========================================
    // 画面挂载（并行）
    // ==========================================
    let (list, history) = futures::try_join!(
        state.mount_shipment_list(today),
        state.mount_shipment_history(today, HISTORY_CUSTOMER),
    )?;
    let schedule = state.mount_schedule(today)?;

    println!("{}", serde_json::to_string_pretty(list.snapshot())?);
    println!("{}", serde_json::to_string_pretty(history.snapshot())?);
    println!("{}", serde_json::to_string_pretty(&schedule.snapshot())?);

    // ==========================================
    // 主数据提交演示
    // ==========================================
    let mut form = state.open_master_form(MasterKind::Product);
    for update in [
        ProductFieldUpdate::Code("GT-2L".to_string()),
        ProductFieldUpdate::Name("緑茶 2L".to_string()),
        ProductFieldUpdate::Category("飲料".to_string()),
        ProductFieldUpdate::PiecesPerCase(Some(6)),
    ] {
        form.apply(MasterFieldUpdate::Product(update));
    }
    let status = form.submit().await;
    tracing::info!(status = ?status, "演示提交结束");
    println!("{}", serde_json::to_string_pretty(form.feedback())?);

    Ok(())
}
