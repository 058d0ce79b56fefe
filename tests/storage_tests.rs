//! Storage backend tests
//!
//! Tests for SeaOrmStorage using temporary SQLite databases.

use std::sync::Once;

use campaign_analytics::config::{CommitMode, init_config};
use campaign_analytics::storage::backend::infer_backend_from_url;
use campaign_analytics::storage::{
    Campaign, CampaignDataset, CampaignFilter, CampaignType, DateWindow, NewCampaignPeriod,
    NewCampaignSite, SeaOrmStorage,
};
use chrono::NaiveDate;
use sea_orm::ConnectionTrait;
use tempfile::TempDir;

// 确保 config 只初始化一次
static INIT: Once = Once::new();

fn init_test_config() {
    INIT.call_once(|| {
        init_config();
    });
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// 创建临时 SQLite 数据库的存储实例
async fn create_temp_storage() -> (SeaOrmStorage, TempDir) {
    init_test_config();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = SeaOrmStorage::new(&db_url, "sqlite")
        .await
        .expect("Failed to create storage");

    (storage, temp_dir)
}

fn period(campaign: &str, label: &str, personas: Option<i64>) -> NewCampaignPeriod {
    NewCampaignPeriod {
        campaign_name: campaign.to_string(),
        period: label.to_string(),
        impactos_periodo_personas: personas,
        impactos_periodo_vehiculos: personas.map(|p| p / 10),
    }
}

fn site(campaign: &str, code: &str, mensuales: Option<i64>) -> NewCampaignSite {
    NewCampaignSite {
        campaign_name: campaign.to_string(),
        codigo_del_sitio: code.to_string(),
        tipo_de_mueble: Some("Parabus".to_string()),
        tipo_de_anuncio: None,
        estado: Some("Jalisco".to_string()),
        municipio: None,
        zm: Some("Guadalajara".to_string()),
        frecuencia_catorcenal: Some(2.5),
        frecuencia_mensual: Some(5.0),
        impactos_catorcenal: mensuales.map(|m| m / 2),
        impactos_mensuales: mensuales,
        alcance_mensual: Some(1000.0),
    }
}

/// 三个活动：
/// - A mensual  2024-01-01..2024-01-31
/// - B catorcenal 2024-02-01..2024-02-14
/// - C mensual  2024-03-01..2024-03-31
fn sample_dataset() -> CampaignDataset {
    let mut a = Campaign::bare("Campania A", "mensual", date("2024-01-01"), date("2024-01-31"));
    a.impactos_personas = Some(5000);
    a.alcance = Some(1200);

    CampaignDataset {
        campaigns: vec![
            a,
            Campaign::bare(
                "Campania B",
                "catorcenal",
                date("2024-02-01"),
                date("2024-02-14"),
            ),
            Campaign::bare("Campania C", "mensual", date("2024-03-01"), date("2024-03-31")),
        ],
        periods: vec![
            period("Campania A", "2024-01", Some(100)),
            period("Campania A", "2024-02", None),
            period("Campania B", "2024-02", Some(50)),
        ],
        sites: vec![
            site("Campania A", "GDL-001", Some(800)),
            site("Campania A", "GDL-002", None),
        ],
    }
}

async fn loaded_storage() -> (SeaOrmStorage, TempDir) {
    let (storage, dir) = create_temp_storage().await;
    storage
        .replace_all(&sample_dataset(), CommitMode::Atomic)
        .await
        .unwrap();
    (storage, dir)
}

#[tokio::test]
async fn test_empty_store() {
    let (storage, _dir) = create_temp_storage().await;

    let stats = storage.get_stats().await.unwrap();
    assert_eq!(stats.campaigns, 0);
    assert_eq!(stats.periods, 0);
    assert_eq!(stats.sites, 0);

    let (items, total) = storage
        .load_campaigns_page(CampaignFilter::default(), 1, 5)
        .await
        .unwrap();
    assert!(items.is_empty());
    assert_eq!(total, 0);

    assert!(storage.get_campaign("missing").await.unwrap().is_none());
    assert!(
        storage
            .load_campaign_bundle("missing")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_replace_all_atomic() {
    let (storage, _dir) = loaded_storage().await;

    let stats = storage.get_stats().await.unwrap();
    assert_eq!(stats.campaigns, 3);
    assert_eq!(stats.periods, 3);
    assert_eq!(stats.sites, 2);

    let campaign = storage.get_campaign("Campania A").await.unwrap().unwrap();
    assert_eq!(campaign.impactos_personas, Some(5000));
    assert_eq!(campaign.alcance, Some(1200));
    assert_eq!(campaign.impactos_vehiculos, None);
}

#[tokio::test]
async fn test_replace_all_two_phase() {
    let (storage, _dir) = create_temp_storage().await;
    storage
        .replace_all(&sample_dataset(), CommitMode::TwoPhase)
        .await
        .unwrap();

    let stats = storage.get_stats().await.unwrap();
    assert_eq!(stats.campaigns, 3);
    assert_eq!(stats.periods, 3);
    assert_eq!(stats.sites, 2);
}

/// 在指定表上安装一个拒绝所有 INSERT 的触发器
async fn reject_inserts_into(storage: &SeaOrmStorage, table: &str) {
    let sql = format!(
        "CREATE TRIGGER reject_{table} BEFORE INSERT ON {table} \
         BEGIN SELECT RAISE(ABORT, 'insert into {table} rejected'); END;"
    );
    storage.get_db().execute_unprepared(&sql).await.unwrap();
}

#[tokio::test]
async fn test_atomic_failure_leaves_store_empty() {
    let (storage, _dir) = create_temp_storage().await;
    reject_inserts_into(&storage, "campaign_sites").await;

    let err = storage
        .write_dataset(&sample_dataset(), CommitMode::Atomic)
        .await
        .unwrap_err();
    assert!(err.message().contains("sites"));

    // 表仍然存在，且三张表都没有数据
    let stats = storage.get_stats().await.unwrap();
    assert_eq!(stats.campaigns, 0);
    assert_eq!(stats.periods, 0);
    assert_eq!(stats.sites, 0);
}

#[tokio::test]
async fn test_two_phase_failure_keeps_campaigns() {
    let (storage, _dir) = create_temp_storage().await;
    reject_inserts_into(&storage, "campaign_periods").await;

    let err = storage
        .write_dataset(&sample_dataset(), CommitMode::TwoPhase)
        .await
        .unwrap_err();
    assert!(err.message().contains("periods"));

    let stats = storage.get_stats().await.unwrap();
    assert_eq!(stats.campaigns, 3);
    assert_eq!(stats.periods, 0);
    assert_eq!(stats.sites, 0);
    assert!(storage.get_campaign("Campania B").await.unwrap().is_some());
}

#[tokio::test]
async fn test_two_phase_site_failure_rolls_back_periods() {
    let (storage, _dir) = create_temp_storage().await;
    reject_inserts_into(&storage, "campaign_sites").await;

    assert!(
        storage
            .write_dataset(&sample_dataset(), CommitMode::TwoPhase)
            .await
            .is_err()
    );

    // periods 与 sites 在同一个事务里，一起回滚
    let stats = storage.get_stats().await.unwrap();
    assert_eq!(stats.campaigns, 3);
    assert_eq!(stats.periods, 0);
    assert_eq!(stats.sites, 0);
}

#[tokio::test]
async fn test_replace_all_discards_previous_content() {
    let (storage, _dir) = loaded_storage().await;

    let replacement = CampaignDataset {
        campaigns: vec![Campaign::bare(
            "Nueva",
            "mensual",
            date("2025-01-01"),
            date("2025-01-31"),
        )],
        periods: vec![period("Nueva", "2025-01", Some(1))],
        sites: vec![],
    };
    storage
        .replace_all(&replacement, CommitMode::Atomic)
        .await
        .unwrap();

    let stats = storage.get_stats().await.unwrap();
    assert_eq!(stats.campaigns, 1);
    assert_eq!(stats.periods, 1);
    assert_eq!(stats.sites, 0);
    assert!(storage.get_campaign("Campania A").await.unwrap().is_none());

    // 重新生成的 id 从 1 开始
    let bundle = storage.load_campaign_bundle("Nueva").await.unwrap().unwrap();
    assert_eq!(bundle.periods[0].id, 1);
}

#[tokio::test]
async fn test_replace_all_many_rows_in_chunks() {
    let (storage, _dir) = create_temp_storage().await;

    let campaigns: Vec<Campaign> = (0..450)
        .map(|i| {
            Campaign::bare(
                format!("Campania {:03}", i),
                "mensual",
                date("2024-01-01"),
                date("2024-01-31"),
            )
        })
        .collect();
    let sites: Vec<NewCampaignSite> = (0..450)
        .map(|i| site("Campania 000", &format!("S-{:03}", i), Some(i)))
        .collect();

    let dataset = CampaignDataset {
        campaigns,
        periods: vec![],
        sites,
    };
    storage
        .replace_all(&dataset, CommitMode::Atomic)
        .await
        .unwrap();

    let stats = storage.get_stats().await.unwrap();
    assert_eq!(stats.campaigns, 450);
    assert_eq!(stats.sites, 450);
}

#[tokio::test]
async fn test_page_order_by_start_date_desc() {
    let (storage, _dir) = loaded_storage().await;

    let (items, total) = storage
        .load_campaigns_page(CampaignFilter::default(), 1, 2)
        .await
        .unwrap();
    assert_eq!(total, 3);
    let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Campania C", "Campania B"]);

    let (items, total) = storage
        .load_campaigns_page(CampaignFilter::default(), 2, 2)
        .await
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Campania A");

    // 超出范围的页返回空列表，total 不变
    let (items, total) = storage
        .load_campaigns_page(CampaignFilter::default(), 9, 2)
        .await
        .unwrap();
    assert!(items.is_empty());
    assert_eq!(total, 3);
}

#[tokio::test]
async fn test_page_filter_by_type() {
    let (storage, _dir) = loaded_storage().await;

    let filter = CampaignFilter {
        tipo_campania: Some(CampaignType::Mensual),
        window: None,
    };
    let (items, total) = storage.load_campaigns_page(filter, 1, 5).await.unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|c| c.tipo_campania == "mensual"));
}

#[tokio::test]
async fn test_window_overlap_is_inclusive() {
    let (storage, _dir) = loaded_storage().await;

    // 只与 A 的最后一天和 B 的第一天相交
    let filter = CampaignFilter {
        tipo_campania: None,
        window: Some(DateWindow {
            start: date("2024-01-31"),
            end: date("2024-02-01"),
        }),
    };
    let (items, total) = storage.load_campaigns_page(filter, 1, 5).await.unwrap();
    assert_eq!(total, 2);
    let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Campania B", "Campania A"]);

    // 窗口位于 B 与 C 之间
    let filter = CampaignFilter {
        tipo_campania: None,
        window: Some(DateWindow {
            start: date("2024-02-15"),
            end: date("2024-02-29"),
        }),
    };
    let (items, total) = storage.load_campaigns_page(filter, 1, 5).await.unwrap();
    assert_eq!(total, 0);
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_window_excludes_later_campaign() {
    let (storage, _dir) = create_temp_storage().await;
    let dataset = CampaignDataset {
        campaigns: vec![
            Campaign::bare("camp_may", "mensual", date("2024-05-01"), date("2024-05-31")),
            Campaign::bare("camp_jul", "mensual", date("2024-07-01"), date("2024-07-31")),
        ],
        ..Default::default()
    };
    storage
        .replace_all(&dataset, CommitMode::Atomic)
        .await
        .unwrap();

    let filter = CampaignFilter {
        tipo_campania: None,
        window: Some(DateWindow {
            start: date("2024-05-01"),
            end: date("2024-06-01"),
        }),
    };
    let (items, total) = storage.load_campaigns_page(filter, 1, 10).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "camp_may");
}

#[tokio::test]
async fn test_window_and_type_combined() {
    let (storage, _dir) = loaded_storage().await;

    let filter = CampaignFilter {
        tipo_campania: Some(CampaignType::Catorcenal),
        window: Some(DateWindow {
            start: date("2024-01-01"),
            end: date("2024-12-31"),
        }),
    };
    let (items, total) = storage.load_campaigns_page(filter, 1, 5).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Campania B");
}

#[tokio::test]
async fn test_load_campaign_bundle() {
    let (storage, _dir) = loaded_storage().await;

    let bundle = storage
        .load_campaign_bundle("Campania A")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bundle.campaign.name, "Campania A");
    assert_eq!(bundle.periods.len(), 2);
    assert_eq!(bundle.sites.len(), 2);
    assert!(bundle.periods.iter().all(|p| p.campaign_name == "Campania A"));
    assert_eq!(bundle.periods[0].period, "2024-01");
    assert_eq!(bundle.sites[0].codigo_del_sitio, "GDL-001");
    assert_eq!(bundle.sites[1].impactos_mensuales, None);

    let bundle = storage
        .load_campaign_bundle("Campania C")
        .await
        .unwrap()
        .unwrap();
    assert!(bundle.periods.is_empty());
    assert!(bundle.sites.is_empty());
}

#[tokio::test]
async fn test_name_lookup_is_exact() {
    let (storage, _dir) = loaded_storage().await;
    assert!(storage.get_campaign("campania a").await.unwrap().is_none());
    assert!(storage.get_campaign("Campania A ").await.unwrap().is_none());
}

#[test]
fn test_infer_backend_from_url() {
    assert_eq!(infer_backend_from_url("sqlite://data.db").unwrap(), "sqlite");
    assert_eq!(infer_backend_from_url("campaigns.db").unwrap(), "sqlite");
    assert_eq!(
        infer_backend_from_url("postgres://u:p@localhost/campaigns").unwrap(),
        "postgres"
    );
    assert_eq!(
        infer_backend_from_url("mariadb://u:p@localhost/campaigns").unwrap(),
        "mysql"
    );
    assert!(infer_backend_from_url("redis://localhost").is_err());
}
