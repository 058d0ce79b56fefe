//! CSV batch loader
//!
//! Reads the three exported CSV sources, deduplicates them on their
//! normalized natural keys, then replaces the whole store content.

pub mod normalize;
pub mod sources;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::CommitMode;
use crate::errors::Result;
use crate::storage::SeaOrmStorage;
use crate::storage::models::CampaignDataset;

use normalize::{dedup_by_key, normalize_key};
use sources::{
    CAMPAIGNS_FILE, PERIODS_FILE, RowLocation, SITES_FILE, SourcePaths, read_campaign_rows,
    read_period_rows, read_site_rows,
};

/// 导入选项
#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub data_dir: PathBuf,
    pub commit_mode: CommitMode,
}

impl IngestOptions {
    /// 使用全局配置中的 ingest 段
    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        Self {
            data_dir: PathBuf::from(&config.ingest.data_dir),
            commit_mode: config.ingest.commit_mode,
        }
    }
}

/// 每个数据源被去重丢弃的行数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DuplicateCounts {
    pub campaigns: usize,
    pub periods: usize,
    pub sites: usize,
}

/// 导入结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub campaigns: usize,
    pub periods: usize,
    pub sites: usize,
    pub duplicates_dropped: DuplicateCounts,
    /// fecha_inicio > fecha_fin 的活动数（保留，不拒绝）
    pub inverted_windows: usize,
}

/// 读取并规范化三个数据源，不触碰数据库
///
/// 任何一个文件缺失或任何单元格无法解析都会直接返回错误。
pub fn prepare_dataset(data_dir: &Path) -> Result<(CampaignDataset, IngestReport)> {
    let paths = SourcePaths::resolve(data_dir)?;

    let campaign_rows = read_campaign_rows(&paths.campaigns)?;
    let period_rows = read_period_rows(&paths.periods)?;
    let site_rows = read_site_rows(&paths.sites)?;

    let mut report = IngestReport::default();

    let (campaign_rows, dropped) =
        dedup_by_key(campaign_rows, |(_, row)| normalize_key(&row.name));
    report.duplicates_dropped.campaigns = dropped;

    let (period_rows, dropped) = dedup_by_key(period_rows, |(_, row)| {
        (normalize_key(&row.name), normalize_key(&row.period))
    });
    report.duplicates_dropped.periods = dropped;

    let (site_rows, dropped) = dedup_by_key(site_rows, |(_, row)| {
        (normalize_key(&row.name), normalize_key(&row.codigo_del_sitio))
    });
    report.duplicates_dropped.sites = dropped;

    let mut dataset = CampaignDataset::default();

    for (row, raw) in campaign_rows {
        let campaign = raw.into_campaign(RowLocation {
            file: CAMPAIGNS_FILE,
            row,
        })?;
        if campaign.has_inverted_window() {
            warn!(
                "Campaign '{}' (row {}) has fecha_inicio {} after fecha_fin {}",
                campaign.name, row, campaign.fecha_inicio, campaign.fecha_fin
            );
            report.inverted_windows += 1;
        }
        dataset.campaigns.push(campaign);
    }

    for (row, raw) in period_rows {
        dataset.periods.push(raw.into_period(RowLocation {
            file: PERIODS_FILE,
            row,
        })?);
    }

    for (row, raw) in site_rows {
        dataset.sites.push(raw.into_site(RowLocation {
            file: SITES_FILE,
            row,
        })?);
    }

    report.campaigns = dataset.campaigns.len();
    report.periods = dataset.periods.len();
    report.sites = dataset.sites.len();

    Ok((dataset, report))
}

/// 全量导入：读取数据源，重建表结构，写入
pub async fn load(storage: &SeaOrmStorage, options: &IngestOptions) -> Result<IngestReport> {
    info!(
        "Loading campaign data from {} ({} commit)",
        options.data_dir.display(),
        options.commit_mode
    );

    let (dataset, report) = prepare_dataset(&options.data_dir)?;
    storage.replace_all(&dataset, options.commit_mode).await?;

    info!(
        "Ingestion finished: {} campaigns, {} periods, {} sites; duplicates dropped {}/{}/{}; {} inverted windows",
        report.campaigns,
        report.periods,
        report.sites,
        report.duplicates_dropped.campaigns,
        report.duplicates_dropped.periods,
        report.duplicates_dropped.sites,
        report.inverted_windows
    );

    Ok(report)
}
