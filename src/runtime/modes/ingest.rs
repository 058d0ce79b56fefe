//! Load mode
//!
//! One-shot CSV ingestion: reads the three sources and replaces the store.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use crate::config::CommitMode;
use crate::ingest::{self, IngestOptions, IngestReport};
use crate::storage::StorageFactory;

/// 执行一次完整导入；命令行参数覆盖配置文件中的值
pub async fn run_ingest(
    data_dir: Option<String>,
    commit_mode: Option<CommitMode>,
) -> Result<IngestReport> {
    let mut options = IngestOptions::from_config();
    if let Some(dir) = data_dir {
        options.data_dir = PathBuf::from(dir);
    }
    if let Some(mode) = commit_mode {
        options.commit_mode = mode;
    }

    info!(
        "Starting ingestion from {} (commit mode: {})",
        options.data_dir.display(),
        options.commit_mode
    );

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;

    let result = ingest::load(&storage, &options).await;

    // 无论导入成功与否都释放连接池
    if let Err(e) = storage.close().await {
        tracing::warn!("Failed to close database connection pool: {}", e);
    }

    let report = result?;
    print_report(&report);
    Ok(report)
}

fn print_report(report: &IngestReport) {
    println!("{}", "Ingestion completed".bold().green());
    println!("  {} {}", "campaigns:".cyan(), report.campaigns);
    println!("  {} {}", "periods:  ".cyan(), report.periods);
    println!("  {} {}", "sites:    ".cyan(), report.sites);

    let dups = report.duplicates_dropped;
    if dups.campaigns + dups.periods + dups.sites > 0 {
        println!(
            "  {} campaigns={}, periods={}, sites={}",
            "duplicates dropped:".yellow(),
            dups.campaigns,
            dups.periods,
            dups.sites
        );
    }
    if report.inverted_windows > 0 {
        println!(
            "  {} {}",
            "campaigns with fecha_inicio > fecha_fin:".yellow(),
            report.inverted_windows
        );
    }
}
