use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::services::CampaignService;
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub campaign_service: Arc<CampaignService>,
}

/// 准备服务器启动的上下文：连接存储（含迁移）并构建服务
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let stats = storage
        .get_stats()
        .await
        .context("Failed to read store statistics")?;
    if stats.campaigns == 0 {
        info!("Store is empty, run `campaign-analytics load` to import data");
    } else {
        info!(
            "Store holds {} campaigns, {} periods, {} sites",
            stats.campaigns, stats.periods, stats.sites
        );
    }

    let campaign_service = Arc::new(CampaignService::new(storage.clone()));

    debug!(
        "Pre-startup processing completed in {:.2?}",
        start_time.elapsed()
    );

    Ok(StartupContext {
        storage,
        campaign_service,
    })
}
