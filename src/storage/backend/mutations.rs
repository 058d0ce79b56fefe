//! Mutation operations for SeaOrmStorage
//!
//! The only write path is a full replace performed by the batch loader.

use sea_orm::{ConnectionTrait, EntityTrait, TransactionTrait};
use tracing::{info, warn};

use super::converters::{
    campaign_to_active_model, new_period_to_active_model, new_site_to_active_model,
};
use super::{INSERT_CHUNK_SIZE, SeaOrmStorage, reset_schema};
use crate::config::CommitMode;
use crate::errors::{AnalyticsError, Result};
use crate::storage::models::{Campaign, CampaignDataset, NewCampaignPeriod, NewCampaignSite};

use migration::entities::{campaign, campaign_period, campaign_site};

async fn insert_campaigns<C: ConnectionTrait>(conn: &C, campaigns: &[Campaign]) -> Result<()> {
    for chunk in campaigns.chunks(INSERT_CHUNK_SIZE) {
        let models: Vec<campaign::ActiveModel> =
            chunk.iter().map(campaign_to_active_model).collect();
        campaign::Entity::insert_many(models)
            .exec(conn)
            .await
            .map_err(|e| AnalyticsError::database_operation(format!("写入 campaigns 失败: {}", e)))?;
    }
    Ok(())
}

async fn insert_periods<C: ConnectionTrait>(conn: &C, periods: &[NewCampaignPeriod]) -> Result<()> {
    for chunk in periods.chunks(INSERT_CHUNK_SIZE) {
        let models: Vec<campaign_period::ActiveModel> =
            chunk.iter().map(new_period_to_active_model).collect();
        campaign_period::Entity::insert_many(models)
            .exec(conn)
            .await
            .map_err(|e| AnalyticsError::database_operation(format!("写入 periods 失败: {}", e)))?;
    }
    Ok(())
}

async fn insert_sites<C: ConnectionTrait>(conn: &C, sites: &[NewCampaignSite]) -> Result<()> {
    for chunk in sites.chunks(INSERT_CHUNK_SIZE) {
        let models: Vec<campaign_site::ActiveModel> =
            chunk.iter().map(new_site_to_active_model).collect();
        campaign_site::Entity::insert_many(models)
            .exec(conn)
            .await
            .map_err(|e| AnalyticsError::database_operation(format!("写入 sites 失败: {}", e)))?;
    }
    Ok(())
}

impl SeaOrmStorage {
    /// 重建表结构并写入整个数据集
    ///
    /// - `Atomic`：三张表在同一事务中写入，失败时库中为空表
    /// - `TwoPhase`：campaigns 先提交；periods + sites 失败时只回滚第二个事务
    pub async fn replace_all(&self, dataset: &CampaignDataset, mode: CommitMode) -> Result<()> {
        reset_schema(&self.db).await?;
        self.write_dataset(dataset, mode).await
    }

    /// 按提交模式写入数据集，不清空已有数据
    ///
    /// 由 `replace_all` 在重建表结构后调用。
    pub async fn write_dataset(&self, dataset: &CampaignDataset, mode: CommitMode) -> Result<()> {
        match mode {
            CommitMode::Atomic => {
                let txn = self.db.begin().await.map_err(|e| {
                    AnalyticsError::database_operation(format!("开始事务失败: {}", e))
                })?;

                insert_campaigns(&txn, &dataset.campaigns).await?;
                insert_periods(&txn, &dataset.periods).await?;
                insert_sites(&txn, &dataset.sites).await?;

                txn.commit().await.map_err(|e| {
                    AnalyticsError::database_operation(format!("提交事务失败: {}", e))
                })?;
            }
            CommitMode::TwoPhase => {
                let txn = self.db.begin().await.map_err(|e| {
                    AnalyticsError::database_operation(format!("开始事务失败: {}", e))
                })?;
                insert_campaigns(&txn, &dataset.campaigns).await?;
                txn.commit().await.map_err(|e| {
                    AnalyticsError::database_operation(format!("提交事务失败: {}", e))
                })?;
                info!("Committed {} campaigns", dataset.campaigns.len());

                let txn = self.db.begin().await.map_err(|e| {
                    AnalyticsError::database_operation(format!("开始事务失败: {}", e))
                })?;
                let child_result = async {
                    insert_periods(&txn, &dataset.periods).await?;
                    insert_sites(&txn, &dataset.sites).await
                }
                .await;

                if let Err(e) = child_result {
                    warn!("Rolling back periods/sites, campaigns stay committed: {}", e);
                    if let Err(rollback_err) = txn.rollback().await {
                        warn!("Rollback failed: {}", rollback_err);
                    }
                    return Err(e);
                }

                txn.commit().await.map_err(|e| {
                    AnalyticsError::database_operation(format!("提交事务失败: {}", e))
                })?;
            }
        }

        info!(
            "Stored {} campaigns, {} periods, {} sites ({} commit)",
            dataset.campaigns.len(),
            dataset.periods.len(),
            dataset.sites.len(),
            mode
        );
        Ok(())
    }
}
