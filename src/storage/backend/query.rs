//! Query operations for SeaOrmStorage
//!
//! Every multi-statement read runs inside one transaction so that a
//! concurrent reload cannot be observed half-way.

use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use tracing::debug;

use super::converters::{model_to_campaign, model_to_period, model_to_site};
use super::{CampaignFilter, SeaOrmStorage};
use crate::errors::{AnalyticsError, Result};
use crate::storage::models::{Campaign, CampaignBundle, StoreStats};

use migration::entities::{campaign, campaign_period, campaign_site};

fn build_condition(filter: &CampaignFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(tipo) = filter.tipo_campania {
        condition = condition.add(campaign::Column::TipoCampania.eq(tipo.as_str()));
    }

    if let Some(window) = filter.window {
        condition = condition
            .add(campaign::Column::FechaInicio.lte(window.end))
            .add(campaign::Column::FechaFin.gte(window.start));
    }

    condition
}

/// 第 `page` 页（从 1 开始）的行偏移
///
/// 乘法溢出或超出 SQL OFFSET 可表示的范围（i64）时返回 None。
pub(crate) fn page_offset(page: u64, page_size: u64) -> Option<u64> {
    page.saturating_sub(1)
        .checked_mul(page_size)
        .filter(|offset| i64::try_from(*offset).is_ok())
}

impl SeaOrmStorage {
    /// 带过滤条件的分页查询
    ///
    /// 排序：fecha_inicio 降序，同一天按 name 升序。`page` 从 1 开始。
    pub async fn load_campaigns_page(
        &self,
        filter: CampaignFilter,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Campaign>, u64)> {
        let condition = build_condition(&filter);

        let txn = self.db.begin().await.map_err(|e| {
            AnalyticsError::database_operation(format!("开始事务失败: {}", e))
        })?;

        let total = campaign::Entity::find()
            .filter(condition.clone())
            .count(&txn)
            .await
            .map_err(|e| AnalyticsError::database_operation(format!("统计活动数量失败: {}", e)))?;

        // 越界页不再查询，直接返回空列表和 total
        let offset = page_offset(page, page_size).filter(|offset| *offset < total);
        let models = match offset {
            Some(offset) => campaign::Entity::find()
                .filter(condition)
                .order_by_desc(campaign::Column::FechaInicio)
                .order_by_asc(campaign::Column::Name)
                .offset(offset)
                .limit(page_size)
                .all(&txn)
                .await
                .map_err(|e| AnalyticsError::database_operation(format!("分页查询失败: {}", e)))?,
            None => Vec::new(),
        };

        txn.commit()
            .await
            .map_err(|e| AnalyticsError::database_operation(format!("提交事务失败: {}", e)))?;

        debug!(
            "load_campaigns_page: filter={:?}, page={}, size={}, total={}",
            filter,
            page,
            page_size,
            total
        );

        Ok((models.into_iter().map(model_to_campaign).collect(), total))
    }

    /// 按名称精确查找（大小写敏感）
    pub async fn get_campaign(&self, name: &str) -> Result<Option<Campaign>> {
        let model = campaign::Entity::find_by_id(name.to_string())
            .one(&self.db)
            .await
            .map_err(|e| AnalyticsError::database_operation(format!("查询活动失败: {}", e)))?;

        Ok(model.map(model_to_campaign))
    }

    /// 加载活动及其 periods / sites（同一事务内读取，按 id 排序）
    pub async fn load_campaign_bundle(&self, name: &str) -> Result<Option<CampaignBundle>> {
        let txn = self.db.begin().await.map_err(|e| {
            AnalyticsError::database_operation(format!("开始事务失败: {}", e))
        })?;

        let Some(model) = campaign::Entity::find_by_id(name.to_string())
            .one(&txn)
            .await
            .map_err(|e| AnalyticsError::database_operation(format!("查询活动失败: {}", e)))?
        else {
            txn.commit().await.map_err(|e| {
                AnalyticsError::database_operation(format!("提交事务失败: {}", e))
            })?;
            return Ok(None);
        };

        let periods = campaign_period::Entity::find()
            .filter(campaign_period::Column::CampaignName.eq(name))
            .order_by_asc(campaign_period::Column::Id)
            .all(&txn)
            .await
            .map_err(|e| AnalyticsError::database_operation(format!("查询 periods 失败: {}", e)))?;

        let sites = campaign_site::Entity::find()
            .filter(campaign_site::Column::CampaignName.eq(name))
            .order_by_asc(campaign_site::Column::Id)
            .all(&txn)
            .await
            .map_err(|e| AnalyticsError::database_operation(format!("查询 sites 失败: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| AnalyticsError::database_operation(format!("提交事务失败: {}", e)))?;

        Ok(Some(CampaignBundle {
            campaign: model_to_campaign(model),
            periods: periods.into_iter().map(model_to_period).collect(),
            sites: sites.into_iter().map(model_to_site).collect(),
        }))
    }

    /// 各表行数
    pub async fn get_stats(&self) -> Result<StoreStats> {
        let campaigns = campaign::Entity::find().count(&self.db).await?;
        let periods = campaign_period::Entity::find().count(&self.db).await?;
        let sites = campaign_site::Entity::find().count(&self.db).await?;

        Ok(StoreStats {
            campaigns,
            periods,
            sites,
        })
    }
}
