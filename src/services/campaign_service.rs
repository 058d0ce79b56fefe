//! Campaign query service
//!
//! Validation of list/search parameters and the detail assembly shared by
//! the HTTP handlers.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::summary::CampaignDetail;
use crate::errors::{AnalyticsError, Result};
use crate::storage::{Campaign, CampaignFilter, CampaignType, DateWindow, SeaOrmStorage};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 5;
pub const MAX_PAGE_SIZE: u64 = 50;

/// 一页结果
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 所有匹配行数（不受分页影响）
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

/// 校验分页参数：page >= 1, 1 <= page_size <= 50
pub fn validate_pagination(page: u64, page_size: u64) -> Result<()> {
    if page < 1 {
        return Err(AnalyticsError::invalid_pagination(
            "page debe ser mayor o igual a 1",
        ));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(AnalyticsError::invalid_pagination(format!(
            "limit debe estar entre 1 y {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(())
}

/// 解析 tipo_campania 过滤参数；空字符串等同于未提供
pub fn parse_type_filter(raw: Option<&str>) -> Result<Option<CampaignType>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<CampaignType>()
            .map(Some)
            .map_err(AnalyticsError::invalid_campaign_type),
    }
}

pub struct CampaignService {
    storage: Arc<SeaOrmStorage>,
}

impl CampaignService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// 分页列出活动，按 fecha_inicio 降序
    pub async fn list_campaigns(
        &self,
        page: u64,
        page_size: u64,
        tipo_campania: Option<&str>,
    ) -> Result<Page<Campaign>> {
        let tipo_campania = parse_type_filter(tipo_campania)?;
        validate_pagination(page, page_size)?;

        let filter = CampaignFilter {
            tipo_campania,
            window: None,
        };
        let (items, total) = self
            .storage
            .load_campaigns_page(filter, page, page_size)
            .await?;

        info!(
            "Fetched {} campaigns (total={}, page={}, limit={})",
            items.len(),
            total,
            page,
            page_size
        );

        Ok(Page {
            items,
            total,
            page,
            page_size,
        })
    }

    /// 查找活动期与 [start, end] 有交集的活动
    pub async fn search_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        page: u64,
        page_size: u64,
        tipo_campania: Option<&str>,
    ) -> Result<Page<Campaign>> {
        if start > end {
            return Err(AnalyticsError::invalid_date_range(
                "start_date debe ser anterior o igual a end_date",
            ));
        }
        let tipo_campania = parse_type_filter(tipo_campania)?;
        validate_pagination(page, page_size)?;

        let filter = CampaignFilter {
            tipo_campania,
            window: Some(DateWindow { start, end }),
        };
        let (items, total) = self
            .storage
            .load_campaigns_page(filter, page, page_size)
            .await?;

        info!(
            "Date search returned {} campaigns (total={}, page={}, limit={})",
            items.len(),
            total,
            page,
            page_size
        );

        Ok(Page {
            items,
            total,
            page,
            page_size,
        })
    }

    pub async fn get_campaign(&self, name: &str) -> Result<Option<Campaign>> {
        self.storage.get_campaign(name).await
    }

    /// 活动详情（含 periods / sites 与三个汇总块）
    pub async fn get_campaign_detail(&self, name: &str) -> Result<Option<CampaignDetail>> {
        let bundle = self.storage.load_campaign_bundle(name).await?;
        Ok(bundle.map(CampaignDetail::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pagination() {
        assert!(validate_pagination(1, 1).is_ok());
        assert!(validate_pagination(3, 50).is_ok());

        let err = validate_pagination(0, 5).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidPagination(_)));
        assert!(validate_pagination(1, 0).is_err());
        assert!(validate_pagination(1, 51).is_err());
    }

    #[test]
    fn test_parse_type_filter() {
        assert_eq!(parse_type_filter(None).unwrap(), None);
        assert_eq!(parse_type_filter(Some("")).unwrap(), None);
        assert_eq!(
            parse_type_filter(Some("MENSUAL")).unwrap(),
            Some(CampaignType::Mensual)
        );

        let err = parse_type_filter(Some("anual")).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidCampaignType(_)));
        assert_eq!(
            err.message(),
            "tipo_campania debe ser uno de: catorcenal, mensual"
        );
    }
}
