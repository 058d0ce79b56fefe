//! SeaORM storage backend
//!
//! Campaign / period / site tables on SQLite, MySQL/MariaDB or PostgreSQL.
//! The store is read-mostly: the API only queries it, the batch loader
//! replaces its whole content.

mod connection;
mod converters;
mod mutations;
mod query;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::{AnalyticsError, Result};
use crate::storage::models::{CampaignType, DateWindow};

pub use connection::{connect_generic, connect_sqlite, reset_schema, run_migrations};
pub use converters::{
    campaign_to_active_model, model_to_campaign, model_to_period, model_to_site,
    new_period_to_active_model, new_site_to_active_model,
};

/// 每条 INSERT 语句最多携带的行数（避免超过 SQLite 绑定参数上限）
pub const INSERT_CHUNK_SIZE: usize = 200;

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite://")
        || database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(AnalyticsError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 活动过滤条件
#[derive(Default, Clone, Copy, Debug)]
pub struct CampaignFilter {
    /// tipo_campania 精确匹配（已规范化为小写）
    pub tipo_campania: Option<CampaignType>,
    /// 与 [start, end] 有交集：fecha_inicio <= end AND fecha_fin >= start
    pub window: Option<DateWindow>,
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(database_url: &str, backend_name: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(AnalyticsError::database_config(
                "DATABASE_URL 未设置".to_string(),
            ));
        }

        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, backend_name).await?
        };

        let storage = SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
        };

        run_migrations(&storage.db).await?;

        info!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// 关闭连接池
    pub async fn close(&self) -> Result<()> {
        self.db
            .clone()
            .close()
            .await
            .map_err(|e| AnalyticsError::database_connection(format!("关闭数据库连接失败: {}", e)))
    }
}
