use std::sync::{Arc, OnceLock};

use super::StaticConfig;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .clone()
}

/// Initialize the global configuration
///
/// Loads configuration from "config.toml" in the current directory.
/// If the file doesn't exist, uses in-memory defaults.
///
/// # Examples
/// ```no_run
/// use campaign_analytics::config::init_config;
/// init_config();
/// ```
pub fn init_config() {
    init_config_from(None);
}

/// 使用指定的配置文件路径初始化（`--config`）
///
/// 只有第一次调用生效，进程运行期间配置不再变化。
pub fn init_config_from(path: Option<&str>) {
    CONFIG.get_or_init(|| Arc::new(StaticConfig::load_from(path)));
}
