//! Config generate mode

use std::path::Path;

use anyhow::{Result, anyhow};
use colored::Colorize;

use crate::config::StaticConfig;

const DEFAULT_OUTPUT_PATH: &str = "config.example.toml";

/// 生成示例配置文件；目标已存在且未指定 --force 时拒绝覆盖
pub fn run_config_generate(output_path: Option<String>, force: bool) -> Result<()> {
    let path = output_path.unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    if Path::new(&path).exists() && !force {
        println!(
            "{} {}",
            "Configuration file already exists:".bold().yellow(),
            path.cyan()
        );
        println!("  Use {} to overwrite it", "--force".bold());
        return Err(anyhow!("配置文件已存在: {}", path));
    }

    println!("{}", "Generating configuration file...".bold().blue());

    StaticConfig::default()
        .save_to_file(&path)
        .map_err(|e| anyhow!("写入配置文件失败 {}: {}", path, e))?;

    println!(
        "{} {}",
        "Configuration file written to".bold().green(),
        path.cyan()
    );
    println!("  Edit it and pass it with {}", "--config <path>".bold());
    Ok(())
}
