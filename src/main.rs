use clap::Parser;
use colored::Colorize;

use campaign_analytics::cli::{Cli, Commands, ConfigCommands};
use campaign_analytics::{config, runtime, system};

fn exit_with_error(e: &anyhow::Error) -> ! {
    eprintln!("{} {:#}", "Error:".bold().red(), e);
    std::process::exit(1);
}

#[actix_web::main]
async fn main() {
    dotenvy::dotenv().ok();

    let Cli {
        config: config_path,
        command,
    } = Cli::parse();

    // config generate 不依赖已有配置与日志
    let command = match command {
        Some(Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        }) => {
            if let Err(e) = runtime::modes::run_config_generate(output_path, force) {
                exit_with_error(&e);
            }
            return;
        }
        other => other,
    };

    config::init_config_from(config_path.as_deref());
    let app_config = config::get_config();

    // guard 必须存活到进程结束，保证非阻塞日志被刷新
    let log_guard = match system::logging::init_logging(&app_config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{} {:#}", "Failed to initialize logging:".bold().red(), e);
            std::process::exit(1);
        }
    };

    let result = match command {
        Some(Commands::Load {
            data_dir,
            commit_mode,
        }) => runtime::modes::run_ingest(data_dir, commit_mode)
            .await
            .map(|_| ()),
        Some(Commands::Serve) | None => runtime::modes::run_server().await,
        Some(Commands::Config { .. }) => Ok(()),
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        // exit 不会运行析构，先刷新日志
        drop(log_guard);
        exit_with_error(&e);
    }
}
