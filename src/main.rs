use anyhow::Context;
use clap::Parser;
use realty_predict::utils::error::ErrorSeverity;
use realty_predict::utils::{logger, validation::Validate};
use realty_predict::web::{self, AppState};
use realty_predict::{CliConfig, ConfigProvider, Dispatcher, LinearModel, TomlConfig};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (如果有指定的話)
    let toml_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let json_logs = cli.log_json || toml_config.as_ref().is_some_and(|c| c.log_json());
    let verbose = cli.verbose
        || toml_config
            .as_ref()
            .and_then(|c| c.log_level())
            .is_some_and(|level| level == "debug" || level == "trace");
    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting realty-predict v{}", env!("CARGO_PKG_VERSION"));

    // 驗證配置
    let settings: Box<dyn ConfigProvider> = match toml_config {
        Some(config) => {
            if let Err(e) = config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            tracing::info!("✅ Configuration loaded from {}", cli.config.as_deref().unwrap_or("?"));
            Box::new(config)
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            Box::new(cli.clone())
        }
    };

    // 載入模型：啟動時載入一次，之後只讀
    let model = match LinearModel::from_file(settings.model_path()) {
        Ok(model) => model,
        Err(e) => {
            tracing::error!(
                "❌ Failed to load model from '{}': {} (Category: {:?}, Severity: {:?})",
                settings.model_path(),
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Critical => 3,
                ErrorSeverity::Medium => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    };

    let state = AppState::new(Dispatcher::new(model));

    let addr: SocketAddr = format!("{}:{}", settings.bind_host(), settings.bind_port())
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                settings.bind_host(),
                settings.bind_port()
            )
        })?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("🚀 realty-predict listening on http://{}", addr);

    web::serve(listener, state)
        .await
        .context("Server terminated with an error")?;

    Ok(())
}
