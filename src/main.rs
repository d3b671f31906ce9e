use clap::Parser;
use medicino::domain::ports::ConfigProvider;
use medicino::utils::error::ErrorSeverity;
use medicino::utils::{logger, validation::Validate};
use medicino::{
    ActionHandlers, ActionOutcome, BackendResolver, CliConfig, Command, MedicinoApi,
    MedicinoError, Notice, TomlConfig,
};
use std::io::Read;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let exit_code = match run(config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(
                "❌ medicino failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            }
        }
    };

    std::process::exit(exit_code);
}

async fn run(config: CliConfig) -> medicino::Result<i32> {
    let provider: Box<dyn ConfigProvider> = match &config.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            let file_config = TomlConfig::from_file(path)?.with_pinned_backend(config.backend);
            file_config.validate()?;
            Box::new(file_config)
        }
        None => {
            config.validate()?;
            Box::new(config.clone())
        }
    };

    let api = MedicinoApi::from_config(provider.as_ref());
    let handlers = ActionHandlers::new(&api);

    if config.command.needs_backend() {
        let resolver = BackendResolver::from_config(provider.as_ref());
        let selected = api
            .select_backend(&resolver, provider.pinned_backend())
            .await;

        if selected.is_none() {
            if config.command == Command::Detect {
                return Err(MedicinoError::NoBackendDetected);
            }
            present(&ActionOutcome {
                notice: Some(Notice::error(
                    MedicinoError::NoBackendDetected.user_friendly_message(),
                )),
                body: None,
            });
        }
    }

    let outcome = match &config.command {
        Command::Diagnose { symptoms } => {
            let text = if symptoms.is_empty() {
                read_dictated_symptoms()?
            } else {
                symptoms.join(" ")
            };
            handlers.diagnose(&text).await
        }
        Command::Medicine { name } => handlers.search_medicine(&name.join(" ")).await,
        Command::Medicines => handlers.list_medicines().await,
        Command::History => handlers.show_history().await,
        Command::Emergency => handlers.emergency_guide(),
        Command::About => handlers.about(),
        Command::Detect => {
            let target = api.gateway().active_target();
            ActionOutcome {
                notice: Some(Notice::success(format!(
                    "Using {} backend at {}",
                    target.kind, target.base_url
                ))),
                body: None,
            }
        }
    };

    present(&outcome);
    Ok(if outcome.is_failure() { 1 } else { 0 })
}

fn read_dictated_symptoms() -> medicino::Result<String> {
    tracing::info!("🎙️ Reading symptoms from stdin");
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn present(outcome: &ActionOutcome) {
    if let Some(notice) = &outcome.notice {
        notice.log();
        if notice.is_error() {
            eprintln!("{}", notice);
        } else {
            println!("{}", notice);
        }
    }
    if let Some(body) = &outcome.body {
        println!("{}", body);
    }
}
