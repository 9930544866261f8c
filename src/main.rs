use clap::Parser;
use feature_showcase::config::toml_config::OutputConfig;
use feature_showcase::config::Command;
use feature_showcase::core::{catalog, delay, pricing, rating, Demo};
use feature_showcase::utils::error::ErrorSeverity;
use feature_showcase::utils::{logger, validation::Validate};
use feature_showcase::{
    concatenate, day_type, demos_from_config, is_string, process_value, transform_case, Car,
    CliConfig, LocalStorage, ShowcaseConfig, ShowcaseEngine, ShowcaseError, Vehicle,
};
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = execute(config.command).await {
        tracing::error!(
            "❌ Command failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn execute(command: Command) -> feature_showcase::Result<()> {
    match command {
        Command::Case { text, lower } => {
            println!("{}", transform_case(&text, Some(!lower)));
        }
        Command::Ratings { file } => {
            let items = catalog::load_items(&LocalStorage::new("."), &file).await?;
            let top = rating::filter_top_rated(&items);
            println!("{}", serde_json::to_string_pretty(&top)?);
        }
        Command::Concat { lists } => {
            let sequences = lists.iter().map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            });
            println!("{}", serde_json::to_string(&concatenate(sequences))?);
        }
        Command::Vehicle { make, year, model } => match model {
            Some(model) => {
                let car = Car::new(make, year, model);
                println!("{}", car.info());
                println!("{}", car.model_info());
            }
            None => println!("{}", Vehicle::new(make, year).info()),
        },
        Command::Value { input } => {
            let kind = if is_string(&input) { "string" } else { "number" };
            println!("{} ({})", process_value(&input), kind);
        }
        Command::Priciest { file } => {
            let products = catalog::load_products(&LocalStorage::new("."), &file).await?;
            match pricing::most_expensive_product(&products) {
                Some(product) => println!("{} ({})", product.name, product.price),
                None => println!("No products found in {}", file),
            }
        }
        Command::Day { day } => {
            println!("{}: {}", day, day_type(day));
        }
        Command::Square { number, delay_ms } => {
            let squared = delay::square_after(number, Duration::from_millis(delay_ms)).await?;
            println!("{}", squared);
        }
        Command::Run {
            config,
            output_path,
            dry_run,
        } => run_config(&config, output_path, dry_run).await?,
    }
    Ok(())
}

async fn run_config(
    config_path: &str,
    output_path: Option<String>,
    dry_run: bool,
) -> feature_showcase::Result<()> {
    tracing::info!("📁 Loading configuration from: {}", config_path);
    let mut config = ShowcaseConfig::from_file(config_path)?;

    // 命令列覆蓋輸出路徑
    if let Some(path) = output_path {
        match config.output.as_mut() {
            Some(output) => output.path = path,
            None => config.output = Some(OutputConfig { path, filename: None }),
        }
    }
    config.validate()?;

    // 評分與商品檔案的相對路徑以設定檔所在目錄為準
    let data_dir = Path::new(config_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let data_storage = LocalStorage::new(data_dir);

    let demos = demos_from_config(&config, &data_storage).await?;
    if dry_run {
        println!("Showcase '{}' would run {} demos:", config.showcase.name, demos.len());
        for demo in &demos {
            println!("  - {}", demo.name());
        }
        return Ok(());
    }

    let engine = ShowcaseEngine::with_demos(config.showcase.name.clone(), demos);
    let report = engine.run().await;

    match &config.output {
        Some(output) => {
            let storage = LocalStorage::new(&output.path);
            let filename = report.save(&storage, config.report_filename()).await?;
            println!("📁 Report saved to: {}", storage.base_path().join(filename).display());
        }
        None => println!("{}", report.to_json()?),
    }

    if report.failed() > 0 {
        return Err(ShowcaseError::ProcessingError {
            message: format!("{} of {} demos failed", report.failed(), report.outcomes.len()),
        });
    }
    println!("✅ {} demos completed", report.succeeded());
    Ok(())
}
