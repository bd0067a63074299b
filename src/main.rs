use billing_etl::utils::{logger, validation::Validate};
use billing_etl::{BillingError, BillingPipeline, CliConfig, EtlEngine, LocalStorage};
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 配置檔錯誤發生在日誌初始化之前，只能直接輸出到 stderr
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(settings.verbose, settings.log_format);

    tracing::info!("Starting billing CLI");
    tracing::debug!("Run settings: {:?}", settings);

    if let Err(e) = settings.billing.validate() {
        fail(&e);
    }

    let storage = LocalStorage::new(".");
    let pipeline = BillingPipeline::new(storage, settings.billing.clone());
    let engine = EtlEngine::new(pipeline);

    if settings.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the bill is printed, not written");
        let lines = engine.preview().unwrap_or_else(|e| fail(&e));

        let mut stdout = std::io::stdout().lock();
        for line in &lines {
            writeln!(stdout, "{}", line)?;
        }
        stdout.flush()?;
        return Ok(());
    }

    match engine.run() {
        Ok(summary) => {
            println!("✅ Bill written to {}", summary.output_path.display());
            println!(
                "📄 {} lines, {} unparsable, total {}",
                summary.line_count, summary.error_count, summary.total
            );
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &BillingError) -> ! {
    tracing::error!(
        "❌ Billing run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
