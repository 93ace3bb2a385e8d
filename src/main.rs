use clap::Parser;
use team_directory::core::ConfigProvider;
use team_directory::utils::{logger, validation::Validate};
use team_directory::{
    AirtableSource, CliConfig, DirectoryExporter, EnvConfig, LocalStorage, TeamDirectoryProvider,
    TomlConfig,
};

async fn export<C: ConfigProvider>(cli: &CliConfig, config: C) -> team_directory::Result<()> {
    let storage = LocalStorage::new(cli.output_path.clone());
    let provider = TeamDirectoryProvider::new(AirtableSource::new(config));
    let exporter = DirectoryExporter::with_filename(storage, provider, &cli.filename);

    let summary = exporter.run().await?;
    if let team_directory::DirectoryOrigin::Fallback { reason } = summary.origin {
        tracing::warn!("⚠️ Exported fallback roster: {}", reason);
    }
    println!(
        "✅ Exported {} team members to {}",
        summary.member_count, summary.location
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(logger::LogFormat::from_flag(cli.json_logs), cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    // A broken settings file must not break the site build: fall back to the
    // AIRTABLE_* variables, and from there to the embedded roster.
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::error!("❌ Could not load {}: {}", path, e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                None
            }
        },
        None => None,
    };

    let result = match file_config {
        Some(config) => export(&cli, config).await,
        None => export(&cli, EnvConfig::new()).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Export failed: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
