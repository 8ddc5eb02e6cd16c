use clap::{Parser, Subcommand};
use import_audit::{Analyzer, Config, Reporter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "import-audit")]
#[command(about = "Cross-check Python imports against a requirements.txt manifest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a source tree against its dependency manifest
    Audit {
        /// Root directory to scan for source files (default ".")
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Dependency manifest to audit against (default "requirements.txt")
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Generate a default configuration file
    Config {
        /// Output path for the config file
        #[arg(short, long, default_value = "import-audit.toml")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            path,
            manifest,
            config,
        } => audit(path, manifest, config)?,
        Commands::Config { output } => generate_config(output)?,
    }

    Ok(())
}

fn audit(
    path: Option<PathBuf>,
    manifest: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(config_path) => Config::from_file(&config_path)?,
        None => Config::default(),
    };

    // CLI flags win over the config file.
    if let Some(path) = path {
        config.source_dir = path;
    }
    if let Some(manifest) = manifest {
        config.manifest_path = manifest;
    }

    let analyzer = Analyzer::new(config)?;
    let result = analyzer.run()?;

    Reporter::new().print_report(&result);

    // Discrepancies are informational, not failures.
    Ok(())
}

fn generate_config(output_path: PathBuf) -> anyhow::Result<()> {
    std::fs::write(&output_path, Config::create_documented_config())?;
    println!("Configuration file created: {}", output_path.display());
    Ok(())
}
