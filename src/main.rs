use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chatpage::application::services::ConvertService;
use chatpage::infrastructure::config::Config;
use chatpage::infrastructure::media::FfmpegTranscoder;

#[derive(Parser)]
#[command(name = "chatpage")]
#[command(about = "Render an exported WhatsApp chat as a static HTML page", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "chatpage.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an export directory to a chat page
    Convert {
        /// Export directory (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output root directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output } => {
            run_convert(cli.config, input, output);
        }
        Commands::Version => {
            println!("chatpage v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_convert(config_path: String, input: Option<PathBuf>, output: Option<PathBuf>) {
    // Load config
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    if let Some(input) = input {
        config.input.directory = input;
    }
    if let Some(output) = output {
        config.output.directory = output;
    }

    tracing::info!("Converting {}", config.input.directory.display());

    let transcoder = FfmpegTranscoder::new(config.transcoder.command.clone());
    let service = ConvertService::new(config, transcoder);
    match service.run() {
        Ok(page) => {
            println!("{}", page.display());
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_config() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    println!("{}", yaml);
    println!("\nSave this to chatpage.yaml and adjust as needed.");
}
