//! gravwell CLI: viewer, headless runs and config tooling.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "gravwell")]
#[command(version, about = "gravwell - masses deforming a spacetime fabric")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive viewer.
    View {
        /// Scene config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Place bodies headlessly and report the resulting fabric.
    Run {
        /// Scene config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Planets to add, cycling through the palette.
        #[arg(short, long, default_value_t = 3)]
        planets: usize,

        /// Collapsed bodies to add.
        #[arg(long, default_value_t = 0)]
        collapsed: usize,

        /// Spawn seed; overrides the config's.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate a scene config file.
    Validate {
        /// Path to the config file.
        path: String,
    },

    /// Print the default scene config as TOML.
    Config,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "debug,wgpu=warn,naga=warn"
    } else {
        "info,wgpu=warn,naga=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::View { config } => commands::view(config.as_deref()),
        Commands::Run {
            config,
            planets,
            collapsed,
            seed,
            json,
        } => commands::run(config.as_deref(), planets, collapsed, seed, json),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Config => commands::print_default_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
