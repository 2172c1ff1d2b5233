use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use interfluence::cli::{self, config::ConfigCommands, corpus::CorpusCommands};
use interfluence::cli::{learnings::LearningsCommands, voice::VoiceCommands};
use interfluence::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "interfluence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Voice profile tool server: corpus, voices and learnings", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory holding .interfluence/ (default: current directory)
    #[arg(long, global = true, env = "INTERFLUENCE_PROJECT_DIR")]
    project_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server over stdio
    Serve,

    /// Writing sample corpus operations
    #[command(subcommand)]
    Corpus(CorpusCommands),

    /// Voice profile operations
    #[command(subcommand)]
    Voice(VoiceCommands),

    /// Configuration operations
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Learnings log operations
    #[command(subcommand)]
    Learnings(LearningsCommands),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    // stdout carries JSON-RPC; logs go to stderr only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        generate(shell, &mut Cli::command(), "interfluence", &mut io::stdout());
        return Ok(());
    }

    let project_root = cli::resolve_project_dir(cli.project_dir)?;

    match cli.command {
        Commands::Serve => cli::serve::run(&project_root).await?,
        Commands::Corpus(cmd) => cli::corpus::run(cmd, &project_root)?,
        Commands::Voice(cmd) => cli::voice::run(cmd, &project_root)?,
        Commands::Config(cmd) => cli::config::run(cmd, &project_root)?,
        Commands::Learnings(cmd) => cli::learnings::run(cmd, &project_root)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
