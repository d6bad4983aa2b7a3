//! MediMate Control - CLI client for the MediMate health companion.
//!
//! Wraps the rule engines and the on-disk state store in subcommands.
//! All analysis is local and deterministic; nothing leaves the machine.

mod commands;
mod output;
mod spinner;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use medimate_core::{paths, StateStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "medimatectl")]
#[command(about = "MediMate - Your personal health companion", long_about = None)]
#[command(version)]
struct Cli {
    /// Override the data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Skip the simulated analysis delay
    #[arg(long, global = true)]
    no_wait: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Signup {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address (used as the account key, case sensitive)
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// Sign in to an existing account
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out of the current session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Run the symptom checker
    Check {
        /// Symptom to analyze (repeatable); omit for the interactive picker
        #[arg(long = "symptom")]
        symptoms: Vec<String>,

        /// Severity, 1-10
        #[arg(long)]
        severity: Option<u8>,

        /// Emotional state, 1-10
        #[arg(long)]
        emotional_state: Option<u8>,

        /// How long the symptoms have lasted
        #[arg(long)]
        duration: Option<String>,
    },

    /// Scan a medical report file (demo analysis)
    Scan {
        /// Path to a jpg, png, or pdf report (max 10 MB)
        file: PathBuf,
    },

    /// Take the skin analysis questionnaire
    Skin,

    /// Play the health knowledge quiz
    Quiz,

    /// Show today's wellness tip
    Tip,

    /// Submit feedback
    Feedback {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Feedback category (see `feedback --help` output for the list)
        #[arg(long)]
        category: Option<String>,

        /// Rating, 1-5 stars
        #[arg(long)]
        rating: Option<u8>,

        #[arg(long)]
        message: Option<String>,
    },

    /// Show activity summary and recent history
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MEDIMATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let root = cli.data_dir.unwrap_or_else(paths::data_dir);
    let mut store = StateStore::with_root(root);

    match cli.command {
        Commands::Signup { name, email, password } => {
            commands::account::signup(&mut store, &name, &email, &password)
        }
        Commands::Login { email, password } => commands::account::login(&mut store, &email, &password),
        Commands::Logout => commands::account::logout(&mut store),
        Commands::Whoami => commands::account::whoami(&store),
        Commands::Check { symptoms, severity, emotional_state, duration } => {
            commands::check::run(&mut store, symptoms, severity, emotional_state, duration, cli.no_wait)
                .await
        }
        Commands::Scan { file } => commands::scan::run(&mut store, &file, cli.no_wait).await,
        Commands::Skin => commands::skin::run(&mut store, cli.no_wait).await,
        Commands::Quiz => commands::quiz::run(&mut store, cli.no_wait).await,
        Commands::Tip => commands::quiz::tip(),
        Commands::Feedback { name, email, category, rating, message } => {
            commands::feedback::run(&store, name, email, category, rating, message)
        }
        Commands::Dashboard => commands::dashboard::run(&store),
    }
}
