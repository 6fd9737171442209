mod commands;
mod setup;

use clap::{Parser, Subcommand};
use commands::FormKind;
use models::forms::{BookingForm, LoginForm};
use std::path::PathBuf;
use std::process::ExitCode;

/// Front desk client for the hotel reservation API
#[derive(Parser)]
#[command(name = "innkeeper", version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Base URL of the API, overrides INNKEEPER_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a stay without contacting the server
    Quote {
        #[arg(long)]
        check_in: String,
        #[arg(long)]
        check_out: String,
        /// Nightly rate of the room
        #[arg(long)]
        rate: Option<f64>,
    },
    /// Check a form saved as JSON and print its first error
    Validate {
        #[arg(value_enum)]
        form: FormKind,
        file: PathBuf,
    },
    /// List rooms, or only those free for the given dates
    Rooms {
        #[arg(long, requires = "check_out")]
        check_in: Option<String>,
        #[arg(long, requires = "check_in")]
        check_out: Option<String>,
    },
    /// Sign in and book a room
    Book {
        #[arg(long)]
        username: String,
        #[arg(long, env = "INNKEEPER_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        room_id: String,
        #[arg(long)]
        check_in: String,
        #[arg(long)]
        check_out: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    setup::load_env();
    let cli = Cli::parse();
    setup::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Quote { check_in, check_out, rate } => Ok(commands::quote(&check_in, &check_out, rate)),
        Commands::Validate { form, file } => commands::validate(form, &file),
        Commands::Rooms { check_in, check_out } => match setup::connect(cli.api_url.as_deref()) {
            Ok(desk) => Ok(commands::rooms(&desk, check_in, check_out).await),
            Err(e) => Err(e.into()),
        },
        Commands::Book { username, password, room_id, check_in, check_out } => {
            match setup::connect(cli.api_url.as_deref()) {
                Ok(desk) => {
                    let credentials = LoginForm { username, password };
                    let booking = BookingForm { room_id, check_in, check_out };
                    Ok(commands::book(&desk, credentials, booking).await)
                }
                Err(e) => Err(e.into()),
            }
        }
    };

    result.unwrap_or_else(|e: anyhow::Error| {
        tracing::error!("Fatal error: {}", e);
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    })
}
