use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;

use roomring::cli::{self, OccupancyArgs, OutputFormat};
use roomring::DEFAULT_PORT;

#[derive(Parser)]
#[command(name = "roomring")]
#[command(about = "Room and desk occupancy rings", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct QueryArgs {
    /// JSON file with an array of bookings ("-" for stdin)
    #[arg(long)]
    bookings: String,
    /// Only count bookings on this day (e.g., "2024-01-01")
    #[arg(long)]
    day: Option<String>,
    /// Window start (e.g., "09:00"); defaults to the bookable start
    #[arg(long)]
    start: Option<String>,
    /// Window end (e.g., "17:00"); defaults to the bookable end
    #[arg(long)]
    end: Option<String>,
}

impl QueryArgs {
    fn as_args(&self) -> OccupancyArgs<'_> {
        OccupancyArgs {
            bookings: &self.bookings,
            day: self.day.as_deref(),
            start: self.start.as_deref(),
            end: self.end.as_deref(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show occupied and free time for a window
    Occupancy {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Show occupied ring segments only
    Segments {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Show busy segments split into own and other
    Busy {
        #[command(flatten)]
        query: QueryArgs,
        /// Owner whose bookings count as own
        #[arg(long)]
        viewer: Option<String>,
    },
    /// Configure window settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the default bookable window
    Bookable {
        /// Start time (HH:MM)
        start: String,
        /// End time (HH:MM)
        end: String,
    },
    /// Set the business-day window used for the default bookable window
    Business {
        /// Start time (HH:MM)
        start: String,
        /// End time (HH:MM)
        end: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roomring=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    match cli.command {
        Commands::Occupancy { query } => {
            cli::run_occupancy(&query.as_args(), format)?;
        }
        Commands::Segments { query } => {
            cli::run_segments(&query.as_args(), format)?;
        }
        Commands::Busy { query, viewer } => {
            cli::run_busy(&query.as_args(), viewer.as_deref(), format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                cli::run_config_show(format)?;
            }
            ConfigAction::Bookable { start, end } => {
                cli::run_config_bookable(&start, &end, format)?;
            }
            ConfigAction::Business { start, end } => {
                cli::run_config_business(&start, &end, format)?;
            }
        },
        Commands::Serve { port } => {
            let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;
            let window = cli::load_window_config()?;
            roomring::server::run_server(addr, window).await?;
        }
    }

    Ok(())
}
