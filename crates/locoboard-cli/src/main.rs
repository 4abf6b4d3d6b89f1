mod locations;

use clap::{Parser, Subcommand};
use locoboard_client::LocationApiClient;
use locoboard_core::config::{DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};
use locoboard_core::Weekday;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "locoboard-cli")]
#[command(about = "List, render and add locations through the location API")]
struct Cli {
    /// Origin of the location API
    #[arg(long, global = true, env = "LOCOBOARD_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "LOCOBOARD_API_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// User-Agent header sent to the location API
    #[arg(long, global = true, env = "LOCOBOARD_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, global = true, env = "LOCOBOARD_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every location with its open days and hours
    List {
        /// Print the raw records as JSON instead of one line per location
        #[arg(long)]
        json: bool,
    },
    /// Print the HTML location list exactly as the page embeds it
    Render,
    /// Submit a new location
    Add {
        #[arg(long, allow_hyphen_values = true)]
        latitude: String,
        #[arg(long, allow_hyphen_values = true)]
        longitude: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        zip: String,
        /// Comma-separated open days (e.g. mon,wed,fri)
        #[arg(long, value_delimiter = ',', value_parser = parse_weekday)]
        days: Vec<Weekday>,
        /// Opening time (e.g. 09:00)
        #[arg(long)]
        open: String,
        /// Closing time (e.g. 18:00)
        #[arg(long)]
        close: String,
    },
}

fn parse_weekday(raw: &str) -> Result<Weekday, String> {
    Weekday::from_key(raw).ok_or_else(|| format!("unknown day '{raw}', expected mon..sun"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = LocationApiClient::new(&cli.api_url, cli.timeout_secs, &cli.user_agent)?;

    match cli.command {
        Commands::List { json } => locations::run_list(&client, json).await?,
        Commands::Render => locations::run_render(&client).await?,
        Commands::Add {
            latitude,
            longitude,
            city,
            address,
            zip,
            days,
            open,
            close,
        } => {
            let form = locations::build_form(locations::AddArgs {
                latitude,
                longitude,
                city,
                address,
                zip,
                days,
                open,
                close,
            });
            locations::run_add(&client, &form).await?;
        }
    }

    Ok(())
}
