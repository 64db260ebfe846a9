mod render;
mod views;
mod watch;

use clap::{Parser, Subcommand};
use hashpulse_client::HashnodeClient;
use hashpulse_core::DateStyle;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hashpulse")]
#[command(about = "Hashnode post-view analytics from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a user's post views and print the total and series
    Views {
        /// Hashnode username, used verbatim
        username: String,

        /// Print the snapshot as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Date label style (`us` or `iso`); overrides `HASHPULSE_DATE_STYLE`
        #[arg(long)]
        date_style: Option<DateStyle>,
    },
    /// Print a share link for a user's total views
    Share {
        /// Hashnode username, used verbatim
        username: String,

        /// Include the profile picture in the share-card URL
        #[arg(long)]
        with_avatar: bool,
    },
    /// Read usernames from stdin, one per line; only the latest result is printed
    Watch {
        /// Print each snapshot as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = hashpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = HashnodeClient::new(&config.client)?;
    tracing::debug!(endpoint = %client.endpoint(), "client ready");

    match cli.command {
        Commands::Views {
            username,
            json,
            date_style,
        } => {
            let style = date_style.unwrap_or(config.date_style);
            views::run_views(&client, &username, style, json).await?;
        }
        Commands::Share {
            username,
            with_avatar,
        } => {
            config.share.include_avatar |= with_avatar;
            views::run_share(&client, &username, &config).await?;
        }
        Commands::Watch { json } => {
            watch::run_watch(client, config.date_style, json).await?;
        }
    }

    Ok(())
}
