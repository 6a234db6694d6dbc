use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use insult_client::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "insult")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the insult REST API (default: $INSULT_API_BASE_URL or http://localhost:8080)
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Page URL serving default.json; loads the API base URL from it (default: $INSULT_PAGE_URL)
    #[arg(long, global = true)]
    page_url: Option<String>,

    /// Turn on the service-proxy flag
    #[arg(long, global = true)]
    service_proxies: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        api_base_url: cli.api_base_url,
        page_url: cli.page_url,
        service_proxies: cli.service_proxies,
    })
    .await?;

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
