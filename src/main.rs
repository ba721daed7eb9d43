use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use mailsift::{
    configuration::{get_configuration, get_configuration_from},
    domain::search_query::QueryOverrides,
    services::SearchClient,
    startup::run,
};

/// Searches the web for a site-scoped query and prints the email addresses found.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Subject term, e.g. an email provider domain
    #[arg(long)]
    term: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    platform: Option<String>,
    /// Site the search is restricted to
    #[arg(long)]
    site: Option<String>,
    /// Directory holding base.yaml, defaults to ./configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut configuration = match cli.config {
        Some(ref dir) => get_configuration_from(dir)?,
        None => get_configuration()?,
    };

    configuration.query.apply_overrides(QueryOverrides {
        term: cli.term,
        location: cli.location,
        platform: cli.platform,
        site: cli.site,
    });

    let client = SearchClient::new(&configuration.search)?;

    let stdout = std::io::stdout();
    run(&client, &configuration.query, &mut stdout.lock()).await?;

    Ok(())
}
