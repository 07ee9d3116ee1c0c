use clap::Parser;
use hacker_stories::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "hacker-stories", about = "Search Hacker News from the terminal")]
struct Args {
    /// Search term to start with when none has been saved
    #[arg(short, long)]
    query: Option<String>,

    /// Search endpoint; the term is appended to it
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Keep the search term in memory instead of saving it
    #[arg(long)]
    no_persist: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to hacker-stories.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("hacker-stories.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::HackerStoriesConfig::default()
    });
    let mut resolved =
        config::resolve(&file_config, args.endpoint.as_deref(), args.query.as_deref());
    if args.no_persist {
        resolved.storage_path = None;
    }

    log::info!("Hacker Stories starting up with endpoint: {}", resolved.endpoint);

    hacker_stories::tui::run(resolved)
}
