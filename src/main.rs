mod api_stuff;
mod config;
mod csv_export;
mod error;
mod record;
mod search;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use config::Config;
use search::YouTubeSearch;

const DEFAULT_QUERY: &str = "Hindi grammar basics";
const DEFAULT_OUTPUT: &str = "video_metadata.csv";

/// Search YouTube for videos and save their metadata as CSV
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Search terms
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    query: String,

    /// Number of results to request (the API allows at most 50)
    #[arg(short = 'n', long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=50))]
    max_results: u32,

    /// CSV file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

async fn run(search: &YouTubeSearch, query: &str, max_results: u32, output: &Path) -> Result<usize> {
    let records = search
        .fetch(query, max_results)
        .await
        .with_context(|| format!("could not search for {:?}", query))?;

    println!("Fetched {} result(s):", records.len());
    for record in &records {
        println!("  {}", record);
        println!("    {}", record.watch_url());
        if let Some(summary) = record.summary() {
            println!("    {}", summary);
        }
    }

    csv_export::save_to_csv(&records, output)
        .with_context(|| format!("could not save results to {}", output.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::from_env().context("could not load configuration")?;
    let search = YouTubeSearch::new(&config);

    run(&search, &args.query, args.max_results, &args.output).await?;

    Ok(())
}
