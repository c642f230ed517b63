mod archiver;
mod collector;
mod config;
mod fetcher;
mod logger;
mod models;

use anyhow::Result;
use chrono::Local;
use reqwest::blocking::Client;

fn main() -> Result<()> {
    logger::init();

    let run = config::RunConfig::from_prompts()?;
    let today = Local::now().date_naive();
    let window = match config::resolve_window(run.start, run.end, today) {
        Ok(window) => window,
        Err(err) => {
            println!("❌ {err}");
            return Ok(());
        }
    };

    let client = Client::new();
    for company in &run.companies {
        let reviews = collector::collect(&client, company, &run.token, &window);
        if reviews.is_empty() {
            println!("No reviews found for {company} in this date range.");
        } else {
            let path = archiver::save_reviews(company, &reviews)?;
            println!("Saved {} reviews to {}", reviews.len(), path.display());
        }
    }

    println!("\n✅ Done!");
    Ok(())
}
