use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{error, info, warn};
use reqwest::blocking::Client;

use crate::fetcher;
use crate::models::{DateWindow, RawReview, Review};

pub fn collect(client: &Client, company: &str, token: &str, window: &DateWindow) -> Vec<Review> {
    info!(
        "Fetching reviews for {company} from {} to {}",
        window.start, window.end
    );
    collect_pages(company, window, |offset| {
        fetcher::fetch_page(client, company, token, offset)
    })
}

/// Drives `fetch` from offset 0, keeping records inside the window.
///
/// Precondition: the API returns reviews in non-increasing date order. The
/// early stop on the first record older than `window.start` relies on it;
/// out-of-order data is logged as a warning, not compensated for.
///
/// A fetch error ends collection for this company with whatever was
/// accumulated so far; the diagnostic goes to the log, not the caller.
fn collect_pages<F>(company: &str, window: &DateWindow, mut fetch: F) -> Vec<Review>
where
    F: FnMut(usize) -> Result<Vec<RawReview>>,
{
    let mut collected = Vec::new();
    let mut offset = 0;
    let mut previous: Option<NaiveDate> = None;
    let mut order_warned = false;

    loop {
        let page = match fetch(offset) {
            Ok(page) => page,
            Err(err) => {
                error!("{err:#}; treating as end of results for {company}");
                break;
            }
        };
        if page.is_empty() {
            break;
        }

        let fetched = page.len();
        for raw in page {
            let Some(date) = parse_review_date(&raw.datetime) else {
                continue;
            };

            if let Some(prev) = previous
                && date > prev
                && !order_warned
            {
                warn!("Out-of-order review dates for {company}: {date} after {prev}");
                order_warned = true;
            }
            previous = Some(date);

            // older than the window start: nothing further can be in range
            if date < window.start {
                return collected;
            }
            if date <= window.end {
                collected.push(Review::from_raw(company, raw, date));
            }
            // newer than the window end: later pages may still be in range
        }

        offset += fetched;
    }

    collected
}

fn parse_review_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
