use anyhow::{Result, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::models::{RawReview, ReviewsPage};

const API_URL: &str = "https://wextractor.com/api/v1/reviews/g2";

/// Cap on records consumed per page, independent of the API's own page size.
const BATCH_SIZE: usize = 50;

pub fn fetch_page(
    client: &Client,
    company: &str,
    token: &str,
    offset: usize,
) -> Result<Vec<RawReview>> {
    let offset = offset.to_string();
    let response = client
        .get(API_URL)
        .query(&[
            ("id", company),
            ("auth_token", token),
            ("offset", offset.as_str()),
        ])
        .send()?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().unwrap_or_default();
        bail!("API error for {company}: {status} {body}");
    }

    let page: ReviewsPage = response.json()?;
    Ok(page.reviews.into_iter().take(BATCH_SIZE).collect())
}
