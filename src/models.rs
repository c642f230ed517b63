use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ReviewsPage {
    #[serde(default)]
    pub reviews: Vec<RawReview>,
}

/// One element of the API's `reviews` array. Only `datetime` has a guaranteed
/// format; any other field may be absent.
#[derive(Debug, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub datetime: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub reviewer: String,
    #[serde(default)]
    pub rating: Value,
}

#[derive(Debug, Serialize)]
pub struct Review {
    pub source: &'static str,
    pub company: String,
    pub title: String,
    pub review: String,
    pub reviewer: String,
    pub rating: Value,
    pub date: String,
}

impl Review {
    pub fn from_raw(company: &str, raw: RawReview, date: NaiveDate) -> Review {
        Review {
            source: "g2",
            company: company.to_string(),
            title: raw.title,
            review: raw.text,
            reviewer: raw.reviewer,
            // rating may be numeric or textual; absent becomes ""
            rating: if raw.rating.is_null() {
                Value::from("")
            } else {
                raw.rating
            },
            date: date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Inclusive calendar-date range, already validated against today.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
