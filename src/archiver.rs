use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::Review;

pub fn save_reviews(company: &str, reviews: &[Review]) -> Result<PathBuf> {
    save_reviews_in(Path::new("output"), company, reviews)
}

fn save_reviews_in(dir: &Path, company: &str, reviews: &[Review]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{company}_g2_reviews.json"));
    let json = serde_json::to_string_pretty(reviews)?;
    let mut file = File::create(&path)?;
    file.write_all(json.as_bytes())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawReview;
    use chrono::NaiveDate;
    use serde_json::{Value, json};

    fn review(company: &str, reviewer: &str, title: &str) -> Review {
        let raw = RawReview {
            datetime: "2024-05-01T09:00:00".to_string(),
            title: title.to_string(),
            text: "Solid product".to_string(),
            reviewer: reviewer.to_string(),
            rating: json!(5),
        };
        Review::from_raw(company, raw, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn writes_company_file_with_full_batch() {
        let dir = tempfile::tempdir().unwrap();
        let batch = vec![review("acme", "Dana", "Great"), review("acme", "Sam", "Good")];

        let path = save_reviews_in(dir.path(), "acme", &batch).unwrap();
        assert_eq!(path.file_name().unwrap(), "acme_g2_reviews.json");

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let records = written.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["source"], "g2");
        assert_eq!(records[0]["company"], "acme");
        assert_eq!(records[0]["date"], "2024-05-01");
        assert_eq!(records[1]["reviewer"], "Sam");
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("output");

        let path = save_reviews_in(&nested, "acme", &[review("acme", "Dana", "Great")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn preserves_non_ascii_literally() {
        let dir = tempfile::tempdir().unwrap();
        let batch = vec![review("acme", "Zoë Müller", "Évaluation détaillée")];

        let path = save_reviews_in(dir.path(), "acme", &batch).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Zoë Müller"));
        assert!(text.contains("Évaluation détaillée"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        save_reviews_in(dir.path(), "acme", &[review("acme", "Dana", "Great")]).unwrap();
        let path =
            save_reviews_in(dir.path(), "acme", &[review("acme", "Sam", "Second run")]).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let records = written.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["reviewer"], "Sam");
    }
}
