//! Authority, substance and recency scoring for references.
//!
//! Each reference is scored on its own, with no knowledge of the rest of
//! the batch:
//!
//! ```text
//! score = authority + substance + recency - brevity
//! authority = 10 if the domain (or a URL path segment) names a preferred
//!             TLD or outlet, else 0
//! substance = min(chars(content) / 500, 5)
//! recency   = 5 (< 1 year), 3 (< 3 years), 1 (< 5 years), else 0
//! brevity   = 3 if chars(content) < 200, else 0
//! ```
//!
//! Totals are not clamped and may be negative.

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::Reference;

/// Government and education TLD labels that earn the authority bonus.
///
/// Matched on whole dotted labels of the domain, so `census.gov` and
/// `gov.uk` match but `intel.com` does not match `int`.
pub const PREFERRED_TLDS: &[&str] = &["gov", "edu", "ac.uk", "int"];

/// Named outlets that earn the authority bonus.
pub const PREFERRED_OUTLETS: &[&str] = &[
    "wikipedia.org",
    "britannica.com",
    "reuters.com",
    "apnews.com",
    "bbc.com",
    "bbc.co.uk",
    "nature.com",
    "nationalgeographic.com",
];

const AUTHORITY_BONUS: f64 = 10.0;
const SUBSTANCE_CHARS_PER_POINT: f64 = 500.0;
const SUBSTANCE_CAP: f64 = 5.0;
const BREVITY_THRESHOLD_CHARS: usize = 200;
const BREVITY_PENALTY: f64 = 3.0;
const DAYS_PER_YEAR: f64 = 365.25;

/// Score a reference against the current time.
pub fn score(reference: &Reference) -> f64 {
    score_at(reference, Utc::now())
}

/// Score a reference with recency measured from `now`.
pub fn score_at(reference: &Reference, now: DateTime<Utc>) -> f64 {
    let content_chars = reference.content.chars().count();

    let mut total = authority_bonus(reference) + substance_bonus(content_chars);
    if let Some(published) = reference
        .published_date
        .as_deref()
        .and_then(parse_published_date)
    {
        total += recency_bonus(published, now);
    }
    if content_chars < BREVITY_THRESHOLD_CHARS {
        total -= BREVITY_PENALTY;
    }
    total
}

/// +10 when the reference comes from a preferred TLD or outlet; applied once.
fn authority_bonus(reference: &Reference) -> f64 {
    let labels = format!(".{}.", reference.domain.to_lowercase());
    let url = reference.url.to_lowercase();
    let has_labels = |name: &str| labels.contains(&format!(".{name}."));

    let preferred_tld = PREFERRED_TLDS.iter().any(|tld| has_labels(*tld));
    let preferred_outlet = PREFERRED_OUTLETS
        .iter()
        .any(|outlet| has_labels(*outlet) || url.contains(&format!("/{outlet}")));
    if preferred_tld || preferred_outlet {
        AUTHORITY_BONUS
    } else {
        0.0
    }
}

fn substance_bonus(content_chars: usize) -> f64 {
    (content_chars as f64 / SUBSTANCE_CHARS_PER_POINT).min(SUBSTANCE_CAP)
}

fn recency_bonus(published: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_years = (now - published).num_seconds() as f64 / (DAYS_PER_YEAR * 86_400.0);
    if age_years < 1.0 {
        5.0
    } else if age_years < 3.0 {
        3.0
    } else if age_years < 5.0 {
        1.0
    } else {
        0.0
    }
}

/// Best-effort parse of an ISO-like publication date.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD` with or without a trailing time
/// part, `YYYY-MM` and bare `YYYY`. Anything else yields `None`.
pub fn parse_published_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let date = raw
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .or_else(|| {
            (raw.len() == 7)
                .then(|| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok())
                .flatten()
        })
        .or_else(|| {
            (raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()))
                .then(|| raw.parse::<i32>().ok())
                .flatten()
                .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        })?;

    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().expect("valid date")
    }

    fn make_ref(url: &str, content_len: usize, published: Option<&str>) -> Reference {
        Reference::new(
            "Title",
            url,
            "x".repeat(content_len),
            published.map(str::to_string),
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_content_gets_brevity_penalty_only() {
        let r = make_ref("https://blog.example.com/a", 0, None);
        assert_close(score_at(&r, now()), -3.0);
    }

    #[test]
    fn substance_is_fractional() {
        let r = make_ref("https://example.com", 750, None);
        assert_close(score_at(&r, now()), 1.5);
    }

    #[test]
    fn substance_caps_at_five() {
        let at_cap = make_ref("https://example.com", 2500, None);
        let beyond = make_ref("https://example.com", 10_000, None);
        assert_close(score_at(&at_cap, now()), 5.0);
        assert_close(score_at(&beyond, now()), 5.0);
    }

    #[test]
    fn brevity_threshold_is_exclusive() {
        let short = make_ref("https://example.com", 199, None);
        let enough = make_ref("https://example.com", 200, None);
        assert_close(score_at(&short, now()), 199.0 / 500.0 - 3.0);
        assert_close(score_at(&enough, now()), 0.4);
    }

    #[test]
    fn longer_content_never_scores_lower() {
        let scores: Vec<f64> = (0..=3000)
            .step_by(50)
            .map(|len| score_at(&make_ref("https://example.com", len, None), now()))
            .collect();
        for pair in scores.windows(2) {
            assert!(pair[1] >= pair[0], "{} < {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn government_domain_gets_authority_bonus() {
        let r = make_ref("https://www.census.gov/data", 500, None);
        assert_close(score_at(&r, now()), 11.0);
    }

    #[test]
    fn tld_lookalike_host_gets_no_authority_bonus() {
        let intel = make_ref("https://www.intel.com/about", 500, None);
        assert_close(score_at(&intel, now()), 1.0);
        let path = make_ref("https://example.com/docs/file.internal", 500, None);
        assert_close(score_at(&path, now()), 1.0);
        let outlet = make_ref("https://notbbc.com/news", 500, None);
        assert_close(score_at(&outlet, now()), 1.0);
    }

    #[test]
    fn tld_label_matches_anywhere_in_domain() {
        for url in ["https://www.gov.uk/x", "https://www.who.int/x", "https://www.ox.ac.uk/x"] {
            let r = make_ref(url, 500, None);
            assert_close(score_at(&r, now()), 11.0);
        }
    }

    #[test]
    fn authority_bonus_applied_once_for_multiple_matches() {
        let r = make_ref("https://en.wikipedia.org/wiki/reuters.com_bbc.com", 500, None);
        assert_close(score_at(&r, now()), 11.0);
    }

    #[test]
    fn authority_matches_url_when_domain_does_not() {
        let mut r = make_ref("https://mirror.example.com/britannica.com/topic", 500, None);
        assert_eq!(r.domain, "mirror.example.com");
        assert_close(score_at(&r, now()), 11.0);
        r.url = "https://mirror.example.com/topic".into();
        assert_close(score_at(&r, now()), 1.0);
    }

    #[test]
    fn recency_brackets() {
        let cases = [
            ("2025-01-01", 5.0),
            ("2023-01-01", 3.0),
            ("2021-01-01", 1.0),
            ("2019-01-01", 0.0),
        ];
        for (date, bonus) in cases {
            let r = make_ref("https://example.com", 500, Some(date));
            assert_close(score_at(&r, now()), 1.0 + bonus);
        }
    }

    #[test]
    fn future_date_counts_as_recent() {
        let future = (now() + Duration::days(30)).to_rfc3339();
        let r = make_ref("https://example.com", 500, Some(&future));
        assert_close(score_at(&r, now()), 6.0);
    }

    #[test]
    fn malformed_date_contributes_nothing() {
        let r = make_ref("https://example.com", 500, Some("last Tuesday"));
        assert_close(score_at(&r, now()), 1.0);
    }

    #[test]
    fn parses_supported_date_shapes() {
        assert!(parse_published_date("2024-03-05T10:20:30.000Z").is_some());
        assert!(parse_published_date("2024-03-05T10:20:30+02:00").is_some());
        assert!(parse_published_date("2024-03-05").is_some());
        assert!(parse_published_date("2024-03-05 10:20").is_some());
        assert!(parse_published_date("2024-03").is_some());
        assert!(parse_published_date("2024").is_some());
    }

    #[test]
    fn rejects_unsupported_date_shapes() {
        assert!(parse_published_date("").is_none());
        assert!(parse_published_date("2024-13-45").is_none());
        assert!(parse_published_date("March 2024").is_none());
        assert!(parse_published_date("20x4").is_none());
    }

    #[test]
    fn scoring_is_deterministic() {
        let r = make_ref("https://nature.com/articles/1", 1234, Some("2024-12-01"));
        assert_close(score_at(&r, now()), score_at(&r, now()));
    }

    #[test]
    fn content_length_counts_characters_not_bytes() {
        let r = Reference::new("T", "https://example.com", "é".repeat(500), None);
        assert_close(score_at(&r, now()), 1.0);
    }
}
