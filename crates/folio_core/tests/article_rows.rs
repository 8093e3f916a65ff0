use chrono::NaiveDate;
use folio_core::service::article_service::{article_rows, derive_excerpt, estimate_reading_time};
use folio_core::Article;

fn article() -> Article {
    Article {
        slug: "first-post".to_string(),
        title: "First Post".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        excerpt: "An authored summary.".to_string(),
        tags: vec!["rust".to_string(), "web".to_string()],
        reading_time: "7 min".to_string(),
        featured: true,
    }
}

#[test]
fn rows_carry_long_date_and_url() {
    let rows = article_rows(&[article()]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].url, "/writing/first-post");
    assert_eq!(rows[0].date_label, "January 5, 2024");
    assert_eq!(rows[0].reading_time, "7 min");
    assert!(rows[0].featured);
}

#[test]
fn blank_reading_time_falls_back_to_default() {
    let mut source = article();
    source.reading_time = "  ".to_string();

    let rows = article_rows(&[source]);
    assert_eq!(rows[0].reading_time, "5 min");
}

#[test]
fn derived_excerpt_can_replace_blank_authored_excerpt() {
    let body = "## Heading\n\nThe *actual* body text, with a [link](https://x).";
    let derived = derive_excerpt(body).unwrap();

    assert!(derived.starts_with("Heading"));
    assert!(derived.contains("actual body text"));
    assert!(derived.contains("link"));
}

#[test]
fn reading_time_scales_with_body_length() {
    let short = "word ".repeat(150);
    let long = "word ".repeat(1000);

    assert_eq!(estimate_reading_time(&short), "1 min");
    assert_eq!(estimate_reading_time(&long), "5 min");
}
