use folio_core::{SearchBox, SearchDoc, SearchError, SearchProvider, SearchResult};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Provider double that records every query it receives.
struct CountingProvider {
    calls: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl CountingProvider {
    fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                calls: Rc::clone(&calls),
                fail: false,
            },
            calls,
        )
    }

    fn failing() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            fail: true,
        }
    }
}

impl SearchProvider for CountingProvider {
    fn search(&self, query: &str) -> SearchResult<Vec<SearchDoc>> {
        self.calls.borrow_mut().push(query.to_string());
        if self.fail {
            return Err(SearchError::InvalidData("index corrupted".to_string()));
        }
        Ok(vec![SearchDoc {
            url: "/writing/hit".to_string(),
            title: "Hit".to_string(),
            snippet: format!("matched [{query}]"),
            image: None,
        }])
    }
}

const WINDOW: Duration = Duration::from_millis(300);

#[test]
fn blank_query_never_dispatches() {
    let start = Instant::now();
    let (provider, calls) = CountingProvider::new();
    let mut search_box = SearchBox::new(Some(provider));

    search_box.on_input("", start);
    search_box.on_input("   ", start + Duration::from_millis(10));
    assert!(!search_box.poll(start + Duration::from_secs(2)));

    assert_eq!(calls.borrow().len(), 0);
    assert_eq!(search_box.result_count(), None);
    assert!(search_box.results().is_empty());
}

#[test]
fn rapid_input_dispatches_once_with_final_query() {
    let start = Instant::now();
    let (provider, calls) = CountingProvider::new();
    let mut search_box = SearchBox::new(Some(provider));

    search_box.on_input("r", start);
    search_box.on_input("ru", start + Duration::from_millis(100));
    search_box.on_input("rust", start + Duration::from_millis(200));

    // Window restarted at 200ms; nothing is due at 400ms.
    assert!(!search_box.poll(start + Duration::from_millis(400)));
    assert!(search_box.poll(start + Duration::from_millis(200) + WINDOW));
    assert!(!search_box.poll(start + Duration::from_secs(2)));

    assert_eq!(*calls.borrow(), vec!["rust".to_string()]);
    assert_eq!(search_box.result_count(), Some(1));
    assert_eq!(search_box.results()[0].snippet, "matched [rust]");
}

#[test]
fn clearing_input_resets_to_neutral_state() {
    let start = Instant::now();
    let (provider, calls) = CountingProvider::new();
    let mut search_box = SearchBox::new(Some(provider));

    search_box.on_input("rust", start);
    assert!(search_box.poll(start + WINDOW));
    assert_eq!(search_box.result_count(), Some(1));

    search_box.on_input("", start + WINDOW + Duration::from_millis(10));
    assert_eq!(search_box.result_count(), None);
    assert!(search_box.results().is_empty());
    assert!(!search_box.poll(start + Duration::from_secs(5)));
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn missing_provider_degrades_to_zero_results() {
    let start = Instant::now();
    let mut search_box: SearchBox<CountingProvider> = SearchBox::new(None);

    search_box.on_input("rust", start);
    assert!(search_box.poll(start + WINDOW));

    assert_eq!(search_box.result_count(), Some(0));
    assert!(search_box.results().is_empty());
    assert_eq!(
        search_box.result_summary().as_deref(),
        Some("No articles found")
    );
}

#[test]
fn provider_failure_degrades_to_zero_results() {
    let start = Instant::now();
    let mut search_box = SearchBox::new(Some(CountingProvider::failing()));

    search_box.on_input("rust", start);
    assert!(search_box.poll(start + WINDOW));

    assert_eq!(search_box.result_count(), Some(0));
    assert!(search_box.results().is_empty());
}

#[test]
fn summary_pluralizes_article_count() {
    let start = Instant::now();
    let (provider, _calls) = CountingProvider::new();
    let mut search_box = SearchBox::new(Some(provider));

    assert_eq!(search_box.result_summary(), None);

    search_box.on_input("rust", start);
    search_box.poll(start + WINDOW);
    assert_eq!(
        search_box.result_summary().as_deref(),
        Some("1 article found")
    );
}

#[test]
fn each_quiescence_window_dispatches_at_most_once() {
    let start = Instant::now();
    let (provider, calls) = CountingProvider::new();
    let mut search_box = SearchBox::new(Some(provider));

    search_box.on_input("a", start);
    search_box.on_input("ab", start + Duration::from_millis(50));
    search_box.poll(start + Duration::from_millis(50) + WINDOW);

    search_box.on_input("abc", start + Duration::from_secs(1));
    search_box.poll(start + Duration::from_secs(1) + WINDOW);

    assert_eq!(*calls.borrow(), vec!["ab".to_string(), "abc".to_string()]);
}
