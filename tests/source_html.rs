use pq_watch::source::html::HtmlSearchSource;
use std::fs;

#[test]
fn fixture_page_parses_in_document_order() {
    let html = fs::read_to_string("tests/fixtures/results_page.html")
        .expect("missing tests/fixtures/results_page.html");

    let entries = HtmlSearchSource::parse_results(&html);

    // Four result elements, one without an anchor (skipped).
    assert_eq!(entries.len(), 3);

    assert_eq!(
        entries[0].id,
        "https://www.oireachtas.ie/en/debates/question/2026-08-12/103/"
    );
    assert_eq!(
        entries[0].title,
        "Join family visa & reunification processing times"
    );
    assert_eq!(entries[0].date, "12 Aug 2026");
    assert_eq!(entries[0].link, entries[0].id, "identity is the absolute link");

    // Nested markup in the anchor text is stripped.
    assert_eq!(entries[1].title, "Visa appeals backlog");
    assert_eq!(entries[1].date, "11 Aug 2026");

    // Already-absolute hrefs pass through; missing date label has a fallback.
    assert_eq!(
        entries[2].id,
        "https://www.oireachtas.ie/en/debates/question/2026-08-07/12/"
    );
    assert_eq!(entries[2].date, "Unknown date");
}

#[test]
fn page_without_result_items_yields_empty_set() {
    let entries = HtmlSearchSource::parse_results("<html><body><p>No results.</p></body></html>");
    assert!(entries.is_empty());
}
