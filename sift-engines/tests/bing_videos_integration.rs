//! Integration tests for the Bing Videos adapter.
//!
//! Exercise the request builder and response parser together through the
//! public [`Engine`] interface, using saved responses under `test-data/`
//! (no network calls).

use sift_engines::engines::bing_videos::ENGINE_NAME;
use sift_engines::engines::BingVideosEngine;
use sift_engines::{
    default_registry, Category, Engine, SearchContext, SearchError, SearchOptions, TimeRange,
};
use std::sync::Arc;

const STANDARD_HTML: &str = include_str!("../test-data/bing_videos_standard.html");
const FIRST_PAGE_HTML: &str = include_str!("../test-data/bing_videos_first_page.html");
const MIXED_HTML: &str = include_str!("../test-data/bing_videos_mixed.html");

fn query_value(url: &str, key: &str) -> Option<String> {
    url::Url::parse(url)
        .expect("valid url")
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[test]
fn request_is_deterministic() {
    let engine = BingVideosEngine::new();
    let ctx = SearchContext::new();

    let mut a = SearchOptions::new("rust lifetimes", 4).with_time_range(TimeRange::Month);
    let mut b = a.clone();
    let first = engine.request(&ctx, &mut a).expect("request");
    let second = engine.request(&ctx, &mut b).expect("request");
    let again = engine.request(&ctx, &mut a).expect("request");

    assert_eq!(first, second);
    assert_eq!(first, again);
    assert_eq!(query_value(&first, "first").as_deref(), Some("30"));
    assert_eq!(
        query_value(&first, "qft").as_deref(),
        Some(" filterui:videoage-lt44640")
    );
}

#[test]
fn request_parameter_order_matches_endpoint_contract() {
    let engine = BingVideosEngine::new();
    let mut opts = SearchOptions::new("test", 1).with_time_range(TimeRange::Day);
    let url = engine
        .request(&SearchContext::new(), &mut opts)
        .expect("request");
    assert_eq!(
        url,
        "https://www.bing.com/videos/asyncv2?q=test&async=content&first=0&count=10\
         &form=VRFLTR&qft=+filterui%3Avideoage-lt1440"
    );
}

#[test]
fn standard_fixture_extracts_all_results_in_order() {
    let engine = BingVideosEngine::new();
    let opts = SearchOptions::new("rust", 2);
    let results = engine
        .response(&SearchContext::new(), &opts, STANDARD_HTML.as_bytes())
        .expect("fixture should parse");

    assert_eq!(results.engine, ENGINE_NAME);
    assert_eq!(results.page_no, 2);
    let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Rust Ownership Explained",
            "Understanding Rust Lifetimes",
            "Rust Crash Course | Rustlang",
            "Rust in 100 Seconds",
            "Async Rust & Tokio \"deep dive\"",
        ]
    );

    let first = &results.items[0];
    assert_eq!(first.url, "https://www.youtube.com/watch?v=VFIOSWy93H0");
    assert_eq!(first.content, "4:12 - 1.2M views 2 years ago");
    assert_eq!(
        first.thumbnail.as_deref(),
        Some("https://tse1.mm.bing.net/th?id=OVP.a1")
    );
    assert_eq!(results.items[4].url, "https://vimeo.com/712345678");
}

#[test]
fn fixture_results_carry_query_and_engine_name() {
    let engine = BingVideosEngine::new();
    let opts = SearchOptions::new("rust ownership & borrowing", 1);
    let results = engine
        .response(&SearchContext::new(), &opts, STANDARD_HTML.as_bytes())
        .expect("fixture should parse");

    assert!(!results.is_empty());
    for (i, r) in results.iter().enumerate() {
        assert_eq!(r.query, "rust ownership & borrowing", "result {i}");
        assert_eq!(r.engine, "bing_videos", "result {i}");
        assert!(!r.title.is_empty(), "result {i} has empty title");
        assert!(url::Url::parse(&r.url).is_ok(), "result {i} has invalid URL");
    }
}

#[test]
fn first_page_fixture_uses_fallback_selector() {
    assert!(!FIRST_PAGE_HTML.contains(r#"<div class="dg_u""#));

    let engine = BingVideosEngine::new();
    let results = engine
        .response(
            &SearchContext::new(),
            &SearchOptions::new("rust", 1),
            FIRST_PAGE_HTML.as_bytes(),
        )
        .expect("fixture should parse");

    assert_eq!(results.len(), 3);
    assert_eq!(results.items[0].title, "Rust Ownership Explained");
    // Lazy-loaded thumbnails resolve to the high-quality source.
    assert_eq!(
        results.items[0].thumbnail.as_deref(),
        Some("https://tse1.mm.bing.net/th?id=OVP.a1")
    );
}

#[test]
fn items_without_metadata_are_dropped_not_fatal() {
    let engine = BingVideosEngine::new();
    let results = engine
        .response(
            &SearchContext::new(),
            &SearchOptions::new("rust", 1),
            MIXED_HTML.as_bytes(),
        )
        .expect("fixture should parse");

    // 3 well-formed blocks, 2 without a vrhdata element, 1 whose vrhdata
    // element has no vrhm attribute.
    assert_eq!(results.len(), 3);
    let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Rust Ownership Explained",
            "Rust Crash Course | Rustlang",
            "Async Rust & Tokio \"deep dive\"",
        ]
    );
}

#[test]
fn captcha_page_is_unrecognized() {
    let engine = BingVideosEngine::new();
    let body = b"<html><body><div id=\"captcha\">Verify you are human</div></body></html>";
    let err = engine
        .response(&SearchContext::new(), &SearchOptions::new("rust", 1), body)
        .unwrap_err();
    assert!(matches!(err, SearchError::UnrecognizedShape(_)));
    assert!(err.to_string().contains("document shape not recognized"));
}

#[test]
fn shared_engine_serves_concurrent_searches() {
    let engine: Arc<dyn Engine> = Arc::new(BingVideosEngine::new());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=8u32)
            .map(|page| {
                let engine = Arc::clone(&engine);
                scope.spawn(move || {
                    let ctx = SearchContext::new();
                    let mut opts = SearchOptions::new(format!("query {page}"), page);
                    let url = engine.request(&ctx, &mut opts).expect("request");
                    let results = engine
                        .response(&ctx, &opts, STANDARD_HTML.as_bytes())
                        .expect("response");
                    (page, url, results)
                })
            })
            .collect();

        for handle in handles {
            let (page, url, results) = handle.join().expect("thread panicked");
            let expected = ((page - 1) * 10).to_string();
            assert_eq!(query_value(&url, "first"), Some(expected));
            assert_eq!(results.page_no, page);
            assert_eq!(results.len(), 5);
            let query = format!("query {page}");
            assert!(results.iter().all(|r| r.query == query));
        }
    });
}

#[test]
fn registry_round_trip_through_both_categories() {
    let registry = default_registry();
    for &category in Category::all() {
        let engines = registry.in_category(category);
        assert_eq!(engines.len(), 1, "{category}");

        let engine = engines[0];
        let ctx = SearchContext::new();
        let mut opts = SearchOptions::new("rust", 1);
        engine.request(&ctx, &mut opts).expect("request");
        assert!(opts.url.is_some());

        let results = engine
            .response(&ctx, &opts, STANDARD_HTML.as_bytes())
            .expect("response");
        assert_eq!(results.engine, engine.name());
    }
}
