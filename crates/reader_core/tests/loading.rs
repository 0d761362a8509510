use std::sync::Once;

use reader_core::{
    update, AppState, DocumentIndex, Effect, IndexEntry, Msg, PageRecord, TextBody,
    DEFAULT_DOC_TITLE, DEFAULT_TOTAL_PAGES,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

fn small_index(total_pages: u32) -> DocumentIndex {
    DocumentIndex {
        title: "Field Notes".to_string(),
        total_pages,
        pages: vec![IndexEntry {
            page: 1,
            title: "Cover".to_string(),
            has_content: true,
        }],
    }
}

#[test]
fn manifest_failure_keeps_defaults() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ManifestLoaded(None));

    assert!(effects.is_empty());
    assert_eq!(state.total_pages(), DEFAULT_TOTAL_PAGES);
    assert_eq!(state.view().doc_title, DEFAULT_DOC_TITLE);
}

#[test]
fn manifest_becomes_source_of_truth() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ManifestLoaded(Some(small_index(12))));

    assert_eq!(state.total_pages(), 12);
    assert_eq!(state.view().doc_title, "Field Notes");
    assert_eq!(state.view().page_badge, "Page 1 of 12");
}

#[test]
fn current_page_is_clamped_into_manifest_range() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::GoToPage(100));
    let (state, _) = update(state, Msg::ManifestLoaded(Some(small_index(12))));

    assert_eq!(state.current_page(), 12);
}

#[test]
fn loaded_content_round_trips_byte_for_byte() {
    init_logging();
    let content = "<div class=\"article-header\">\n  <h1>Exact &amp; untouched</h1>\n</div>";
    let (state, _) = update(AppState::new(), Msg::GoToPage(3));
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            page: 3,
            generation: 1,
            record: Some(PageRecord {
                page: 3,
                title: "Exact".to_string(),
                content: content.to_string(),
            }),
        },
    );

    assert_eq!(
        state.view().text.body,
        TextBody::Content(content.to_string())
    );
}

#[test]
fn stale_generation_fills_cache_but_keeps_newer_marker() {
    init_logging();
    // Page 5 requested under generation 1, then the user moves on and
    // comes back, leaving a newer load in flight under generation 3.
    let (state, effects) = update(AppState::new(), Msg::GoToPage(5));
    assert!(effects.contains(&Effect::LoadPage {
        page: 5,
        generation: 1,
    }));
    let (state, _) = update(state, Msg::GoToPage(2));
    let (state, effects) = update(state, Msg::GoToPage(5));
    assert!(effects.contains(&Effect::LoadPage {
        page: 5,
        generation: 3,
    }));

    // The generation-1 fetch settles late: cache gains the record...
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            page: 5,
            generation: 1,
            record: Some(PageRecord {
                page: 5,
                title: "Late".to_string(),
                content: "<p>late</p>".to_string(),
            }),
        },
    );
    assert!(matches!(state.cached(5), Some(Some(_))));

    // ...but the newer in-flight load must not be considered settled, so
    // an identical repeat jump still issues no duplicate fetch and the
    // generation-3 resolution is still awaited.
    let (state, effects) = update(state, Msg::GoToPage(5));
    assert_eq!(effects, vec![Effect::ScrollToTop]);

    let (state, _) = update(
        state,
        Msg::PageLoaded {
            page: 5,
            generation: 3,
            record: Some(PageRecord {
                page: 5,
                title: "Fresh".to_string(),
                content: "<p>fresh</p>".to_string(),
            }),
        },
    );
    assert_eq!(state.view().page_title, "Fresh");
}

#[test]
fn resolution_for_another_page_does_not_touch_current_panel() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::GoToPage(2));
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            page: 9,
            generation: 0,
            record: Some(PageRecord {
                page: 9,
                title: "Elsewhere".to_string(),
                content: "<p>elsewhere</p>".to_string(),
            }),
        },
    );

    let view = state.view();
    assert_eq!(view.current_page, 2);
    assert_eq!(view.page_title, "Page 2");
    assert_eq!(view.text.body, TextBody::Placeholder { page: 2 });
}
