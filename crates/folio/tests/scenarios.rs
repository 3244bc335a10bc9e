//! End-to-end navigation scenarios against the headless document.
//!
//! Layout: 900 px viewport, 80 px header, 900 px per section. On the home
//! page `projects` starts at 980 and `contact` at 2780 (the last reachable
//! offset).

use folio::platform::headless::{HeadlessSession, ScrollCall};
use folio::{ClickOutcome, LinkOrigin, NavigationIntent, NavigationType, ScrollDecision, SiteConfig};

const VIEWPORT: f64 = 900.0;

fn open(path: &str) -> HeadlessSession {
    HeadlessSession::open(&SiteConfig::default(), path, VIEWPORT)
}

#[test]
fn back_to_projects_settles_on_projects_section() {
    let mut session = open("/projects/brisbane_connectivity");
    let outcome = session.click("/#projects", LinkOrigin::Content).unwrap();
    assert_eq!(
        outcome,
        ClickOutcome::Navigate {
            to: "/".into(),
            intent: Some(NavigationIntent::new("projects")),
            navigation_type: NavigationType::Push,
        }
    );

    // Nothing moves before the settle delay.
    assert!(!session.document().is_in_view("projects"));
    assert_eq!(session.settle(), 1);
    assert_eq!(session.now_ms(), 100);
    assert!(session.document().is_in_view("projects"));
    assert_eq!(session.document().scroll_position(), (0.0, 980.0));
}

#[test]
fn typed_url_loads_at_top_with_title() {
    let session = open("/publications");
    assert_eq!(session.document().scroll_position(), (0.0, 0.0));
    assert_eq!(session.document().title(), "Publications | Transport Analytics & Insights");
    assert_eq!(session.document().scroll_calls(), [ScrollCall::Top]);
}

#[test]
fn back_button_is_pop_without_scroll_calls() {
    let mut session = open("/");
    session.click("/projects", LinkOrigin::Content).unwrap();
    let calls = session.document().scroll_calls().len();

    assert!(session.back());
    assert_eq!(session.settle(), 0);
    assert_eq!(session.document().scroll_calls().len(), calls);
    assert_eq!(session.navigator().current_path(), "/");
    assert_eq!(session.document().title(), "Home | Transport Analytics & Insights");
}

#[test]
fn pop_to_entry_with_intent_does_not_replay_it() {
    let mut session = open("/projects/brisbane_connectivity");
    session.click("/#projects", LinkOrigin::Content).unwrap();
    session.settle();
    session.click("/publications", LinkOrigin::Content).unwrap();
    let calls = session.document().scroll_calls().len();

    assert!(session.back());
    assert_eq!(
        session.history().current().state,
        Some(NavigationIntent::new("projects"))
    );
    assert_eq!(session.settle(), 0);
    assert_eq!(session.document().scroll_calls().len(), calls);
    // restored by the browser, not by a scroll call
    assert_eq!(session.document().scroll_position(), (0.0, 980.0));
}

#[test]
fn reload_does_not_replay_the_intent() {
    let mut session = open("/projects/brisbane_connectivity");
    session.click("/#projects", LinkOrigin::Content).unwrap();
    assert_eq!(session.settle(), 1);
    let calls = session.document().scroll_calls().len();

    session.reload();
    assert_eq!(session.history().current().state, None);
    assert_eq!(session.navigator().last_decision(), Some(&ScrollDecision::ScrollToTop));
    assert_eq!(session.settle(), 0);
    assert_eq!(session.document().scroll_calls()[calls..], [ScrollCall::Top]);
    assert_eq!(session.document().scroll_position(), (0.0, 0.0));
}

#[test]
fn reload_drops_timers_from_the_old_page() {
    let mut session = open("/translink-od");
    session.click("/#contact", LinkOrigin::Content).unwrap();
    session.reload();
    assert_eq!(session.settle(), 0);
    assert!(!session.document().is_in_view("contact"));
}

#[test]
fn plain_push_ends_at_origin() {
    let mut session = open("/");
    session.scroll_to(2000.0);
    session.click("/publications", LinkOrigin::Content).unwrap();
    assert_eq!(session.document().scroll_position(), (0.0, 0.0));
    assert_eq!(session.settle(), 0);
}

#[test]
fn link_to_current_page_replaces_the_entry() {
    let mut session = open("/");
    session.click("/publications", LinkOrigin::Content).unwrap();
    session.scroll_to(400.0);
    session.click("/publications", LinkOrigin::SiteNav).unwrap();

    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history().index(), 1);
    assert_eq!(session.navigator().last_decision(), Some(&ScrollDecision::ScrollToTop));
    assert!(session.back());
    assert_eq!(session.history().current().pathname, "/");
}

#[test]
fn same_page_click_twice_is_the_same_as_once() {
    let mut session = open("/");
    session.click("#about", LinkOrigin::SiteNav).unwrap();
    let once = session.document().scroll_position();
    session.click("#about", LinkOrigin::SiteNav).unwrap();
    assert_eq!(session.document().scroll_position(), once);
    assert_eq!(session.history().len(), 1);
    assert!(session.document().is_in_view("about"));
}

#[test]
fn header_link_from_article_navigates_home_then_scrolls() {
    let mut session = open("/projects/translink_od");
    assert!(session.document().smooth_scrolling());
    session.click("#contact", LinkOrigin::SiteNav).unwrap();
    assert_eq!(session.history().current().pathname, "/");
    assert!(!session.document().smooth_scrolling());
    session.settle();
    assert!(session.document().is_in_view("contact"));
}

#[test]
fn newer_transition_drops_pending_scroll() {
    let mut session = open("/translink-od");
    session.click("/#contact", LinkOrigin::Content).unwrap();
    session.advance(50);
    session.click("/publications", LinkOrigin::Content).unwrap();

    assert_eq!(session.settle(), 0);
    assert_eq!(session.document().scroll_position(), (0.0, 0.0));
    assert!(
        !session
            .document()
            .scroll_calls()
            .iter()
            .any(|call| matches!(call, ScrollCall::IntoView { .. }))
    );
}

#[test]
fn missing_fragment_target_never_scrolls_to_top() {
    let mut session = open("/#no-such-section");
    assert_eq!(session.settle(), 0);
    assert!(session.document().scroll_calls().is_empty());
}

#[test]
fn toc_click_rewrites_fragment_without_transition() {
    let mut session = open("/projects/transitmate_chatbot");
    let views = session.analytics().page_views().len();
    session.click("#technical", LinkOrigin::TableOfContents).unwrap();

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().current().hash, "#technical");
    assert_eq!(session.document().fragment(), Some("technical"));
    assert_eq!(session.analytics().page_views().len(), views);
    assert_eq!(session.active_section(), Some("technical"));
}

#[test]
fn toc_click_on_missing_anchor_still_rewrites_fragment() {
    let mut session = open("/projects/transitmate_chatbot");
    let calls = session.document().scroll_calls().len();
    session.click("#nowhere", LinkOrigin::TableOfContents).unwrap();

    assert_eq!(session.document().scroll_calls().len(), calls);
    assert_eq!(session.history().current().hash, "#nowhere");
    assert_eq!(session.document().fragment(), Some("nowhere"));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn active_section_follows_scrolling() {
    let mut session = open("/projects/transitmate_chatbot");
    assert_eq!(session.active_section(), Some("overview"));
    session.scroll_to(1000.0);
    assert_eq!(session.active_section(), Some("examples"));
    session.scroll_to(10_000.0);
    assert_eq!(session.active_section(), Some("notes"));
}

#[test]
fn leaving_an_article_resets_section_tracking() {
    let mut session = open("/projects/transitmate_chatbot");
    assert!(session.active_section().is_some());
    session.click("/publications", LinkOrigin::Content).unwrap();
    assert_eq!(session.active_section(), None);
}

#[test]
fn page_views_follow_pathname_changes() {
    let mut session = open("/");
    session.click("#projects", LinkOrigin::SiteNav).unwrap();
    session.click("/projects", LinkOrigin::Content).unwrap();
    session.back();
    let paths: Vec<&str> = session
        .analytics()
        .page_views()
        .iter()
        .map(|view| view.page_path.as_str())
        .collect();
    assert_eq!(paths, ["/", "/projects", "/"]);
}

#[test]
fn unknown_path_gets_fallback_title() {
    let session = open("/does-not-exist");
    assert_eq!(
        session.document().title(),
        "Transport Analytics & Insights | Transport Analytics & Insights"
    );
}

#[test]
fn forward_after_back_is_also_a_pop() {
    let mut session = open("/");
    session.click("/publications", LinkOrigin::Content).unwrap();
    session.back();
    let calls = session.document().scroll_calls().len();
    assert!(session.forward());
    assert_eq!(session.document().scroll_calls().len(), calls);
    assert!(!session.forward());
    assert_eq!(session.history().current().pathname, "/publications");
    assert_eq!(
        session.navigator().last_decision(),
        Some(&ScrollDecision::DeferToBrowser)
    );
}
