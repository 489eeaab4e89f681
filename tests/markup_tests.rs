// Host-side tests for generated HTML fragments.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/markup.rs"]
mod markup;

use martone_core::notify::NotificationKind;
use martone_core::text::split_words;
use markup::*;

#[test]
fn message_text_is_entity_encoded() {
    let html = notification_html("<b>\"Tom\" & 'Jerry'</b>", NotificationKind::Info);
    // text context: only `&`, `<` and `>` need encoding
    assert!(html.contains("<span>&lt;b&gt;\"Tom\" &amp; 'Jerry'&lt;/b&gt;</span>"));
    assert!(notification_html("plain", NotificationKind::Info).contains("<span>plain</span>"));
}

#[test]
fn notification_carries_icon_and_escaped_message() {
    let html = notification_html("<script>x</script>", NotificationKind::Error);
    assert!(html.contains("fa-exclamation-circle"));
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("notification-close"));
    assert_eq!(
        notification_class(NotificationKind::Success),
        "notification notification-success"
    );
}

#[test]
fn words_become_staggered_spans() {
    let html = word_spans_html(&split_words("Live & loud"));
    assert_eq!(
        html,
        "<span class=\"animated-word\" style=\"animation-delay: 0.00s\">Live</span> \
         <span class=\"animated-word\" style=\"animation-delay: 0.10s\">&amp;</span> \
         <span class=\"animated-word\" style=\"animation-delay: 0.20s\">loud</span>"
    );
}

#[test]
fn ripple_geometry_style() {
    assert_eq!(
        ripple_style(200.0, -50.0, -80.0),
        "width: 200px; height: 200px; left: -50px; top: -80px;"
    );
}
