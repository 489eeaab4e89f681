//! HTML fragments built by the front-end. Text is always escaped; messages
//! and page copy never reach `innerHTML` raw.

use html_escape::encode_text;
use martone_core::notify::NotificationKind;
use martone_core::text::WordSpan;

/// Class list of a notification container.
pub fn notification_class(kind: NotificationKind) -> String {
    format!("notification notification-{}", kind.as_str())
}

/// Inner markup of a notification: icon, message and close button.
pub fn notification_html(message: &str, kind: NotificationKind) -> String {
    format!(
        "<div class=\"notification-content\"><i class=\"fas fa-{}\"></i><span>{}</span></div>\
         <button class=\"notification-close\"><i class=\"fas fa-times\"></i></button>",
        kind.icon(),
        encode_text(message)
    )
}

/// Words wrapped in staggered spans, separated by single spaces.
pub fn word_spans_html(words: &[WordSpan]) -> String {
    words
        .iter()
        .map(|w| {
            format!(
                "<span class=\"animated-word\" style=\"animation-delay: {:.2}s\">{}</span>",
                w.delay_sec,
                encode_text(&w.word)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inline style of a ripple overlay.
pub fn ripple_style(size: f64, left: f64, top: f64) -> String {
    format!("width: {size}px; height: {size}px; left: {left}px; top: {top}px;")
}
