use crate::constants::{
    ANIMATE_TEXT_SELECTOR, FLOATING_CLASS, FLOATING_SELECTOR, GLITCH_TARGET_SELECTOR, PULSE_CLASS,
    PULSE_SELECTOR,
};
use crate::dom;
use crate::markup;
use martone_core::constants::{GLITCH_RESTORE_MS, PULSE_HOLD_MS};
use martone_core::reveal::floating_delay_ms;
use martone_core::tasks::StopHandle;
use martone_core::text::{split_words, Glitch, Pulse};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

/// Wrap each word of `.animate-text` elements in a staggered span.
pub fn init_word_reveal(document: &web::Document) -> anyhow::Result<()> {
    for el in dom::query_all(document, ANIMATE_TEXT_SELECTOR) {
        let text = el.text_content().unwrap_or_default();
        el.set_inner_html(&markup::word_spans_html(&split_words(&text)));
    }
    Ok(())
}

/// Floating decorations start one after another.
pub fn init_floating(document: &web::Document) -> anyhow::Result<()> {
    for (i, el) in dom::query_all(document, FLOATING_SELECTOR).into_iter().enumerate() {
        dom::set_timeout(floating_delay_ms(i), move || {
            _ = el.class_list().add_1(FLOATING_CLASS);
        });
    }
    Ok(())
}

/// Start the glitch and pulse loops. Returns their stop handles.
pub fn init_repeating(document: &web::Document) -> anyhow::Result<Vec<StopHandle>> {
    let mut handles = Vec::new();
    let now = dom::now_ms();

    for el in dom::query_all(document, GLITCH_TARGET_SELECTOR) {
        let mut glitch = Glitch::new(el.text_content().unwrap_or_default(), now);
        handles.push(glitch.task().stop_handle());
        let mut rng = StdRng::from_entropy();
        let first_due = glitch.task().next_due();
        dom::chain_timeouts(first_due, move |now| {
            if let Some(scrambled) = glitch.tick(&mut rng, now) {
                el.set_text_content(Some(&scrambled));
                let el = el.clone();
                let original = glitch.original().to_string();
                dom::set_timeout(GLITCH_RESTORE_MS, move || {
                    el.set_text_content(Some(&original));
                });
            }
            (!glitch.task().is_stopped()).then(|| glitch.task().next_due())
        });
    }

    for el in dom::query_all(document, PULSE_SELECTOR) {
        let mut pulse = Pulse::new(now);
        handles.push(pulse.task().stop_handle());
        let first_due = pulse.task().next_due();
        dom::chain_timeouts(first_due, move |now| {
            if pulse.tick(now) {
                _ = el.class_list().add_1(PULSE_CLASS);
                let el = el.clone();
                dom::set_timeout(PULSE_HOLD_MS, move || {
                    _ = el.class_list().remove_1(PULSE_CLASS);
                });
            }
            (!pulse.task().is_stopped()).then(|| pulse.task().next_due())
        });
    }

    log::info!("[effects] {} repeating tasks", handles.len());
    Ok(handles)
}
