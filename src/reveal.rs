use crate::constants::*;
use crate::dom;
use crate::frame::{self, Motion};
use crate::observe;
use martone_core::animator::{Animation, Transform, Tween};
use martone_core::config::FxConfig;
use martone_core::constants::{CARD_STAGGER_MS, STAT_STAGGER_MS};
use martone_core::counter::{parse_counter_target, CounterAnimation};
use martone_core::easing::Easing;
use martone_core::reveal::{
    animate_classes, char_prefix, section_reveal_tween, typewriter_duration_ms, typewriter_visible_chars,
    RevealFrame, RevealKind, RevealPlan, RevealSpec, SlideFrom,
};
use martone_core::tasks::StopHandle;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply_frame(el: &web::HtmlElement, frame: &RevealFrame) {
    dom::set_style(el, "opacity", &format!("{:.3}", frame.opacity));
    dom::set_style(el, "transform", &frame.transform.to_css());
}

/// Fade `el` in while blending `from` into `to`.
fn play_tween(motion: &Motion, el: &web::HtmlElement, from: Transform, to: Transform, tween: Tween) {
    apply_frame(el, &RevealFrame::at(from, to, 0.0));
    let frame_el = el.clone();
    let done_el = el.clone();
    let animation = Animation::new(dom::now_ms(), tween, move |eased| {
        apply_frame(&frame_el, &RevealFrame::at(from, to, eased));
    })
    .on_complete(move || {
        dom::set_style(&done_el, "transform", &to.to_css());
    });
    motion.start(animation);
}

fn play_typewriter(motion: &Motion, el: &web::HtmlElement, char_ms: f64, delay_ms: f64) {
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));
    let total = text.chars().count();
    let tween = Tween::new(typewriter_duration_ms(&text, char_ms), Easing::Linear).delayed(delay_ms);
    let frame_el = el.clone();
    let done_el = el.clone();
    let animation = Animation::new(dom::now_ms(), tween, move |t| {
        let shown = typewriter_visible_chars(total, t);
        frame_el.set_text_content(Some(char_prefix(&text, shown)));
    })
    .on_complete(move || {
        _ = done_el.class_list().add_1(TYPING_COMPLETE_CLASS);
    });
    motion.start(animation);
}

fn play_classes(el: &web::HtmlElement, classes: &'static [&'static str], delay_ms: f64) {
    let add = {
        let el = el.clone();
        move || {
            for class in classes {
                _ = el.class_list().add_1(class);
            }
        }
    };
    if delay_ms > 0.0 {
        dom::set_timeout(delay_ms, add);
    } else {
        add();
    }
}

pub fn play(motion: &Motion, el: &web::HtmlElement, plan: RevealPlan) {
    match plan {
        RevealPlan::Tween { from, to, tween } => play_tween(motion, el, from, to, tween),
        RevealPlan::TypeWriter { char_ms, delay_ms } => {
            play_typewriter(motion, el, char_ms, delay_ms)
        }
        RevealPlan::Classes { classes, delay_ms } => play_classes(el, classes, delay_ms),
    }
}

/// Annotate featured cards and stat items with staggered presets.
fn annotate_staggers(document: &web::Document) {
    for (i, card) in dom::query_all(document, FEATURED_CARD_SELECTOR).iter().enumerate() {
        _ = card.set_attribute(ATTR_ANIMATION, RevealKind::FadeScale.as_attribute());
        _ = card.set_attribute(ATTR_DELAY, &(i as f64 * CARD_STAGGER_MS).to_string());
    }
    for (i, item) in dom::query_all(document, STAT_ITEM_SELECTOR).iter().enumerate() {
        _ = item.set_attribute(ATTR_ANIMATION, RevealKind::BounceIn.as_attribute());
        _ = item.set_attribute(ATTR_DELAY, &(i as f64 * STAT_STAGGER_MS).to_string());
    }
}

fn spec_of(el: &web::HtmlElement) -> RevealSpec {
    let kind = el.get_attribute(ATTR_ANIMATION);
    let delay = el.get_attribute(ATTR_DELAY);
    let duration = el.get_attribute(ATTR_DURATION);
    let (spec, errors) =
        RevealSpec::from_attributes_lenient(kind.as_deref(), delay.as_deref(), duration.as_deref());
    for e in errors {
        log::warn!("[reveal] {e}; using the preset default");
    }
    spec
}

/// Scroll-triggered reveals for every `[data-animation]` element.
pub fn init(document: &web::Document, cfg: &FxConfig, motion: &Motion) -> anyhow::Result<()> {
    annotate_staggers(document);
    let targets: Vec<(web::Element, RevealSpec)> = dom::query_all(document, REVEAL_SELECTOR)
        .into_iter()
        .map(|el| {
            let spec = spec_of(&el);
            (el.unchecked_into::<web::Element>(), spec)
        })
        .collect();
    log::info!("[reveal] {} targets", targets.len());
    let motion = motion.clone();
    observe::observe_once("reveal", targets, &cfg.reveal, move |el, spec| {
        let el: web::HtmlElement = el.unchecked_into();
        play(&motion, &el, spec.plan());
    })
}

/// Stylesheet-only reveals for `[data-animate]` elements.
pub fn init_animate_on_scroll(
    document: &web::Document,
    cfg: &FxConfig,
) -> anyhow::Result<()> {
    let targets: Vec<(web::Element, [String; 2])> =
        dom::query_all(document, ANIMATE_ON_SCROLL_SELECTOR)
            .into_iter()
            .map(|el| {
                let classes = animate_classes(el.get_attribute(ATTR_ANIMATE).as_deref());
                (el.unchecked_into::<web::Element>(), classes)
            })
            .collect();
    observe::observe_once("animate", targets, &cfg.animate_on_scroll, |el, [base, effect]| {
        _ = el.class_list().add_2(&base, &effect);
    })
}

/// Timed hero entrance: title, subtitle, then buttons.
pub fn init_hero(document: &web::Document, motion: &Motion) -> anyhow::Result<()> {
    for content in dom::query_all(document, HERO_CONTENT_SELECTOR) {
        let parts = [
            (HERO_TITLE_SELECTOR, RevealKind::FadeScale, HERO_TITLE_TIMING),
            (
                HERO_SUBTITLE_SELECTOR,
                RevealKind::SlideRotate(SlideFrom::Left),
                HERO_SUBTITLE_TIMING,
            ),
            (HERO_BUTTONS_SELECTOR, RevealKind::FadeScale, HERO_BUTTONS_TIMING),
        ];
        for (selector, kind, (delay, duration)) in parts {
            for el in dom::query_within(&content, selector) {
                play(motion, &el, kind.plan(delay, duration));
            }
        }
    }
    Ok(())
}

/// Content sections rise in one after another on page load.
pub fn init_sections(document: &web::Document, motion: &Motion) -> anyhow::Result<()> {
    for (i, section) in dom::query_all(document, CONTENT_SECTION_SELECTOR).iter().enumerate() {
        let (from, tween) = section_reveal_tween(i);
        play_tween(motion, section, from, Transform::IDENTITY, tween);
    }
    Ok(())
}

/// Swap in `data-src` the first time each lazy image becomes visible.
pub fn init_lazy_images(document: &web::Document, cfg: &FxConfig) -> anyhow::Result<()> {
    let targets: Vec<(web::Element, String)> = dom::query_all(document, LAZY_IMAGE_SELECTOR)
        .into_iter()
        .filter_map(|img| {
            let src = img.get_attribute(ATTR_LAZY_SRC).filter(|s| !s.is_empty())?;
            Some((img.unchecked_into::<web::Element>(), src))
        })
        .collect();
    observe::observe_once("lazy", targets, &cfg.lazy_images, |el, src| {
        if let Ok(img) = el.dyn_into::<web::HtmlImageElement>() {
            img.set_src(&src);
            _ = img.class_list().add_1(LOADED_CLASS);
        }
    })
}

fn run_counters(document: &web::Document) {
    let now = dom::now_ms();
    for el in dom::query_all(document, STAT_NUMBER_SELECTOR) {
        let raw = el.get_attribute(ATTR_COUNTER_TARGET).unwrap_or_default();
        let target = match parse_counter_target(&raw) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("[stats] {e}");
                continue;
            }
        };
        let mut counter = CounterAnimation::stat(target, now);
        frame::start_loop(StopHandle::new(), move |now| {
            let sample = counter.sample(now);
            el.set_text_content(Some(&sample.value.to_string()));
            !sample.finished
        });
    }
}

/// Count the statistics up once the stats section is half visible.
pub fn init_stats(document: &web::Document, cfg: &FxConfig) -> anyhow::Result<()> {
    let Some(section) = document
        .query_selector(STATS_SECTION_SELECTOR)
        .map_err(dom::js_err)?
    else {
        return Ok(());
    };
    let doc = document.clone();
    observe::observe_once("stats", vec![(section, ())], &cfg.stats, move |_, ()| {
        run_counters(&doc);
    })
}
