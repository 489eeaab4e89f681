//! Scroll-derived visual properties.
//!
//! Scroll events only *request* an update; the host runs at most one
//! [`ScrollReactor::recompute`] per rendered frame and drops the events in
//! between.

use crate::constants::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Layout box of a scroll-reactive element (`offsetTop`/`offsetHeight`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

#[inline]
fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[inline]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

/// Opacity fading out as the element scrolls past.
pub fn fade_opacity(m: &ScrollMetrics, el: &ElementBox) -> f64 {
    let span = m.viewport_height + el.height;
    if span <= 0.0 {
        return 1.0;
    }
    clamp01(1.0 - (m.scroll_y - el.top + m.viewport_height) / span)
}

/// Scale growing from 0.8 to 1.0 as the element enters the viewport.
pub fn scale_factor(m: &ScrollMetrics, el: &ElementBox) -> f64 {
    let progress = if m.viewport_height <= 0.0 {
        1.0
    } else {
        clamp01((m.scroll_y + m.viewport_height - el.top) / m.viewport_height)
    };
    SCROLL_SCALE_MIN + SCROLL_SCALE_SPAN * progress
}

/// Reading progress in percent. Pages no taller than the viewport report 0.
pub fn progress_percent(m: &ScrollMetrics) -> f64 {
    let scrollable = m.document_height - m.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (m.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AT
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AT
}

/// Scroll position that puts an anchor target just below the fixed navbar.
#[inline]
pub fn anchor_scroll_target(target_top: f64) -> f64 {
    (target_top - ANCHOR_SCROLL_OFFSET).max(0.0)
}

/// Everything the host applies after one recomputation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollFrame {
    pub parallax_y: f64,
    pub fade_opacities: Vec<f64>,
    pub scale_factors: Vec<f64>,
    pub progress_percent: f64,
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

/// Owner of the "update already scheduled for this frame" flag.
#[derive(Debug, Default)]
pub struct ScrollReactor {
    scheduled: bool,
    recomputations: u64,
}

impl ScrollReactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called for every scroll event. Returns `true` only when the caller
    /// must schedule a frame; later events before that frame are coalesced.
    pub fn request(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn recompute(
        &mut self,
        metrics: &ScrollMetrics,
        fade: &[ElementBox],
        scale: &[ElementBox],
    ) -> ScrollFrame {
        self.scheduled = false;
        self.recomputations += 1;
        ScrollFrame {
            parallax_y: parallax_offset(metrics.scroll_y),
            fade_opacities: fade.iter().map(|el| fade_opacity(metrics, el)).collect(),
            scale_factors: scale.iter().map(|el| scale_factor(metrics, el)).collect(),
            progress_percent: progress_percent(metrics),
            navbar_scrolled: navbar_scrolled(metrics.scroll_y),
            back_to_top_visible: back_to_top_visible(metrics.scroll_y),
        }
    }
}
