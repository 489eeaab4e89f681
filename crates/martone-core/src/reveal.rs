//! Content reveal presets selected by the `data-animation` annotation.

use crate::animator::{Transform, Tween};
use crate::constants::*;
use crate::easing::{lerp, Easing};
use crate::error::{parse_ms, AttributeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideFrom {
    Left,
    Right,
}

/// Closed set of reveal effects. Unknown or missing tags map to `Default`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    FadeScale,
    SlideRotate(SlideFrom),
    TypeWriter,
    BounceIn,
    Default,
}

impl RevealKind {
    pub fn from_attribute(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some("fadeInScale") => RevealKind::FadeScale,
            Some("slideInLeft") => RevealKind::SlideRotate(SlideFrom::Left),
            Some("slideInRight") => RevealKind::SlideRotate(SlideFrom::Right),
            Some("typeWriter") => RevealKind::TypeWriter,
            Some("bounceIn") => RevealKind::BounceIn,
            _ => RevealKind::Default,
        }
    }

    pub fn as_attribute(self) -> &'static str {
        match self {
            RevealKind::FadeScale => "fadeInScale",
            RevealKind::SlideRotate(SlideFrom::Left) => "slideInLeft",
            RevealKind::SlideRotate(SlideFrom::Right) => "slideInRight",
            RevealKind::TypeWriter => "typeWriter",
            RevealKind::BounceIn => "bounceIn",
            RevealKind::Default => "fadeInUp",
        }
    }

    pub fn default_duration_ms(self) -> f64 {
        match self {
            RevealKind::SlideRotate(_) => SLIDE_DEFAULT_DURATION_MS,
            _ => REVEAL_DEFAULT_DURATION_MS,
        }
    }

    /// Map the variant onto its concrete effect.
    pub fn plan(self, delay_ms: f64, duration_ms: f64) -> RevealPlan {
        match self {
            RevealKind::FadeScale => RevealPlan::Tween {
                from: Transform::scaled(FADE_SCALE_FROM),
                to: Transform::IDENTITY,
                tween: Tween::new(duration_ms, Easing::EaseInOutCubic).delayed(delay_ms),
            },
            RevealKind::SlideRotate(side) => {
                let dx = match side {
                    SlideFrom::Left => -SLIDE_DISTANCE_PX,
                    SlideFrom::Right => SLIDE_DISTANCE_PX,
                };
                RevealPlan::Tween {
                    from: Transform::translated(dx, 0.0).rotated(SLIDE_ROTATE_DEG),
                    to: Transform::IDENTITY,
                    tween: Tween::new(duration_ms, Easing::EaseInOutCubic).delayed(delay_ms),
                }
            }
            RevealKind::TypeWriter => RevealPlan::TypeWriter {
                char_ms: TYPEWRITER_CHAR_MS,
                delay_ms,
            },
            RevealKind::BounceIn => RevealPlan::Classes {
                classes: &["animate__animated", "animate__bounceIn"],
                delay_ms,
            },
            RevealKind::Default => RevealPlan::Classes {
                classes: &["animate__animated", "animate__fadeInUp"],
                delay_ms,
            },
        }
    }
}

/// Parsed reveal annotations of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub kind: RevealKind,
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl RevealSpec {
    pub fn from_attributes(
        kind: Option<&str>,
        delay: Option<&str>,
        duration: Option<&str>,
    ) -> Result<Self, AttributeError> {
        let kind = RevealKind::from_attribute(kind);
        Ok(Self {
            kind,
            delay_ms: parse_ms("data-delay", delay, 0.0)?,
            duration_ms: parse_ms("data-duration", duration, kind.default_duration_ms())?,
        })
    }

    /// Like [`from_attributes`](Self::from_attributes), but a bad field only
    /// falls back to its own default. Rejected fields are returned.
    pub fn from_attributes_lenient(
        kind: Option<&str>,
        delay: Option<&str>,
        duration: Option<&str>,
    ) -> (Self, Vec<AttributeError>) {
        let kind = RevealKind::from_attribute(kind);
        let mut errors = Vec::new();
        let mut field = |name: &str, value: Option<&str>, default: f64| {
            parse_ms(name, value, default).unwrap_or_else(|e| {
                errors.push(e);
                default
            })
        };
        let delay_ms = field("data-delay", delay, 0.0);
        let duration_ms = field("data-duration", duration, kind.default_duration_ms());
        (
            Self {
                kind,
                delay_ms,
                duration_ms,
            },
            errors,
        )
    }

    pub fn plan(&self) -> RevealPlan {
        self.kind.plan(self.delay_ms, self.duration_ms)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RevealPlan {
    /// Opacity 0 → 1 while the transform blends `from` → `to`.
    Tween {
        from: Transform,
        to: Transform,
        tween: Tween,
    },
    /// Characters appear one at a time.
    TypeWriter { char_ms: f64, delay_ms: f64 },
    /// The effect is carried by stylesheet classes.
    Classes {
        classes: &'static [&'static str],
        delay_ms: f64,
    },
}

/// Visual state of a tweened reveal at one eased progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub transform: Transform,
}

impl RevealFrame {
    pub fn at(from: Transform, to: Transform, eased: f64) -> Self {
        Self {
            opacity: lerp(0.0, 1.0, eased),
            transform: from.lerp(to, eased),
        }
    }
}

/// Vertical rise used by content sections on page load.
pub fn section_reveal_tween(index: usize) -> (Transform, Tween) {
    let delay = index as f64 * SECTION_STAGGER_MS + SECTION_BASE_DELAY_MS;
    (
        Transform::translated(0.0, SECTION_RISE_PX),
        Tween::new(SECTION_REVEAL_MS, Easing::EaseInOutCubic).delayed(delay),
    )
}

/// Stylesheet classes for a `data-animate` tag. Missing, blank or
/// multi-word tags fall back to `fadeInUp`.
pub fn animate_classes(tag: Option<&str>) -> [String; 2] {
    let name = tag
        .map(str::trim)
        .filter(|t| !t.is_empty() && !t.contains(char::is_whitespace))
        .unwrap_or(ANIMATE_ON_SCROLL_DEFAULT);
    ["animate__animated".to_string(), format!("animate__{name}")]
}

/// When the `index`-th floating element starts floating.
pub fn floating_delay_ms(index: usize) -> f64 {
    index as f64 * FLOATING_STAGGER_MS
}

/// Total typing time for `text`.
pub fn typewriter_duration_ms(text: &str, char_ms: f64) -> f64 {
    text.chars().count() as f64 * char_ms
}

/// Number of characters shown at linear progress `t`.
pub fn typewriter_visible_chars(total: usize, t: f64) -> usize {
    ((total as f64 * t.clamp(0.0, 1.0)).floor() as usize).min(total)
}

/// Prefix of `text` holding its first `chars` characters.
pub fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
