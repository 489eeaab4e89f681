//! Runtime-tunable settings.
//!
//! Defaults come from [`crate::constants`]; a page may override a few of them
//! through `data-fx-*` attributes on `<body>`.

use crate::constants::*;
use crate::error::AttributeError;
use crate::notify::NotifyTimings;
use crate::particles::ParticleParams;
use crate::visibility::ObserverOptions;

#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub particles_enabled: bool,
    pub particles: ParticleParams,
    pub mobile_max_width: f64,
    pub reveal: ObserverOptions,
    pub stats: ObserverOptions,
    pub lazy_images: ObserverOptions,
    pub animate_on_scroll: ObserverOptions,
    pub notify: NotifyTimings,
    pub newsletter_ack_ms: f64,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            particles_enabled: true,
            particles: ParticleParams::default(),
            mobile_max_width: MOBILE_MAX_WIDTH,
            reveal: ObserverOptions::new(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN),
            stats: ObserverOptions::new(STATS_THRESHOLD, "0px"),
            lazy_images: ObserverOptions::new(LAZY_IMAGE_THRESHOLD, "0px"),
            animate_on_scroll: ObserverOptions::new(
                ANIMATE_ON_SCROLL_THRESHOLD,
                ANIMATE_ON_SCROLL_ROOT_MARGIN,
            ),
            notify: NotifyTimings::default(),
            newsletter_ack_ms: NEWSLETTER_ACK_MS,
        }
    }
}

/// Attributes read from `<body>`.
pub const CONFIG_ATTRIBUTES: &[&str] = &[
    "data-fx-particles",
    "data-fx-link-distance",
    "data-fx-disable-particles",
];

impl FxConfig {
    /// Apply one override. On error the config is left unchanged.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeError> {
        let raw = value.trim();
        match name {
            "data-fx-particles" => {
                let n = raw
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n <= PARTICLE_COUNT_MAX)
                    .ok_or_else(|| AttributeError::invalid(name, value))?;
                self.particles.count = n;
            }
            "data-fx-link-distance" => {
                let d = raw
                    .parse::<f32>()
                    .ok()
                    .filter(|d| d.is_finite() && *d >= 0.0)
                    .ok_or_else(|| AttributeError::invalid(name, value))?;
                self.particles.link_distance = d;
            }
            "data-fx-disable-particles" => match raw {
                "" | "true" | "1" => self.particles_enabled = false,
                "false" | "0" => self.particles_enabled = true,
                _ => return Err(AttributeError::invalid(name, value)),
            },
            _ => {}
        }
        Ok(())
    }

    /// Build from defaults plus every attribute `lookup` can resolve. Bad
    /// values are collected and skipped.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<AttributeError>) {
        let mut cfg = Self::default();
        let mut errors = Vec::new();
        for name in CONFIG_ATTRIBUTES {
            if let Some(value) = lookup(name) {
                if let Err(e) = cfg.apply_attribute(name, &value) {
                    errors.push(e);
                }
            }
        }
        (cfg, errors)
    }
}
