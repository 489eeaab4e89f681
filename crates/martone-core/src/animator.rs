//! Time-driven property animation.
//!
//! An [`Animation`] samples elapsed time against its [`Tween`], feeds the eased
//! progress to a per-frame closure and fires a completion closure exactly once.
//! The [`Animator`] owns every running animation and is ticked once per
//! rendered frame by the host; timestamps are milliseconds on any monotonic
//! clock.

use crate::easing::{lerp, Easing};

/// Timing of a single animation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing,
        }
    }

    pub fn delayed(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Raw progress at `elapsed_ms` since invocation, or `None` while the
    /// delay is still running.
    pub fn progress(&self, elapsed_ms: f64) -> Option<f64> {
        let active = elapsed_ms - self.delay_ms;
        if active < 0.0 {
            return None;
        }
        if self.duration_ms <= 0.0 {
            return Some(1.0);
        }
        Some((active / self.duration_ms).min(1.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    Delayed,
    Running,
    Finished,
}

type FrameFn = Box<dyn FnMut(f64)>;
type CompleteFn = Box<dyn FnOnce()>;

/// One animation run. Not reusable once finished.
pub struct Animation {
    started_at: f64,
    tween: Tween,
    phase: AnimationPhase,
    on_frame: FrameFn,
    on_complete: Option<CompleteFn>,
}

impl Animation {
    pub fn new(started_at: f64, tween: Tween, on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            started_at,
            tween,
            phase: AnimationPhase::Delayed,
            on_frame: Box::new(on_frame),
            on_complete: None,
        }
    }

    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == AnimationPhase::Finished
    }

    /// Sample the animation at `now`. Nothing is invoked before the delay has
    /// elapsed or after the animation has finished.
    pub fn sample(&mut self, now: f64) -> AnimationPhase {
        if self.phase == AnimationPhase::Finished {
            return self.phase;
        }
        let Some(progress) = self.tween.progress(now - self.started_at) else {
            return self.phase;
        };
        (self.on_frame)(self.tween.easing.apply(progress));
        if progress >= 1.0 {
            self.phase = AnimationPhase::Finished;
            if let Some(done) = self.on_complete.take() {
                done();
            }
        } else {
            self.phase = AnimationPhase::Running;
        }
        self.phase
    }

    /// Stop without running the completion closure.
    pub fn cancel(&mut self) {
        self.phase = AnimationPhase::Finished;
        self.on_complete = None;
    }
}

/// Owner of all in-flight animations, ticked once per frame.
#[derive(Default)]
pub struct Animator {
    animations: Vec<Animation>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, animation: Animation) {
        self.animations.push(animation);
    }

    /// Advance every animation and drop the finished ones. Returns the number
    /// still in flight.
    pub fn tick(&mut self, now: f64) -> usize {
        for a in self.animations.iter_mut() {
            a.sample(now);
        }
        self.animations.retain(|a| !a.is_finished());
        self.animations.len()
    }

    pub fn is_idle(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

/// 2D transform descriptor composed as translate, scale, rotate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_deg: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    pub fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    pub fn translated(x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Self::IDENTITY
        }
    }

    pub fn rotated(mut self, deg: f64) -> Self {
        self.rotate_deg = deg;
        self
    }

    /// Component-wise linear blend, `t` is the eased progress.
    pub fn lerp(self, to: Transform, t: f64) -> Transform {
        Transform {
            translate_x: lerp(self.translate_x, to.translate_x, t),
            translate_y: lerp(self.translate_y, to.translate_y, t),
            scale: lerp(self.scale, to.scale, t),
            rotate_deg: lerp(self.rotate_deg, to.rotate_deg, t),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4}) rotate({:.2}deg)",
            self.translate_x, self.translate_y, self.scale, self.rotate_deg
        )
    }
}
