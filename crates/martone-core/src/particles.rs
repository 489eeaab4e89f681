//! Decorative particle field.
//!
//! A fixed set of point particles drifts across a viewport-sized surface,
//! bouncing elastically off its edges while their opacity random-walks.
//! Nearby pairs are joined by faint lines. The pair scan is O(N²), which is
//! fine for the default N = 50; above `grid_cutoff` particles the scan is
//! bucketed into a uniform grid whose cell size equals the link distance, so
//! only neighbouring cells are compared. Both paths yield the same links.

use crate::constants::*;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity: opacity.clamp(PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_MAX),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let mut axis = |extent: f32| rng.gen::<f32>() * extent.max(0.0);
        let position = Vec2::new(axis(bounds.x), axis(bounds.y));
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
            (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
        );
        let radius = PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN;
        let opacity = PARTICLE_OPACITY_INIT_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_INIT_SPAN;
        Self::new(position, velocity, radius, opacity)
    }

    #[inline]
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// Elastic wall bounce. Outside `[0, bounds]` the velocity component is
    /// pointed back inside with its magnitude kept, so a particle stranded
    /// outside after a resize cannot flip back and forth.
    #[inline]
    pub fn reflect(&mut self, bounds: Vec2) {
        if self.position.x < 0.0 {
            self.velocity.x = self.velocity.x.abs();
        } else if self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x.abs();
        }
        if self.position.y < 0.0 {
            self.velocity.y = self.velocity.y.abs();
        } else if self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y.abs();
        }
    }

    #[inline]
    pub fn wander_opacity(&mut self, delta: f32) {
        self.opacity = (self.opacity + delta).clamp(PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_MAX);
    }
}

/// Pair of particles close enough to be joined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

#[inline]
fn link_alpha(distance: f32, max_distance: f32) -> f32 {
    PARTICLE_LINK_ALPHA * (1.0 - distance / max_distance)
}

/// Exhaustive O(N²) scan over unordered pairs.
pub fn links_brute_force(particles: &[Particle], max_distance: f32) -> Vec<Link> {
    let mut out = Vec::new();
    for (i, p) in particles.iter().enumerate() {
        for (j, q) in particles.iter().enumerate().skip(i + 1) {
            let d = p.position.distance(q.position);
            if d < max_distance {
                out.push(Link {
                    a: i,
                    b: j,
                    alpha: link_alpha(d, max_distance),
                });
            }
        }
    }
    out
}

/// Grid-bucketed scan; same result as [`links_brute_force`], sorted by pair.
pub fn links_grid(particles: &[Particle], max_distance: f32) -> Vec<Link> {
    if max_distance <= 0.0 {
        return Vec::new();
    }
    let cell_of = |p: Vec2| {
        (
            (p.x / max_distance).floor() as i32,
            (p.y / max_distance).floor() as i32,
        )
    };
    let mut grid: FnvHashMap<(i32, i32), SmallVec<[usize; 8]>> = FnvHashMap::default();
    for (i, p) in particles.iter().enumerate() {
        grid.entry(cell_of(p.position)).or_default().push(i);
    }
    let mut out = Vec::new();
    for (i, p) in particles.iter().enumerate() {
        let (cx, cy) = cell_of(p.position);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let Some(bucket) = grid.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &j in bucket.iter().filter(|&&j| j > i) {
                    let d = p.position.distance(particles[j].position);
                    if d < max_distance {
                        out.push(Link {
                            a: i,
                            b: j,
                            alpha: link_alpha(d, max_distance),
                        });
                    }
                }
            }
        }
    }
    out.sort_by_key(|l| (l.a, l.b));
    out
}

/// Drawing surface the field renders onto.
pub trait ParticleSurface {
    fn clear(&mut self, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, rgb: [u8; 3], alpha: f32, width: f32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    Uninitialized,
    Running,
    Destroyed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    pub link_distance: f32,
    pub grid_cutoff: usize,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            link_distance: PARTICLE_LINK_DISTANCE,
            grid_cutoff: PARTICLE_GRID_CUTOFF,
        }
    }
}

pub struct ParticleField {
    pub params: ParticleParams,
    particles: Vec<Particle>,
    bounds: Vec2,
    state: FieldState,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: ParticleParams, rng: StdRng) -> Self {
        Self {
            params,
            particles: Vec::new(),
            bounds: Vec2::ZERO,
            state: FieldState::Uninitialized,
            rng,
        }
    }

    /// Field already running over `particles`, used to stage exact scenes.
    pub fn with_particles(
        params: ParticleParams,
        bounds: Vec2,
        particles: Vec<Particle>,
        rng: StdRng,
    ) -> Self {
        Self {
            params,
            particles,
            bounds,
            state: FieldState::Running,
            rng,
        }
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// `Uninitialized -> Running`: size the surface and spawn the particles.
    pub fn start(&mut self, width: f32, height: f32) -> bool {
        if self.state != FieldState::Uninitialized {
            log::warn!("[particles] start ignored in state {:?}", self.state);
            return false;
        }
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let bounds = self.bounds;
        let rng = &mut self.rng;
        self.particles = (0..self.params.count.min(PARTICLE_COUNT_MAX))
            .map(|_| Particle::random(&mut *rng, bounds))
            .collect();
        self.state = FieldState::Running;
        log::info!(
            "[particles] started n={} surface={}x{}",
            self.particles.len(),
            width,
            height
        );
        true
    }

    /// Track a viewport resize. Particles keep their positions; any now
    /// outside the surface are turned back by the next reflection.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.state == FieldState::Destroyed {
            return;
        }
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Running -> Destroyed. Terminal.
    pub fn stop(&mut self) {
        if self.state != FieldState::Destroyed {
            self.state = FieldState::Destroyed;
            self.particles.clear();
            log::info!("[particles] stopped");
        }
    }

    /// Integrate, reflect and random-walk opacity for one frame.
    pub fn step(&mut self) {
        if self.state != FieldState::Running {
            return;
        }
        let half_walk = PARTICLE_OPACITY_WALK * 0.5;
        for p in self.particles.iter_mut() {
            p.integrate();
            p.reflect(self.bounds);
            p.wander_opacity(self.rng.gen_range(-half_walk..half_walk));
        }
    }

    pub fn links(&self) -> Vec<Link> {
        if self.particles.len() > self.params.grid_cutoff {
            links_grid(&self.particles, self.params.link_distance)
        } else {
            links_brute_force(&self.particles, self.params.link_distance)
        }
    }

    pub fn render<S: ParticleSurface + ?Sized>(&self, surface: &mut S) {
        if self.state != FieldState::Running {
            return;
        }
        surface.clear(self.bounds);
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, PARTICLE_RGB, p.opacity);
        }
        for link in self.links() {
            surface.stroke_line(
                self.particles[link.a].position,
                self.particles[link.b].position,
                PARTICLE_RGB,
                link.alpha,
                PARTICLE_LINK_WIDTH,
            );
        }
    }

    /// One full frame: simulate, then redraw.
    pub fn frame<S: ParticleSurface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.render(surface);
    }
}

/// Small-viewport or known mobile browser.
pub fn is_mobile(viewport_width: f64, user_agent: &str, max_width: f64) -> bool {
    if viewport_width <= max_width {
        return true;
    }
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m))
}
