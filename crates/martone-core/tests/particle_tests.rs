use glam::Vec2;
use martone_core::constants::*;
use martone_core::particles::*;
use rand::prelude::*;

#[derive(Default)]
struct RecordingSurface {
    clears: usize,
    circles: Vec<(Vec2, f32)>,
    lines: Vec<(Vec2, Vec2, f32)>,
}

impl ParticleSurface for RecordingSurface {
    fn clear(&mut self, _size: Vec2) {
        self.clears += 1;
        self.circles.clear();
        self.lines.clear();
    }
    fn fill_circle(&mut self, center: Vec2, _radius: f32, _rgb: [u8; 3], alpha: f32) {
        self.circles.push((center, alpha));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, _rgb: [u8; 3], alpha: f32, _width: f32) {
        self.lines.push((from, to, alpha));
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn still(x: f32, y: f32) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.5, 0.5)
}

#[test]
fn start_spawns_particles_inside_the_surface() {
    let mut field = ParticleField::new(ParticleParams::default(), rng());
    assert_eq!(field.state(), FieldState::Uninitialized);
    assert!(field.start(1280.0, 720.0));
    assert_eq!(field.state(), FieldState::Running);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 1280.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 720.0);
        assert!(p.velocity.x.abs() <= PARTICLE_SPEED_SPAN / 2.0);
        assert!(p.velocity.y.abs() <= PARTICLE_SPEED_SPAN / 2.0);
        assert!(p.radius >= PARTICLE_RADIUS_MIN && p.radius <= PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN);
        assert!(p.opacity >= PARTICLE_OPACITY_INIT_MIN);
    }
    // second start is ignored
    assert!(!field.start(10.0, 10.0));
    assert_eq!(field.bounds(), Vec2::new(1280.0, 720.0));
}

#[test]
fn boundary_contact_flips_velocity_and_returns_inside() {
    let p = Particle::new(Vec2::new(-1.0, 50.0), Vec2::new(-0.5, 0.0), 1.0, 0.5);
    let mut field =
        ParticleField::with_particles(ParticleParams::default(), Vec2::new(100.0, 100.0), vec![p], rng());

    field.step();
    assert_eq!(field.particles()[0].velocity.x, 0.5);

    for _ in 0..4 {
        field.step();
    }
    let p = &field.particles()[0];
    assert!(p.position.x >= 0.0 && p.position.x <= 100.0, "x={}", p.position.x);
    assert_eq!(p.velocity.x, 0.5);
}

#[test]
fn reflection_keeps_speed_on_both_walls() {
    let mut p = Particle::new(Vec2::new(101.0, 101.0), Vec2::new(0.3, 0.2), 1.0, 0.5);
    p.reflect(Vec2::new(100.0, 100.0));
    assert_eq!(p.velocity, Vec2::new(-0.3, -0.2));
    // already heading back inside: unchanged
    p.reflect(Vec2::new(100.0, 100.0));
    assert_eq!(p.velocity, Vec2::new(-0.3, -0.2));
}

#[test]
fn opacity_stays_clamped_over_many_frames() {
    let mut field = ParticleField::new(ParticleParams::default(), rng());
    field.start(800.0, 600.0);
    for _ in 0..5000 {
        field.step();
        for p in field.particles() {
            assert!(p.opacity >= PARTICLE_OPACITY_MIN && p.opacity <= PARTICLE_OPACITY_MAX);
        }
    }
    let mut p = still(0.0, 0.0);
    p.wander_opacity(5.0);
    assert_eq!(p.opacity, PARTICLE_OPACITY_MAX);
    p.wander_opacity(-5.0);
    assert_eq!(p.opacity, PARTICLE_OPACITY_MIN);
}

#[test]
fn links_join_only_close_pairs_with_fading_alpha() {
    let particles = vec![still(0.0, 0.0), still(50.0, 0.0), still(300.0, 0.0)];
    let links = links_brute_force(&particles, 100.0);
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].a, links[0].b), (0, 1));
    assert!((links[0].alpha - 0.05).abs() < 1e-6);
}

#[test]
fn exactly_link_distance_is_not_linked() {
    let particles = vec![still(0.0, 0.0), still(100.0, 0.0)];
    assert!(links_brute_force(&particles, 100.0).is_empty());
    assert!(links_grid(&particles, 100.0).is_empty());
}

#[test]
fn grid_scan_matches_brute_force() {
    let mut r = rng();
    let bounds = Vec2::new(1920.0, 1080.0);
    let mut particles: Vec<Particle> = (0..400).map(|_| Particle::random(&mut r, bounds)).collect();
    // a few strays outside the surface, as after a shrinking resize
    particles.push(still(-30.0, -30.0));
    particles.push(still(-60.0, 10.0));
    let brute = links_brute_force(&particles, 100.0);
    let grid = links_grid(&particles, 100.0);
    assert!(!brute.is_empty());
    assert_eq!(brute.len(), grid.len());
    for (a, b) in brute.iter().zip(grid.iter()) {
        assert_eq!((a.a, a.b), (b.a, b.b));
        assert!((a.alpha - b.alpha).abs() < 1e-6);
    }
}

#[test]
fn render_draws_every_particle_and_link() {
    let particles = vec![still(10.0, 10.0), still(20.0, 10.0), still(500.0, 500.0)];
    let field =
        ParticleField::with_particles(ParticleParams::default(), Vec2::new(600.0, 600.0), particles, rng());
    let mut surface = RecordingSurface::default();
    field.render(&mut surface);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.circles.len(), 3);
    assert_eq!(surface.lines.len(), 1);
}

#[test]
fn large_fields_use_the_grid_path() {
    let params = ParticleParams {
        count: 200,
        ..ParticleParams::default()
    };
    let mut field = ParticleField::new(params, rng());
    field.start(1000.0, 1000.0);
    let links = field.links();
    assert_eq!(links, links_grid(field.particles(), params.link_distance));
}

#[test]
fn unbounded_count_is_capped_at_start() {
    let params = ParticleParams {
        count: usize::MAX,
        ..ParticleParams::default()
    };
    let mut field = ParticleField::new(params, rng());
    assert!(field.start(800.0, 600.0));
    assert_eq!(field.particles().len(), PARTICLE_COUNT_MAX);
}

#[test]
fn stopped_field_is_terminal() {
    let mut field = ParticleField::new(ParticleParams::default(), rng());
    field.start(400.0, 400.0);
    field.stop();
    assert_eq!(field.state(), FieldState::Destroyed);
    assert!(field.particles().is_empty());
    assert!(!field.start(400.0, 400.0));

    let mut surface = RecordingSurface::default();
    field.frame(&mut surface);
    assert_eq!(surface.clears, 0);
}

#[test]
fn resize_keeps_positions() {
    let mut field = ParticleField::with_particles(
        ParticleParams::default(),
        Vec2::new(1000.0, 1000.0),
        vec![still(900.0, 900.0)],
        rng(),
    );
    field.resize(500.0, 500.0);
    assert_eq!(field.bounds(), Vec2::new(500.0, 500.0));
    assert_eq!(field.particles()[0].position, Vec2::new(900.0, 900.0));
}

#[test]
fn mobile_detection() {
    let desktop = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";
    assert!(!is_mobile(1280.0, desktop, MOBILE_MAX_WIDTH));
    assert!(is_mobile(768.0, desktop, MOBILE_MAX_WIDTH));
    assert!(is_mobile(1024.0, "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)", MOBILE_MAX_WIDTH));
    assert!(is_mobile(1400.0, "Opera Mini/36.2", MOBILE_MAX_WIDTH));
}
