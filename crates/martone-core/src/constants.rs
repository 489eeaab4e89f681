// Shared tuning constants for the site effects. Times are in milliseconds,
// distances in CSS pixels unless the name says otherwise.

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_COUNT_MAX: usize = 400; // upper bound for page overrides
pub const PARTICLE_LINK_DISTANCE: f32 = 100.0;
pub const PARTICLE_LINK_ALPHA: f32 = 0.1; // alpha of a link at zero distance
pub const PARTICLE_LINK_WIDTH: f32 = 1.0;
pub const PARTICLE_GRID_CUTOFF: usize = 64; // above this count links use the spatial grid
pub const PARTICLE_SPEED_SPAN: f32 = 0.5; // velocity components in [-span/2, span/2)
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_OPACITY_INIT_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_INIT_SPAN: f32 = 0.5;
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_MAX: f32 = 0.8;
pub const PARTICLE_OPACITY_WALK: f32 = 0.02; // full width of the per-frame opacity delta
pub const PARTICLE_RGB: [u8; 3] = [212, 175, 55]; // #D4AF37

// Form factor guard
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const MOBILE_UA_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

// Scroll reactor
pub const PARALLAX_FACTOR: f64 = 0.5;
pub const SCROLL_SCALE_MIN: f64 = 0.8;
pub const SCROLL_SCALE_SPAN: f64 = 0.2;
pub const NAVBAR_SCROLLED_AT: f64 = 50.0;
pub const BACK_TO_TOP_AT: f64 = 500.0;
pub const SMOOTH_SCROLL_MS: f64 = 800.0;
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0; // fixed navbar height
pub const MENU_FOCUS_DELAY_MS: f64 = 100.0; // lets the collapse open before focusing

// Interaction effects
pub const MAGNETIC_PULL: f64 = 0.1;
pub const MAGNETIC_SCALE: f64 = 1.05;
pub const TILT_MAX_DEG: f64 = 10.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_LIFT_PX: f64 = 10.0;
pub const RIPPLE_DURATION_MS: f64 = 600.0;
pub const RIPPLE_MAX_SCALE: f64 = 2.0;
pub const RIPPLE_START_OPACITY: f64 = 1.0;

// Reveal animations
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_ROOT_MARGIN: &str = "50px";
pub const REVEAL_DEFAULT_DURATION_MS: f64 = 600.0;
pub const FADE_SCALE_FROM: f64 = 0.8;
pub const SLIDE_DEFAULT_DURATION_MS: f64 = 800.0;
pub const SLIDE_DISTANCE_PX: f64 = 100.0;
pub const SLIDE_ROTATE_DEG: f64 = 10.0;
pub const TYPEWRITER_CHAR_MS: f64 = 50.0;
pub const CARD_STAGGER_MS: f64 = 200.0;
pub const STAT_STAGGER_MS: f64 = 150.0;
pub const SECTION_RISE_PX: f64 = 50.0;
pub const SECTION_REVEAL_MS: f64 = 800.0;
pub const SECTION_STAGGER_MS: f64 = 200.0;
pub const SECTION_BASE_DELAY_MS: f64 = 500.0;
pub const LAZY_IMAGE_THRESHOLD: f64 = 0.0;
pub const ANIMATE_ON_SCROLL_THRESHOLD: f64 = 0.1;
pub const ANIMATE_ON_SCROLL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const ANIMATE_ON_SCROLL_DEFAULT: &str = "fadeInUp";
pub const FLOATING_STAGGER_MS: f64 = 500.0;

// Counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const STATS_THRESHOLD: f64 = 0.5;

// Notifications
pub const NOTIFY_ENTER_DELAY_MS: f64 = 100.0;
pub const NOTIFY_TIMEOUT_MS: f64 = 5000.0;
pub const NOTIFY_EXIT_MS: f64 = 300.0;

// Newsletter
pub const NEWSLETTER_ACK_MS: f64 = 1500.0;
pub const NEWSLETTER_SUCCESS_HOLD_MS: f64 = 3000.0;

// Loading screen
pub const LOADER_AFTER_LOAD_MS: f64 = 1000.0;
pub const LOADER_FADE_MS: f64 = 500.0;
pub const LOADER_FALLBACK_MS: f64 = 3000.0;

// Repeating text/button effects
pub const GLITCH_PERIOD_MS: f64 = 2000.0;
pub const GLITCH_CHANCE: f64 = 0.1;
pub const GLITCH_CHAR_CHANCE: f64 = 0.1;
pub const GLITCH_RESTORE_MS: f64 = 50.0;
pub const GLITCH_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
pub const PULSE_PERIOD_MS: f64 = 3000.0;
pub const PULSE_HOLD_MS: f64 = 1000.0;
pub const WORD_STAGGER_SEC: f64 = 0.1;
