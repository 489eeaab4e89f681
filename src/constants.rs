/// Page hooks and presentation constants for the web front-end.
///
/// Selectors, ids and class names are the contract with the site markup and
/// stylesheet; timing and geometry knobs live in `martone_core::constants`.

// Loading screen
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADED_CLASS: &str = "loaded";
pub const BODY_LOADING_CLASS: &str = "loading";

// Particle canvas
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const PARTICLE_CANVAS_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("z-index", "1"),
    ("opacity", "0.3"),
];

// Reveal targets and annotations
pub const REVEAL_SELECTOR: &str = "[data-animation]";
pub const ATTR_ANIMATION: &str = "data-animation";
pub const ATTR_DELAY: &str = "data-delay";
pub const ATTR_DURATION: &str = "data-duration";
pub const FEATURED_CARD_SELECTOR: &str = ".featured-card";
pub const STAT_ITEM_SELECTOR: &str = ".stat-item";
pub const TYPING_COMPLETE_CLASS: &str = "typing-complete";
pub const ANIMATE_ON_SCROLL_SELECTOR: &str = "[data-animate]";
pub const ATTR_ANIMATE: &str = "data-animate";

// Hero entrance
pub const HERO_CONTENT_SELECTOR: &str = ".hero-content";
pub const HERO_TITLE_SELECTOR: &str = ".hero-title";
pub const HERO_SUBTITLE_SELECTOR: &str = ".hero-subtitle";
pub const HERO_BUTTONS_SELECTOR: &str = ".hero-buttons";
// (delay, duration) in ms for title, subtitle and buttons
pub const HERO_TITLE_TIMING: (f64, f64) = (500.0, 1000.0);
pub const HERO_SUBTITLE_TIMING: (f64, f64) = (1000.0, 800.0);
pub const HERO_BUTTONS_TIMING: (f64, f64) = (1500.0, 600.0);

pub const CONTENT_SECTION_SELECTOR: &str = ".content-section";

// Stats
pub const STATS_SECTION_SELECTOR: &str = ".stats-section";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";
pub const ATTR_COUNTER_TARGET: &str = "data-target";

// Lazy images
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const ATTR_LAZY_SRC: &str = "data-src";

// Scroll reactive elements
pub const PARALLAX_SELECTOR: &str = ".hero-background";
pub const FADE_ON_SCROLL_SELECTOR: &str = ".fade-on-scroll";
pub const SCALE_ON_SCROLL_SELECTOR: &str = ".scale-on-scroll";
pub const SCROLL_PROGRESS_CLASS: &str = "scroll-progress";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const VISIBLE_CLASS: &str = "visible";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";

// Navbar menu
pub const NAV_LINK_SELECTOR: &str = ".navbar-nav .nav-link";
pub const NAV_TOGGLER_SELECTOR: &str = ".navbar-toggler";
pub const NAV_COLLAPSE_SELECTOR: &str = ".navbar-collapse";
pub const COLLAPSED_CLASS: &str = "collapsed";
pub const MENU_OPEN_CLASS: &str = "show";

// Pointer effects
pub const MAGNETIC_SELECTOR: &str = ".btn-hero";
pub const TILT_SELECTOR: &str = ".featured-card";
pub const RIPPLE_SELECTOR: &str = ".btn, .social-link";
pub const RIPPLE_CLASS: &str = "ripple";
pub const IMAGE_PLACEHOLDER_SELECTOR: &str = ".image-placeholder";
pub const HOVERED_CLASS: &str = "hovered";
pub const SOCIAL_LINK_ANY_SELECTOR: &str = ".social-link";
pub const DIMMED_CLASS: &str = "dimmed";
pub const FLOATING_SELECTOR: &str = ".floating-element";
pub const FLOATING_CLASS: &str = "floating";

// Keyboard access
pub const KEY_ACTIVATED_SELECTOR: &str = ".social-link, .btn-hero";
pub const SKIP_LINK_HREF: &str = "#main-content";
pub const SKIP_LINK_CLASS: &str = "skip-link";
pub const SKIP_LINK_TEXT: &str = "Skip to main content";

// Newsletter
pub const NEWSLETTER_FORM_ID: &str = "newsletterForm";
pub const NEWSLETTER_INPUT_SELECTOR: &str = "input[type=\"email\"]";
pub const NEWSLETTER_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const NEWSLETTER_BUSY_HTML: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Subscribing...";
pub const SUBSCRIPTION_SUCCESS_CLASS: &str = "subscription-success";

// Social sidebar
pub const SOCIAL_MORE_SELECTOR: &str = ".social-more";
pub const SOCIAL_LINK_SELECTOR: &str = ".social-sidebar .social-link";
pub const ATTR_PLATFORM: &str = "data-platform";
pub const EXPANDED_CLASS: &str = "expanded";
pub const ACTIVE_CLASS: &str = "active";

// Notifications
pub const NOTIFICATION_SHOW_CLASS: &str = "show";
pub const NOTIFICATION_CLOSE_SELECTOR: &str = ".notification-close";

// Text effects
pub const ANIMATE_TEXT_SELECTOR: &str = ".animate-text";
// word-split text keeps its spans, so it never glitches
pub const GLITCH_TARGET_SELECTOR: &str = ".glitch-text:not(.animate-text)";
pub const PULSE_SELECTOR: &str = ".music-btn";
pub const PULSE_CLASS: &str = "pulse";
