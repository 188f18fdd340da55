// Shared tuning constants for the animated page widgets.

// Particle background
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
pub const PARTICLE_MAX_RADIUS: f32 = 4.0; // exclusive
pub const PARTICLE_MAX_SPEED: f32 = 0.75; // px per frame, per axis

// Colors chosen to stay visible on both light and dark backgrounds
pub const PARTICLE_PALETTE: [&str; 5] = [
    "rgba(255, 255, 255, 0.7)", // light white
    "rgba(200, 200, 200, 0.5)", // light gray
    "rgba(173, 216, 230, 0.5)", // light blue
    "rgba(255, 223, 186, 0.5)", // light peach
    "rgba(204, 255, 144, 0.5)", // light green
];

// Team card carousel
pub const CAROUSEL_SPEED_PX: f64 = 1.8; // per autoscroll tick
pub const CAROUSEL_TICK_MS: i32 = 20;
pub const WHEEL_MULTIPLIER: f64 = 2.0;
pub const WHEEL_DEBOUNCE_MS: f64 = 150.0;
pub const TOUCH_RELEASE_MS: f64 = 150.0;
pub const MOUSE_DRAG_MULTIPLIER: f64 = 2.0;

// Below this width mouse drag is off and the nav menu collapses
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Preloader
pub const PRELOADER_FALLBACK_MS: i32 = 5000;
pub const PRELOADER_FADE_MS: i32 = 500; // matches the CSS transition

// Image gallery
pub const GALLERY_TICK_MS: i32 = 10;
pub const GALLERY_STEP_PX: f64 = 1.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_RESET_TOP_PX: f64 = 100.0;

// Contact form
pub const CONTACT_ACK_MESSAGE: &str = "Thank you for your message. We will get back to you soon!";
