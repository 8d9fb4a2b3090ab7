// Shared tuning constants for the portfolio page effects.

// Loader
pub const LOADER_DELAY_MS: i32 = 2800;

// Particle field
pub const PARTICLE_COUNT: usize = 80;
pub const CONNECTION_DISTANCE: f32 = 120.0; // px; pairs closer than this get a line
pub const CONNECTION_MAX_OPACITY: f32 = 0.15;
pub const CONNECTION_LINE_WIDTH: f64 = 0.5;
pub const POINTER_REPEL_RADIUS: f32 = 100.0; // px
pub const POINTER_REPEL_STRENGTH: f32 = 0.01; // fraction of offset applied per tick
pub const PARTICLE_SPEED_SPAN: f32 = 0.5; // velocity components in [-span/2, span/2)
pub const PARTICLE_RADIUS_MIN: f32 = 0.5;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;
pub const PARTICLE_RGB: [u8; 3] = [108, 92, 231];

// Typed text
pub const TYPE_CHAR_MS: u32 = 80;
pub const DELETE_CHAR_MS: u32 = 40;
pub const PAUSE_FULL_MS: u32 = 2000;
pub const PAUSE_EMPTY_MS: u32 = 400;
pub const DEFAULT_ROLES: [&str; 5] = [
    "Backend Developer",
    "Android Developer",
    "API Architect",
    "System Designer",
    "Problem Solver",
];

// Scroll-derived state
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 50.0; // px
pub const NAV_HIGHLIGHT_OFFSET: f64 = 120.0; // px added to scrollY before hit-testing sections
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.87;
pub const COUNTER_VIEWPORT_FRACTION: f64 = 0.9;
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// Pointer effects
pub const TILT_MAX_DEG: f64 = 8.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_LIFT_PX: f64 = 10.0;
pub const MAGNETIC_PULL: f64 = 0.3;
pub const DRAG_SCROLL_MULTIPLIER: f64 = 2.0;
pub const CURSOR_RING_FOLLOW: f32 = 0.15; // fraction of the gap closed per frame

// Easter egg
pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];
pub const EASTER_EGG_DURATION_MS: i32 = 3000;
pub const EASTER_EGG_FILTER: &str = "hue-rotate(90deg)";
