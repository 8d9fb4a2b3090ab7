// Element ids, selectors and classes the page markup provides.
// Any of them may be missing; the matching effect then stays inactive.

// Loader
pub const LOADER_ID: &str = "loader";

// Cursor
pub const CURSOR_ID: &str = "cursor";
pub const CURSOR_DOT_SELECTOR: &str = ".cursor__dot";
pub const CURSOR_RING_SELECTOR: &str = ".cursor__ring";
pub const HOVERABLE_SELECTOR: &str = "[data-hover]";

// Navbar
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_LINKS_ID: &str = "navLinks";
pub const NAV_LINK_SELECTOR: &str = ".navbar__link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Hero
pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";
pub const TYPED_ROLE_ID: &str = "typedRole";

// Scroll animations
pub const REVEAL_SELECTOR: &str = "[data-animate]";
pub const STAT_CARD_SELECTOR: &str = ".stat-card";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-card__number";
pub const COUNT_ATTR: &str = "data-count";

// Pointer effects
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const SPOTLIGHT_ID: &str = "contactSpotlight";
pub const CONTACT_SECTION_ID: &str = "contact";
pub const PROJECTS_TRACK_ID: &str = "projectsTrack";

// Footer
pub const YEAR_ID: &str = "year";

// Classes toggled by the effects
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_HOVERING: &str = "hovering";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_MENU_OPEN: &str = "menu-open";
pub const CLASS_VISIBLE: &str = "visible";

// Transitions
pub const TILT_RESET_TRANSITION: &str = "transform 0.5s ease";
pub const MAGNETIC_RESET_TRANSITION: &str = "transform 0.4s ease";

// Easter egg banner
pub const EASTER_EGG_MESSAGE: &str = "🎮 Konami Code Activated! You found the secret!";
pub const EASTER_EGG_STYLE: &str = "position:fixed;top:50%;left:50%;transform:translate(-50%,-50%);\
background:var(--gradient);color:#fff;padding:20px 40px;border-radius:12px;\
font-family:var(--font);font-size:1.1rem;font-weight:600;z-index:99999;\
box-shadow:0 20px 60px rgba(108,92,231,0.5);text-align:center;";
