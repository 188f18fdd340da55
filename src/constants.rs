// Element ids, selectors and class names the page markup is expected to use.
// Particle background
pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";

// Navigation
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";

// Team carousel
pub const TEAM_CONTAINER_SELECTOR: &str = ".team-container";
pub const CARD_TRACK_SELECTOR: &str = ".card-track";
pub const TEAM_CARD_SELECTOR: &str = ".card";

// Preloader
pub const PRELOADER_SELECTOR: &str = ".preloader";
pub const PRELOADER_VIDEO_ID: &str = "preloader-video";

// Scroll reveal
pub const REVEAL_SECTIONS_SELECTOR: &str = "#events, #Projects";
pub const REVEAL_TITLE_SELECTOR: &str = ".events-title";
pub const REVEAL_CARDS_SELECTOR: &str = ".event-card, .project-card";
pub const REVEALED_SELECTOR: &str = "#events .reveal, #Projects .reveal";

// Contact form
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const CONTACT_FIELD_IDS: [&str; 4] = ["firstName", "lastName", "email", "message"];

// Event details page
pub const EVENT_QUERY_PARAM: &str = "event";
pub const EVENT_TITLE_ID: &str = "event-title";
pub const EVENT_DESCRIPTION_ID: &str = "event-description";
pub const EVENT_DOWNLOAD_SELECTOR: &str = ".download-button";
pub const EMBEDDED_EVENT_ATTR: &str = "data-event";
pub const EMBEDDED_TITLE_ATTR: &str = "data-title";
pub const EMBEDDED_LINK_ATTR: &str = "data-link";

// Image gallery (event page)
pub const IMAGE_GALLERY_SELECTOR: &str = ".image-gallery";

// Info cards
pub const INFO_CARD_SELECTOR: &str = ".error, .info, .success, .warning";
pub const INFO_TEXT_SELECTOR: &str = ".text[data-hover-text]"; // anywhere inside the card
pub const HOVER_TEXT_ATTR: &str = "data-hover-text";

// Class names toggled on elements
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_PRELOAD: &str = "preload";
pub const CLASS_FADE_OUT: &str = "fade-out";
pub const CLASS_REVEAL: &str = "reveal";
