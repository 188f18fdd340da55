//! Browser-independent core of the club landing site.
//!
//! Every animation and page widget is an owned state machine here; the wasm
//! front-end only forwards DOM events and timer ticks into these types and
//! writes their results back to the page.

pub mod carousel;
pub mod constants;
pub mod contact;
pub mod event_details;
pub mod gallery;
pub mod info_cards;
pub mod layout;
pub mod menu;
pub mod particles;
pub mod preloader;
pub mod reveal;
pub mod timer;

pub use carousel::{track_transform, CardCarousel, CarouselConfig, Layout, Mode};
pub use constants::*;
pub use contact::ContactSubmission;
pub use event_details::{EventCatalog, EventContent, EventDetails, NOT_FOUND_TITLE};
pub use gallery::GalleryScroll;
pub use info_cards::InfoCardKind;
pub use layout::{parse_css_px, CardMetrics, LayoutError};
pub use menu::NavMenu;
pub use particles::{Particle, ParticleConfig, ParticleField, Surface};
pub use preloader::{PreloadSignal, Preloader, PreloaderState};
pub use reveal::ScrollReveal;
pub use timer::TimerSlot;
