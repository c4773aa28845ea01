//! Domain objects extracted from the App struct.
//!
//! - [`PageScroll`] - page scroll position and smooth scroll-into-view

pub mod scroll;

pub use scroll::{PageScroll, Section, SectionAnchors};
