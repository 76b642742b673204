//! Page sections, in render order.

mod about;
mod contact;
mod education;
pub mod header;
mod hero;
mod projects;
mod skills;

pub use about::{About, HowIWork};
pub use contact::{BackToTop, Contact, Footer};
pub use education::{Achievements, Education};
pub use header::SiteHeader;
pub use hero::{Hero, ProfileOverlay};
pub use projects::Projects;
pub use skills::Skills;
