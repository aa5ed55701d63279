//! UI Components
//!
//! Leptos components: the fixed navbar, one component per page section, and
//! the shared loading placeholders.

pub mod about;
pub mod achievements;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod loading;
pub mod navbar;
pub mod projects;
pub mod skills;

pub use about::About;
pub use achievements::Achievements;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use loading::LoadingScreen;
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
