//! State Management
//!
//! Shared page state, the scroll-position section tracker, and the load
//! lifecycle every data-backed section goes through.

pub mod catalog;
pub mod contact;
pub mod global;
pub mod models;
pub mod scroll;
pub mod view;

pub use global::{provide_portfolio_state, PortfolioState};
pub use scroll::{Section, SectionTracker, Viewport, SECTIONS};
pub use view::{LoadEvent, ViewState};
