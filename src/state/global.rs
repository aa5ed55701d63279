//! Shared page state.
//!
//! Reactive state provided to the whole component tree through context. The
//! only value shared across components is the active-section id the navbar
//! highlights; everything else stays local to its section.

use leptos::*;

use super::scroll::SECTIONS;

/// State provided to all components.
#[derive(Clone)]
pub struct PortfolioState {
    /// Id of the section the scroll position currently falls in.
    pub active_section: RwSignal<&'static str>,
}

/// Provide [`PortfolioState`] to the component tree.
pub fn provide_portfolio_state() {
    let state = PortfolioState {
        active_section: create_rw_signal(SECTIONS[0].id),
    };

    provide_context(state);
}
