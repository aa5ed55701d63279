//! App Root Component
//!
//! Owns the boot gate, provides the shared state, installs the section
//! tracker, and lays out the page: fixed navbar over the six-section stack.

use leptos::*;

use crate::components::{
    About, Achievements, Contact, Footer, Hero, LoadingScreen, Navbar, Projects, Skills,
};
use crate::state::global::{provide_portfolio_state, PortfolioState};
use crate::state::scroll::track_active_section;

/// How long the branded splash stays up before the content reveals.
const BOOT_SPLASH_MS: u32 = 1_500;

#[component]
pub fn App() -> impl IntoView {
    provide_portfolio_state();

    let state = use_context::<PortfolioState>().expect("PortfolioState not found");
    track_active_section(state.active_section);

    // Fixed-duration boot gate; the splash always runs its full course.
    let (booting, set_booting) = create_signal(true);
    gloo_timers::callback::Timeout::new(BOOT_SPLASH_MS, move || {
        set_booting.set(false);
    })
    .forget();

    view! {
        {move || {
            if booting.get() {
                view! { <LoadingScreen /> }.into_view()
            } else {
                view! { <Portfolio /> }.into_view()
            }
        }}
    }
}

/// The revealed page. Section wrappers carry the ids the tracker and the
/// smooth-scroll navigation address.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <div class="bg-dark-900 text-white min-h-screen">
            <Navbar />
            <main>
                <section id="home">
                    <Hero />
                </section>
                <section id="about">
                    <About />
                </section>
                <section id="skills">
                    <Skills />
                </section>
                <section id="achievements">
                    <Achievements />
                </section>
                <section id="projects">
                    <Projects />
                </section>
                <section id="contact">
                    <Contact />
                </section>
            </main>
            <Footer />
        </div>
    }
}
