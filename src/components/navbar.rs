//! Navigation Bar
//!
//! Fixed header with the active-section highlight, smooth-scroll links and
//! a mobile menu. The backdrop solidifies once the page is scrolled past
//! the threshold.

use leptos::*;

use crate::state::global::PortfolioState;
use crate::state::scroll::{
    scroll_to_section, DomViewport, ScrollListener, Viewport, NAV_BACKDROP_OFFSET, SECTIONS,
};

#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_context::<PortfolioState>().expect("PortfolioState not found");
    let active = state.active_section;

    let (menu_open, set_menu_open) = create_signal(false);
    let (scrolled, set_scrolled) = create_signal(false);

    // Separate listener from the section tracker: this one only drives the
    // backdrop style.
    let listener = ScrollListener::attach(move || {
        set_scrolled.set(DomViewport.scroll_offset() > NAV_BACKDROP_OFFSET);
    });
    on_cleanup(move || drop(listener));

    let navigate = move |id: &'static str| {
        scroll_to_section(id);
        set_menu_open.set(false);
    };

    view! {
        <nav class=move || {
            let base = "fixed top-0 left-0 right-0 z-40 transition-all duration-300";
            if scrolled.get() {
                format!("{} bg-dark-900/90 backdrop-blur-md border-b border-white/10", base)
            } else {
                format!("{} bg-transparent", base)
            }
        }>
            <div class="container-custom">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <div class="flex items-center space-x-2">
                        <div class="w-10 h-10 bg-gradient-to-r from-primary-500 to-accent-500 rounded-lg flex items-center justify-center">
                            <span class="text-white font-bold text-lg">"BG"</span>
                        </div>
                        <div class="hidden sm:block">
                            <h1 class="text-xl font-bold gradient-text">"B.Goutham"</h1>
                            <p class="text-xs text-dark-400">"Technology Enthusiast"</p>
                        </div>
                    </div>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-8">
                        {SECTIONS
                            .iter()
                            .map(|section| {
                                let id = section.id;
                                view! {
                                    <button
                                        on:click=move |_| navigate(id)
                                        class=move || nav_link_class(active.get() == id, false)
                                    >
                                        <span class="text-base">{section_icon(id)}</span>
                                        <span class="text-sm font-medium">{section.label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Mobile menu toggle
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="md:hidden p-2 rounded-lg bg-white/5 border border-white/10 text-white"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>

        // Mobile menu panel and backdrop overlay
        {move || {
            if menu_open.get() {
                view! {
                    <div class="fixed top-16 right-0 bottom-0 w-80 bg-dark-800/95 backdrop-blur-md border-l border-white/10 z-30 md:hidden">
                        <div class="p-6 space-y-4">
                            {SECTIONS
                                .iter()
                                .map(|section| {
                                    let id = section.id;
                                    view! {
                                        <button
                                            on:click=move |_| navigate(id)
                                            class=move || nav_link_class(active.get() == id, true)
                                        >
                                            <span class="text-lg">{section_icon(id)}</span>
                                            <span class="font-medium">{section.label}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}

                            <div class="pt-6 border-t border-white/10">
                                <p class="text-dark-400 text-sm text-center">
                                    "Let's build something amazing together"
                                </p>
                            </div>
                        </div>
                    </div>
                    <div
                        on:click=move |_| set_menu_open.set(false)
                        class="fixed inset-0 bg-black/50 backdrop-blur-sm z-20 md:hidden"
                    />
                }
                    .into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

/// Link styling shared by the desktop row and the mobile panel.
fn nav_link_class(is_active: bool, full_width: bool) -> String {
    let base = if full_width {
        "w-full flex items-center space-x-3 px-4 py-3 rounded-lg transition-all duration-300"
    } else {
        "flex items-center space-x-2 px-3 py-2 rounded-lg transition-all duration-300"
    };

    if is_active {
        format!("{} bg-primary-500/20 text-primary-400 border border-primary-500/30", base)
    } else {
        format!("{} text-dark-300 hover:text-white hover:bg-white/5", base)
    }
}

/// Emoji glyph for a section link.
fn section_icon(id: &str) -> &'static str {
    match id {
        "home" => "🏠",
        "about" => "👤",
        "skills" => "💻",
        "achievements" => "🏆",
        "projects" => "📁",
        "contact" => "✉️",
        _ => "•",
    }
}
