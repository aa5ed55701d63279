//! Hero Section
//!
//! Landing section with the visitor's first impression: name, title,
//! summary and the main calls to action. Backed by the profile fetch, with
//! the static fallback standing in when the backend is unreachable.

use leptos::*;

use crate::api;
use crate::components::loading::SectionSpinner;
use crate::state::models::PersonalInfo;
use crate::state::scroll::scroll_to_section;
use crate::state::view::{spawn_loader, ViewState};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = create_rw_signal(ViewState::<PersonalInfo>::Loading);
    spawn_loader(profile, "personal-info", api::fetch_personal_info(), PersonalInfo::fallback);

    view! {
        <div class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-dark-900 via-dark-800 to-dark-900">
            {move || match profile.get() {
                ViewState::Loading => view! { <SectionSpinner /> }.into_view(),
                ViewState::Ready(info) | ViewState::Fallback(info) => {
                    view! { <HeroContent info=info /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn HeroContent(info: PersonalInfo) -> impl IntoView {
    let PersonalInfo { name, title, summary, email, linkedin, .. } = info;
    let mailto = format!("mailto:{}", email);

    view! {
        <div class="container-custom relative z-10 py-24">
            <div class="grid lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-8">
                    <div class="space-y-4">
                        <p class="text-primary-400 font-medium text-lg tracking-wide">"Hello, I'm"</p>
                        <h1 class="text-5xl md:text-7xl font-bold leading-tight gradient-text">{name}</h1>
                        <p class="text-xl md:text-2xl text-dark-300 font-medium">{title}</p>
                    </div>

                    <p class="text-lg text-dark-300 leading-relaxed max-w-2xl">{summary}</p>

                    // Calls to action
                    <div class="flex flex-col sm:flex-row gap-4">
                        <button
                            on:click=move |_| scroll_to_section("projects")
                            class="px-8 py-4 bg-gradient-to-r from-primary-600 to-primary-500 text-white font-semibold rounded-lg shadow-lg hover:shadow-primary-500/25 transition-all duration-300"
                        >
                            "View Projects"
                        </button>
                        <button
                            on:click=move |_| scroll_to_section("contact")
                            class="px-8 py-4 border-2 border-primary-500 text-primary-400 font-semibold rounded-lg hover:bg-primary-500 hover:text-white transition-all duration-300"
                        >
                            "Get In Touch"
                        </button>
                    </div>

                    // Social links
                    <div class="flex items-center space-x-6 pt-4">
                        <p class="text-dark-400 text-sm">"Connect with me:"</p>
                        <div class="flex space-x-4">
                            <a
                                href=linkedin
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-3 bg-white/5 border border-white/10 rounded-lg hover:bg-primary-500/20 hover:border-primary-500/30 transition-all duration-300"
                            >
                                "💼"
                            </a>
                            <a
                                href=mailto
                                class="p-3 bg-white/5 border border-white/10 rounded-lg hover:bg-accent-500/20 hover:border-accent-500/30 transition-all duration-300"
                            >
                                "✉️"
                            </a>
                            // Placeholder until a public GitHub profile exists
                            <a
                                href="#"
                                class="p-3 bg-white/5 border border-white/10 rounded-lg hover:bg-dark-500/20 hover:border-dark-500/30 transition-all duration-300"
                            >
                                "🐙"
                            </a>
                        </div>
                    </div>
                </div>

                // Decorative badge column
                <div class="relative hidden lg:flex items-center justify-center">
                    <div class="relative w-80 h-80 flex items-center justify-center">
                        <div class="absolute inset-0 border border-primary-500/20 rounded-full" />
                        <div class="absolute inset-4 border border-accent-500/20 rounded-full" />
                        <div class="absolute inset-8 border border-primary-400/30 rounded-full" />
                        <div class="text-center space-y-4">
                            <div class="w-32 h-32 mx-auto bg-gradient-to-r from-primary-500 to-accent-500 rounded-full flex items-center justify-center text-4xl font-bold text-white shadow-2xl">
                                "BG"
                            </div>
                            <div class="space-y-2">
                                <p class="text-primary-400 font-semibold">"Student Developer"</p>
                                <p class="text-dark-400 text-sm">"Building the Future"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            // Scroll hint
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center space-y-2 text-dark-400">
                <span class="text-sm">"Scroll to explore"</span>
                <div class="w-6 h-10 border-2 border-dark-400 rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-primary-500 rounded-full mt-2 animate-bounce" />
                </div>
            </div>
        </div>
    }
}
