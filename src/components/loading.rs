//! Loading Screens
//!
//! The branded splash shown behind the boot gate, plus the placeholders
//! sections render while their data is in flight.

use leptos::*;

/// Full-screen splash shown while the page boots.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-dark-900 flex items-center justify-center z-50">
            <div class="text-center">
                <div class="w-16 h-16 mx-auto mb-6 border-4 border-primary-500 border-t-transparent rounded-full animate-spin" />
                <h2 class="text-2xl font-bold gradient-text mb-2">"B.Goutham"</h2>
                <p class="text-dark-400 text-sm">"Loading Portfolio..."</p>
            </div>
        </div>
    }
}

/// Centered spinner with a caption, used by profile-backed sections.
#[component]
pub fn SectionSpinner(#[prop(default = "Loading...")] caption: &'static str) -> impl IntoView {
    view! {
        <div class="py-20 text-center">
            <div class="w-16 h-16 mx-auto mb-4 border-4 border-primary-500 border-t-transparent rounded-full animate-spin" />
            <p class="text-dark-400">{caption}</p>
        </div>
    }
}

/// Skeleton grid shown while a card section's fetch is in flight.
#[component]
pub fn CardGridSkeleton(#[prop(default = 6)] count: usize) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 animate-pulse">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="bg-white/5 border border-white/10 rounded-xl p-6">
                            <div class="h-5 bg-white/10 rounded w-1/2 mb-4" />
                            <div class="h-3 bg-white/10 rounded w-full mb-2" />
                            <div class="h-3 bg-white/10 rounded w-2/3" />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
