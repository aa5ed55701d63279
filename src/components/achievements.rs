//! Achievements Section
//!
//! Achievements and certifications are fetched together and treated as one
//! view model: the section stays in its loading state until both requests
//! settle, and on any failure both collections fall back to empty.

use leptos::*;

use crate::api;
use crate::components::loading::CardGridSkeleton;
use crate::state::models::{Achievement, Certification};
use crate::state::view::{join_outcomes, spawn_loader, ViewState};

type Recognition = (Vec<Achievement>, Vec<Certification>);

#[component]
pub fn Achievements() -> impl IntoView {
    let recognition = create_rw_signal(ViewState::<Recognition>::Loading);
    spawn_loader(
        recognition,
        "achievements",
        async {
            let (achievements, certifications) =
                futures::join!(api::fetch_achievements(), api::fetch_certifications());
            join_outcomes(achievements, certifications)
        },
        || (Vec::new(), Vec::new()),
    );

    view! {
        <div class="py-20 bg-gradient-to-b from-dark-800 to-dark-900">
            <div class="container-custom">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        <span class="gradient-text">"Achievements"</span> " & Certifications"
                    </h2>
                    <p class="text-xl text-dark-300 max-w-2xl mx-auto">
                        "Recognition and certifications that mark my journey in technology and leadership"
                    </p>
                </div>

                {move || match recognition.get() {
                    ViewState::Loading => view! { <CardGridSkeleton /> }.into_view(),
                    ViewState::Ready((achievements, certifications))
                    | ViewState::Fallback((achievements, certifications)) => {
                        view! {
                            <AchievementGrid achievements=achievements />
                            <CertificationGrid certifications=certifications />
                        }
                            .into_view()
                    }
                }}

                <StatsOverview />
            </div>
        </div>
    }
}

#[component]
fn AchievementGrid(achievements: Vec<Achievement>) -> impl IntoView {
    view! {
        <div class="mb-16">
            <h3 class="text-2xl font-bold text-white mb-8">"🏆 Key Achievements"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {achievements
                    .into_iter()
                    .map(|achievement| {
                        let icon = achievement_icon(&achievement.title);
                        view! {
                            <div class="p-6 bg-gradient-to-br from-white/5 to-white/10 border border-white/10 rounded-xl hover:border-primary-500/30 transition-all duration-300">
                                <div class="flex items-start space-x-4">
                                    <div class="w-12 h-12 bg-gradient-to-r from-primary-500 to-accent-500 rounded-lg flex items-center justify-center text-xl flex-shrink-0">
                                        {icon}
                                    </div>
                                    <div class="flex-1">
                                        <h4 class="text-lg font-semibold text-white mb-2">
                                            {achievement.title}
                                        </h4>
                                        <p class="text-dark-300 text-sm mb-3 leading-relaxed">
                                            {achievement.description}
                                        </p>
                                        <span class="text-xs text-primary-400 font-medium bg-primary-500/20 px-2 py-1 rounded-full">
                                            {achievement.date}
                                        </span>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CertificationGrid(certifications: Vec<Certification>) -> impl IntoView {
    view! {
        <div class="mb-16">
            <h3 class="text-2xl font-bold text-white mb-8">"📜 Professional Certifications"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {certifications
                    .into_iter()
                    .map(|certification| {
                        view! {
                            <div class="p-6 bg-gradient-to-br from-white/5 to-white/10 border border-white/10 rounded-xl hover:border-accent-500/30 transition-all duration-300">
                                <div class="flex items-start justify-between mb-4">
                                    <div class="w-12 h-12 bg-gradient-to-r from-accent-500 to-primary-500 rounded-lg flex items-center justify-center text-xl">
                                        "📜"
                                    </div>
                                    <span class="text-xs text-accent-400 font-medium bg-accent-500/20 px-2 py-1 rounded-full">
                                        {format!("Issued: {}", certification.date)}
                                    </span>
                                </div>
                                <h4 class="text-lg font-semibold text-white mb-1">{certification.name}</h4>
                                <p class="text-primary-400 text-sm font-medium mb-3">{certification.issuer}</p>
                                {certification
                                    .description
                                    .map(|description| {
                                        view! {
                                            <p class="text-dark-300 text-sm leading-relaxed">{description}</p>
                                        }
                                    })}
                                <div class="mt-4 pt-4 border-t border-white/10 flex items-center space-x-2 text-green-400 text-xs">
                                    <span>"✓"</span>
                                    <span>"Verified Certification"</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn StatsOverview() -> impl IntoView {
    let stats = [
        ("🏆", "1", "Hackathon Win"),
        ("📜", "2+", "Certifications"),
        ("👥", "2", "Organizations"),
        ("🎯", "2+", "Years Active"),
    ];

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
            {stats
                .into_iter()
                .map(|(icon, value, label)| {
                    view! {
                        <div class="p-6 bg-gradient-to-br from-white/5 to-white/10 border border-white/10 rounded-xl text-center">
                            <div class="text-3xl mb-3">{icon}</div>
                            <div class="text-3xl font-bold gradient-text mb-2">{value}</div>
                            <p class="text-sm text-dark-300 font-medium">{label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Pick a glyph from achievement title keywords.
fn achievement_icon(title: &str) -> &'static str {
    let title = title.to_lowercase();
    if title.contains("hackathon") {
        "🏆"
    } else if title.contains("acm") {
        "👥"
    } else if title.contains("ieee") {
        "📖"
    } else {
        "🏅"
    }
}
