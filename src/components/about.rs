//! About Section
//!
//! Professional summary, study highlights, memberships and contact details.
//! Shares the profile resource with the hero, including its fallback, so a
//! dead backend never leaves this section on a spinner.

use leptos::*;

use crate::api;
use crate::components::loading::SectionSpinner;
use crate::state::models::PersonalInfo;
use crate::state::view::{spawn_loader, ViewState};

#[component]
pub fn About() -> impl IntoView {
    let profile = create_rw_signal(ViewState::<PersonalInfo>::Loading);
    spawn_loader(profile, "personal-info", api::fetch_personal_info(), PersonalInfo::fallback);

    view! {
        <div class="py-20 bg-gradient-to-b from-dark-900 to-dark-800">
            <div class="container-custom">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "About " <span class="gradient-text">"Me"</span>
                    </h2>
                    <p class="text-xl text-dark-300 max-w-2xl mx-auto">
                        "Passionate about technology and dedicated to continuous learning"
                    </p>
                </div>

                {move || match profile.get() {
                    ViewState::Loading => {
                        view! { <SectionSpinner caption="Loading about section..." /> }.into_view()
                    }
                    ViewState::Ready(info) | ViewState::Fallback(info) => {
                        view! { <AboutContent info=info /> }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn AboutContent(info: PersonalInfo) -> impl IntoView {
    let memberships = [
        ("ACM Student Member", "Actively engaged in the global computing community"),
        ("IEEE Documentation Team Member", "Contributing to technical documentation"),
        ("Volunteer Coordinator", "Demonstrating leadership in the tech community"),
    ];

    let stats = [
        ("📖", "Years of Study", "2+"),
        ("🎓", "Certifications", "2"),
        ("🤝", "Organizations", "2"),
        ("🏆", "Hackathon Wins", "1"),
    ];

    view! {
        <div class="grid lg:grid-cols-2 gap-16 items-center">
            <div class="space-y-8">
                <div class="space-y-6">
                    <h3 class="text-2xl font-bold text-white">"Professional Summary"</h3>
                    <p class="text-lg text-dark-300 leading-relaxed">{info.summary}</p>

                    <div class="space-y-4">
                        <h4 class="text-xl font-semibold text-primary-400">
                            "Academic Excellence & Certifications"
                        </h4>
                        <p class="text-dark-300 leading-relaxed">
                            "Currently pursuing my BCA degree with focus on practical application \
                             of theoretical concepts. My academic journey is strengthened by \
                             industry-recognized certifications including Oracle OCI AI Foundation \
                             and Cisco Beginner-Level C Programming certificates."
                        </p>
                    </div>

                    <div class="space-y-4">
                        <h4 class="text-xl font-semibold text-accent-400">
                            "Professional Memberships & Leadership"
                        </h4>
                        <div class="space-y-3">
                            {memberships
                                .into_iter()
                                .map(|(role, detail)| {
                                    view! {
                                        <div class="flex items-start space-x-3">
                                            <div class="w-2 h-2 bg-primary-500 rounded-full mt-2 flex-shrink-0" />
                                            <p class="text-dark-300">
                                                <strong>{role}</strong> " - " {detail}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                // Contact details
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 pt-6">
                    <div class="flex items-center space-x-3 p-4 bg-white/5 border border-white/10 rounded-lg">
                        <span class="text-xl">"✉️"</span>
                        <div>
                            <p class="text-sm text-dark-400">"Email"</p>
                            <p class="text-white font-medium">{info.email}</p>
                        </div>
                    </div>
                    <div class="flex items-center space-x-3 p-4 bg-white/5 border border-white/10 rounded-lg">
                        <span class="text-xl">"📍"</span>
                        <div>
                            <p class="text-sm text-dark-400">"Location"</p>
                            <p class="text-white font-medium">{info.location}</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="space-y-8">
                // Stats grid
                <div class="grid grid-cols-2 gap-6">
                    {stats
                        .into_iter()
                        .map(|(icon, label, value)| {
                            view! {
                                <div class="p-6 bg-gradient-to-br from-white/5 to-white/10 border border-white/10 rounded-xl text-center hover:border-primary-500/30 transition-all duration-300">
                                    <div class="text-3xl mb-3">{icon}</div>
                                    <div class="text-3xl font-bold gradient-text mb-2">{value}</div>
                                    <p class="text-sm text-dark-300 font-medium">{label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Vision
                <div class="p-6 bg-gradient-to-r from-primary-500/10 to-accent-500/10 border border-primary-500/20 rounded-xl">
                    <h4 class="text-xl font-semibold text-white mb-4">"Vision & Goals"</h4>
                    <p class="text-dark-300 leading-relaxed">
                        "I am committed to building expertise in cutting-edge technologies while \
                         contributing meaningfully to the tech community. My goal is to leverage \
                         my strong academic foundation, professional network, and practical \
                         experience to create innovative solutions that address real-world \
                         challenges."
                    </p>
                </div>
            </div>
        </div>
    }
}
