//! Skills Section
//!
//! Skill cards with proficiency bars, filterable by category. The category
//! chips and the visible cards are both derived from the fetched collection;
//! the collection itself is never mutated by filtering.

use leptos::*;

use crate::api;
use crate::components::loading::CardGridSkeleton;
use crate::state::models::{Skill, SkillLevel};
use crate::state::view::{spawn_loader, ViewState};

#[component]
pub fn Skills() -> impl IntoView {
    let skills = create_rw_signal(ViewState::<Vec<Skill>>::Loading);
    spawn_loader(skills, "skills", api::fetch_skills(), Vec::new);

    let (active_category, set_active_category) = create_signal("All".to_string());

    // "All" plus the distinct categories in first-seen order.
    let categories = create_memo(move |_| {
        let mut categories = vec!["All".to_string()];
        skills.with(|state| {
            if let Some(entries) = state.data() {
                for skill in entries {
                    if !categories.contains(&skill.category) {
                        categories.push(skill.category.clone());
                    }
                }
            }
        });
        categories
    });

    let filtered = create_memo(move |_| {
        let category = active_category.get();
        skills.with(|state| {
            state
                .data()
                .map(|entries| {
                    entries
                        .iter()
                        .filter(|skill| category == "All" || skill.category == category)
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    view! {
        <div class="py-20 bg-dark-900">
            <div class="container-custom">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "Skills & " <span class="gradient-text">"Expertise"</span>
                    </h2>
                    <p class="text-xl text-dark-300 max-w-2xl mx-auto">
                        "Technical competencies and soft skills developed through academics, certifications, and hands-on experience"
                    </p>
                </div>

                // Category filter chips
                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    {move || {
                        let selected = active_category.get();
                        categories
                            .get()
                            .into_iter()
                            .map(|category| {
                                let is_active = category == selected;
                                let select = {
                                    let category = category.clone();
                                    move |_| set_active_category.set(category.clone())
                                };
                                view! {
                                    <button
                                        on:click=select
                                        class=if is_active {
                                            "px-6 py-3 rounded-lg font-medium transition-all duration-300 bg-gradient-to-r from-primary-500 to-accent-500 text-white shadow-lg"
                                        } else {
                                            "px-6 py-3 rounded-lg font-medium transition-all duration-300 bg-white/5 border border-white/10 text-dark-300 hover:text-white hover:border-primary-500/50"
                                        }
                                    >
                                        {category}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                {move || {
                    if skills.with(|state| state.is_loading()) {
                        view! { <CardGridSkeleton /> }.into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {filtered
                                    .get()
                                    .into_iter()
                                    .map(|skill| view! { <SkillCard skill=skill /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    let level = SkillLevel::parse(&skill.level);
    let percent = level.percent();
    let gradient = level.gradient_class();
    let icon = category_icon(&skill.category);
    let Skill { name, level: level_label, category } = skill;

    view! {
        <div class="p-6 bg-gradient-to-br from-white/5 to-white/10 border border-white/10 rounded-xl hover:border-primary-500/30 transition-all duration-300">
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center space-x-3">
                    <div class="p-2 bg-gradient-to-r from-primary-500/20 to-accent-500/20 rounded-lg text-xl">
                        {icon}
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-white">{name}</h3>
                        <p class="text-sm text-dark-400">{category.clone()}</p>
                    </div>
                </div>
                <span class=format!(
                    "px-2 py-1 rounded-full text-xs font-medium bg-gradient-to-r {} text-white",
                    gradient,
                )>{level_label}</span>
            </div>

            <div class="w-full bg-dark-700 rounded-full h-2 mb-2">
                <div
                    class=format!("h-2 rounded-full bg-gradient-to-r {}", gradient)
                    style=format!("width: {}%", percent)
                />
            </div>
            <div class="flex justify-between text-xs text-dark-400">
                <span>{category}</span>
                <span>{format!("{}%", percent)}</span>
            </div>
        </div>
    }
}

/// Emoji glyph for a skill category.
fn category_icon(category: &str) -> &'static str {
    match category {
        "Programming" => "💻",
        "Web Development" => "🌐",
        "Database" => "🗄️",
        "Networking" => "🔌",
        "Cloud" => "☁️",
        "AI/ML" => "🤖",
        "Soft Skills" => "🤝",
        "Communication" => "📝",
        "Core" => "📈",
        _ => "⚡",
    }
}
