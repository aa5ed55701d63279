//! Projects Section
//!
//! Remotely managed projects plus the built-in catalog, rendered as one
//! list. A failed fetch falls back to an empty remote list, so the catalog
//! entries always survive a dead backend.

use leptos::*;

use crate::api;
use crate::components::loading::CardGridSkeleton;
use crate::state::catalog::combined_projects;
use crate::state::models::{Project, ProjectStatus};
use crate::state::scroll::scroll_to_section;
use crate::state::view::{spawn_loader, ViewState};

#[component]
pub fn Projects() -> impl IntoView {
    let projects = create_rw_signal(ViewState::<Vec<Project>>::Loading);
    spawn_loader(projects, "projects", api::fetch_projects(), Vec::new);

    // Fetched items first, catalog second, id collisions kept.
    let displayed = create_memo(move |_| {
        projects.with(|state| combined_projects(state.data().map(Vec::as_slice).unwrap_or(&[])))
    });

    view! {
        <div class="py-20 bg-dark-900">
            <div class="container-custom">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "My " <span class="gradient-text">"Projects"</span>
                    </h2>
                    <p class="text-xl text-dark-300 max-w-2xl mx-auto">
                        "A showcase of academic work, competition wins, and collaborative projects"
                    </p>
                </div>

                {move || {
                    if projects.with(|state| state.is_loading()) {
                        view! { <CardGridSkeleton count=3 /> }.into_view()
                    } else {
                        let list = displayed.get();
                        if list.is_empty() {
                            view! { <EmptyProjects /> }.into_view()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                                    {list
                                        .into_iter()
                                        .map(|project| view! { <ProjectCard project=project /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_view()
                        }
                    }
                }}

                // Collaboration call to action
                <div class="mt-16 text-center p-8 bg-gradient-to-r from-primary-500/10 to-accent-500/10 border border-primary-500/20 rounded-2xl">
                    <h3 class="text-2xl font-bold text-white mb-4">"Interested in Collaboration?"</h3>
                    <p class="text-dark-300 max-w-2xl mx-auto mb-6">
                        "I'm always open to working on interesting projects and learning from \
                         experienced developers. Whether it's a hackathon, an open-source \
                         contribution, or an innovative startup idea, let's connect!"
                    </p>
                    <button
                        on:click=move |_| scroll_to_section("contact")
                        class="px-8 py-3 bg-gradient-to-r from-primary-600 to-primary-500 text-white font-semibold rounded-lg shadow-lg hover:shadow-primary-500/25 transition-all duration-300"
                    >
                        "Let's Connect"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let status = ProjectStatus::parse(&project.status);
    let badge = status.badge_class();

    view! {
        <div class="bg-gradient-to-br from-white/5 to-white/10 border border-white/10 rounded-xl p-6 hover:border-primary-500/30 transition-all duration-300">
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center space-x-3">
                    <div class="w-12 h-12 bg-gradient-to-r from-primary-500 to-accent-500 rounded-lg flex items-center justify-center text-xl">
                        "📁"
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-white mb-1">{project.title}</h3>
                        <div class="flex items-center space-x-2">
                            <span class=format!("px-2 py-1 rounded-full text-xs font-medium {}", badge)>
                                {project.status}
                            </span>
                            <span class="px-2 py-1 bg-primary-500/20 text-primary-400 rounded-full text-xs">
                                {project.category}
                            </span>
                        </div>
                    </div>
                </div>
                {(status == ProjectStatus::Winner)
                    .then(|| view! { <span class="text-xl">"⭐"</span> })}
            </div>

            <p class="text-dark-300 text-sm mb-4 leading-relaxed">{project.description}</p>

            {project
                .impact
                .map(|impact| {
                    view! {
                        <div class="mb-4 p-3 bg-accent-500/10 border border-accent-500/20 rounded-lg">
                            <p class="text-accent-400 text-sm font-medium">"Impact:"</p>
                            <p class="text-dark-300 text-xs">{impact}</p>
                        </div>
                    }
                })}

            <div class="mb-6">
                <p class="text-primary-400 text-sm font-medium mb-2">"Technologies & Skills:"</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-primary-500/20 text-primary-300 rounded text-xs border border-primary-500/30">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="flex space-x-3 pt-4 border-t border-white/10">
                {project
                    .github_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2 bg-white/5 border border-white/10 rounded-lg hover:border-primary-500/50 transition-colors text-sm text-primary-400"
                            >
                                "Source"
                            </a>
                        }
                    })}
                {project
                    .demo_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2 bg-white/5 border border-white/10 rounded-lg hover:border-accent-500/50 transition-colors text-sm text-accent-400"
                            >
                                "Live Demo"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn EmptyProjects() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <div class="text-6xl mb-4">"📁"</div>
            <h3 class="text-xl font-semibold text-white mb-2">"Projects Coming Soon"</h3>
            <p class="text-dark-400">
                "I'm currently working on exciting projects that will be showcased here."
            </p>
        </div>
    }
}
