//! Footer
//!
//! Brand block, quick links, current status and the back-to-top control.

use leptos::*;

use crate::state::scroll::{scroll_to_section, scroll_to_top, SECTIONS};

/// Social profiles in render order: glyph, href, hover color. The GitHub
/// href is a placeholder until a public profile exists.
const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("💼", "https://www.linkedin.com/in/b-goutham-251726326", "hover:text-blue-400"),
    ("✉️", "mailto:gurugoutham05@gmail.com", "hover:text-green-400"),
    ("🐙", "#", "hover:text-purple-400"),
];

/// External links open a new tab; mailto and in-page anchors stay put.
fn link_target(href: &str) -> Option<&'static str> {
    href.starts_with("http").then_some("_blank")
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-dark-900 border-t border-white/10">
            <div class="container-custom py-16">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    // Brand
                    <div class="lg:col-span-2 space-y-6">
                        <div class="flex items-center space-x-3">
                            <div class="w-12 h-12 bg-gradient-to-r from-primary-500 to-accent-500 rounded-lg flex items-center justify-center">
                                <span class="text-white font-bold text-lg">"BG"</span>
                            </div>
                            <div>
                                <h3 class="text-2xl font-bold gradient-text">"B.Goutham"</h3>
                                <p class="text-dark-400 text-sm">"Technology Enthusiast & Student Developer"</p>
                            </div>
                        </div>
                        <p class="text-dark-300 leading-relaxed max-w-md">
                            "Passionate BCA student at KL University, dedicated to learning \
                             emerging technologies and building innovative solutions. Always \
                             excited to connect with fellow tech enthusiasts!"
                        </p>
                        <div class="flex items-center space-x-4">
                            <span class="text-dark-400 text-sm">"Connect with me:"</span>
                            <div class="flex space-x-3">
                                {SOCIAL_LINKS
                                    .into_iter()
                                    .map(|(icon, href, hover)| {
                                        view! {
                                            <a
                                                href=href
                                                target=link_target(href)
                                                rel=link_target(href).map(|_| "noopener noreferrer")
                                                class=format!(
                                                    "p-2 bg-white/5 border border-white/10 rounded-lg text-dark-400 {} transition-all duration-300",
                                                    hover,
                                                )
                                            >
                                                {icon}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    // Quick links
                    <div class="space-y-6">
                        <h4 class="text-lg font-semibold text-white">"Quick Links"</h4>
                        <ul class="space-y-3">
                            {SECTIONS
                                .iter()
                                .skip(1)
                                .map(|section| {
                                    let id = section.id;
                                    view! {
                                        <li>
                                            <button
                                                on:click=move |_| scroll_to_section(id)
                                                class="text-dark-300 hover:text-primary-400 transition-all duration-300 text-sm flex items-center space-x-2"
                                            >
                                                <span class="w-1 h-1 bg-primary-500 rounded-full" />
                                                <span>{section.label}</span>
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    // Status
                    <div class="space-y-6">
                        <h4 class="text-lg font-semibold text-white">"Current Status"</h4>
                        <div class="space-y-4">
                            <div class="flex items-center space-x-3">
                                <div class="w-3 h-3 bg-green-500 rounded-full animate-pulse" />
                                <div>
                                    <p class="text-white text-sm font-medium">"Available for Projects"</p>
                                    <p class="text-dark-400 text-xs">"Open to collaboration"</p>
                                </div>
                            </div>
                            <div class="flex items-center space-x-3">
                                <span class="text-primary-400">"💻"</span>
                                <div>
                                    <p class="text-white text-sm font-medium">"Currently Learning"</p>
                                    <p class="text-dark-400 text-xs">"Advanced Web Development"</p>
                                </div>
                            </div>
                            <div class="flex items-center space-x-3">
                                <span class="text-accent-400">"⭐"</span>
                                <div>
                                    <p class="text-white text-sm font-medium">"Goal 2025"</p>
                                    <p class="text-dark-400 text-xs">"Full-Stack Proficiency"</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            // Bottom bar
            <div class="border-t border-white/10 py-6">
                <div class="container-custom flex flex-col md:flex-row items-center justify-between space-y-4 md:space-y-0">
                    <p class="text-dark-400 text-sm">
                        "© " {year} " B.Goutham. All rights reserved."
                    </p>
                    <button
                        on:click=move |_| scroll_to_top()
                        class="flex items-center space-x-2 px-4 py-2 bg-gradient-to-r from-primary-500/20 to-accent-500/20 border border-primary-500/30 rounded-lg text-primary-400 hover:text-primary-300 transition-all duration-300"
                    >
                        <span class="text-sm">"Back to top"</span>
                        <span>"↑"</span>
                    </button>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_links_cover_linkedin_mail_and_github() {
        let hrefs: Vec<&str> = SOCIAL_LINKS.iter().map(|(_, href, _)| *href).collect();

        assert_eq!(hrefs.len(), 3);
        assert!(hrefs[0].starts_with("https://www.linkedin.com/"));
        assert!(hrefs[1].starts_with("mailto:"));
        assert_eq!(hrefs[2], "#");
    }

    #[test]
    fn test_only_external_links_open_new_tabs() {
        assert_eq!(
            link_target("https://www.linkedin.com/in/b-goutham-251726326"),
            Some("_blank")
        );
        assert_eq!(link_target("mailto:gurugoutham05@gmail.com"), None);
        assert_eq!(link_target("#"), None);
    }
}
