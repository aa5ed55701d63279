//! Contact Section
//!
//! Contact channels plus the message form. The form drives the submit state
//! machine in `state::contact`: success swaps the whole form for a
//! confirmation, failure keeps the typed fields and shows the retry copy.

use leptos::*;

use crate::api;
use crate::state::contact::{settle_submission, ContactForm, SubmitStatus};

const CONTACT_CHANNELS: [(&str, &str, &str, Option<&str>); 3] = [
    ("✉️", "Email", "gurugoutham05@gmail.com", Some("mailto:gurugoutham05@gmail.com")),
    ("💼", "LinkedIn", "Connect with me", Some("https://www.linkedin.com/in/b-goutham-251726326")),
    ("📍", "Location", "KL University, India", None),
];

#[component]
pub fn Contact() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let status = create_rw_signal(SubmitStatus::Idle);

    // The form markup is only torn down on the Submitted transition, not on
    // every status change.
    let submitted = create_memo(move |_| status.get() == SubmitStatus::Submitted);

    view! {
        <div class="py-20 bg-gradient-to-b from-dark-900 to-dark-800">
            <div class="container-custom">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "Get In " <span class="gradient-text">"Touch"</span>
                    </h2>
                    <p class="text-xl text-dark-300 max-w-2xl mx-auto">
                        "Let's connect! Whether you want to discuss technology, collaborate on projects, or just say hello"
                    </p>
                </div>

                {move || {
                    if submitted.get() {
                        view! {
                            <SubmittedNotice on_reset=move |_| status.set(SubmitStatus::Idle) />
                        }
                            .into_view()
                    } else {
                        view! {
                            <div class="grid lg:grid-cols-2 gap-16 items-start">
                                <ContactChannels />
                                <MessageForm form=form status=status />
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
fn MessageForm(form: RwSignal<ContactForm>, status: RwSignal<SubmitStatus>) -> impl IntoView {
    let submitting = move || status.with(|current| matches!(current, SubmitStatus::Submitting));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // The button is disabled while submitting, but guard anyway.
        if !status.with(|current| current.can_submit()) {
            return;
        }
        if !form.with(|fields| fields.is_complete()) {
            return;
        }

        let message = form.with(|fields| fields.to_message());
        status.set(SubmitStatus::Submitting);

        spawn_local(async move {
            let outcome = api::submit_contact(&message).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(
                    &format!("Failed to send contact message: {}", e).into(),
                );
            }
            // try_update skips the write when the section is already gone.
            if let Some(next) = form.try_update(|fields| settle_submission(fields, outcome)) {
                status.set(next);
            }
        });
    };

    view! {
        <div class="p-8 bg-gradient-to-br from-white/5 to-white/10 border border-white/10 rounded-2xl">
            <h3 class="text-2xl font-bold text-white mb-6">"Send a Message"</h3>

            <form on:submit=on_submit class="space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <label for="name" class="block text-sm font-medium text-white mb-2">
                            "Full Name *"
                        </label>
                        <input
                            type="text"
                            id="name"
                            required=true
                            placeholder="Your full name"
                            prop:value=move || form.with(|fields| fields.name.clone())
                            on:input=move |ev| form.update(|fields| fields.name = event_target_value(&ev))
                            class="w-full px-4 py-3 bg-white/5 border border-white/10 rounded-lg text-white placeholder-dark-400 focus:border-primary-500 focus:outline-none transition-all duration-300"
                        />
                    </div>
                    <div>
                        <label for="email" class="block text-sm font-medium text-white mb-2">
                            "Email Address *"
                        </label>
                        <input
                            type="email"
                            id="email"
                            required=true
                            placeholder="your.email@example.com"
                            prop:value=move || form.with(|fields| fields.email.clone())
                            on:input=move |ev| form.update(|fields| fields.email = event_target_value(&ev))
                            class="w-full px-4 py-3 bg-white/5 border border-white/10 rounded-lg text-white placeholder-dark-400 focus:border-primary-500 focus:outline-none transition-all duration-300"
                        />
                    </div>
                </div>

                <div>
                    <label for="subject" class="block text-sm font-medium text-white mb-2">
                        "Subject *"
                    </label>
                    <input
                        type="text"
                        id="subject"
                        required=true
                        placeholder="What's this about?"
                        prop:value=move || form.with(|fields| fields.subject.clone())
                        on:input=move |ev| form.update(|fields| fields.subject = event_target_value(&ev))
                        class="w-full px-4 py-3 bg-white/5 border border-white/10 rounded-lg text-white placeholder-dark-400 focus:border-primary-500 focus:outline-none transition-all duration-300"
                    />
                </div>

                <div>
                    <label for="message" class="block text-sm font-medium text-white mb-2">
                        "Message *"
                    </label>
                    <textarea
                        id="message"
                        rows=6
                        required=true
                        placeholder="Tell me about your project, idea, or just say hello!"
                        prop:value=move || form.with(|fields| fields.message.clone())
                        on:input=move |ev| form.update(|fields| fields.message = event_target_value(&ev))
                        class="w-full px-4 py-3 bg-white/5 border border-white/10 rounded-lg text-white placeholder-dark-400 focus:border-primary-500 focus:outline-none transition-all duration-300 resize-none"
                    ></textarea>
                </div>

                {move || match status.get() {
                    SubmitStatus::Error(message) => Some(view! {
                        <div class="p-3 bg-red-500/10 border border-red-500/20 rounded-lg">
                            <p class="text-red-400 text-sm">{message}</p>
                        </div>
                    }),
                    _ => None,
                }}

                <button
                    type="submit"
                    disabled=submitting
                    class="w-full py-4 px-6 bg-gradient-to-r from-primary-600 to-primary-500 hover:shadow-lg hover:shadow-primary-500/25 disabled:opacity-60 disabled:cursor-not-allowed rounded-lg font-semibold text-white transition-all duration-300"
                >
                    {move || if submitting() { "Sending Message..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn ContactChannels() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h3 class="text-2xl font-bold text-white mb-6">"Let's Start a Conversation"</h3>
                <p class="text-dark-300 leading-relaxed mb-8">
                    "I'm always excited to discuss new opportunities, share ideas about \
                     technology, or collaborate on interesting projects. Don't hesitate to \
                     reach out!"
                </p>
            </div>

            <div class="space-y-4">
                {CONTACT_CHANNELS
                    .into_iter()
                    .map(|(icon, label, value, href)| {
                        view! {
                            <div class="flex items-center space-x-4 p-4 bg-white/5 border border-white/10 rounded-lg hover:border-primary-500/30 transition-all duration-300">
                                <div class="w-12 h-12 bg-white/5 border border-white/10 rounded-lg flex items-center justify-center text-xl flex-shrink-0">
                                    {icon}
                                </div>
                                <div class="flex-1">
                                    <h4 class="text-white font-semibold">{label}</h4>
                                    {match href {
                                        Some(href) => view! {
                                            <a
                                                href=href
                                                class="text-primary-400 hover:text-primary-300 transition-colors"
                                            >
                                                {value}
                                            </a>
                                        }
                                            .into_view(),
                                        None => view! { <p class="text-dark-300">{value}</p> }.into_view(),
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="p-6 bg-gradient-to-r from-primary-500/10 to-accent-500/10 border border-primary-500/20 rounded-xl">
                <h4 class="text-lg font-semibold text-white mb-2">"Quick Response Promise"</h4>
                <p class="text-dark-300 text-sm">
                    "I typically respond to messages within 24 hours. Looking forward to \
                     hearing from you!"
                </p>
            </div>
        </div>
    }
}

#[component]
fn SubmittedNotice(on_reset: impl Fn(web_sys::MouseEvent) + 'static) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto text-center p-8 bg-gradient-to-r from-green-500/10 to-teal-500/10 border border-green-500/20 rounded-2xl">
            <div class="w-20 h-20 bg-gradient-to-r from-green-500 to-teal-500 rounded-full flex items-center justify-center mx-auto mb-6 text-3xl text-white">
                "✓"
            </div>
            <h3 class="text-2xl font-bold text-white mb-4">"Message Sent!"</h3>
            <p class="text-dark-300 mb-6">
                "Thank you for reaching out! I'll get back to you as soon as possible."
            </p>
            <button
                on:click=on_reset
                class="px-6 py-3 bg-gradient-to-r from-primary-600 to-primary-500 text-white font-semibold rounded-lg transition-all duration-300"
            >
                "Send Another Message"
            </button>
        </div>
    }
}
