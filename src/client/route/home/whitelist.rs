use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::FaDiscord,
        fa_solid_icons::{FaCircleCheck, FaCircleExclamation, FaClock},
    },
    Icon,
};

use crate::{
    client::{component::Section, constant::APPLICATIONS_OPEN, model::site::SiteContext},
    model::application::{ApplicationFormState, SubmissionStatus, MINIMUM_AGE},
};

#[cfg(feature = "web")]
use crate::client::api::application::create_application;

#[component]
pub(super) fn WhitelistSection() -> Element {
    let site = use_context::<SiteContext>();

    rsx!(Section {
        id: "whitelist",
        title: "Whitelist Application",
        subtitle: "Apply to join our exclusive roleplay community",
        class: "bg-base-200",
        if APPLICATIONS_OPEN {
            ApplicationForm {}
        } else {
            OpeningSoon { invite_url: site.invite_url() }
        }
    })
}

#[component]
fn OpeningSoon(invite_url: String) -> Element {
    rsx!(div {
        class: "card bg-base-100/50 border border-base-300 p-12 items-center text-center max-w-4xl mx-auto",
        div { class: "text-primary mb-6 animate-pulse", Icon { width: 64, height: 64, icon: FaClock } }
        h3 { class: "text-2xl font-bold mb-4", "Applications Opening Soon" }
        p {
            class: "text-lg text-base-content/70 mb-6",
            "We're currently preparing to launch. Join our Discord to be notified when applications open!"
        }
        a {
            href: invite_url,
            target: "_blank",
            rel: "noopener noreferrer",
            class: "btn btn-primary btn-lg flex gap-2 items-center",
            Icon { width: 20, height: 20, icon: FaDiscord }
            "Join Discord"
        }
    })
}

#[component]
fn ApplicationForm() -> Element {
    let mut state = use_signal(ApplicationFormState::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(payload) = state.write().begin_submit() else {
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            use dioxus_logger::tracing;

            let result = create_application(payload).await;
            if let Err(err) = &result {
                tracing::error!("Failed to submit application: {}", err);
            }
            state.write().finish_submit(result);
        });

        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    let current = state.read().clone();
    let is_submitting = current.is_submitting();
    let form = current.form;

    rsx!(div {
        class: "card bg-base-100/50 border border-base-300 p-8 max-w-4xl mx-auto",
        {match current.status {
            SubmissionStatus::Success => rsx!(
                div {
                    class: "alert alert-success mb-6",
                    Icon { width: 20, height: 20, icon: FaCircleCheck }
                    div {
                        p { class: "font-semibold", "Application Submitted Successfully!" }
                        p { class: "text-sm", "We'll review your application and contact you on Discord soon." }
                    }
                }
            ),
            SubmissionStatus::Error(message) => rsx!(
                div {
                    class: "alert alert-error mb-6",
                    Icon { width: 20, height: 20, icon: FaCircleExclamation }
                    div {
                        p { class: "font-semibold", "Error" }
                        p { class: "text-sm", "{message}" }
                    }
                }
            ),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => rsx!(),
        }}
        form {
            class: "flex flex-col gap-6",
            onsubmit,
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-6",
                TextInput {
                    id: "discord_username",
                    label: "Discord Username *",
                    placeholder: "username#0000",
                    value: form.discord_username,
                    disabled: is_submitting,
                    oninput: move |value| state.write().form.discord_username = value,
                }
                TextInput {
                    id: "in_game_name",
                    label: "In-Game Name *",
                    placeholder: "John Smith",
                    value: form.in_game_name,
                    disabled: is_submitting,
                    oninput: move |value| state.write().form.in_game_name = value,
                }
                div {
                    class: "flex flex-col gap-2",
                    label { r#for: "age", class: "label-text", "Age *" }
                    input {
                        id: "age",
                        name: "age",
                        r#type: "number",
                        min: "{MINIMUM_AGE}",
                        class: "input input-bordered w-full",
                        placeholder: "18",
                        value: "{form.age}",
                        disabled: is_submitting,
                        required: true,
                        oninput: move |e| state.write().form.age = e.value()
                    }
                }
                TextInput {
                    id: "timezone",
                    label: "Timezone *",
                    placeholder: "GMT/BST",
                    value: form.timezone,
                    disabled: is_submitting,
                    oninput: move |value| state.write().form.timezone = value,
                }
            }
            TextArea {
                id: "experience",
                label: "Previous Roleplay Experience *",
                placeholder: "Tell us about your previous roleplay experience...",
                value: form.experience,
                disabled: is_submitting,
                oninput: move |value| state.write().form.experience = value,
            }
            TextArea {
                id: "character_story",
                label: "Character Backstory *",
                placeholder: "Write your character's backstory...",
                value: form.character_story,
                disabled: is_submitting,
                oninput: move |value| state.write().form.character_story = value,
            }
            TextArea {
                id: "why_join",
                label: "Why do you want to join County Lines RP? *",
                placeholder: "Tell us why you want to be part of our community...",
                value: form.why_join,
                disabled: is_submitting,
                oninput: move |value| state.write().form.why_join = value,
            }
            div {
                class: "flex items-start gap-3",
                input {
                    id: "rules_agreed",
                    name: "rules_agreed",
                    r#type: "checkbox",
                    class: "checkbox checkbox-primary mt-1",
                    checked: form.rules_agreed,
                    disabled: is_submitting,
                    required: true,
                    onchange: move |e| state.write().form.rules_agreed = e.checked()
                }
                label {
                    r#for: "rules_agreed",
                    class: "text-sm text-base-content/70",
                    "I have read and agree to follow all server rules and understand that breaking them may result in removal from the server *"
                }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary btn-lg w-full",
                disabled: is_submitting,
                if is_submitting { "Submitting..." } else { "Submit Application" }
            }
        }
    })
}

#[component]
fn TextInput(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: String,
    disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx!(div {
        class: "flex flex-col gap-2",
        label { r#for: id, class: "label-text", {label} }
        input {
            id,
            name: id,
            r#type: "text",
            class: "input input-bordered w-full",
            placeholder,
            value,
            disabled,
            required: true,
            oninput: move |e| oninput.call(e.value())
        }
    })
}

#[component]
fn TextArea(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: String,
    disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx!(div {
        class: "flex flex-col gap-2",
        label { r#for: id, class: "label-text", {label} }
        textarea {
            id,
            name: id,
            rows: "4",
            class: "textarea textarea-bordered w-full resize-none",
            placeholder,
            value,
            disabled,
            required: true,
            oninput: move |e| oninput.call(e.value())
        }
    })
}
