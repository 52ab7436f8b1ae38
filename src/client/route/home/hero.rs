use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::FaDiscord,
        fa_solid_icons::{FaServer, FaShieldHalved, FaUsers},
    },
    Icon,
};

use crate::model::status::ServerStatus;

#[component]
pub(super) fn Hero(status: ServerStatus, invite_url: String) -> Element {
    let dot_class = if status.online {
        "bg-success animate-pulse"
    } else {
        "bg-error"
    };
    let label = status.label();

    rsx!(section {
        id: "home",
        class: "pt-40 pb-24 px-4 bg-gradient-to-br from-base-300 via-base-200 to-base-300",
        div {
            class: "max-w-5xl mx-auto text-center",
            div {
                class: "inline-flex items-center gap-2 rounded-full border border-success/20 bg-success/10 px-4 py-2 mb-8",
                div { class: "w-2 h-2 rounded-full {dot_class}" }
                span { class: "text-sm font-medium text-success", "{label}" }
            }
            h1 {
                class: "text-5xl md:text-7xl font-bold mb-6",
                "County Lines Roleplay"
            }
            p {
                class: "text-xl md:text-2xl text-base-content/70 mb-8 max-w-3xl mx-auto",
                "Experience authentic UK street crime roleplay in a serious, immersive environment. Join our community today."
            }
            div {
                class: "flex flex-col sm:flex-row gap-4 justify-center items-center mb-16",
                a {
                    href: "#whitelist",
                    class: "btn btn-primary btn-lg flex gap-2 items-center",
                    Icon { width: 20, height: 20, icon: FaShieldHalved }
                    "Apply for Whitelist"
                }
                a {
                    href: invite_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "btn btn-outline btn-lg flex gap-2 items-center",
                    Icon { width: 20, height: 20, icon: FaDiscord }
                    "Join Discord"
                }
            }
            div {
                class: "grid grid-cols-1 sm:grid-cols-3 gap-6 max-w-4xl mx-auto",
                FeatureCard {
                    title: "Serious RP",
                    text: "Authentic UK street crime scenarios with strict roleplay standards",
                    Icon { width: 32, height: 32, icon: FaServer }
                }
                FeatureCard {
                    title: "Active Community",
                    text: "Join hundreds of dedicated roleplayers in our thriving community",
                    Icon { width: 32, height: 32, icon: FaUsers }
                }
                FeatureCard {
                    title: "Whitelisted",
                    text: "Quality control ensures the best roleplay experience",
                    Icon { width: 32, height: 32, icon: FaShieldHalved }
                }
            }
        }
    })
}

#[component]
fn FeatureCard(title: &'static str, text: &'static str, children: Element) -> Element {
    rsx!(div {
        class: "card bg-base-100/50 border border-base-300 p-6 items-center",
        div { class: "text-primary mb-3", {children} }
        h3 { class: "text-lg font-semibold mb-2", {title} }
        p { class: "text-sm text-base-content/60", {text} }
    })
}
