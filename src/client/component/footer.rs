use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    component::navigation::NAV_LINKS,
    constant::{SITE_NAME, SITE_TAGLINE},
};

#[component]
pub fn Footer(invite_url: String) -> Element {
    let year = Utc::now().year();

    rsx!(footer {
        class: "bg-base-200 border-t border-base-300 px-4 py-12",
        div {
            class: "grid gap-8 md:grid-cols-3 max-w-6xl mx-auto",
            div {
                h3 { class: "text-lg font-bold mb-2", {SITE_NAME} }
                p { class: "text-base-content/70", {SITE_TAGLINE} }
            }
            div {
                h4 { class: "font-semibold mb-2", "Quick Links" }
                ul {
                    class: "flex flex-col gap-1",
                    for (label, href) in NAV_LINKS {
                        li {
                            key: "{href}",
                            a { href, class: "text-base-content/70 hover:text-primary", {label} }
                        }
                    }
                }
            }
            div {
                h4 { class: "font-semibold mb-2", "Community" }
                a {
                    href: invite_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "flex items-center gap-2 text-base-content/70 hover:text-primary",
                    Icon { width: 18, height: 18, icon: FaDiscord }
                    "Discord"
                }
            }
        }
        p {
            class: "text-center text-sm text-base-content/50 mt-8",
            "© {year} {SITE_NAME}. All rights reserved."
        }
    })
}
