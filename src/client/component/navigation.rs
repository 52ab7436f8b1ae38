use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::FaDiscord,
        fa_solid_icons::{FaBars, FaXmark},
    },
    Icon,
};

use crate::client::{constant::SITE_NAME, router::Route};

/// In-page anchors shown in the navigation bar and footer.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/#"),
    ("Team", "/#team"),
    ("Apply", "/#whitelist"),
    ("Updates", "/#updates"),
];

#[component]
pub fn Navigation(invite_url: String) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx!(nav {
        class: "fixed top-0 w-full h-20 bg-base-200/90 backdrop-blur border-b border-base-300 z-20",
        div {
            class: "flex justify-between items-center gap-4 h-full max-w-6xl mx-auto px-4",
            Link {
                to: Route::Home {},
                class: "text-xl font-bold tracking-wide",
                {SITE_NAME}
            }
            div {
                class: "hidden md:flex items-center gap-6",
                for (label, href) in NAV_LINKS {
                    a {
                        key: "{href}",
                        href,
                        class: "hover:text-primary transition-colors",
                        {label}
                    }
                }
                JoinDiscordButton { invite_url: invite_url.clone() }
            }
            button {
                class: "btn btn-ghost btn-square md:hidden",
                aria_label: "Toggle menu",
                onclick: move |_| menu_open.toggle(),
                if menu_open() {
                    Icon { width: 20, height: 20, icon: FaXmark }
                } else {
                    Icon { width: 20, height: 20, icon: FaBars }
                }
            }
        }
        if menu_open() {
            div {
                class: "md:hidden flex flex-col gap-2 px-4 pb-4 bg-base-200 border-b border-base-300",
                for (label, href) in NAV_LINKS {
                    a {
                        key: "{href}",
                        href,
                        class: "py-2 hover:text-primary",
                        onclick: move |_| menu_open.set(false),
                        {label}
                    }
                }
                JoinDiscordButton { invite_url }
            }
        }
    })
}

/// Opens the community invite in a new tab. Inert when no invite is configured.
#[component]
pub fn JoinDiscordButton(invite_url: String) -> Element {
    rsx!(a {
        href: invite_url,
        target: "_blank",
        rel: "noopener noreferrer",
        class: "btn btn-primary flex gap-2 items-center",
        Icon { width: 18, height: 18, icon: FaDiscord }
        p { "Join Discord" }
    })
}
