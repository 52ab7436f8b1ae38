use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Page Not Found | County Lines RP" }
        Page {
            class: "flex items-center justify-center",
            div {
                class: "text-center",
                h1 { class: "text-6xl font-bold mb-4", "404" }
                p { class: "text-base-content/70 mb-6", "Nothing lives at /{path}." }
                Link {
                    to: Route::Home {},
                    class: "btn btn-primary",
                    "Back to home"
                }
            }
        }
    }
}
