use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

/// Full-width page section with an anchor id and a centred heading.
#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        section {
            id,
            class: "py-20 px-4 scroll-mt-20 {class}",
            div {
                class: "max-w-6xl mx-auto",
                div {
                    class: "text-center mb-12",
                    h2 { class: "text-3xl md:text-4xl font-bold mb-4", {title} }
                    p { class: "text-base-content/70 max-w-2xl mx-auto", {subtitle} }
                }
                {children}
            }
        }
    )
}

#[component]
pub fn LoadingNotice(text: &'static str) -> Element {
    rsx!(
        div {
            class: "flex items-center justify-center gap-3 py-12 text-base-content/70",
            span { class: "loading loading-spinner loading-md" }
            p { {text} }
        }
    )
}
