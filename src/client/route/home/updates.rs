use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBug, FaBullhorn, FaStar, FaWrench},
    Icon,
};

use crate::{
    client::{
        component::{LoadingNotice, Section},
        model::cache::Cache,
    },
    model::update::{ServerUpdateDto, UpdateCategory},
};

#[cfg(feature = "web")]
use crate::client::api::update::get_server_updates;

#[component]
pub(super) fn UpdatesSection() -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut updates = use_signal(Cache::<Vec<ServerUpdateDto>>::default);

    #[cfg(feature = "web")]
    use_future(move || async move {
        updates.set(Cache::from_result(get_server_updates().await, "server updates"));
    });

    let list = updates.read().settled();

    rsx!(Section {
        id: "updates",
        title: "Server Updates",
        subtitle: "Stay up to date with the latest changes and announcements",
        {match list {
            None => rsx!(LoadingNotice { text: "Loading updates..." }),
            Some(list) if list.is_empty() => rsx!(
                div {
                    class: "flex flex-col items-center gap-4 py-12 rounded-xl border border-base-300 bg-base-200/50 text-base-content/60",
                    Icon { width: 64, height: 64, icon: FaBullhorn }
                    p { "No updates yet. Check back soon!" }
                }
            ),
            Some(list) => rsx!(
                div {
                    class: "flex flex-col gap-6 max-w-4xl mx-auto",
                    for update in list {
                        UpdateCard { key: "{update.id}", update: update.clone() }
                    }
                }
            ),
        }}
    })
}

#[component]
fn UpdateCard(update: ServerUpdateDto) -> Element {
    let category = update.category();
    let badge_class = category.badge_class();
    let published = update.published_label();

    rsx!(div {
        class: "card bg-base-200/50 border border-base-300 p-6 hover:border-primary/30 transition-colors",
        div {
            class: "flex items-start gap-4",
            div {
                class: "flex-shrink-0 w-12 h-12 rounded-lg border flex items-center justify-center {badge_class}",
                CategoryIcon { category }
            }
            div {
                class: "flex-1 min-w-0",
                div {
                    class: "flex items-start justify-between gap-4 mb-2",
                    div {
                        h3 { class: "text-xl font-bold mb-1", "{update.title}" }
                        p {
                            class: "text-sm text-base-content/50",
                            "{published}"
                            if let Some(version) = update.version_label() {
                                span { class: "ml-2 font-mono", "{version}" }
                            }
                        }
                    }
                    span {
                        class: "flex-shrink-0 rounded-full border px-3 py-1 text-xs font-medium capitalize {badge_class}",
                        "{update.update_type}"
                    }
                }
                p {
                    class: "text-base-content/70 whitespace-pre-line",
                    "{update.description}"
                }
            }
        }
    })
}

#[component]
fn CategoryIcon(category: UpdateCategory) -> Element {
    match category.presentation() {
        UpdateCategory::Feature => rsx!(Icon { width: 24, height: 24, icon: FaStar }),
        UpdateCategory::Bugfix => rsx!(Icon { width: 24, height: 24, icon: FaBug }),
        UpdateCategory::Maintenance => rsx!(Icon { width: 24, height: 24, icon: FaWrench }),
        UpdateCategory::Announcement | UpdateCategory::Other => {
            rsx!(Icon { width: 24, height: 24, icon: FaBullhorn })
        }
    }
}
