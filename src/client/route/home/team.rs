use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCode, FaCrown, FaHeadphones, FaShieldHalved, FaUsers},
    Icon,
};

use crate::{
    client::{
        component::{LoadingNotice, Section},
        model::cache::Cache,
    },
    model::team::{StaffRole, TeamMemberDto},
};

#[cfg(feature = "web")]
use crate::client::api::team::get_team_members;

#[component]
pub(super) fn TeamSection() -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut team = use_signal(Cache::<Vec<TeamMemberDto>>::default);

    #[cfg(feature = "web")]
    use_future(move || async move {
        team.set(Cache::from_result(get_team_members().await, "team members"));
    });

    let members = team.read().settled();

    rsx!(Section {
        id: "team",
        title: "Meet The Team",
        subtitle: "Our dedicated staff team works tirelessly to provide you with the best roleplay experience",
        {match members {
            None => rsx!(LoadingNotice { text: "Loading team..." }),
            Some(members) if members.is_empty() => rsx!(
                div {
                    class: "flex flex-col items-center gap-4 py-12 rounded-xl border border-base-300 bg-base-200/50 text-base-content/60",
                    Icon { width: 64, height: 64, icon: FaUsers }
                    p { "Team members coming soon!" }
                }
            ),
            Some(members) => rsx!(
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                    for member in members {
                        TeamCard { key: "{member.id}", member: member.clone() }
                    }
                }
            ),
        }}
    })
}

#[component]
fn TeamCard(member: TeamMemberDto) -> Element {
    let role = member.staff_role();
    let badge_class = role.badge_class();
    let initial = member.initial();

    rsx!(div {
        class: "card bg-base-200/50 border border-base-300 p-6 items-center text-center hover:border-primary/50 transition-colors",
        div {
            class: "w-24 h-24 mb-4 rounded-full bg-gradient-to-br from-primary to-secondary p-1",
            if let Some(avatar_url) = &member.avatar_url {
                img {
                    src: "{avatar_url}",
                    alt: "{member.name}",
                    class: "w-full h-full rounded-full object-cover"
                }
            } else {
                div {
                    class: "w-full h-full rounded-full bg-base-300 flex items-center justify-center",
                    span { class: "text-3xl font-bold", "{initial}" }
                }
            }
        }
        div {
            class: "inline-flex items-center gap-2 rounded-full border px-3 py-1 mb-3 text-sm font-medium {badge_class}",
            RoleIcon { role }
            "{member.role}"
        }
        h3 { class: "text-xl font-bold mb-1", "{member.name}" }
        if let Some(discord_tag) = &member.discord_tag {
            p { class: "text-sm font-mono text-base-content/60 mb-3", "{discord_tag}" }
        }
        if let Some(bio) = &member.bio {
            p { class: "text-sm text-base-content/60", "{bio}" }
        }
    })
}

#[component]
fn RoleIcon(role: StaffRole) -> Element {
    match role {
        StaffRole::Owner => rsx!(Icon { width: 14, height: 14, icon: FaCrown }),
        StaffRole::Admin => rsx!(Icon { width: 14, height: 14, icon: FaShieldHalved }),
        StaffRole::Developer => rsx!(Icon { width: 14, height: 14, icon: FaCode }),
        StaffRole::Support => rsx!(Icon { width: 14, height: 14, icon: FaHeadphones }),
        StaffRole::Other => rsx!(Icon { width: 14, height: 14, icon: FaUsers }),
    }
}
