use dioxus::prelude::*;

use crate::client::{
    component::{Footer, Navigation},
    model::site::SiteContext,
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    let site = use_context::<SiteContext>();
    let invite_url = site.invite_url();

    rsx!(div {
        class: "flex flex-col min-h-screen bg-base-100",
        Navigation { invite_url: invite_url.clone() }
        main {
            class: "flex-1",
            Outlet::<Route> {}
        }
        Footer { invite_url }
    })
}
