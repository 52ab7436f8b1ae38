mod hero;
mod team;
mod updates;
mod whitelist;

use dioxus::prelude::*;

use crate::client::model::site::SiteContext;

use hero::Hero;
use team::TeamSection;
use updates::UpdatesSection;
use whitelist::WhitelistSection;

#[component]
pub fn Home() -> Element {
    let site = use_context::<SiteContext>();
    let status = (site.status)();

    rsx! {
        Hero { status, invite_url: site.invite_url() }
        TeamSection {}
        WhitelistSection {}
        UpdatesSection {}
    }
}
