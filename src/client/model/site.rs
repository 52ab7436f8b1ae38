use dioxus::prelude::*;

use crate::model::{site::SiteConfigDto, status::ServerStatus};

/// Site-wide state owned by the root component.
///
/// Routes cannot take props from `App`, so the root provides this as context and the
/// route components read it once and pass the values down as props.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: Signal<SiteConfigDto>,
    pub status: Signal<ServerStatus>,
}

impl SiteContext {
    pub fn invite_url(&self) -> String {
        self.config.read().invite_url.clone()
    }
}
