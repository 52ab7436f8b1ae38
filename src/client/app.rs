use dioxus::prelude::*;

use crate::{
    client::{constant::SITE_NAME, model::site::SiteContext, router::Route},
    model::{
        site::SiteConfigDto,
        status::{RefreshHandle, ServerStatus},
    },
};

#[cfg(feature = "web")]
use crate::client::api::site::get_site_config;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut site_config = use_signal(SiteConfigDto::default);
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut status = use_signal(ServerStatus::default);

    use_context_provider(|| SiteContext {
        config: site_config,
        status,
    });

    // Status refresh stops once the handle is cancelled on teardown
    let refresh = use_hook(RefreshHandle::new);
    {
        let refresh = refresh.clone();
        use_drop(move || refresh.cancel());
    }

    #[cfg(feature = "web")]
    {
        use crate::model::status::STATUS_REFRESH_INTERVAL_MS;
        use dioxus_logger::tracing;
        use gloo_timers::future::TimeoutFuture;
        use rand::{rngs::SmallRng, Rng, SeedableRng};

        use_future(move || {
            let refresh = refresh.clone();
            async move {
                let seed = chrono::Utc::now().timestamp_millis() as u64;
                let mut rng = SmallRng::seed_from_u64(seed);

                loop {
                    TimeoutFuture::new(STATUS_REFRESH_INTERVAL_MS).await;

                    let mut next = status();
                    if !refresh.refresh(&mut next, || rng.random::<f64>()) {
                        break;
                    }
                    status.set(next);
                }
            }
        });

        use_future(move || async move {
            match get_site_config().await {
                Ok(config) => site_config.set(config),
                Err(err) => tracing::error!("Failed to fetch site config: {}", err),
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "County Lines RP is a whitelisted roleplay community. Meet the team, read the latest server updates and apply to join."
        }
        document::Meta {
            name: "og:title",
            content: SITE_NAME
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
