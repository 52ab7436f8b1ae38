mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let http_client = startup::setup_reqwest_client()?;
        let store = startup::connect_to_store(&config, http_client)?;

        if config.discord_invite_url.is_empty() {
            tracing::warn!("DISCORD_INVITE is not set; Join Discord buttons will be inert");
        }

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(store, config.discord_invite_url.clone()));
        router = router.merge(server_routes);

        Ok(router)
    })
}
