use test_utils::context::TestContext;
use url::Url;

use crate::server::store::StoreClient;

mod server_update;
mod team_member;
mod whitelist_application;

/// Builds a store client pointed at the test's fake store.
fn store_client(test: &TestContext) -> StoreClient {
    let base_url = Url::parse(&test.base_url()).unwrap();
    StoreClient::new(reqwest::Client::new(), &base_url, test.api_key.clone()).unwrap()
}
