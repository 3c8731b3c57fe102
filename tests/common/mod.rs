#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use httpmock::MockServer;
use wow_game_data_sdk::game_data::{Client, Config, DefaultParams, Origin};

pub const ACCESS_TOKEN: &str = "EUaSXbPkxnT3ro5S2Csnl2mXUtoTnQ4NHC";
pub const LOCALE: &str = "en_US";

pub const STATIC_US: &str = "static-us";
pub const DYNAMIC_US: &str = "dynamic-us";

#[must_use]
pub fn default_params() -> DefaultParams {
    DefaultParams::new()
        .locale(LOCALE)
        .access_token(ACCESS_TOKEN.to_owned())
}

pub fn create_client(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder()
        .origin(Origin::Us)
        .host(server.base_url())
        .params(default_params())
        .build();

    Ok(Client::new(config)?)
}
