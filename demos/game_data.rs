//! Walks a handful of Game Data endpoints, static and dynamic.
//!
//! Requires an OAuth access token obtained with the client credentials flow:
//! ```sh
//! BATTLE_NET_ACCESS_TOKEN=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example game_data --features tracing
//! ```
//!
//! `BATTLE_NET_ORIGIN` selects the region (defaults to `us`).

use tracing::{error, info};
use wow_game_data_sdk::error::EndpointCall;
use wow_game_data_sdk::game_data::{Client, Config, DefaultParams, Origin, PvpBracket};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let token = std::env::var("BATTLE_NET_ACCESS_TOKEN")?;
    let origin = std::env::var("BATTLE_NET_ORIGIN")
        .unwrap_or_else(|_| "us".to_owned())
        .parse::<Origin>()?;

    let config = Config::builder()
        .origin(origin)
        .params(DefaultParams::new().locale("en_US").access_token(token))
        .build();
    let client = Client::new(config)?;

    match client.item(19019).await {
        Ok(item) => info!(endpoint = "item", name = %item["name"]),
        Err(e) => error!(endpoint = "item", error = %e),
    }

    match client.connected_realms_index().await {
        Ok(index) => {
            let count = index["connected_realms"].as_array().map_or(0, Vec::len);
            info!(endpoint = "connected_realms_index", count);
        }
        Err(e) => error!(endpoint = "connected_realms_index", error = %e),
    }

    let seasons = client.pvp_seasons_index().await?;
    if let Some(season) = seasons["current_season"]["id"].as_u64() {
        match client.pvp_leaderboard(season, PvpBracket::ThreeVsThree).await {
            Ok(board) => {
                let entries = board["entries"].as_array().map_or(0, Vec::len);
                info!(endpoint = "pvp_leaderboard", season, entries);
            }
            Err(e) => error!(endpoint = "pvp_leaderboard", season, error = %e),
        }
    }

    if let Err(e) = client.mount(u64::MAX).await {
        if let Some(call) = e.downcast_ref::<EndpointCall>() {
            info!(label = call.label, cause = %call.cause(), "missing mount reported as expected");
        }
    }

    let token_index = client.wow_token_index().await?;
    info!(endpoint = "wow_token_index", price = %token_index["price"]);

    Ok(())
}
