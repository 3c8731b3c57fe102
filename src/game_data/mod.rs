//! World of Warcraft Game Data API client and types.
//!
//! This module provides a client for the Blizzard World of Warcraft Game Data API, the
//! read-only HTTP API serving reference data (items, mounts, playable classes, ...) and live
//! realm data (connected realms, leaderboards, the WoW Token price).
//!
//! # Overview
//!
//! Every endpoint lives under `/data/wow` and takes a `namespace` query parameter that
//! partitions the data by volatility and region: `static-<origin>` for reference data that
//! changes with game patches and `dynamic-<origin>` for live data. The [`Client`] selects the
//! namespace per endpoint; callers only configure the [`Origin`] and any [`DefaultParams`]
//! (locale, access token) to attach to every request.
//!
//! Response bodies are returned as opaque [`serde_json::Value`]s.
//!
//! ## Available Endpoints
//!
//! Paths are relative to `/data/wow`.
//!
//! | Endpoint | Namespace |
//! |----------|-----------|
//! | `/achievement-category/index` | static |
//! | `/achievement-category/{achievement_category_id}` | static |
//! | `/achievement/index` | static |
//! | `/achievement/{achievement_id}` | static |
//! | `/media/achievement/{achievement_id}` | static |
//! | `/azerite-essence/index` | static |
//! | `/azerite-essence/{azerite_essence_id}` | static |
//! | `/media/azerite-essence/{azerite_essence_id}` | static |
//! | `/connected-realm/index` | dynamic |
//! | `/connected-realm/{connected_realm_id}` | dynamic |
//! | `/creature-family/index` | static |
//! | `/creature-family/{creature_family_id}` | static |
//! | `/creature-type/index` | static |
//! | `/creature-type/{creature_type_id}` | static |
//! | `/creature/{creature_id}` | static |
//! | `/media/creature-display/{creature_display_id}` | static |
//! | `/media/creature-family/{creature_family_id}` | static |
//! | `/guild-crest/index` | static |
//! | `/guild-crest/border/{border_id}` | static |
//! | `/guild-crest/emblem/{emblem_id}` | static |
//! | `/item-class/index` | static |
//! | `/item-class/{item_class_id}` | static |
//! | `/item-class/{item_class_id}/item-subclass/{item_subclass_id}` | static |
//! | `/item/{item_id}` | static |
//! | `/media/item/{item_id}` | static |
//! | `/keystone-affix/index` | static |
//! | `/keystone-affix/{keystone_affix_id}` | static |
//! | `/leaderboard/hall-of-fame/{raid}/{faction}` | dynamic |
//! | `/mount/index` | static |
//! | `/mount/{mount_id}` | static |
//! | `/mythic-keystone/dungeon/index` | dynamic |
//! | `/mythic-keystone/dungeon/{dungeon_id}` | dynamic |
//! | `/mythic-keystone/index` | dynamic |
//! | `/mythic-keystone/period/index` | dynamic |
//! | `/mythic-keystone/period/{period_id}` | dynamic |
//! | `/mythic-keystone/season/index` | dynamic |
//! | `/mythic-keystone/season/{season_id}` | dynamic |
//! | `/connected-realm/{connected_realm_id}/mythic-leaderboard/index` | dynamic |
//! | `/connected-realm/{connected_realm_id}/mythic-leaderboard/{dungeon_id}/period/{period}` | dynamic |
//! | `/pet/index` | static |
//! | `/pet/{pet_id}` | static |
//! | `/playable-class/index` | static |
//! | `/playable-class/{playable_class_id}` | static |
//! | `/media/playable-class/{playable_class_id}` | static |
//! | `/playable-class/{playable_class_id}/pvp-talent-slots` | static |
//! | `/playable-race/index` | static |
//! | `/playable-race/{playable_race_id}` | static |
//! | `/playable-specialization/index` | static |
//! | `/playable-specialization/{playable_specialization_id}` | static |
//! | `/power-type/index` | static |
//! | `/power-type/{power_type_id}` | static |
//! | `/pvp-season/index` | dynamic |
//! | `/pvp-season/{pvp_season_id}` | dynamic |
//! | `/pvp-season/{pvp_season_id}/pvp-leaderboard/index` | dynamic |
//! | `/pvp-season/{pvp_season_id}/pvp-leaderboard/{pvp_bracket}` | dynamic |
//! | `/pvp-season/{pvp_season_id}/pvp-reward/index` | dynamic |
//! | `/media/pvp-tier/{pvp_tier_id}` | static |
//! | `/pvp-tier/index` | static |
//! | `/pvp-tier/{pvp_tier_id}` | static |
//! | `/realm/index` | dynamic |
//! | `/realm/{realm_slug}` | dynamic |
//! | `/region/index` | dynamic |
//! | `/region/{region_id}` | dynamic |
//! | `/reputation-faction/index` | static |
//! | `/reputation-faction/{reputation_faction_id}` | static |
//! | `/reputation-tiers/index` | static |
//! | `/reputation-tiers/{reputation_tiers_id}` | static |
//! | `/title/index` | static |
//! | `/title/{title_id}` | static |
//! | `/token/index` | dynamic |
//!
//! # Example
//!
//! ```no_run
//! use wow_game_data_sdk::game_data::{Client, Config, DefaultParams, Origin, PvpBracket};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder()
//!     .origin(Origin::Eu)
//!     .params(DefaultParams::new().locale("en_GB").access_token("token".to_owned()))
//!     .build();
//! let client = Client::new(config)?;
//!
//! let leaderboard = client.pvp_leaderboard(37, PvpBracket::ThreeVsThree).await?;
//! println!("{}", leaderboard["name"]);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod operation;
pub mod params;
pub mod path;
pub mod transport;
pub mod types;

pub use client::{Client, Config};
pub use operation::{NamespaceKind, Namespaces, OperationDescriptor};
pub use params::{DefaultParams, ParamValue};
pub use path::PathValue;
pub use transport::{EndpointRequest, HttpTransport, Transport};
pub use types::{Faction, Origin, PvpBracket};
