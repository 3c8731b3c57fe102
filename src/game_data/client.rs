//! Client for the World of Warcraft Game Data API.
//!
//! # Example
//!
//! ```no_run
//! use wow_game_data_sdk::game_data::{Client, Config, DefaultParams, Origin};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder()
//!     .origin(Origin::Us)
//!     .params(DefaultParams::new().locale("en_US").access_token("token".to_owned()))
//!     .build();
//! let client = Client::new(config)?;
//!
//! let item = client.item(19019).await?;
//! println!("{}", item["name"]);
//! # Ok(())
//! # }
//! ```

use bon::Builder;
use serde_json::Value;

use super::operation::{self, NamespaceKind, Namespaces, OperationDescriptor};
use super::params::{DefaultParams, ParamValue};
use super::path::{self, PathValue};
use super::transport::{EndpointRequest, HttpTransport, Transport};
use super::types::{Faction, Origin, PvpBracket};
use crate::Result;
use crate::error::Error;

/// Name of the query parameter selecting the data namespace.
pub const NAMESPACE_PARAM: &str = "namespace";

/// Configuration for [`Client`]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Region the client talks to. Determines the `namespace` strings and the default host.
    origin: Origin,
    /// Override for the API host. Defaults to [`Origin::host`].
    /// This is primarily useful for testing or for routing through a proxy.
    #[builder(into)]
    host: Option<String>,
    /// Query parameters sent with every request
    #[builder(default)]
    params: DefaultParams,
}

/// Dispatcher for the Game Data API.
///
/// Every endpoint method resolves its [`operation::OperationDescriptor`], renders the path,
/// picks the static or dynamic namespace for the configured [`Origin`] and sends a GET through
/// the [`Transport`]. Successful bodies are returned untouched as [`Value`]s.
///
/// Transport failures are reported as [`crate::error::Kind::EndpointCall`] errors carrying the
/// endpoint's fixed label; the original failure stays reachable through
/// [`crate::error::EndpointCall::cause`].
///
/// The client holds no mutable state, so it can be cloned or shared across tasks freely.
#[derive(Clone, Debug)]
pub struct Client<T: Transport = HttpTransport> {
    transport: T,
    origin: Origin,
    namespaces: Namespaces,
    params: DefaultParams,
}

impl Client<HttpTransport> {
    /// Creates a client that talks to the configured host over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        let transport = match &config.host {
            Some(host) => HttpTransport::new(host)?,
            None => HttpTransport::new(config.origin.host())?,
        };

        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`.
    ///
    /// The `host` set on [`Config`] is ignored; the transport decides where requests go.
    #[must_use]
    pub fn with_transport(transport: T, config: Config) -> Self {
        let Config {
            origin, mut params, ..
        } = config;

        let discarded = params.remove(NAMESPACE_PARAM);
        #[cfg(feature = "tracing")]
        if discarded {
            tracing::warn!(
                %origin,
                "discarding default `namespace` parameter, it is selected per endpoint"
            );
        }
        #[cfg(not(feature = "tracing"))]
        let _: bool = discarded;

        Self {
            transport,
            origin,
            namespaces: Namespaces::for_origin(&origin.to_string()),
            params,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    #[must_use]
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Returns the namespace string sent for endpoints of `kind`, e.g. `static-us`.
    #[must_use]
    pub fn namespace(&self, kind: NamespaceKind) -> &str {
        self.namespaces.get(kind)
    }

    #[must_use]
    pub fn default_params(&self) -> &DefaultParams {
        &self.params
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves the request for `operation` without sending it.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Validation`] error if `operation` is unknown, or if
    /// `args` misses a placeholder of the path, names one that does not exist, or holds an
    /// empty value.
    pub fn prepare(&self, operation: &str, args: &[(&str, PathValue)]) -> Result<EndpointRequest> {
        self.build(lookup(operation)?, args)
    }

    /// Sends the request for `operation` and returns the decoded body unmodified.
    ///
    /// This is the routine behind every endpoint method. It can also be called directly with an
    /// operation name taken from [`operation::operations`].
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Validation`] error when the request cannot be prepared
    /// (see [`Client::prepare`]) and a [`crate::error::Kind::EndpointCall`] error for any
    /// transport failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, args), fields(namespace, path))
    )]
    pub async fn execute(&self, operation: &str, args: &[(&str, PathValue)]) -> Result<Value> {
        let descriptor = lookup(operation)?;
        let request = self.build(descriptor, args)?;

        #[cfg(feature = "tracing")]
        {
            let span = tracing::Span::current();
            span.record("namespace", self.namespace(descriptor.namespace));
            span.record("path", request.path().as_str());
        }

        self.transport.get(&request).await.map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = ?e, label = descriptor.label, "Game Data call failed");

            Error::endpoint_call(descriptor.name, descriptor.label, e)
        })
    }

    fn build(
        &self,
        descriptor: &'static OperationDescriptor,
        args: &[(&str, PathValue)],
    ) -> Result<EndpointRequest> {
        let segments = path::render(descriptor.path, args)?;

        let mut query: Vec<(String, ParamValue)> = Vec::with_capacity(self.params.len() + 1);
        query.push((
            NAMESPACE_PARAM.to_owned(),
            self.namespace(descriptor.namespace).into(),
        ));
        query.extend(self.params.iter().map(|(k, v)| (k.to_owned(), v.clone())));

        Ok(EndpointRequest {
            operation: descriptor.name,
            segments,
            query,
        })
    }

    /// Retrieves an index of achievement categories.
    pub async fn achievement_categories_index(&self) -> Result<Value> {
        self.execute("achievement_categories_index", &[]).await
    }

    /// Retrieves an achievement category by its ID.
    pub async fn achievement_category(&self, achievement_category_id: u64) -> Result<Value> {
        self.execute(
            "achievement_category",
            &[("achievement_category_id", achievement_category_id.into())],
        )
        .await
    }

    /// Retrieves an index of achievements.
    pub async fn achievement_index(&self) -> Result<Value> {
        self.execute("achievement_index", &[]).await
    }

    /// Retrieves an achievement by its ID.
    pub async fn achievement(&self, achievement_id: u64) -> Result<Value> {
        self.execute("achievement", &[("achievement_id", achievement_id.into())]).await
    }

    /// Retrieves media for an achievement by its ID.
    pub async fn achievement_media(&self, achievement_id: u64) -> Result<Value> {
        self.execute("achievement_media", &[("achievement_id", achievement_id.into())]).await
    }

    /// Retrieves an index of azerite essences.
    pub async fn azerite_essence_index(&self) -> Result<Value> {
        self.execute("azerite_essence_index", &[]).await
    }

    /// Retrieves an azerite essence by its ID.
    pub async fn azerite_essence(&self, azerite_essence_id: u64) -> Result<Value> {
        self.execute("azerite_essence", &[("azerite_essence_id", azerite_essence_id.into())]).await
    }

    /// Retrieves media for an azerite essence by its ID.
    pub async fn azerite_essence_media(&self, azerite_essence_id: u64) -> Result<Value> {
        self.execute(
            "azerite_essence_media",
            &[("azerite_essence_id", azerite_essence_id.into())],
        )
        .await
    }

    /// Retrieves an index of connected realms.
    pub async fn connected_realms_index(&self) -> Result<Value> {
        self.execute("connected_realms_index", &[]).await
    }

    /// Retrieves a connected realm by its ID.
    pub async fn connected_realm(&self, connected_realm_id: u64) -> Result<Value> {
        self.execute("connected_realm", &[("connected_realm_id", connected_realm_id.into())]).await
    }

    /// Retrieves an index of creature families.
    pub async fn creature_families_index(&self) -> Result<Value> {
        self.execute("creature_families_index", &[]).await
    }

    /// Retrieves a creature family by its ID.
    pub async fn creature_family(&self, creature_family_id: u64) -> Result<Value> {
        self.execute("creature_family", &[("creature_family_id", creature_family_id.into())]).await
    }

    /// Retrieves an index of creature types.
    pub async fn creature_types_index(&self) -> Result<Value> {
        self.execute("creature_types_index", &[]).await
    }

    /// Retrieves a creature type by its ID.
    pub async fn creature_type(&self, creature_type_id: u64) -> Result<Value> {
        self.execute("creature_type", &[("creature_type_id", creature_type_id.into())]).await
    }

    /// Retrieves a creature by its ID.
    pub async fn creature(&self, creature_id: u64) -> Result<Value> {
        self.execute("creature", &[("creature_id", creature_id.into())]).await
    }

    /// Retrieves media for a creature display by its ID.
    pub async fn creature_display_media(&self, creature_display_id: u64) -> Result<Value> {
        self.execute(
            "creature_display_media",
            &[("creature_display_id", creature_display_id.into())],
        )
        .await
    }

    /// Retrieves media for a creature family by its ID.
    pub async fn creature_family_media(&self, creature_family_id: u64) -> Result<Value> {
        self.execute(
            "creature_family_media",
            &[("creature_family_id", creature_family_id.into())],
        )
        .await
    }

    /// Retrieves an index of guild crest media.
    pub async fn guild_crest_components_index(&self) -> Result<Value> {
        self.execute("guild_crest_components_index", &[]).await
    }

    /// Retrieves media for a guild crest border by its ID.
    pub async fn guild_crest_border_media(&self, border_id: u64) -> Result<Value> {
        self.execute("guild_crest_border_media", &[("border_id", border_id.into())]).await
    }

    /// Retrieves media for a guild crest emblem by its ID.
    pub async fn guild_crest_emblem_media(&self, emblem_id: u64) -> Result<Value> {
        self.execute("guild_crest_emblem_media", &[("emblem_id", emblem_id.into())]).await
    }

    /// Retrieves an index of item classes.
    pub async fn item_classes_index(&self) -> Result<Value> {
        self.execute("item_classes_index", &[]).await
    }

    /// Retrieves an item class by its ID.
    pub async fn item_class(&self, item_class_id: u64) -> Result<Value> {
        self.execute("item_class", &[("item_class_id", item_class_id.into())]).await
    }

    /// Retrieves an item subclass by its ID.
    ///
    /// # Arguments
    ///
    /// * `item_class_id` - The ID of the item class.
    /// * `item_subclass_id` - The ID of the item subclass.
    pub async fn item_subclass(&self, item_class_id: u64, item_subclass_id: u64) -> Result<Value> {
        self.execute(
            "item_subclass",
            &[
                ("item_class_id", item_class_id.into()),
                ("item_subclass_id", item_subclass_id.into()),
            ],
        )
        .await
    }

    /// Retrieves an item by its ID.
    pub async fn item(&self, item_id: u64) -> Result<Value> {
        self.execute("item", &[("item_id", item_id.into())]).await
    }

    /// Retrieves media for an item by its ID.
    pub async fn item_media(&self, item_id: u64) -> Result<Value> {
        self.execute("item_media", &[("item_id", item_id.into())]).await
    }

    /// Retrieves an index of mythic keystone affixes.
    pub async fn mythic_keystone_affixes_index(&self) -> Result<Value> {
        self.execute("mythic_keystone_affixes_index", &[]).await
    }

    /// Retrieves a mythic keystone affix by its ID.
    pub async fn mythic_keystone_affix(&self, keystone_affix_id: u64) -> Result<Value> {
        self.execute(
            "mythic_keystone_affix",
            &[("keystone_affix_id", keystone_affix_id.into())],
        )
        .await
    }

    /// Retrieves the leaderboard for a given raid and faction.
    ///
    /// # Arguments
    ///
    /// * `raid` - The raid for a leaderboard.
    /// * `faction` - Player faction (`alliance` or `horde`).
    pub async fn mythic_raid_leaderboard(&self, raid: &str, faction: Faction) -> Result<Value> {
        self.execute(
            "mythic_raid_leaderboard",
            &[
                ("raid", raid.into()),
                ("faction", faction.into()),
            ],
        )
        .await
    }

    /// Retrieves an index of mounts.
    pub async fn mounts_index(&self) -> Result<Value> {
        self.execute("mounts_index", &[]).await
    }

    /// Retrieves a mount by its ID.
    pub async fn mount(&self, mount_id: u64) -> Result<Value> {
        self.execute("mount", &[("mount_id", mount_id.into())]).await
    }

    /// Retrieves an index of Mythic Keystone dungeons.
    pub async fn mythic_keystone_dungeons_index(&self) -> Result<Value> {
        self.execute("mythic_keystone_dungeons_index", &[]).await
    }

    /// Retrieves a Mythic Keystone dungeon by its ID.
    pub async fn mythic_keystone_dungeon(&self, dungeon_id: u64) -> Result<Value> {
        self.execute("mythic_keystone_dungeon", &[("dungeon_id", dungeon_id.into())]).await
    }

    /// Retrieves the Mythic Keystone index, linking to the dungeon, period and season indexes.
    pub async fn mythic_keystone_index(&self) -> Result<Value> {
        self.execute("mythic_keystone_index", &[]).await
    }

    /// Retrieves an index of Mythic Keystone periods.
    pub async fn mythic_keystone_periods_index(&self) -> Result<Value> {
        self.execute("mythic_keystone_periods_index", &[]).await
    }

    /// Retrieves a Mythic Keystone period by its ID.
    pub async fn mythic_keystone_period(&self, period_id: u64) -> Result<Value> {
        self.execute("mythic_keystone_period", &[("period_id", period_id.into())]).await
    }

    /// Retrieves an index of Mythic Keystone seasons.
    pub async fn mythic_keystone_seasons_index(&self) -> Result<Value> {
        self.execute("mythic_keystone_seasons_index", &[]).await
    }

    /// Retrieves a Mythic Keystone season by its ID.
    pub async fn mythic_keystone_season(&self, season_id: u64) -> Result<Value> {
        self.execute("mythic_keystone_season", &[("season_id", season_id.into())]).await
    }

    /// Retrieves an index of Mythic Keystone Leaderboard dungeon instances for a connected realm.
    pub async fn mythic_keystone_leaderboards_index(
        &self,
        connected_realm_id: u64,
    ) -> Result<Value> {
        self.execute(
            "mythic_keystone_leaderboards_index",
            &[("connected_realm_id", connected_realm_id.into())],
        )
        .await
    }

    /// Retrieves a weekly Mythic Keystone Leaderboard by period.
    ///
    /// # Arguments
    ///
    /// * `connected_realm_id` - The ID of the connected realm.
    /// * `dungeon_id` - The ID of the dungeon.
    /// * `period` - The unique identifier for the leaderboard period.
    pub async fn mythic_keystone_leaderboard(
        &self,
        connected_realm_id: u64,
        dungeon_id: u64,
        period: u64,
    ) -> Result<Value> {
        self.execute(
            "mythic_keystone_leaderboard",
            &[
                ("connected_realm_id", connected_realm_id.into()),
                ("dungeon_id", dungeon_id.into()),
                ("period", period.into()),
            ],
        )
        .await
    }

    /// Retrieves an index of pets.
    pub async fn pets_index(&self) -> Result<Value> {
        self.execute("pets_index", &[]).await
    }

    /// Retrieves a pet by its ID.
    pub async fn pet(&self, pet_id: u64) -> Result<Value> {
        self.execute("pet", &[("pet_id", pet_id.into())]).await
    }

    /// Retrieves an index of playable classes.
    pub async fn playable_class_index(&self) -> Result<Value> {
        self.execute("playable_class_index", &[]).await
    }

    /// Retrieves a playable class by its ID.
    pub async fn playable_class(&self, playable_class_id: u64) -> Result<Value> {
        self.execute("playable_class", &[("playable_class_id", playable_class_id.into())]).await
    }

    /// Retrieves media for a playable class by its ID.
    pub async fn playable_class_media(&self, playable_class_id: u64) -> Result<Value> {
        self.execute(
            "playable_class_media",
            &[("playable_class_id", playable_class_id.into())],
        )
        .await
    }

    /// Retrieves the PvP talent slots for a playable class by its ID.
    pub async fn playable_class_pvp_talent_slots(&self, playable_class_id: u64) -> Result<Value> {
        self.execute(
            "playable_class_pvp_talent_slots",
            &[("playable_class_id", playable_class_id.into())],
        )
        .await
    }

    /// Retrieves an index of playable races.
    pub async fn playable_race_index(&self) -> Result<Value> {
        self.execute("playable_race_index", &[]).await
    }

    /// Retrieves a playable race by its ID.
    pub async fn playable_race(&self, playable_race_id: u64) -> Result<Value> {
        self.execute("playable_race", &[("playable_race_id", playable_race_id.into())]).await
    }

    /// Retrieves an index of playable specializations.
    pub async fn playable_specialization_index(&self) -> Result<Value> {
        self.execute("playable_specialization_index", &[]).await
    }

    /// Retrieves a playable specialization by its ID.
    pub async fn playable_specialization(&self, playable_specialization_id: u64) -> Result<Value> {
        self.execute(
            "playable_specialization",
            &[("playable_specialization_id", playable_specialization_id.into())],
        )
        .await
    }

    /// Retrieves an index of power types.
    pub async fn power_types_index(&self) -> Result<Value> {
        self.execute("power_types_index", &[]).await
    }

    /// Retrieves a power type by its ID.
    pub async fn power_type(&self, power_type_id: u64) -> Result<Value> {
        self.execute("power_type", &[("power_type_id", power_type_id.into())]).await
    }

    /// Retrieves an index of PvP seasons.
    pub async fn pvp_seasons_index(&self) -> Result<Value> {
        self.execute("pvp_seasons_index", &[]).await
    }

    /// Retrieves a PvP season by its ID.
    pub async fn pvp_season(&self, pvp_season_id: u64) -> Result<Value> {
        self.execute("pvp_season", &[("pvp_season_id", pvp_season_id.into())]).await
    }

    /// Retrieves an index of PvP leaderboards for a PvP season.
    pub async fn pvp_leaderboards_index(&self, pvp_season_id: u64) -> Result<Value> {
        self.execute("pvp_leaderboards_index", &[("pvp_season_id", pvp_season_id.into())]).await
    }

    /// Retrieves the PvP leaderboard of a specific PvP bracket for a PvP season.
    ///
    /// # Arguments
    ///
    /// * `pvp_season_id` - The ID of the PvP season.
    /// * `pvp_bracket` - The PvP bracket type (1v1, 3v3, etc).
    pub async fn pvp_leaderboard(
        &self,
        pvp_season_id: u64,
        pvp_bracket: PvpBracket,
    ) -> Result<Value> {
        self.execute(
            "pvp_leaderboard",
            &[
                ("pvp_season_id", pvp_season_id.into()),
                ("pvp_bracket", pvp_bracket.into()),
            ],
        )
        .await
    }

    /// Retrieves an index of PvP rewards for a PvP season.
    pub async fn pvp_rewards_index(&self, pvp_season_id: u64) -> Result<Value> {
        self.execute("pvp_rewards_index", &[("pvp_season_id", pvp_season_id.into())]).await
    }

    /// Retrieves media for a PvP tier by its ID.
    pub async fn pvp_tier_media(&self, pvp_tier_id: u64) -> Result<Value> {
        self.execute("pvp_tier_media", &[("pvp_tier_id", pvp_tier_id.into())]).await
    }

    /// Retrieves an index of PvP tiers.
    pub async fn pvp_tiers_index(&self) -> Result<Value> {
        self.execute("pvp_tiers_index", &[]).await
    }

    /// Retrieves a PvP tier by its ID.
    pub async fn pvp_tier(&self, pvp_tier_id: u64) -> Result<Value> {
        self.execute("pvp_tier", &[("pvp_tier_id", pvp_tier_id.into())]).await
    }

    /// Retrieves an index of realms.
    pub async fn realms_index(&self) -> Result<Value> {
        self.execute("realms_index", &[]).await
    }

    /// Retrieves a single realm by slug or ID.
    pub async fn realm(&self, realm_slug: &str) -> Result<Value> {
        self.execute("realm", &[("realm_slug", realm_slug.into())]).await
    }

    /// Retrieves an index of regions.
    pub async fn regions_index(&self) -> Result<Value> {
        self.execute("regions_index", &[]).await
    }

    /// Retrieves a region by its ID.
    pub async fn region(&self, region_id: u64) -> Result<Value> {
        self.execute("region", &[("region_id", region_id.into())]).await
    }

    /// Retrieves an index of reputation factions.
    pub async fn reputation_factions_index(&self) -> Result<Value> {
        self.execute("reputation_factions_index", &[]).await
    }

    /// Retrieves a single reputation faction by its ID.
    pub async fn reputation_faction(&self, reputation_faction_id: u64) -> Result<Value> {
        self.execute(
            "reputation_faction",
            &[("reputation_faction_id", reputation_faction_id.into())],
        )
        .await
    }

    /// Retrieves an index of reputation tiers.
    pub async fn reputation_tiers_index(&self) -> Result<Value> {
        self.execute("reputation_tiers_index", &[]).await
    }

    /// Retrieves a single set of reputation tiers by its ID.
    pub async fn reputation_tiers(&self, reputation_tiers_id: u64) -> Result<Value> {
        self.execute(
            "reputation_tiers",
            &[("reputation_tiers_id", reputation_tiers_id.into())],
        )
        .await
    }

    /// Retrieves an index of titles.
    pub async fn titles_index(&self) -> Result<Value> {
        self.execute("titles_index", &[]).await
    }

    /// Retrieves a title by its ID.
    pub async fn title(&self, title_id: u64) -> Result<Value> {
        self.execute("title", &[("title_id", title_id.into())]).await
    }

    /// Retrieves the WoW Token index.
    pub async fn wow_token_index(&self) -> Result<Value> {
        self.execute("wow_token_index", &[]).await
    }
}

fn lookup(operation: &str) -> Result<&'static OperationDescriptor> {
    operation::descriptor(operation)
        .ok_or_else(|| Error::validation(format!("unknown operation: {operation}")))
}
