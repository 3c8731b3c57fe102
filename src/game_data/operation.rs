//! Static table of Game Data operations.
//!
//! Every endpoint of the Game Data API is described once by an [`OperationDescriptor`]. The
//! typed methods on [`super::Client`] look their descriptor up by name and hand it to a single
//! execution routine, so adding an endpoint means adding one entry here and one thin method.

use phf::phf_map;

/// Base path shared by every Game Data endpoint.
pub const GAME_BASE_PATH: &str = "/data/wow";

/// Volatility class of an endpoint, which selects the `namespace` query parameter.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NamespaceKind {
    /// Reference data that only changes with game patches
    Static,
    /// Live, realm-state data
    Dynamic,
}

/// Immutable description of one Game Data endpoint.
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Operation name, also the key in [`OPERATIONS`]
    pub name: &'static str,
    /// Path template relative to [`GAME_BASE_PATH`], with `{placeholder}` segments
    pub path: &'static str,
    pub namespace: NamespaceKind,
    /// Fixed label reported when a call to this endpoint fails
    pub label: &'static str,
}

impl OperationDescriptor {
    /// Names of the placeholders in [`Self::path`], in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(placeholder_name)
    }
}

/// Returns the placeholder name when `segment` is of the form `{name}`.
pub(crate) fn placeholder_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// Returns the descriptor registered under `name`.
#[must_use]
pub fn descriptor(name: &str) -> Option<&'static OperationDescriptor> {
    OPERATIONS.get(name)
}

/// Iterates over every registered descriptor, in no particular order.
pub fn operations() -> impl Iterator<Item = &'static OperationDescriptor> {
    OPERATIONS.values()
}

pub static OPERATIONS: phf::Map<&'static str, OperationDescriptor> = phf_map! {
    "achievement_categories_index" => OperationDescriptor {
        name: "achievement_categories_index",
        path: "/achievement-category/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching achievement categories index.",
    },
    "achievement_category" => OperationDescriptor {
        name: "achievement_category",
        path: "/achievement-category/{achievement_category_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified achievement category.",
    },
    "achievement_index" => OperationDescriptor {
        name: "achievement_index",
        path: "/achievement/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching achievement index.",
    },
    "achievement" => OperationDescriptor {
        name: "achievement",
        path: "/achievement/{achievement_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified achievement.",
    },
    "achievement_media" => OperationDescriptor {
        name: "achievement_media",
        path: "/media/achievement/{achievement_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified achievement media.",
    },
    "azerite_essence_index" => OperationDescriptor {
        name: "azerite_essence_index",
        path: "/azerite-essence/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching azerite essence index.",
    },
    "azerite_essence" => OperationDescriptor {
        name: "azerite_essence",
        path: "/azerite-essence/{azerite_essence_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified azerite essence.",
    },
    "azerite_essence_media" => OperationDescriptor {
        name: "azerite_essence_media",
        path: "/media/azerite-essence/{azerite_essence_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified azerite essence media.",
    },
    "connected_realms_index" => OperationDescriptor {
        name: "connected_realms_index",
        path: "/connected-realm/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching connected realm index.",
    },
    "connected_realm" => OperationDescriptor {
        name: "connected_realm",
        path: "/connected-realm/{connected_realm_id}",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching specified connected realm.",
    },
    "creature_families_index" => OperationDescriptor {
        name: "creature_families_index",
        path: "/creature-family/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching creature families index.",
    },
    "creature_family" => OperationDescriptor {
        name: "creature_family",
        path: "/creature-family/{creature_family_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified creature family.",
    },
    "creature_types_index" => OperationDescriptor {
        name: "creature_types_index",
        path: "/creature-type/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching creature types index.",
    },
    "creature_type" => OperationDescriptor {
        name: "creature_type",
        path: "/creature-type/{creature_type_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified creature type.",
    },
    "creature" => OperationDescriptor {
        name: "creature",
        path: "/creature/{creature_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified creature.",
    },
    "creature_display_media" => OperationDescriptor {
        name: "creature_display_media",
        path: "/media/creature-display/{creature_display_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified creature display media.",
    },
    "creature_family_media" => OperationDescriptor {
        name: "creature_family_media",
        path: "/media/creature-family/{creature_family_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified creature family media.",
    },
    "guild_crest_components_index" => OperationDescriptor {
        name: "guild_crest_components_index",
        path: "/guild-crest/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching guild crest components index.",
    },
    "guild_crest_border_media" => OperationDescriptor {
        name: "guild_crest_border_media",
        path: "/guild-crest/border/{border_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching guild crest border media.",
    },
    "guild_crest_emblem_media" => OperationDescriptor {
        name: "guild_crest_emblem_media",
        path: "/guild-crest/emblem/{emblem_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching guild crest emblem media.",
    },
    "item_classes_index" => OperationDescriptor {
        name: "item_classes_index",
        path: "/item-class/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching item class index.",
    },
    "item_class" => OperationDescriptor {
        name: "item_class",
        path: "/item-class/{item_class_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified item class.",
    },
    "item_subclass" => OperationDescriptor {
        name: "item_subclass",
        path: "/item-class/{item_class_id}/item-subclass/{item_subclass_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified item class subclass.",
    },
    "item" => OperationDescriptor {
        name: "item",
        path: "/item/{item_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified item.",
    },
    "item_media" => OperationDescriptor {
        name: "item_media",
        path: "/media/item/{item_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified item media.",
    },
    "mythic_keystone_affixes_index" => OperationDescriptor {
        name: "mythic_keystone_affixes_index",
        path: "/keystone-affix/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching mythic keystone affix index.",
    },
    "mythic_keystone_affix" => OperationDescriptor {
        name: "mythic_keystone_affix",
        path: "/keystone-affix/{keystone_affix_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified mythic keystone affix.",
    },
    "mythic_raid_leaderboard" => OperationDescriptor {
        name: "mythic_raid_leaderboard",
        path: "/leaderboard/hall-of-fame/{raid}/{faction}",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching specified mythic raid leaderboard.",
    },
    "mounts_index" => OperationDescriptor {
        name: "mounts_index",
        path: "/mount/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching mount index.",
    },
    "mount" => OperationDescriptor {
        name: "mount",
        path: "/mount/{mount_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified mount.",
    },
    "mythic_keystone_dungeons_index" => OperationDescriptor {
        name: "mythic_keystone_dungeons_index",
        path: "/mythic-keystone/dungeon/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching mythic keystone dungeon index.",
    },
    "mythic_keystone_dungeon" => OperationDescriptor {
        name: "mythic_keystone_dungeon",
        path: "/mythic-keystone/dungeon/{dungeon_id}",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching specified mythic keystone dungeon.",
    },
    "mythic_keystone_index" => OperationDescriptor {
        name: "mythic_keystone_index",
        path: "/mythic-keystone/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching mythic keystone index.",
    },
    "mythic_keystone_periods_index" => OperationDescriptor {
        name: "mythic_keystone_periods_index",
        path: "/mythic-keystone/period/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching mythic keystone periods index.",
    },
    "mythic_keystone_period" => OperationDescriptor {
        name: "mythic_keystone_period",
        path: "/mythic-keystone/period/{period_id}",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching specified mythic keystone period.",
    },
    "mythic_keystone_seasons_index" => OperationDescriptor {
        name: "mythic_keystone_seasons_index",
        path: "/mythic-keystone/season/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching mythic keystone seasons index.",
    },
    "mythic_keystone_season" => OperationDescriptor {
        name: "mythic_keystone_season",
        path: "/mythic-keystone/season/{season_id}",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching specified mythic keystone season.",
    },
    "mythic_keystone_leaderboards_index" => OperationDescriptor {
        name: "mythic_keystone_leaderboards_index",
        path: "/connected-realm/{connected_realm_id}/mythic-leaderboard/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching mythic keystone leaderboard index for specified connected realm.",
    },
    "mythic_keystone_leaderboard" => OperationDescriptor {
        name: "mythic_keystone_leaderboard",
        path: "/connected-realm/{connected_realm_id}/mythic-leaderboard/{dungeon_id}/period/{period}",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching specified mythic keystone leaderboard for connected realm.",
    },
    "pets_index" => OperationDescriptor {
        name: "pets_index",
        path: "/pet/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching pet index.",
    },
    "pet" => OperationDescriptor {
        name: "pet",
        path: "/pet/{pet_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified pet.",
    },
    "playable_class_index" => OperationDescriptor {
        name: "playable_class_index",
        path: "/playable-class/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching playable class index.",
    },
    "playable_class" => OperationDescriptor {
        name: "playable_class",
        path: "/playable-class/{playable_class_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified playable class.",
    },
    "playable_class_media" => OperationDescriptor {
        name: "playable_class_media",
        path: "/media/playable-class/{playable_class_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified playable class media.",
    },
    "playable_class_pvp_talent_slots" => OperationDescriptor {
        name: "playable_class_pvp_talent_slots",
        path: "/playable-class/{playable_class_id}/pvp-talent-slots",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified playable class pvp talent slots.",
    },
    "playable_race_index" => OperationDescriptor {
        name: "playable_race_index",
        path: "/playable-race/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching playable race index.",
    },
    "playable_race" => OperationDescriptor {
        name: "playable_race",
        path: "/playable-race/{playable_race_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified playable race.",
    },
    "playable_specialization_index" => OperationDescriptor {
        name: "playable_specialization_index",
        path: "/playable-specialization/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching playable specialization index.",
    },
    "playable_specialization" => OperationDescriptor {
        name: "playable_specialization",
        path: "/playable-specialization/{playable_specialization_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified playable specialization.",
    },
    "power_types_index" => OperationDescriptor {
        name: "power_types_index",
        path: "/power-type/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching power type index.",
    },
    "power_type" => OperationDescriptor {
        name: "power_type",
        path: "/power-type/{power_type_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified power type.",
    },
    "pvp_seasons_index" => OperationDescriptor {
        name: "pvp_seasons_index",
        path: "/pvp-season/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching pvp season index.",
    },
    "pvp_season" => OperationDescriptor {
        name: "pvp_season",
        path: "/pvp-season/{pvp_season_id}",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching specified pvp season.",
    },
    "pvp_leaderboards_index" => OperationDescriptor {
        name: "pvp_leaderboards_index",
        path: "/pvp-season/{pvp_season_id}/pvp-leaderboard/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching pvp season leaderboard index.",
    },
    "pvp_leaderboard" => OperationDescriptor {
        name: "pvp_leaderboard",
        path: "/pvp-season/{pvp_season_id}/pvp-leaderboard/{pvp_bracket}",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching specified pvp season leaderboard.",
    },
    "pvp_rewards_index" => OperationDescriptor {
        name: "pvp_rewards_index",
        path: "/pvp-season/{pvp_season_id}/pvp-reward/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching pvp reward index.",
    },
    "pvp_tier_media" => OperationDescriptor {
        name: "pvp_tier_media",
        path: "/media/pvp-tier/{pvp_tier_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified pvp tier media.",
    },
    "pvp_tiers_index" => OperationDescriptor {
        name: "pvp_tiers_index",
        path: "/pvp-tier/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching pvp tier index.",
    },
    "pvp_tier" => OperationDescriptor {
        name: "pvp_tier",
        path: "/pvp-tier/{pvp_tier_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified pvp tier.",
    },
    "realms_index" => OperationDescriptor {
        name: "realms_index",
        path: "/realm/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching realm index.",
    },
    "realm" => OperationDescriptor {
        name: "realm",
        path: "/realm/{realm_slug}",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching specified realm.",
    },
    "regions_index" => OperationDescriptor {
        name: "regions_index",
        path: "/region/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching region index.",
    },
    "region" => OperationDescriptor {
        name: "region",
        path: "/region/{region_id}",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching specified region.",
    },
    "reputation_factions_index" => OperationDescriptor {
        name: "reputation_factions_index",
        path: "/reputation-faction/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching reputation faction index.",
    },
    "reputation_faction" => OperationDescriptor {
        name: "reputation_faction",
        path: "/reputation-faction/{reputation_faction_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified reputation faction.",
    },
    "reputation_tiers_index" => OperationDescriptor {
        name: "reputation_tiers_index",
        path: "/reputation-tiers/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching reputation tiers index.",
    },
    "reputation_tiers" => OperationDescriptor {
        name: "reputation_tiers",
        path: "/reputation-tiers/{reputation_tiers_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified reputation tiers.",
    },
    "titles_index" => OperationDescriptor {
        name: "titles_index",
        path: "/title/index",
        namespace: NamespaceKind::Static,
        label: "Error fetching title index.",
    },
    "title" => OperationDescriptor {
        name: "title",
        path: "/title/{title_id}",
        namespace: NamespaceKind::Static,
        label: "Error fetching specified title.",
    },
    "wow_token_index" => OperationDescriptor {
        name: "wow_token_index",
        path: "/token/index",
        namespace: NamespaceKind::Dynamic,
        label: "Error fetching token index.",
    },
};

/// The two namespace strings for an origin, `static-<origin>` and `dynamic-<origin>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespaces {
    static_namespace: String,
    dynamic_namespace: String,
}

impl Namespaces {
    #[must_use]
    pub fn for_origin(origin: &str) -> Self {
        Self {
            static_namespace: format!("{}-{origin}", NamespaceKind::Static),
            dynamic_namespace: format!("{}-{origin}", NamespaceKind::Dynamic),
        }
    }

    #[must_use]
    pub fn get(&self, kind: NamespaceKind) -> &str {
        match kind {
            NamespaceKind::Static => &self.static_namespace,
            NamespaceKind::Dynamic => &self.dynamic_namespace,
        }
    }
}
