#![allow(clippy::unwrap_used, reason = "tests can panic on unwrap")]

mod common;

mod scenarios {
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use wow_game_data_sdk::game_data::PvpBracket;

    use crate::common::{ACCESS_TOKEN, DYNAMIC_US, LOCALE, STATIC_US, create_client};

    #[tokio::test]
    async fn item_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/wow/item/19019")
                .query_param("namespace", STATIC_US)
                .query_param("locale", LOCALE)
                .query_param("access_token", ACCESS_TOKEN);
            then.status(StatusCode::OK).json_body(json!({
                "id": 19019,
                "name": "Thunderfury, Blessed Blade of the Windseeker",
                "quality": { "type": "LEGENDARY", "name": "Legendary" },
                "level": 80
            }));
        });

        let response = client.item(19019).await?;

        assert_eq!(
            response,
            json!({
                "id": 19019,
                "name": "Thunderfury, Blessed Blade of the Windseeker",
                "quality": { "type": "LEGENDARY", "name": "Legendary" },
                "level": 80
            })
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn connected_realm_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/wow/connected-realm/1234")
                .query_param("namespace", DYNAMIC_US);
            then.status(StatusCode::OK)
                .json_body(json!({ "id": 1234, "has_queue": false }));
        });

        let response = client.connected_realm(1234).await?;

        assert_eq!(response["id"], 1234);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn pvp_leaderboard_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/wow/pvp-season/29/pvp-leaderboard/3v3")
                .query_param("namespace", DYNAMIC_US);
            then.status(StatusCode::OK).json_body(json!({
                "season": { "id": 29 },
                "name": "3v3",
                "bracket": { "id": 1, "type": "ARENA_3v3" },
                "entries": []
            }));
        });

        let response = client.pvp_leaderboard(29, PvpBracket::ThreeVsThree).await?;

        assert_eq!(response["bracket"]["type"], "ARENA_3v3");
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn realm_slug_with_space_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/wow/realm/area%2052")
                .query_param("namespace", DYNAMIC_US);
            then.status(StatusCode::OK).json_body(json!({ "slug": "area-52" }));
        });

        let response = client.realm("area 52").await?;

        assert_eq!(response["slug"], "area-52");
        mock.assert();

        Ok(())
    }
}

mod endpoints {
    use futures::FutureExt as _;
    use futures::future::LocalBoxFuture;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::{Value, json};
    use wow_game_data_sdk::Result;
    use wow_game_data_sdk::game_data::{Faction, PvpBracket};

    use crate::common::{ACCESS_TOKEN, DYNAMIC_US, LOCALE, STATIC_US, create_client};

    #[tokio::test]
    async fn every_endpoint_should_hit_its_path_and_namespace() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let calls: Vec<(&str, &str, LocalBoxFuture<'_, Result<Value>>)> = vec![
            (
                "/data/wow/achievement-category/index",
                STATIC_US,
                client.achievement_categories_index().boxed_local(),
            ),
            (
                "/data/wow/achievement-category/101",
                STATIC_US,
                client.achievement_category(101).boxed_local(),
            ),
            (
                "/data/wow/achievement/index",
                STATIC_US,
                client.achievement_index().boxed_local(),
            ),
            (
                "/data/wow/achievement/102",
                STATIC_US,
                client.achievement(102).boxed_local(),
            ),
            (
                "/data/wow/media/achievement/103",
                STATIC_US,
                client.achievement_media(103).boxed_local(),
            ),
            (
                "/data/wow/azerite-essence/index",
                STATIC_US,
                client.azerite_essence_index().boxed_local(),
            ),
            (
                "/data/wow/azerite-essence/104",
                STATIC_US,
                client.azerite_essence(104).boxed_local(),
            ),
            (
                "/data/wow/media/azerite-essence/105",
                STATIC_US,
                client.azerite_essence_media(105).boxed_local(),
            ),
            (
                "/data/wow/connected-realm/index",
                DYNAMIC_US,
                client.connected_realms_index().boxed_local(),
            ),
            (
                "/data/wow/connected-realm/106",
                DYNAMIC_US,
                client.connected_realm(106).boxed_local(),
            ),
            (
                "/data/wow/creature-family/index",
                STATIC_US,
                client.creature_families_index().boxed_local(),
            ),
            (
                "/data/wow/creature-family/107",
                STATIC_US,
                client.creature_family(107).boxed_local(),
            ),
            (
                "/data/wow/creature-type/index",
                STATIC_US,
                client.creature_types_index().boxed_local(),
            ),
            (
                "/data/wow/creature-type/108",
                STATIC_US,
                client.creature_type(108).boxed_local(),
            ),
            (
                "/data/wow/creature/109",
                STATIC_US,
                client.creature(109).boxed_local(),
            ),
            (
                "/data/wow/media/creature-display/110",
                STATIC_US,
                client.creature_display_media(110).boxed_local(),
            ),
            (
                "/data/wow/media/creature-family/111",
                STATIC_US,
                client.creature_family_media(111).boxed_local(),
            ),
            (
                "/data/wow/guild-crest/index",
                STATIC_US,
                client.guild_crest_components_index().boxed_local(),
            ),
            (
                "/data/wow/guild-crest/border/112",
                STATIC_US,
                client.guild_crest_border_media(112).boxed_local(),
            ),
            (
                "/data/wow/guild-crest/emblem/113",
                STATIC_US,
                client.guild_crest_emblem_media(113).boxed_local(),
            ),
            (
                "/data/wow/item-class/index",
                STATIC_US,
                client.item_classes_index().boxed_local(),
            ),
            (
                "/data/wow/item-class/114",
                STATIC_US,
                client.item_class(114).boxed_local(),
            ),
            (
                "/data/wow/item-class/115/item-subclass/116",
                STATIC_US,
                client.item_subclass(115, 116).boxed_local(),
            ),
            (
                "/data/wow/item/117",
                STATIC_US,
                client.item(117).boxed_local(),
            ),
            (
                "/data/wow/media/item/118",
                STATIC_US,
                client.item_media(118).boxed_local(),
            ),
            (
                "/data/wow/keystone-affix/index",
                STATIC_US,
                client.mythic_keystone_affixes_index().boxed_local(),
            ),
            (
                "/data/wow/keystone-affix/119",
                STATIC_US,
                client.mythic_keystone_affix(119).boxed_local(),
            ),
            (
                "/data/wow/leaderboard/hall-of-fame/uldir/alliance",
                DYNAMIC_US,
                client.mythic_raid_leaderboard("uldir", Faction::Alliance).boxed_local(),
            ),
            (
                "/data/wow/mount/index",
                STATIC_US,
                client.mounts_index().boxed_local(),
            ),
            (
                "/data/wow/mount/120",
                STATIC_US,
                client.mount(120).boxed_local(),
            ),
            (
                "/data/wow/mythic-keystone/dungeon/index",
                DYNAMIC_US,
                client.mythic_keystone_dungeons_index().boxed_local(),
            ),
            (
                "/data/wow/mythic-keystone/dungeon/121",
                DYNAMIC_US,
                client.mythic_keystone_dungeon(121).boxed_local(),
            ),
            (
                "/data/wow/mythic-keystone/index",
                DYNAMIC_US,
                client.mythic_keystone_index().boxed_local(),
            ),
            (
                "/data/wow/mythic-keystone/period/index",
                DYNAMIC_US,
                client.mythic_keystone_periods_index().boxed_local(),
            ),
            (
                "/data/wow/mythic-keystone/period/122",
                DYNAMIC_US,
                client.mythic_keystone_period(122).boxed_local(),
            ),
            (
                "/data/wow/mythic-keystone/season/index",
                DYNAMIC_US,
                client.mythic_keystone_seasons_index().boxed_local(),
            ),
            (
                "/data/wow/mythic-keystone/season/123",
                DYNAMIC_US,
                client.mythic_keystone_season(123).boxed_local(),
            ),
            (
                "/data/wow/connected-realm/124/mythic-leaderboard/index",
                DYNAMIC_US,
                client.mythic_keystone_leaderboards_index(124).boxed_local(),
            ),
            (
                "/data/wow/connected-realm/125/mythic-leaderboard/126/period/127",
                DYNAMIC_US,
                client.mythic_keystone_leaderboard(125, 126, 127).boxed_local(),
            ),
            (
                "/data/wow/pet/index",
                STATIC_US,
                client.pets_index().boxed_local(),
            ),
            (
                "/data/wow/pet/128",
                STATIC_US,
                client.pet(128).boxed_local(),
            ),
            (
                "/data/wow/playable-class/index",
                STATIC_US,
                client.playable_class_index().boxed_local(),
            ),
            (
                "/data/wow/playable-class/129",
                STATIC_US,
                client.playable_class(129).boxed_local(),
            ),
            (
                "/data/wow/media/playable-class/130",
                STATIC_US,
                client.playable_class_media(130).boxed_local(),
            ),
            (
                "/data/wow/playable-class/131/pvp-talent-slots",
                STATIC_US,
                client.playable_class_pvp_talent_slots(131).boxed_local(),
            ),
            (
                "/data/wow/playable-race/index",
                STATIC_US,
                client.playable_race_index().boxed_local(),
            ),
            (
                "/data/wow/playable-race/132",
                STATIC_US,
                client.playable_race(132).boxed_local(),
            ),
            (
                "/data/wow/playable-specialization/index",
                STATIC_US,
                client.playable_specialization_index().boxed_local(),
            ),
            (
                "/data/wow/playable-specialization/133",
                STATIC_US,
                client.playable_specialization(133).boxed_local(),
            ),
            (
                "/data/wow/power-type/index",
                STATIC_US,
                client.power_types_index().boxed_local(),
            ),
            (
                "/data/wow/power-type/134",
                STATIC_US,
                client.power_type(134).boxed_local(),
            ),
            (
                "/data/wow/pvp-season/index",
                DYNAMIC_US,
                client.pvp_seasons_index().boxed_local(),
            ),
            (
                "/data/wow/pvp-season/135",
                DYNAMIC_US,
                client.pvp_season(135).boxed_local(),
            ),
            (
                "/data/wow/pvp-season/136/pvp-leaderboard/index",
                DYNAMIC_US,
                client.pvp_leaderboards_index(136).boxed_local(),
            ),
            (
                "/data/wow/pvp-season/137/pvp-leaderboard/3v3",
                DYNAMIC_US,
                client.pvp_leaderboard(137, PvpBracket::ThreeVsThree).boxed_local(),
            ),
            (
                "/data/wow/pvp-season/138/pvp-reward/index",
                DYNAMIC_US,
                client.pvp_rewards_index(138).boxed_local(),
            ),
            (
                "/data/wow/media/pvp-tier/139",
                STATIC_US,
                client.pvp_tier_media(139).boxed_local(),
            ),
            (
                "/data/wow/pvp-tier/index",
                STATIC_US,
                client.pvp_tiers_index().boxed_local(),
            ),
            (
                "/data/wow/pvp-tier/140",
                STATIC_US,
                client.pvp_tier(140).boxed_local(),
            ),
            (
                "/data/wow/realm/index",
                DYNAMIC_US,
                client.realms_index().boxed_local(),
            ),
            (
                "/data/wow/realm/tichondrius",
                DYNAMIC_US,
                client.realm("tichondrius").boxed_local(),
            ),
            (
                "/data/wow/region/index",
                DYNAMIC_US,
                client.regions_index().boxed_local(),
            ),
            (
                "/data/wow/region/141",
                DYNAMIC_US,
                client.region(141).boxed_local(),
            ),
            (
                "/data/wow/reputation-faction/index",
                STATIC_US,
                client.reputation_factions_index().boxed_local(),
            ),
            (
                "/data/wow/reputation-faction/142",
                STATIC_US,
                client.reputation_faction(142).boxed_local(),
            ),
            (
                "/data/wow/reputation-tiers/index",
                STATIC_US,
                client.reputation_tiers_index().boxed_local(),
            ),
            (
                "/data/wow/reputation-tiers/143",
                STATIC_US,
                client.reputation_tiers(143).boxed_local(),
            ),
            (
                "/data/wow/title/index",
                STATIC_US,
                client.titles_index().boxed_local(),
            ),
            (
                "/data/wow/title/144",
                STATIC_US,
                client.title(144).boxed_local(),
            ),
            (
                "/data/wow/token/index",
                DYNAMIC_US,
                client.wow_token_index().boxed_local(),
            ),
        ];

        assert_eq!(calls.len(), 70);

        for (path, namespace, call) in calls {
            let mock = server.mock(|when, then| {
                when.method(GET)
                    .path(path)
                    .query_param("namespace", namespace)
                    .query_param("locale", LOCALE)
                    .query_param("access_token", ACCESS_TOKEN);
                then.status(StatusCode::OK).json_body(json!({ "path": path }));
            });

            let response = call.await?;

            assert_eq!(response, json!({ "path": path }), "{path}");
            mock.assert();
        }

        Ok(())
    }

    #[tokio::test]
    async fn mythic_raid_leaderboard_should_render_faction() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/wow/leaderboard/hall-of-fame/uldir/horde")
                .query_param("namespace", DYNAMIC_US);
            then.status(StatusCode::OK)
                .json_body(json!({ "faction": { "type": "HORDE" } }));
        });

        let response = client.mythic_raid_leaderboard("uldir", Faction::Horde).await?;

        assert_eq!(response["faction"]["type"], "HORDE");
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn execute_by_name_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/wow/item/19019")
                .query_param("namespace", STATIC_US);
            then.status(StatusCode::OK).json_body(json!({ "id": 19019 }));
        });

        let response = client.execute("item", &[("item_id", "19019".into())]).await?;

        assert_eq!(response, json!({ "id": 19019 }));
        mock.assert();

        Ok(())
    }
}

mod defaults {
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use wow_game_data_sdk::game_data::{Client, Config, DefaultParams, Origin};

    #[tokio::test]
    async fn reserved_characters_in_defaults_should_be_encoded() -> anyhow::Result<()> {
        let server = MockServer::start();
        let config = Config::builder()
            .origin(Origin::Us)
            .host(server.base_url())
            .params(
                DefaultParams::new()
                    .locale("en_US")
                    .access_token("US+tok&en=1".to_owned()),
            )
            .build();
        let client = Client::new(config)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/wow/mount/6")
                .query_param("namespace", "static-us")
                .query_param("locale", "en_US")
                .query_param("access_token", "US+tok&en=1")
                .query_param_missing("en");
            then.status(StatusCode::OK).json_body(json!({ "id": 6 }));
        });

        let response = client.mount(6).await?;

        assert_eq!(response["id"], 6);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn defaults_should_be_sent_verbatim() -> anyhow::Result<()> {
        let server = MockServer::start();
        let config = Config::builder()
            .origin(Origin::Kr)
            .host(server.base_url())
            .params(
                DefaultParams::new()
                    .locale("ko_KR")
                    .region("kr")
                    .param("orderby", "id"),
            )
            .build();
        let client = Client::new(config)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/wow/token/index")
                .query_param("namespace", "dynamic-kr")
                .query_param("locale", "ko_KR")
                .query_param("region", "kr")
                .query_param("orderby", "id");
            then.status(StatusCode::OK)
                .json_body(json!({ "price": 1_234_560_000 }));
        });

        let response = client.wow_token_index().await?;

        assert_eq!(response["price"], 1_234_560_000_u64);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn default_namespace_should_not_override_endpoint_namespace() -> anyhow::Result<()> {
        let server = MockServer::start();
        let config = Config::builder()
            .origin(Origin::Us)
            .host(server.base_url())
            .params(DefaultParams::new().param("namespace", "profile-us"))
            .build();
        let client = Client::new(config)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/wow/title/index")
                .query_param("namespace", "static-us");
            then.status(StatusCode::OK).json_body(json!({ "titles": [] }));
        });

        client.titles_index().await?;

        mock.assert();

        Ok(())
    }
}

mod failures {
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use wow_game_data_sdk::error::{EndpointCall, Kind, Status};
    use wow_game_data_sdk::game_data::{Client, Config, Origin};

    use crate::common::{STATIC_US, create_client, default_params};

    #[tokio::test]
    async fn not_found_should_be_wrapped() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/wow/item/999999999")
                .query_param("namespace", STATIC_US);
            then.status(StatusCode::NOT_FOUND)
                .json_body(json!({ "code": 404, "type": "BLZWEBAPI00000404", "detail": "Not Found" }));
        });

        let err = client.item(999_999_999).await.unwrap_err();

        assert_eq!(err.kind(), Kind::EndpointCall);
        assert_eq!(
            err.to_string(),
            "EndpointCall: WoW Game Data Error :: Error fetching specified item."
        );

        let call = err.downcast_ref::<EndpointCall>().unwrap();
        assert_eq!(call.label, "Error fetching specified item.");
        assert_eq!(call.cause().kind(), Kind::Status);

        let status = call.cause().downcast_ref::<Status>().unwrap();
        assert_eq!(status.status_code, StatusCode::NOT_FOUND);
        assert_eq!(status.path, "/data/wow/item/999999999");
        assert!(status.message.contains("BLZWEBAPI00000404"));

        mock.assert_calls(1);

        Ok(())
    }

    #[tokio::test]
    async fn server_error_should_not_be_retried() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/data/wow/region/index");
            then.status(StatusCode::SERVICE_UNAVAILABLE);
        });

        let err = client.regions_index().await.unwrap_err();

        assert_eq!(err.kind(), Kind::EndpointCall);
        assert!(err.to_string().ends_with("Error fetching region index."));
        mock.assert_calls(1);

        Ok(())
    }

    #[tokio::test]
    async fn connection_refused_should_be_wrapped() -> anyhow::Result<()> {
        let config = Config::builder()
            .origin(Origin::Us)
            .host("http://127.0.0.1:1")
            .params(default_params())
            .build();
        let client = Client::new(config)?;

        let err = client.mounts_index().await.unwrap_err();

        assert_eq!(err.kind(), Kind::EndpointCall);
        let call = err.downcast_ref::<EndpointCall>().unwrap();
        assert_eq!(call.operation, "mounts_index");
        assert_eq!(call.label, "Error fetching mount index.");
        assert_eq!(call.cause().kind(), Kind::Internal);
        assert!(call.cause().downcast_ref::<reqwest::Error>().is_some());

        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_should_be_wrapped() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = create_client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/data/wow/pet/39");
            then.status(StatusCode::OK).body("<html>maintenance</html>");
        });

        let err = client.pet(39).await.unwrap_err();

        assert_eq!(err.kind(), Kind::EndpointCall);
        let call = err.downcast_ref::<EndpointCall>().unwrap();
        assert_eq!(call.label, "Error fetching specified pet.");
        assert_eq!(call.cause().kind(), Kind::Internal);
        assert!(call.cause().downcast_ref::<serde_json::Error>().is_some());
        mock.assert();

        Ok(())
    }
}
