mod common;

use planner_content::{
    BuildFile, BuildLoader, CharacterLoader, ConfigLoader, ContentFactory, ItemLoader,
    TablesLoader,
};
use planner_core::{
    AbilityId, AbilityKind, AbilityUpgrades, BuildData, CharacterId, ItemCategory, ItemId,
    ItemLookup, SavedBuild, SlotPolicy, UpgradeEffect,
};
use tempfile::TempDir;

use common::{ITEMS_RON, data_dir, write};

#[test]
fn factory_loads_json_datasets() {
    let dir = data_dir();
    let factory = ContentFactory::new(dir.path());

    let characters = factory.load_characters().unwrap();
    assert_eq!(characters.len(), 2);

    let infernus = &characters[0];
    assert_eq!(infernus.base_stats.health, 550.0);
    assert_eq!(infernus.base_stats.stamina, None);
    assert_eq!(infernus.abilities.len(), 4);
    assert_eq!(
        infernus.ultimate().map(|a| a.id.as_str()),
        Some("concussive_combustion")
    );

    // Upgrade text is classified once, at load
    let catalyst = &infernus.abilities[0];
    assert_eq!(catalyst.kind, AbilityKind::Basic);
    assert_eq!(catalyst.upgrades[0].effect, UpgradeEffect::DamageBonus(10));
    assert!(!catalyst.upgrades[1].effect.is_modelled());
    assert_eq!(catalyst.upgrades[2].effect, UpgradeEffect::DamageBonus(25));
    assert_eq!(
        infernus.abilities[1].upgrades[0].effect,
        UpgradeEffect::DurationBonus(1.0)
    );

    let haze = factory.load_character(&CharacterId::new("haze")).unwrap();
    assert_eq!(haze.base_stats.stamina, Some(2.0));
    assert_eq!(haze.base_stats.health_regen, 0.0);

    let catalog = factory.load_catalog().unwrap();
    assert_eq!(catalog.len(), 7);
    let armor = catalog.item(&ItemId::new("bullet_armor")).unwrap();
    assert_eq!(armor.category, ItemCategory::Vitality);
    assert_eq!(armor.stats.get("bulletResist"), Some(&0.25));
    assert!(
        catalog
            .item(&ItemId::new("healing_nova"))
            .unwrap()
            .has_conflicting_effects()
    );
}

#[test]
fn unknown_character_is_an_error() {
    let dir = data_dir();
    let err = CharacterLoader::load_one(
        &dir.path().join("characters.json"),
        &CharacterId::new("nobody"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("nobody"));
}

#[test]
fn ron_items_load_by_extension() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "items.ron", ITEMS_RON);

    let items = ItemLoader::load(&dir.path().join("items.ron")).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].category, ItemCategory::Spirit);
    assert_eq!(items[0].tier, 1);
    assert_eq!(items[1].stats.get("health"), Some(&75.0));

    // The factory falls back to RON when no JSON dataset exists
    let catalog = ContentFactory::new(dir.path()).load_catalog().unwrap();
    assert!(catalog.item(&ItemId::new("extra_health")).is_some());
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "items.yaml", "- id: x");
    let err = ItemLoader::load(&dir.path().join("items.yaml")).unwrap_err();
    assert!(err.to_string().contains("expected .json or .ron"));
}

#[test]
fn malformed_dataset_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "items.json", r#"[{ "id": "x" }]"#);
    let err = ItemLoader::load(&dir.path().join("items.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to parse item dataset JSON"));
}

#[test]
fn config_and_tables_from_toml() {
    let dir = data_dir();
    write(
        dir.path(),
        "config.toml",
        r#"
slot_policy = "strict"
enforce_point_budget = true

[tables]
slot_unlock_thresholds = [2000, 5000, 8000]
"#,
    );

    let config = ConfigLoader::load(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.slot_policy, SlotPolicy::Strict);
    assert!(config.enforce_point_budget);
    assert_eq!(config.tables.slot_unlock_thresholds, [2000, 5000, 8000]);
    // Untouched tables keep live values
    assert_eq!(config.tables.upgrade_costs, [1, 2, 5]);
    assert_eq!(config.tables.ability_point_milestones.len(), 12);

    write(
        dir.path(),
        "tables.toml",
        r#"
investment_breakpoints = [500, 1500, 4000, 9000]
health_bonus = [40, 100, 200, 350]
"#,
    );
    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    assert_eq!(config.slot_policy, SlotPolicy::Strict);
    assert_eq!(config.tables.investment_breakpoints, [500, 1500, 4000, 9000]);
    assert_eq!(config.tables.health_bonus, [40.0, 100.0, 200.0, 350.0]);
    // tables.toml replaces the config tables wholesale
    assert_eq!(config.tables.slot_unlock_thresholds, [3000, 6000, 9000]);
}

#[test]
fn non_ascending_tables_are_rejected() {
    let err = TablesLoader::parse("slot_unlock_thresholds = [3000, 3000, 9000]").unwrap_err();
    assert!(err.to_string().contains("slot_unlock_thresholds"));

    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "config.toml",
        "[tables]\ninvestment_breakpoints = [800, 700, 5600, 12000]\n",
    );
    assert!(ConfigLoader::load(&dir.path().join("config.toml")).is_err());
}

#[test]
fn saved_builds_round_trip_through_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("build.json");

    let mut slots = vec![None; 12];
    slots[0] = Some(ItemId::new("hollow_point"));
    slots[9] = Some(ItemId::new("superior_duration"));
    let upgrades: AbilityUpgrades = [(AbilityId::new("catalyst"), 2)].into_iter().collect();
    let saved = SavedBuild {
        character: CharacterId::new("infernus"),
        slots: BuildData::Slots(slots),
        upgrades,
    };

    BuildLoader::save(&path, &saved).unwrap();
    let loaded = BuildLoader::load(&path).unwrap();
    assert_eq!(loaded, BuildFile::Saved(saved));
    assert_eq!(loaded.character(), Some(&CharacterId::new("infernus")));
}

#[test]
fn bare_and_legacy_build_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bare.json", r#"["mystic_burst", null, "hollow_point"]"#);
    write(
        dir.path(),
        "legacy.json",
        r#"{ "weapon": ["hollow_point"], "spirit": ["mystic_burst"], "flex": [] }"#,
    );

    let bare = BuildLoader::load(&dir.path().join("bare.json")).unwrap();
    assert!(bare.character().is_none());
    let saved = bare.into_saved(CharacterId::new("haze"));
    assert_eq!(saved.character, CharacterId::new("haze"));
    assert!(saved.upgrades.is_empty());

    match BuildLoader::load(&dir.path().join("legacy.json")).unwrap() {
        BuildFile::Bare(data) => {
            assert!(data.is_legacy());
            let normalized = data.normalize();
            assert_eq!(normalized.slots[0], Some(ItemId::new("hollow_point")));
            assert_eq!(normalized.slots[1], Some(ItemId::new("mystic_burst")));
        }
        other => panic!("expected bare legacy build, got {other:?}"),
    }
}

#[test]
fn malformed_build_files_are_rejected() {
    let dir = TempDir::new().unwrap();
    // Saved build without its character
    write(
        dir.path(),
        "headless.json",
        r#"{ "slots": ["hollow_point", "mystic_burst"], "upgrades": { "catalyst": 2 } }"#,
    );
    write(
        dir.path(),
        "typo.json",
        r#"{ "character": "infernus", "slot": ["hollow_point"] }"#,
    );

    for name in ["headless.json", "typo.json"] {
        let err = BuildLoader::load(&dir.path().join(name)).unwrap_err();
        assert!(err.to_string().contains(name), "{err}");
    }
}
