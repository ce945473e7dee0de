//! Shared on-disk fixtures for the content integration tests.

use std::path::Path;

use tempfile::TempDir;

pub const CHARACTERS_JSON: &str = r#"[
  {
    "id": "infernus",
    "name": "Infernus",
    "baseStats": {
      "health": 550,
      "healthRegen": 2,
      "bulletDamage": 6,
      "fireRate": 10,
      "clipSize": 30,
      "reloadTime": 2.5,
      "moveSpeed": 6.8,
      "sprintSpeed": 2
    },
    "abilities": [
      {
        "id": "catalyst",
        "name": "Catalyst",
        "type": "basic",
        "baseDamage": 50,
        "spiritScaling": 0.5,
        "cooldown": 30,
        "duration": 8,
        "upgrades": ["+10 Damage", "-8s Cooldown", { "description": "+25 Damage" }]
      },
      {
        "id": "flame_dash",
        "name": "Flame Dash",
        "type": "basic",
        "upgrades": ["+1s Duration", "+20 DPS", "Leaves a longer trail"]
      },
      {
        "id": "afterburn",
        "name": "Afterburn",
        "type": "basic",
        "baseDamage": 12,
        "spiritScaling": 0.1,
        "upgrades": ["+6 DPS", "Builds up faster", "+10 DPS"]
      },
      {
        "id": "concussive_combustion",
        "name": "Concussive Combustion",
        "type": "ultimate",
        "baseDamage": 150,
        "spiritScaling": 1.0,
        "upgrades": ["+50 Damage", "+0.5s Duration", "-40s Cooldown"]
      }
    ]
  },
  {
    "id": "haze",
    "name": "Haze",
    "baseStats": { "health": 500, "bulletDamage": 4, "fireRate": 12, "clipSize": 40, "stamina": 2 },
    "abilities": []
  }
]"#;

pub const ITEMS_JSON: &str = r#"[
  { "id": "headshot_booster", "name": "Headshot Booster", "category": "weapon", "cost": 500, "tier": 1,
    "stats": { "weaponDamage": 0.06 } },
  { "id": "hollow_point", "name": "Hollow Point", "category": "weapon", "cost": 1250, "tier": 2,
    "stats": { "weaponDamage": 0.2 } },
  { "id": "bullet_armor", "name": "Bullet Armor", "category": "vitality", "cost": 1250, "tier": 2,
    "stats": { "bulletResist": 0.25, "health": 100 } },
  { "id": "mystic_burst", "name": "Mystic Burst", "category": "spirit", "cost": 500, "tier": 1,
    "stats": { "spiritPower": 6 } },
  { "id": "improved_spirit", "name": "Improved Spirit", "category": "spirit", "cost": 1250, "tier": 2,
    "stats": { "spiritPower": 10 } },
  { "id": "superior_duration", "name": "Superior Duration", "category": "spirit", "cost": 3000, "tier": 3,
    "stats": { "abilityDuration": 0.2, "spiritPower": 12 } },
  { "id": "healing_nova", "name": "Healing Nova", "category": "vitality", "cost": 1250, "tier": 2,
    "passive": { "description": "Heals nearby allies" },
    "active": { "description": "Burst heal", "cooldown": 45 } }
]"#;

pub const ITEMS_RON: &str = r#"[
    (id: "mystic_burst", name: "Mystic Burst", category: spirit, cost: 500, stats: {"spiritPower": 6.0}),
    (id: "extra_health", name: "Extra Health", category: vitality, cost: 500, tier: 1, stats: {"health": 75.0}),
]"#;

pub fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("fixture should be writable");
}

/// Data directory with JSON characters and items.
pub fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "characters.json", CHARACTERS_JSON);
    write(dir.path(), "items.json", ITEMS_JSON);
    dir
}
