//! Shared fixtures for controller integration tests.
#![allow(dead_code)]

use loadout_core::{
    AvatarProfile, CharacterRow, ItemCategory, ItemDefinition, ItemId, ItemRef, ItemSubtype,
    ItemsSnapshot, LoadoutConfig, LoadoutSnapshot, RuneCategory, RuneId, RuneSlot, RuneSlotKind,
    SessionSnapshot, StatKind, StatMap, StatModifier, TablesSnapshot,
};
use tracing_subscriber::EnvFilter;

pub const CHARACTER: u32 = 100010;
pub const RING_THRESHOLD: u32 = LoadoutConfig::DEFAULT_RING_SLOT2_LEVEL;

pub const WEAPON_A: ItemId = ItemId(1);
pub const WEAPON_B: ItemId = ItemId(2);
pub const WEAPON_C: ItemId = ItemId(3);
pub const RING_WEAK: ItemId = ItemId(10);
pub const RING_MID: ItemId = ItemId(11);
pub const RING_STRONG: ItemId = ItemId(12);
pub const RING_LIMITED: ItemId = ItemId(13);
pub const ARMOR: ItemId = ItemId(20);
pub const BELT: ItemId = ItemId(21);
pub const FULL_COSTUME: ItemId = ItemId(30);
pub const TITLE: ItemId = ItemId(31);
pub const FOOD_FIRST: u64 = 40;
pub const AP_STONE: ItemId = ItemId(50);
pub const CRYSTAL: ItemId = ItemId(51);

pub const STAT_RUNE_A: RuneId = RuneId(10001);
pub const STAT_RUNE_B: RuneId = RuneId(10002);
pub const STAT_RUNE_C: RuneId = RuneId(10003);
pub const SKILL_RUNE: RuneId = RuneId(20001);
pub const UNOWNED_RUNE: RuneId = RuneId(30001);
pub const ROWLESS_RUNE: RuneId = RuneId(40001);

pub const GOLD: u64 = 500;

/// Installs a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn weapon(id: ItemId) -> ItemRef {
    ItemRef::equipment(id, ItemSubtype::Weapon)
}

pub fn ring(id: ItemId) -> ItemRef {
    ItemRef::equipment(id, ItemSubtype::Ring)
}

pub fn food(n: u64) -> ItemRef {
    ItemRef::consumable(ItemId(FOOD_FIRST + n))
}

fn equipment(id: ItemId, subtype: ItemSubtype, atk: i64) -> ItemDefinition {
    ItemDefinition::new(id, 10_000_000 + id.0 as u32, ItemCategory::Equipment, subtype)
        .with_stats(vec![StatModifier::add(StatKind::Atk, atk)])
}

pub fn items() -> ItemsSnapshot {
    let mut items = ItemsSnapshot::empty()
        .with(equipment(WEAPON_A, ItemSubtype::Weapon, 10))
        .with(equipment(WEAPON_B, ItemSubtype::Weapon, 20))
        .with(equipment(WEAPON_C, ItemSubtype::Weapon, 30))
        .with(equipment(RING_WEAK, ItemSubtype::Ring, 5))
        .with(equipment(RING_MID, ItemSubtype::Ring, 15))
        .with(equipment(RING_STRONG, ItemSubtype::Ring, 25))
        .with(equipment(RING_LIMITED, ItemSubtype::Ring, 99).with_required_level(99))
        .with(
            ItemDefinition::new(ARMOR, 10_200_000, ItemCategory::Equipment, ItemSubtype::Armor)
                .with_set(1),
        )
        .with(
            ItemDefinition::new(BELT, 10_300_000, ItemCategory::Equipment, ItemSubtype::Belt)
                .with_set(1),
        )
        .with(ItemDefinition::new(
            FULL_COSTUME,
            40_100_000,
            ItemCategory::Costume,
            ItemSubtype::FullCostume,
        ))
        .with(ItemDefinition::new(
            TITLE,
            49_900_001,
            ItemCategory::Costume,
            ItemSubtype::Title,
        ))
        .with(ItemDefinition::new(
            AP_STONE,
            500_000,
            ItemCategory::Material,
            ItemSubtype::ApStone,
        ))
        .with(ItemDefinition::new(
            CRYSTAL,
            400_000,
            ItemCategory::Material,
            ItemSubtype::Crystal,
        ));
    for n in 0..7 {
        items.insert(ItemDefinition::new(
            ItemId(FOOD_FIRST + n),
            201_000,
            ItemCategory::Consumable,
            ItemSubtype::Food,
        ));
    }
    items
}

pub fn tables() -> TablesSnapshot {
    TablesSnapshot::empty()
        .with_character(CharacterRow::new(
            CHARACTER,
            StatMap::from_pairs(&[
                (StatKind::Hp, 300),
                (StatKind::Atk, 20),
                (StatKind::Def, 10),
            ]),
            StatMap::from_pairs(&[(StatKind::Hp, 10), (StatKind::Atk, 1)]),
        ))
        .with_set_effect(1, 2, vec![StatModifier::add(StatKind::Def, 50)])
        .with_costume_stats(40_100_000, vec![StatModifier::add(StatKind::Hp, 100)])
        .with_rune(
            STAT_RUNE_A,
            RuneCategory::Stat,
            [(1, vec![StatModifier::percentage(StatKind::Hp, 10)])],
        )
        .with_rune(
            STAT_RUNE_B,
            RuneCategory::Stat,
            [(1, vec![StatModifier::add(StatKind::Atk, 5)])],
        )
        .with_rune(
            STAT_RUNE_C,
            RuneCategory::Stat,
            [(1, vec![StatModifier::add(StatKind::Def, 5)])],
        )
        .with_rune(SKILL_RUNE, RuneCategory::Skill, [])
}

pub fn content() -> LoadoutSnapshot {
    LoadoutSnapshot::new(items(), tables(), LoadoutConfig::default())
}

/// Two open stat slots, one open skill slot, one locked currency stat slot
/// and one locked stake skill slot.
pub fn rune_layout() -> Vec<RuneSlot> {
    vec![
        RuneSlot::open(0, RuneCategory::Stat, RuneSlotKind::Currency),
        RuneSlot::open(1, RuneCategory::Stat, RuneSlotKind::Currency),
        RuneSlot::open(2, RuneCategory::Skill, RuneSlotKind::Currency),
        RuneSlot::locked(3, RuneCategory::Stat, RuneSlotKind::Currency),
        RuneSlot::locked(4, RuneCategory::Skill, RuneSlotKind::Stake),
    ]
}

pub fn session(level: u32) -> SessionSnapshot {
    SessionSnapshot::new(AvatarProfile::new(CHARACTER, level))
        .with_rune(STAT_RUNE_A, 1)
        .with_rune(STAT_RUNE_B, 1)
        .with_rune(STAT_RUNE_C, 1)
        .with_rune(SKILL_RUNE, 1)
        .with_rune(ROWLESS_RUNE, 1)
        .with_gold(GOLD)
}
