mod common;

use common::*;
use loadout_core::{
    ChangeFeed, ExternalChange, ItemCategory, ItemRef, LoadoutController, LoadoutEvent, Mode,
    SlotStates, Topic, ViewOptions,
};

#[test]
fn first_refresh_is_deferred_two_ticks() {
    init_tracing();
    let content = content();
    let session = session(50);
    let mut slots = SlotStates::new(rune_layout());
    let mut controller = LoadoutController::new(content.env(&session), &mut slots);

    controller.initialize(Mode::Adventure, ViewOptions::editable());
    controller.select_tab(ItemCategory::Rune);
    assert_eq!(controller.pending_refresh(), Some(2));
    assert!(controller.last_recalculation().is_none());

    assert!(controller.tick().expect("first tick").is_none());
    assert_eq!(controller.pending_refresh(), Some(1));

    let refreshed = controller
        .tick()
        .expect("second tick")
        .expect("deferred refresh ran");
    assert_eq!(refreshed.stats.level, 50);
    assert_eq!(controller.pending_refresh(), None);
    assert_eq!(controller.active_tab(), ItemCategory::Equipment);

    assert!(controller.tick().expect("idle tick").is_none());
}

#[test]
fn host_changes_trigger_a_refresh() {
    let content = content();
    let session = session(50);
    let feed = ChangeFeed::new();
    let mut slots = SlotStates::new(rune_layout());
    let mut controller =
        LoadoutController::new(content.env(&session), &mut slots).with_change_feed(feed.clone());
    let mut stats = controller.bus().subscribe(Topic::Stats);

    controller.initialize(Mode::Adventure, ViewOptions::editable());
    assert!(controller.is_subscribed());
    assert_eq!(feed.receiver_count(), 1);

    controller.tick().expect("tick");
    controller.tick().expect("tick");
    let _initial = stats.try_recv().expect("initial stats");

    assert!(controller.tick().expect("quiet tick").is_none());

    assert_eq!(feed.notify(ExternalChange::RuneStateChanged), 1);
    assert_eq!(feed.notify(ExternalChange::RuneSlotUnlockCountChanged(4)), 1);
    assert!(controller.tick().expect("dirty tick").is_some());

    // Both changes collapse into one refresh.
    assert!(stats.try_recv().is_ok());
    assert!(stats.try_recv().is_err());
}

#[test]
fn changes_before_the_deferred_refresh_wait_for_it() {
    let content = content();
    let session = session(50);
    let feed = ChangeFeed::new();
    let mut slots = SlotStates::new(rune_layout());
    let mut controller =
        LoadoutController::new(content.env(&session), &mut slots).with_change_feed(feed.clone());

    controller.initialize(Mode::Adventure, ViewOptions::editable());
    feed.notify(ExternalChange::RuneStateChanged);
    assert!(controller.tick().expect("first tick").is_none());
    assert!(controller.tick().expect("second tick").is_some());
}

#[test]
fn teardown_releases_the_subscription() {
    let content = content();
    let session = session(50);
    let feed = ChangeFeed::new();
    let mut slots = SlotStates::new(rune_layout());
    let mut controller =
        LoadoutController::new(content.env(&session), &mut slots).with_change_feed(feed.clone());

    controller.initialize(Mode::Adventure, ViewOptions::editable());
    controller.initialize(Mode::Adventure, ViewOptions::editable());
    assert_eq!(feed.receiver_count(), 1);

    controller.teardown();
    assert!(!controller.is_subscribed());
    assert_eq!(controller.pending_refresh(), None);
    assert_eq!(feed.receiver_count(), 0);
    assert_eq!(feed.notify(ExternalChange::RuneStateChanged), 0);
}

#[test]
fn initialize_clears_session_consumables() {
    let content = content();
    let session = session(50);
    let mut slots = SlotStates::new(rune_layout());
    let mut controller = LoadoutController::new(content.env(&session), &mut slots);

    controller.equip(food(0)).expect("food");
    controller.equip(weapon(WEAPON_A)).expect("weapon");
    assert_eq!(controller.consumables(Mode::Adventure).len(), 1);

    controller.initialize(Mode::Adventure, ViewOptions::editable());
    assert!(controller.consumables(Mode::Adventure).is_empty());
    // Persisted slots survive.
    assert!(controller.is_equipped(weapon(WEAPON_A)));
}

#[test]
fn avatar_info_view_ignores_tab_clicks() {
    let content = content();
    let session = session(50);
    let mut slots = SlotStates::new(rune_layout());
    let mut controller = LoadoutController::new(content.env(&session), &mut slots);

    controller.initialize(Mode::Adventure, ViewOptions::avatar_info());
    assert!(!controller.select_tab(ItemCategory::Costume));
    assert_eq!(controller.active_tab(), ItemCategory::Equipment);

    controller.initialize(Mode::Adventure, ViewOptions::editable());
    assert!(controller.select_tab(ItemCategory::Costume));
    assert_eq!(controller.active_tab(), ItemCategory::Costume);
}

#[test]
fn update_view_publishes_for_the_new_mode() {
    let content = content();
    let session = session(50);
    let mut slots = SlotStates::new(rune_layout());
    let mut controller = LoadoutController::new(content.env(&session), &mut slots);
    controller.equip(weapon(WEAPON_B)).expect("weapon");
    let mut stats = controller.bus().subscribe(Topic::Stats);

    let arena = controller
        .update_view(Mode::Arena)
        .expect("update view")
        .expect("row present");
    assert_eq!(controller.mode(), Mode::Arena);

    match stats.try_recv().expect("stats published") {
        LoadoutEvent::StatsRecalculated { mode, stats, .. } => {
            assert_eq!(mode, Mode::Arena);
            assert_eq!(stats, arena.stats);
        }
        other => panic!("unexpected event {other:?}"),
    }
    // Arena has nothing equipped yet.
    assert_eq!(arena.stats.get(loadout_core::StatKind::Atk), 69);
}

#[test]
fn switching_mode_cancels_a_foreign_pick() {
    let content = content();
    let session = session(50);
    let mut slots = SlotStates::new(rune_layout());
    let mut controller = LoadoutController::new(content.env(&session), &mut slots);

    for rune in [STAT_RUNE_A, STAT_RUNE_B, STAT_RUNE_C] {
        controller.equip(ItemRef::rune(rune)).expect("rune");
    }
    assert!(!controller.phase().is_idle());

    controller.update_view(Mode::Arena).expect("update view");
    assert!(controller.phase().is_idle());
}
