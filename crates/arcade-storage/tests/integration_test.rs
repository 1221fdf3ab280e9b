//! Integration tests for arcade-storage crate.
//!
//! These exercise the watchlist and channel routing stores against a real
//! database file, including reopening and concurrent writers.

use arcade_common::test_utils::{
    create_temp_dir, discord_fixtures, init_test_logging, property_testing,
};
use arcade_common::{ChannelId, Topic};
use arcade_storage::{Store, StoreOptions, WatchOutcome};
use proptest::prelude::*;
use std::sync::Arc;

fn open(dir: &tempfile::TempDir) -> Store {
    init_test_logging();
    Store::open(dir.path().join("bot.sqlite"), StoreOptions::default()).unwrap()
}

#[test]
fn test_initialize_twice_keeps_rows() {
    let dir = create_temp_dir();
    let store = open(&dir);
    let server = discord_fixtures::test_server_id();

    store.watch(server, "VALORANT").unwrap();
    store
        .set_channel(server, Topic::Drops, discord_fixtures::test_channel_id())
        .unwrap();

    store.initialize().unwrap();
    store.initialize().unwrap();

    assert_eq!(store.list(server).unwrap(), vec!["VALORANT"]);
    assert_eq!(
        store.get_channel(server, Topic::Drops).unwrap(),
        Some(discord_fixtures::test_channel_id())
    );
}

#[test]
fn test_data_survives_reopen() {
    let dir = create_temp_dir();
    let server = discord_fixtures::test_server_id();

    {
        let store = open(&dir);
        store.watch(server, "Apex").unwrap();
    }

    let store = open(&dir);
    assert_eq!(store.list(server).unwrap(), vec!["Apex"]);
}

#[test]
fn test_watch_duplicate_returns_already_watching() {
    let dir = create_temp_dir();
    let store = open(&dir);
    let server = discord_fixtures::test_server_id();

    assert_eq!(store.watch(server, "Apex").unwrap(), WatchOutcome::Added);
    assert_eq!(
        store.watch(server, "Apex").unwrap(),
        WatchOutcome::AlreadyWatching
    );
    assert_eq!(store.list(server).unwrap().len(), 1);
}

#[test]
fn test_watch_unwatch_roundtrip() {
    let dir = create_temp_dir();
    let store = open(&dir);
    let server = discord_fixtures::test_server_id();

    store.watch(server, "VALORANT").unwrap();
    let games = store.list(server).unwrap();
    assert_eq!(games.iter().filter(|g| *g == "VALORANT").count(), 1);

    assert!(store.unwatch(server, "VALORANT").unwrap());
    assert!(!store.list(server).unwrap().contains(&"VALORANT".to_string()));
}

#[test]
fn test_list_is_sorted() {
    let dir = create_temp_dir();
    let store = open(&dir);
    let server = discord_fixtures::test_server_id();

    store.watch(server, "Zelda").unwrap();
    store.watch(server, "Apex").unwrap();

    assert_eq!(store.list(server).unwrap(), vec!["Apex", "Zelda"]);
}

#[test]
fn test_servers_are_isolated() {
    let dir = create_temp_dir();
    let store = open(&dir);
    let a = discord_fixtures::test_server_id();
    let b = discord_fixtures::other_server_id();

    store.watch(a, "Apex").unwrap();
    store.set_channel(a, Topic::Deals, ChannelId(5)).unwrap();

    assert!(store.list(b).unwrap().is_empty());
    assert_eq!(store.get_channel(b, Topic::Deals).unwrap(), None);
    assert!(!store.unwatch(b, "Apex").unwrap());
    assert_eq!(store.list(a).unwrap(), vec!["Apex"]);
}

#[test]
fn test_set_channel_last_write_wins() {
    let dir = create_temp_dir();
    let store = open(&dir);
    let server = discord_fixtures::test_server_id();

    store.set_channel(server, Topic::Deals, ChannelId(111)).unwrap();
    store.set_channel(server, Topic::Deals, ChannelId(222)).unwrap();

    assert_eq!(
        store.get_channel(server, Topic::Deals).unwrap(),
        Some(ChannelId(222))
    );
}

#[test]
fn test_get_unset_channel_is_none() {
    let dir = create_temp_dir();
    let store = open(&dir);

    assert_eq!(
        store
            .get_channel(discord_fixtures::test_server_id(), Topic::Drops)
            .unwrap(),
        None
    );
}

#[test]
fn test_unwatch_absent_entry() {
    let dir = create_temp_dir();
    let store = open(&dir);
    let server = discord_fixtures::test_server_id();
    store.watch(server, "Apex").unwrap();

    assert!(!store.unwatch(server, "nonexistent").unwrap());
    assert_eq!(store.list(server).unwrap(), vec!["Apex"]);
}

#[test]
fn test_concurrent_watch_inserts_once() {
    let dir = create_temp_dir();
    let store = Arc::new(open(&dir));
    let server = discord_fixtures::test_server_id();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.watch(server, "Helldivers 2").unwrap())
        })
        .collect();

    let added = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|outcome| outcome.is_added())
        .count();

    assert_eq!(added, 1);
    assert_eq!(store.list(server).unwrap(), vec!["Helldivers 2"]);
}

#[tokio::test]
async fn test_async_run_wrapper() {
    let dir = create_temp_dir();
    let store = open(&dir);
    let server = discord_fixtures::test_server_id();

    let outcome = store
        .run(move |store| store.watch(server, "Apex"))
        .await
        .unwrap();
    assert!(outcome.is_added());

    let games = store.run(move |store| store.list(server)).await.unwrap();
    assert_eq!(games, vec!["Apex"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_entries_stay_within_their_server(
        owner in property_testing::server_id_strategy(),
        other in property_testing::server_id_strategy(),
        game in property_testing::game_name_strategy(),
    ) {
        prop_assume!(owner != other);
        let store = Store::in_memory().unwrap();

        prop_assert!(store.watch(owner, &game).unwrap().is_added());
        store
            .set_channel(owner, Topic::Drops, discord_fixtures::test_channel_id())
            .unwrap();

        prop_assert_eq!(store.list(owner).unwrap(), vec![game.clone()]);
        prop_assert!(store.list(other).unwrap().is_empty());
        prop_assert!(!store.unwatch(other, &game).unwrap());
        prop_assert_eq!(store.get_channel(other, Topic::Drops).unwrap(), None);
    }
}
