#![allow(clippy::disallowed_methods)]

//! Full reveal and maintenance scenarios: repositories feeding the
//! client-side interrupt core.

mod common;

use std::error::Error;

use vault_core::interrupt::{
    ALERT_DURATION_MS, DedupStore, MaintenanceGate, MemoryKv, MESSAGE_DURATION_MS, RevealPhase,
    RevealSequencer,
};
use vault_core::{Broadcast, DEFAULT_ADMIN_EMAIL, Priority, Viewer};

use db::repositories::{BroadcastRepository, MaintenanceRepository};

#[test]
fn broadcast_reveal_scenario() -> Result<(), Box<dyn Error>> {
    common::block_on(async {
    let _guard = common::setup_db().await?;

    // Admin inserts a critical broadcast.
    let b1 = Broadcast::new("Maintenance Tonight", "Down 3-4AM", Priority::Critical);
    BroadcastRepository::create(&b1).await?;

    // First client: insert event arrives, client re-fetches the latest
    // active row and runs the full reveal.
    let store = MemoryKv::new();
    let fetched = BroadcastRepository::latest_active().await?.unwrap();
    assert_eq!(fetched.id, b1.id);

    let mut seq = RevealSequencer::new(DedupStore::new(&store));
    assert_eq!(seq.offer(fetched.clone()), Some(ALERT_DURATION_MS));
    match seq.phase() {
        RevealPhase::Alert(b) => {
            assert_eq!(b.priority, Priority::Critical);
            assert_eq!(b.priority.style().label, "CRITICAL ALERT!");
        }
        other => panic!("expected alert phase, got {:?}", other),
    }

    assert_eq!(seq.advance(), Some(MESSAGE_DURATION_MS));
    match seq.phase() {
        RevealPhase::Message(b) => assert_eq!(b.message, "Down 3-4AM"),
        other => panic!("expected message phase, got {:?}", other),
    }

    assert_eq!(seq.advance(), None);
    assert_eq!(seq.phase(), &RevealPhase::Idle);

    // Same client reloads: the dedup record persisted, nothing shows.
    let refetched = BroadcastRepository::latest_active().await?.unwrap();
    let mut reloaded = RevealSequencer::new(DedupStore::new(&store));
    assert_eq!(reloaded.offer(refetched), None);
    assert_eq!(reloaded.phase(), &RevealPhase::Idle);

    Ok(())
    })
}

#[test]
fn maintenance_toggle_scenario() -> Result<(), Box<dyn Error>> {
    common::block_on(async {
    let _guard = common::setup_db().await?;

    MaintenanceRepository::ensure_exists().await?;

    // Admin flips the kill-switch.
    MaintenanceRepository::set(true, "Upgrading", "30 minutes").await?;

    // Non-admin client re-fetches and is blocked.
    let mut player_gate = MaintenanceGate::new();
    player_gate.set_viewer(Some(Viewer::resolve("player@example.com", DEFAULT_ADMIN_EMAIL)));
    player_gate.set_status(Some(MaintenanceRepository::get().await?));
    assert!(player_gate.is_blocking());
    assert_eq!(player_gate.status().unwrap().message, "Upgrading");

    // The admin client sees the normal UI and keeps access to the toggle.
    let mut admin_gate = MaintenanceGate::new();
    admin_gate.set_viewer(Some(Viewer::resolve(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_EMAIL)));
    admin_gate.set_status(Some(MaintenanceRepository::get().await?));
    assert!(!admin_gate.is_blocking());

    // A client whose identity has not resolved yet is never locked out.
    let mut anon_gate = MaintenanceGate::new();
    anon_gate.set_status(Some(MaintenanceRepository::get().await?));
    assert!(!anon_gate.is_blocking());

    // Admin turns maintenance back off; the next fetch clears the block.
    MaintenanceRepository::set(false, "Upgrading", "30 minutes").await?;
    player_gate.set_status(Some(MaintenanceRepository::get().await?));
    assert!(!player_gate.is_blocking());

    Ok(())
    })
}
