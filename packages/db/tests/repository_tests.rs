#![allow(clippy::disallowed_methods)]

mod common;

use std::error::Error;

use chrono::Utc;
use vault_core::{
    AchievementKind, Broadcast, LootBox, Message, MessageKind, Order, OrderStatus, Priority,
    Rarity, Theme,
};

use db::{
    DbError,
    repositories::{
        AchievementRepository, BroadcastRepository, LootRepository, MaintenanceRepository,
        MessageRepository, OrderRepository, SettingsRepository, WalletRepository,
    },
};

#[test]
fn test_repositories() -> Result<(), Box<dyn Error>> {
    common::block_on(async {
    let _guard = common::setup_db().await?;

    // BroadcastRepository: create/get/latest_active/list_recent/deactivate
    let first = Broadcast::new("Welcome", "The vault is open", Priority::Low);
    let created = BroadcastRepository::create(&first).await?;
    assert_eq!(created.title, "Welcome");
    assert_eq!(created.priority, Priority::Low);
    assert!(created.is_active);

    let loaded = BroadcastRepository::get(first.id).await?;
    assert_eq!(loaded.id, first.id);

    let second = Broadcast::new("Maintenance Tonight", "Down 3-4AM", Priority::Critical);
    BroadcastRepository::create(&second).await?;

    // The newest active row wins; older broadcasts are never queued.
    let latest = BroadcastRepository::latest_active().await?;
    assert_eq!(latest.as_ref().map(|b| b.id), Some(second.id));

    let recent = BroadcastRepository::list_recent(10).await?;
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, second.id);

    let deactivated = BroadcastRepository::deactivate(second.id).await?;
    assert!(!deactivated.is_active);
    let latest = BroadcastRepository::latest_active().await?;
    assert_eq!(latest.as_ref().map(|b| b.id), Some(first.id));

    let missing = BroadcastRepository::get(Broadcast::new("x", "y", Priority::Normal).id).await;
    assert!(matches!(missing, Err(DbError::NotFound(_))));

    // MaintenanceRepository: singleton seed, toggle on, toggle off
    let seeded = MaintenanceRepository::ensure_exists().await?;
    assert!(!seeded.is_active);

    // Seeding twice leaves the row untouched.
    let reseeded = MaintenanceRepository::ensure_exists().await?;
    assert_eq!(reseeded.message, seeded.message);

    let toggled = MaintenanceRepository::set(true, "Upgrading", "30 minutes").await?;
    assert!(toggled.is_active);
    assert_eq!(toggled.message, "Upgrading");
    assert_eq!(toggled.expected_downtime, "30 minutes");

    let read_back = MaintenanceRepository::get().await?;
    assert!(read_back.is_active);
    assert!(read_back.updated_at >= seeded.updated_at);

    let cleared = MaintenanceRepository::set(false, "Upgrading", "30 minutes").await?;
    assert!(!cleared.is_active);

    // OrderRepository: create/get/list/resolve, double-resolution rejected
    let order = Order::new("player@example.com", 10_000, "FUT_Master", 85, 5_001)
        .with_instructions("List the card tonight");
    let created_order = OrderRepository::create(&order).await?;
    assert_eq!(created_order.status, OrderStatus::Pending);
    assert_eq!(created_order.package_coins, 10_000);
    assert_eq!(
        created_order.instructions.as_deref(),
        Some("List the card tonight")
    );

    let other = Order::new("gamer@example.com", 50_000, "ProPlayer99", 87, 12_500);
    OrderRepository::create(&other).await?;

    let all = OrderRepository::list().await?;
    assert_eq!(all.len(), 2);

    let mine = OrderRepository::list_for_email("player@example.com").await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, order.id);

    let approved = OrderRepository::resolve(order.id, OrderStatus::Approved).await?;
    assert_eq!(approved.status, OrderStatus::Approved);

    let reloaded = OrderRepository::get(order.id).await?;
    assert_eq!(reloaded.status, OrderStatus::Approved);

    let again = OrderRepository::resolve(order.id, OrderStatus::Declined).await;
    assert!(matches!(again, Err(DbError::InvalidState(_))));

    let to_pending = OrderRepository::resolve(other.id, OrderStatus::Pending).await;
    assert!(matches!(to_pending, Err(DbError::InvalidState(_))));

    let ghost = OrderRepository::resolve(Order::new("x", 1, "y", 1, 1).id, OrderStatus::Approved)
        .await;
    assert!(matches!(ghost, Err(DbError::NotFound(_))));

    // WalletRepository: get_or_create/credit/daily claim/ad watch
    let wallet = WalletRepository::get_or_create("player@example.com").await?;
    assert_eq!(wallet.coins, 0);
    assert!(wallet.last_daily_claim.is_none());

    // Idempotent on a second call.
    let same = WalletRepository::get_or_create("player@example.com").await?;
    assert_eq!(same.created_at, wallet.created_at);

    let credited = WalletRepository::credit("player@example.com", 250).await?;
    assert_eq!(credited.coins, 250);
    assert_eq!(credited.total_earned, 250);

    let claimed = WalletRepository::record_daily_claim("player@example.com", 500).await?;
    assert_eq!(claimed.coins, 750);
    assert!(claimed.last_daily_claim.is_some());
    assert_eq!(claimed.daily_claims, 1);
    assert_eq!(claimed.total_earned, 750);

    let after_ad = WalletRepository::record_ad_watch("player@example.com", 100).await?;
    assert_eq!(after_ad.coins, 850);
    assert_eq!(after_ad.ads_today(Utc::now()), 1);
    assert_eq!(after_ad.total_ads_watched, 1);
    assert!(after_ad.last_ad_watch.is_some());

    let second_ad = WalletRepository::record_ad_watch("player@example.com", 100).await?;
    assert_eq!(second_ad.ads_today(Utc::now()), 2);
    assert_eq!(second_ad.total_ads_watched, 2);

    let unknown = WalletRepository::credit("nobody@example.com", 10).await;
    assert!(matches!(unknown, Err(DbError::NotFound(_))));

    let missing_wallet = WalletRepository::get("nobody@example.com").await;
    assert!(matches!(missing_wallet, Err(DbError::NotFound(_))));

    Ok(())
    })
}

#[test]
fn ad_counter_restarts_after_a_day_away() -> Result<(), Box<dyn Error>> {
    common::block_on(async {
    let _guard = common::setup_db().await?;

    WalletRepository::get_or_create("player@example.com").await?;
    WalletRepository::record_ad_watch("player@example.com", 100).await?;
    WalletRepository::record_ad_watch("player@example.com", 100).await?;

    // Push the last ad watch back a day; the next watch starts a new count
    // instead of extending yesterday's.
    db::get_db()?
        .query(
            "UPDATE type::thing('wallet', $email) \
             SET last_ad_watch = time::now() - 1d",
        )
        .bind(("email", "player@example.com"))
        .await?;

    let next_day = WalletRepository::record_ad_watch("player@example.com", 100).await?;
    assert_eq!(next_day.ads_today(Utc::now()), 1);
    // The lifetime counter keeps the full history.
    assert_eq!(next_day.total_ads_watched, 3);

    Ok(())
    })
}

#[test]
fn test_message_and_settings_repositories() -> Result<(), Box<dyn Error>> {
    common::block_on(async {
    let _guard = common::setup_db().await?;

    // MessageRepository: create/list newest-first with a limit
    let older = Message::new(MessageKind::System, "Server Maintenance", "Sunday 3-4AM GMT");
    MessageRepository::create(&older).await?;
    let newer = Message::new(MessageKind::Event, "Double Coins Weekend!", "2x ad coins");
    MessageRepository::create(&newer).await?;

    let recent = MessageRepository::list_recent(10).await?;
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, newer.id);
    assert_eq!(recent[0].kind, MessageKind::Event);

    let capped = MessageRepository::list_recent(1).await?;
    assert_eq!(capped.len(), 1);

    // SettingsRepository: seed, read, switch
    let seeded = SettingsRepository::ensure_exists().await?;
    assert_eq!(seeded, Theme::Classic);

    let switched = SettingsRepository::set_theme(Theme::Halloween).await?;
    assert_eq!(switched, Theme::Halloween);
    assert_eq!(SettingsRepository::get_theme().await?, Theme::Halloween);

    // Re-seeding never clobbers the switched theme.
    assert_eq!(SettingsRepository::ensure_exists().await?, Theme::Halloween);

    Ok(())
    })
}

#[test]
fn test_loot_and_achievement_repositories() -> Result<(), Box<dyn Error>> {
    common::block_on(async {
    let _guard = common::setup_db().await?;

    // LootRepository: targeted and broadcast boxes, exactly-once opens
    let for_all = LootBox::new(
        "Weekend Crate",
        "A little something for everyone",
        Rarity::Common,
        100,
        vec!["100 coins".to_string()],
        None,
    );
    LootRepository::create(&for_all).await?;

    let targeted = LootBox::new(
        "VIP Crate",
        "Thanks for the big order",
        Rarity::Legendary,
        5_000,
        vec!["5000 coins".to_string(), "Bragging rights".to_string()],
        Some("vip@example.com".to_string()),
    );
    LootRepository::create(&targeted).await?;

    let vip_pending = LootRepository::list_pending("vip@example.com").await?;
    assert_eq!(vip_pending.len(), 2);

    let other_pending = LootRepository::list_pending("other@example.com").await?;
    assert_eq!(other_pending.len(), 1);
    assert_eq!(other_pending[0].id, for_all.id);

    LootRepository::record_open(for_all.id, "vip@example.com").await?;
    let vip_pending = LootRepository::list_pending("vip@example.com").await?;
    assert_eq!(vip_pending.len(), 1);
    assert_eq!(vip_pending[0].id, targeted.id);

    // The same user cannot open a box twice; another user still can.
    let repeat = LootRepository::record_open(for_all.id, "vip@example.com").await;
    assert!(matches!(repeat, Err(DbError::InvalidState(_))));
    LootRepository::record_open(for_all.id, "other@example.com").await?;

    let fetched = LootRepository::get(targeted.id).await?;
    assert_eq!(fetched.coins, 5_000);
    let ghost = LootRepository::get(LootBox::new("x", "y", Rarity::Common, 1, vec![], None).id)
        .await;
    assert!(matches!(ghost, Err(DbError::NotFound(_))));

    // AchievementRepository: one claim per (user, badge)
    assert!(
        AchievementRepository::claimed_kinds("player@example.com")
            .await?
            .is_empty()
    );

    AchievementRepository::record_claim("player@example.com", AchievementKind::FirstSteps).await?;
    let claimed = AchievementRepository::claimed_kinds("player@example.com").await?;
    assert_eq!(claimed, vec![AchievementKind::FirstSteps]);

    let repeat =
        AchievementRepository::record_claim("player@example.com", AchievementKind::FirstSteps)
            .await;
    assert!(matches!(repeat, Err(DbError::InvalidState(_))));

    // Another user's ledger is untouched.
    assert!(
        AchievementRepository::claimed_kinds("other@example.com")
            .await?
            .is_empty()
    );

    Ok(())
    })
}
