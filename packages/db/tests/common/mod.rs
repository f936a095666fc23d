use std::sync::LazyLock;

use tokio::sync::{Mutex, MutexGuard};

use db::{DbConfig, DbError};

static TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

// All tests share one runtime: the global database connection spawns its
// background task on the runtime that initializes it, and a per-test runtime
// would kill that task when the first test finishes.
static RT: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build shared test runtime")
});

pub fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    RT.block_on(fut)
}

pub async fn setup_db() -> Result<MutexGuard<'static, ()>, DbError> {
    let guard = TEST_LOCK.lock().await;
    db::init(DbConfig::memory()).await?;
    let db_conn = db::get_db()?;
    db_conn
        .query(
            "DELETE broadcast; DELETE maintenance; DELETE shop_order; DELETE wallet; \
             DELETE message; DELETE loot_box; DELETE loot_claim; \
             DELETE achievement_claim; DELETE site_settings;",
        )
        .await?;
    Ok(guard)
}
