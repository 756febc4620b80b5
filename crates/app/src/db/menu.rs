//! Menu item store.
//!
//! Rows are written once by the initial sync and then only read. Readers can
//! either take a snapshot with [`MenuItemStore::fetch_all`] or observe the table
//! with [`MenuItemStore::get_all`], which yields the full row set again every
//! time an import commits.

use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::{Mutex, watch};
use tracing::{debug, instrument, warn};

use little_lemon_core::{MenuItem, MenuItemId, Price};

use super::RepositoryError;

/// Persisted table of menu items with change notification.
///
/// Cheap to clone; clones share the pool and the change channel.
#[derive(Clone)]
pub struct MenuItemStore {
    inner: Arc<MenuItemStoreInner>,
}

struct MenuItemStoreInner {
    pool: SqlitePool,
    rows: watch::Sender<Vec<MenuItem>>,
    /// Held from the snapshot read until the send, so a publish that read
    /// earlier can never overwrite one that read later.
    publish_lock: Mutex<()>,
}

#[derive(sqlx::FromRow)]
struct MenuItemRow {
    id: i32,
    title: String,
    price: String,
    description: String,
    category: String,
    image: String,
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = RepositoryError;

    fn try_from(row: MenuItemRow) -> Result<Self, Self::Error> {
        let price = row.price.parse::<Price>().map_err(|e| {
            RepositoryError::DataCorruption(format!(
                "invalid price {:?} for menu item {}: {e}",
                row.price, row.id
            ))
        })?;

        Ok(Self {
            id: MenuItemId::new(row.id),
            title: row.title,
            price,
            description: row.description,
            category: row.category,
            image: row.image,
        })
    }
}

impl MenuItemStore {
    /// Create a store over an already migrated pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        let (rows, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(MenuItemStoreInner {
                pool,
                rows,
                publish_lock: Mutex::new(()),
            }),
        }
    }

    /// Whether the table holds no rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn is_empty(&self) -> Result<bool, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_item")
            .fetch_one(&self.inner.pool)
            .await?;
        Ok(count == 0)
    }

    /// Insert every item in a single transaction.
    ///
    /// There is no upsert: an id that already exists fails the whole batch.
    /// Observers are notified once the transaction commits. A failed
    /// notification is logged and does not turn the committed insert into an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails; nothing is
    /// written in that case.
    #[instrument(skip_all, fields(count = items.len()))]
    pub async fn insert_all(&self, items: &[MenuItem]) -> Result<(), RepositoryError> {
        if items.is_empty() {
            return Ok(());
        }

        let mut tx = self.inner.pool.begin().await?;
        for item in items {
            sqlx::query(
                r"
                INSERT INTO menu_item (id, title, price, description, category, image)
                VALUES (?, ?, ?, ?, ?, ?)
                ",
            )
            .bind(item.id.as_i32())
            .bind(&item.title)
            .bind(item.price.amount().to_string())
            .bind(&item.description)
            .bind(&item.category)
            .bind(&item.image)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        debug!("Menu items committed");

        if let Err(e) = self.publish().await {
            warn!(error = %e, "Menu items committed but observers were not refreshed");
        }
        Ok(())
    }

    /// Snapshot of all rows ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored price is unreadable.
    pub async fn fetch_all(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r"
            SELECT id, title, price, description, category, image
            FROM menu_item
            ORDER BY id
            ",
        )
        .fetch_all(&self.inner.pool)
        .await?;

        rows.into_iter().map(MenuItem::try_from).collect()
    }

    /// Observe the current rows.
    ///
    /// The returned receiver starts at the rows present now and sees the full
    /// row set again after every later [`insert_all`](Self::insert_all).
    ///
    /// # Errors
    ///
    /// Returns an error if the initial read fails.
    pub async fn get_all(&self) -> Result<watch::Receiver<Vec<MenuItem>>, RepositoryError> {
        self.publish().await?;
        Ok(self.inner.rows.subscribe())
    }

    async fn publish(&self) -> Result<(), RepositoryError> {
        let _guard = self.inner.publish_lock.lock().await;
        let current = self.fetch_all().await?;
        self.inner.rows.send_if_modified(|rows| {
            if *rows == current {
                false
            } else {
                *rows = current;
                true
            }
        });
        Ok(())
    }
}
