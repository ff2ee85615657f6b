use chrono::{DateTime, Utc};
use tracing::info;

use crate::db::store::SeedStore;
use crate::notification::fixtures;
use crate::notification::model::{Notification, NotificationType};
use crate::seeder::model::{SeedError, SeedReport};

#[derive(Debug, Clone)]
pub struct SeedService<S> {
    store: S,
    target_phone: String,
}

impl<S: SeedStore> SeedService<S> {
    pub fn new(store: S, target_phone: impl Into<String>) -> Self {
        Self {
            store,
            target_phone: target_phone.into(),
        }
    }

    /// Replace the target user's notifications with the fixture batch.
    ///
    /// Steps run strictly in order and stop at the first failure; nothing is
    /// retried or rolled back.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<SeedReport, SeedError> {
        info!("Looking up user with phone number {}", self.target_phone);

        let user = match self.store.find_user_by_phone(&self.target_phone).await? {
            Some(user) => user,
            None => {
                return Err(SeedError::UserNotFound {
                    phone: self.target_phone.clone(),
                });
            }
        };

        info!(
            "Found user {} ({}, {})",
            user.full_name, user.id, user.user_type
        );

        // Validate before anything is deleted
        let batch = fixtures::build_batch(user.id, now);
        for notification in &batch {
            notification.check_read_state()?;
        }
        let expected = batch.len();
        let by_type = count_by_type(&batch);

        let deleted = self.store.delete_notifications_for(user.id).await?;
        info!("Deleted {} existing notifications", deleted);

        let inserted = self.store.insert_notifications(batch).await?;
        if inserted != expected {
            return Err(SeedError::IncompleteInsert { expected, inserted });
        }
        info!("Inserted {} notifications", inserted);

        let total = self.store.count_notifications(user.id, false).await?;
        let unread = self.store.count_notifications(user.id, true).await?;

        Ok(SeedReport {
            user_id: user.id,
            user_name: user.full_name,
            deleted,
            inserted,
            total,
            unread,
            by_type,
        })
    }
}

fn count_by_type(batch: &[Notification]) -> Vec<(NotificationType, usize)> {
    NotificationType::ALL
        .iter()
        .map(|kind| {
            let count = batch
                .iter()
                .filter(|n| n.notification_type == *kind)
                .count();
            (*kind, count)
        })
        .collect()
}
