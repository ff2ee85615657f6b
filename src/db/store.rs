use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::Result,
    Collection, Database,
};
use tracing::debug;

use super::{NOTIFICATIONS_COLLECTION, USERS_COLLECTION};
use crate::notification::model::Notification;
use crate::user::model::User;

/// The four database operations a seeding run needs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedStore: Send + Sync {
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>>;

    /// Returns the number of notifications removed
    async fn delete_notifications_for(&self, user_id: ObjectId) -> Result<u64>;

    /// Returns the number of notifications the server acknowledged
    async fn insert_notifications(&self, batch: Vec<Notification>) -> Result<usize>;

    async fn count_notifications(&self, user_id: ObjectId, unread_only: bool) -> Result<u64>;
}

#[derive(Debug, Clone)]
pub struct MongoStore {
    users: Collection<User>,
    notifications: Collection<Notification>,
}

impl MongoStore {
    pub fn new(database: &Database) -> Self {
        Self {
            users: database.collection(USERS_COLLECTION),
            notifications: database.collection(NOTIFICATIONS_COLLECTION),
        }
    }
}

pub fn notifications_filter(user_id: ObjectId, unread_only: bool) -> Document {
    let mut filter = doc! { "userId": user_id };
    if unread_only {
        filter.insert("isRead", false);
    }
    filter
}

#[async_trait]
impl SeedStore for MongoStore {
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>> {
        self.users
            .find_one(doc! { "phoneNumber": phone }, None)
            .await
    }

    async fn delete_notifications_for(&self, user_id: ObjectId) -> Result<u64> {
        let result = self
            .notifications
            .delete_many(notifications_filter(user_id, false), None)
            .await?;
        Ok(result.deleted_count)
    }

    async fn insert_notifications(&self, batch: Vec<Notification>) -> Result<usize> {
        // insert_many rejects an empty batch
        if batch.is_empty() {
            return Ok(0);
        }

        for notification in &batch {
            debug!(
                "Inserting {} notification '{}' (read: {})",
                notification.notification_type, notification.title, notification.is_read
            );
        }

        let result = self.notifications.insert_many(batch, None).await?;
        Ok(result.inserted_ids.len())
    }

    async fn count_notifications(&self, user_id: ObjectId, unread_only: bool) -> Result<u64> {
        self.notifications
            .count_documents(notifications_filter(user_id, unread_only), None)
            .await
    }
}
