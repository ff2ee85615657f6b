use mongodb::bson::oid::ObjectId;

use crate::notification::model::{NotificationError, NotificationType};

/// Outcome of a successful seeding run
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub user_id: ObjectId,
    pub user_name: String,
    pub deleted: u64,
    pub inserted: usize,
    pub total: u64,
    pub unread: u64,
    pub by_type: Vec<(NotificationType, usize)>,
}

impl SeedReport {
    pub fn read(&self) -> u64 {
        self.total.saturating_sub(self.unread)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("No user found with phone number {phone}")]
    UserNotFound { phone: String },

    #[error("Database error: {0}")]
    DatabaseError(#[from] mongodb::error::Error),

    #[error("Invalid notification fixture: {0}")]
    InvalidFixture(#[from] NotificationError),

    #[error("Only {inserted} of {expected} notifications were inserted")]
    IncompleteInsert { expected: usize, inserted: usize },
}
