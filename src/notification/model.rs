use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    AppointmentConfirmed,
    PaymentDue,
    PropertyMatch,
    ServiceCompleted,
    ContractExpiring,
    MessageReceived,
}

impl NotificationType {
    pub const ALL: [NotificationType; 6] = [
        NotificationType::AppointmentConfirmed,
        NotificationType::PaymentDue,
        NotificationType::PropertyMatch,
        NotificationType::ServiceCompleted,
        NotificationType::ContractExpiring,
        NotificationType::MessageReceived,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            NotificationType::AppointmentConfirmed => "appointment_confirmed",
            NotificationType::PaymentDue => "payment_due",
            NotificationType::PropertyMatch => "property_match",
            NotificationType::ServiceCompleted => "service_completed",
            NotificationType::ContractExpiring => "contract_expiring",
            NotificationType::MessageReceived => "message_received",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pointer to the record a notification is about (an appointment, a payment, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub id: ObjectId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub icon: String,
    pub is_read: bool,
    pub read_at: Option<DateTime>,
    pub related_entity: Option<RelatedEntity>,
    pub action_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Notification {
    /// A read notification must carry a read timestamp later than its creation.
    pub fn check_read_state(&self) -> Result<(), NotificationError> {
        if !self.is_read {
            return Ok(());
        }

        match self.read_at {
            None => Err(NotificationError::MissingReadAt {
                title: self.title.clone(),
            }),
            Some(read_at) if read_at <= self.created_at => {
                Err(NotificationError::ReadBeforeCreated {
                    title: self.title.clone(),
                })
            }
            Some(_) => Ok(()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Notification '{title}' is marked read but has no read timestamp")]
    MissingReadAt { title: String },

    #[error("Notification '{title}' has a read timestamp that is not after its creation")]
    ReadBeforeCreated { title: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn sample(is_read: bool, read_at: Option<DateTime>) -> Notification {
        let created_at = DateTime::from_millis(1_700_000_000_000);
        Notification {
            id: None,
            user_id: ObjectId::new(),
            notification_type: NotificationType::PaymentDue,
            title: "Rent payment due".to_string(),
            message: "Your rent is due in 3 days.".to_string(),
            icon: "credit-card".to_string(),
            is_read,
            read_at,
            related_entity: None,
            action_url: Some("/payments".to_string()),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_notification_document_field_names() {
        let mut notification = sample(false, None);
        notification.related_entity = Some(RelatedEntity {
            entity_type: "payment".to_string(),
            id: ObjectId::new(),
        });

        let document = bson::to_document(&notification).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("type").unwrap(), "payment_due");
        assert!(!document.get_bool("isRead").unwrap());
        assert_eq!(
            document.get_object_id("userId").unwrap(),
            notification.user_id
        );
        assert_eq!(document.get_str("actionUrl").unwrap(), "/payments");
        assert!(document.get_datetime("createdAt").is_ok());
        assert_eq!(
            document
                .get_document("relatedEntity")
                .unwrap()
                .get_str("type")
                .unwrap(),
            "payment"
        );
    }

    #[test]
    fn test_notification_type_wire_tags_match_as_str() {
        for kind in NotificationType::ALL {
            assert_eq!(bson::to_bson(&kind).unwrap(), bson::Bson::from(kind.as_str()));
        }
        assert!(bson::from_bson::<NotificationType>(bson::Bson::from("post_like")).is_err());
    }

    #[test]
    fn test_unread_notification_passes_read_check() {
        assert!(sample(false, None).check_read_state().is_ok());
    }

    #[test]
    fn test_read_notification_requires_read_at() {
        let err = sample(true, None).check_read_state().unwrap_err();
        assert!(matches!(err, NotificationError::MissingReadAt { .. }));
    }

    #[test]
    fn test_read_at_must_follow_creation() {
        let created_at = DateTime::from_millis(1_700_000_000_000);
        let err = sample(true, Some(created_at)).check_read_state().unwrap_err();
        assert!(matches!(err, NotificationError::ReadBeforeCreated { .. }));

        let later = DateTime::from_millis(1_700_000_060_000);
        assert!(sample(true, Some(later)).check_read_state().is_ok());
    }
}
