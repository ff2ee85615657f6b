use chrono::{DateTime, Duration, Utc};
use mongodb::bson::{self, oid::ObjectId};

use crate::notification::model::{Notification, NotificationType, RelatedEntity};

#[derive(Debug, Clone, Copy)]
enum Age {
    Hours(i64),
    Days(i64),
}

impl Age {
    fn as_duration(self) -> Duration {
        match self {
            Age::Hours(hours) => Duration::hours(hours),
            Age::Days(days) => Duration::days(days),
        }
    }
}

struct Fixture {
    kind: NotificationType,
    title: &'static str,
    message: &'static str,
    icon: &'static str,
    age: Age,
    // Minutes between creation and reading; `None` leaves it unread
    read_after_minutes: Option<i64>,
    related: Option<&'static str>,
    action_url: Option<&'static str>,
}

const FIXTURES: [Fixture; 15] = [
    // Unread
    Fixture {
        kind: NotificationType::AppointmentConfirmed,
        title: "Viewing confirmed",
        message: "Your viewing of the 2-bedroom apartment on Palm Street is confirmed for tomorrow at 10:00 AM.",
        icon: "calendar-check",
        age: Age::Hours(2),
        read_after_minutes: None,
        related: Some("appointment"),
        action_url: Some("/appointments"),
    },
    Fixture {
        kind: NotificationType::MessageReceived,
        title: "New message from your agent",
        message: "Layla sent you a message about the documents needed for your rental application.",
        icon: "message-circle",
        age: Age::Hours(5),
        read_after_minutes: None,
        related: Some("conversation"),
        action_url: Some("/messages"),
    },
    Fixture {
        kind: NotificationType::PaymentDue,
        title: "Rent payment due",
        message: "Your monthly rent of $1,200 is due in 3 days.",
        icon: "credit-card",
        age: Age::Days(1),
        read_after_minutes: None,
        related: Some("payment"),
        action_url: Some("/payments"),
    },
    // Read
    Fixture {
        kind: NotificationType::PropertyMatch,
        title: "New property match",
        message: "A 3-bedroom villa in Green Hills matches your saved search.",
        icon: "home",
        age: Age::Days(2),
        read_after_minutes: Some(45),
        related: Some("property"),
        action_url: Some("/properties/saved-searches"),
    },
    Fixture {
        kind: NotificationType::ServiceCompleted,
        title: "Maintenance completed",
        message: "The plumbing repair requested for your unit has been completed.",
        icon: "tool",
        age: Age::Days(3),
        read_after_minutes: Some(180),
        related: Some("service_request"),
        action_url: Some("/services"),
    },
    Fixture {
        kind: NotificationType::ContractExpiring,
        title: "Lease expiring soon",
        message: "Your lease agreement expires in 60 days. Contact your agent to discuss renewal.",
        icon: "file-text",
        age: Age::Days(5),
        read_after_minutes: Some(20),
        related: Some("contract"),
        action_url: Some("/contracts"),
    },
    Fixture {
        kind: NotificationType::PaymentDue,
        title: "Service fee reminder",
        message: "The annual building service fee of $350 is due at the end of the month.",
        icon: "credit-card",
        age: Age::Days(7),
        read_after_minutes: Some(90),
        related: Some("payment"),
        action_url: Some("/payments"),
    },
    Fixture {
        kind: NotificationType::AppointmentConfirmed,
        title: "Inspection scheduled",
        message: "The move-in inspection is confirmed for Saturday at 2:00 PM.",
        icon: "calendar-check",
        age: Age::Days(9),
        read_after_minutes: Some(15),
        related: Some("appointment"),
        action_url: Some("/appointments"),
    },
    Fixture {
        kind: NotificationType::MessageReceived,
        title: "Reply from the property owner",
        message: "The owner of the Marina Heights apartment replied to your offer.",
        icon: "message-circle",
        age: Age::Days(12),
        read_after_minutes: Some(60),
        related: Some("conversation"),
        action_url: Some("/messages"),
    },
    Fixture {
        kind: NotificationType::PropertyMatch,
        title: "Price drop on a saved property",
        message: "The townhouse on Cedar Avenue you saved dropped its price by 5%.",
        icon: "trending-down",
        age: Age::Days(15),
        read_after_minutes: Some(240),
        related: Some("property"),
        action_url: Some("/properties/favorites"),
    },
    Fixture {
        kind: NotificationType::ServiceCompleted,
        title: "Cleaning service completed",
        message: "Your deep cleaning service was completed. Let us know how it went.",
        icon: "check-circle",
        age: Age::Days(18),
        read_after_minutes: Some(30),
        related: Some("service_request"),
        action_url: Some("/services"),
    },
    Fixture {
        kind: NotificationType::ContractExpiring,
        title: "Contract renewal reminder",
        message: "The parking space contract attached to your lease expires next month.",
        icon: "file-text",
        age: Age::Days(21),
        read_after_minutes: Some(120),
        related: Some("contract"),
        action_url: Some("/contracts"),
    },
    Fixture {
        kind: NotificationType::AppointmentConfirmed,
        title: "Meeting with agent confirmed",
        message: "Your meeting with your agent to review shortlisted properties is confirmed.",
        icon: "users",
        age: Age::Days(25),
        read_after_minutes: Some(10),
        related: Some("appointment"),
        action_url: Some("/appointments"),
    },
    Fixture {
        kind: NotificationType::PropertyMatch,
        title: "3 new listings near you",
        message: "Three new listings in your preferred neighborhood were published this week.",
        icon: "map-pin",
        age: Age::Days(30),
        read_after_minutes: Some(300),
        related: None,
        action_url: Some("/properties"),
    },
    Fixture {
        kind: NotificationType::MessageReceived,
        title: "Welcome aboard",
        message: "Welcome! Complete your profile to get personalised property recommendations.",
        icon: "smile",
        age: Age::Days(38),
        read_after_minutes: Some(5),
        related: None,
        action_url: Some("/profile"),
    },
];

/// Builds the fixed notification batch for `user_id`, with every timestamp
/// anchored on `now`.
pub fn build_batch(user_id: ObjectId, now: DateTime<Utc>) -> Vec<Notification> {
    FIXTURES
        .iter()
        .map(|fixture| {
            let created_at = now - fixture.age.as_duration();
            let read_at = fixture
                .read_after_minutes
                .map(|minutes| created_at + Duration::minutes(minutes));

            Notification {
                id: None,
                user_id,
                notification_type: fixture.kind,
                title: fixture.title.to_string(),
                message: fixture.message.to_string(),
                icon: fixture.icon.to_string(),
                is_read: read_at.is_some(),
                read_at: read_at.map(bson::DateTime::from_chrono),
                related_entity: fixture.related.map(|entity_type| RelatedEntity {
                    entity_type: entity_type.to_string(),
                    id: ObjectId::new(),
                }),
                action_url: fixture.action_url.map(str::to_string),
                created_at: bson::DateTime::from_chrono(created_at),
                updated_at: bson::DateTime::from_chrono(read_at.unwrap_or(created_at)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_batch_has_three_unread_and_twelve_read() {
        let batch = build_batch(ObjectId::new(), fixed_now());
        assert_eq!(batch.len(), 15);
        assert_eq!(batch.iter().filter(|n| !n.is_read).count(), 3);
        assert_eq!(batch.iter().filter(|n| n.is_read).count(), 12);
    }

    #[test]
    fn test_read_notifications_are_read_after_creation() {
        for notification in build_batch(ObjectId::new(), fixed_now()) {
            assert!(notification.check_read_state().is_ok());
            if notification.is_read {
                assert!(notification.read_at.unwrap() > notification.created_at);
            } else {
                assert!(notification.read_at.is_none());
            }
        }
    }

    #[test]
    fn test_timestamps_are_anchored_on_now() {
        let now = fixed_now();
        let batch = build_batch(ObjectId::new(), now);

        assert_eq!(batch[0].created_at.to_chrono(), now - Duration::hours(2));
        assert_eq!(batch[1].created_at.to_chrono(), now - Duration::hours(5));
        assert_eq!(batch[14].created_at.to_chrono(), now - Duration::days(38));

        for notification in &batch {
            assert!(notification.created_at.to_chrono() < now);
            assert!(notification.updated_at >= notification.created_at);
            if let Some(read_at) = notification.read_at {
                assert!(read_at.to_chrono() < now);
                assert_eq!(notification.updated_at, read_at);
            }
        }
    }

    #[test]
    fn test_batch_is_newest_first_and_owned_by_user() {
        let user_id = ObjectId::new();
        let batch = build_batch(user_id, fixed_now());

        assert!(batch.iter().all(|n| n.user_id == user_id && n.id.is_none()));
        assert!(batch
            .windows(2)
            .all(|pair| pair[0].created_at > pair[1].created_at));
        // The unread ones are the most recent
        assert!(batch[..3].iter().all(|n| !n.is_read));
    }

    #[test]
    fn test_every_category_is_represented() {
        let batch = build_batch(ObjectId::new(), fixed_now());
        for kind in NotificationType::ALL {
            assert!(
                batch.iter().any(|n| n.notification_type == kind),
                "missing {}",
                kind
            );
        }
    }
}
