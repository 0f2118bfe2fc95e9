//! Per-session notifications. Rebuilt on every sign-in, never persisted.

use time::macros::format_description;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub timestamp: OffsetDateTime,
}

/// The notifications a fresh session starts with.
pub fn initial(now: OffsetDateTime) -> Vec<Notification> {
    vec![Notification {
        id: 1,
        title: "Welcome!".to_string(),
        message: "Thank you for joining BookClub".to_string(),
        read: false,
        timestamp: now,
    }]
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// "just now", "5 min ago", "3 h ago", "2 d ago", then "12 Mar".
pub fn format_relative(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - timestamp;
    let minutes = elapsed.whole_minutes();
    let hours = elapsed.whole_hours();
    let days = elapsed.whole_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if hours < 24 {
        format!("{hours} h ago")
    } else if days < 7 {
        format!("{days} d ago")
    } else {
        timestamp
            .format(format_description!("[day padding:none] [month repr:short]"))
            .unwrap_or_else(|_| timestamp.date().to_string())
    }
}
