use serde::Deserialize;
use uuid::Uuid;

/// Row-change payload delivered by the database webhook.
///
/// `record` holds the row after the change, `old_record` the row before
/// it; either may be absent on INSERT/DELETE events. The envelope fields
/// (`type`, `table`) are logged and otherwise ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderChangePayload {
    #[serde(rename = "type")]
    pub change_type: Option<String>,
    pub table: Option<String>,
    pub record: Option<OrderRecord>,
    pub old_record: Option<OrderRecord>,
}

/// The subset of the orders row the pipeline needs; remaining columns are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    pub user_id: Uuid,
    pub status: String,
}

/// A validated status transition.
#[derive(Debug, Clone)]
pub struct OrderEvent {
    pub order_id: i64,
    pub user_id: Uuid,
    pub status: String,
    pub old_status: String,
}

impl OrderChangePayload {
    /// Returns the status transition carried by this payload, or `None`
    /// when either record is missing or the status did not change.
    pub fn status_transition(&self) -> Option<OrderEvent> {
        let record = self.record.as_ref()?;
        let old_record = self.old_record.as_ref()?;

        if record.status == old_record.status {
            return None;
        }

        Some(OrderEvent {
            order_id: record.id,
            user_id: record.user_id,
            status: record.status.clone(),
            old_status: old_record.status.clone(),
        })
    }
}

/// Recipient profile as stored in `profiles`.
#[derive(Debug, Clone)]
pub struct Profile {
    pub fcm_token: Option<String>,
    pub name: Option<String>,
}

impl Profile {
    /// The device token, if the profile actually carries a usable one.
    /// NULL, empty and whitespace-only tokens all count as absent.
    pub fn device_token(&self) -> Option<&str> {
        self.fcm_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// Push notification title/body pair for an order status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

impl NotificationContent {
    /// Fixed status-to-copy table. Unknown statuses fall back to a generic
    /// message carrying the literal status value.
    pub fn for_status(status: &str) -> Self {
        let (title, body) = match status {
            "pending" => (
                "Pesanan Dikonfirmasi! 💍",
                "Pesanan aksesoris kamu sudah masuk. Segera kami siapkan untuk mempercantik gayamu!"
                    .to_string(),
            ),
            "shipping" => (
                "Pesanan Sedang Menuju Kamu! 🚚",
                "Otw! Koleksi barumu sudah diserahkan ke kurir. Gak sabar ya buat unboxing?"
                    .to_string(),
            ),
            "completed" => (
                "Tampil Makin Kece! ✨",
                "Paket aksesoris sudah sampai. Jangan lupa tag kami saat kamu pakai ya!"
                    .to_string(),
            ),
            other => (
                "Info Pesanan 📦",
                format!("Status pesananmu saat ini: {}", other),
            ),
        };

        Self {
            title: title.to_string(),
            body,
        }
    }
}

/// Audit row appended to `notification_logs` before delivery is attempted.
#[derive(Debug, Clone)]
pub struct NotificationLogEntry {
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub order_id: i64,
    pub entry_type: String,
}

impl NotificationLogEntry {
    /// Entry for a push dispatch attempt.
    pub fn push(event: &OrderEvent, content: &NotificationContent) -> Self {
        Self {
            user_id: event.user_id,
            title: content.title.clone(),
            body: content.body.clone(),
            order_id: event.order_id,
            entry_type: "push".to_string(),
        }
    }
}
