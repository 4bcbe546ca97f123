use gerai_fcm_shared::models::{
    AndroidConfig, AndroidNotification, FcmMessage, FcmMessageBody, FcmNotification,
};
use gerai_fcm_shared::FcmClient;
use serde_json::json;
use sqlx::{PgPool, Row};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::models::{
    NotificationContent, NotificationLogEntry, OrderChangePayload, OrderEvent, Profile,
};

/// Android delivery knobs expected by the mobile client.
const ANDROID_CHANNEL_ID: &str = "channel_notification";
const ANDROID_CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";
const ANDROID_SOUND: &str = "blink.mp3";

/// Data payload tag letting the app route taps to the order screen.
const ORDER_UPDATE_TYPE: &str = "ORDER_UPDATE";

/// Why an invocation ended without a delivery attempt.
///
/// These are expected steady-state conditions, not defects; they are
/// reported as success so the event source does not retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoStatusChange,
    NoDeviceToken,
}

impl SkipReason {
    pub fn message(self) -> &'static str {
        match self {
            SkipReason::NoStatusChange => "No status change detected",
            SkipReason::NoDeviceToken => "User has no FCM token",
        }
    }
}

/// Outcome of one dispatch invocation.
#[derive(Debug)]
pub enum DispatchOutcome {
    Skipped(SkipReason),
    /// Raw response body of the delivery endpoint, passed through
    /// verbatim.
    Delivered(String),
}

/// Order status-change notification pipeline.
///
/// One instance is shared across requests and holds no per-invocation
/// state. Stages run strictly in sequence; each one either feeds the next
/// or short-circuits the chain.
pub struct OrderNotificationService {
    db: PgPool,
    fcm: Arc<FcmClient>,
}

impl OrderNotificationService {
    pub fn new(db: PgPool, fcm: Arc<FcmClient>) -> Self {
        Self { db, fcm }
    }

    /// Run the full pipeline for one change event.
    pub async fn dispatch(&self, payload: &OrderChangePayload) -> AppResult<DispatchOutcome> {
        let Some(event) = payload.status_transition() else {
            debug!("ignoring event without status transition");
            return Ok(DispatchOutcome::Skipped(SkipReason::NoStatusChange));
        };

        info!(
            order_id = event.order_id,
            user_id = %event.user_id,
            from = %event.old_status,
            to = %event.status,
            "order status changed"
        );

        let Some(token) = self.resolve_device_token(&event).await? else {
            return Ok(DispatchOutcome::Skipped(SkipReason::NoDeviceToken));
        };

        let content = NotificationContent::for_status(&event.status);

        // Best-effort: a lost audit row must not cost the user their
        // notification.
        if let Err(e) = self.record_audit(&event, &content).await {
            warn!(
                order_id = event.order_id,
                "failed to write notification log: {}", e
            );
        }

        let message = build_order_message(&token, &event, &content);
        let raw = self.fcm.send(&message).await?;

        info!(order_id = event.order_id, "push notification dispatched");
        Ok(DispatchOutcome::Delivered(raw))
    }

    /// Look up the recipient's device token.
    ///
    /// A missing profile or an absent/blank token resolves to `None`;
    /// only database failures are errors.
    async fn resolve_device_token(&self, event: &OrderEvent) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT fcm_token, name FROM profiles WHERE id = $1")
            .bind(event.user_id)
            .fetch_optional(&self.db)
            .await?;

        let Some(row) = row else {
            debug!(user_id = %event.user_id, "recipient has no profile");
            return Ok(None);
        };

        let profile = Profile {
            fcm_token: row.try_get("fcm_token")?,
            name: row.try_get("name")?,
        };

        match profile.device_token() {
            Some(token) => {
                debug!(user_id = %event.user_id, name = ?profile.name, "resolved push recipient");
                Ok(Some(token.to_string()))
            }
            None => {
                debug!(user_id = %event.user_id, "recipient profile has no device token");
                Ok(None)
            }
        }
    }

    /// Append the audit row for this dispatch attempt.
    async fn record_audit(
        &self,
        event: &OrderEvent,
        content: &NotificationContent,
    ) -> Result<(), sqlx::Error> {
        let entry = NotificationLogEntry::push(event, content);

        sqlx::query(
            r#"
            INSERT INTO notification_logs (user_id, title, body, order_id, type)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.user_id)
        .bind(&entry.title)
        .bind(&entry.body)
        .bind(entry.order_id)
        .bind(&entry.entry_type)
        .execute(&self.db)
        .await?;

        Ok(())
    }
}

/// Assemble the FCM envelope for an order status notification.
pub fn build_order_message(
    token: &str,
    event: &OrderEvent,
    content: &NotificationContent,
) -> FcmMessage {
    FcmMessage {
        message: FcmMessageBody {
            token: token.to_string(),
            notification: FcmNotification {
                title: content.title.clone(),
                body: content.body.clone(),
            },
            data: Some(json!({
                "order_id": event.order_id.to_string(),
                "status": event.status.clone(),
                "type": ORDER_UPDATE_TYPE,
            })),
            android: Some(AndroidConfig {
                notification: AndroidNotification {
                    channel_id: ANDROID_CHANNEL_ID.to_string(),
                    click_action: ANDROID_CLICK_ACTION.to_string(),
                    sound: ANDROID_SOUND.to_string(),
                },
            }),
        },
    }
}
