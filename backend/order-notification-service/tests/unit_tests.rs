/// Unit tests for order-notification-service core functionality
///
/// This test module covers:
/// - Status transition validation
/// - Notification content selection
/// - Device token normalization
/// - Audit log entry construction
use order_notification_service::models::*;
use uuid::Uuid;

fn record(id: i64, user_id: Uuid, status: &str) -> OrderRecord {
    OrderRecord {
        id,
        user_id,
        status: status.to_string(),
    }
}

#[test]
fn test_status_transition_detected() {
    let user_id = Uuid::new_v4();
    let payload = OrderChangePayload {
        change_type: Some("UPDATE".to_string()),
        table: Some("orders".to_string()),
        record: Some(record(7, user_id, "shipping")),
        old_record: Some(record(7, user_id, "pending")),
    };

    let event = payload.status_transition().expect("transition expected");
    assert_eq!(event.order_id, 7);
    assert_eq!(event.user_id, user_id);
    assert_eq!(event.status, "shipping");
    assert_eq!(event.old_status, "pending");
}

#[test]
fn test_status_transition_ignores_unchanged_status() {
    let user_id = Uuid::new_v4();
    let payload = OrderChangePayload {
        change_type: Some("UPDATE".to_string()),
        table: Some("orders".to_string()),
        record: Some(record(7, user_id, "pending")),
        old_record: Some(record(7, user_id, "pending")),
    };

    assert!(payload.status_transition().is_none());
}

#[test]
fn test_status_transition_requires_both_records() {
    let user_id = Uuid::new_v4();

    let missing_old = OrderChangePayload {
        change_type: Some("INSERT".to_string()),
        table: Some("orders".to_string()),
        record: Some(record(7, user_id, "pending")),
        old_record: None,
    };
    assert!(missing_old.status_transition().is_none());

    let missing_new = OrderChangePayload {
        change_type: Some("DELETE".to_string()),
        table: Some("orders".to_string()),
        record: None,
        old_record: Some(record(7, user_id, "pending")),
    };
    assert!(missing_new.status_transition().is_none());
}

#[test]
fn test_content_for_known_statuses() {
    let pending = NotificationContent::for_status("pending");
    assert_eq!(pending.title, "Pesanan Dikonfirmasi! 💍");
    assert_eq!(
        pending.body,
        "Pesanan aksesoris kamu sudah masuk. Segera kami siapkan untuk mempercantik gayamu!"
    );

    let shipping = NotificationContent::for_status("shipping");
    assert_eq!(shipping.title, "Pesanan Sedang Menuju Kamu! 🚚");
    assert_eq!(
        shipping.body,
        "Otw! Koleksi barumu sudah diserahkan ke kurir. Gak sabar ya buat unboxing?"
    );

    let completed = NotificationContent::for_status("completed");
    assert_eq!(completed.title, "Tampil Makin Kece! ✨");
    assert_eq!(
        completed.body,
        "Paket aksesoris sudah sampai. Jangan lupa tag kami saat kamu pakai ya!"
    );
}

#[test]
fn test_content_for_unknown_status_interpolates_literal() {
    let content = NotificationContent::for_status("refunded");

    assert_eq!(content.title, "Info Pesanan 📦");
    assert_eq!(content.body, "Status pesananmu saat ini: refunded");
}

#[test]
fn test_content_selection_is_deterministic() {
    assert_eq!(
        NotificationContent::for_status("shipping"),
        NotificationContent::for_status("shipping")
    );
}

#[test]
fn test_device_token_normalization() {
    let with_token = Profile {
        fcm_token: Some("fcm-device-token-123".to_string()),
        name: Some("Ayu".to_string()),
    };
    assert_eq!(with_token.device_token(), Some("fcm-device-token-123"));

    let padded = Profile {
        fcm_token: Some("  fcm-device-token-123  ".to_string()),
        name: None,
    };
    assert_eq!(padded.device_token(), Some("fcm-device-token-123"));

    let empty = Profile {
        fcm_token: Some("".to_string()),
        name: None,
    };
    assert!(empty.device_token().is_none());

    let blank = Profile {
        fcm_token: Some("   ".to_string()),
        name: None,
    };
    assert!(blank.device_token().is_none());

    let missing = Profile {
        fcm_token: None,
        name: Some("Ayu".to_string()),
    };
    assert!(missing.device_token().is_none());
}

#[test]
fn test_log_entry_for_push_dispatch() {
    let user_id = Uuid::new_v4();
    let event = OrderEvent {
        order_id: 42,
        user_id,
        status: "shipping".to_string(),
        old_status: "pending".to_string(),
    };
    let content = NotificationContent::for_status(&event.status);

    let entry = NotificationLogEntry::push(&event, &content);

    assert_eq!(entry.user_id, user_id);
    assert_eq!(entry.order_id, 42);
    assert_eq!(entry.title, "Pesanan Sedang Menuju Kamu! 🚚");
    assert_eq!(entry.entry_type, "push");
}
