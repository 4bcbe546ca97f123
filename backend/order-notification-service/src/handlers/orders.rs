use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::debug;

use crate::error::AppError;
use crate::models::OrderChangePayload;
use crate::services::{DispatchOutcome, OrderNotificationService};

/// Order status-change webhook.
///
/// POST /hooks/order-status
///
/// Responds 200 for both deliveries and steady-state no-ops so the event
/// source never retries; hard pipeline failures surface as 500 with the
/// failure message.
pub async fn order_status_changed(
    service: web::Data<Arc<OrderNotificationService>>,
    payload: web::Json<OrderChangePayload>,
) -> Result<HttpResponse, AppError> {
    debug!(
        table = ?payload.table,
        change = ?payload.change_type,
        "order change event received"
    );

    match service.dispatch(&payload).await? {
        DispatchOutcome::Skipped(reason) => Ok(HttpResponse::Ok().body(reason.message())),
        DispatchOutcome::Delivered(raw) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .body(raw)),
    }
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/hooks").route("/order-status", web::post().to(order_status_changed)),
    );
}
