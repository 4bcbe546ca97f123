use actix_web::{middleware, web, App, HttpServer};
use gerai_fcm_shared::FcmClient;
use order_notification_service::handlers::orders::register_routes as register_order_hooks;
use order_notification_service::{db, Config, OrderNotificationService};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    tracing::info!("Starting order notification service ({})", config.app.env);

    let db_pool = match db::init_pool(&config.database).await {
        Ok(pool) => {
            tracing::info!("Successfully connected to database");
            pool
        }
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "Database connection failed",
            ));
        }
    };

    let fcm_client = Arc::new(FcmClient::new(config.firebase.service_account_key()));
    tracing::info!(
        "FCM client configured for project {}",
        fcm_client.project_id()
    );

    let notification_service = Arc::new(OrderNotificationService::new(db_pool, fcm_client));

    let addr = format!("0.0.0.0:{}", config.app.port);
    tracing::info!("Starting HTTP server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(notification_service.clone()))
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .route(
                "/",
                web::get().to(|| async { "Order Notification Service v1.0" }),
            )
            .configure(register_order_hooks)
    })
    .bind(&addr)?
    .run()
    .await
}
