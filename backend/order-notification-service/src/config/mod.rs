use gerai_fcm_shared::models::GOOGLE_TOKEN_URI;
use gerai_fcm_shared::ServiceAccountKey;
use std::fmt;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub firebase: FirebaseConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Service-account credentials for push delivery.
#[derive(Clone)]
pub struct FirebaseConfig {
    pub client_email: String,
    pub private_key: String,
    pub project_id: String,
    pub token_uri: String,
}

impl fmt::Debug for FirebaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseConfig")
            .field("client_email", &self.client_email)
            .field("private_key", &"[REDACTED]")
            .field("project_id", &self.project_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

impl FirebaseConfig {
    pub fn service_account_key(&self) -> ServiceAccountKey {
        ServiceAccountKey {
            client_email: self.client_email.clone(),
            private_key: self.private_key.clone(),
            project_id: self.project_id.clone(),
            token_uri: self.token_uri.clone(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                port: std::env::var("APP_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .map_err(|_| AppError::Config("APP_PORT invalid".to_string()))?,
            },
            database: DatabaseConfig {
                url: require_var("DATABASE_URL")?,
                max_connections: std::env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .map_err(|_| AppError::Config("DB_MAX_CONNECTIONS invalid".to_string()))?,
            },
            firebase: FirebaseConfig {
                client_email: require_var("FIREBASE_CLIENT_EMAIL")?,
                // Deployment environments store the PEM single-line with
                // literal \n escapes.
                private_key: require_var("FIREBASE_PRIVATE_KEY")?.replace("\\n", "\n"),
                project_id: require_var("FIREBASE_PROJECT_ID")?,
                token_uri: std::env::var("FIREBASE_TOKEN_URI")
                    .unwrap_or_else(|_| GOOGLE_TOKEN_URI.to_string()),
            },
        })
    }
}

fn require_var(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| AppError::Config(format!("{} missing", name)))
}
