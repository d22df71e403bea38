use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use jsonwebtoken::Algorithm;
use log::{info, warn};

use gk_api::app::create_app;
use gk_api::routes::AppState;
use gk_core::services::{
    AuthService, AuthServiceConfig, SessionService, TokenCodec, TokenCodecConfig,
};
use gk_infra::cache::{RedisClient, RedisRevocationStore};
use gk_infra::database::{DatabasePool, MySqlAccountRepository};
use gk_infra::email::SmtpMailer;
use gk_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Gatekey API server");

    // Load configuration
    let config = AppConfig::from_env();

    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        warn!("JWT_SECRET is not set; using the development default");
    }

    // Database pool and schema
    let database_pool = DatabasePool::new(&config.database)
        .await
        .context("failed to create database pool")?;
    database_pool
        .run_migrations()
        .await
        .context("failed to run database migrations")?;

    // Redis-backed revocation store
    let redis_client = RedisClient::new(&config.cache)
        .await
        .context("failed to connect to Redis")?;
    let revocation_store = Arc::new(RedisRevocationStore::new(redis_client));

    // Outbound email
    let mailer = Arc::new(SmtpMailer::new(&config.email).context("failed to build SMTP mailer")?);
    if !mailer.is_enabled() {
        warn!("SMTP_HOST is not set; verification links will be logged, not emailed");
    }

    // Repositories and services
    let account_repository = Arc::new(MySqlAccountRepository::new(database_pool.get_pool().clone()));

    let token_codec = Arc::new(TokenCodec::new(TokenCodecConfig {
        jwt_secret: config.jwt.secret.clone(),
        algorithm: config.jwt.algorithm.parse().unwrap_or(Algorithm::HS256),
        token_expiry_seconds: config.jwt.token_expiry,
    }));

    let auth_service = Arc::new(AuthService::new(
        account_repository,
        mailer,
        token_codec.clone(),
        AuthServiceConfig {
            verification_base_url: config.email.verification_base_url.clone(),
        },
    ));

    let session_service = Arc::new(SessionService::new(token_codec, revocation_store));

    let app_state = web::Data::new(AppState {
        auth_service,
        session_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
