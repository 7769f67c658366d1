use actix_web::{web, App, HttpServer};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sm_api::app::{self, AppState};
use sm_api::middleware::cors::create_cors;
use sm_core::services::auth::AuthService;
use sm_core::services::booking::BookingService;
use sm_core::services::profile::ProfileService;
use sm_core::services::rent::RentService;
use sm_core::services::residence::ResidenceService;
use sm_core::services::token::TokenService;
use sm_core::services::verification::{VerificationConfig, VerificationService};
use sm_infra::cache::{create_redis_connection, RedisOtpStore};
use sm_infra::database::create_pool;
use sm_infra::database::mysql::{
    MySqlLedgerRepository, MySqlResidenceRepository, MySqlRoomRepository, MySqlUserRepository,
};
use sm_infra::email::SmtpMailer;
use sm_infra::payment::RazorpayClient;
use sm_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting StayMate API Server");

    let config = AppConfig::from_env();
    if config.auth.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the default development secret");
    }

    // Infrastructure
    let pool = create_pool(&config.database).await?;
    let redis = create_redis_connection(&config.cache.redis_url).await?;
    let mailer = Arc::new(SmtpMailer::new(&config.email)?);
    let gateway = Arc::new(RazorpayClient::new(config.payment.clone())?);

    // Repositories
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let room_repository = Arc::new(MySqlRoomRepository::new(pool.clone()));
    let ledger = Arc::new(MySqlLedgerRepository::new(pool.clone()));
    let residence_repository = Arc::new(MySqlResidenceRepository::new(pool));

    // Services
    let token_service = Arc::new(TokenService::new(
        &config.auth.jwt_secret,
        config.auth.token_expiry,
    ));
    let verification_service = Arc::new(VerificationService::new(
        mailer,
        Arc::new(RedisOtpStore::new(redis)),
        VerificationConfig::default(),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        verification_service,
        token_service.clone(),
        config.auth.bcrypt_cost,
    ));
    let booking_service = Arc::new(BookingService::new(
        user_repository.clone(),
        room_repository.clone(),
        ledger.clone(),
        gateway,
        token_service.clone(),
    ));
    let rent_service = Arc::new(RentService::new(
        user_repository.clone(),
        room_repository,
        ledger,
        config.rent,
    ));
    let profile_service = Arc::new(ProfileService::new(user_repository));
    let residence_service = Arc::new(ResidenceService::new(residence_repository));

    let state = web::Data::new(AppState {
        auth_service,
        booking_service,
        rent_service,
        profile_service,
        residence_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(create_cors())
            .configure(app::configure)
            .default_service(web::route().to(app::not_found))
    });
    if workers > 0 {
        server = server.workers(workers);
    }
    server.bind(&bind_address)?.run().await?;

    Ok(())
}
