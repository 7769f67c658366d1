//! Application state and route configuration
//!
//! This module binds the core services to their production
//! implementations and wires every route onto the Actix-web app.

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use sm_core::services::auth::AuthService;
use sm_core::services::booking::BookingService;
use sm_core::services::profile::ProfileService;
use sm_core::services::rent::RentService;
use sm_core::services::residence::ResidenceService;
use sm_core::services::token::TokenService;

use sm_infra::cache::RedisOtpStore;
use sm_infra::database::mysql::{
    MySqlLedgerRepository, MySqlResidenceRepository, MySqlRoomRepository, MySqlUserRepository,
};
use sm_infra::email::SmtpMailer;
use sm_infra::payment::RazorpayClient;

use crate::middleware::auth::RequireAuth;
use crate::routes;

// Production bindings for the generic core services.
pub type SharedAuthService = AuthService<MySqlUserRepository, SmtpMailer, RedisOtpStore>;
pub type SharedBookingService = BookingService<
    MySqlUserRepository,
    MySqlRoomRepository,
    MySqlLedgerRepository,
    RazorpayClient,
>;
pub type SharedRentService =
    RentService<MySqlUserRepository, MySqlRoomRepository, MySqlLedgerRepository>;
pub type SharedProfileService = ProfileService<MySqlUserRepository>;
pub type SharedResidenceService = ResidenceService<MySqlResidenceRepository>;

/// Application state that holds the shared services
pub struct AppState {
    pub auth_service: Arc<SharedAuthService>,
    pub booking_service: Arc<SharedBookingService>,
    pub rent_service: Arc<SharedRentService>,
    pub profile_service: Arc<SharedProfileService>,
    pub residence_service: Arc<SharedResidenceService>,
    pub token_service: Arc<TokenService>,
}

/// Register every route on the application.
///
/// The public surface sits directly under `/api/v1`; everything else is
/// grouped in an inner scope guarded by the JWT middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1")
            // Public surface
            .route("/roomTypes", web::get().to(routes::rooms::room_types))
            .route("/roomDetails/{id}", web::get().to(routes::rooms::room_details))
            .route("/admission", web::post().to(routes::auth::admission))
            .route("/verifyOtp", web::post().to(routes::auth::verify_otp))
            .route("/login", web::post().to(routes::auth::login))
            .route("/forgotPassword", web::post().to(routes::auth::forgot_password))
            .route("/resetPassword", web::post().to(routes::auth::reset_password))
            // Authenticated surface
            .service(
                web::scope("")
                    .wrap(RequireAuth)
                    // Guest: booking a room
                    .route(
                        "/createBookingOrder",
                        web::post().to(routes::booking::create_booking_order),
                    )
                    .route(
                        "/verifyBookingPayment",
                        web::post().to(routes::booking::verify_booking_payment),
                    )
                    // Resident: profile
                    .route("/userProfile/{id}", web::get().to(routes::profile::user_profile))
                    .route(
                        "/updateProfile/{id}",
                        web::patch().to(routes::profile::update_profile),
                    )
                    .route(
                        "/changePassword/{id}",
                        web::post().to(routes::profile::change_password),
                    )
                    // Resident: residence life
                    .route(
                        "/fetchHostelMenu",
                        web::get().to(routes::residence::fetch_hostel_menu),
                    )
                    .route(
                        "/hostelReview",
                        web::post().to(routes::residence::post_hostel_review),
                    )
                    .route(
                        "/hostelReview/{id}",
                        web::get().to(routes::residence::get_hostel_review),
                    )
                    .route(
                        "/hostelReview/{id}",
                        web::put().to(routes::residence::update_hostel_review),
                    )
                    .route(
                        "/hostelReview/{id}",
                        web::delete().to(routes::residence::delete_hostel_review),
                    )
                    .route(
                        "/leaveLetters",
                        web::get().to(routes::residence::get_leave_letters),
                    )
                    .route(
                        "/leaveLetters",
                        web::post().to(routes::residence::post_leave_letter),
                    )
                    .route(
                        "/complaints",
                        web::get().to(routes::residence::get_complaints),
                    )
                    .route(
                        "/complaints",
                        web::post().to(routes::residence::post_complaint),
                    )
                    // Resident: rooms
                    .route(
                        "/roomTypeDetails",
                        web::get().to(routes::rooms::room_type_details),
                    )
                    .route(
                        "/availableRoomTypes",
                        web::get().to(routes::rooms::available_room_types),
                    )
                    .route(
                        "/assignNewRoomType",
                        web::post().to(routes::rooms::assign_new_room_type),
                    )
                    // Resident: rent
                    .route("/rentDue", web::get().to(routes::rent::rent_due))
                    .route(
                        "/createRentOrder",
                        web::post().to(routes::rent::create_rent_order),
                    )
                    .route(
                        "/verifyRentPayment",
                        web::post().to(routes::rent::verify_rent_payment),
                    )
                    .route("/rentPaid", web::get().to(routes::rent::rent_paid))
                    .route(
                        "/rentPaymentStatus",
                        web::get().to(routes::rent::rent_payment_status),
                    ),
            ),
    );
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "staymate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
