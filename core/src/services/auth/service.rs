//! Main authentication service implementation

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use sm_shared::validation::is_strong_password;

use crate::domain::entities::user::{Address, User, UserRole};
use crate::domain::entities::verification_code::OtpPurpose;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;
use crate::services::verification::{MailService, OtpStore, SendOtpResult, VerificationService};

use super::types::{AdmissionRequest, LoginResult};

/// Authentication service covering admission, login, and the password
/// lifecycle.
pub struct AuthService<U, M, C>
where
    U: UserRepository,
    M: MailService,
    C: OtpStore,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Verification service for OTP handling
    verification_service: Arc<VerificationService<M, C>>,
    /// Token service for session tokens
    token_service: Arc<TokenService>,
    /// bcrypt cost factor
    bcrypt_cost: u32,
}

impl<U, M, C> AuthService<U, M, C>
where
    U: UserRepository,
    M: MailService,
    C: OtpStore,
{
    pub fn new(
        user_repository: Arc<U>,
        verification_service: Arc<VerificationService<M, C>>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repository,
            verification_service,
            token_service,
            bcrypt_cost,
        }
    }

    /// Start an admission: reject duplicates, then send a signup OTP to
    /// the applicant's email. The form itself is only persisted after
    /// the OTP verifies.
    pub async fn begin_admission(&self, form: &AdmissionRequest) -> DomainResult<SendOtpResult> {
        if self
            .user_repository
            .exists_by_email_or_mobile(&form.email, &form.mobile_number)
            .await?
        {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        if !is_strong_password(&form.password) {
            return Err(DomainError::Auth(AuthError::WeakPassword));
        }

        self.verification_service
            .send_code(&form.email, OtpPurpose::Signup)
            .await
    }

    /// Complete a signup: verify the OTP, re-check duplicates, hash the
    /// password, and create the user as a guest.
    pub async fn complete_signup(
        &self,
        form: &AdmissionRequest,
        otp: &str,
    ) -> DomainResult<User> {
        // Re-check: another signup may have landed while the OTP was in flight.
        if self
            .user_repository
            .exists_by_email_or_mobile(&form.email, &form.mobile_number)
            .await?
        {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        self.verification_service
            .verify_code(&form.email, OtpPurpose::Signup, otp)
            .await?;

        let password_hash = bcrypt::hash(&form.password, self.bcrypt_cost).map_err(|e| {
            DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            }
        })?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            password_hash,
            date_of_birth: form.date_of_birth,
            gender: form.gender.clone(),
            mobile_number: form.mobile_number.clone(),
            aadhar_number: form.aadhar_number.clone(),
            parent_name: form.parent_name.clone(),
            parent_mobile_number: form.parent_mobile_number.clone(),
            blood_group: form.blood_group.clone(),
            address: Address {
                house_name: form.house_name.clone(),
                area: form.area.clone(),
                landmark: form.landmark.clone(),
                city: form.city.clone(),
                state: form.state.clone(),
                country: form.country.clone(),
                pincode: form.pincode.clone(),
            },
            role: UserRole::Guest,
            room_no: None,
            date_of_admission: None,
            created_at: now,
            updated_at: now,
        };

        let user = self.user_repository.create(user).await?;
        tracing::info!(user_id = %user.id, event = "signup_completed", "New user registered");
        Ok(user)
    }

    /// Authenticate with email and password, issuing a session token.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::IncorrectCredentials))?;

        let matches = bcrypt::verify(password, &user.password_hash).map_err(|e| {
            DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            }
        })?;
        if !matches {
            return Err(DomainError::Auth(AuthError::IncorrectCredentials));
        }

        let token = self.token_service.issue(user.id, user.role)?;
        tracing::info!(user_id = %user.id, role = ?user.role, event = "login", "User logged in");
        Ok(LoginResult::for_user(&user, token))
    }

    /// Send a password-reset OTP to a registered email.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<SendOtpResult> {
        if self.user_repository.find_by_email(email).await?.is_none() {
            return Err(DomainError::Auth(AuthError::UnknownEmail));
        }

        self.verification_service
            .send_code(email, OtpPurpose::PasswordReset)
            .await
    }

    /// Verify a password-reset OTP.
    pub async fn verify_password_reset_otp(&self, email: &str, otp: &str) -> DomainResult<()> {
        self.verification_service
            .verify_code(email, OtpPurpose::PasswordReset, otp)
            .await
    }

    /// Set a new password after a verified reset.
    pub async fn reset_password(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> DomainResult<()> {
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UnknownEmail))?;

        if !is_strong_password(password) {
            return Err(DomainError::Auth(AuthError::WeakPassword));
        }

        let same = bcrypt::verify(password, &user.password_hash).unwrap_or(false);
        if same {
            return Err(DomainError::Auth(AuthError::PasswordReused));
        }

        if password != confirm_password {
            return Err(DomainError::Auth(AuthError::PasswordMismatch));
        }

        let hash = bcrypt::hash(password, self.bcrypt_cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })?;
        user.set_password_hash(hash);
        self.user_repository.update(user).await?;
        Ok(())
    }

    /// Change the password of a logged-in user.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> DomainResult<()> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let current_ok = bcrypt::verify(current_password, &user.password_hash).unwrap_or(false);
        if !current_ok {
            return Err(DomainError::Auth(AuthError::IncorrectPassword));
        }

        if new_password == current_password {
            return Err(DomainError::Auth(AuthError::PasswordReused));
        }

        if !is_strong_password(new_password) {
            return Err(DomainError::Auth(AuthError::WeakPassword));
        }

        if new_password != confirm_password {
            return Err(DomainError::Auth(AuthError::PasswordMismatch));
        }

        let hash =
            bcrypt::hash(new_password, self.bcrypt_cost).map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })?;
        user.set_password_hash(hash);
        self.user_repository.update(user).await?;
        Ok(())
    }
}
