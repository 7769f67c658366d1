//! Auth service tests with in-memory collaborators.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::UserRole;
use crate::domain::entities::verification_code::OtpPurpose;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::MockUserRepository;
use crate::repositories::UserRepository;
use crate::services::token::TokenService;
use crate::services::verification::{
    MailService, OtpStore, VerificationConfig, VerificationService,
};

use super::{AdmissionRequest, AuthService};

// Low bcrypt cost keeps the tests fast.
const TEST_BCRYPT_COST: u32 = 4;

#[derive(Default)]
struct RecordingMailer {
    sent: RwLock<Vec<(String, String)>>,
}

impl RecordingMailer {
    async fn last_code(&self) -> String {
        self.sent.read().await.last().expect("a mail was sent").1.clone()
    }
}

#[async_trait]
impl MailService for RecordingMailer {
    async fn send_otp(&self, to: &str, code: &str, _purpose: OtpPurpose) -> Result<(), String> {
        self.sent
            .write()
            .await
            .push((to.to_string(), code.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryOtpStore {
    codes: RwLock<HashMap<String, (String, i64)>>,
}

fn store_key(email: &str, purpose: OtpPurpose) -> String {
    format!("{}:{}", purpose.as_str(), email)
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn store_code(
        &self,
        email: &str,
        purpose: OtpPurpose,
        code: &str,
        _ttl_secs: u64,
    ) -> Result<(), String> {
        self.codes
            .write()
            .await
            .insert(store_key(email, purpose), (code.to_string(), 0));
        Ok(())
    }

    async fn get_code(&self, email: &str, purpose: OtpPurpose) -> Result<Option<String>, String> {
        Ok(self
            .codes
            .read()
            .await
            .get(&store_key(email, purpose))
            .map(|(c, _)| c.clone()))
    }

    async fn increment_attempts(&self, email: &str, purpose: OtpPurpose) -> Result<i64, String> {
        let mut codes = self.codes.write().await;
        let entry = codes.get_mut(&store_key(email, purpose)).ok_or("missing")?;
        entry.1 += 1;
        Ok(entry.1)
    }

    async fn remove_code(&self, email: &str, purpose: OtpPurpose) -> Result<(), String> {
        self.codes.write().await.remove(&store_key(email, purpose));
        Ok(())
    }
}

struct Fixture {
    service: AuthService<MockUserRepository, RecordingMailer, InMemoryOtpStore>,
    users: Arc<MockUserRepository>,
    mailer: Arc<RecordingMailer>,
}

fn fixture() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(RecordingMailer::default());
    let store = Arc::new(InMemoryOtpStore::default());
    let verification = Arc::new(VerificationService::new(
        mailer.clone(),
        store,
        VerificationConfig::default(),
    ));
    let tokens = Arc::new(TokenService::new("test-secret", 3600));
    let service = AuthService::new(users.clone(), verification, tokens, TEST_BCRYPT_COST);
    Fixture {
        service,
        users,
        mailer,
    }
}

fn admission_form() -> AdmissionRequest {
    AdmissionRequest {
        full_name: "Meera Pillai".to_string(),
        email: "meera@example.com".to_string(),
        password: "Str0ng!pass".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2001, 7, 23).unwrap(),
        gender: "Female".to_string(),
        mobile_number: "9876543210".to_string(),
        aadhar_number: "123456789012".to_string(),
        parent_name: "Lakshmi Pillai".to_string(),
        parent_mobile_number: "9876500001".to_string(),
        blood_group: "B+".to_string(),
        house_name: "Sreelakam".to_string(),
        area: "Kowdiar".to_string(),
        landmark: "Opposite park".to_string(),
        city: "Thiruvananthapuram".to_string(),
        state: "Kerala".to_string(),
        country: "India".to_string(),
        pincode: "695003".to_string(),
    }
}

#[tokio::test]
async fn test_full_signup_flow() {
    let fx = fixture();
    let form = admission_form();

    fx.service.begin_admission(&form).await.unwrap();
    let code = fx.mailer.last_code().await;

    let user = fx.service.complete_signup(&form, &code).await.unwrap();
    assert_eq!(user.role, UserRole::Guest);
    assert!(user.room_no.is_none());
    assert_ne!(user.password_hash, form.password);

    // Login works with the new credentials.
    let login = fx
        .service
        .login("meera@example.com", "Str0ng!pass")
        .await
        .unwrap();
    assert_eq!(login.user_id, user.id);
    assert_eq!(login.role, UserRole::Guest);
    assert!(!login.token.is_empty());
}

#[tokio::test]
async fn test_signup_with_wrong_otp_creates_nothing() {
    let fx = fixture();
    let form = admission_form();

    fx.service.begin_admission(&form).await.unwrap();
    let code = fx.mailer.last_code().await;
    let wrong = if code == "111111" { "222222" } else { "111111" };

    let err = fx.service.complete_signup(&form, wrong).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidOtp)));
    assert!(fx
        .users
        .find_by_email("meera@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_duplicate_admission_rejected() {
    let fx = fixture();
    let form = admission_form();

    fx.service.begin_admission(&form).await.unwrap();
    let code = fx.mailer.last_code().await;
    fx.service.complete_signup(&form, &code).await.unwrap();

    let err = fx.service.begin_admission(&form).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::UserAlreadyExists)
    ));
}

#[tokio::test]
async fn test_weak_password_rejected_at_admission() {
    let fx = fixture();
    let mut form = admission_form();
    form.password = "weak".to_string();

    let err = fx.service.begin_admission(&form).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::WeakPassword)));
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let fx = fixture();
    let form = admission_form();
    fx.service.begin_admission(&form).await.unwrap();
    let code = fx.mailer.last_code().await;
    fx.service.complete_signup(&form, &code).await.unwrap();

    let err = fx
        .service
        .login("meera@example.com", "Wr0ng!pass")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::IncorrectCredentials)
    ));
}

#[tokio::test]
async fn test_login_unknown_email() {
    let fx = fixture();
    let err = fx
        .service
        .login("nobody@example.com", "Str0ng!pass")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::IncorrectCredentials)
    ));
}

#[tokio::test]
async fn test_forgot_password_requires_known_email() {
    let fx = fixture();
    let err = fx
        .service
        .forgot_password("nobody@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UnknownEmail)));
}

#[tokio::test]
async fn test_password_reset_flow() {
    let fx = fixture();
    let form = admission_form();
    fx.service.begin_admission(&form).await.unwrap();
    let code = fx.mailer.last_code().await;
    fx.service.complete_signup(&form, &code).await.unwrap();

    fx.service
        .forgot_password("meera@example.com")
        .await
        .unwrap();
    let reset_code = fx.mailer.last_code().await;
    fx.service
        .verify_password_reset_otp("meera@example.com", &reset_code)
        .await
        .unwrap();

    // Reusing the current password is rejected.
    let err = fx
        .service
        .reset_password("meera@example.com", "Str0ng!pass", "Str0ng!pass")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::PasswordReused)));

    fx.service
        .reset_password("meera@example.com", "N3w!passwd", "N3w!passwd")
        .await
        .unwrap();

    fx.service
        .login("meera@example.com", "N3w!passwd")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_change_password_checks_current() {
    let fx = fixture();
    let form = admission_form();
    fx.service.begin_admission(&form).await.unwrap();
    let code = fx.mailer.last_code().await;
    let user = fx.service.complete_signup(&form, &code).await.unwrap();

    let err = fx
        .service
        .change_password(user.id, "Wr0ng!pass", "N3w!passwd", "N3w!passwd")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::IncorrectPassword)
    ));

    fx.service
        .change_password(user.id, "Str0ng!pass", "N3w!passwd", "N3w!passwd")
        .await
        .unwrap();
    fx.service
        .login("meera@example.com", "N3w!passwd")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_change_password_mismatched_confirmation() {
    let fx = fixture();
    let form = admission_form();
    fx.service.begin_admission(&form).await.unwrap();
    let code = fx.mailer.last_code().await;
    let user = fx.service.complete_signup(&form, &code).await.unwrap();

    let err = fx
        .service
        .change_password(user.id, "Str0ng!pass", "N3w!passwd", "Other!pass1")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::PasswordMismatch)
    ));
}
