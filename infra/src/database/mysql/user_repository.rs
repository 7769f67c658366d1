//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sm_core::domain::entities::user::{Address, User, UserRole};
use sm_core::errors::DomainError;
use sm_core::repositories::UserRepository;

const USER_COLUMNS: &str = r#"
    id, full_name, email, password_hash, date_of_birth, gender,
    mobile_number, aadhar_number, parent_name, parent_mobile_number,
    blood_group, house_name, area, landmark, city, state, country,
    pincode, role, room_no, date_of_admission, created_at, updated_at
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let db_err = |e: sqlx::Error| DomainError::Database {
            message: format!("Failed to read user row: {}", e),
        };

        let id: String = row.try_get("id").map_err(db_err)?;
        let role_str: String = row.try_get("role").map_err(db_err)?;
        let role = match role_str.as_str() {
            "resident" => UserRole::Resident,
            _ => UserRole::Guest,
        };

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            full_name: row.try_get("full_name").map_err(db_err)?,
            email: row.try_get("email").map_err(db_err)?,
            password_hash: row.try_get("password_hash").map_err(db_err)?,
            date_of_birth: row
                .try_get::<NaiveDate, _>("date_of_birth")
                .map_err(db_err)?,
            gender: row.try_get("gender").map_err(db_err)?,
            mobile_number: row.try_get("mobile_number").map_err(db_err)?,
            aadhar_number: row.try_get("aadhar_number").map_err(db_err)?,
            parent_name: row.try_get("parent_name").map_err(db_err)?,
            parent_mobile_number: row.try_get("parent_mobile_number").map_err(db_err)?,
            blood_group: row.try_get("blood_group").map_err(db_err)?,
            address: Address {
                house_name: row.try_get("house_name").map_err(db_err)?,
                area: row.try_get("area").map_err(db_err)?,
                landmark: row.try_get("landmark").map_err(db_err)?,
                city: row.try_get("city").map_err(db_err)?,
                state: row.try_get("state").map_err(db_err)?,
                country: row.try_get("country").map_err(db_err)?,
                pincode: row.try_get("pincode").map_err(db_err)?,
            },
            role,
            room_no: row.try_get("room_no").map_err(db_err)?,
            date_of_admission: row
                .try_get::<Option<DateTime<Utc>>, _>("date_of_admission")
                .map_err(db_err)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(db_err)?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at").map_err(db_err)?,
        })
    }

    fn role_str(role: UserRole) -> &'static str {
        match role {
            UserRole::Guest => "guest",
            UserRole::Resident => "resident",
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email_or_mobile(
        &self,
        email: &str,
        mobile_number: &str,
    ) -> Result<bool, DomainError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS cnt FROM users WHERE email = ? OR mobile_number = ?",
        )
        .bind(email)
        .bind(mobile_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Database query failed: {}", e),
        })?;

        let count: i64 = row.try_get("cnt").map_err(|e| DomainError::Database {
            message: format!("Failed to read count: {}", e),
        })?;
        Ok(count > 0)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, full_name, email, password_hash, date_of_birth, gender,
                mobile_number, aadhar_number, parent_name, parent_mobile_number,
                blood_group, house_name, area, landmark, city, state, country,
                pincode, role, room_no, date_of_admission, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.full_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.date_of_birth)
            .bind(&user.gender)
            .bind(&user.mobile_number)
            .bind(&user.aadhar_number)
            .bind(&user.parent_name)
            .bind(&user.parent_mobile_number)
            .bind(&user.blood_group)
            .bind(&user.address.house_name)
            .bind(&user.address.area)
            .bind(&user.address.landmark)
            .bind(&user.address.city)
            .bind(&user.address.state)
            .bind(&user.address.country)
            .bind(&user.address.pincode)
            .bind(Self::role_str(user.role))
            .bind(&user.room_no)
            .bind(user.date_of_admission)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create user: {}", e),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                full_name = ?, date_of_birth = ?, gender = ?,
                mobile_number = ?, aadhar_number = ?, parent_name = ?,
                parent_mobile_number = ?, blood_group = ?, house_name = ?,
                area = ?, landmark = ?, city = ?, state = ?, country = ?,
                pincode = ?, password_hash = ?, role = ?, room_no = ?,
                date_of_admission = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.full_name)
            .bind(user.date_of_birth)
            .bind(&user.gender)
            .bind(&user.mobile_number)
            .bind(&user.aadhar_number)
            .bind(&user.parent_name)
            .bind(&user.parent_mobile_number)
            .bind(&user.blood_group)
            .bind(&user.address.house_name)
            .bind(&user.address.area)
            .bind(&user.address.landmark)
            .bind(&user.address.city)
            .bind(&user.address.state)
            .bind(&user.address.country)
            .bind(&user.address.pincode)
            .bind(&user.password_hash)
            .bind(Self::role_str(user.role))
            .bind(&user.room_no)
            .bind(user.date_of_admission)
            .bind(Utc::now())
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update user: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        let mut updated = user;
        updated.updated_at = Utc::now();
        Ok(updated)
    }
}
