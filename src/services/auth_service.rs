use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::auth::{
        Claims, CustomerProfile, ForgotPasswordRequest, LoginRequest, LoginResponse,
        RegisterRequest, ResetPasswordRequest,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Customer,
    response::{ApiResponse, Meta},
};

const RESET_CODE_TTL_MINUTES: i64 = 15;

pub async fn register_customer(
    pool: &DbPool,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<CustomerProfile>> {
    let RegisterRequest { email, password } = payload;
    let exist: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM customers WHERE email = $1")
        .bind(email.as_str())
        .fetch_optional(pool)
        .await?;

    if exist.is_some() {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }

    let password_hash = hash_password(&password)?;
    let id = Uuid::new_v4();

    let customer: Customer = sqlx::query_as(
        "INSERT INTO customers (id, email, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(id)
    .bind(email.as_str())
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(ApiResponse::success(
        "Account created",
        profile_from(customer),
        None,
    ))
}

pub async fn login_customer(
    pool: &DbPool,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    let customer: Option<Customer> =
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(pool)
            .await?;

    let customer = match customer {
        Some(c) => c,
        None => return Err(AppError::BadRequest("Invalid email or password".into())),
    };

    let parsed_hash = PasswordHash::new(&customer.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: customer.email.clone(),
        role: customer.role.clone(),
        exp: expiration.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    let resp = LoginResponse {
        token: format!("Bearer {}", token),
    };

    Ok(ApiResponse::success("Logged in", resp, Some(Meta::empty())))
}

pub async fn current_customer(
    pool: &DbPool,
    user: &AuthUser,
) -> AppResult<ApiResponse<CustomerProfile>> {
    let customer: Option<Customer> =
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE email = $1")
            .bind(user.email.as_str())
            .fetch_optional(pool)
            .await?;

    let customer = customer.ok_or(AppError::Unauthorized)?;
    Ok(ApiResponse::success("OK", profile_from(customer), None))
}

/// Issue a short-lived reset code. The response is the same whether or not
/// the email is registered, so the endpoint cannot be used to probe accounts.
pub async fn forgot_password(
    pool: &DbPool,
    payload: ForgotPasswordRequest,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let customer: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM customers WHERE email = $1")
        .bind(payload.email.as_str())
        .fetch_optional(pool)
        .await?;

    if let Some((customer_id,)) = customer {
        let code = generate_reset_code();
        let expires_at = Utc::now() + Duration::minutes(RESET_CODE_TTL_MINUTES);

        // Re-issuing replaces any previous code for the customer.
        sqlx::query(
            r#"
            INSERT INTO password_resets (id, customer_id, code, expires_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (customer_id)
            DO UPDATE SET code = EXCLUDED.code, expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(customer_id)
        .bind(code)
        .bind(expires_at)
        .execute(pool)
        .await?;

        // TODO: hand the code to the transactional mailer once it is wired up.
        tracing::info!(customer_id = %customer_id, "password reset code issued");
    }

    Ok(ApiResponse::success(
        "If the email is registered, a reset code has been sent",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn reset_password(
    pool: &DbPool,
    payload: ResetPasswordRequest,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let row: Option<(Uuid, String, DateTime<Utc>)> = sqlx::query_as(
        r#"
        SELECT c.id, r.code, r.expires_at
        FROM password_resets r
        JOIN customers c ON c.id = r.customer_id
        WHERE c.email = $1
        "#,
    )
    .bind(payload.email.as_str())
    .fetch_optional(pool)
    .await?;

    let (customer_id, code, expires_at) = match row {
        Some(r) => r,
        None => return Err(AppError::BadRequest("Invalid or expired reset code".into())),
    };

    if code != payload.code || expires_at < Utc::now() {
        return Err(AppError::BadRequest("Invalid or expired reset code".into()));
    }

    let password_hash = hash_password(&payload.new_password)?;

    sqlx::query("UPDATE customers SET password_hash = $2 WHERE id = $1")
        .bind(customer_id)
        .bind(password_hash)
        .execute(pool)
        .await?;

    sqlx::query("DELETE FROM password_resets WHERE customer_id = $1")
        .bind(customer_id)
        .execute(pool)
        .await?;

    Ok(ApiResponse::success(
        "Password updated",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

// Six digits taken from the v4 random block.
fn generate_reset_code() -> String {
    let bytes = Uuid::new_v4().into_bytes();
    let n = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) % 1_000_000;
    format!("{n:06}")
}

fn profile_from(customer: Customer) -> CustomerProfile {
    CustomerProfile {
        id: customer.id,
        email: customer.email,
        role: customer.role,
        created_at: customer.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::generate_reset_code;

    #[test]
    fn reset_codes_are_six_digits() {
        for _ in 0..64 {
            let code = generate_reset_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
