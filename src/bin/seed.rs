use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use dates_shop_api::{
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let pool = create_pool(&config.database_url).await?;

    let admin_id = ensure_customer(&pool, "admin@example.com", "admin123", "admin").await?;
    let customer_id = ensure_customer(&pool, "customer@example.com", "customer123", "customer").await?;
    seed_catalog(&pool).await?;

    println!("Seed completed. Admin ID: {admin_id}, Customer ID: {customer_id}");
    Ok(())
}

async fn ensure_customer(
    pool: &sqlx::PgPool,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO customers (id, email, password_hash, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_optional(pool)
    .await?;

    let customer_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM customers WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured customer {email} (role={role})");
    Ok(customer_id)
}

async fn seed_catalog(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let varieties = vec![
        ("Sukkari", "سكري", "Al-Qassim"),
        ("Ajwa", "عجوة", "Madinah"),
        ("Khalas", "خلاص", "Al-Ahsa"),
        ("Medjool", "مجهول", "Jordan Valley"),
    ];

    let mut variety_ids = Vec::new();
    for (name_en, name_ar, origin) in varieties {
        let existing: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM varieties WHERE name_en = $1")
                .bind(name_en)
                .fetch_optional(pool)
                .await?;
        let id = match existing {
            Some((id,)) => id,
            None => {
                let id = Uuid::new_v4();
                sqlx::query(
                    "INSERT INTO varieties (id, name_en, name_ar, origin) VALUES ($1, $2, $3, $4)",
                )
                .bind(id)
                .bind(name_en)
                .bind(name_ar)
                .bind(origin)
                .execute(pool)
                .await?;
                id
            }
        };
        variety_ids.push(id);
    }

    let products = vec![
        ("Sukkari Box 1kg", "سكري فاخر ١ كجم", 6500, 120, variety_ids[0]),
        ("Ajwa Premium 500g", "عجوة المدينة ٥٠٠ جم", 9800, 60, variety_ids[1]),
        ("Khalas Pouch 750g", "خلاص ٧٥٠ جم", 4200, 200, variety_ids[2]),
        ("Medjool Jumbo 1kg", "مجهول جامبو ١ كجم", 8900, 80, variety_ids[3]),
    ];

    for (title_en, title_ar, price, stock, variety_id) in products {
        let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM products WHERE title_en = $1")
            .bind(title_en)
            .fetch_optional(pool)
            .await?;
        if exists.is_some() {
            continue;
        }
        sqlx::query(
            r#"
            INSERT INTO products (id, title_en, title_ar, price, stock, variety_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title_en)
        .bind(title_ar)
        .bind(price as i64)
        .bind(stock)
        .bind(variety_id)
        .execute(pool)
        .await?;
    }

    println!("Seeded varieties and products");
    Ok(())
}
