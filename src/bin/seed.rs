use staynngo_api::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
    services::auth_service::hash_password,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(config.database, config.max_connections).await?;
    run_migrations(&pool).await?;

    let admin_id = ensure_user(&pool, "Site Admin", "admin@example.com", "admin123", "admin").await?;
    let guest_id = ensure_user(&pool, "Sample Guest", "guest@example.com", "guest123", "user").await?;
    let property_id = seed_property(&pool, admin_id).await?;

    println!("Seed completed. Admin ID: {admin_id}, Guest ID: {guest_id}, Property ID: {property_id}");
    Ok(())
}

async fn ensure_user(
    pool: &DbPool,
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<i64> {
    let password_hash = hash_password(password)?;

    let (user_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO users (name, email, password_hash, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {email} (role={role})");
    Ok(user_id)
}

async fn seed_property(pool: &DbPool, owner_id: i64) -> anyhow::Result<i64> {
    let address = "12 Lake View Road";

    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM properties WHERE owner_id = $1 AND address = $2")
            .bind(owner_id)
            .bind(address)
            .fetch_optional(pool)
            .await?;
    if let Some((id,)) = existing {
        println!("Property already seeded");
        return Ok(id);
    }

    let (property_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO properties (owner_id, address, city, state, country, description)
        VALUES ($1, $2, 'Pune', 'Maharashtra', 'India', 'Quiet stay near the lake')
        RETURNING id
        "#,
    )
    .bind(owner_id)
    .bind(address)
    .fetch_one(pool)
    .await?;

    let rooms = [("Single", 1, 1500_i64), ("Double", 2, 2500), ("Suite", 4, 5000)];
    for (room_type, capacity, price) in rooms {
        sqlx::query(
            "INSERT INTO rooms (property_id, room_type, capacity, price_per_night) VALUES ($1, $2, $3, $4)",
        )
        .bind(property_id)
        .bind(room_type)
        .bind(capacity)
        .bind(price)
        .execute(pool)
        .await?;
    }

    let amenities = [("WiFi", "High speed internet"), ("Parking", "Covered parking")];
    for (name, description) in amenities {
        sqlx::query("INSERT INTO amenities (property_id, name, description) VALUES ($1, $2, $3)")
            .bind(property_id)
            .bind(name)
            .bind(description)
            .execute(pool)
            .await?;
    }

    println!("Seeded property with rooms and amenities");
    Ok(property_id)
}
