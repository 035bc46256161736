//! Seed the service catalog and executor directory.
//!
//! Services are upserted by name, so the command is safe to run repeatedly.
//! Executors are only inserted into an empty directory.

use secrecy::SecretString;
use sqlx::PgPool;
use tracing::info;

use gigmarket_web::db;

/// Service categories offered on the order form.
const SERVICES: &[(&str, &str)] = &[
    ("Web development", "Websites, web applications, and APIs"),
    ("Design", "Logos, branding, and UI design"),
    ("Copywriting", "Articles, product descriptions, and landing pages"),
    ("Translation", "Document and website translation"),
    ("Marketing", "SEO, advertising campaigns, and analytics"),
];

const EXECUTORS: &[(&str, &str, &str)] = &[
    (
        "Ada Novak",
        "Web development",
        "Full-stack developer with ten years of shipped projects.",
    ),
    (
        "Marco Silva",
        "Design",
        "Brand and product designer. Portfolio on request.",
    ),
    (
        "Yuki Tanaka",
        "Translation",
        "English/Japanese translator specialising in technical docs.",
    ),
];

/// Seed services and executors.
///
/// # Errors
///
/// Returns an error if environment variables are missing or database
/// operations fail.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("GIGMARKET_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "GIGMARKET_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let inserted = seed_services(&pool).await?;
    info!("Services seeded ({inserted} new)");

    let inserted = seed_executors(&pool).await?;
    info!("Executors seeded ({inserted} new)");

    Ok(())
}

async fn seed_services(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (name, description) in SERVICES {
        let result = sqlx::query(
            "INSERT INTO services (name, description) VALUES ($1, $2)
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

async fn seed_executors(pool: &PgPool) -> Result<u64, sqlx::Error> {
    // No natural key on executors, so only seed an empty directory
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM executors")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for (name, specialty, bio) in EXECUTORS {
        let result =
            sqlx::query("INSERT INTO executors (name, specialty, bio) VALUES ($1, $2, $3)")
                .bind(name)
                .bind(specialty)
                .bind(bio)
                .execute(pool)
                .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}
