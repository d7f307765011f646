use sqlx::PgPool;
use tracing::instrument;

use crate::modules::schools::model::{School, SchoolWithPin};
use crate::utils::errors::AppError;

pub struct SchoolService;

impl SchoolService {
    /// Look up a school (including its PIN hash) by registration code.
    #[instrument(skip(db))]
    pub async fn find_by_code(
        db: &PgPool,
        school_code: &str,
    ) -> Result<Option<SchoolWithPin>, AppError> {
        let school = sqlx::query_as::<_, SchoolWithPin>(
            "SELECT id, school_code, lga_code, name, pin_hash, created_at
             FROM schools WHERE school_code = $1",
        )
        .bind(school_code)
        .fetch_optional(db)
        .await?;

        Ok(school)
    }

    /// Insert a new school row. The PIN is hashed by the caller; this
    /// service never sees the plaintext.
    #[instrument(skip(db, pin_hash))]
    pub async fn create_school(
        db: &PgPool,
        school_code: &str,
        lga_code: &str,
        name: &str,
        pin_hash: &str,
    ) -> Result<School, AppError> {
        let school = sqlx::query_as::<_, School>(
            "INSERT INTO schools (school_code, lga_code, name, pin_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING id, school_code, lga_code, name, created_at",
        )
        .bind(school_code)
        .bind(lga_code)
        .bind(name)
        .bind(pin_hash)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "School with code {} already exists",
                        school_code
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(school)
    }
}
