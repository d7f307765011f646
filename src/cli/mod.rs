//! Command-line provisioning.
//!
//! Schools are never created through the HTTP API. An operator runs
//! `markbook create-school <code> <lga_code> <name>` and hands the printed
//! PIN to the school out of band.

use sqlx::PgPool;

use crate::modules::schools::model::School;
use crate::modules::schools::service::SchoolService;
use crate::utils::errors::AppError;
use crate::utils::pin::{generate_pin, hash_pin};

/// Create a school row with a freshly generated PIN.
///
/// Returns the created school and the plaintext PIN. The PIN exists in
/// memory only here and in the caller that prints it; the database stores
/// the bcrypt hash.
pub async fn create_school(
    pool: &PgPool,
    school_code: &str,
    lga_code: &str,
    name: &str,
) -> Result<(School, String), AppError> {
    let pin = generate_pin();
    let pin_hash = hash_pin(&pin)?;

    let school = SchoolService::create_school(pool, school_code, lga_code, name, &pin_hash).await?;

    Ok((school, pin))
}
