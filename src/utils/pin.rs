//! School login PINs.
//!
//! Every school authenticates with its registration code plus a 6-digit PIN.
//! PINs are generated once during provisioning (see the `create-school` CLI
//! command) and stored only as a bcrypt hash on the school row.

use bcrypt::{DEFAULT_COST, hash, verify};
use validator::ValidationError;

use crate::utils::errors::AppError;

/// Generates a new login PIN: exactly 6 decimal digits, uniformly
/// distributed over `000000`..=`999999`, from a cryptographically secure
/// RNG.
pub fn generate_pin() -> String {
    use rand::Rng as _;
    let mut rng = rand::thread_rng();
    format!("{:06}", rng.gen_range(0..1_000_000))
}

/// Returns true iff `pin` is exactly 6 ASCII decimal digits.
///
/// No sign, no whitespace, no unicode digits.
pub fn validate_pin(pin: &str) -> bool {
    pin.len() == 6 && pin.bytes().all(|b| b.is_ascii_digit())
}

/// `validator`-compatible wrapper around [`validate_pin`] for request DTOs.
pub fn validate_pin_format(pin: &str) -> Result<(), ValidationError> {
    if validate_pin(pin) {
        Ok(())
    } else {
        let mut err = ValidationError::new("pin_format");
        err.message = Some("PIN must be exactly 6 digits".into());
        Err(err)
    }
}

pub fn hash_pin(pin: &str) -> Result<String, AppError> {
    hash(pin, DEFAULT_COST).map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash PIN: {}", e)))
}

pub fn verify_pin(pin: &str, pin_hash: &str) -> Result<bool, AppError> {
    verify(pin, pin_hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify PIN: {}", e)))
}
