//! Token issuance and verification for school sessions.
//!
//! A school that logs in receives a signed HS256 token carrying its identity
//! claims ([`SchoolClaims`]). Verification collapses every failure into an
//! opaque [`TokenRejected`]: callers cannot tell an expired token from a
//! forged one, which keeps the API from acting as an oracle. The distinction
//! survives only in the logs.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::warn;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::SchoolClaims;
use crate::utils::errors::AppError;

/// Internal diagnostic for a verification failure. Kept private to this
/// module so no caller can branch on it; it only reaches the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RejectReason {
    Malformed,
    BadSignature,
    Expired,
    InvalidClaims,
}

impl RejectReason {
    fn as_str(self) -> &'static str {
        match self {
            RejectReason::Malformed => "malformed",
            RejectReason::BadSignature => "bad_signature",
            RejectReason::Expired => "expired",
            RejectReason::InvalidClaims => "invalid_claims",
        }
    }
}

/// Uniform rejection returned by [`verify_school_token`].
///
/// Carries no public detail. Every rejected token, whatever the cause, maps
/// to the same unauthorized response.
#[derive(Debug)]
pub struct TokenRejected(());

fn reject(reason: RejectReason) -> TokenRejected {
    // The raw token and signature are intentionally not logged.
    warn!(reason = reason.as_str(), "rejected school token");
    TokenRejected(())
}

/// Issues a signed token for an authenticated school.
///
/// The caller is responsible for the business meaning of the identity fields
/// (the school row was already looked up and its PIN checked). Expiry is
/// fixed at issuance to now + `jwt_config.token_expiry` seconds and cannot
/// be extended later; a school logs in again for a fresh token.
pub fn issue_school_token(
    school_id: Uuid,
    lga_code: &str,
    school_code: &str,
    school_name: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.token_expiry as usize;

    let claims = SchoolClaims {
        school_id: school_id.to_string(),
        lga_code: lga_code.to_string(),
        school_code: school_code.to_string(),
        school_name: school_name.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies a presented token and reconstructs the school claims.
///
/// Rejection paths, in order: malformed token, bad signature (including a
/// header naming any algorithm other than HS256), expired, and structurally
/// incomplete claims. Signature comparison is constant-time inside
/// `jsonwebtoken`. Leeway is zero so a token is valid for exactly its
/// issued window.
pub fn verify_school_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<SchoolClaims, TokenRejected> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data = decode::<SchoolClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| reject(classify(&e)))?;

    if !data.claims.is_complete() {
        return Err(reject(RejectReason::InvalidClaims));
    }

    Ok(data.claims)
}

fn classify(err: &jsonwebtoken::errors::Error) -> RejectReason {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName => RejectReason::BadSignature,
        ErrorKind::ExpiredSignature | ErrorKind::ImmatureSignature => RejectReason::Expired,
        _ => RejectReason::Malformed,
    }
}
