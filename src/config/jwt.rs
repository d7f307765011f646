use std::env;

/// Token signing configuration, loaded once at startup.
///
/// # Panics
///
/// [`JwtConfig::from_env`] panics if `JWT_SECRET` is unset or blank. There is
/// deliberately no fallback secret: signing with a guessable default would
/// let anyone mint valid tokens, so startup fails closed instead.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        if secret.trim().is_empty() {
            panic!("JWT_SECRET must not be empty");
        }

        Self {
            secret,
            token_expiry: env::var("JWT_TOKEN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
        }
    }
}
