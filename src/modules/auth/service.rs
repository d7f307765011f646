use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::schools::service::SchoolService;
use crate::utils::errors::AppError;
use crate::utils::jwt::issue_school_token;
use crate::utils::pin::verify_pin;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Authenticate a school by registration code and PIN, issuing a bearer
    /// token on success.
    ///
    /// Unknown code and wrong PIN produce the same response, so the login
    /// endpoint does not reveal which codes exist.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_school(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let school = SchoolService::find_by_code(db, &dto.school_code)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("Invalid school code or PIN"))
            })?;

        let is_valid = verify_pin(&dto.pin, &school.pin_hash)?;

        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid school code or PIN"
            )));
        }

        let token = issue_school_token(
            school.id,
            &school.lga_code,
            &school.school_code,
            &school.name,
            jwt_config,
        )?;

        Ok(LoginResponse {
            token,
            school: school.into_school(),
        })
    }
}
