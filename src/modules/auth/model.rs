use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::schools::model::School;
use crate::utils::pin::validate_pin_format;

/// Claims embedded in a school's bearer token.
///
/// The four identity fields are camelCase on the wire (the shape the portal
/// frontend already consumes). All four must be non-empty for a token to
/// verify; `is_complete` is the structural check, applied after the
/// cryptographic one. The string fields default to empty on decode so a
/// payload missing one still deserializes and fails that check instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClaims {
    #[serde(default)]
    pub school_id: String,
    #[serde(default)]
    pub lga_code: String,
    #[serde(default)]
    pub school_code: String,
    #[serde(default)]
    pub school_name: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl SchoolClaims {
    pub fn is_complete(&self) -> bool {
        !self.school_id.is_empty()
            && !self.lga_code.is_empty()
            && !self.school_code.is_empty()
            && !self.school_name.is_empty()
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "schoolCode is required"))]
    pub school_code: String,
    #[validate(custom(function = validate_pin_format))]
    pub pin: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub school: School,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> SchoolClaims {
        SchoolClaims {
            school_id: "9ff0a5a6-3d7c-4a52-b57a-1a4f6f7f2a11".to_string(),
            lga_code: "LGA-014".to_string(),
            school_code: "SCH-0042".to_string(),
            school_name: "Unity Comprehensive College".to_string(),
            exp: 1234567890,
            iat: 1234000000,
        }
    }

    #[test]
    fn test_claims_serialize_camel_case() {
        let serialized = serde_json::to_string(&claims()).unwrap();
        assert!(serialized.contains(r#""schoolCode":"SCH-0042""#));
        assert!(serialized.contains(r#""lgaCode":"LGA-014""#));
        assert!(serialized.contains(r#""schoolName":"Unity Comprehensive College""#));
    }

    #[test]
    fn test_claims_deserialize_defaults_missing_fields() {
        // schoolName absent: decode still succeeds, completeness check fails
        let json = r#"{"schoolId":"abc","lgaCode":"LGA-1","schoolCode":"SCH-1","exp":9999999999,"iat":9999999000}"#;
        let claims: SchoolClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.school_name, "");
        assert!(!claims.is_complete());
    }

    #[test]
    fn test_is_complete() {
        assert!(claims().is_complete());

        let mut blank_lga = claims();
        blank_lga.lga_code = String::new();
        assert!(!blank_lga.is_complete());
    }
}
