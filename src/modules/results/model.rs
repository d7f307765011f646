use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// A single subject score for a student, scoped to the school that owns it.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct StudentResult {
    pub id: Uuid,
    pub school_id: Uuid,
    pub exam_no: String,
    pub student_name: String,
    pub subject: String,
    pub score: i32,
    pub exam_year: i32,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ResultsQuery {
    /// Restrict results to one exam year
    pub exam_year: Option<i32>,
}
