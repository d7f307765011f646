use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::results::model::StudentResult;
use crate::utils::errors::AppError;

pub struct ResultsService;

impl ResultsService {
    /// Fetch result rows for one school, newest exam year first.
    ///
    /// `school_id` always comes from verified token claims, never from the
    /// request, so a school cannot read another school's rows.
    #[instrument(skip(db))]
    pub async fn get_results_for_school(
        db: &PgPool,
        school_id: Uuid,
        exam_year: Option<i32>,
    ) -> Result<Vec<StudentResult>, AppError> {
        let results = sqlx::query_as::<_, StudentResult>(
            "SELECT id, school_id, exam_no, student_name, subject, score, exam_year
             FROM results
             WHERE school_id = $1 AND ($2::int4 IS NULL OR exam_year = $2)
             ORDER BY exam_year DESC, exam_no, subject",
        )
        .bind(school_id)
        .bind(exam_year)
        .fetch_all(db)
        .await?;

        Ok(results)
    }
}
