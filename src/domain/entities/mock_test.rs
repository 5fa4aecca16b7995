use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MockTest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub test_name: String,
    pub score: i32,
    pub max_score: i32,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl MockTest {
    /// Fraction of the attainable score, `score / max_score`.
    ///
    /// A record with a non-positive `max_score` has no meaningful ratio and
    /// counts as `0.0`. Ratios above 1.0 are passed through untouched.
    pub fn ratio(&self) -> f64 {
        if self.max_score <= 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.max_score)
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_score_range"))]
pub struct NewMockTest {
    #[validate(length(min = 1, max = 200, message = "Test name must be between 1 and 200 characters"))]
    pub test_name: String,

    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub score: i32,

    #[validate(range(min = 1, message = "Max score must be at least 1"))]
    pub max_score: i32,

    pub date: NaiveDate,
}

fn validate_score_range(test: &NewMockTest) -> Result<(), ValidationError> {
    if test.score > test.max_score {
        let mut error = ValidationError::new("score_range");
        error.message = Some("Score cannot exceed max score".into());
        return Err(error);
    }
    Ok(())
}

impl NewMockTest {
    pub fn into_mock_test(self, user_id: Uuid) -> MockTest {
        MockTest {
            id: Uuid::new_v4(),
            user_id,
            test_name: self.test_name.trim().to_string(),
            score: self.score,
            max_score: self.max_score,
            date: self.date,
            created_at: Utc::now(),
        }
    }
}
