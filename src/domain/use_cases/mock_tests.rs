use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::mock_test::{MockTest, NewMockTest},
    errors::AppError,
    repositories::mock_test::MockTestRepository,
};


pub struct MockTestHandler<R>
where
    R: MockTestRepository + ?Sized,
{
    pub mock_test_repo: Arc<R>,
}

impl<R> MockTestHandler<R>
where
    R: MockTestRepository + ?Sized,
{
    pub fn new(mock_test_repo: Arc<R>) -> Self {
        MockTestHandler { mock_test_repo }
    }

    /// Lists the user's mock tests, newest first
    pub async fn list_mock_tests(&self, user_id: &Uuid) -> Result<Vec<MockTest>, AppError> {
        self.mock_test_repo.list_mock_tests(user_id).await
    }

    /// Stores a mock test result; `max_score` must be positive and not below `score`
    pub async fn add_mock_test(&self, user_id: Uuid, request: NewMockTest) -> Result<MockTest, AppError> {
        request.validate()?;

        let test = request.into_mock_test(user_id);
        self.mock_test_repo.create_mock_test(&test).await
    }

    pub async fn delete_mock_test(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        self.mock_test_repo.delete_mock_test(id, user_id).await
    }
}
