use crate::error::AppError;
use crate::model::requests::{GenerateQuestionsRequest, ProgressQuery, SubmitAnswerRequest};
use crate::model::responses::{
    GenerateQuestionsResponse, HealthResponse, LearningProgressResponse, SimilarQuestionsResponse,
    SubmitAnswerResponse,
};
use async_trait::async_trait;

/// Interface for the learning service facade
#[async_trait]
pub trait LearningService: Send + Sync {
    /// Generates a personalized set of practice questions
    async fn generate_questions(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> Result<GenerateQuestionsResponse, AppError>;

    /// Submits an answer for grading
    async fn submit_answer(
        &self,
        answer: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, AppError>;

    /// Gets the learning progress report
    ///
    /// An all-empty query hits the progress endpoint without a query string.
    async fn get_progress(&self, query: &ProgressQuery)
    -> Result<LearningProgressResponse, AppError>;

    /// Gets questions similar to a reference question
    ///
    /// # Arguments
    /// * `question_id` - The reference question
    /// * `count` - Number of suggestions to request; defaults to 5
    async fn get_similar_questions(
        &self,
        question_id: &str,
        count: Option<u32>,
    ) -> Result<SimilarQuestionsResponse, AppError>;

    /// Checks the learning service health endpoint
    async fn health(&self) -> Result<HealthResponse, AppError>;
}
