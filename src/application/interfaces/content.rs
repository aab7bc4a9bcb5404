use crate::error::AppError;
use crate::model::requests::{QuestionsQuery, ResourcesQuery};
use crate::model::responses::{HealthResponse, LearningResource, QuestionRecord, UploadResponse};
use async_trait::async_trait;

/// Interface for the content service facade
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Queries the question bank
    async fn get_questions(&self, query: &QuestionsQuery) -> Result<Vec<QuestionRecord>, AppError>;

    /// Gets learning resources, optionally filtered
    async fn get_learning_resources(
        &self,
        query: &ResourcesQuery,
    ) -> Result<Vec<LearningResource>, AppError>;

    /// Uploads a file to the content service
    ///
    /// # Arguments
    /// * `file_name` - Name reported for the uploaded file
    /// * `bytes` - File contents
    /// * `content_type` - MIME type of the file (the backend accepts images,
    ///   videos and documents)
    async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadResponse, AppError>;

    /// Checks the content service health endpoint
    async fn health(&self) -> Result<HealthResponse, AppError>;
}
