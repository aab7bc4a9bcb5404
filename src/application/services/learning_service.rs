/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/2/26
******************************************************************************/
use crate::application::interfaces::LearningService;
use crate::config::Service;
use crate::constants::DEFAULT_SIMILAR_QUESTION_COUNT;
use crate::error::AppError;
use crate::model::requests::{
    GenerateQuestionsRequest, ProgressQuery, SubmitAnswerRequest, to_query_string,
};
use crate::model::responses::{
    GenerateQuestionsResponse, HealthResponse, LearningProgressResponse, SimilarQuestionsResponse,
    SubmitAnswerResponse,
};
use crate::transport::HttpGateway;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the learning facade
pub struct LearningServiceImpl<T: HttpGateway> {
    client: Arc<T>,
}

impl<T: HttpGateway> LearningServiceImpl<T> {
    /// Creates a new instance of the learning facade
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: HttpGateway + 'static> LearningService for LearningServiceImpl<T> {
    async fn generate_questions(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> Result<GenerateQuestionsResponse, AppError> {
        info!(
            "Generating {} {} questions for grade {}",
            request.question_count, request.subject, request.grade
        );
        self.client
            .post(Service::Learning, "/learning/generate-questions", request)
            .await
    }

    async fn submit_answer(
        &self,
        answer: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, AppError> {
        debug!("Submitting answer for question {}", answer.question_id);
        self.client
            .post(Service::Learning, "/learning/submit-answer", answer)
            .await
    }

    async fn get_progress(
        &self,
        query: &ProgressQuery,
    ) -> Result<LearningProgressResponse, AppError> {
        let path = format!("/learning/progress{}", to_query_string(query)?);
        self.client.get(Service::Learning, &path).await
    }

    async fn get_similar_questions(
        &self,
        question_id: &str,
        count: Option<u32>,
    ) -> Result<SimilarQuestionsResponse, AppError> {
        let count = count.unwrap_or(DEFAULT_SIMILAR_QUESTION_COUNT);
        let path = format!("/learning/similar-questions?question_id={question_id}&count={count}");
        self.client.get(Service::Learning, &path).await
    }

    async fn health(&self) -> Result<HealthResponse, AppError> {
        self.client.get(Service::Learning, "/learning/health").await
    }
}
