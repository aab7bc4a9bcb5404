/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/2/26
******************************************************************************/
use crate::application::interfaces::ContentService;
use crate::config::Service;
use crate::error::AppError;
use crate::model::requests::{QuestionsQuery, ResourcesQuery, to_query_string};
use crate::model::responses::{HealthResponse, LearningResource, QuestionRecord, UploadResponse};
use crate::transport::HttpGateway;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Implementation of the content facade
pub struct ContentServiceImpl<T: HttpGateway> {
    client: Arc<T>,
}

impl<T: HttpGateway> ContentServiceImpl<T> {
    /// Creates a new instance of the content facade
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: HttpGateway + 'static> ContentService for ContentServiceImpl<T> {
    async fn get_questions(&self, query: &QuestionsQuery) -> Result<Vec<QuestionRecord>, AppError> {
        let path = format!("/content/questions{}", to_query_string(query)?);
        self.client.get(Service::Content, &path).await
    }

    async fn get_learning_resources(
        &self,
        query: &ResourcesQuery,
    ) -> Result<Vec<LearningResource>, AppError> {
        let path = format!("/content/learning-resources{}", to_query_string(query)?);
        self.client.get(Service::Content, &path).await
    }

    async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadResponse, AppError> {
        info!("Uploading {} ({} bytes)", file_name, bytes.len());
        self.client
            .upload(
                Service::Content,
                "/content/upload",
                file_name,
                bytes,
                content_type,
            )
            .await
    }

    async fn health(&self) -> Result<HealthResponse, AppError> {
        self.client.get(Service::Content, "/content/health").await
    }
}
