/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/2/26
******************************************************************************/

//! Quickstart: log in, generate a practice set, answer the first question and
//! print the progress report.
//!
//! Expects the platform services to be reachable at the configured endpoints
//! (`INU_BASE_URL`, default `http://localhost` with one port per service).

use inulearning_client::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let config = Arc::new(Config::new());
    let gateway = Arc::new(GatewayHttpClient::new(config)?);

    let auth = AuthServiceImpl::new(gateway.clone());
    let learning = LearningServiceImpl::new(gateway.clone());

    let login = auth
        .login(&LoginRequest::new("test@example.com", "password"))
        .await?;
    match login.access_token() {
        Some(_) => info!("Logged in, token persisted"),
        None => error!("Login answered without a token grant"),
    }

    let questions = learning
        .generate_questions(&GenerateQuestionsRequest {
            subject: "mathematics".to_string(),
            grade: 7,
            difficulty: "medium".to_string(),
            question_count: 3,
            focus_areas: None,
        })
        .await?;
    info!(
        "Practice session {} with {} questions",
        questions.session_id,
        questions.questions.len()
    );

    if let Some(question) = questions.questions.first() {
        let graded = learning
            .submit_answer(&SubmitAnswerRequest {
                session_id: questions.session_id.clone(),
                question_id: question.question_id.clone(),
                user_answer: "x=2".to_string(),
                time_spent: Some(42),
            })
            .await?;
        info!(
            "Answer graded: correct={} score={}",
            graded.is_correct, graded.score
        );
    }

    let progress = learning.get_progress(&ProgressQuery::default()).await?;
    info!(
        "Overall accuracy: {}",
        format_percentage(progress.overall_progress.accuracy_rate)
    );

    auth.logout()?;
    info!("Logged out");

    Ok(())
}
