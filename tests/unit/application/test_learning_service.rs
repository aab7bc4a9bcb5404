use crate::common::gateway_for;
use inulearning_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

const PROGRESS_BODY: &str = r#"{
    "overall_progress": {
        "total_questions": 150,
        "correct_answers": 120,
        "accuracy_rate": 0.8,
        "study_time_minutes": 1200
    },
    "subject_progress": []
}"#;

#[tokio::test]
async fn test_generate_questions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/learning/generate-questions")
        .match_body(Matcher::Json(json!({
            "subject": "mathematics",
            "grade": 7,
            "difficulty": "medium",
            "question_count": 2,
        })))
        .with_status(200)
        .with_body(
            r#"{"session_id":"sess-1","questions":[
                {"question_id":"math_001","content":"Solve 2x + 3 = 7","type":"multiple_choice","options":["x=1","x=2"],"difficulty":"medium","subject_area":"algebra"},
                {"question_id":"math_002","content":"Simplify 3x + 2x - x","type":"short_answer","difficulty":"medium","subject_area":"algebra"}
            ]}"#,
        )
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let learning = LearningServiceImpl::new(gateway);

    let response = learning
        .generate_questions(&GenerateQuestionsRequest {
            subject: "mathematics".to_string(),
            grade: 7,
            difficulty: "medium".to_string(),
            question_count: 2,
            focus_areas: None,
        })
        .await
        .unwrap();

    assert_eq!(response.session_id, "sess-1");
    assert_eq!(response.questions.len(), 2);
    assert_eq!(response.questions[1].options, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_progress_empty_query_sends_no_query_string() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/learning/progress")
        .match_query(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body(PROGRESS_BODY)
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let learning = LearningServiceImpl::new(gateway);

    let response = learning.get_progress(&ProgressQuery::default()).await.unwrap();
    assert_eq!(response.overall_progress.correct_answers, 120);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_progress_with_filters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/learning/progress")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("subject".to_string(), "mathematics".to_string()),
            Matcher::UrlEncoded("start_date".to_string(), "2026-01-01".to_string()),
            Matcher::UrlEncoded("end_date".to_string(), "2026-02-01".to_string()),
        ]))
        .with_status(200)
        .with_body(PROGRESS_BODY)
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let learning = LearningServiceImpl::new(gateway);

    let query = ProgressQuery::default()
        .with_subject("mathematics")
        .with_date_range("2026-01-01", "2026-02-01");
    learning.get_progress(&query).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_similar_questions_defaults_to_five() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/learning/similar-questions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("question_id".to_string(), "math_001".to_string()),
            Matcher::UrlEncoded("count".to_string(), "5".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"similar_questions":[]}"#)
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let learning = LearningServiceImpl::new(gateway);

    learning
        .get_similar_questions("math_001", None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_similar_questions_with_explicit_count() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/learning/similar-questions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("question_id".to_string(), "math_001".to_string()),
            Matcher::UrlEncoded("count".to_string(), "3".to_string()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"similar_questions":[
                {"question_id":"similar_math_001_1","content":"Solve 3x + 4 = 10","type":"multiple_choice","difficulty":"medium","similarity_score":0.85}
            ]}"#,
        )
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let learning = LearningServiceImpl::new(gateway);

    let response = learning
        .get_similar_questions("math_001", Some(3))
        .await
        .unwrap();
    assert_eq!(response.similar_questions[0].similarity_score, 0.85);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_answer_not_found_detail() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/learning/submit-answer")
        .with_status(404)
        .with_body(r#"{"detail":"Question not found"}"#)
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let learning = LearningServiceImpl::new(gateway);

    let error = learning
        .submit_answer(&SubmitAnswerRequest {
            session_id: "sess-1".to_string(),
            question_id: "missing".to_string(),
            user_answer: "42".to_string(),
            time_spent: Some(30),
        })
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Question not found");
}

#[tokio::test]
async fn test_health() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/learning/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy","service":"learning","timestamp":"2026-02-16T10:00:00"}"#)
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let learning = LearningServiceImpl::new(gateway);

    let health = learning.health().await.unwrap();
    assert_eq!(health.service, "learning");
}
