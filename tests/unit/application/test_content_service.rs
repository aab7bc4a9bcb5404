use crate::common::{authenticated_gateway_for, gateway_for};
use inulearning_client::prelude::*;
use mockito::Matcher;

#[tokio::test]
async fn test_get_questions_with_filters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/content/questions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("subject".to_string(), "mathematics".to_string()),
            Matcher::UrlEncoded("grade".to_string(), "7".to_string()),
            Matcher::UrlEncoded("page".to_string(), "1".to_string()),
            Matcher::UrlEncoded("page_size".to_string(), "20".to_string()),
        ]))
        .with_status(200)
        .with_body(
            r#"[{"question_id":"q001","content":"Solve 2x + 3 = 7","type":"multiple_choice","subject":"mathematics","grade":7,"difficulty":"medium","topic":"algebra","tags":["equation","algebra"]}]"#,
        )
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let content = ContentServiceImpl::new(gateway);

    let query = QuestionsQuery::default()
        .with_subject("mathematics")
        .with_grade(7)
        .with_page(1, 20);
    let questions = content.get_questions(&query).await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].topic, "algebra");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_questions_empty_query_sends_no_query_string() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/content/questions")
        .match_query(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let content = ContentServiceImpl::new(gateway);

    let questions = content.get_questions(&QuestionsQuery::default()).await.unwrap();
    assert!(questions.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_learning_resources_by_type() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/content/learning-resources")
        .match_query(Matcher::UrlEncoded("type".to_string(), "video".to_string()))
        .with_status(200)
        .with_body(
            r#"[{"resource_id":"res_001","title":"Linear equations walkthrough","type":"video","url":"https://example.com/videos/algebra_001.mp4","description":"Step-by-step solving","duration":300}]"#,
        )
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let content = ContentServiceImpl::new(gateway);

    let query = ResourcesQuery {
        resource_type: Some("video".to_string()),
        ..ResourcesQuery::default()
    };
    let resources = content.get_learning_resources(&query).await.unwrap();

    assert_eq!(resources[0].duration, Some(300));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_file_sends_multipart_with_bearer() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/content/upload")
        .match_header("authorization", "Bearer tok-up")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .with_status(200)
        .with_body(
            r#"{"file_id":"f-1","filename":"notes.pdf","file_url":"https://storage.example.com/uploads/f-1_notes.pdf","file_size":11,"content_type":"application/pdf"}"#,
        )
        .create_async()
        .await;

    let gateway = authenticated_gateway_for(&server.url(), "tok-up");
    let content = ContentServiceImpl::new(gateway);

    let response = content
        .upload_file("notes.pdf", b"hello bytes".to_vec(), "application/pdf")
        .await
        .unwrap();

    assert_eq!(response.file_id, "f-1");
    assert_eq!(response.filename, "notes.pdf");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_file_rejected_type_surfaces_detail() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/content/upload")
        .with_status(400)
        .with_body(r#"{"detail":"File type text/plain not allowed"}"#)
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let content = ContentServiceImpl::new(gateway);

    let error = content
        .upload_file("notes.txt", b"plain".to_vec(), "text/plain")
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "File type text/plain not allowed");
}

#[tokio::test]
async fn test_health() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/content/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy","service":"content","timestamp":"2026-02-16T10:00:00"}"#)
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let content = ContentServiceImpl::new(gateway);

    let health = content.health().await.unwrap();
    assert_eq!(health.status, "healthy");
}
