use inulearning_client::prelude::*;
use serde_json::json;

#[test]
fn test_login_response_with_nested_grant() {
    let payload = json!({
        "data": {
            "access_token": "tok-abc",
            "token_type": "Bearer",
            "expires_in": 86400,
            "user": {
                "user_id": "uuid-123",
                "username": "test_user",
                "email": "test@example.com",
                "role": "student"
            }
        }
    });

    let response: LoginResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.access_token(), Some("tok-abc"));
    let grant = response.data.unwrap();
    assert_eq!(grant.token_type.as_deref(), Some("Bearer"));
    assert_eq!(grant.user.unwrap().role, "student");
}

#[test]
fn test_login_response_without_grant() {
    // A flat token payload has no `data` envelope; no credential is exposed.
    let payload = json!({
        "access_token": "tok-abc",
        "token_type": "Bearer"
    });

    let response: LoginResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.access_token(), None);
}

#[test]
fn test_login_response_with_empty_grant() {
    let payload = json!({ "data": {} });

    let response: LoginResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.access_token(), None);
}

#[test]
fn test_question_type_field_is_renamed() {
    let payload = json!({
        "question_id": "math_001",
        "content": "Solve 2x + 3 = 7",
        "type": "multiple_choice",
        "options": ["x=1", "x=2", "x=3", "x=4"],
        "difficulty": "medium",
        "subject_area": "algebra"
    });

    let question: Question = serde_json::from_value(payload).unwrap();
    assert_eq!(question.question_type, "multiple_choice");
    assert_eq!(question.options.unwrap().len(), 4);
}

#[test]
fn test_progress_response_decoding() {
    let payload = json!({
        "overall_progress": {
            "total_questions": 150,
            "correct_answers": 120,
            "accuracy_rate": 0.8,
            "study_time_minutes": 1200
        },
        "subject_progress": [
            {
                "subject": "mathematics",
                "mastery_level": 0.75,
                "topics": [
                    {
                        "topic": "algebra",
                        "mastery_level": 0.85,
                        "last_practiced": "2026-01-15T14:30:00"
                    }
                ]
            }
        ]
    });

    let response: LearningProgressResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.overall_progress.total_questions, 150);
    assert_eq!(response.subject_progress[0].topics[0].topic, "algebra");
}

#[test]
fn test_learning_resource_optional_fields() {
    let payload = json!({
        "resource_id": "res_001",
        "title": "Linear equations walkthrough",
        "type": "video",
        "url": "https://example.com/videos/algebra_001.mp4",
        "description": "Step-by-step solving of linear equations",
        "duration": 300
    });

    let resource: LearningResource = serde_json::from_value(payload).unwrap();
    assert_eq!(resource.resource_type, "video");
    assert_eq!(resource.duration, Some(300));
    assert_eq!(resource.file_size, None);
}

#[test]
fn test_upload_response_decoding() {
    let payload = json!({
        "file_id": "f-1",
        "filename": "notes.pdf",
        "file_url": "https://storage.example.com/uploads/f-1_notes.pdf",
        "file_size": 2048,
        "content_type": "application/pdf"
    });

    let response: UploadResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.filename, "notes.pdf");
    assert_eq!(response.file_size, 2048);
}
