/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! Response models for the platform services
//!
//! Every endpoint gets an explicit type decoded at the boundary; nothing is
//! passed around as loose JSON. Timestamps stay as the ISO strings the
//! services emit (they carry no offset marker); display formatting lives in
//! the presentation layer.

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Auth service
// ---------------------------------------------------------------------------

/// Account data returned by `POST /auth/register`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    /// Server-assigned account identifier
    pub user_id: String,
    /// Account name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Account role
    pub role: String,
    /// School grade, present for students
    #[serde(default)]
    pub grade: Option<i32>,
    /// Creation timestamp (ISO string)
    pub created_at: String,
}

/// Condensed account data embedded in a login grant
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    /// Account identifier
    pub user_id: String,
    /// Account name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Account role
    pub role: String,
}

/// Token material nested under `data` in a login response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TokenGrant {
    /// Bearer token for subsequent requests
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token scheme, normally `Bearer`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// The account the grant belongs to
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// Response of `POST /auth/login`
///
/// The token, when issued, arrives nested under `data`. A response without
/// `data.access_token` is still a successful decode; it simply carries no
/// credential to persist.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginResponse {
    /// Token grant, absent when the backend issued none
    #[serde(default)]
    pub data: Option<TokenGrant>,
}

impl LoginResponse {
    /// Returns the nested access token, if the response carries one
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.data.as_ref()?.access_token.as_deref()
    }
}

/// Response of `POST /auth/refresh`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshResponse {
    /// Replacement bearer token
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Response of `GET /auth/profile`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    /// Account identifier
    pub user_id: String,
    /// Account name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Account role
    pub role: String,
    /// School grade, present for students
    #[serde(default)]
    pub grade: Option<i32>,
    /// Whether the account is active
    pub is_active: bool,
}

/// Response of the per-service `GET /<service>/health` endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    /// Reported status, `healthy` when the service is up
    pub status: String,
    /// Name of the reporting service
    pub service: String,
    /// Server-side timestamp (ISO string)
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// Learning service
// ---------------------------------------------------------------------------

/// One generated practice question
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Question identifier
    pub question_id: String,
    /// Question text
    pub content: String,
    /// Question kind, e.g. `multiple_choice` or `short_answer`
    #[serde(rename = "type")]
    pub question_type: String,
    /// Answer options for multiple-choice questions
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// Difficulty tier
    pub difficulty: String,
    /// Topic the question belongs to
    pub subject_area: String,
}

/// Response of `POST /learning/generate-questions`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateQuestionsResponse {
    /// Practice session identifier for subsequent answer submissions
    pub session_id: String,
    /// Generated questions
    pub questions: Vec<Question>,
}

/// Response of `POST /learning/submit-answer`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitAnswerResponse {
    /// Identifier of the recorded submission
    pub submission_id: String,
    /// Whether the answer matched
    pub is_correct: bool,
    /// The expected answer
    pub correct_answer: String,
    /// Worked explanation for the question
    pub explanation: String,
    /// Score awarded for the submission
    pub score: i32,
    /// Human-readable feedback
    pub feedback: String,
}

/// Aggregate counters across all practice activity
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OverallProgress {
    /// Questions attempted in total
    pub total_questions: u64,
    /// Correctly answered questions
    pub correct_answers: u64,
    /// Fraction of correct answers, 0.0..=1.0
    pub accuracy_rate: f64,
    /// Accumulated study time in minutes
    pub study_time_minutes: u64,
}

/// Mastery data for one topic within a subject
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicProgress {
    /// Topic name
    pub topic: String,
    /// Mastery fraction, 0.0..=1.0
    pub mastery_level: f64,
    /// Last practice timestamp (ISO string)
    pub last_practiced: String,
}

/// Mastery data for one subject
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectProgress {
    /// Subject name
    pub subject: String,
    /// Mastery fraction across the subject, 0.0..=1.0
    pub mastery_level: f64,
    /// Per-topic breakdown
    pub topics: Vec<TopicProgress>,
}

/// Response of `GET /learning/progress`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningProgressResponse {
    /// Aggregate counters
    pub overall_progress: OverallProgress,
    /// Per-subject breakdown
    pub subject_progress: Vec<SubjectProgress>,
}

/// One suggested practice question similar to a reference question
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarQuestion {
    /// Question identifier
    pub question_id: String,
    /// Question text
    pub content: String,
    /// Question kind
    #[serde(rename = "type")]
    pub question_type: String,
    /// Difficulty tier
    pub difficulty: String,
    /// Similarity to the reference question, 0.0..=1.0
    pub similarity_score: f64,
}

/// Response of `GET /learning/similar-questions`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarQuestionsResponse {
    /// Suggested questions, most similar first
    pub similar_questions: Vec<SimilarQuestion>,
}

// ---------------------------------------------------------------------------
// Content service
// ---------------------------------------------------------------------------

/// One question-bank entry returned by `GET /content/questions`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionRecord {
    /// Question identifier
    pub question_id: String,
    /// Question text
    pub content: String,
    /// Question kind
    #[serde(rename = "type")]
    pub question_type: String,
    /// Subject the question belongs to
    pub subject: String,
    /// Target school grade
    pub grade: i32,
    /// Difficulty tier
    pub difficulty: String,
    /// Topic within the subject
    pub topic: String,
    /// Free-form classification tags
    pub tags: Vec<String>,
}

/// One learning resource returned by `GET /content/learning-resources`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningResource {
    /// Resource identifier
    pub resource_id: String,
    /// Display title
    pub title: String,
    /// Resource kind: `video`, `document` or `image`
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Location of the resource
    pub url: String,
    /// Short description
    pub description: String,
    /// Playback length in seconds, for videos
    #[serde(default)]
    pub duration: Option<u64>,
    /// Size in bytes, for files
    #[serde(default)]
    pub file_size: Option<u64>,
}

/// Response of `POST /content/upload`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    /// Server-assigned file identifier
    pub file_id: String,
    /// Original file name
    pub filename: String,
    /// Location the file was stored at
    pub file_url: String,
    /// Stored size in bytes
    pub file_size: u64,
    /// MIME type recorded for the file
    pub content_type: String,
}
