/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body for `POST /auth/register`
///
/// The platform supports student, parent and teacher accounts; students must
/// carry a grade, the backend rejects them otherwise.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Unique account name
    pub username: String,
    /// Contact email, also the login identifier
    pub email: String,
    /// Plain-text password; hashing happens server-side
    pub password: String,
    /// Account role: `student`, `parent` or `teacher`
    pub role: String,
    /// School grade, required for the student role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<i32>,
}

/// Body for `POST /auth/login`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Plain-text password
    pub password: String,
}

impl LoginRequest {
    /// Creates login credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body for `POST /learning/generate-questions`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct GenerateQuestionsRequest {
    /// Subject to draw questions from (e.g. `mathematics`)
    pub subject: String,
    /// Target school grade
    pub grade: i32,
    /// Difficulty tier: `easy`, `medium` or `hard`
    pub difficulty: String,
    /// Number of questions to generate (backend accepts 1..=50)
    pub question_count: u32,
    /// Optional topic filter within the subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_areas: Option<Vec<String>>,
}

/// Body for `POST /learning/submit-answer`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    /// Practice session the answer belongs to
    pub session_id: String,
    /// Question being answered
    pub question_id: String,
    /// The learner's answer, verbatim
    pub user_answer: String,
    /// Seconds spent on the question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<i64>,
}

/// Query parameters for `GET /learning/progress`
///
/// All fields are optional filters. An all-empty query produces no query
/// string at all, so the progress endpoint is hit bare.
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct ProgressQuery {
    /// Restrict the report to one subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Start of the reporting window (ISO date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End of the reporting window (ISO date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl ProgressQuery {
    /// Restricts the report to one subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the reporting window
    pub fn with_date_range(
        mut self,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        self.start_date = Some(start_date.into());
        self.end_date = Some(end_date.into());
        self
    }
}

/// Query parameters for `GET /content/questions`
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct QuestionsQuery {
    /// Filter by subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Filter by school grade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<i32>,
    /// Filter by difficulty tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Filter by topic within a subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Page number, 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size (backend accepts 1..=100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl QuestionsQuery {
    /// Filters by subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Filters by school grade
    pub fn with_grade(mut self, grade: i32) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Filters by difficulty tier
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Selects a result page
    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }
}

/// Query parameters for `GET /content/learning-resources`
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesQuery {
    /// Resources related to one question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    /// Filter by subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Filter by topic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Filter by resource type: `video`, `document` or `image`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl ResourcesQuery {
    /// Requests resources related to one question
    pub fn for_question(question_id: impl Into<String>) -> Self {
        Self {
            question_id: Some(question_id.into()),
            ..Self::default()
        }
    }
}

/// Serializes a query struct into a URL query string
///
/// Returns an empty string when every field is unset, so callers can append
/// the result to a path unconditionally.
pub fn to_query_string<Q: Serialize>(query: &Q) -> Result<String, AppError> {
    let encoded = serde_urlencoded::to_string(query)?;
    if encoded.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("?{encoded}"))
    }
}
