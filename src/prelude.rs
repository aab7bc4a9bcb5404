/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/2/26
******************************************************************************/

//! # InULearning Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. Importing the prelude is enough for
//! most interactions with the platform.
//!
//! ## Usage
//!
//! ```rust
//! use inulearning_client::prelude::*;
//!
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the InULearning client
pub use crate::config::{Config, Service, ServiceEndpoints};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION AND TOKEN STORAGE
// ============================================================================

/// Session object holding the bearer token
pub use crate::session::Session;

/// Token storage backends
pub use crate::storage::{FileTokenStore, MemoryTokenStore, TokenStore};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP gateway trait
pub use crate::transport::HttpGateway;

/// HTTP gateway implementation
pub use crate::transport::GatewayHttpClient;

// ============================================================================
// SERVICE FACADES
// ============================================================================

/// Facade traits
pub use crate::application::interfaces::{AuthService, ContentService, LearningService};

/// Facade implementations
pub use crate::application::services::{
    AuthServiceImpl, ContentServiceImpl, LearningServiceImpl,
};

// ============================================================================
// MODELS
// ============================================================================

/// Request models and query helpers
pub use crate::model::requests::{
    GenerateQuestionsRequest, LoginRequest, ProgressQuery, QuestionsQuery, RegisterRequest,
    ResourcesQuery, SubmitAnswerRequest, to_query_string,
};

/// Response models
pub use crate::model::responses::{
    GenerateQuestionsResponse, HealthResponse, LearningProgressResponse, LearningResource,
    LoginResponse, ProfileResponse, Question, QuestionRecord, RefreshResponse,
    SimilarQuestionsResponse, SubmitAnswerResponse, TokenGrant, UploadResponse, UserResponse,
};

// ============================================================================
// PRESENTATION
// ============================================================================

/// Formatting and markup helpers
pub use crate::presentation::{
    error_markup, format_date, format_percentage, loading_markup, success_markup,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest method type for custom gateway implementations
pub use reqwest::Method;
