/// Default base URL for the platform when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost";
/// Default network location suffix for the auth service
pub const DEFAULT_AUTH_SUFFIX: &str = ":8001";
/// Default network location suffix for the learning service
pub const DEFAULT_LEARNING_SUFFIX: &str = ":8002";
/// Default network location suffix for the content service
pub const DEFAULT_CONTENT_SUFFIX: &str = ":8003";
/// Timeout in seconds applied to the underlying HTTP client
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Key under which the bearer token is persisted in the token store
pub const TOKEN_STORE_KEY: &str = "access_token";
/// Default file name for the durable token store
pub const DEFAULT_TOKEN_STORE_FILE: &str = ".inulearning_token.json";
/// Number of similar questions requested when the caller does not specify one
pub const DEFAULT_SIMILAR_QUESTION_COUNT: u32 = 5;
/// User agent string used in HTTP requests to identify this client to the platform
pub const USER_AGENT: &str = "inulearning-client/0.1.0";
/// Multipart field name the content service expects for uploaded files
pub const UPLOAD_FIELD_NAME: &str = "file";
