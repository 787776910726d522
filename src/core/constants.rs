//! Constants for the Watson Tone Analyzer API
//!
//! This module defines the upstream endpoint, the default API version, the
//! GET/POST payload threshold, and the string constants used for query
//! parameters and tone categories.

/// Default upstream endpoint for the tone analysis service
pub const API_ENDPOINT: &str = "https://gateway.watsonplatform.net/tone-analyzer/api/v3/tone";

/// Default API version sent with every call
pub const DEFAULT_VERSION: &str = "2016-05-19";

/// Texts below this byte length travel as a GET query parameter; longer
/// texts are sent as a JSON POST body to avoid URL-length failures.
pub const GET_TEXT_LIMIT: usize = 8192;

/// Query parameter name constants
pub mod query {
    /// API version parameter
    pub const VERSION: &str = "version";

    /// Sentence-level analysis flag parameter
    pub const SENTENCES: &str = "sentences";

    /// Tone category filter parameter
    pub const TONES: &str = "tones";

    /// Analyzed text parameter (GET transport only)
    pub const TEXT: &str = "text";
}

/// Tone category constants recognized by the upstream API
pub mod tone {
    /// Emotion tone category
    pub const EMOTION: &str = "emotion";

    /// Language tone category
    pub const LANGUAGE: &str = "language";

    /// Social tone category
    pub const SOCIAL: &str = "social";
}
