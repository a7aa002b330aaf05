//! Constants for the narrative client: environment variable names and defaults.

// Environment variable names

/// Environment variable holding a single API key.
///
/// # Example
///
/// ```bash
/// export GEMINI_API_KEY=primary-key
/// ```
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable holding an ordered, comma-separated list of API keys.
///
/// Keys are tried left to right; `GEMINI_API_KEY`, when also set, is tried last.
///
/// # Example
///
/// ```bash
/// export GEMINI_API_KEYS=primary-key,backup-key
/// ```
pub const GEMINI_API_KEYS_ENV: &str = "GEMINI_API_KEYS";

/// Environment variable overriding the model name.
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";

// Defaults

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-goog-api-key";
