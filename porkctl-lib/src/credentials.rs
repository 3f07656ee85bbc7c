//! Credential file discovery and parsing.
//!
//! Porkbun API calls are signed with an API key pair read from a
//! line-oriented `KEY=VALUE` env file. The file is resolved from an ordered
//! list of candidate locations: an explicit `PORKCTL_ENV_FILE` override
//! first, then fixed fallbacks in the working directory and the user's
//! config directory.

use crate::error::PorkbunError;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit credential file path.
pub const ENV_FILE_OVERRIDE: &str = "PORKCTL_ENV_FILE";

const API_KEY_VAR: &str = "PORKBUN_API_KEY";
const SECRET_KEY_VAR: &str = "PORKBUN_SECRET_KEY";

/// A Porkbun API key pair.
///
/// Loaded once per process invocation and passed into the client
/// explicitly; nothing here reads ambient state after construction.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    /// Public API key, sent as `apikey`
    pub api_key: String,

    /// Secret API key, sent as `secretapikey`
    pub secret_key: String,
}

impl ApiCredentials {
    /// Construct credentials from an already-known key pair.
    pub fn new<A: Into<String>, S: Into<String>>(api_key: A, secret_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Resolve, read, and parse the credential file.
    ///
    /// The first candidate that exists and is readable wins; later
    /// candidates are not consulted. Both keys must be present and
    /// non-empty, otherwise a configuration error naming the offending
    /// file is returned.
    ///
    /// # Errors
    ///
    /// Returns `PorkbunError::ConfigError` if no candidate file exists or
    /// if the chosen file is missing either key.
    pub fn load() -> Result<Self, PorkbunError> {
        let candidates = candidate_paths();

        let mut chosen: Option<(PathBuf, String)> = None;
        for candidate in &candidates {
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(candidate) {
                    chosen = Some((candidate.clone(), content));
                    break;
                }
            }
        }

        let (path, content) = chosen.ok_or_else(|| {
            PorkbunError::config(format!(
                "no credential file found; set {} or create ./porkbun.env",
                ENV_FILE_OVERRIDE
            ))
        })?;

        Self::from_env_file(&content, &path)
    }

    /// Parse credential file content, attributing errors to `source`.
    pub fn from_env_file(content: &str, source: &Path) -> Result<Self, PorkbunError> {
        let values = parse_env_lines(content);

        let api_key = values.get(API_KEY_VAR).cloned().unwrap_or_default();
        let secret_key = values.get(SECRET_KEY_VAR).cloned().unwrap_or_default();

        if api_key.is_empty() || secret_key.is_empty() {
            return Err(PorkbunError::config(format!(
                "missing {} or {} in {}",
                API_KEY_VAR,
                SECRET_KEY_VAR,
                source.display()
            )));
        }

        Ok(Self {
            api_key,
            secret_key,
        })
    }
}

/// Candidate credential file locations, in precedence order.
///
/// The `PORKCTL_ENV_FILE` override always comes first; the remaining
/// entries are fixed fallbacks.
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(explicit) = env::var(ENV_FILE_OVERRIDE) {
        let explicit = explicit.trim();
        if !explicit.is_empty() {
            candidates.push(PathBuf::from(explicit));
        }
    }

    candidates.push(PathBuf::from("./porkbun.env"));
    candidates.push(PathBuf::from("./.env"));

    if let Some(home) = env::var_os("HOME") {
        candidates.push(
            Path::new(&home)
                .join(".config")
                .join("porkctl")
                .join("porkbun.env"),
        );
    }

    candidates
}

/// Parse line-oriented `KEY=VALUE` content.
///
/// Blank lines and lines starting with `#` are skipped, as are lines with
/// no `=` at all. Keys and values are trimmed; surrounding double-quotes
/// are stripped from values.
pub(crate) fn parse_env_lines(content: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some(eq) = trimmed.find('=') else {
            continue;
        };
        let key = trimmed[..eq].trim().to_string();
        let value = trimmed[eq + 1..].trim().trim_matches('"').to_string();
        out.insert(key, value);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_env_lines_basic() {
        let content = "PORKBUN_API_KEY=\"pk_live\"\nPORKBUN_SECRET_KEY=sk_live\nIGNORED";
        let values = parse_env_lines(content);

        assert_eq!(values.len(), 2);
        assert_eq!(values.get("PORKBUN_API_KEY").map(String::as_str), Some("pk_live"));
        assert_eq!(values.get("PORKBUN_SECRET_KEY").map(String::as_str), Some("sk_live"));
    }

    #[test]
    fn test_parse_env_lines_comments_and_blanks() {
        let content = "# a comment\n\n  \nKEY=value\n# KEY2=shadowed";
        let values = parse_env_lines(content);

        assert_eq!(values.len(), 1);
        assert_eq!(values.get("KEY").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_parse_env_lines_trims_whitespace_and_quotes() {
        let content = "  KEY  =  \"  spaced  \"  ";
        let values = parse_env_lines(content);

        // Quotes stripped after trimming, inner whitespace preserved
        assert_eq!(values.get("KEY").map(String::as_str), Some("  spaced  "));
    }

    #[test]
    fn test_from_env_file_complete() {
        let content = "PORKBUN_API_KEY=pk\nPORKBUN_SECRET_KEY=sk\n";
        let creds = ApiCredentials::from_env_file(content, Path::new("test.env")).unwrap();

        assert_eq!(creds.api_key, "pk");
        assert_eq!(creds.secret_key, "sk");
    }

    #[test]
    fn test_from_env_file_missing_secret_names_source() {
        let content = "PORKBUN_API_KEY=pk\n";
        let err = ApiCredentials::from_env_file(content, Path::new("some/creds.env")).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("PORKBUN_SECRET_KEY"));
        assert!(message.contains("some/creds.env"));
    }

    #[test]
    fn test_from_env_file_empty_value_rejected() {
        let content = "PORKBUN_API_KEY=\nPORKBUN_SECRET_KEY=sk\n";
        let result = ApiCredentials::from_env_file(content, Path::new("creds.env"));

        assert!(result.is_err());
    }

    #[test]
    fn test_load_honors_explicit_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "PORKBUN_API_KEY=override-pk").unwrap();
        writeln!(file, "PORKBUN_SECRET_KEY=override-sk").unwrap();
        file.flush().unwrap();

        // Env mutation: fine in a test process, restored afterwards
        std::env::set_var(ENV_FILE_OVERRIDE, file.path());
        let result = ApiCredentials::load();
        std::env::remove_var(ENV_FILE_OVERRIDE);

        let creds = result.unwrap();
        assert_eq!(creds.api_key, "override-pk");
        assert_eq!(creds.secret_key, "override-sk");
    }
}
