//! Embed configuration
//!
//! Options come from the host (cache location, styling, auto-embed) while the
//! API credentials and the force-refresh flag come from the environment. Both
//! are collected once into [`Settings`] and passed to the pipeline explicitly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the OAuth access token
pub const TOKEN_VAR: &str = "TOKEN";
/// Environment variable holding the OAuth access token secret
pub const TOKEN_SECRET_VAR: &str = "TOKEN_SECRET";
/// Environment variable holding the consumer (API) key
pub const CONSUMER_KEY_VAR: &str = "CONSUMER_KEY";
/// Environment variable holding the consumer (API) secret
pub const CONSUMER_SECRET_VAR: &str = "CONSUMER_SECRET";
/// Environment variable that bypasses the cache when set to any non-empty value
pub const CACHE_BUST_VAR: &str = "CACHE_BUST";

/// Per-build options supplied by the host
///
/// Field names deserialize from camelCase so a host can hand over the same
/// JSON object it received from its own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedOptions {
    /// Directory holding `tweets.json`; `None` or an empty path disables caching
    pub cache_directory: Option<PathBuf>,
    /// Prefix each rendered tweet with an inline `<style>` block
    pub use_inline_styles: bool,
    /// Replace bare status-link paragraphs with embeds
    pub auto_embed: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            cache_directory: None,
            use_inline_styles: true,
            auto_embed: false,
        }
    }
}

/// OAuth 1.0a credentials for the Twitter API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub token_secret: String,
    pub consumer_key: String,
    pub consumer_secret: String,
}

// Secrets stay out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Builds credentials from a variable lookup
    ///
    /// Returns `None` unless all four values are present and non-empty.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Some(Self {
            token: get(TOKEN_VAR)?,
            token_secret: get(TOKEN_SECRET_VAR)?,
            consumer_key: get(CONSUMER_KEY_VAR)?,
            consumer_secret: get(CONSUMER_SECRET_VAR)?,
        })
    }

    /// Reads credentials from the process environment
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Everything the resolution pipeline needs, fixed for the duration of a build
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Host options
    pub options: EmbedOptions,
    /// API credentials; `None` skips the live fetch
    pub credentials: Option<Credentials>,
    /// Skip cache lookups and always try the live API first
    pub force_refresh: bool,
}

impl Settings {
    /// Combines host options with credentials and flags read from a variable lookup
    pub fn from_lookup<F>(options: EmbedOptions, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup);
        let force_refresh = lookup(CACHE_BUST_VAR).is_some_and(|value| !value.is_empty());

        if credentials.is_none() {
            tracing::warn!(
                "Twitter credentials are incomplete; set {TOKEN_VAR}, {TOKEN_SECRET_VAR}, \
                 {CONSUMER_KEY_VAR} and {CONSUMER_SECRET_VAR} to fetch tweets at build time"
            );
        }

        Self {
            options,
            credentials,
            force_refresh,
        }
    }

    /// Combines host options with credentials and flags from the process environment
    pub fn from_env(options: EmbedOptions) -> Self {
        Self::from_lookup(options, |key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn full_credentials() -> Vec<(&'static str, &'static str)> {
        vec![
            (TOKEN_VAR, "token"),
            (TOKEN_SECRET_VAR, "token-secret"),
            (CONSUMER_KEY_VAR, "consumer-key"),
            (CONSUMER_SECRET_VAR, "consumer-secret"),
        ]
    }

    #[test]
    fn test_credentials_require_all_four_values() {
        let creds = Credentials::from_lookup(lookup_from(&full_credentials()))
            .expect("all four values present");
        assert_eq!(creds.token, "token");
        assert_eq!(creds.consumer_secret, "consumer-secret");

        for missing in [TOKEN_VAR, TOKEN_SECRET_VAR, CONSUMER_KEY_VAR, CONSUMER_SECRET_VAR] {
            let partial: Vec<_> = full_credentials()
                .into_iter()
                .filter(|(k, _)| *k != missing)
                .collect();
            assert!(
                Credentials::from_lookup(lookup_from(&partial)).is_none(),
                "missing {missing} should disable credentials"
            );
        }
    }

    #[test]
    fn test_blank_credential_counts_as_missing() {
        let mut pairs = full_credentials();
        pairs[0] = (TOKEN_VAR, "   ");
        assert!(Credentials::from_lookup(lookup_from(&pairs)).is_none());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let creds = Credentials::from_lookup(lookup_from(&full_credentials())).unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("consumer-key"));
        assert!(!debug.contains("consumer-secret"));
        assert!(!debug.contains("token-secret"));
    }

    #[test]
    fn test_cache_bust_sets_force_refresh() {
        let settings = Settings::from_lookup(
            EmbedOptions::default(),
            lookup_from(&[(CACHE_BUST_VAR, "1")]),
        );
        assert!(settings.force_refresh);
        assert!(settings.credentials.is_none());

        let settings = Settings::from_lookup(
            EmbedOptions::default(),
            lookup_from(&[(CACHE_BUST_VAR, "")]),
        );
        assert!(!settings.force_refresh);
    }

    #[test]
    fn test_options_default() {
        let options = EmbedOptions::default();
        assert!(options.cache_directory.is_none());
        assert!(options.use_inline_styles);
        assert!(!options.auto_embed);
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: EmbedOptions = serde_json::from_str(
            r#"{"cacheDirectory": "_cache", "useInlineStyles": false, "autoEmbed": true}"#,
        )
        .unwrap();
        assert_eq!(options.cache_directory, Some(PathBuf::from("_cache")));
        assert!(!options.use_inline_styles);
        assert!(options.auto_embed);

        let partial: EmbedOptions = serde_json::from_str(r#"{"autoEmbed": true}"#).unwrap();
        assert!(partial.use_inline_styles);
        assert!(partial.cache_directory.is_none());
    }
}
