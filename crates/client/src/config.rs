//! Runtime configuration
//!
//! Everything comes from the process environment; the binary loads a
//! `.env` file first with `dotenvy`. There is no config file.

use std::time::Duration;

use haven_core::{HavenError, HavenResult};

/// Default identity-toolkit password sign-in endpoint
pub const DEFAULT_AUTH_ENDPOINT: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword";

/// Default image host A endpoint
pub const DEFAULT_IMGBB_ENDPOINT: &str = "https://api.imgbb.com/1/upload";

/// Fully resolved application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HavenConfig {
    /// Backend root, without the `/api` suffix
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub upload: UploadConfig,
    pub auth: AuthConfig,
}

/// Which image host receives uploads
#[derive(Clone, PartialEq)]
pub enum UploadConfig {
    Imgbb {
        api_key: String,
        endpoint: String,
    },
    Cloudinary {
        cloud_name: String,
        upload_preset: String,
        api_key: Option<String>,
    },
}

/// How the admin operator signs in
#[derive(Clone, PartialEq)]
pub enum AuthConfig {
    Static {
        username: String,
        password: String,
        session_ttl: Duration,
    },
    Federated {
        api_key: String,
        endpoint: String,
        session_ttl: Duration,
    },
}

impl AuthConfig {
    pub fn session_ttl(&self) -> Duration {
        match self {
            AuthConfig::Static { session_ttl, .. } | AuthConfig::Federated { session_ttl, .. } => {
                *session_ttl
            }
        }
    }
}

// Secrets stay out of logs
impl std::fmt::Debug for UploadConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadConfig::Imgbb { endpoint, .. } => f
                .debug_struct("Imgbb")
                .field("endpoint", endpoint)
                .finish_non_exhaustive(),
            UploadConfig::Cloudinary {
                cloud_name,
                upload_preset,
                ..
            } => f
                .debug_struct("Cloudinary")
                .field("cloud_name", cloud_name)
                .field("upload_preset", upload_preset)
                .finish_non_exhaustive(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::Static {
                username,
                session_ttl,
                ..
            } => f
                .debug_struct("Static")
                .field("username", username)
                .field("session_ttl", session_ttl)
                .finish_non_exhaustive(),
            AuthConfig::Federated {
                endpoint,
                session_ttl,
                ..
            } => f
                .debug_struct("Federated")
                .field("endpoint", endpoint)
                .field("session_ttl", session_ttl)
                .finish_non_exhaustive(),
        }
    }
}

impl HavenConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> HavenResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> HavenResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(&lookup);

        let api_base_url = env
            .optional("API_BASE_URL")
            .unwrap_or_else(|| "http://127.0.0.1:5000".to_string())
            .trim_end_matches('/')
            .to_string();
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(HavenError::InvalidConfig(format!(
                "API_BASE_URL must be an http(s) URL, got '{api_base_url}'"
            )));
        }

        let request_timeout = Duration::from_secs(env.number("REQUEST_TIMEOUT_SECS", 30)?);

        let upload = match env.optional("IMAGE_HOST").as_deref().unwrap_or("imgbb") {
            "imgbb" => UploadConfig::Imgbb {
                api_key: env.required("IMGBB_API_KEY")?,
                endpoint: env
                    .optional("IMGBB_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_IMGBB_ENDPOINT.to_string()),
            },
            "cloudinary" => UploadConfig::Cloudinary {
                cloud_name: env.required("CLOUDINARY_CLOUD_NAME")?,
                upload_preset: env.required("CLOUDINARY_UPLOAD_PRESET")?,
                api_key: env.optional("CLOUDINARY_API_KEY"),
            },
            other => {
                return Err(HavenError::InvalidConfig(format!(
                    "IMAGE_HOST must be 'imgbb' or 'cloudinary', got '{other}'"
                )));
            }
        };

        let session_ttl = Duration::from_secs(env.number("SESSION_TTL_HOURS", 8)? * 3600);
        let auth = match env.optional("ADMIN_AUTH").as_deref().unwrap_or("static") {
            "static" => AuthConfig::Static {
                username: env.required("ADMIN_USERNAME")?,
                password: env.required("ADMIN_PASSWORD")?,
                session_ttl,
            },
            "federated" => AuthConfig::Federated {
                api_key: env.required("AUTH_API_KEY")?,
                endpoint: env
                    .optional("AUTH_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_AUTH_ENDPOINT.to_string()),
                session_ttl,
            },
            other => {
                return Err(HavenError::InvalidConfig(format!(
                    "ADMIN_AUTH must be 'static' or 'federated', got '{other}'"
                )));
            }
        };

        Ok(Self {
            api_base_url,
            request_timeout,
            upload,
            auth,
        })
    }
}

/// Lookup wrapper that treats blank values as unset
struct Env<'a, F>(&'a F);

impl<F> Env<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, key: &str) -> HavenResult<String> {
        self.optional(key)
            .ok_or_else(|| HavenError::MissingConfig(key.to_string()))
    }

    fn number(&self, key: &str, default: u64) -> HavenResult<u64> {
        match self.optional(key) {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|_| {
                HavenError::InvalidConfig(format!("{key} must be a whole number, got '{raw}'"))
            }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> HavenResult<HavenConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HavenConfig::from_lookup(|key| map.get(key).cloned())
    }

    const MINIMAL: &[(&str, &str)] = &[
        ("IMGBB_API_KEY", "k"),
        ("ADMIN_USERNAME", "admin"),
        ("ADMIN_PASSWORD", "secret"),
    ];

    #[test]
    fn test_defaults() {
        let cfg = config(MINIMAL).unwrap();
        assert_eq!(cfg.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert!(matches!(cfg.upload, UploadConfig::Imgbb { ref endpoint, .. } if endpoint == DEFAULT_IMGBB_ENDPOINT));
        assert_eq!(cfg.auth.session_ttl(), Duration::from_secs(8 * 3600));
    }

    #[test]
    fn test_cloudinary_and_federated() {
        let cfg = config(&[
            ("API_BASE_URL", "https://haven.example.com/"),
            ("IMAGE_HOST", "cloudinary"),
            ("CLOUDINARY_CLOUD_NAME", "haven"),
            ("CLOUDINARY_UPLOAD_PRESET", "unsigned"),
            ("ADMIN_AUTH", "federated"),
            ("AUTH_API_KEY", "abc"),
        ])
        .unwrap();
        assert_eq!(cfg.api_base_url, "https://haven.example.com");
        assert!(matches!(cfg.upload, UploadConfig::Cloudinary { api_key: None, .. }));
        assert!(matches!(cfg.auth, AuthConfig::Federated { ref endpoint, .. } if endpoint == DEFAULT_AUTH_ENDPOINT));
    }

    #[test]
    fn test_missing_required_value() {
        let err = config(&[("IMGBB_API_KEY", "k"), ("ADMIN_USERNAME", "admin")]).unwrap_err();
        assert!(matches!(err, HavenError::MissingConfig(ref key) if key == "ADMIN_PASSWORD"));
    }

    #[test]
    fn test_invalid_values() {
        let mut pairs = MINIMAL.to_vec();
        pairs.push(("REQUEST_TIMEOUT_SECS", "soon"));
        assert!(config(&pairs).unwrap_err().is_config());

        let mut pairs = MINIMAL.to_vec();
        pairs.push(("IMAGE_HOST", "s3"));
        assert!(matches!(config(&pairs), Err(HavenError::InvalidConfig(_))));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let cfg = config(MINIMAL).unwrap();
        let printed = format!("{cfg:?}");
        assert!(!printed.contains("secret"));
    }
}
