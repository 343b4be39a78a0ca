use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub storage: StorageConfig,
    pub oauth: OAuthConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// S3-compatible object storage configuration (Cloudflare R2 by default)
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Provider account identifier, used to derive the API and direct object hosts
    pub account_id: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    /// Externally reachable base URL for stored objects, without trailing slash
    pub public_url: Option<String>,
    /// Host suffix shared by the API endpoint and direct object URLs
    pub endpoint_host: String,
    /// Full API endpoint override (e.g. a local MinIO)
    pub endpoint: Option<String>,
    pub region: String,
}

/// OAuth client configuration.
///
/// Every field falls back to a placeholder so startup never fails on
/// missing OAuth settings.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_lookup(env_lookup)?,
            swagger: SwaggerConfig::from_lookup(env_lookup),
            storage: StorageConfig::from_lookup(env_lookup)?,
            oauth: OAuthConfig::from_lookup(env_lookup),
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 12 * 1024 * 1024; // 12MB

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = lookup("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Only use credentials if they are non-empty
        let username = lookup("SWAGGER_USERNAME").filter(|s| !s.is_empty());
        let password = lookup("SWAGGER_PASSWORD").filter(|s| !s.is_empty());
        let title = lookup("SWAGGER_TITLE").unwrap_or_else(|| "Flux Platform API".to_string());
        let version = lookup("SWAGGER_VERSION").unwrap_or_else(|| "0.1.0".to_string());
        let description = lookup("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|| "Request validation and file storage for Flux".to_string());

        Self {
            username,
            password,
            title,
            version,
            description,
        }
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl StorageConfig {
    const DEFAULT_ENDPOINT_HOST: &'static str = "r2.cloudflarestorage.com";
    const DEFAULT_REGION: &'static str = "auto";

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("{} must be set", key))
        };

        let account_id = required("STORAGE_ACCOUNT_ID")?;
        let access_key_id = required("STORAGE_ACCESS_KEY_ID")?;
        let secret_access_key = required("STORAGE_SECRET_ACCESS_KEY")?;
        let bucket = required("STORAGE_BUCKET")?;

        let public_url = lookup("STORAGE_PUBLIC_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let endpoint_host = lookup("STORAGE_ENDPOINT_HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ENDPOINT_HOST.to_string());

        let endpoint = lookup("STORAGE_ENDPOINT")
            .map(|e| e.trim_end_matches('/').to_string())
            .filter(|e| !e.is_empty());

        let region = lookup("STORAGE_REGION").unwrap_or_else(|| Self::DEFAULT_REGION.to_string());

        Ok(Self {
            account_id,
            access_key_id,
            secret_access_key,
            bucket,
            public_url,
            endpoint_host,
            endpoint,
            region,
        })
    }

    /// API endpoint the S3 client talks to
    pub fn api_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://{}.{}", self.account_id, self.endpoint_host))
    }
}

impl OAuthConfig {
    pub const PLACEHOLDER_CLIENT_ID: &'static str = "your-client-id";
    pub const PLACEHOLDER_CLIENT_SECRET: &'static str = "your-client-secret";
    pub const PLACEHOLDER_REDIRECT_URI: &'static str = "http://localhost:3000/auth/callback";

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str, placeholder: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| placeholder.to_string())
        };

        Self {
            client_id: value("OAUTH_CLIENT_ID", Self::PLACEHOLDER_CLIENT_ID),
            client_secret: value("OAUTH_CLIENT_SECRET", Self::PLACEHOLDER_CLIENT_SECRET),
            redirect_uri: value("OAUTH_REDIRECT_URI", Self::PLACEHOLDER_REDIRECT_URI),
        }
    }

    /// Whether real client credentials were supplied
    pub fn is_configured(&self) -> bool {
        self.client_id != Self::PLACEHOLDER_CLIENT_ID
            && self.client_secret != Self::PLACEHOLDER_CLIENT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn storage_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("STORAGE_ACCOUNT_ID", "acc123"),
            ("STORAGE_ACCESS_KEY_ID", "key"),
            ("STORAGE_SECRET_ACCESS_KEY", "secret"),
            ("STORAGE_BUCKET", "flux-media"),
        ]
    }

    #[test]
    fn test_oauth_falls_back_to_placeholders() {
        let oauth = OAuthConfig::from_lookup(lookup_from(&[]));

        assert_eq!(oauth.client_id, OAuthConfig::PLACEHOLDER_CLIENT_ID);
        assert_eq!(oauth.client_secret, OAuthConfig::PLACEHOLDER_CLIENT_SECRET);
        assert_eq!(oauth.redirect_uri, OAuthConfig::PLACEHOLDER_REDIRECT_URI);
        assert!(!oauth.is_configured());
    }

    #[test]
    fn test_oauth_reads_supplied_values() {
        let oauth = OAuthConfig::from_lookup(lookup_from(&[
            ("OAUTH_CLIENT_ID", "abc.apps"),
            ("OAUTH_CLIENT_SECRET", "s3cr3t"),
            ("OAUTH_REDIRECT_URI", "https://flux.app/auth/callback"),
        ]));

        assert_eq!(oauth.client_id, "abc.apps");
        assert_eq!(oauth.redirect_uri, "https://flux.app/auth/callback");
        assert!(oauth.is_configured());
    }

    #[test]
    fn test_storage_requires_credentials() {
        let err = StorageConfig::from_lookup(lookup_from(&[("STORAGE_ACCOUNT_ID", "acc")]))
            .unwrap_err();
        assert_eq!(err, "STORAGE_ACCESS_KEY_ID must be set");
    }

    #[test]
    fn test_storage_defaults_and_public_url_trimming() {
        let mut vars = storage_vars();
        vars.push(("STORAGE_PUBLIC_URL", "https://cdn.flux.app/"));
        let storage = StorageConfig::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(storage.public_url.as_deref(), Some("https://cdn.flux.app"));
        assert_eq!(storage.endpoint_host, "r2.cloudflarestorage.com");
        assert_eq!(storage.region, "auto");
        assert_eq!(
            storage.api_endpoint(),
            "https://acc123.r2.cloudflarestorage.com"
        );
    }

    #[test]
    fn test_storage_empty_public_url_is_absent() {
        let mut vars = storage_vars();
        vars.push(("STORAGE_PUBLIC_URL", ""));
        vars.push(("STORAGE_ENDPOINT", "http://localhost:9000/"));
        let storage = StorageConfig::from_lookup(lookup_from(&vars)).unwrap();

        assert!(storage.public_url.is_none());
        assert_eq!(storage.api_endpoint(), "http://localhost:9000");
    }

    #[test]
    fn test_app_config_parses_origins() {
        let app = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("CORS_ALLOWED_ORIGINS", "https://flux.app, https://admin.flux.app,"),
        ]))
        .unwrap();

        assert_eq!(app.server_address(), "127.0.0.1:8080");
        assert_eq!(
            app.cors_allowed_origins,
            vec!["https://flux.app", "https://admin.flux.app"]
        );
    }

    #[test]
    fn test_app_config_rejects_bad_port() {
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "abc")])).is_err());
    }
}
