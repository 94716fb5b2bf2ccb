use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub store_base_url: String,
    pub store_bearer_token: SecretString,
    pub quiz_data_type: String,
    pub result_data_type: String,
    pub app_identifier: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            store_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3030".to_string()),
            store_bearer_token: SecretString::from(
                env::var("BEARER_TOKEN").unwrap_or_else(|_| "dev_token".to_string()),
            ),
            quiz_data_type: env::var("QUIZ_DATA_TYPE")
                .unwrap_or_else(|_| "quizlink_quiz".to_string()),
            result_data_type: env::var("QUIZ_RESULT_DATA_TYPE")
                .unwrap_or_else(|_| "quizlink_result".to_string()),
            app_identifier: env::var("APP_IDENTIFIER")
                .unwrap_or_else(|_| "quizlink-dev".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.store_bearer_token.expose_secret() == "dev_token" {
            panic!(
                "FATAL: BEARER_TOKEN is using default value! Set BEARER_TOKEN environment variable."
            );
        }

        if self.app_identifier == "quizlink-dev" {
            panic!(
                "FATAL: APP_IDENTIFIER is using default value! Set APP_IDENTIFIER environment variable."
            );
        }

        if !self.store_base_url.starts_with("https://") {
            panic!(
                "FATAL: API_BASE_URL must use https in production, got '{}'",
                self.store_base_url
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            store_base_url: "http://localhost:3030".to_string(),
            store_bearer_token: SecretString::from("test_token".to_string()),
            quiz_data_type: "quizlink_quiz_test".to_string(),
            result_data_type: "quizlink_result_test".to_string(),
            app_identifier: "quizlink-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
        }
    }
}
