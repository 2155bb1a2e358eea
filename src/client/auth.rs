//! Admin login, registration and password reset

use serde::{Deserialize, Serialize};

use crate::client::http::RestClient;
use crate::core::error::{GymError, ValidationError};
use crate::core::validation::{DraftValidator, validators};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub message: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// New admin account
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<(), ValidationError> {
        DraftValidator::new()
            .field("username", validators::required())
            .field("email", validators::required())
            .field("password", validators::required())
            .field("confirm_password", validators::required())
            .check(validators::matches_field("password", "confirm_password"))
            .validate(self)
    }
}

/// Password change from the settings page
#[derive(Debug, Clone, Default, Serialize)]
pub struct PasswordReset {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

pub const MIN_PASSWORD_LENGTH: usize = 6;

impl PasswordReset {
    pub fn validate(&self) -> Result<(), ValidationError> {
        DraftValidator::new()
            .field("email", validators::required())
            .field("old_password", validators::required())
            .field("new_password", validators::required())
            .field("new_password", validators::min_length(MIN_PASSWORD_LENGTH))
            .field("confirm_new_password", validators::required())
            .check(validators::matches_field(
                "new_password",
                "confirm_new_password",
            ))
            .validate(self)
    }
}

/// Plain `{"message": ...}` acknowledgement
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: RestClient,
}

impl AuthApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Log in and keep the returned bearer token for later requests
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, GymError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post("login", &request).await?;
        self.client.tokens().set(response.access_token.clone())?;

        tracing::info!(username, "logged in");
        Ok(response)
    }

    pub async fn register(&self, registration: &Registration) -> Result<MessageResponse, GymError> {
        registration.validate()?;
        let response = self.client.post("register", registration).await?;
        tracing::info!(username = %registration.username, "admin registered");
        Ok(response)
    }

    pub async fn reset_password(&self, reset: &PasswordReset) -> Result<MessageResponse, GymError> {
        reset.validate()?;
        let response = self.client.post("reset-password", reset).await?;
        tracing::info!("password changed");
        Ok(response)
    }

    /// Forget the stored token. No request is made.
    pub fn logout(&self) -> Result<(), GymError> {
        self.client.tokens().clear()
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.tokens().is_logged_in()
    }
}
