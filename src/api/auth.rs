use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use super::Client;
use crate::error::Error;
use crate::models::Identity;

/// What `POST /auth/login` returns inside the envelope.
#[derive(Deserialize, Debug)]
struct LoginPayload {
    token: String,
}

/// Which flow a verification code belongs to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CodePurpose {
    Register,
    Reset,
}

impl Client {
    /// Exchanges credentials for a token and populates the session.
    ///
    /// The token is stored with a placeholder identity first, then a
    /// profile fetch fills in the real one. Identity is display data, so
    /// a failed profile fetch downgrades to the placeholder instead of
    /// failing an otherwise good login.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, Error> {
        self.login_as(username, password, "").await
    }

    pub(crate) async fn login_as(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<Identity, Error> {
        let payload: LoginPayload = self
            .gateway
            .post(
                "/auth/login",
                &json!({"username": username, "password": password}),
            )
            .await?;

        let placeholder = Identity::placeholder(username, email);
        self.session
            .login(payload.token, placeholder.clone())
            .await?;
        info!("Logged in as '{}'", username);

        match self.gateway.get::<Identity>("/user/profile").await {
            Ok(identity) => {
                self.session.set_identity(identity.clone()).await?;
                Ok(identity)
            }
            // The freshly issued token was refused; the session is
            // already cleared, report it.
            Err(Error::Unauthorized) => Err(Error::Unauthorized),
            Err(e) => {
                warn!("Profile fetch after login failed: {}", e);
                Ok(placeholder)
            }
        }
    }

    /// Registers an account, then signs in with the new credentials
    /// (the registration endpoint issues no token itself).
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        code: &str,
    ) -> Result<Identity, Error> {
        let _: Value = self
            .gateway
            .post(
                "/auth/register",
                &json!({
                    "username": username,
                    "email": email,
                    "password": password,
                    "code": code,
                }),
            )
            .await?;
        info!("Registered account '{}'", username);

        self.login_as(username, password, email).await
    }

    /// Requests an emailed verification code for registration or reset.
    pub async fn send_code(&self, email: &str, purpose: CodePurpose) -> Result<(), Error> {
        let _: Value = self
            .gateway
            .post("/auth/send-code", &json!({"email": email, "purpose": purpose}))
            .await?;
        Ok(())
    }

    /// Sets a new password using an emailed reset code.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), Error> {
        let _: Value = self
            .gateway
            .post(
                "/auth/reset-password",
                &json!({"email": email, "code": code, "new_password": new_password}),
            )
            .await?;
        Ok(())
    }

    /// Drops the session. Safe to call when already signed out.
    pub async fn logout(&self) {
        self.session.logout().await;
        info!("Logged out");
    }
}
