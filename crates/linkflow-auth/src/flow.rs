//! The authorization-code login flow.

use linkflow_core::{Error, ProviderCredentials, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::provider::{ProviderKind, UserProfile};
use crate::session::mint_session_token;

/// Result of a completed login: a namespaced uid, the normalized profile,
/// and a freshly minted session credential. Whether the uid is newly seen
/// is the caller's question to answer against the identity registry.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub uid: String,
    pub profile: UserProfile,
    pub session_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// One configured identity provider.
pub struct IdentityProvider {
    kind: ProviderKind,
    credentials: ProviderCredentials,
    session_secret: String,
    client: Client,
}

impl IdentityProvider {
    pub fn new(
        kind: ProviderKind,
        credentials: ProviderCredentials,
        session_secret: &str,
        client: Client,
    ) -> Self {
        Self {
            kind,
            credentials,
            session_secret: session_secret.to_string(),
            client,
        }
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Run the full flow: code → token → profile → uid + session credential.
    pub async fn authenticate(
        &self,
        code: &str,
        redirect_uri: &str,
        state: Option<&str>,
    ) -> Result<AuthOutcome> {
        let access_token = self.exchange_code(code, redirect_uri, state).await?;
        let profile = self.fetch_profile(&access_token).await?;

        let uid = format!("{}_{}", self.kind.namespace(), profile.provider_id);
        let session_token = mint_session_token(
            &self.session_secret,
            &uid,
            chrono::Utc::now().timestamp_millis(),
        );

        Ok(AuthOutcome {
            uid,
            profile,
            session_token,
        })
    }

    /// Exchange an authorization code for an access token.
    async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
        state: Option<&str>,
    ) -> Result<String> {
        let mut form = vec![
            ("grant_type", "authorization_code"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("code", code),
        ];
        // Naver echoes the CSRF state parameter through the token request.
        if let Some(state) = state {
            form.push(("state", state));
        }

        debug!(provider = self.kind.namespace(), "exchanging authorization code");

        let response = self
            .client
            .post(self.kind.token_url())
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::Provider(format!("token request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(provider = self.kind.namespace(), %status, "token exchange rejected");
            return Err(Error::Auth(format!("token exchange rejected: {status} {body}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::Provider(format!("token response unreadable: {e}")))?;

        // Naver reports failures with 200 + an error field.
        if let Some(err) = token.error {
            let detail = token.error_description.unwrap_or_default();
            error!(provider = self.kind.namespace(), error = %err, "token exchange rejected");
            return Err(Error::Auth(format!("token exchange rejected: {err} {detail}")));
        }

        token
            .access_token
            .ok_or_else(|| Error::Provider("token response missing access_token".to_string()))
    }

    /// Fetch the provider profile for an access token.
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile> {
        let response = self
            .client
            .get(self.kind.profile_url())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| Error::Provider(format!("profile request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            error!(provider = self.kind.namespace(), %status, "profile fetch rejected");
            return Err(Error::Auth(format!("profile fetch rejected: {status}")));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Provider(format!("profile response unreadable: {e}")))?;

        self.kind.map_profile(&payload)
    }
}
