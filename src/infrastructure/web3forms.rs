// SPDX-License-Identifier: MPL-2.0
//! Web3Forms contact relay.
//!
//! Posts a form-encoded body to the relay endpoint and reads back the JSON
//! `success` flag. One request per submission, no retry.

use crate::application::port::ContactRelay;
use crate::domain::contact::ContactSubmission;
use crate::error::RelayError;
use futures_util::future::BoxFuture;
use serde::Deserialize;
use std::time::Duration;

/// Upper bound on one relay round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Relay adapter for `api.web3forms.com` (or a compatible endpoint).
#[derive(Debug, Clone)]
pub struct Web3FormsRelay {
    client: reqwest::Client,
    endpoint: String,
    access_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

impl Web3FormsRelay {
    /// Builds a relay for `endpoint`. A missing access key is not an error
    /// here; every submission fails with [`RelayError::MissingAccessKey`]
    /// instead, so the form still opens and reports the failure.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Network`] when the HTTP client cannot be built
    /// (TLS backend initialisation).
    pub fn new(endpoint: impl Into<String>, access_key: Option<String>) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("IcedShowcase/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RelayError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            access_key: access_key.filter(|key| !key.trim().is_empty()),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn has_access_key(&self) -> bool {
        self.access_key.is_some()
    }
}

impl ContactRelay for Web3FormsRelay {
    fn submit(&self, submission: ContactSubmission) -> BoxFuture<'static, Result<(), RelayError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let access_key = self.access_key.clone();

        Box::pin(async move {
            let access_key = access_key.ok_or(RelayError::MissingAccessKey)?;
            let fields = form_fields(&access_key, &submission);

            tracing::debug!(endpoint = %endpoint, subject = %submission.subject, "posting contact submission");

            let response = client
                .post(&endpoint)
                .form(&fields)
                .send()
                .await
                .map_err(|e| RelayError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(RelayError::HttpStatus(status.as_u16()));
            }

            let body: RelayResponse = response
                .json()
                .await
                .map_err(|e| RelayError::InvalidResponse(e.to_string()))?;

            interpret(body)
        })
    }
}

/// Field order matches what the relay documents; it does not depend on it.
fn form_fields<'a>(access_key: &'a str, submission: &'a ContactSubmission) -> [(&'static str, &'a str); 5] {
    [
        ("access_key", access_key),
        ("subject", submission.subject.as_str()),
        ("name", submission.name.as_str()),
        ("email", submission.email.as_str()),
        ("message", submission.message.as_str()),
    ]
}

fn interpret(body: RelayResponse) -> Result<(), RelayError> {
    if body.success {
        Ok(())
    } else {
        Err(RelayError::Rejected(body.message))
    }
}
