//! Build webhook relay.
//!
//! Verifies the HMAC-SHA1 signature on an incoming build webhook and,
//! for finished Android builds, re-emits it as a GitHub
//! `repository_dispatch` event so a workflow can pick up the artifact.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha1::Sha1;

use crate::error::RelayError;

pub const USER_AGENT: &str = "blaze-webhook-relay";
pub const DISPATCH_EVENT_TYPE: &str = "eas-build-complete";

type HmacSha1 = Hmac<Sha1>;

/// The subset of the build webhook payload the relay cares about.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildWebhook {
    pub id: String,
    pub platform: String,
    pub status: String,
    #[serde(default)]
    pub artifacts: Option<BuildArtifacts>,
    #[serde(default)]
    pub app_version: Option<String>,
    #[serde(default)]
    pub build_profile: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildArtifacts {
    #[serde(default)]
    pub build_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RelaySettings {
    /// Shared secret the webhook sender signs with.
    pub webhook_secret: String,
    /// Token with `repo` scope for the dispatch call.
    pub github_token: String,
    /// Target repository as "owner/name".
    pub repository: String,
}

/// Check a `sha1=<hex>` signature over the raw request body.
///
/// The signature must cover the body byte-for-byte, so this takes the
/// raw text rather than a parsed payload.
pub fn verify_signature(body: &str, signature: &str, secret: &str) -> bool {
    let Ok(mut mac) = HmacSha1::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body.as_bytes());
    let expected = format!("sha1={}", hex::encode(mac.finalize().into_bytes()));
    signature == expected
}

/// Only finished Android builds are forwarded.
pub fn should_forward(payload: &BuildWebhook) -> bool {
    payload.platform == "ANDROID" && payload.status == "finished"
}

/// Body of the `repository_dispatch` call for a forwarded build.
pub fn dispatch_body(payload: &BuildWebhook) -> serde_json::Value {
    json!({
        "event_type": DISPATCH_EVENT_TYPE,
        "client_payload": {
            "buildId": payload.id,
            "platform": payload.platform,
            "status": payload.status,
            "buildUrl": payload
                .artifacts
                .as_ref()
                .and_then(|a| a.build_url.clone())
                .unwrap_or_default(),
            "appVersion": payload.app_version.clone().unwrap_or_default(),
            "buildProfile": payload.build_profile.clone().unwrap_or_default(),
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Valid webhook, but not a finished Android build.
    Ignored,
    /// Forwarded to GitHub.
    Dispatched,
}

/// Full relay pass: verify, filter, dispatch.
pub async fn relay_build(
    client: &reqwest::Client,
    settings: &RelaySettings,
    body: &str,
    signature: Option<&str>,
) -> Result<RelayOutcome, RelayError> {
    let signature = signature.ok_or(RelayError::MissingSignature)?;
    if !verify_signature(body, signature, &settings.webhook_secret) {
        return Err(RelayError::InvalidSignature);
    }

    let payload: BuildWebhook = serde_json::from_str(body)?;
    if !should_forward(&payload) {
        return Ok(RelayOutcome::Ignored);
    }

    let url = format!(
        "https://api.github.com/repos/{}/dispatches",
        settings.repository
    );
    let response = client
        .post(&url)
        .header("Accept", "application/vnd.github+json")
        .header("Authorization", format!("Bearer {}", settings.github_token))
        .header("User-Agent", USER_AGENT)
        .json(&dispatch_body(&payload))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(RelayError::Dispatch {
            status: response.status().as_u16(),
        });
    }
    Ok(RelayOutcome::Dispatched)
}
