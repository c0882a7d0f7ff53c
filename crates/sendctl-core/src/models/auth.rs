// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Authentication state of the active profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    /// Profile name.
    pub profile: String,
    /// API key in use; always masked when rendered.
    pub api_key: String,
    /// Account the key belongs to.
    pub account_id: String,
    /// Account display name.
    pub account_name: Option<String>,
    /// Whether the service accepted the key.
    pub valid: bool,
    /// API endpoint the profile talks to.
    pub api_url: Option<String>,
}
