// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! # Account tokens
//!
//! Email confirmation and password reset links carry a Fernet token with the
//! JSON payload `{"email": .., "purpose": ..}`. The token is only accepted for
//! the purpose it was issued for and within the configured TTL.
use fernet::Fernet;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::account::error::AccountError;

/// What the token may be used for.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPurpose {
    Confirm,
    Reset,
}

#[derive(Debug, Deserialize, Serialize)]
struct TokenPayload {
    email: String,
    purpose: TokenPurpose,
}

pub struct AccountTokens {
    fernet: Fernet,
    ttl: u64,
}

impl AccountTokens {
    pub fn new(key: &SecretString, ttl: u64) -> Result<Self, AccountError> {
        let fernet = Fernet::new(key.expose_secret().trim()).ok_or_else(|| {
            AccountError::InvalidSecretKey(
                "key must be url safe base64 encoded 32 bytes".to_string(),
            )
        })?;
        Ok(Self { fernet, ttl })
    }

    /// Issue the token for the email.
    pub fn issue(&self, email: &str, purpose: TokenPurpose) -> Result<String, AccountError> {
        let payload = serde_json::to_vec(&TokenPayload {
            email: email.to_string(),
            purpose,
        })?;
        Ok(self.fernet.encrypt(&payload))
    }

    /// Verify the token and return the email it was issued for.
    pub fn verify(&self, token: &str, purpose: TokenPurpose) -> Result<String, AccountError> {
        let data = self
            .fernet
            .decrypt_with_ttl(token, self.ttl)
            .map_err(|_| AccountError::InvalidToken)?;
        self.check_payload(&data, purpose)
    }

    fn check_payload(&self, data: &[u8], purpose: TokenPurpose) -> Result<String, AccountError> {
        let payload: TokenPayload =
            serde_json::from_slice(data).map_err(|_| AccountError::InvalidToken)?;
        if payload.purpose != purpose {
            debug!(
                "token issued for {:?} presented for {:?}",
                payload.purpose, purpose
            );
            return Err(AccountError::InvalidToken);
        }
        Ok(payload.email)
    }
}
