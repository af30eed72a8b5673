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

use secrecy::SecretString;
use serde::Deserialize;

/// Account flows configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AccountSection {
    /// Fernet key (url safe base64 encoded 32 bytes) used to sign the email
    /// confirmation and password reset tokens.
    pub secret_key: Option<SecretString>,

    /// Validity of the confirmation and password reset tokens in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl: u64,
}

impl Default for AccountSection {
    fn default() -> Self {
        Self {
            secret_key: None,
            token_ttl: default_token_ttl(),
        }
    }
}

fn default_token_ttl() -> u64 {
    3600
}
