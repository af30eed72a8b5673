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
//! Capabilities of the identity record used by the login flows.
use crate::identity::types::Identity;

/// Identity able to authenticate with the password.
pub trait Authenticatable {
    /// Hash of the password, if the identity has one.
    fn password_hash(&self) -> Option<&str>;

    /// Whether the identity is allowed to login.
    fn is_confirmed(&self) -> bool;
}

/// Identity the login session can be established for.
pub trait Sessionable {
    /// Stable subject of the session.
    fn session_subject(&self) -> String;

    /// Email shown in the session.
    fn session_email(&self) -> &str;

    /// Name shown in the session.
    fn display_name(&self) -> &str;

    /// Avatar shown in the session.
    fn avatar(&self) -> Option<&str>;
}

impl Authenticatable for Identity {
    fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    fn is_confirmed(&self) -> bool {
        self.confirmed
    }
}

impl Sessionable for Identity {
    fn session_subject(&self) -> String {
        self.id.to_string()
    }

    fn session_email(&self) -> &str {
        &self.email
    }

    fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or(&self.email)
    }

    fn avatar(&self) -> Option<&str> {
        self.profile_pic.as_deref()
    }
}
