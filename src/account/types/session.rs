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

use serde::Serialize;

use crate::identity::types::Sessionable;

/// Logged in user as stored in the web session.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Session {
    pub subject: String,
    pub email: String,
    pub display_name: String,
    pub avatar: Option<String>,
}

impl<T: Sessionable> From<&T> for Session {
    fn from(value: &T) -> Self {
        Self {
            subject: value.session_subject(),
            email: value.session_email().to_string(),
            display_name: value.display_name().to_string(),
            avatar: value.avatar().map(ToString::to_string),
        }
    }
}
