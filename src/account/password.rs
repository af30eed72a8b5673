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

use secrecy::{ExposeSecret, SecretString};

use crate::account::error::AccountError;

/// Special characters of which the strong password must contain at least one.
const SPECIAL_CHARACTERS: &str = "@$!%*?&";

/// Minimal length of the password.
const MIN_LENGTH: usize = 8;

/// Check the password strength.
///
/// Surrounding whitespace does not count.
pub fn check_strength(password: &SecretString) -> Result<(), AccountError> {
    let password = password.expose_secret().trim();
    let strong = password.chars().count() >= MIN_LENGTH
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARACTERS.contains(c));
    if strong {
        Ok(())
    } else {
        Err(AccountError::WeakPassword)
    }
}

/// Check that the password and its confirmation are equal.
pub fn check_confirmation(
    password: &SecretString,
    confirm_password: &SecretString,
) -> Result<(), AccountError> {
    if password.expose_secret() == confirm_password.expose_secret() {
        Ok(())
    } else {
        Err(AccountError::PasswordMismatch)
    }
}
