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
//! Password hashing.
//!
//! Bcrypt only looks at the first 72 bytes of the password. Longer passwords
//! are cut at the `max_password_length` bytes (never below 72).
use secrecy::{ExposeSecret, SecretString};
use tokio::task;
use tracing::warn;

use crate::config::{IdentitySection, PasswordHashingAlgo};
use crate::identity::error::IdentityProviderPasswordHashError;

/// Minimal length the password is truncated to.
const BCRYPT_MAX_PASSWORD_LENGTH: usize = 72;

/// Default bcrypt cost.
const DEFAULT_ROUNDS: u32 = 12;

fn truncated_password(password: &SecretString, max_length: usize) -> Vec<u8> {
    let max_length = max_length.max(BCRYPT_MAX_PASSWORD_LENGTH);
    let bytes = password.expose_secret().as_bytes();
    if bytes.len() > max_length {
        warn!("Truncating password to the configured maximum length");
        return bytes[..max_length].to_vec();
    }
    bytes.to_vec()
}

/// Calculate the password hash.
pub async fn hash_password(
    conf: &IdentitySection,
    password: &SecretString,
) -> Result<String, IdentityProviderPasswordHashError> {
    match conf.password_hashing_algorithm {
        PasswordHashingAlgo::Bcrypt => {
            let password_bytes = truncated_password(password, conf.max_password_length);
            let rounds = conf
                .password_hash_rounds
                .map(|x| x as u32)
                .unwrap_or(DEFAULT_ROUNDS);
            Ok(task::spawn_blocking(move || bcrypt::hash(password_bytes, rounds)).await??)
        }
    }
}

/// Verify the password matches the hash.
pub async fn verify_password<H: AsRef<str>>(
    conf: &IdentitySection,
    password: &SecretString,
    hash: H,
) -> Result<bool, IdentityProviderPasswordHashError> {
    match conf.password_hashing_algorithm {
        PasswordHashingAlgo::Bcrypt => {
            let password_bytes = truncated_password(password, conf.max_password_length);
            let password_hash = hash.as_ref().to_string();
            Ok(
                task::spawn_blocking(move || bcrypt::verify(password_bytes, &password_hash))
                    .await??,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::distr::{Alphanumeric, SampleString};

    use super::*;

    fn conf() -> IdentitySection {
        IdentitySection {
            password_hash_rounds: Some(4),
            ..Default::default()
        }
    }

    #[test]
    fn test_truncated_password() {
        let short = SecretString::from("abcdefg");
        assert_eq!(b"abcdefg".to_vec(), truncated_password(&short, 4096));
        // Never below the bcrypt limit.
        let long = SecretString::from("a".repeat(100));
        assert_eq!(72, truncated_password(&long, 10).len());
        assert_eq!(80, truncated_password(&long, 80).len());
    }

    #[tokio::test]
    async fn test_roundtrip() {
        let password = SecretString::from("Secret123!");
        let hashed = hash_password(&conf(), &password).await.unwrap();
        assert!(hashed.starts_with("$2"));
        assert!(verify_password(&conf(), &password, &hashed).await.unwrap());
        assert!(
            !verify_password(&conf(), &SecretString::from("secret123!"), &hashed)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_roundtrip_longer_than_72() {
        let password =
            SecretString::from(Alphanumeric.sample_string(&mut rand::rng(), 80));
        let hashed = hash_password(&conf(), &password).await.unwrap();
        assert!(verify_password(&conf(), &password, hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_malformed_hash() {
        assert!(
            verify_password(&conf(), &SecretString::from("x"), "not a hash")
                .await
                .is_err()
        );
    }
}
