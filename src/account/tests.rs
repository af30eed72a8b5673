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

use secrecy::ExposeSecret;

use super::token::tests::get_key;
use super::*;
use crate::identity::MockIdentityProvider;
use crate::provider::Provider;
use crate::provisioning::{
    MockProvisioningProvider, OrphanedResources, ProvisioningErrorKind,
    ProvisioningProviderError,
};
use crate::tests::get_state_with;

fn get_config() -> Config {
    let mut config = Config::default();
    config.account.secret_key = Some(get_key());
    config
}

fn get_resources(id: i32) -> CloudResources {
    CloudResources {
        project_id: format!("P{id}"),
        user_id: format!("U{id}"),
        network_id: format!("N{id}"),
        subnet_id: format!("S{id}"),
        router_id: format!("R{id}"),
    }
}

fn get_identity(id: i32, email: &str, confirmed: bool) -> Identity {
    IdentityBuilder::default()
        .id(id)
        .email(email)
        .confirmed(confirmed)
        .build()
        .unwrap()
}

fn get_signup(email: &str, password: &str, confirm_password: &str) -> Signup {
    SignupBuilder::default()
        .username("jdoe")
        .email(email)
        .password(SecretString::from(password))
        .confirm_password(SecretString::from(confirm_password))
        .build()
        .unwrap()
}

fn get_state(
    config: &Config,
    identity: MockIdentityProvider,
    provisioning: MockProvisioningProvider,
) -> ServiceState {
    get_state_with(
        config.clone(),
        Provider::mocked_builder()
            .identity(identity)
            .provisioning(provisioning),
    )
}

fn provisioning_ok() -> MockProvisioningProvider {
    let mut provisioning = MockProvisioningProvider::default();
    provisioning
        .expect_provision()
        .times(1)
        .returning(|_, identity| Ok(get_resources(identity.id)));
    provisioning
}

fn provisioning_failing() -> MockProvisioningProvider {
    let mut provisioning = MockProvisioningProvider::default();
    provisioning.expect_provision().times(1).returning(|_, _| {
        Err(ProvisioningProviderError::ExternalNetworkNotFound {
            name: "public".into(),
            orphaned: OrphanedResources {
                project_id: Some("P1".into()),
                ..Default::default()
            },
        })
    });
    provisioning
}

#[tokio::test]
async fn test_signup() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .withf(|_, email: &str| email == "jdoe@example.com")
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_find_identity_by_username()
        .withf(|_, username: &str| username == "jdoe")
        .times(1)
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_create_identity()
        .withf(|_, req: &IdentityCreate| {
            req.email == "jdoe@example.com"
                && req.username.as_deref() == Some("jdoe")
                && !req.confirmed
                && req
                    .password
                    .as_ref()
                    .is_some_and(|p| p.expose_secret() == "Passw0rd!")
        })
        .times(1)
        .returning(|_, req| Ok(get_identity(1, &req.email, false)));
    identity_mock.expect_delete_identity().never();

    let state = get_state(&config, identity_mock, provisioning_ok());
    let provider = AccountProvider::new(&config).unwrap();
    let res = provider
        .signup(
            &state,
            get_signup("jdoe@example.com", "Passw0rd!", "Passw0rd!"),
        )
        .await
        .unwrap();
    assert_eq!(Some(get_resources(1)), res.identity.cloud);
    assert_eq!(
        "jdoe@example.com",
        provider
            .tokens()
            .unwrap()
            .verify(&res.confirmation_token, TokenPurpose::Confirm)
            .unwrap()
    );
}

#[tokio::test]
async fn test_signup_failing_provisioning_deletes_identity() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_find_identity_by_username()
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_create_identity()
        .returning(|_, req| Ok(get_identity(1, &req.email, false)));
    identity_mock
        .expect_delete_identity()
        .withf(|_, id: &i32| *id == 1)
        .times(1)
        .returning(|_, _| Ok(()));

    let state = get_state(&config, identity_mock, provisioning_failing());
    match AccountProvider::new(&config)
        .unwrap()
        .signup(
            &state,
            get_signup("jdoe@example.com", "Passw0rd!", "Passw0rd!"),
        )
        .await
    {
        Err(AccountError::Provisioning { source }) => {
            assert_eq!(ProvisioningErrorKind::ExternalNetworkMissing, source.kind());
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn test_signup_email_taken() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .returning(|_, email| Ok(Some(get_identity(1, email, true))));
    identity_mock.expect_create_identity().never();

    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());
    assert!(matches!(
        AccountProvider::new(&config)
            .unwrap()
            .signup(
                &state,
                get_signup("jdoe@example.com", "Passw0rd!", "Passw0rd!")
            )
            .await,
        Err(AccountError::EmailTaken(..))
    ));
}

#[tokio::test]
async fn test_signup_username_taken() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_find_identity_by_username()
        .withf(|_, username: &str| username == "jdoe")
        .returning(|_, _| Ok(Some(get_identity(1, "jdoe@other.com", true))));
    identity_mock.expect_create_identity().never();

    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());
    match AccountProvider::new(&config)
        .unwrap()
        .signup(
            &state,
            get_signup("fresh@example.com", "Passw0rd!", "Passw0rd!"),
        )
        .await
    {
        Err(AccountError::UsernameTaken(username)) => assert_eq!("jdoe", username),
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn test_signup_username_conflict_on_create() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_find_identity_by_username()
        .returning(|_, _| Ok(None));
    identity_mock.expect_create_identity().returning(|_, _| {
        Err(IdentityProviderError::Conflict(
            "duplicate key value violates unique constraint \"idx-identity-username\"".into(),
        ))
    });
    identity_mock.expect_delete_identity().never();

    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());
    let res = AccountProvider::new(&config)
        .unwrap()
        .signup(
            &state,
            get_signup("fresh@example.com", "Passw0rd!", "Passw0rd!"),
        )
        .await;
    match res {
        Err(err @ AccountError::UsernameTaken(..)) => {
            assert_eq!("username jdoe is already taken", err.to_string());
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn test_signup_email_conflict_on_create() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_find_identity_by_username()
        .returning(|_, _| Ok(None));
    identity_mock.expect_create_identity().returning(|_, _| {
        Err(IdentityProviderError::Conflict(
            "duplicate key value violates unique constraint \"identity_email_key\"".into(),
        ))
    });

    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());
    assert!(matches!(
        AccountProvider::new(&config)
            .unwrap()
            .signup(
                &state,
                get_signup("fresh@example.com", "Passw0rd!", "Passw0rd!")
            )
            .await,
        Err(AccountError::EmailTaken(..))
    ));
}

#[tokio::test]
async fn test_signup_rejects_password() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock.expect_find_identity_by_email().never();
    identity_mock.expect_create_identity().never();
    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());
    let provider = AccountProvider::new(&config).unwrap();

    assert!(matches!(
        provider
            .signup(&state, get_signup("a@b.com", "Passw0rd!", "Passw0rd?"))
            .await,
        Err(AccountError::PasswordMismatch)
    ));
    assert!(matches!(
        provider
            .signup(&state, get_signup("a@b.com", "password", "password"))
            .await,
        Err(AccountError::WeakPassword)
    ));
}

#[tokio::test]
async fn test_signup_without_secret_key() {
    let config = Config::default();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock.expect_create_identity().never();
    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());

    assert!(matches!(
        AccountProvider::new(&config)
            .unwrap()
            .signup(&state, get_signup("a@b.com", "Passw0rd!", "Passw0rd!"))
            .await,
        Err(AccountError::SecretKeyMissing)
    ));
}

#[tokio::test]
async fn test_confirm() {
    let config = get_config();
    let provider = AccountProvider::new(&config).unwrap();
    let token = provider
        .tokens()
        .unwrap()
        .issue("a@b.com", TokenPurpose::Confirm)
        .unwrap();

    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .withf(|_, email: &str| email == "a@b.com")
        .returning(|_, email| Ok(Some(get_identity(2, email, false))));
    identity_mock
        .expect_set_confirmed()
        .withf(|_, id: &i32| *id == 2)
        .times(1)
        .returning(|_, _| Ok(()));
    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());

    let session = provider.confirm(&state, &token).await.unwrap();
    assert_eq!("a@b.com", session.email);
}

#[tokio::test]
async fn test_confirm_already_confirmed() {
    let config = get_config();
    let provider = AccountProvider::new(&config).unwrap();
    let token = provider
        .tokens()
        .unwrap()
        .issue("a@b.com", TokenPurpose::Confirm)
        .unwrap();

    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .returning(|_, email| Ok(Some(get_identity(2, email, true))));
    identity_mock.expect_set_confirmed().never();
    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());

    assert!(provider.confirm(&state, &token).await.is_ok());
}

#[tokio::test]
async fn test_confirm_with_reset_token() {
    let config = get_config();
    let provider = AccountProvider::new(&config).unwrap();
    let token = provider
        .tokens()
        .unwrap()
        .issue("a@b.com", TokenPurpose::Reset)
        .unwrap();

    let mut identity_mock = MockIdentityProvider::default();
    identity_mock.expect_find_identity_by_email().never();
    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());

    assert!(matches!(
        provider.confirm(&state, &token).await,
        Err(AccountError::InvalidToken)
    ));
}

#[tokio::test]
async fn test_login() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_authenticate_by_password()
        .withf(|_, email: &str, password: &SecretString| {
            email == "a@b.com" && password.expose_secret() == "Passw0rd!"
        })
        .returning(|_, email, _| Ok(get_identity(3, email, true)));
    identity_mock
        .expect_authenticate_by_password()
        .withf(|_, email: &str, _| email == "new@b.com")
        .returning(|_, email, _| Ok(get_identity(4, email, false)));
    identity_mock
        .expect_authenticate_by_password()
        .withf(|_, email: &str, _| email == "other@b.com")
        .returning(|_, _, _| Err(IdentityProviderError::AuthenticationFailed));
    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());
    let provider = AccountProvider::new(&config).unwrap();

    let session = provider
        .login(&state, "a@b.com", &SecretString::from("Passw0rd!"))
        .await
        .unwrap();
    assert_eq!("3", session.subject);
    assert!(matches!(
        provider
            .login(&state, "new@b.com", &SecretString::from("Passw0rd!"))
            .await,
        Err(AccountError::Unconfirmed)
    ));
    assert!(matches!(
        provider
            .login(&state, "other@b.com", &SecretString::from("Passw0rd!"))
            .await,
        Err(AccountError::WrongCredentials)
    ));
}

fn get_external_login() -> ExternalLogin {
    ExternalLoginBuilder::default()
        .provider("keycloak")
        .subject("kc-sub")
        .email("jane@example.com")
        .name("Jane")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_login_external_linked() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_external_login()
        .withf(|_, provider: &str, subject: &str| provider == "keycloak" && subject == "kc-sub")
        .returning(|_, _, _| {
            let mut identity = get_identity(5, "jane@example.com", true);
            identity.cloud = Some(get_resources(5));
            Ok(Some(identity))
        });
    identity_mock.expect_create_identity().never();
    identity_mock.expect_create_external_login().never();
    let mut provisioning = MockProvisioningProvider::default();
    provisioning.expect_provision().never();
    let state = get_state(&config, identity_mock, provisioning);

    let session = AccountProvider::new(&config)
        .unwrap()
        .login_external(&state, get_external_login())
        .await
        .unwrap();
    assert_eq!("jane@example.com", session.email);
}

#[tokio::test]
async fn test_login_external_first_login() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_external_login()
        .returning(|_, _, _| Ok(None));
    identity_mock
        .expect_find_identity_by_email()
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_find_identity_by_username()
        .withf(|_, username: &str| username == "jane")
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_create_identity()
        .withf(|_, req: &IdentityCreate| {
            req.confirmed
                && req.username.as_deref() == Some("jane")
                && req.name.as_deref() == Some("Jane")
                && req.password.is_none()
        })
        .times(1)
        .returning(|_, req| {
            let mut identity = get_identity(6, &req.email, true);
            identity.name = req.name;
            Ok(identity)
        });
    identity_mock
        .expect_create_external_login()
        .withf(|_, link: &ExternalLoginLinkCreate| {
            link.provider == "keycloak"
                && link.provider_user_id == "kc-sub"
                && link.identity_id == 6
        })
        .times(1)
        .returning(|_, link| {
            Ok(ExternalLoginLink {
                id: 1,
                provider: link.provider,
                provider_user_id: link.provider_user_id,
                identity_id: link.identity_id,
                created_at: chrono::Utc::now(),
            })
        });
    let state = get_state(&config, identity_mock, provisioning_ok());

    let session = AccountProvider::new(&config)
        .unwrap()
        .login_external(&state, get_external_login())
        .await
        .unwrap();
    assert_eq!("Jane", session.display_name);
}

#[tokio::test]
async fn test_login_external_failing_provisioning() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_external_login()
        .returning(|_, _, _| Ok(None));
    identity_mock
        .expect_find_identity_by_email()
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_find_identity_by_username()
        .returning(|_, _| Ok(None));
    identity_mock
        .expect_create_identity()
        .returning(|_, req| Ok(get_identity(1, &req.email, true)));
    identity_mock
        .expect_delete_identity()
        .withf(|_, id: &i32| *id == 1)
        .times(1)
        .returning(|_, _| Ok(()));
    identity_mock.expect_create_external_login().never();
    let state = get_state(&config, identity_mock, provisioning_failing());

    assert!(matches!(
        AccountProvider::new(&config)
            .unwrap()
            .login_external(&state, get_external_login())
            .await,
        Err(AccountError::Provisioning { .. })
    ));
}

#[tokio::test]
async fn test_login_external_derived_username_taken() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_external_login()
        .returning(|_, _, _| Ok(None));
    identity_mock
        .expect_find_identity_by_email()
        .withf(|_, email: &str| email == "jane@example.com")
        .returning(|_, _| Ok(None));
    // `jane@other.org` signed up earlier and owns the `jane` username.
    identity_mock
        .expect_find_identity_by_username()
        .withf(|_, username: &str| username == "jane")
        .returning(|_, _| Ok(Some(get_identity(2, "jane@other.org", true))));
    identity_mock
        .expect_create_identity()
        .withf(|_, req: &IdentityCreate| {
            req.email == "jane@example.com" && req.username.is_none() && req.confirmed
        })
        .times(1)
        .returning(|_, req| Ok(get_identity(6, &req.email, true)));
    identity_mock
        .expect_create_external_login()
        .withf(|_, link: &ExternalLoginLinkCreate| link.identity_id == 6)
        .times(1)
        .returning(|_, link| {
            Ok(ExternalLoginLink {
                id: 1,
                provider: link.provider,
                provider_user_id: link.provider_user_id,
                identity_id: link.identity_id,
                created_at: chrono::Utc::now(),
            })
        });
    identity_mock.expect_set_confirmed().never();
    let state = get_state(&config, identity_mock, provisioning_ok());

    let session = AccountProvider::new(&config)
        .unwrap()
        .login_external(&state, get_external_login())
        .await
        .unwrap();
    assert_eq!("6", session.subject);
}

fn existing_identity_mock(identity: Identity) -> MockIdentityProvider {
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_external_login()
        .returning(|_, _, _| Ok(None));
    identity_mock
        .expect_find_identity_by_email()
        .withf(|_, email: &str| email == "jane@example.com")
        .returning(move |_, _| Ok(Some(identity.clone())));
    identity_mock.expect_find_identity_by_username().never();
    identity_mock.expect_create_identity().never();
    identity_mock.expect_delete_identity().never();
    identity_mock
}

fn expect_link(identity_mock: &mut MockIdentityProvider, seq: &mut mockall::Sequence, id: i32) {
    identity_mock
        .expect_create_external_login()
        .withf(move |_, link: &ExternalLoginLinkCreate| {
            link.provider == "keycloak"
                && link.provider_user_id == "kc-sub"
                && link.identity_id == id
        })
        .times(1)
        .in_sequence(seq)
        .returning(|_, link| {
            Ok(ExternalLoginLink {
                id: 1,
                provider: link.provider,
                provider_user_id: link.provider_user_id,
                identity_id: link.identity_id,
                created_at: chrono::Utc::now(),
            })
        });
}

#[tokio::test]
async fn test_login_external_links_provisioned_identity() {
    let config = get_config();
    let mut identity = get_identity(9, "jane@example.com", true);
    identity.cloud = Some(get_resources(9));
    let mut identity_mock = existing_identity_mock(identity);
    let mut seq = mockall::Sequence::new();
    expect_link(&mut identity_mock, &mut seq, 9);
    identity_mock.expect_set_confirmed().never();
    let mut provisioning = MockProvisioningProvider::default();
    provisioning.expect_provision().never();
    let state = get_state(&config, identity_mock, provisioning);

    let session = AccountProvider::new(&config)
        .unwrap()
        .login_external(&state, get_external_login())
        .await
        .unwrap();
    assert_eq!("9", session.subject);
}

#[tokio::test]
async fn test_login_external_links_unconfirmed_identity() {
    let config = get_config();
    let mut identity_mock = existing_identity_mock(get_identity(9, "jane@example.com", false));
    let mut seq = mockall::Sequence::new();
    let mut provisioning = MockProvisioningProvider::default();
    provisioning
        .expect_provision()
        .withf(|_, identity: &Identity| identity.id == 9)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, identity| Ok(get_resources(identity.id)));
    expect_link(&mut identity_mock, &mut seq, 9);
    identity_mock
        .expect_set_confirmed()
        .withf(|_, id: &i32| *id == 9)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    let state = get_state(&config, identity_mock, provisioning);

    let session = AccountProvider::new(&config)
        .unwrap()
        .login_external(&state, get_external_login())
        .await
        .unwrap();
    assert_eq!("9", session.subject);
}

#[tokio::test]
async fn test_login_external_existing_identity_failing_provisioning() {
    let config = get_config();
    let mut identity_mock = existing_identity_mock(get_identity(9, "jane@example.com", false));
    identity_mock.expect_create_external_login().never();
    identity_mock.expect_set_confirmed().never();
    let state = get_state(&config, identity_mock, provisioning_failing());

    match AccountProvider::new(&config)
        .unwrap()
        .login_external(&state, get_external_login())
        .await
    {
        Err(AccountError::Provisioning { source }) => {
            assert_eq!(ProvisioningErrorKind::ExternalNetworkMissing, source.kind());
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn test_password_reset() {
    let config = get_config();
    let provider = AccountProvider::new(&config).unwrap();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .withf(|_, email: &str| email == "a@b.com")
        .times(1)
        .returning(|_, email| Ok(Some(get_identity(8, email, true))));
    identity_mock
        .expect_set_reset_token()
        .withf(|_, id: &i32, token: &Option<String>| *id == 8 && token.is_some())
        .times(1)
        .returning(|_, _, _| Ok(()));
    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());
    let token = provider
        .request_password_reset(&state, "a@b.com")
        .await
        .unwrap();

    let mut identity_mock = MockIdentityProvider::default();
    let stored = token.clone();
    identity_mock
        .expect_find_identity_by_email()
        .returning(move |_, email| {
            let mut identity = get_identity(8, email, true);
            identity.reset_token = Some(stored.clone());
            Ok(Some(identity))
        });
    identity_mock
        .expect_set_password()
        .withf(|_, id: &i32, password: &SecretString| {
            *id == 8 && password.expose_secret() == "N3w-Passw0rd!"
        })
        .times(1)
        .returning(|_, _, _| Ok(()));
    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());

    let reset = |password: &str| {
        PasswordResetBuilder::default()
            .token(token.clone())
            .password(SecretString::from(password))
            .confirm_password(SecretString::from(password))
            .build()
            .unwrap()
    };
    assert!(matches!(
        provider.reset_password(&state, reset("weak")).await,
        Err(AccountError::WeakPassword)
    ));
    provider
        .reset_password(&state, reset("N3w-Passw0rd!"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_password_reset_superseded_token() {
    let config = get_config();
    let provider = AccountProvider::new(&config).unwrap();
    let token = provider
        .tokens()
        .unwrap()
        .issue("a@b.com", TokenPurpose::Reset)
        .unwrap();

    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .returning(|_, email| {
            let mut identity = get_identity(8, email, true);
            identity.reset_token = Some("newer".into());
            Ok(Some(identity))
        });
    identity_mock.expect_set_password().never();
    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());

    assert!(matches!(
        provider
            .reset_password(
                &state,
                PasswordResetBuilder::default()
                    .token(token)
                    .password(SecretString::from("N3w-Passw0rd!"))
                    .confirm_password(SecretString::from("N3w-Passw0rd!"))
                    .build()
                    .unwrap()
            )
            .await,
        Err(AccountError::InvalidToken)
    ));
}

#[tokio::test]
async fn test_request_password_reset_unknown_email() {
    let config = get_config();
    let mut identity_mock = MockIdentityProvider::default();
    identity_mock
        .expect_find_identity_by_email()
        .returning(|_, _| Ok(None));
    identity_mock.expect_set_reset_token().never();
    let state = get_state(&config, identity_mock, MockProvisioningProvider::default());

    assert!(matches!(
        AccountProvider::new(&config)
            .unwrap()
            .request_password_reset(&state, "nobody@b.com")
            .await,
        Err(AccountError::UnknownEmail(..))
    ));
}
