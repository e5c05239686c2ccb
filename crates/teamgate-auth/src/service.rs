//! Authentication service — credential login and bearer-token
//! resolution.

use teamgate_core::error::{TeamgateError, TeamgateResult};
use teamgate_core::models::account::Account;
use teamgate_core::models::token::CreateApiToken;
use teamgate_core::repository::{AccountRepository, TokenRepository};
use tracing::debug;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Successful login result.
#[derive(Debug)]
pub struct ObtainTokenOutput {
    /// Raw opaque token (returned to the client, not stored).
    pub token: String,
}

/// Authentication service.
///
/// Generic over repository implementations so that the auth layer has
/// no dependency on the database crate.
pub struct AuthService<A: AccountRepository, T: TokenRepository> {
    account_repo: A,
    token_repo: T,
    config: AuthConfig,
}

impl<A: AccountRepository, T: TokenRepository> AuthService<A, T> {
    pub fn new(account_repo: A, token_repo: T, config: AuthConfig) -> Self {
        Self {
            account_repo,
            token_repo,
            config,
        }
    }

    /// Authenticate with email + password and issue a fresh opaque
    /// token. Unknown email, wrong password and inactive accounts all
    /// collapse into the same failure so callers cannot enumerate
    /// accounts.
    pub async fn obtain_token(
        &self,
        email: &str,
        password: &str,
    ) -> TeamgateResult<ObtainTokenOutput> {
        let account = self
            .account_repo
            .get_by_email(email)
            .await
            .map_err(|e| match e {
                TeamgateError::NotFound { .. } => AuthError::InvalidCredentials.into(),
                other => other,
            })?;

        let valid = password::verify_password(
            password,
            &account.password_hash,
            self.config.pepper.as_deref(),
        )
        .map_err(TeamgateError::from)?;

        if !valid || !account.is_active {
            return Err(AuthError::InvalidCredentials.into());
        }

        let raw = token::generate_token();
        self.token_repo
            .create(CreateApiToken {
                account_id: account.id,
                token_hash: token::hash_token(&raw),
            })
            .await?;

        debug!(account_id = account.id, "issued api token");

        Ok(ObtainTokenOutput { token: raw })
    }

    /// Resolve a raw bearer token to its account.
    ///
    /// An unknown token, a token whose account has disappeared, or an
    /// inactive account all reject identically.
    pub async fn authenticate(&self, raw_token: &str) -> TeamgateResult<Account> {
        let record = self
            .token_repo
            .get_by_hash(&token::hash_token(raw_token))
            .await
            .map_err(|e| match e {
                TeamgateError::NotFound { .. } => AuthError::TokenInvalid.into(),
                other => other,
            })?;

        let account = self
            .account_repo
            .get_by_id(record.account_id)
            .await
            .map_err(|e| match e {
                TeamgateError::NotFound { .. } => AuthError::TokenInvalid.into(),
                other => other,
            })?;

        if !account.is_active {
            return Err(AuthError::TokenInvalid.into());
        }

        Ok(account)
    }
}
