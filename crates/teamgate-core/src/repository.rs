//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations assign integer
//! identifiers on creation and enforce the uniqueness and cascade
//! constraints of the data model.

use crate::error::TeamgateResult;
use crate::models::{
    account::{Account, CreateAccount, UpdateAccount},
    department::{CreateDepartment, Department},
    token::{ApiToken, CreateApiToken},
};

pub trait AccountRepository: Send + Sync {
    /// Hashes the raw password and persists a new account. A taken
    /// email yields `AlreadyExists`.
    fn create(&self, input: CreateAccount) -> impl Future<Output = TeamgateResult<Account>> + Send;
    fn get_by_id(&self, id: i64) -> impl Future<Output = TeamgateResult<Account>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = TeamgateResult<Account>> + Send;
    fn update(
        &self,
        id: i64,
        input: UpdateAccount,
    ) -> impl Future<Output = TeamgateResult<Account>> + Send;
    /// Hard delete. The account's tokens are removed with it.
    fn delete(&self, id: i64) -> impl Future<Output = TeamgateResult<()>> + Send;
    /// Replaces the stored credential with the hash of `new_password`.
    fn set_password(
        &self,
        id: i64,
        new_password: &str,
    ) -> impl Future<Output = TeamgateResult<()>> + Send;
    fn list(&self) -> impl Future<Output = TeamgateResult<Vec<Account>>> + Send;
}

pub trait DepartmentRepository: Send + Sync {
    /// Rejects the empty name with a field validation error.
    fn create(
        &self,
        input: CreateDepartment,
    ) -> impl Future<Output = TeamgateResult<Department>> + Send;
    fn get_by_id(&self, id: i64) -> impl Future<Output = TeamgateResult<Department>> + Send;
    fn list(&self) -> impl Future<Output = TeamgateResult<Vec<Department>>> + Send;
    /// Hard delete, cascading to member accounts and their tokens.
    fn delete(&self, id: i64) -> impl Future<Output = TeamgateResult<()>> + Send;
}

pub trait TokenRepository: Send + Sync {
    fn create(
        &self,
        input: CreateApiToken,
    ) -> impl Future<Output = TeamgateResult<ApiToken>> + Send;
    fn get_by_hash(&self, token_hash: &str)
    -> impl Future<Output = TeamgateResult<ApiToken>> + Send;
    /// Removes every token issued to an account.
    fn delete_for_account(&self, account_id: i64) -> impl Future<Output = TeamgateResult<()>> + Send;
}
