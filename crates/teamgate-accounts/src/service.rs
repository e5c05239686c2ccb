//! Account and department lifecycle services.
//!
//! Each operation is one logical transaction: the target is resolved
//! once, the snapshot flows through the authorization policy and field
//! validation, and only then is the mutation applied through the
//! injected repositories.

use teamgate_auth::AuthConfig;
use teamgate_auth::password;
use teamgate_core::error::{TeamgateError, TeamgateResult};
use teamgate_core::models::account::{Account, CreateAccount, UpdateAccount};
use teamgate_core::models::department::{CreateDepartment, Department};
use teamgate_core::policy::{self, Caller};
use teamgate_core::repository::{AccountRepository, DepartmentRepository};
use teamgate_core::validate;
use tracing::info;

const PASSWORD_RULES: &str = "The password must contain at least one number and one uppercase \
     and lowercase letter, and at least 8 or more characters";

/// Payload for account registration.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Required; `None` surfaces as a field error rather than a
    /// deserialization failure.
    pub department: Option<i64>,
}

/// Payload for a profile update. A `department` of `None` leaves the
/// current assignment unchanged.
#[derive(Debug, Clone)]
pub struct UpdateProfileInput {
    pub full_name: String,
    pub email: String,
    pub department: Option<i64>,
}

/// Payload for a password change. Both fields are required; they are
/// optional here so a missing one reports a field error.
#[derive(Debug, Clone, Default)]
pub struct ChangePasswordInput {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

fn unauthenticated() -> TeamgateError {
    TeamgateError::AuthenticationFailed {
        reason: "authentication required".into(),
    }
}

fn forbidden(reason: &str) -> TeamgateError {
    TeamgateError::AuthorizationDenied {
        reason: reason.into(),
    }
}

/// Account lifecycle service.
pub struct AccountService<A: AccountRepository, D: DepartmentRepository> {
    accounts: A,
    departments: D,
    config: AuthConfig,
}

impl<A: AccountRepository, D: DepartmentRepository> AccountService<A, D> {
    pub fn new(accounts: A, departments: D, config: AuthConfig) -> Self {
        Self {
            accounts,
            departments,
            config,
        }
    }

    /// Register a new account. Open to anonymous callers.
    ///
    /// Field checks run in the source order: department presence, full
    /// name, password strength, department resolution; a taken email
    /// surfaces as a field error on `email`.
    pub async fn register(&self, caller: &Caller, input: RegisterInput) -> TeamgateResult<Account> {
        if !policy::can_register(caller) {
            return Err(forbidden("registration denied"));
        }

        let Some(department_id) = input.department else {
            return Err(TeamgateError::validation(
                "department",
                "The request must have a department field.",
            ));
        };
        if !validate::valid_full_name(&input.full_name) {
            return Err(TeamgateError::validation(
                "full_name",
                "This field must be alphanumeric.",
            ));
        }
        if !validate::valid_password(&input.password) {
            return Err(TeamgateError::validation("password", PASSWORD_RULES));
        }

        let department = self
            .departments
            .get_by_id(department_id)
            .await
            .map_err(|e| match e {
                TeamgateError::NotFound { .. } => {
                    TeamgateError::validation("department", "This department does not exist.")
                }
                other => other,
            })?;

        let account = self
            .accounts
            .create(CreateAccount {
                email: input.email,
                full_name: input.full_name,
                password: input.password,
                is_staff: false,
                is_superuser: false,
                department_id: Some(department.id),
            })
            .await
            .map_err(|e| match e {
                TeamgateError::AlreadyExists { .. } => TeamgateError::validation(
                    "email",
                    "An account with this email already exists.",
                ),
                other => other,
            })?;

        info!(account_id = account.id, "registered account");
        Ok(account)
    }

    /// Read an account. Requires authentication only; any authenticated
    /// caller may read any account.
    pub async fn get(&self, caller: &Caller, id: i64) -> TeamgateResult<Account> {
        if !policy::can_read_profile(caller) {
            return Err(unauthenticated());
        }
        self.accounts.get_by_id(id).await
    }

    /// Update full name, email and department of an account.
    ///
    /// The caller must share the target's department or hold elevated
    /// rights; an absent target denies rather than reporting not-found.
    pub async fn update_profile(
        &self,
        caller: &Caller,
        id: i64,
        input: UpdateProfileInput,
    ) -> TeamgateResult<Account> {
        if caller.account().is_none() {
            return Err(unauthenticated());
        }

        let target = match self.accounts.get_by_id(id).await {
            Ok(account) => Some(account),
            Err(TeamgateError::NotFound { .. }) => None,
            Err(e) => return Err(e),
        };
        if !policy::can_update_profile(caller, target.as_ref()) {
            return Err(forbidden(
                "caller must share the target's department or hold staff rights",
            ));
        }

        let department_id = match input.department {
            Some(dep_id) => {
                let department =
                    self.departments
                        .get_by_id(dep_id)
                        .await
                        .map_err(|e| match e {
                            TeamgateError::NotFound { .. } => TeamgateError::validation(
                                "department",
                                "This department does not exist.",
                            ),
                            other => other,
                        })?;
                Some(Some(department.id))
            }
            None => None,
        };

        let updated = self
            .accounts
            .update(
                id,
                UpdateAccount {
                    full_name: Some(input.full_name),
                    email: Some(input.email),
                    department_id,
                },
            )
            .await?;

        info!(account_id = id, "updated profile");
        Ok(updated)
    }

    /// Change an account's password.
    ///
    /// Both passwords are strength-validated (old first) before the old
    /// one is checked against the stored hash. The target is addressed
    /// by id alone; no caller/target identity match is enforced.
    pub async fn change_password(
        &self,
        caller: &Caller,
        id: i64,
        input: ChangePasswordInput,
    ) -> TeamgateResult<()> {
        if !policy::can_change_password(caller) {
            return Err(unauthenticated());
        }

        let Some(old_password) = input.old_password else {
            return Err(TeamgateError::validation(
                "old_password",
                "This field is required.",
            ));
        };
        let Some(new_password) = input.new_password else {
            return Err(TeamgateError::validation(
                "new_password",
                "This field is required.",
            ));
        };
        if !validate::valid_password(&old_password) {
            return Err(TeamgateError::validation("old_password", PASSWORD_RULES));
        }
        if !validate::valid_password(&new_password) {
            return Err(TeamgateError::validation("new_password", PASSWORD_RULES));
        }

        let account = self.accounts.get_by_id(id).await?;

        let matches = password::verify_password(
            &old_password,
            &account.password_hash,
            self.config.pepper.as_deref(),
        )
        .map_err(TeamgateError::from)?;
        if !matches {
            return Err(TeamgateError::validation(
                "old_password",
                "The old password didn't match.",
            ));
        }

        self.accounts.set_password(account.id, &new_password).await?;
        info!(account_id = account.id, "changed password");
        Ok(())
    }

    /// Delete an account. Restricted to the account itself or an
    /// elevated caller; an absent target denies.
    pub async fn delete(&self, caller: &Caller, id: i64) -> TeamgateResult<()> {
        if caller.account().is_none() {
            return Err(unauthenticated());
        }

        let target = match self.accounts.get_by_id(id).await {
            Ok(account) => Some(account),
            Err(TeamgateError::NotFound { .. }) => None,
            Err(e) => return Err(e),
        };
        if !policy::can_delete_account(caller, target.as_ref()) {
            return Err(forbidden(
                "caller may only delete their own profile without staff rights",
            ));
        }

        self.accounts.delete(id).await?;
        info!(account_id = id, "deleted account");
        Ok(())
    }
}

/// Department lifecycle service. Every operation is superuser-only.
pub struct DepartmentService<D: DepartmentRepository> {
    departments: D,
}

impl<D: DepartmentRepository> DepartmentService<D> {
    pub fn new(departments: D) -> Self {
        Self { departments }
    }

    fn admin_gate(&self, caller: &Caller) -> TeamgateResult<()> {
        if caller.account().is_none() {
            return Err(unauthenticated());
        }
        if !policy::can_administer_departments(caller) {
            return Err(forbidden("department administration requires superuser"));
        }
        Ok(())
    }

    pub async fn list(&self, caller: &Caller) -> TeamgateResult<Vec<Department>> {
        self.admin_gate(caller)?;
        self.departments.list().await
    }

    pub async fn create(&self, caller: &Caller, name: &str) -> TeamgateResult<Department> {
        self.admin_gate(caller)?;
        let department = self
            .departments
            .create(CreateDepartment { name: name.into() })
            .await?;
        info!(department_id = department.id, "created department");
        Ok(department)
    }

    /// Delete a department, cascading to its member accounts. An absent
    /// id reports not-found.
    pub async fn delete(&self, caller: &Caller, id: i64) -> TeamgateResult<()> {
        self.admin_gate(caller)?;
        self.departments.delete(id).await?;
        info!(department_id = id, "deleted department");
        Ok(())
    }
}
