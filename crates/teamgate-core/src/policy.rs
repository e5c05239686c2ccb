//! Authorization policy.
//!
//! Pure decision functions over a caller identity and a resolved target
//! snapshot. The lifecycle layer resolves each target exactly once and
//! passes the snapshot in; an unresolved target always denies.

use crate::models::account::Account;

/// The identity attached to an incoming operation.
#[derive(Debug, Clone)]
pub enum Caller {
    Anonymous,
    Authenticated(Account),
}

impl Caller {
    pub fn account(&self) -> Option<&Account> {
        match self {
            Caller::Anonymous => None,
            Caller::Authenticated(account) => Some(account),
        }
    }
}

/// Staff or superuser. Used everywhere a staff override applies to a
/// user-facing operation; the superuser flag subsumes staff there.
pub fn has_elevated_rights(account: &Account) -> bool {
    account.is_staff || account.is_superuser
}

/// Registration is open to everyone, anonymous callers included.
pub fn can_register(_caller: &Caller) -> bool {
    true
}

/// Profile reads require authentication only. Any authenticated account
/// may read any profile; there is no ownership or department check.
pub fn can_read_profile(caller: &Caller) -> bool {
    caller.account().is_some()
}

/// Profile updates require the caller to share the target's department
/// or hold elevated rights. Department membership must be present on
/// both sides to count as shared.
pub fn can_update_profile(caller: &Caller, target: Option<&Account>) -> bool {
    let (Some(caller), Some(target)) = (caller.account(), target) else {
        return false;
    };
    same_department(caller, target) || has_elevated_rights(caller)
}

/// Password changes require authentication only; the effective guard is
/// the old-password verification in the lifecycle layer.
pub fn can_change_password(caller: &Caller) -> bool {
    caller.account().is_some()
}

/// Accounts may be deleted by themselves or by an elevated caller.
pub fn can_delete_account(caller: &Caller, target: Option<&Account>) -> bool {
    let (Some(caller), Some(target)) = (caller.account(), target) else {
        return false;
    };
    caller.id == target.id || has_elevated_rights(caller)
}

/// Department administration requires the superuser flag; staff status
/// alone is not sufficient.
pub fn can_administer_departments(caller: &Caller) -> bool {
    caller.account().is_some_and(|a| a.is_superuser)
}

fn same_department(caller: &Account, target: &Account) -> bool {
    match (caller.department_id, target.department_id) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
