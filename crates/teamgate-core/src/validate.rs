//! Field validation for account mutations.
//!
//! Pure and total: any input yields a boolean, never a panic.

/// True iff the name, with interior spaces removed, is non-empty and
/// entirely alphabetic (covers multi-word names like "Jane Doe").
pub fn valid_full_name(name: &str) -> bool {
    let mut seen = false;
    for c in name.chars() {
        if c == ' ' {
            continue;
        }
        if !c.is_alphabetic() {
            return false;
        }
        seen = true;
    }
    seen
}

/// True iff the password is 8 to 16 characters long and contains at
/// least one digit, one lowercase letter and one uppercase letter.
/// No other character classes are required or forbidden.
pub fn valid_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(8..=16).contains(&len) {
        return false;
    }
    password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}
