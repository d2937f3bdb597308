//! Password strength rules shared by registration and password reset.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 16;

/// Result of each rule, evaluated live as the user types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordChecks {
    pub length: bool,
    pub has_symbol: bool,
    pub has_digit: bool,
    pub has_upper: bool,
}

impl PasswordChecks {
    pub fn evaluate(password: &str) -> Self {
        let len = password.chars().count();
        Self {
            length: (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len),
            has_symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
        }
    }

    pub fn all_pass(self) -> bool {
        self.length && self.has_symbol && self.has_digit && self.has_upper
    }
}
