//! Validation utilities for sign-in and sign-up input
//!
//! Every validator is pure and returns a [`ValidationResult`] carrying the
//! user-facing message on failure.

/// Minimum password length accepted by the sign-in form.
pub const LOGIN_MIN_PASSWORD: usize = 6;

/// Minimum password length accepted by the sign-up form.
pub const SIGNUP_MIN_PASSWORD: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format (`local@domain.tld`)
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !is_email_shaped(email) {
        return ValidationResult::err("Please enter a valid email address");
    }

    ValidationResult::ok()
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    // Needs a dot with at least one character on each side
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate password presence and minimum length (counted in characters)
pub fn validate_password(password: &str, min_len: usize) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < min_len {
        return ValidationResult::err(format!(
            "Password must be at least {} characters",
            min_len
        ));
    }

    ValidationResult::ok()
}

/// Validate a required text field after trimming
pub fn validate_required(value: &str, message: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(message);
    }

    ValidationResult::ok()
}

/// Validate the confirmation matches the password exactly
pub fn validate_confirm_password(password: &str, confirm: &str) -> ValidationResult {
    if confirm.is_empty() {
        return ValidationResult::err("Please confirm your password");
    }

    if password != confirm {
        return ValidationResult::err("Passwords do not match");
    }

    ValidationResult::ok()
}

/// Advisory password strength, 0 to 5.
///
/// One point each for: 8+ characters, 12+ characters, mixed ASCII case, an
/// ASCII digit, a character that is not an ASCII letter or digit.
pub fn password_strength(password: &str) -> u8 {
    let len = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());

    [
        len >= 8,
        len >= 12,
        has_lower && has_upper,
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ]
    .iter()
    .filter(|&&point| point)
    .count() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => PasswordStrength::Weak,
            3 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn of(password: &str) -> Self {
        Self::from_score(password_strength(password))
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(validate_email("a@b.c").is_valid);

        assert_eq!(
            validate_email("").error.as_deref(),
            Some("Email is required")
        );
        for bad in [
            "invalid",
            "@example.com",
            "test@",
            "test@example",
            "test@.com",
            "test@example.",
            "a@b@c.com",
            "te st@example.com",
        ] {
            assert_eq!(
                validate_email(bad).error.as_deref(),
                Some("Please enter a valid email address"),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_password_validation() {
        assert_eq!(
            validate_password("", LOGIN_MIN_PASSWORD).error.as_deref(),
            Some("Password is required")
        );
        assert_eq!(
            validate_password("12345", LOGIN_MIN_PASSWORD).error.as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert!(validate_password("secret", LOGIN_MIN_PASSWORD).is_valid);

        assert_eq!(
            validate_password("secret1", SIGNUP_MIN_PASSWORD).error.as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert!(validate_password("secret12", SIGNUP_MIN_PASSWORD).is_valid);
    }

    #[test]
    fn test_password_minimum_boundaries() {
        let cases = [
            (LOGIN_MIN_PASSWORD, 5, false),
            (LOGIN_MIN_PASSWORD, 6, true),
            (LOGIN_MIN_PASSWORD, 7, true),
            (SIGNUP_MIN_PASSWORD, 7, false),
            (SIGNUP_MIN_PASSWORD, 8, true),
            (SIGNUP_MIN_PASSWORD, 9, true),
        ];

        for (min_len, len, valid) in cases {
            let password = "x".repeat(len);
            let result = validate_password(&password, min_len);
            assert_eq!(result.is_valid, valid, "min {min_len}, length {len}");
            if !valid {
                assert_eq!(
                    result.error,
                    Some(format!("Password must be at least {} characters", min_len))
                );
            }
        }
    }

    #[test]
    fn test_email_shape_table() {
        let cases = [
            ("a@b.co", true),
            ("first.last+tag@shop.example.com", true),
            ("x@y.z", true),
            ("no-at-sign.com", false),
            ("user@nodot", false),
            ("user@dot.", false),
            ("user@.dot", false),
            ("@domain.com", false),
            ("two@@domain.com", false),
            ("tab\t@domain.com", false),
            ("user@dom ain.com", false),
        ];

        for (email, valid) in cases {
            assert_eq!(validate_email(email).is_valid, valid, "{email:?}");
        }
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Six characters, twelve bytes
        assert!(validate_password("éééééé", LOGIN_MIN_PASSWORD).is_valid);
        assert!(!validate_password("ééééé", LOGIN_MIN_PASSWORD).is_valid);
    }

    #[test]
    fn test_required_trims_whitespace() {
        assert!(!validate_required("   ", "First name is required").is_valid);
        assert!(validate_required(" Ada ", "First name is required").is_valid);
    }

    #[test]
    fn test_confirm_password() {
        assert_eq!(
            validate_confirm_password("password1", "").error.as_deref(),
            Some("Please confirm your password")
        );
        assert_eq!(
            validate_confirm_password("password1", "password2").error.as_deref(),
            Some("Passwords do not match")
        );
        assert!(validate_confirm_password("password1", "password1").is_valid);
    }

    #[test]
    fn test_password_strength_scores() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abcdefgh"), 1);
        assert_eq!(password_strength("abcdefgh1"), 2);
        assert_eq!(password_strength("Abcdefgh1"), 3);
        assert_eq!(password_strength("Abcdefgh1!"), 4);
        assert_eq!(password_strength("Abcdefgh1!xyz"), 5);

        assert_eq!(PasswordStrength::of("abc"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::of("Abcdefgh1"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::of("Abcdefgh1!"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::Strong.to_string(), "Strong");
    }
}
