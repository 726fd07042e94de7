//! Credential-format policy.
//!
//! Applied identically at sign-in, sign-up, and password-reset: the email
//! must end with the role's fixed suffix (`@university.edu` for students,
//! `@admin.edu` for assigners). Check order is part of the contract --
//! required-field checks come first, then the suffix check, then the
//! password-confirmation check (sign-up only) -- so the user always sees
//! the earliest applicable message for the form they submitted.
//!
//! Nothing here verifies a password against anything; passwords are
//! format-checked for presence and never stored.

use crate::error::{CoreError, CoreResult};
use crate::identity::Role;

/// True if the email carries the role's required suffix. Matching is
/// case-insensitive, as users routinely type mixed-case addresses.
pub fn has_role_suffix(email: &str, role: Role) -> bool {
    email.to_lowercase().ends_with(role.email_suffix())
}

/// Validate a sign-in submission.
pub fn validate_sign_in(email: &str, password: &str, role: Role) -> CoreResult<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "Please fill in all fields to continue.".to_string(),
        ));
    }
    if !has_role_suffix(email, role) {
        let message = match role {
            Role::Student => "Please use your university email (@university.edu) to sign in.",
            Role::Assigner => "Please use your admin email (@admin.edu) to access the dashboard.",
        };
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(())
}

/// Validate a sign-up submission.
pub fn validate_sign_up(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    role: Role,
) -> CoreResult<()> {
    if name.trim().is_empty()
        || email.trim().is_empty()
        || password.is_empty()
        || confirm_password.is_empty()
    {
        return Err(CoreError::Validation("All fields are required".to_string()));
    }
    if !has_role_suffix(email, role) {
        let message = match role {
            Role::Student => "Please use your university email to sign up.",
            Role::Assigner => "Please use your admin email for an assigner account.",
        };
        return Err(CoreError::Validation(message.to_string()));
    }
    if password != confirm_password {
        return Err(CoreError::Validation("Passwords do not match".to_string()));
    }
    Ok(())
}

/// Validate a password-reset request.
pub fn validate_reset(email: &str, role: Role) -> CoreResult<()> {
    if email.trim().is_empty() {
        return Err(CoreError::Validation(
            "Please enter your email address.".to_string(),
        ));
    }
    if !has_role_suffix(email, role) {
        let message = match role {
            Role::Student => "Please use your university email address.",
            Role::Assigner => "Please use your admin email address.",
        };
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assert the result is a `Validation` error carrying exactly `expected`.
    fn assert_validation(result: CoreResult<()>, expected: &str) {
        match result {
            Err(CoreError::Validation(msg)) => assert_eq!(msg, expected),
            other => panic!("expected Validation({expected:?}), got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // Suffix matrix
    // -----------------------------------------------------------------------

    #[test]
    fn student_requires_university_suffix() {
        assert!(validate_sign_in("a@university.edu", "pw", Role::Student).is_ok());
        assert_validation(
            validate_sign_in("a@gmail.com", "pw", Role::Student),
            "Please use your university email (@university.edu) to sign in.",
        );
        // An admin address is not acceptable for a student sign-in either.
        assert_validation(
            validate_sign_in("a@admin.edu", "pw", Role::Student),
            "Please use your university email (@university.edu) to sign in.",
        );
    }

    #[test]
    fn assigner_requires_admin_suffix() {
        assert!(validate_sign_in("ops@admin.edu", "pw", Role::Assigner).is_ok());
        assert_validation(
            validate_sign_in("ops@university.edu", "pw", Role::Assigner),
            "Please use your admin email (@admin.edu) to access the dashboard.",
        );
    }

    #[test]
    fn suffix_match_is_case_insensitive() {
        assert!(validate_sign_in("A@University.EDU", "pw", Role::Student).is_ok());
        assert!(validate_reset("OPS@ADMIN.EDU", Role::Assigner).is_ok());
    }

    // -----------------------------------------------------------------------
    // Check ordering
    // -----------------------------------------------------------------------

    #[test]
    fn empty_fields_reported_before_suffix() {
        // Bad suffix AND empty password: the empty-field message wins.
        assert_validation(
            validate_sign_in("a@gmail.com", "", Role::Student),
            "Please fill in all fields to continue.",
        );
    }

    #[test]
    fn suffix_reported_before_password_mismatch() {
        assert_validation(
            validate_sign_up("Jane", "jane@gmail.com", "pw1", "pw2", Role::Student),
            "Please use your university email to sign up.",
        );
    }

    #[test]
    fn sign_up_password_mismatch_is_last() {
        assert_validation(
            validate_sign_up("Jane", "jane@university.edu", "pw1", "pw2", Role::Student),
            "Passwords do not match",
        );
        assert!(
            validate_sign_up("Jane", "jane@university.edu", "pw", "pw", Role::Student).is_ok()
        );
    }

    #[test]
    fn sign_up_requires_every_field() {
        for (name, email, pw, confirm) in [
            ("", "j@university.edu", "pw", "pw"),
            ("Jane", "", "pw", "pw"),
            ("Jane", "j@university.edu", "", "pw"),
            ("Jane", "j@university.edu", "pw", ""),
        ] {
            assert_validation(
                validate_sign_up(name, email, pw, confirm, Role::Student),
                "All fields are required",
            );
        }
    }

    #[test]
    fn reset_messages_per_role() {
        assert_validation(
            validate_reset("", Role::Student),
            "Please enter your email address.",
        );
        assert_validation(
            validate_reset("x@gmail.com", Role::Student),
            "Please use your university email address.",
        );
        assert_validation(
            validate_reset("x@gmail.com", Role::Assigner),
            "Please use your admin email address.",
        );
    }
}
