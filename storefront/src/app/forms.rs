//! # Form State Machines
//!
//! Sign-in and sign-up forms own their field values and a [`FormPhase`]:
//!
//! ```text
//!   Editing(errors) ──begin_submit──▶ Validating ──┬──▶ Submitting ──┬──▶ Succeeded
//!        ▲                                         │                 │
//!        │                                         ▼                 ▼
//!        └────────────── edit a field ──────── Failed(errors) ◀──────┘
//! ```
//!
//! Validation is synchronous and re-run on every submit. Editing a field
//! clears that field's error only. Server errors are mapped onto the form
//! once the request resolves.

use std::collections::BTreeMap;

use shared::{LoginRequest, SignupRequest};

use crate::core::error::{ApiError, AppError};
use crate::utils::validation::{
    password_strength, validate_confirm_password, validate_email, validate_password,
    validate_required, PasswordStrength, ValidationResult, LOGIN_MIN_PASSWORD,
    SIGNUP_MIN_PASSWORD,
};

/// A form input that can carry an error.
pub trait FormField: Copy + Ord + std::fmt::Debug {
    /// Field name used by the backend in error payloads.
    fn wire_name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Email,
    Password,
}

impl FormField for LoginField {
    fn wire_name(&self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    AgreeTerms,
}

impl FormField for SignupField {
    fn wire_name(&self) -> &'static str {
        match self {
            SignupField::FirstName => "first_name",
            SignupField::LastName => "last_name",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirm_password",
            SignupField::AgreeTerms => "agree_terms",
        }
    }
}

/// Per-field messages plus an optional form-level message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors<F: FormField> {
    fields: BTreeMap<F, String>,
    general: Option<String>,
}

impl<F: FormField> Default for FormErrors<F> {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
            general: None,
        }
    }
}

impl<F: FormField> FormErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn general_only(message: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            general: Some(message.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }

    pub fn field(&self, field: F) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn set_field(&mut self, field: F, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: F) {
        self.fields.remove(&field);
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    pub fn set_general(&mut self, message: impl Into<String>) {
        self.general = Some(message.into());
    }

    /// Field errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.fields.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// First message to show when only one line fits.
    pub fn first_message(&self) -> Option<&str> {
        self.general().or_else(|| self.fields.values().next().map(String::as_str))
    }

    fn check(&mut self, field: F, result: ValidationResult) {
        if let Some(message) = result.error {
            self.set_field(field, message);
        }
    }
}

/// Submission state of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase<F: FormField> {
    Editing(FormErrors<F>),
    Validating,
    Submitting,
    Succeeded,
    Failed(FormErrors<F>),
}

impl<F: FormField> Default for FormPhase<F> {
    fn default() -> Self {
        FormPhase::Editing(FormErrors::new())
    }
}

impl<F: FormField> FormPhase<F> {
    pub fn errors(&self) -> Option<&FormErrors<F>> {
        match self {
            FormPhase::Editing(errors) | FormPhase::Failed(errors) => Some(errors),
            _ => None,
        }
    }

    /// A field was edited: drop its error and return to editing.
    fn edited(&mut self, field: F) {
        match std::mem::take(self) {
            FormPhase::Editing(mut errors) | FormPhase::Failed(mut errors) => {
                errors.clear_field(field);
                *self = FormPhase::Editing(errors);
            }
            in_flight @ (FormPhase::Validating | FormPhase::Submitting) => *self = in_flight,
            FormPhase::Succeeded => {}
        }
    }

    /// Validate and move to `Submitting`, or to `Failed` with local errors.
    fn begin(&mut self, validate: impl FnOnce() -> FormErrors<F>) -> Result<(), AppError> {
        if matches!(self, FormPhase::Validating | FormPhase::Submitting) {
            return Err(AppError::State("Submission already in progress".to_string()));
        }

        *self = FormPhase::Validating;
        let errors = validate();
        if errors.is_empty() {
            *self = FormPhase::Submitting;
            return Ok(());
        }

        let message = errors.first_message().unwrap_or_default().to_string();
        *self = FormPhase::Failed(errors);
        Err(AppError::Validation(message))
    }
}

/// Map a server error onto form fields.
///
/// A general `error` key wins; then the first message of the first of
/// `fields` the backend flagged; then the normalized message; then
/// `fallback`.
fn server_errors<F: FormField>(err: &ApiError, fields: &[F], fallback: &str) -> FormErrors<F> {
    if let Some(general) = err.general_error() {
        return FormErrors::general_only(general);
    }

    for field in fields {
        if let Some(message) = err.field_error(field.wire_name()) {
            let mut errors = FormErrors::new();
            errors.set_field(*field, message);
            return errors;
        }
    }

    match err {
        ApiError::FieldErrors { .. } => FormErrors::general_only(fallback),
        other if !other.to_string().is_empty() => FormErrors::general_only(other.to_string()),
        _ => FormErrors::general_only(fallback),
    }
}

/// Sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    phase: FormPhase<LoginField>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from a remembered email, with remember-me on.
    pub fn with_remembered_email(email: Option<String>) -> Self {
        match email {
            Some(email) => Self {
                email,
                remember_me: true,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.phase.edited(LoginField::Email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.phase.edited(LoginField::Password);
    }

    pub fn set_remember_me(&mut self, remember: bool) {
        self.remember_me = remember;
    }

    pub fn validate(&self) -> FormErrors<LoginField> {
        let mut errors = FormErrors::new();
        errors.check(LoginField::Email, validate_email(&self.email));
        errors.check(
            LoginField::Password,
            validate_password(&self.password, LOGIN_MIN_PASSWORD),
        );
        errors
    }

    /// Validate and, when clean, move to `Submitting` and build the request.
    pub fn begin_submit(&mut self) -> Result<LoginRequest, AppError> {
        let errors = self.validate();
        self.phase.begin(|| errors)?;
        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    pub fn succeed(&mut self) {
        self.phase = FormPhase::Succeeded;
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.phase = FormPhase::Failed(server_errors(
            err,
            &[LoginField::Email, LoginField::Password],
            "Invalid email or password",
        ));
    }

    pub fn phase(&self) -> &FormPhase<LoginField> {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Validating | FormPhase::Submitting)
    }

    pub fn error(&self, field: LoginField) -> Option<&str> {
        self.phase.errors().and_then(|errors| errors.field(field))
    }

    pub fn general_error(&self) -> Option<&str> {
        self.phase.errors().and_then(FormErrors::general)
    }
}

/// Sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
    strength: u8,
    phase: FormPhase<SignupField>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
        self.phase.edited(SignupField::FirstName);
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
        self.phase.edited(SignupField::LastName);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.phase.edited(SignupField::Email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.strength = password_strength(&self.password);
        self.phase.edited(SignupField::Password);
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
        self.phase.edited(SignupField::ConfirmPassword);
    }

    pub fn set_agree_terms(&mut self, agree: bool) {
        self.agree_terms = agree;
        self.phase.edited(SignupField::AgreeTerms);
    }

    /// Advisory score, 0 to 5. Never blocks submission.
    pub fn password_strength(&self) -> u8 {
        self.strength
    }

    /// `None` while the password is empty.
    pub fn strength_label(&self) -> Option<PasswordStrength> {
        if self.password.is_empty() {
            None
        } else {
            Some(PasswordStrength::from_score(self.strength))
        }
    }

    pub fn validate(&self) -> FormErrors<SignupField> {
        let mut errors = FormErrors::new();
        errors.check(
            SignupField::FirstName,
            validate_required(&self.first_name, "First name is required"),
        );
        errors.check(
            SignupField::LastName,
            validate_required(&self.last_name, "Last name is required"),
        );
        errors.check(SignupField::Email, validate_email(&self.email));
        errors.check(
            SignupField::Password,
            validate_password(&self.password, SIGNUP_MIN_PASSWORD),
        );
        errors.check(
            SignupField::ConfirmPassword,
            validate_confirm_password(&self.password, &self.confirm_password),
        );
        if !self.agree_terms {
            errors.set_field(
                SignupField::AgreeTerms,
                "You must agree to the terms and conditions",
            );
        }
        errors
    }

    pub fn begin_submit(&mut self) -> Result<SignupRequest, AppError> {
        let errors = self.validate();
        self.phase.begin(|| errors)?;
        Ok(SignupRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
        })
    }

    pub fn succeed(&mut self) {
        self.phase = FormPhase::Succeeded;
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.phase = FormPhase::Failed(server_errors(
            err,
            &[
                SignupField::Email,
                SignupField::Password,
                SignupField::ConfirmPassword,
            ],
            "An error occurred. Please try again.",
        ));
    }

    pub fn phase(&self) -> &FormPhase<SignupField> {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Validating | FormPhase::Submitting)
    }

    pub fn error(&self, field: SignupField) -> Option<&str> {
        self.phase.errors().and_then(|errors| errors.field(field))
    }

    pub fn general_error(&self) -> Option<&str> {
        self.phase.errors().and_then(FormErrors::general)
    }
}
