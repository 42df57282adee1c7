//! Synchronous validation of the sign up and sign in forms. Validation is pure so views re-run it
//! on every keystroke and only a validated input type can reach the submission controller.

use std::{collections::BTreeMap, fmt::Display};

use lazy_regex::regex_is_match;

/// Minimum number of characters in a user's name
pub const MIN_NAME_LENGTH: usize = 2;
/// Minimum number of characters in a password
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Input fields of the authentication forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Name of the field as used for the form's input ids
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Validation failures keyed by field. Each field keeps only the first rule it broke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    /// Record `message` against `field` unless the field already failed an earlier rule
    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    /// Message attached to `field`, if it failed validation
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failed fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    /// [Ok] with `value` when nothing failed, otherwise the collected errors
    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Check `email` against the usual address syntax: a local part that neither starts with a dot
/// nor contains two dots in a row, then one or more domain labels and a TLD of two or more letters
pub fn is_valid_email(email: &str) -> bool {
    if email.starts_with('.') || email.contains("..") {
        return false;
    }
    regex_is_match!(
        r"^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$"i,
        email
    )
}

/// Length of `value` in UTF-16 code units, the unit browser form inputs measure text in
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Raw, unvalidated contents of the sign up form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// Replace the contents of `field`
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Current contents of `field`
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Validate the form. A password mismatch is reported against [Field::ConfirmPassword], never
    /// against [Field::Password].
    /// # Errors
    /// This function will return an error listing every field that broke a rule
    pub fn validate(&self) -> Result<SignUpInput, FieldErrors> {
        let mut errors = FieldErrors::default();
        if text_length(&self.name) < MIN_NAME_LENGTH {
            errors.insert(Field::Name, NAME_TOO_SHORT);
        }
        if !is_valid_email(&self.email) {
            errors.insert(Field::Email, INVALID_EMAIL);
        }
        if text_length(&self.password) < MIN_PASSWORD_LENGTH {
            errors.insert(Field::Password, PASSWORD_TOO_SHORT);
        }
        if text_length(&self.confirm_password) < MIN_PASSWORD_LENGTH {
            errors.insert(Field::ConfirmPassword, PASSWORD_TOO_SHORT);
        }
        if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, PASSWORDS_DO_NOT_MATCH);
        }
        errors.into_result(|| SignUpInput {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Sign up details that passed validation. Only [SignUpForm::validate] creates one, so holding a
/// value proves the passwords matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpInput {
    name: String,
    email: String,
    password: String,
}

impl SignUpInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Raw, unvalidated contents of the sign in form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Validate the form
    /// # Errors
    /// This function will return an error if the email is malformed or the password is empty
    pub fn validate(&self) -> Result<SignInInput, FieldErrors> {
        let mut errors = FieldErrors::default();
        if !is_valid_email(&self.email) {
            errors.insert(Field::Email, INVALID_EMAIL);
        }
        if self.password.is_empty() {
            errors.insert(Field::Password, PASSWORD_REQUIRED);
        }
        errors.into_result(|| SignInInput {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Sign in details that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInInput {
    email: String,
    password: String,
}

impl SignInInput {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod test {
    use rstest::{fixture, rstest};

    use super::{
        is_valid_email, Field, SignInForm, SignUpForm, INVALID_EMAIL, NAME_TOO_SHORT,
        PASSWORDS_DO_NOT_MATCH, PASSWORD_REQUIRED, PASSWORD_TOO_SHORT,
    };

    #[fixture]
    fn valid_form() -> SignUpForm {
        SignUpForm {
            name: "Al".to_owned(),
            email: "al@example.com".to_owned(),
            password: "secret1".to_owned(),
            confirm_password: "secret1".to_owned(),
        }
    }

    #[rstest]
    #[case("al@example.com", true)]
    #[case("first.last+tag@mail.example.co", true)]
    #[case("O'Brien@Example.ORG", true)]
    #[case("user_1@sub-domain.example.io", true)]
    #[case("", false)]
    #[case("al", false)]
    #[case("al@", false)]
    #[case("@example.com", false)]
    #[case("al@example", false)]
    #[case("al@example.c", false)]
    #[case(".al@example.com", false)]
    #[case("al..b@example.com", false)]
    #[case("al.@example.com", false)]
    #[case("al@-example.com", false)]
    #[case("al @example.com", false)]
    #[case("al@example..com", false)]
    fn is_valid_email_should_follow_address_syntax(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected, "email `{email}`");
    }

    #[rstest]
    fn validate_should_accept_valid_form(valid_form: SignUpForm) {
        let input = valid_form.validate();

        let Ok(input) = input else {
            panic!("expected valid input, got {input:?}");
        };
        assert_eq!(input.name(), "Al");
        assert_eq!(input.email(), "al@example.com");
        assert_eq!(input.password(), "secret1");
    }

    #[rstest]
    fn validate_should_attach_mismatch_to_confirm_password(mut valid_form: SignUpForm) {
        valid_form.confirm_password = "secret2".to_owned();

        let errors = valid_form.validate().err().unwrap_or_default();

        assert_eq!(errors.len(), 1, "unexpected errors {errors}");
        assert_eq!(errors.get(Field::ConfirmPassword), Some(PASSWORDS_DO_NOT_MATCH));
        assert_eq!(errors.get(Field::Password), None);
    }

    #[rstest]
    #[case(Field::Name, "A", NAME_TOO_SHORT)]
    #[case(Field::Email, "al@example", INVALID_EMAIL)]
    fn validate_should_report_single_field(
        mut valid_form: SignUpForm,
        #[case] field: Field,
        #[case] value: &str,
        #[case] expected: &str,
    ) {
        valid_form.set(field, value.to_owned());

        let errors = valid_form.validate().err().unwrap_or_default();

        assert_eq!(errors.len(), 1, "unexpected errors {errors}");
        assert_eq!(errors.get(field), Some(expected));
    }

    #[rstest]
    fn validate_should_count_utf16_units_not_bytes(mut valid_form: SignUpForm) {
        valid_form.name = "É".to_owned();
        assert_eq!(valid_form.validate().err().unwrap_or_default().get(Field::Name), Some(NAME_TOO_SHORT));

        valid_form.name = "Éa".to_owned();
        assert!(valid_form.validate().is_ok());

        valid_form.name = "😀".to_owned();
        assert!(valid_form.validate().is_ok());

        valid_form.password = "😀😀😀".to_owned();
        valid_form.confirm_password = "😀😀😀".to_owned();
        assert!(valid_form.validate().is_ok());
    }

    #[rstest]
    fn validate_should_keep_first_error_per_field(mut valid_form: SignUpForm) {
        valid_form.password = "abc".to_owned();
        valid_form.confirm_password = "xyz".to_owned();

        let errors = valid_form.validate().err().unwrap_or_default();

        assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));
        assert_eq!(errors.get(Field::ConfirmPassword), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn validate_should_report_every_field_of_empty_form() {
        let errors = SignUpForm::default().validate().err().unwrap_or_default();

        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Email, Field::Password, Field::ConfirmPassword]
        );
    }

    #[rstest]
    fn set_and_value_should_address_same_field(mut valid_form: SignUpForm) {
        valid_form.set(Field::ConfirmPassword, "other".to_owned());

        assert_eq!(valid_form.value(Field::ConfirmPassword), "other");
        assert_eq!(valid_form.value(Field::Password), "secret1");
    }

    #[rstest]
    #[case("al@example.com", "x", None, None)]
    #[case("al@example", "x", Some(INVALID_EMAIL), None)]
    #[case("al@example.com", "", None, Some(PASSWORD_REQUIRED))]
    fn sign_in_validate_should_check_email_and_password(
        #[case] email: &str,
        #[case] password: &str,
        #[case] email_error: Option<&str>,
        #[case] password_error: Option<&str>,
    ) {
        let form = SignInForm {
            email: email.to_owned(),
            password: password.to_owned(),
        };

        let errors = form.validate().err().unwrap_or_default();

        assert_eq!(errors.get(Field::Email), email_error);
        assert_eq!(errors.get(Field::Password), password_error);
    }
}
