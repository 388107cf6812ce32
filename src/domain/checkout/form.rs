//! Checkout form: contact, shipping and card details with input
//! normalisation and field-level validation.

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::fmt;

use crate::domain::foundation::is_valid_email;

/// Country preselected on a fresh form.
pub const DEFAULT_COUNTRY: &str = "US";

const MIN_CARD_DIGITS: usize = 13;

// MM/YY
static EXPIRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}$").unwrap());

/// Input fields of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    Email,
    FirstName,
    LastName,
    Address,
    City,
    State,
    ZipCode,
    Country,
    CardNumber,
    ExpiryDate,
    Cvv,
    NameOnCard,
}

impl CheckoutField {
    /// Fields that must be non-empty, in the order errors are reported.
    pub const REQUIRED: [CheckoutField; 10] = [
        CheckoutField::FirstName,
        CheckoutField::LastName,
        CheckoutField::Address,
        CheckoutField::City,
        CheckoutField::State,
        CheckoutField::ZipCode,
        CheckoutField::CardNumber,
        CheckoutField::ExpiryDate,
        CheckoutField::Cvv,
        CheckoutField::NameOnCard,
    ];

    /// Wire name of the field, as used in form payloads.
    pub fn key(&self) -> &'static str {
        match self {
            CheckoutField::Email => "email",
            CheckoutField::FirstName => "firstName",
            CheckoutField::LastName => "lastName",
            CheckoutField::Address => "address",
            CheckoutField::City => "city",
            CheckoutField::State => "state",
            CheckoutField::ZipCode => "zipCode",
            CheckoutField::Country => "country",
            CheckoutField::CardNumber => "cardNumber",
            CheckoutField::ExpiryDate => "expiryDate",
            CheckoutField::Cvv => "cvv",
            CheckoutField::NameOnCard => "nameOnCard",
        }
    }

    /// Human-readable label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::Email => "Email",
            CheckoutField::FirstName => "First name",
            CheckoutField::LastName => "Last name",
            CheckoutField::Address => "Address",
            CheckoutField::City => "City",
            CheckoutField::State => "State",
            CheckoutField::ZipCode => "ZIP code",
            CheckoutField::Country => "Country",
            CheckoutField::CardNumber => "Card number",
            CheckoutField::ExpiryDate => "Expiry date",
            CheckoutField::Cvv => "CVV",
            CheckoutField::NameOnCard => "Name on card",
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: CheckoutField,
    pub message: String,
}

/// Ordered collection of field errors; at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`, replacing an earlier message for the
    /// same field in place.
    pub fn insert(&mut self, field: CheckoutField, message: impl Into<String>) {
        let message = message.into();
        match self.0.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.message = message,
            None => self.0.push(FieldError { field, message }),
        }
    }

    pub fn get(&self, field: CheckoutField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Checkout form contents.
///
/// Card number and CVV are held as secrets and never appear in `Debug`
/// output.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    email: String,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
    card_number: SecretString,
    expiry_date: String,
    cvv: SecretString,
    name_on_card: String,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            card_number: SecretString::new(String::new()),
            expiry_date: String::new(),
            cvv: SecretString::new(String::new()),
            name_on_card: String::new(),
        }
    }
}

impl CheckoutForm {
    /// Creates an empty form with the default country selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates one field from raw user input.
    ///
    /// Card number, expiry date and CVV are normalised as they are typed;
    /// every other field is stored as given.
    pub fn set(&mut self, field: CheckoutField, value: &str) {
        match field {
            CheckoutField::Email => self.email = value.to_string(),
            CheckoutField::FirstName => self.first_name = value.to_string(),
            CheckoutField::LastName => self.last_name = value.to_string(),
            CheckoutField::Address => self.address = value.to_string(),
            CheckoutField::City => self.city = value.to_string(),
            CheckoutField::State => self.state = value.to_string(),
            CheckoutField::ZipCode => self.zip_code = value.to_string(),
            CheckoutField::Country => self.country = value.to_string(),
            CheckoutField::CardNumber => {
                self.card_number = SecretString::new(format_card_number(value))
            }
            CheckoutField::ExpiryDate => self.expiry_date = format_expiry_date(value),
            CheckoutField::Cvv => self.cvv = SecretString::new(digits_only(value)),
            CheckoutField::NameOnCard => self.name_on_card = value.to_string(),
        }
    }

    /// Builder form of [`CheckoutForm::set`].
    pub fn with(mut self, field: CheckoutField, value: &str) -> Self {
        self.set(field, value);
        self
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn card_number(&self) -> &SecretString {
        &self.card_number
    }

    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    pub fn cvv(&self) -> &SecretString {
        &self.cvv
    }

    pub fn name_on_card(&self) -> &str {
        &self.name_on_card
    }

    /// Full customer name, for receipts and payment descriptions.
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Last four card digits, if at least four were entered.
    pub fn card_last4(&self) -> Option<String> {
        let digits = digits_only(self.card_number.expose_secret());
        (digits.len() >= 4).then(|| digits[digits.len() - 4..].to_string())
    }

    fn raw(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::Email => &self.email,
            CheckoutField::FirstName => &self.first_name,
            CheckoutField::LastName => &self.last_name,
            CheckoutField::Address => &self.address,
            CheckoutField::City => &self.city,
            CheckoutField::State => &self.state,
            CheckoutField::ZipCode => &self.zip_code,
            CheckoutField::Country => &self.country,
            CheckoutField::CardNumber => self.card_number.expose_secret(),
            CheckoutField::ExpiryDate => &self.expiry_date,
            CheckoutField::Cvv => self.cvv.expose_secret(),
            CheckoutField::NameOnCard => &self.name_on_card,
        }
    }

    /// Checks every field and returns all failures at once.
    ///
    /// Errors are ordered: email first, then required fields in form
    /// order. A format error replaces the required-field error for the
    /// same field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.email.is_empty() {
            errors.insert(CheckoutField::Email, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert(CheckoutField::Email, "Email is invalid");
        }

        for field in CheckoutField::REQUIRED {
            if self.raw(field).is_empty() {
                errors.insert(field, format!("{} is required", field.label()));
            }
        }

        let card = self.card_number.expose_secret();
        if !card.is_empty() && card.chars().filter(|c| !c.is_whitespace()).count() < MIN_CARD_DIGITS {
            errors.insert(CheckoutField::CardNumber, "Card number is invalid");
        }

        if !self.expiry_date.is_empty() && !is_expiry_shape(&self.expiry_date) {
            errors.insert(
                CheckoutField::ExpiryDate,
                "Expiry date must be in MM/YY format",
            );
        }

        let cvv_len = self.cvv.expose_secret().len();
        if cvv_len > 0 && !(3..=4).contains(&cvv_len) {
            errors.insert(CheckoutField::Cvv, "CVV must be 3 or 4 digits");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Strips whitespace and regroups the card number in blocks of four.
pub fn format_card_number(value: &str) -> String {
    let compact: Vec<char> = value.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps digits and inserts a slash after the month once a third digit
/// is typed: `"1225"` becomes `"12/25"`.
pub fn format_expiry_date(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

fn is_expiry_shape(value: &str) -> bool {
    EXPIRY.is_match(value)
}
