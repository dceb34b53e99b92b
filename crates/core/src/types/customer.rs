//! Customer records.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::types::record::{RecordError, split_fields};

/// An Ubermelon customer, as listed in the customer file.
///
/// Record format: `first_name|last_name|email|password`.
///
/// Passwords are stored and compared in plaintext; the file format offers
/// nothing better. The value is kept in a [`SecretString`] so it never shows
/// up in logs or `Debug` output.
#[derive(Clone)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    password: SecretString,
}

impl Customer {
    /// Number of fields in a customer record.
    pub const FIELD_COUNT: usize = 4;

    /// Create a new customer.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Parse one line of the customer file.
    ///
    /// ```
    /// # use ubermelon_core::Customer;
    /// let c = Customer::parse_record("Ada|Lovelace|ada@example.com|engine").unwrap();
    /// assert_eq!(c.email, "ada@example.com");
    /// assert!(c.password_matches("engine"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `RecordError::FieldCount` unless the line has exactly four
    /// `|`-separated fields.
    pub fn parse_record(line: &str) -> Result<Self, RecordError> {
        let [first_name, last_name, email, password] =
            split_fields::<{ Customer::FIELD_COUNT }>(line)?;
        Ok(Self::new(first_name, last_name, email, password))
    }

    /// "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether `candidate` equals the stored password.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.expose_secret() == candidate
    }
}

impl fmt::Debug for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customer")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
