//! Customer store.

use std::collections::HashMap;
use std::path::Path;

use tracing::instrument;
use ubermelon_core::Customer;

use super::{IN_MEMORY, StoreError, parse_lines, read_file};

/// Customers keyed by email.
#[derive(Debug, Clone, Default)]
pub struct CustomerStore {
    by_email: HashMap<String, Customer>,
}

impl CustomerStore {
    /// Load customers from a pipe-delimited file
    /// (`first_name|last_name|email|password`, one per line).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read and
    /// `StoreError::Parse` for the first line without exactly four fields.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = read_file(path)?;
        let store = Self::parse_from(&text, &path.display().to_string())?;
        tracing::info!(customers = store.len(), "Customer list loaded");
        Ok(store)
    }

    /// Parse a customer list held in memory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` for the first malformed line.
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        Self::parse_from(text, IN_MEMORY)
    }

    fn parse_from(text: &str, origin: &str) -> Result<Self, StoreError> {
        let records = parse_lines(text, origin, Customer::parse_record)?;
        Ok(records.into_iter().collect())
    }

    /// Look up a customer by email.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no customer has this email.
    pub fn get_by_email(&self, email: &str) -> Result<&Customer, StoreError> {
        self.by_email.get(email).ok_or_else(|| StoreError::NotFound {
            kind: "customer",
            key: email.to_string(),
        })
    }

    /// Number of customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}

/// Later records with the same email replace earlier ones.
impl FromIterator<Customer> for CustomerStore {
    fn from_iter<I: IntoIterator<Item = Customer>>(iter: I) -> Self {
        Self {
            by_email: iter
                .into_iter()
                .map(|customer| (customer.email.clone(), customer))
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    const CUSTOMERS: &str = "\
Mel|Onhead|mel@ubermelon.com|watermelon
Cant|Aloupe|cant@ubermelon.com|Orange Flesh 42
";

    #[test]
    fn test_parse_keys_by_email() {
        let store = CustomerStore::parse(CUSTOMERS).unwrap();
        assert_eq!(store.len(), 2);

        let cant = store.get_by_email("cant@ubermelon.com").unwrap();
        assert_eq!(cant.first_name, "Cant");
        assert_eq!(cant.last_name, "Aloupe");
        assert!(cant.password_matches("Orange Flesh 42"));
    }

    #[test]
    fn test_get_by_email_missing() {
        let store = CustomerStore::parse(CUSTOMERS).unwrap();
        let err = store.get_by_email("nobody@ubermelon.com").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_lookup_is_exact() {
        let store = CustomerStore::parse(CUSTOMERS).unwrap();
        assert!(store.get_by_email("MEL@ubermelon.com").is_err());
    }

    #[test]
    fn test_parse_error_on_short_line() {
        let err = CustomerStore::parse("Mel|Onhead|mel@ubermelon.com\n").unwrap_err();
        assert!(matches!(err, StoreError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_error_on_extra_field() {
        let err = CustomerStore::parse("ok|ok|ok@x.com|pw\na|b|c|d|e\n").unwrap_err();
        assert!(matches!(err, StoreError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_email_keeps_last() {
        let store =
            CustomerStore::parse("A|One|dup@x.com|first\nB|Two|dup@x.com|second\n").unwrap();
        assert_eq!(store.len(), 1);
        let customer = store.get_by_email("dup@x.com").unwrap();
        assert_eq!(customer.first_name, "B");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CUSTOMERS.as_bytes()).unwrap();

        let store = CustomerStore::load(file.path()).unwrap();
        assert!(store.get_by_email("mel@ubermelon.com").is_ok());
    }
}
