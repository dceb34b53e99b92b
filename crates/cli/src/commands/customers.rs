//! Customer list commands.

use std::fmt::Write as _;
use std::path::Path;

use ubermelon_storefront::stores::CustomerStore;

use super::CommandError;

/// Parse the customer file and report the customer count.
pub fn check(file: &Path) -> Result<String, CommandError> {
    let store = CustomerStore::load(file)?;
    Ok(format!("{}: {} customers\n", file.display(), store.len()))
}

/// Show one customer's name and email.
pub fn show(file: &Path, email: &str) -> Result<String, CommandError> {
    let store = CustomerStore::load(file)?;
    let customer = store.get_by_email(email)?;

    let mut out = String::new();
    let _ = writeln!(out, "Name:  {}", customer.full_name());
    let _ = writeln!(out, "Email: {}", customer.email);
    Ok(out)
}
