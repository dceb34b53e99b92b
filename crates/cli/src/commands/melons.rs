//! Catalog commands.

use std::fmt::Write as _;
use std::path::Path;

use ubermelon_storefront::stores::Catalog;

use super::CommandError;

/// List every melon, one per line, in catalog order.
pub fn list(file: &Path) -> Result<String, CommandError> {
    let catalog = Catalog::load(file)?;

    let mut out = String::new();
    for melon in catalog.get_all() {
        let _ = writeln!(
            out,
            "{:<8} {:<28} {:>8}{}",
            melon.id.as_str(),
            melon.common_name,
            melon.price_str(),
            if melon.seedless { "  seedless" } else { "" }
        );
    }
    Ok(out)
}
