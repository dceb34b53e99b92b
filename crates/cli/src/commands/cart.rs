//! Cart pricing command.

use std::fmt::Write as _;
use std::path::Path;

use ubermelon_core::{Cart, MelonId, compute_cart_view};
use ubermelon_storefront::stores::Catalog;

use super::CommandError;

/// Price the cart produced by adding each of `ids` once, in order.
pub fn total(melons: &Path, ids: &[String]) -> Result<String, CommandError> {
    let catalog = Catalog::load(melons)?;

    let mut cart = Cart::new();
    for id in ids {
        cart.add_item(&MelonId::new(id.as_str()));
    }
    let view = compute_cart_view(&cart, &catalog)?;

    let mut out = String::new();
    for line in &view.lines {
        let _ = writeln!(
            out,
            "{:>3} x {:<28} {:>8} {:>9}",
            line.quantity,
            line.common_name,
            line.unit_price.to_string(),
            line.line_total.to_string()
        );
    }
    let _ = writeln!(out, "Total: {}", view.grand_total);
    Ok(out)
}
