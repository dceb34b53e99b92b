//! Shopping cart quantities and cart-total computation.
//!
//! A [`Cart`] only records how many of each melon a visitor wants. Prices are
//! resolved against the catalog when the cart is viewed, producing transient
//! [`CartLine`] values; catalog records are never annotated or modified.

use serde::{Deserialize, Serialize};

use crate::types::{Melon, MelonId, Price};

/// Errors from pricing a cart.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The cart references a melon the catalog does not know.
    #[error("cart contains unknown melon {0}")]
    UnknownMelon(MelonId),

    /// A line or grand total is too large to represent.
    #[error("cart total is too large")]
    TotalOverflow,
}

/// Read access to melons by ID.
///
/// Implemented by the storefront's catalog store, and by plain slices of
/// melons for tests and tools.
pub trait CatalogLookup {
    /// Find the melon with the given ID.
    fn lookup(&self, id: &MelonId) -> Option<&Melon>;
}

impl CatalogLookup for [Melon] {
    fn lookup(&self, id: &MelonId) -> Option<&Melon> {
        self.iter().find(|melon| &melon.id == id)
    }
}

impl CatalogLookup for Vec<Melon> {
    fn lookup(&self, id: &MelonId) -> Option<&Melon> {
        self.as_slice().lookup(id)
    }
}

/// One cart entry: a melon and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub melon_id: MelonId,
    pub quantity: u32,
}

/// A visitor's cart: melon IDs mapped to quantities, in the order they were
/// first added.
///
/// Quantities are always at least 1 and IDs are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one of `melon_id` to the cart.
    ///
    /// Inserts the melon with quantity 1 if absent, otherwise increments its
    /// quantity. Returns the new quantity.
    pub fn add_item(&mut self, melon_id: &MelonId) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| &e.melon_id == melon_id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return entry.quantity;
        }

        self.entries.push(CartEntry {
            melon_id: melon_id.clone(),
            quantity: 1,
        });
        1
    }

    /// Quantity of `melon_id` in the cart (0 if absent).
    #[must_use]
    pub fn quantity(&self, melon_id: &MelonId) -> u32 {
        self.entries
            .iter()
            .find(|e| &e.melon_id == melon_id)
            .map_or(0, |e| e.quantity)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    /// Whether the cart holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct melons in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A priced cart line, built per view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub melon_id: MelonId,
    pub common_name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
}

/// A fully priced cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub grand_total: Price,
}

impl CartView {
    /// An empty cart view with a zero total.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the view has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Price every entry of `cart` against `catalog`.
///
/// Lines come out in the cart's insertion order. An empty cart yields an
/// empty view with a grand total of zero.
///
/// # Errors
///
/// Returns `CartError::UnknownMelon` for the first entry whose melon is not
/// in the catalog and `CartError::TotalOverflow` if a total does not fit in
/// a `Decimal`.
pub fn compute_cart_view<C>(cart: &Cart, catalog: &C) -> Result<CartView, CartError>
where
    C: CatalogLookup + ?Sized,
{
    let lines = cart
        .entries()
        .map(|entry| {
            let melon = catalog
                .lookup(&entry.melon_id)
                .ok_or_else(|| CartError::UnknownMelon(entry.melon_id.clone()))?;
            Ok(CartLine {
                melon_id: melon.id.clone(),
                common_name: melon.common_name.clone(),
                unit_price: melon.price,
                quantity: entry.quantity,
                line_total: melon
                    .price
                    .checked_times(entry.quantity)
                    .ok_or(CartError::TotalOverflow)?,
            })
        })
        .collect::<Result<Vec<_>, CartError>>()?;

    let grand_total = lines
        .iter()
        .try_fold(Price::zero(), |total, line| total.checked_add(line.line_total))
        .ok_or(CartError::TotalOverflow)?;

    Ok(CartView { lines, grand_total })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn melon(id: &str, name: &str, cents: i64) -> Melon {
        Melon {
            id: MelonId::new(id),
            melon_type: name.to_string(),
            common_name: name.to_string(),
            price: Price::from_cents(cents),
            image_url: String::new(),
            color: "green".to_string(),
            seedless: false,
        }
    }

    fn catalog() -> Vec<Melon> {
        vec![melon("A", "Alpha", 300), melon("B", "Bravo", 500)]
    }

    #[test]
    fn test_add_item_twice() {
        let mut cart = Cart::new();
        let a = MelonId::new("A");
        let b = MelonId::new("B");

        cart.add_item(&b);
        assert_eq!(cart.add_item(&a), 1);
        assert_eq!(cart.add_item(&a), 2);

        assert_eq!(cart.quantity(&a), 2);
        assert_eq!(cart.quantity(&b), 1);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_empty_cart_view() {
        let view = compute_cart_view(&Cart::new(), &catalog()).unwrap();
        assert!(view.is_empty());
        assert!(view.grand_total.is_zero());
        assert_eq!(view, CartView::empty());
    }

    #[test]
    fn test_cart_view_totals_in_insertion_order() {
        let mut cart = Cart::new();
        let a = MelonId::new("A");
        cart.add_item(&a);
        cart.add_item(&MelonId::new("B"));
        cart.add_item(&a);

        let view = compute_cart_view(&cart, &catalog()).unwrap();

        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].melon_id, a);
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.lines[0].line_total, Price::from_cents(600));
        assert_eq!(view.lines[1].common_name, "Bravo");
        assert_eq!(view.lines[1].line_total, Price::from_cents(500));
        assert_eq!(view.grand_total, Price::from_cents(1100));
        assert_eq!(view.grand_total.to_string(), "$11.00");
    }

    #[test]
    fn test_cart_view_does_not_touch_catalog() {
        let catalog = catalog();
        let before = catalog.clone();
        let mut cart = Cart::new();
        cart.add_item(&MelonId::new("A"));

        compute_cart_view(&cart, &catalog).unwrap();
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_cart_view_unknown_melon() {
        let mut cart = Cart::new();
        cart.add_item(&MelonId::new("A"));
        cart.add_item(&MelonId::new("ghost"));

        let err = compute_cart_view(&cart, &catalog()).unwrap_err();
        assert_eq!(err, CartError::UnknownMelon(MelonId::new("ghost")));
    }

    #[test]
    fn test_cart_view_overflow_is_an_error() {
        let mut huge = melon("H", "Huge", 0);
        huge.price = Price::parse("79228162514264337593543950335").unwrap();
        let catalog = vec![huge, melon("A", "Alpha", 300)];

        let mut doubled = Cart::new();
        doubled.add_item(&MelonId::new("H"));
        doubled.add_item(&MelonId::new("H"));
        assert_eq!(
            compute_cart_view(&doubled, &catalog).unwrap_err(),
            CartError::TotalOverflow
        );

        let mut mixed = Cart::new();
        mixed.add_item(&MelonId::new("H"));
        mixed.add_item(&MelonId::new("A"));
        assert_eq!(
            compute_cart_view(&mixed, &catalog).unwrap_err(),
            CartError::TotalOverflow
        );
    }

    #[test]
    fn test_single_item_total_is_unit_price() {
        let mut cart = Cart::new();
        cart.add_item(&MelonId::new("B"));

        let view = compute_cart_view(&cart, catalog().as_slice()).unwrap();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 1);
        assert_eq!(view.grand_total, Price::from_cents(500));
    }

    #[test]
    fn test_cart_serde_shape() {
        let mut cart = Cart::new();
        cart.add_item(&MelonId::new("A"));
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json, serde_json::json!([{"melon_id": "A", "quantity": 1}]));

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}
