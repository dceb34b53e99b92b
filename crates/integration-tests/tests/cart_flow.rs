//! Cart behavior across requests.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use ubermelon_integration_tests::{MELONS, TestApp};

#[tokio::test]
async fn empty_cart_shows_notice_and_zero_total() {
    let mut visitor = TestApp::new().visitor();
    let resp = visitor.get("/cart").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(
        resp.body
            .contains("There are no items in your cart. Go find some melons.")
    );
    assert!(resp.body.contains("id=\"cart-total\">$0.00<"));
    assert!(!resp.body.contains("/checkout\""));
}

#[tokio::test]
async fn add_to_cart_redirects_and_confirms() {
    let mut visitor = TestApp::new().visitor();
    let resp = visitor.get("/add_to_cart/cren").await;

    assert!(resp.status.is_redirection());
    assert_eq!(resp.location(), Some("/cart"));
    assert!(visitor.has_session());

    let cart = visitor.get("/cart").await;
    assert!(cart.body.contains("You added one Crenshaw to your cart!"));
    assert!(cart.body.contains("Crenshaw"));
    assert!(cart.body.contains("id=\"cart-total\">$2.00<"));
    assert!(!cart.body.contains("There are no items in your cart"));
}

#[tokio::test]
async fn cart_totals_accumulate() {
    let mut visitor = TestApp::new().visitor();
    visitor.get("/add_to_cart/cren").await;
    visitor.get("/add_to_cart/yell").await;
    visitor.get("/add_to_cart/cren").await;

    let cart = visitor.get("/cart").await;

    // 2 x $2.00 + 1 x $7.50
    assert!(cart.body.contains("$4.00"));
    assert!(cart.body.contains("id=\"cart-total\">$11.50<"));

    // Lines are listed in the order melons were first added
    let crenshaw = cart.body.find("Crenshaw</a>").unwrap();
    let yellow = cart.body.find("Yellow Watermelon</a>").unwrap();
    assert!(crenshaw < yellow);
}

#[tokio::test]
async fn unknown_melon_is_not_added() {
    let mut visitor = TestApp::new().visitor();
    let resp = visitor.get("/add_to_cart/ghost").await;

    assert_eq!(resp.location(), Some("/melons"));

    let cart = visitor.get("/cart").await;
    assert!(cart.body.contains("id=\"cart-total\">$0.00<"));
}

#[tokio::test]
async fn visitors_have_separate_carts() {
    let app = TestApp::new();
    let mut alice = app.visitor();
    let mut bob = app.visitor();

    alice.get("/add_to_cart/yell").await;

    let bobs_cart = bob.get("/cart").await;
    assert!(bobs_cart.body.contains("id=\"cart-total\">$0.00<"));

    let alices_cart = alice.get("/cart").await;
    assert!(alices_cart.body.contains("id=\"cart-total\">$7.50<"));
}

#[tokio::test]
async fn concurrent_adds_in_one_session_are_not_lost() {
    let mut visitor = TestApp::new().visitor();
    visitor.get("/add_to_cart/cren").await;

    let mut tab_a = visitor.fork();
    let mut tab_b = visitor.fork();
    let (a, b) = tokio::join!(
        tab_a.get("/add_to_cart/cren"),
        tab_b.get("/add_to_cart/cren")
    );
    assert!(a.status.is_redirection());
    assert!(b.status.is_redirection());

    let cart = visitor.get("/cart").await;
    assert!(cart.body.contains("id=\"cart-total\">$6.00<"));
}

#[tokio::test]
async fn checkout_is_a_placeholder() {
    let mut visitor = TestApp::new().visitor();
    visitor.get("/add_to_cart/musk").await;

    let resp = visitor.get("/checkout").await;
    assert_eq!(resp.location(), Some("/melons"));

    let page = visitor.get("/melons").await;
    assert!(
        page.body
            .contains("Sorry! Checkout will be implemented in a future version.")
    );

    // The cart survives the checkout attempt
    let cart = visitor.get("/cart").await;
    assert!(cart.body.contains("id=\"cart-total\">$4.25<"));
}

#[tokio::test]
async fn cart_with_melon_no_longer_sold_renders_empty() {
    let app = TestApp::new();
    let mut visitor = app.visitor();
    visitor.get("/add_to_cart/musk").await;

    let without_musk: String = MELONS
        .lines()
        .filter(|line| !line.starts_with("musk|"))
        .map(|line| format!("{line}\n"))
        .collect();
    let restocked = app.with_new_catalog(&without_musk);
    visitor.switch_to(&restocked);

    let cart = visitor.get("/cart").await;
    assert_eq!(cart.status, StatusCode::OK);
    assert!(cart.body.contains("flash-error"));
    assert!(
        cart.body
            .contains("Some melons in your cart are no longer available.")
    );
    assert!(cart.body.contains("id=\"cart-total\">$0.00<"));
}

#[tokio::test]
async fn oversized_cart_total_renders_empty() {
    let app = TestApp::with_catalog(
        "huge|Watermelon|Giant|79228162514264337593543950335|http://example.com/g.jpg|green|0\n",
        tower_sessions::MemoryStore::default(),
    );
    let mut visitor = app.visitor();
    visitor.get("/add_to_cart/huge").await;
    visitor.get("/add_to_cart/huge").await;

    let cart = visitor.get("/cart").await;
    assert_eq!(cart.status, StatusCode::OK);
    assert!(cart.body.contains("Your cart total is too large to show."));
    assert!(cart.body.contains("id=\"cart-total\">$0.00<"));
}
