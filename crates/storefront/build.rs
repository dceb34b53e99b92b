//! Build script for the storefront crate.
//!
//! Fingerprints the stylesheet so pages can reference it under a
//! content-addressed name and browsers never hold on to a stale copy.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Number of hex digits of the digest kept in the file name.
const HASH_LEN: usize = 8;

fn main() {
    fingerprint_stylesheet();
}

/// Hash `static/css/main.css` and copy it to `static/css/derived/main.<hash>.css`.
///
/// Sets `CSS_HASH` for `env!("CSS_HASH")`; it is empty when the stylesheet
/// is missing, in which case templates fall back to the plain name.
fn fingerprint_stylesheet() {
    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");
    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = match fs::read(&css_path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash = digest.get(..HASH_LEN).unwrap_or(&digest);

    let derived_dir = Path::new(&manifest_dir).join("static/css/derived");
    let derived_path = derived_dir.join(format!("main.{short_hash}.css"));
    let copied = fs::create_dir_all(&derived_dir).and_then(|()| fs::copy(&css_path, &derived_path));

    match copied {
        Ok(_) => println!("cargo:rustc-env=CSS_HASH={short_hash}"),
        Err(e) => {
            println!("cargo:warning=Could not write fingerprinted CSS: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
        }
    }
}
