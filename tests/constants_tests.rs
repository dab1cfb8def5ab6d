// Host-side tests for the front-end's selector table.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn surface_selector_covers_every_glass_role() {
    for class in [".glass-card", ".glass-navbar", ".glass-tabbar"] {
        assert!(SURFACE_SELECTOR.contains(class), "{class}");
    }
}

#[test]
fn ripple_selector_matches_role_table() {
    for (role, _) in glass_core::RIPPLE_ROLES {
        assert!(
            RIPPLE_SELECTOR.contains(&format!(".{role}")),
            "{role} missing from selector"
        );
    }
    assert_eq!(RIPPLE_SELECTOR.split(',').count(), glass_core::RIPPLE_ROLES.len());
}

#[test]
fn metadata_attributes_are_data_attributes() {
    for attr in [ORIGIN_ATTR, DEPTH_ATTR, ID_ATTR] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
    assert_eq!(VISIBILITY_SELECTOR, format!("[{ORIGIN_ATTR}]"));
}

#[test]
fn links_are_in_page_only() {
    assert_eq!(LINK_SELECTOR, "a[href^=\"#\"]");
}

#[test]
fn parallax_items_are_selected_by_class() {
    assert_eq!(PARALLAX_SELECTOR, ".parallax-element");
    assert!(!SURFACE_SELECTOR.contains(PARALLAX_SELECTOR));
}
