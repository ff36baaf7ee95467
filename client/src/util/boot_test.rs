#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_from_document_is_default_outside_browser() {
    assert_eq!(read_from_document(), BootConfig::default());
}

#[test]
fn attribute_names_match_shell_markup() {
    assert_eq!(LANDING_ATTR, "data-landing");
    assert_eq!(HEALTHCHECK_ATTR, "data-healthcheck");
}
