use super::*;

#[test]
fn patch_field_maps_blank_input_to_unset() {
    assert_eq!(patch_field(""), None);
    assert_eq!(patch_field("   "), None);
}

#[test]
fn patch_field_trims_kept_values() {
    assert_eq!(patch_field(" Alice "), Some("Alice".to_owned()));
}
