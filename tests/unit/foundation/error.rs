use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DelicacyError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        DelicacyError::dimension_mismatch("x")
            .to_string()
            .contains("dimension mismatch:")
    );
    assert!(
        DelicacyError::not_found("x")
            .to_string()
            .contains("not found:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DelicacyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
