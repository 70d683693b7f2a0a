use crate::metadata::DatasetMetadata;

#[test]
fn test_seed_name_is_deterministic() {
    let m1 = DatasetMetadata::from_seed_name("juno-run-42");
    let m2 = DatasetMetadata::from_seed_name("juno-run-42");

    assert_eq!(m1.id, m2.id);
    assert_eq!(m1.seed(), m2.seed());
}

#[test]
fn test_different_seed_names_differ() {
    let m1 = DatasetMetadata::from_seed_name("run-a");
    let m2 = DatasetMetadata::from_seed_name("run-b");

    assert_ne!(m1.seed(), m2.seed());
}

#[test]
fn test_catalog_name_format() {
    let meta = DatasetMetadata::new_random();
    let name = meta.catalog_name();

    assert_eq!(name.len(), 7);
    assert_eq!(name.as_bytes()[2], b'-');
    assert!(name[..2].chars().all(|c| c.is_ascii_uppercase()));
    assert!(name[3..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_display_name_prefers_proper_name() {
    let meta = DatasetMetadata::new_random();
    assert_eq!(meta.display_name(), meta.catalog_name());

    let named = meta.with_name("Galileo baseline");
    assert_eq!(named.display_name(), "Galileo baseline");
}
