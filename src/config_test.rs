use super::*;

#[test]
fn schema_config_default_trims() {
    assert!(SchemaConfig::default().trim_whitespace);
}

#[test]
fn form_config_defaults() {
    let config = FormConfig::default();
    assert_eq!(config.submit_label, "Add Language");
    assert!(config.revalidate_on_change);
    assert_eq!(config.schema, SchemaConfig::default());
}
