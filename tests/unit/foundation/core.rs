use super::*;

#[test]
fn item_id_serializes_as_plain_string() {
    let id = ItemId::new("post-7");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"post-7\"");
    let back: ItemId = serde_json::from_str("\"post-7\"").unwrap();
    assert_eq!(back, id);
}

#[test]
fn numeric_ids_convert_to_decimal_strings() {
    assert_eq!(ItemId::from(42u64).as_str(), "42");
    assert_eq!(ItemId::from(42u64).to_string(), "42");
}
