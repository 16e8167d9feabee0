use schemadiff_core::errors::{ExError, ExErrorKind, SchemaDiffError};
use schemadiff_core::DefinitionTable;

#[test]
fn test_not_found_verifiable_by_kind() {
    let err = SchemaDiffError::DefinitionNotFound {
        name: "Order".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("Order"));
}

#[test]
fn test_already_exists_distinct_from_not_found() {
    let err = SchemaDiffError::DefinitionAlreadyExists {
        name: "Pet".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::AlreadyExists);
    assert_ne!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.entity_id(), Some("Pet"));
}

#[test]
fn test_invalid_reference_maps_to_invalid_input() {
    let err = DefinitionTable::from_json(r##"{"Pet": {"properties": {"owner": {"$ref": ""}}}}"##)
        .unwrap_err();

    // serde surfaces the conversion failure as a deserialization error
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert!(ex_err.message().contains("Invalid reference"));

    let direct: ExError = SchemaDiffError::InvalidReference {
        reference: "#/definitions/".to_string(),
    }
    .into();
    assert_eq!(direct.code(), "ERR_INVALID_INPUT");
}

#[test]
fn test_serialization_error_from_bad_json() {
    let err = DefinitionTable::from_json("{not json").unwrap_err();
    assert!(matches!(err, SchemaDiffError::Serialization { .. }));
    assert!(err.to_string().starts_with("Serialization error"));
}
