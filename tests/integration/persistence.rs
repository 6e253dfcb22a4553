//! Integration tests for descriptor serialization and token persistence

use std::fs;

use tempfile::TempDir;
use typetoken::{factory, Capture, GenericToken, RawClass, TypeDesc};

fn map_string_to_int_list() -> TypeDesc {
    factory::parameterized_type(
        RawClass::map(),
        vec![
            TypeDesc::Raw(RawClass::string()),
            factory::parameterized_type(
                RawClass::list(),
                vec![TypeDesc::Raw(RawClass::integer())],
            )
            .unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn test_token_json_round_trip() {
    let token = GenericToken::from_desc(map_string_to_int_list()).unwrap();
    let json = serde_json::to_string(&token).unwrap();
    let back: GenericToken = serde_json::from_str(&json).unwrap();
    assert_eq!(token, back);
    assert_eq!(back.to_string(), token.to_string());
}

#[test]
fn test_token_serializes_as_its_description() {
    let desc = map_string_to_int_list();
    let token = GenericToken::from_desc(desc.clone()).unwrap();
    assert_eq!(
        serde_json::to_string(&token).unwrap(),
        serde_json::to_string(&desc).unwrap()
    );
}

#[test]
fn test_json_shape_is_externally_tagged() {
    let token =
        GenericToken::get_with_args(RawClass::list(), vec![TypeDesc::Raw(RawClass::string())])
            .unwrap();
    let json: serde_json::Value = serde_json::to_value(&token).unwrap();

    assert_eq!(json["Parameterized"]["raw"], "java.util.List");
    assert_eq!(json["Parameterized"]["args"][0]["Raw"], "java.lang.String");
}

#[test]
fn test_token_survives_a_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("token.json");

    let token = GenericToken::from_desc(map_string_to_int_list()).unwrap();
    fs::write(&path, serde_json::to_vec_pretty(&token).unwrap()).unwrap();

    let loaded: GenericToken = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(token, loaded);
}

#[test]
fn test_captured_token_survives_a_round_trip() {
    let captured = GenericToken::from_capture(Capture::direct(map_string_to_int_list())).unwrap();
    let json = serde_json::to_string(&captured).unwrap();
    let back: GenericToken = serde_json::from_str(&json).unwrap();
    assert_eq!(captured, back);
}

#[test]
fn test_cached_identity_is_restored_after_deserialize() {
    let json = serde_json::to_string(&GenericToken::get("java.lang.String")).unwrap();
    let loaded: GenericToken = serde_json::from_str(&json).unwrap();
    let cached = GenericToken::get("java.lang.String");
    assert!(GenericToken::ptr_eq(&loaded, &cached));
}

#[test]
fn test_deserialize_rejects_a_type_variable() {
    let json = serde_json::to_string(&factory::type_variable("acme.Box", "T")).unwrap();
    let err = serde_json::from_str::<GenericToken>(&json).unwrap_err();
    assert!(err
        .to_string()
        .contains("Type variables are not supported: T"));
}

#[test]
fn test_deserialize_rejects_a_top_level_wildcard() {
    let json = serde_json::to_string(&factory::unbounded_wildcard_type()).unwrap();
    let err = serde_json::from_str::<GenericToken>(&json).unwrap_err();
    assert!(err
        .to_string()
        .contains("Wildcard types are not supported: ?"));
}

#[test]
fn test_descriptions_round_trip_every_shape() {
    let shapes = vec![
        TypeDesc::Raw(RawClass::object()),
        map_string_to_int_list(),
        factory::generic_array_type(TypeDesc::Raw(RawClass::string())),
        factory::unbounded_wildcard_type(),
        factory::type_variable("acme.Box", "T"),
    ];

    for desc in shapes {
        let json = serde_json::to_string(&desc).unwrap();
        let back: TypeDesc = serde_json::from_str(&json).unwrap();
        assert_eq!(desc, back, "shape failed to round trip: {}", desc);
    }
}
