//! Integration tests for token construction paths and the identity cache

use std::collections::{HashMap, HashSet};
use std::thread;

use typetoken::{factory, Capture, GenericToken, RawClass, TypeDesc};

/// Classes whose raw tokens must come from the shared cache
const CACHED_CLASSES: [&str; 10] = [
    "java.lang.Object",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Character",
    "java.lang.Double",
    "java.lang.Float",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Short",
    "java.lang.String",
];

/// Quiet log setup shared by tests that poke the cache
fn init_tracing() {
    let _ = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn list_of(arg: TypeDesc) -> TypeDesc {
    factory::parameterized_type(RawClass::list(), vec![arg]).unwrap()
}

#[test]
fn test_every_cached_class_shares_one_instance() {
    init_tracing();
    for name in CACHED_CLASSES {
        let first = GenericToken::get(name);
        let second = GenericToken::get(name);
        assert!(
            GenericToken::ptr_eq(&first, &second),
            "{} should resolve to the shared instance",
            name
        );
    }
}

#[test]
fn test_cached_identity_survives_parsing() {
    init_tracing();
    for name in CACHED_CLASSES {
        let parsed = GenericToken::value_of(name).unwrap();
        let direct = GenericToken::get(name);
        assert!(
            GenericToken::ptr_eq(&parsed, &direct),
            "parsing {} should hit the cache",
            name
        );
    }
}

#[test]
fn test_uncached_classes_are_value_equal_only() {
    let first = GenericToken::get("java.util.ArrayList");
    let second = GenericToken::get("java.util.ArrayList");
    assert_eq!(first, second);
    assert!(!GenericToken::ptr_eq(&first, &second));
}

#[test]
fn test_three_construction_paths_converge() {
    let captured = GenericToken::from_capture(Capture::direct(list_of(TypeDesc::Raw(
        RawClass::string(),
    ))))
    .unwrap();
    let built =
        GenericToken::get_with_args(RawClass::list(), vec![TypeDesc::Raw(RawClass::string())])
            .unwrap();
    let parsed = GenericToken::value_of("java.util.List<java.lang.String>").unwrap();

    assert_eq!(captured, built);
    assert_eq!(built, parsed);
    assert_eq!(captured.to_string(), "java.util.List<java.lang.String>");

    let mut distinct = HashSet::new();
    distinct.insert(captured);
    distinct.insert(built);
    distinct.insert(parsed);
    assert_eq!(distinct.len(), 1);
}

#[test]
fn test_tokens_key_a_map_across_paths() {
    let mut handlers: HashMap<GenericToken, &str> = HashMap::new();
    let built =
        GenericToken::get_with_args(RawClass::map(), vec![
            TypeDesc::Raw(RawClass::string()),
            TypeDesc::Raw(RawClass::integer()),
        ])
        .unwrap();
    handlers.insert(built, "string-to-int handler");

    let parsed =
        GenericToken::value_of("java.util.Map<java.lang.String,java.lang.Integer>").unwrap();
    assert_eq!(handlers.get(&parsed), Some(&"string-to-int handler"));
}

#[test]
fn test_array_token_renders_with_suffix() {
    let desc = factory::generic_array_type(list_of(TypeDesc::Raw(RawClass::string())));
    let token = GenericToken::from_desc(desc).unwrap();
    assert_eq!(token.to_string(), "java.util.List<java.lang.String>[]");
    assert_eq!(token.to_unqualified_string(), "List<String>[]");
}

#[test]
fn test_nested_wildcard_token_is_accepted() {
    let token = GenericToken::get_with_args(
        RawClass::list(),
        vec![factory::unbounded_wildcard_type()],
    )
    .unwrap();
    assert_eq!(token.to_string(), "java.util.List<?>");
}

#[test]
fn test_deep_capture_chain_is_rejected_with_pinned_message() {
    let capture = Capture::new(TypeDesc::Raw(RawClass::string()), 3);
    let err = GenericToken::from_capture(capture).unwrap_err();
    assert_eq!(err.to_string(), "Generic must only be subclassed once");
}

#[test]
fn test_top_level_wildcard_is_rejected_with_pinned_message() {
    let err = GenericToken::from_desc(factory::unbounded_wildcard_type()).unwrap_err();
    assert_eq!(err.to_string(), "Wildcard types are not supported: ?");
}

#[test]
fn test_type_variable_is_rejected_anywhere_with_pinned_message() {
    let top = GenericToken::from_desc(factory::type_variable("acme.Box", "T")).unwrap_err();
    assert_eq!(top.to_string(), "Type variables are not supported: T");

    let nested = GenericToken::from_desc(list_of(factory::type_variable("acme.Box", "E")))
        .unwrap_err();
    assert_eq!(nested.to_string(), "Type variables are not supported: E");
}

#[test]
fn test_empty_argument_iterator_collapses_to_raw() {
    let token = GenericToken::get_with_args(RawClass::string(), Vec::new()).unwrap();
    let raw = GenericToken::get(RawClass::string());
    assert!(GenericToken::ptr_eq(&token, &raw));
}

#[test]
fn test_cache_identity_holds_across_threads() {
    init_tracing();
    let baseline = GenericToken::get("java.lang.String");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let via_get = GenericToken::get("java.lang.String");
                let via_parse = GenericToken::value_of("java.lang.String").unwrap();
                assert!(GenericToken::ptr_eq(&via_get, &via_parse));
                via_get
            })
        })
        .collect();

    for handle in handles {
        let token = handle.join().unwrap();
        assert!(GenericToken::ptr_eq(&baseline, &token));
    }
}
