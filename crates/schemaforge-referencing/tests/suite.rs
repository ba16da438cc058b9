use referencing::{Draft, Registry};
use serde_json::json;

#[test]
fn test_simple_pointer_lookup() {
    let schema = json!({
        "$id": "http://example.com/schema.json",
        "definitions": {
            "positive_integer": {"type": "integer", "minimum": 0}
        },
        "properties": {
            "age": {"$ref": "#/definitions/positive_integer"}
        }
    });
    let resource = Draft::Draft4.create_resource(schema);
    let registry =
        Registry::try_new("http://example.com/schema.json", resource).expect("Invalid registry");
    let resolver = registry
        .try_resolver("http://example.com/schema.json")
        .expect("Invalid base URI");

    let resolved = resolver
        .lookup("#/definitions/positive_integer")
        .expect("Reference should resolve");
    assert_eq!(resolved.contents(), &json!({"type": "integer", "minimum": 0}));
}

#[test]
fn test_anchor_lookup() {
    let schema = json!({
        "$id": "http://example.com/schema.json",
        "definitions": {
            "foo": {"$id": "#foo", "type": "string"}
        }
    });
    let resource = Draft::Draft201909.create_resource(schema);
    let registry =
        Registry::try_new("http://example.com/schema.json", resource).expect("Invalid registry");
    let resolver = registry
        .try_resolver("http://example.com/schema.json")
        .expect("Invalid base URI");

    let resolved = resolver.lookup("#foo").expect("Anchor should resolve");
    assert_eq!(resolved.contents(), &json!({"$id": "#foo", "type": "string"}));
}

#[test]
fn test_nested_ref_chain() {
    let schema = json!({
        "$id": "http://example.com/root.json",
        "definitions": {
            "a": {"$ref": "#/definitions/b"},
            "b": {"type": "boolean"}
        }
    });
    let resource = Draft::Draft202012.create_resource(schema);
    let registry =
        Registry::try_new("http://example.com/root.json", resource).expect("Invalid registry");
    let resolver = registry
        .try_resolver("http://example.com/root.json")
        .expect("Invalid base URI");

    let first = resolver
        .lookup("#/definitions/a")
        .expect("First reference should resolve");
    let second = first
        .resolver()
        .lookup("#/definitions/b")
        .expect("Chained reference should resolve");
    assert_eq!(second.contents(), &json!({"type": "boolean"}));
}

#[test]
fn test_unresolvable_pointer_errors() {
    let schema = json!({"$id": "http://example.com/schema.json", "type": "object"});
    let resource = Draft::Draft7.create_resource(schema);
    let registry =
        Registry::try_new("http://example.com/schema.json", resource).expect("Invalid registry");
    let resolver = registry
        .try_resolver("http://example.com/schema.json")
        .expect("Invalid base URI");

    assert!(resolver.lookup("#/definitions/missing").is_err());
}
