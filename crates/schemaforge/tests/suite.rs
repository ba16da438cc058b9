#[cfg(not(target_arch = "wasm32"))]
mod tests {
    use schemaforge::Draft;
    use serde_json::{json, Value};

    fn pretty_json(v: &Value) -> String {
        serde_json::to_string_pretty(v).expect("Failed to format JSON")
    }

    struct Case {
        draft: Draft,
        schema: Value,
        data: Value,
        valid: bool,
    }

    fn cases() -> Vec<Case> {
        vec![
            Case {
                draft: Draft::Draft4,
                schema: json!({"type": "integer", "minimum": 0}),
                data: json!(5),
                valid: true,
            },
            Case {
                draft: Draft::Draft4,
                schema: json!({"type": "integer", "minimum": 0}),
                data: json!(-1),
                valid: false,
            },
            Case {
                draft: Draft::Draft6,
                schema: json!({"const": "foo"}),
                data: json!("foo"),
                valid: true,
            },
            Case {
                draft: Draft::Draft7,
                schema: json!({"if": {"type": "string"}, "then": {"minLength": 3}}),
                data: json!("ab"),
                valid: false,
            },
            Case {
                draft: Draft::Draft201909,
                schema: json!({
                    "type": "object",
                    "properties": {"a": {"type": "string"}},
                    "unevaluatedProperties": false
                }),
                data: json!({"a": "x", "b": 1}),
                valid: false,
            },
            Case {
                draft: Draft::Draft202012,
                schema: json!({"prefixItems": [{"type": "string"}], "items": {"type": "integer"}}),
                data: json!(["x", 1, 2]),
                valid: true,
            },
        ]
    }

    #[test]
    fn test_suite() {
        for case in cases() {
            let validator = schemaforge::options()
                .with_draft(case.draft)
                .build(&case.schema)
                .expect("Failed to build a schema");
            let result = validator.validate(&case.data);

            if case.valid {
                if let Err(mut errors) = result {
                    let first_error = errors.next();
                    assert!(
                        first_error.is_none(),
                        "Test case should not have validation errors:\nSchema: {}\nInstance: {}\nError: {:?}",
                        pretty_json(&case.schema),
                        pretty_json(&case.data),
                        first_error.map(|err| err.to_string()),
                    );
                }
                assert!(
                    validator.is_valid(&case.data),
                    "Test case should be valid:\nSchema: {}\nInstance: {}",
                    pretty_json(&case.schema),
                    pretty_json(&case.data),
                );
                let output = validator.apply(&case.data).basic();
                assert!(
                    output.is_valid(),
                    "Test case should be valid via basic output:\nSchema: {}\nInstance: {}",
                    pretty_json(&case.schema),
                    pretty_json(&case.data),
                );
            } else {
                assert!(
                    result.is_err(),
                    "Test case should have validation errors:\nSchema: {}\nInstance: {}",
                    pretty_json(&case.schema),
                    pretty_json(&case.data),
                );
                assert!(
                    !validator.is_valid(&case.data),
                    "Test case should be invalid:\nSchema: {}\nInstance: {}",
                    pretty_json(&case.schema),
                    pretty_json(&case.data),
                );
                let output = validator.apply(&case.data).basic();
                assert!(
                    !output.is_valid(),
                    "Test case should be invalid via basic output:\nSchema: {}\nInstance: {}",
                    pretty_json(&case.schema),
                    pretty_json(&case.data),
                );
            }
        }
    }

    #[test]
    fn test_instance_path() {
        let schema = json!({
            "type": "object",
            "properties": {
                "items": {
                    "type": "array",
                    "items": {"type": "object", "properties": {"id": {"type": "integer"}}}
                }
            }
        });
        let validator = schemaforge::validator_for(&schema).expect("Valid schema");
        let instance = json!({"items": [{"id": 1}, {"id": "not-an-integer"}]});
        let error = validator
            .validate(&instance)
            .expect_err("Should fail")
            .next()
            .expect("Validation error");
        assert_eq!(error.instance_path.as_str(), "/items/1/id");
    }
}
