use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

fn bench_compile(c: &mut Criterion, name: &str, schema: &Value) {
    c.bench_function(&format!("{}/compile", name), |b| {
        b.iter(|| schemaforge::validator_for(schema).expect("Valid schema"))
    });
}

fn bench_is_valid(c: &mut Criterion, name: &str, schema: &Value, instance: &Value) {
    let validator = schemaforge::validator_for(schema).expect("Valid schema");
    c.bench_with_input(
        BenchmarkId::new(name, "is_valid"),
        instance,
        |b, instance| {
            b.iter(|| {
                let _ = validator.is_valid(instance);
            })
        },
    );
}

fn bench_validate(c: &mut Criterion, name: &str, schema: &Value, instance: &Value) {
    let validator = schemaforge::validator_for(schema).expect("Valid schema");
    c.bench_with_input(
        BenchmarkId::new(name, "validate"),
        instance,
        |b, instance| {
            b.iter(|| {
                let _ = validator.validate(instance);
            })
        },
    );
}

fn run_benchmarks(c: &mut Criterion) {
    let cases: &[(&str, Value, &[(&str, Value)])] = &[
        (
            "flat",
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "age": {"type": "integer", "minimum": 0},
                },
                "required": ["name", "age"]
            }),
            &[
                ("valid", json!({"name": "Alice", "age": 30})),
                ("invalid", json!({"name": "Alice", "age": -1})),
            ],
        ),
        (
            "nested",
            json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "integer"},
                        "tags": {"type": "array", "items": {"type": "string"}, "uniqueItems": true}
                    },
                    "required": ["id"]
                }
            }),
            &[
                (
                    "valid",
                    json!([{"id": 1, "tags": ["a", "b"]}, {"id": 2, "tags": []}]),
                ),
                ("invalid", json!([{"tags": ["a", "a"]}])),
            ],
        ),
    ];
    for (name, schema, instances) in cases {
        bench_compile(c, name, schema);
        for (instance_name, instance) in *instances {
            let full_name = format!("{}/{}", name, instance_name);
            bench_is_valid(c, &full_name, schema, instance);
            bench_validate(c, &full_name, schema, instance);
        }
    }
}

criterion_group!(jsonschema, run_benchmarks);
criterion_main!(jsonschema);
