use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

fn bench_keyword_compile(c: &mut Criterion, name: &str, schema: &Value) {
    c.bench_function(&format!("keyword/{}/compile", name), |b| {
        b.iter(|| schemaforge::validator_for(schema).expect("Valid schema"))
    });
}

fn bench_keyword_is_valid(c: &mut Criterion, name: &str, schema: &Value, instance: &Value) {
    let validator = schemaforge::validator_for(schema).expect("Valid schema");
    c.bench_with_input(
        BenchmarkId::new(format!("keyword/{}", name), "is_valid"),
        instance,
        |b, instance| {
            b.iter(|| {
                let _ = validator.is_valid(instance);
            })
        },
    );
}

fn bench_keyword_validate(c: &mut Criterion, name: &str, schema: &Value, instance: &Value) {
    let validator = schemaforge::validator_for(schema).expect("Valid schema");
    c.bench_with_input(
        BenchmarkId::new(format!("keyword/{}", name), "validate"),
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
            "properties",
            json!({"properties": {"a": {"type": "string"}, "b": {"type": "integer"}}}),
            &[
                ("valid", json!({"a": "x", "b": 1})),
                ("invalid", json!({"a": 1, "b": "x"})),
            ],
        ),
        (
            "pattern",
            json!({"pattern": "^[a-z]+[0-9]*$"}),
            &[("valid", json!("abc123")), ("invalid", json!("123abc"))],
        ),
        (
            "one_of",
            json!({"oneOf": [{"type": "string"}, {"type": "integer"}]}),
            &[("valid", json!(1)), ("invalid", json!(1.5))],
        ),
        (
            "unique_items",
            json!({"uniqueItems": true}),
            &[
                ("valid", json!([1, 2, 3, 4, 5])),
                ("invalid", json!([1, 2, 2, 4, 5])),
            ],
        ),
    ];
    for (name, schema, instances) in cases {
        bench_keyword_compile(c, name, schema);
        for (instance_name, instance) in *instances {
            let full_name = format!("{}/{}", name, instance_name);
            bench_keyword_is_valid(c, &full_name, schema, instance);
            bench_keyword_validate(c, &full_name, schema, instance);
        }
    }
}

criterion_group!(keywords, run_benchmarks);
criterion_main!(keywords);
