use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use referencing::Draft;
use serde_json::{json, Value};

fn schema_for(draft: Draft) -> Value {
    json!({
        "$id": "http://example.com/schema.json",
        "draft": format!("{:?}", draft),
        "definitions": {
            "address": {
                "type": "object",
                "properties": {
                    "street": {"type": "string"},
                    "city": {"type": "string"}
                }
            }
        },
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "address": {"$ref": "#/definitions/address"},
            "contacts": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "kind": {"type": "string"},
                        "detail": {"$ref": "#/definitions/address"}
                    }
                }
            }
        }
    })
}

fn bench_subresources(c: &mut Criterion) {
    let drafts = [
        Draft::Draft4,
        Draft::Draft6,
        Draft::Draft7,
        Draft::Draft201909,
        Draft::Draft202012,
    ];

    let mut group = c.benchmark_group("subresources");

    for draft in &drafts {
        let schema = schema_for(*draft);
        let name = format!("{:?}", draft);

        group.bench_with_input(
            BenchmarkId::new("subresources_of", &name),
            &schema,
            |b, schema| {
                b.iter(|| {
                    let _sub: Vec<_> = draft.subresources_of(black_box(schema)).collect();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_subresources);
criterion_main!(benches);
