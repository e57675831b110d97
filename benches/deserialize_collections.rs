/// Benchmarks for Data Product Exchange response deserialization.
///
/// Listing responses dominate traffic when a pager walks a large catalog, so the collections are
/// measured at several page sizes, up to the 200 items the service allows per page.
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use data_product_exchange_sdk::dph::types::response::{
    DataProductCollection, DataProductReleaseCollection, DataProductVersion,
};

fn version_summary(index: usize) -> String {
    format!(
        r#"{{
            "id": "18bdbde1-918e-4ecf-aa23-{index:012}",
            "version": "1.{index}.0",
            "state": "available",
            "data_product": {{"id": "b38df608-d34b-4d58-8136-ed25e6c6684e"}},
            "name": "Sales by region {index}",
            "description": "Quarterly revenue by region",
            "tags": ["sales", "finance"],
            "types": ["data"],
            "asset": {{
                "id": "2b0bf220-079c-11ee-be56-{index:012}",
                "container": {{"id": "d29c42eb-7100-4b7a-8257-c196dbcca1cd", "type": "catalog"}}
            }}
        }}"#
    )
}

fn data_product_summary(index: usize) -> String {
    format!(
        r#"{{
            "id": "b38df608-d34b-4d58-8136-{index:012}",
            "release": {{"id": "18bdbde1-918e-4ecf-aa23-6727bf319e14"}},
            "container": {{"id": "d29c42eb-7100-4b7a-8257-c196dbcca1cd", "type": "catalog"}}
        }}"#
    )
}

fn collection(key: &str, items: &[String]) -> String {
    format!(
        r#"{{
            "limit": {limit},
            "first": {{"href": "https://api.dataplatform.cloud.ibm.com/data_product_exchange/v1/data_products?limit={limit}"}},
            "next": {{
                "href": "https://api.dataplatform.cloud.ibm.com/data_product_exchange/v1/data_products?limit={limit}&start=g1AAAAA-eJzLYWBgYMpgSmHgKy5JLCrJTq2MT8lPzkzJBYqrpBmYJCUmG1gmJ",
                "start": "g1AAAAA-eJzLYWBgYMpgSmHgKy5JLCrJTq2MT8lPzkzJBYqrpBmYJCUmG1gmJ"
            }},
            "{key}": [{items}]
        }}"#,
        limit = items.len(),
        items = items.join(","),
    )
}

fn bench_collections(c: &mut Criterion) {
    let mut group = c.benchmark_group("dph/collections");

    for size in [1_usize, 50, 200] {
        let products = collection(
            "data_products",
            &(0..size).map(data_product_summary).collect::<Vec<_>>(),
        );
        group.throughput(Throughput::Bytes(products.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("DataProductCollection", size),
            &products,
            |b, json| {
                b.iter(|| {
                    let _: DataProductCollection = serde_json::from_str(std::hint::black_box(json))
                        .expect("Deserialization should succeed");
                });
            },
        );

        let releases = collection(
            "releases",
            &(0..size).map(version_summary).collect::<Vec<_>>(),
        );
        group.throughput(Throughput::Bytes(releases.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("DataProductReleaseCollection", size),
            &releases,
            |b, json| {
                b.iter(|| {
                    let _: DataProductReleaseCollection =
                        serde_json::from_str(std::hint::black_box(json))
                            .expect("Deserialization should succeed");
                });
            },
        );
    }

    group.finish();
}

fn bench_version(c: &mut Criterion) {
    let mut group = c.benchmark_group("dph/version");

    let version = r#"{
        "id": "2b0bf220-079c-11ee-be56-0242ac120002",
        "version": "1.0.0",
        "state": "draft",
        "data_product": {"id": "b38df608-d34b-4d58-8136-ed25e6c6684e"},
        "name": "Sales by region",
        "description": "Quarterly revenue by region",
        "tags": ["sales"],
        "use_cases": [{"id": "uc-1", "name": "Forecasting"}],
        "types": ["data"],
        "contract_terms": [{
            "id": "ct-1",
            "documents": [{
                "id": "doc-1",
                "name": "Terms of use",
                "type": "terms_and_conditions",
                "url": "https://example.com/terms"
            }]
        }],
        "is_restricted": false,
        "asset": {
            "id": "2b0bf220-079c-11ee-be56-0242ac120002",
            "container": {"id": "d29c42eb-7100-4b7a-8257-c196dbcca1cd", "type": "catalog"}
        },
        "created_by": "IBMid-1234",
        "created_at": "2024-06-01T09:00:00Z"
    }"#;

    group.throughput(Throughput::Bytes(version.len() as u64));
    group.bench_function("DataProductVersion", |b| {
        b.iter(|| {
            let _: DataProductVersion = serde_json::from_str(std::hint::black_box(version))
                .expect("Deserialization should succeed");
        });
    });

    group.finish();
}

criterion_group!(dph_benches, bench_collections, bench_version);
criterion_main!(dph_benches);
