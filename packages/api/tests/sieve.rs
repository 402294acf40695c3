//! Sieve builder tests

use datasieve::{
    Comparator, DynamicValue, Error, FilterDescriptor, Product, Sieve, UnknownComparator, load,
};

const PAYLOAD: &str = r#"{"value": [
    {"ProductID": 1, "ProductName": "Chai", "UnitPrice": 18.0},
    {"ProductID": 2, "ProductName": "Chang", "UnitPrice": 19.0},
    {"ProductID": 3, "ProductName": "Aniseed Syrup", "UnitPrice": 10.0},
    {"ProductID": 4, "ProductName": "Chai", "UnitPrice": 20.0}
]}"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn catalogue() -> Vec<Product> {
    vec![
        Product::new(1, "Chai", 18.0),
        Product::new(2, "Chang", 19.0),
        Product::new(3, "Aniseed Syrup", 10.0),
        Product::new(4, "Chai", 20.0),
    ]
}

#[test]
fn builder_applies_a_conjunction() {
    init_logging();
    let products = catalogue();
    let sieve = Sieve::new()
        .equals("ProductName", "Chai")
        .greater_than("UnitPrice", 18)
        .debug();

    assert_eq!(sieve.apply_cloned(&products), vec![Product::new(4, "Chai", 20.0)]);
    assert!(sieve.matches(&products[3]));
    assert!(!sieve.matches(&products[0]));
}

#[test]
fn empty_sieve_keeps_everything() {
    let products = catalogue();
    let sieve = Sieve::new();
    assert!(sieve.is_empty());
    assert_eq!(sieve.apply(&products).len(), products.len());
}

#[test]
fn sieve_is_reusable_across_record_sets() {
    let dataset = load(PAYLOAD).expect("payload loads");
    let products = catalogue();
    let sieve = Sieve::new().contains("ProductName", "CH").less_than("UnitPrice", 19.5);

    let dynamic: Vec<Option<&DynamicValue>> = sieve
        .apply_dataset(&dataset)
        .into_iter()
        .map(|record| record.get("ProductID"))
        .collect();
    assert_eq!(
        dynamic,
        vec![Some(&DynamicValue::Number(1.0)), Some(&DynamicValue::Number(2.0))]
    );

    let typed: Vec<i64> = sieve.apply(&products).into_iter().map(|p| p.id).collect();
    assert_eq!(typed, vec![1, 2]);
}

#[test]
fn triples_accept_names_and_symbols() {
    let sieve = Sieve::from_triples([
        ("ProductName", "contains", DynamicValue::from("chai")),
        ("UnitPrice", ">", DynamicValue::from(18)),
    ])
    .expect("known comparators");

    assert_eq!(
        sieve.descriptors(),
        &[
            FilterDescriptor::new("ProductName", Comparator::Contains, "chai"),
            FilterDescriptor::new("UnitPrice", Comparator::GreaterThan, 18.0),
        ]
    );
    assert_eq!(sieve.apply_cloned(&catalogue()), vec![Product::new(4, "Chai", 20.0)]);
}

#[test]
fn triples_reject_unknown_comparators() {
    let error = Sieve::from_triples([("UnitPrice", "between", 1)]).expect_err("unknown comparator");
    assert_eq!(
        error,
        Error::UnknownComparator(UnknownComparator("between".to_string()))
    );
    assert_eq!(error.to_string(), "unknown comparator 'between'");
}

#[test]
fn built_and_prepared_descriptors_agree() {
    let built = Sieve::new().equals("ProductName", "Chai").less_than("UnitPrice", 19);
    let prepared = Sieve::from(vec![
        FilterDescriptor::equals("ProductName", "Chai"),
        FilterDescriptor::less_than("UnitPrice", 19),
    ]);
    assert_eq!(built, prepared);
    assert_eq!(prepared.into_descriptors().len(), 2);
}

#[test]
fn load_reports_parse_and_shape_errors() {
    assert!(matches!(load("{\"value\": [1,"), Err(Error::Parse(_))));
    assert!(matches!(load("{}"), Err(Error::Dataset(_))));
    assert_eq!(load(r#"{"value": []}"#).map(|dataset| dataset.len()), Ok(0));
}
