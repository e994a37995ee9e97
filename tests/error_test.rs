use customs::{
    keyed_record, number, properties, sequence, sequence_of, string, DecodeError, Decoder, Key,
};
use serde_json::json;
use stillwater::Validation;

fn unwrap_failure<T: std::fmt::Debug>(v: Validation<T, DecodeError>) -> DecodeError {
    v.into_result().unwrap_err()
}

// ====== structure Tests ======

#[test]
fn test_error_tree_is_a_coordinate_into_the_input() {
    let decoder = keyed_record().pipe(properties().key(
        "addresses",
        sequence().pipe(sequence_of(
            keyed_record().pipe(properties().key("city", string())),
        )),
    ));

    let error = unwrap_failure(decoder.decode(&json!({ "addresses": [{ "city": 1 }] })));

    // addresses -> [0] -> city, exactly the nesting of the input
    let DecodeError::KeyItemsFailed(top) = &error else {
        panic!("expected KeyItemsFailed at the top");
    };
    let DecodeError::AtKey { key, error } = top.first() else {
        panic!("expected AtKey under the accumulation");
    };
    assert_eq!(key, &Key::field("addresses"));

    let DecodeError::KeyItemsFailed(items) = error.as_ref() else {
        panic!("expected nested KeyItemsFailed");
    };
    let DecodeError::AtKey { key, .. } = items.first() else {
        panic!("expected AtKey for the failing index");
    };
    assert_eq!(key, &Key::index(0));
}

// ====== rendering Tests ======

#[test]
fn test_rendered_tree_indents_with_depth() {
    let user = keyed_record().pipe(
        properties()
            .key("name", string())
            .key("age", number()),
    );
    let decoder = keyed_record()
        .pipe(properties().key("user", user))
        .context("request.body");

    let error = unwrap_failure(decoder.decode(&json!({ "user": { "age": true } })));

    assert_eq!(
        error.to_string(),
        "[request.body]\n  user:\n    name: missing\n    age: expected number, got true: boolean"
    );
}

#[test]
fn test_rendered_leaf_names_expected_and_got() {
    let error = unwrap_failure(number().decode(&json!("a")));
    assert_eq!(error.to_string(), "expected number, got \"a\": string");
}

#[test]
fn test_rendered_indices_and_keys() {
    let decoder = sequence().pipe(sequence_of(number()));
    let error = unwrap_failure(decoder.decode(&json!([1, "a"])));

    assert_eq!(error.to_string(), "  [1]: expected number, got \"a\": string");
}

#[test]
fn test_error_is_a_std_error() {
    let error: Box<dyn std::error::Error> =
        Box::new(unwrap_failure(number().decode(&json!(null))));
    assert!(error.to_string().contains("expected number"));
}
