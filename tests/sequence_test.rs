use customs::{keyed_record, number, properties, sequence, sequence_of, DecodeError, Decoder};
use serde_json::{json, Value};
use stillwater::Validation;

fn unwrap_failure<T: std::fmt::Debug>(v: Validation<T, DecodeError>) -> DecodeError {
    v.into_result().unwrap_err()
}

// ====== success Tests ======

#[test]
fn test_elements_decoded_in_original_order() {
    let decoder = sequence().pipe(sequence_of(number()));

    let result = decoder.decode(&json!([3, 1, 2]));
    assert_eq!(result.into_result().unwrap(), vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_empty_sequence() {
    let decoder = sequence().pipe(sequence_of(number()));
    assert_eq!(
        decoder.decode(&json!([])).into_result().unwrap(),
        Vec::<f64>::new()
    );
}

#[test]
fn test_shape_check_fails_before_element_checks() {
    let decoder = sequence().pipe(sequence_of(number()));

    let error = unwrap_failure(decoder.decode(&json!("not a sequence")));
    assert_eq!(
        error,
        DecodeError::unexpected("sequence", json!("not a sequence"))
    );
}

// ====== accumulation Tests ======

#[test]
fn test_single_bad_element_localized_to_its_index() {
    let decoder = sequence().pipe(sequence_of(number()));

    let error = unwrap_failure(decoder.decode(&json!([1, "a", 3])));
    assert_eq!(
        error,
        DecodeError::key_items(vec![DecodeError::at_key(
            1usize,
            DecodeError::unexpected("number", json!("a")),
        )])
    );
}

#[test]
fn test_every_bad_element_reported_in_ascending_order() {
    let decoder = sequence().pipe(sequence_of(number()));

    let error = unwrap_failure(decoder.decode(&json!(["a", 2, null, 4, true])));
    assert_eq!(
        error,
        DecodeError::key_items(vec![
            DecodeError::at_key(0usize, DecodeError::unexpected("number", json!("a"))),
            DecodeError::at_key(2usize, DecodeError::unexpected("number", json!(null))),
            DecodeError::at_key(4usize, DecodeError::unexpected("number", json!(true))),
        ])
    );
}

// ====== nesting Tests ======

#[test]
fn test_sequence_of_records() {
    let address = keyed_record().pipe(
        properties()
            .key("latitude", number())
            .key("longitude", number()),
    );
    let decoder = sequence().pipe(sequence_of(address));

    let result = decoder.decode(&json!([
        { "latitude": 59.9, "longitude": 10.7 },
        { "latitude": 48.8, "longitude": 2.3 }
    ]));
    assert!(result.is_success());

    // The failing record's key error nests under the failing index
    let error = unwrap_failure(decoder.decode(&json!([
        { "latitude": 59.9, "longitude": 10.7 },
        { "latitude": "north" }
    ])));
    assert_eq!(
        error,
        DecodeError::key_items(vec![DecodeError::at_key(
            1usize,
            DecodeError::key_items(vec![
                DecodeError::at_key(
                    "latitude",
                    DecodeError::unexpected("number", json!("north")),
                ),
                DecodeError::at_key("longitude", DecodeError::Missing),
            ]),
        )])
    );
}

#[test]
fn test_sequence_of_sequences() {
    let decoder = sequence().pipe(sequence_of(
        sequence().pipe(sequence_of(number())),
    ));

    let result = decoder.decode(&json!([[1, 2], [3]]));
    assert_eq!(
        result.into_result().unwrap(),
        vec![vec![1.0, 2.0], vec![3.0]]
    );

    let error = unwrap_failure(decoder.decode(&json!([[1], ["x"]])));
    assert_eq!(
        error,
        DecodeError::key_items(vec![DecodeError::at_key(
            1usize,
            DecodeError::key_items(vec![DecodeError::at_key(
                0usize,
                DecodeError::unexpected("number", json!("x")),
            )]),
        )])
    );
}

// ====== round-trip Tests ======

#[test]
fn test_decoding_is_identity_on_valid_input() {
    let raw = json!([1.5, 2.5]);
    let decoder = sequence().pipe(sequence_of(number()));

    let decoded = decoder.decode(&raw).into_result().unwrap();
    assert_eq!(Value::from(decoded), raw);
}
