use std::sync::Arc;
use std::thread;

use customs::{keyed_record, number, properties, string, Decoder};
use serde_json::json;

// Composed decoders are immutable and side-effect-free, so one decoder
// value can serve concurrent callers with no coordination.

#[test]
fn test_shared_decoder_across_threads() {
    let decoder = Arc::new(keyed_record().pipe(
        properties().key("name", string()).key("age", number()),
    ));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let decoder = Arc::clone(&decoder);
            thread::spawn(move || {
                let valid = json!({ "name": format!("user-{i}"), "age": i });
                let invalid = json!({ "name": i });

                assert!(decoder.decode(&valid).is_success());
                assert!(decoder.decode(&invalid).is_failure());
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("decoding thread panicked");
    }
}

#[test]
fn test_results_are_independent_per_invocation() {
    let decoder = Arc::new(keyed_record().pipe(properties().key("n", number())));

    let failing = Arc::clone(&decoder);
    let failer = thread::spawn(move || {
        for _ in 0..100 {
            assert!(failing.decode(&json!({})).is_failure());
        }
    });

    for _ in 0..100 {
        assert!(decoder.decode(&json!({ "n": 1 })).is_success());
    }

    failer.join().expect("decoding thread panicked");
}
