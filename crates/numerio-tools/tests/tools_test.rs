// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests exercising the tools the way an agent framework
//! would: registry lookup by name, JSON input, JSON record output.

use numerio_tools::{default_registry, registry_with_limits};
use serde_json::json;

async fn invoke(registry: &numerio_tools::ToolRegistry, name: &str, input: serde_json::Value)
-> (serde_json::Value, bool) {
    let tool = registry.get(name).expect("tool should be registered");
    let output = tool.invoke(input).await.expect("well-formed input");
    let record = serde_json::from_str(&output.content).expect("content is JSON");
    (record, output.is_error)
}

#[tokio::test]
async fn calculate_through_the_registry() {
    let registry = default_registry();

    let (record, is_error) = invoke(&registry, "calculate", json!({"expression": "2 + 2"})).await;
    assert!(!is_error);
    assert_eq!(record["success"], true);
    assert_eq!(record["result"], 4);
    assert_eq!(record["expression"], "2 + 2");

    let (record, _) = invoke(&registry, "calculate", json!({"expression": "sqrt(16) * 3"})).await;
    assert_eq!(record["result"], 12.0);

    let (record, is_error) =
        invoke(&registry, "calculate", json!({"expression": "__import__('os')"})).await;
    assert!(is_error);
    assert_eq!(record["success"], false);
    assert!(record["error"].is_string());
    assert_eq!(record["expression"], "__import__('os')");
}

#[tokio::test]
async fn is_prime_through_the_registry() {
    let registry = default_registry();

    let (record, is_error) =
        invoke(&registry, "is_prime", json!({"numbers": [2, 3, 4, 5]})).await;
    assert!(!is_error);
    assert_eq!(record["primes"], json!([2, 3, 5]));
    assert_eq!(record["not_primes"], json!([4]));
    assert_eq!(record["count"], json!({"total": 4, "primes": 3, "not_primes": 1}));

    let (record, _) = invoke(&registry, "is_prime", json!({"numbers": [1, 0, -5]})).await;
    assert_eq!(record["primes"], json!([]));
    assert_eq!(record["count"]["not_primes"], 3);
}

#[tokio::test]
async fn factorial_through_the_registry() {
    let registry = default_registry();

    let (record, is_error) = invoke(&registry, "factorial", json!({"n": 5})).await;
    assert!(!is_error);
    assert_eq!(record, json!({"success": true, "n": 5, "factorial": 120}));

    let (record, is_error) = invoke(&registry, "factorial", json!({"n": -1})).await;
    assert!(is_error);
    assert_eq!(record["error"], "Factorial not defined for negative numbers");

    let (record, is_error) = invoke(&registry, "factorial", json!({"n": 171})).await;
    assert!(is_error);
    assert_eq!(record["error"], "Number too large (max 170)");
}

#[tokio::test]
async fn fibonacci_through_the_registry() {
    let registry = default_registry();

    let (record, is_error) = invoke(&registry, "fibonacci", json!({"n": 5})).await;
    assert!(!is_error);
    assert_eq!(
        record,
        json!({"success": true, "n": 5, "sequence": [0, 1, 1, 2, 3], "sum": 7})
    );

    let (record, _) = invoke(&registry, "fibonacci", json!({"n": 0})).await;
    assert_eq!(record["error"], "n must be positive");

    let (record, _) = invoke(&registry, "fibonacci", json!({"n": 101})).await;
    assert_eq!(record["error"], "n too large (max 100)");
}

#[tokio::test]
async fn configured_limits_change_the_guards() {
    let registry = registry_with_limits(20, 10);

    let (record, is_error) = invoke(&registry, "factorial", json!({"n": 21})).await;
    assert!(is_error);
    assert_eq!(record["error"], "Number too large (max 20)");

    let (record, is_error) = invoke(&registry, "fibonacci", json!({"n": 11})).await;
    assert!(is_error);
    assert_eq!(record["error"], "n too large (max 10)");
}

#[tokio::test]
async fn every_tool_is_idempotent() {
    let registry = default_registry();
    let calls = [
        ("calculate", json!({"expression": "sin(1) + 2 ** 10"})),
        ("is_prime", json!({"numbers": [97, 98, 99]})),
        ("factorial", json!({"n": 42})),
        ("fibonacci", json!({"n": 42})),
    ];
    for (name, input) in calls {
        let (first, _) = invoke(&registry, name, input.clone()).await;
        let (second, _) = invoke(&registry, name, input).await;
        assert_eq!(first, second, "{name} should be pure");
    }
}

mod warn_capture {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};

    /// Counts WARN events seen while installed as a layer.
    #[derive(Clone, Default)]
    pub struct WarnCounter(Arc<AtomicUsize>);

    impl WarnCounter {
        pub fn count(&self) -> usize {
            self.0.load(Ordering::Relaxed)
        }
    }

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

#[tokio::test]
async fn rejected_input_emits_a_warning() {
    use tracing_subscriber::layer::SubscriberExt;

    let counter = warn_capture::WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let registry = default_registry();

    // In-domain failure record.
    let tool = registry.get("factorial").unwrap();
    let output = tool.invoke(json!({"n": -1})).await.unwrap();
    assert!(output.is_error);
    assert_eq!(counter.count(), 1);

    // Malformed parameters.
    let tool = registry.get("calculate").unwrap();
    assert!(tool.invoke(json!({})).await.is_err());
    assert_eq!(counter.count(), 2);

    let tool = registry.get("fibonacci").unwrap();
    let output = tool.invoke(json!({"n": 0})).await.unwrap();
    assert!(output.is_error);
    assert_eq!(counter.count(), 3);

    // Successful invocations stay quiet at WARN.
    let tool = registry.get("is_prime").unwrap();
    let output = tool.invoke(json!({"numbers": [2, 3]})).await.unwrap();
    assert!(!output.is_error);
    assert_eq!(counter.count(), 3);
}

#[tokio::test]
async fn malformed_parameters_are_errs_not_records() {
    let registry = default_registry();
    for (name, input) in [
        ("calculate", json!({})),
        ("is_prime", json!({"numbers": "2,3"})),
        ("factorial", json!({"n": "five"})),
        ("fibonacci", json!({})),
    ] {
        let tool = registry.get(name).unwrap();
        assert!(tool.invoke(input).await.is_err(), "{name} should reject");
    }
}
