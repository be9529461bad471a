#![allow(dead_code)]

use seqroute::{RouteMatch, Router};
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a test subscriber once per process, honoring `RUST_LOG`.
pub fn setup_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a finalized router from `(declaration, handler)` pairs, preserving
/// slice order as registration order.
pub fn build_router(routes: &[(&str, &str)]) -> Router {
    setup_tracing();
    let mut router = Router::default();
    for (declaration, handler) in routes {
        router
            .add_route(declaration, *handler)
            .expect("route should compile and register");
    }
    router.finalize();
    router
}

/// Assert that `path` resolves to `expected_handler`, or to nothing when
/// `expected_handler` is `"<none>"`.
pub fn assert_route_match(router: &Router, path: &str, expected_handler: &str) {
    match router.lookup(path) {
        Some(RouteMatch {
            handler, pattern, ..
        }) => {
            println!("✅ {} → {} ({})", path, handler, pattern);
            assert_eq!(
                handler.as_str(),
                expected_handler,
                "Handler mismatch for {}: expected '{}', got '{}'",
                path,
                expected_handler,
                handler
            );
        }
        None => {
            println!("❌ {} → no match", path);
            assert_eq!(
                expected_handler, "<none>",
                "Expected a route to match for {}",
                path
            );
        }
    }
}
