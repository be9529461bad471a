//! Property tests for the precedence rules: registration order is the sole
//! tie-break among equal-length candidates, segment counts isolate patterns
//! from each other, and grouping carries no precedence weight.

mod common;

use common::{assert_route_match, build_router, setup_tracing};
use seqroute::{RouteGroup, Router};

#[test]
fn test_order_determinism_param_first() {
    let router = build_router(&[
        ("/users/:id", "get_user"),
        ("/users/config", "get_config"),
    ]);
    // The later literal is permanently shadowed.
    assert_route_match(&router, "/users/config", "get_user");
    assert_route_match(&router, "/users/42", "get_user");
}

#[test]
fn test_order_determinism_literal_first() {
    let router = build_router(&[
        ("/users/config", "get_config"),
        ("/users/:id", "get_user"),
    ]);
    // Swapping registration order swaps the winner.
    assert_route_match(&router, "/users/config", "get_config");
    assert_route_match(&router, "/users/42", "get_user");
}

#[test]
fn test_identical_duplicate_patterns_first_registered_wins() {
    let router = build_router(&[
        ("/users/:id", "first"),
        ("/users/:id", "second"),
    ]);
    assert_route_match(&router, "/users/1", "first");
}

#[test]
fn test_param_universality() {
    // A param matches any non-empty component, including strings that are
    // literal segments of other, unrelated patterns.
    let router = build_router(&[
        ("/users/:id", "get_user"),
        ("/orders/pending", "pending_orders"),
    ]);
    assert_route_match(&router, "/users/pending", "get_user");
    assert_route_match(&router, "/users/orders", "get_user");
    let m = router.lookup("/users/pending").expect("route should match");
    assert_eq!(m.get_binding("id"), Some("pending"));
}

#[test]
fn test_segment_length_isolation() {
    // Patterns of different lengths never conflict, in either order.
    let router = build_router(&[
        ("/users/:id", "get_user"),
        ("/users/:id/contents", "get_contents"),
    ]);
    assert_route_match(&router, "/users/123/contents", "get_contents");
    assert_route_match(&router, "/users/123", "get_user");

    let reversed = build_router(&[
        ("/users/:id/contents", "get_contents"),
        ("/users/:id", "get_user"),
    ]);
    assert_route_match(&reversed, "/users/123/contents", "get_contents");
    assert_route_match(&reversed, "/users/123", "get_user");
}

#[test]
fn test_three_level_nesting_resolves_by_length() {
    let router = build_router(&[
        ("/users/:id", "get_user"),
        ("/users/:id/contents", "get_contents"),
        ("/users/:id/contents/:contentId", "get_content_by_id"),
    ]);
    let m = router
        .lookup("/users/123/contents/456")
        .expect("route should match");
    assert_eq!(m.handler.as_str(), "get_content_by_id");
    assert_eq!(m.get_binding("id"), Some("123"));
    assert_eq!(m.get_binding("contentId"), Some("456"));
}

#[test]
fn test_first_match_skips_incompatible_earlier_entries() {
    // An earlier equal-length candidate that fails a literal position must
    // not block a later compatible one.
    let router = build_router(&[
        ("/admin/settings", "admin_settings"),
        ("/users/:id", "get_user"),
    ]);
    assert_route_match(&router, "/users/7", "get_user");
    assert_route_match(&router, "/admin/settings", "admin_settings");
}

/// A module-style arrangement: user group first, then profile, then a
/// nested frends index. The user group's `/users/:id` registers before the
/// frends group's `/users/frends`.
fn modular_app() -> RouteGroup {
    let user = RouteGroup::new("user")
        .route("/users", "get_users")
        .route("/users/:id", "get_user_by_id");

    let profile = RouteGroup::new("user_profile").route("/users/:id/profile", "get_user_profile");

    let frends = RouteGroup::new("user_frends")
        .route("/users/frends", "get_user_frends")
        .route("/users/:id/frends", "get_user_frends_by_id");

    RouteGroup::new("users_index")
        .group(user)
        .group(profile)
        .group(RouteGroup::new("users_frends_index").group(frends))
}

#[test]
fn test_modular_pattern_frends_absorbed_by_earlier_param() {
    setup_tracing();
    let mut router = Router::default();
    router.mount(&modular_app()).expect("mount should succeed");
    router.finalize();

    // /users/:id flattened ahead of /users/frends, so the literal loses.
    let m = router.lookup("/users/frends").expect("route should match");
    assert_eq!(m.handler.as_str(), "get_user_by_id");
    assert_eq!(m.get_binding("id"), Some("frends"));

    // Three-segment routes are untouched by the two-segment param.
    assert_route_match(&router, "/users/123/profile", "get_user_profile");
    assert_route_match(&router, "/users/123/frends", "get_user_frends_by_id");
}

#[test]
fn test_modular_pattern_frends_module_imported_first_is_honored() {
    setup_tracing();
    let frends_first = RouteGroup::new("users_index")
        .group(
            RouteGroup::new("users_frends_index").group(
                RouteGroup::new("user_frends")
                    .route("/users/frends", "get_user_frends")
                    .route("/users/:id/frends", "get_user_frends_by_id"),
            ),
        )
        .group(
            RouteGroup::new("user")
                .route("/users", "get_users")
                .route("/users/:id", "get_user_by_id"),
        );

    let mut router = Router::default();
    router.mount(&frends_first).expect("mount should succeed");
    router.finalize();

    assert_route_match(&router, "/users/frends", "get_user_frends");
    assert_route_match(&router, "/users/42", "get_user_by_id");
}

#[test]
fn test_grouping_is_equivalent_to_flat_registration() {
    setup_tracing();
    let mut grouped = Router::default();
    let seqs = grouped.mount(&modular_app()).expect("mount should succeed");
    grouped.finalize();

    // Mount assigns consecutive global sequence numbers in traversal order.
    assert_eq!(seqs, vec![0, 1, 2, 3, 4]);

    let flat = build_router(&[
        ("/users", "get_users"),
        ("/users/:id", "get_user_by_id"),
        ("/users/:id/profile", "get_user_profile"),
        ("/users/frends", "get_user_frends"),
        ("/users/:id/frends", "get_user_frends_by_id"),
    ]);

    for path in [
        "/users",
        "/users/7",
        "/users/frends",
        "/users/7/profile",
        "/users/7/frends",
        "/missing",
    ] {
        let grouped_handler = grouped.lookup(path).map(|m| m.handler);
        let flat_handler = flat.lookup(path).map(|m| m.handler);
        assert_eq!(grouped_handler, flat_handler, "divergence on {}", path);
    }
}

#[test]
fn test_nesting_depth_never_affects_outcomes() {
    setup_tracing();
    // Same flattened stream, radically different nesting.
    let deep = RouteGroup::new("a").group(RouteGroup::new("b").group(
        RouteGroup::new("c")
            .route("/users/config", "get_config")
            .route("/users/:id", "get_user"),
    ));
    let shallow = RouteGroup::new("flat")
        .route("/users/config", "get_config")
        .route("/users/:id", "get_user");

    for group in [deep, shallow] {
        let mut router = Router::default();
        router.mount(&group).expect("mount should succeed");
        router.finalize();
        assert_route_match(&router, "/users/config", "get_config");
        assert_route_match(&router, "/users/9", "get_user");
    }
}
