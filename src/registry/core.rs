use crate::ids::HandlerId;

/// One declared route inside a group.
#[derive(Debug, Clone)]
pub struct GroupRoute {
    /// Uncompiled declaration string, e.g. `/users/:id`.
    pub declaration: String,
    /// Handler token to bind on registration.
    pub handler: HandlerId,
}

/// Named, ordered set of route declarations plus nested subgroups.
///
/// Groups exist purely for organization. Flattening yields a group's own
/// routes in declaration order, then each subgroup's flattened routes in
/// insertion order, recursively. Nesting depth never reaches the route
/// table, so rearranging routes into deeper or shallower groups changes
/// nothing as long as the flattened order is the same.
///
/// # Example
///
/// ```
/// use seqroute::registry::RouteGroup;
/// use seqroute::router::Router;
///
/// let users = RouteGroup::new("users")
///     .route("/users", "list_users")
///     .route("/users/:id", "get_user")
///     .group(RouteGroup::new("contents").route("/users/:id/contents", "get_contents"));
///
/// let mut router = Router::new();
/// let seqs = router.mount(&users)?;
/// router.finalize();
///
/// assert_eq!(seqs, vec![0, 1, 2]);
/// # Ok::<(), seqroute::router::RegisterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteGroup {
    name: String,
    routes: Vec<GroupRoute>,
    groups: Vec<RouteGroup>,
}

impl RouteGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Append a route declaration to this group.
    #[must_use]
    pub fn route(mut self, declaration: impl Into<String>, handler: impl Into<HandlerId>) -> Self {
        self.routes.push(GroupRoute {
            declaration: declaration.into(),
            handler: handler.into(),
        });
        self
    }

    /// Append a subgroup. Its routes flatten after this group's own routes
    /// and after previously appended subgroups.
    #[must_use]
    pub fn group(mut self, child: RouteGroup) -> Self {
        self.groups.push(child);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Depth-first flattening: own routes in declaration order, then
    /// subgroups in insertion order.
    #[must_use]
    pub fn flatten(&self) -> Vec<(&str, &HandlerId)> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<(&'a str, &'a HandlerId)>) {
        for route in &self.routes {
            out.push((route.declaration.as_str(), &route.handler));
        }
        for group in &self.groups {
            group.collect(out);
        }
    }
}
