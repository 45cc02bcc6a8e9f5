//! Visitor trait for asynchronous document traversal.

use async_trait::async_trait;

use crate::Node;

/// Error type visitors report.
///
/// Opaque on purpose: the walker aggregates visitor failures without
/// inspecting them.
pub type VisitError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for visitor invocations.
pub type VisitResult = Result<(), VisitError>;

/// A visitor invoked once per traversed node.
///
/// `parent` and `index` identify where the node sits in its parent's
/// children sequence; both are `None` for the node a traversal started
/// from. Visitors take `&self` because sibling invocations run
/// concurrently; mutable state goes behind atomics or a lock.
#[async_trait]
pub trait Visit: Send + Sync {
    /// Visits one node.
    async fn visit(
        &self,
        node: &Node,
        parent: Option<&Node>,
        index: Option<usize>,
    ) -> VisitResult;
}
