//! Walk functions for document traversal.
//!
//! These functions drive the [`Visit`] trait. Traversal of one level is
//! a structured fan-out: the node's visitor invocation completes first,
//! then one future per direct child is created before any is awaited,
//! and the batch is joined as a whole.

use std::sync::Arc;

use futures::future::{BoxFuture, join_all};
use tracing::warn;

use crate::Node;

use super::visit::{Visit, VisitResult};

/// Visits `node` and then its direct children, one level deep.
///
/// The visitor is invoked on `node` (with no parent or index) and, once
/// that invocation completes, concurrently on every direct child with
/// `(child, node, index)`. Grandchildren are not visited; callers that
/// need deeper traversal re-invoke this on a child or use [`walk_tree`].
///
/// Child dispatch order follows the children array, completion order is
/// unspecified. Every child runs to completion even when a sibling
/// fails; the first failure in dispatch order is then returned.
pub async fn visit_level<V>(visitor: &V, node: &Node) -> VisitResult
where
    V: Visit + ?Sized,
{
    visitor.visit(node, None, None).await?;

    let Some(children) = node.children() else {
        return Ok(());
    };

    let batch = children
        .iter()
        .enumerate()
        .map(|(index, child)| visitor.visit(child, Some(node), Some(index)));

    join_all(batch).await.into_iter().collect()
}

/// Spawns a one-level traversal onto the Tokio runtime and returns
/// immediately.
///
/// The caller cannot observe completion or failure of the traversal;
/// visitor failures are logged at warn level. Callers that need a
/// completion signal await [`visit_level`] or [`walk_tree`] directly.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn walk<V>(node: Arc<Node>, visitor: V)
where
    V: Visit + 'static,
{
    tokio::spawn(async move {
        if let Err(error) = visit_level(&visitor, &node).await {
            warn!("document walk failed: {}", error);
        }
    });
}

/// Visits every node in the tree rooted at `node`.
///
/// Children of each visited node are dispatched concurrently with the
/// same batch semantics as [`visit_level`], recursively. The starting
/// node is visited with no parent or index.
pub fn walk_tree<'a, V>(visitor: &'a V, node: &'a Node) -> BoxFuture<'a, VisitResult>
where
    V: Visit + ?Sized,
{
    walk_tree_from(visitor, node, None, None)
}

fn walk_tree_from<'a, V>(
    visitor: &'a V,
    node: &'a Node,
    parent: Option<&'a Node>,
    index: Option<usize>,
) -> BoxFuture<'a, VisitResult>
where
    V: Visit + ?Sized,
{
    Box::pin(async move {
        visitor.visit(node, parent, index).await?;

        let Some(children) = node.children() else {
            return Ok(());
        };

        let batch = children
            .iter()
            .enumerate()
            .map(|(child_index, child)| {
                walk_tree_from(visitor, child, Some(node), Some(child_index))
            });

        join_all(batch).await.into_iter().collect()
    })
}
