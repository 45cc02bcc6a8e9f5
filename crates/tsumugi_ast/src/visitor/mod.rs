//! Asynchronous visitors for document traversal.
//!
//! # Overview
//!
//! - [`Visit`] - visitor trait invoked per node
//! - [`visit_level`] - awaitable traversal of a node and its direct children
//! - [`walk`] - fire-and-forget one-level traversal on the Tokio runtime
//! - [`walk_tree`] - recursive traversal over a whole document
//!
//! Traversal is deliberately shallow: one [`visit_level`] (or [`walk`])
//! call touches only the given node and its direct children. Visitors
//! that need to go deeper re-invoke the walk on the children they care
//! about, or use [`walk_tree`].
//!
//! Direct children are dispatched concurrently and joined as one batch:
//! dispatch order follows the children array, completion order is
//! unspecified, and a failing child fails the batch only after every
//! sibling has settled.
//!
//! # Examples
//!
//! ## Counting one level of a document
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use tsumugi_ast::Node;
//! use tsumugi_ast::visitor::{Visit, VisitResult, visit_level};
//!
//! #[derive(Default)]
//! struct Counter {
//!     visited: AtomicUsize,
//! }
//!
//! #[async_trait::async_trait]
//! impl Visit for Counter {
//!     async fn visit(&self, _: &Node, _: Option<&Node>, _: Option<usize>) -> VisitResult {
//!         self.visited.fetch_add(1, Ordering::SeqCst);
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), tsumugi_ast::VisitError> {
//! let document = Node::root(vec![
//!     Node::text("a"),
//!     Node::element("p", vec![], vec![Node::text("deep")]),
//! ]);
//!
//! let counter = Counter::default();
//! visit_level(&counter, &document).await?;
//!
//! // The root and its two children; "deep" is below the visited level.
//! assert_eq!(counter.visited.load(Ordering::SeqCst), 3);
//! # Ok(())
//! # }
//! ```

mod visit;
mod walk;

pub use visit::{Visit, VisitError, VisitResult};
pub use walk::{visit_level, walk, walk_tree};
