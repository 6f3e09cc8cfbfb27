//! A module containing [`Chain`] and its iterators.
//!
//! A Chain never exposes mutable access to its values, because doing so would allow the ordering
//! that it was built with to be broken.

mod chain;
mod iter;
mod node;

pub use chain::*;
pub use iter::*;
pub(crate) use node::*;
