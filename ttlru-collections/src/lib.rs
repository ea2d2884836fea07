//! # TTLRU Collections
//!
//! The two structures an LRU cache is assembled from:
//!
//! - **LinkedList**: Doubly linked list threaded through a sentinel root, with
//!   stable [`NodeHandle`]s for O(1) removal and reordering
//! - **ConcurrentMap**: Sharded, thread-safe key/value map
//!
//! ## Example
//!
//! ```rust
//! use ttlru_collections::{ConcurrentMap, LinkedList};
//!
//! let mut list = LinkedList::new();
//! let a = list.push_back("a");
//! list.push_back("b");
//! list.move_to_back(a);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
//!
//! let index = ConcurrentMap::new();
//! index.store("a", a);
//! assert_eq!(index.load("a"), Some(a));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod concurrent_map;
mod linked_list;

pub use concurrent_map::{AnyValue, ConcurrentMap};
pub use linked_list::{Iter, LinkedList, NodeHandle};
