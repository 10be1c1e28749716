//! An ordered map and an ordered set implemented with an AVL tree.
//!
//! The tree keeps its entries in the order defined by a [`Comparator`]
//! supplied at construction time and rebalances itself on every insert and
//! remove, so lookups, nearest-neighbor queries and ordered iteration all
//! run in logarithmic time.
//!
//! ```
//! use ordtree::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! assert_eq!(map.get(&2), Some(&"two"));
//! assert_eq!(map.lower(&3), Some((&2, &"two")));
//! assert_eq!(map.ceiling(&4), None);
//! assert_eq!(map.len(), 3);
//! ```

pub mod compare;
pub mod map;
pub mod set;

pub use compare::{Comparator, Natural, Reverse};
pub use map::OrderedMap;
pub use set::OrderedSet;
