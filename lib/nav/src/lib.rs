//! Static navigation tree and role-based menu filtering.
//!
//! The sidebar menu is compiled into the client as a static tree of
//! top-level entries and their sub-entries, each optionally restricted to
//! a role set. [`filter_nav`] resolves the subset visible to the current
//! role; rendering code never makes its own visibility decisions.

pub mod item;
pub mod resolve;

pub use item::{NavItem, NavSubItem};
pub use resolve::filter_nav;
