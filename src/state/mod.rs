//! State Management
//!
//! Global application state, the page navigation machine, and the
//! wish store.

pub mod global;
pub mod router;
pub mod wishes;

pub use global::{provide_global_state, GlobalState, WishModalState};
pub use router::{nav_effects, NavEffects, Page, Room};
pub use wishes::{WishItem, WishList};
