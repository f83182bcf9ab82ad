//! Single-user task board: persisted tasks, derived boards, and the
//! modal-driven edit/add workflow.
//!
//! Tasks carry an immutable id, a validated title, a description, a status
//! column, and a board name; boards exist only as the distinct set of
//! board values appearing on tasks. The whole collection is persisted as
//! one value in a key-value store, mutated exclusively through the
//! repository, and re-projected into a full [`domain::BoardView`] after
//! every mutation. The module follows hexagonal architecture:
//!
//! - Domain types and projections in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Repository, preferences, and session services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
