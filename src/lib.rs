//! Kanri: a single-user task board engine.
//!
//! This crate provides the data layer of a kanban-style task board and its
//! synchronization contract with a rendering collaborator: CRUD over a
//! persisted task collection, derivation of the active board and the
//! visible per-column tasks, and the modal-driven edit/add workflow that
//! mediates between transient form input and the persisted model. State
//! lives in a local whole-value key-value store and serves one session at
//! a time; there is no server and no concurrent writer.
//!
//! # Architecture
//!
//! Kanri follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (store backends, test
//!   sinks)
//!
//! # Modules
//!
//! - [`board`]: the task collection, board projections, and session
//!   workflow

pub mod board;
