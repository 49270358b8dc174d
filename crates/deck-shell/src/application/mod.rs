//! Application layer use cases for the shell.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules in `deck-core`) and the infrastructure (input
//! devices, timers, storage).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "turn this
//!   key press into a control command for the mirroring surface").
//! - **Depend on abstractions** (traits) rather than concrete
//!   implementations, so the infrastructure can be swapped without changing
//!   this code – and so every use case is unit-testable with in-memory
//!   fakes.
//! - **Contain no OS calls, no I/O, no runtime-specific code**.
//!
//! # Sub-modules
//!
//! - **`store`** – The [`ShellStateStore`](store::ShellStateStore) seam:
//!   read accessors and mutation entry points over the shared view state
//!   consumed and produced by both use cases.
//!
//! - **`route_keys`** – Receives raw key-down events and decides whether to
//!   dispatch a control command to the mirroring surface.  This is the most
//!   critical use case – it runs on every keystroke.
//!
//! - **`sync_viewport`** – Recomputes and publishes the window and
//!   mirroring-surface rectangles whenever the observed container size (or
//!   the startup readiness flag) changes.

pub mod route_keys;
pub mod store;
pub mod sync_viewport;
