//! Run-scoped slot arena with free-list recycling.
//!
//! One [`Arena`] exists per host run. It owns a single growable slot
//! store (one fixed-size [`slot::Slot`] per boxed integer, addressed by
//! a stable [`ingot_core::Int64Handle`] index) and a LIFO free list that
//! recycles released slots before the store grows.
//!
//! # Architecture
//!
//! ```text
//! Arena (run context)
//! ├── SlotStore        contiguous Vec<Slot>, policy-driven growth
//! ├── free list        LIFO stack of reclaimed slot indices
//! └── DiagnosticSink   injected host capability for failure messages
//! ```
//!
//! Growth never invalidates handles: handles are indices, and the store
//! relocates its buffer without renumbering slots. Capacity only grows
//! for the life of the arena; dropping the arena releases all backing
//! storage unconditionally, even if the host leaked handles.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod slot;
pub mod store;

pub use arena::Arena;
pub use config::GrowthPolicy;
pub use error::ArenaError;
pub use store::SlotStore;
