//! Core types for the Ingot boxed-integer runtime.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the typed handle the host runtime receives in place of a raw memory
//! reference, and the diagnostic sink capability the host supplies so
//! that failure paths can emit human-readable messages.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod handle;
pub mod sink;

pub use handle::{Int64Handle, Operand};
pub use sink::{DiagnosticSink, MemorySink, StderrSink};
