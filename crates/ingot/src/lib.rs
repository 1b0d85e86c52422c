//! Ingot: a boxed 64-bit integer memory manager for embedding hosts.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Ingot sub-crates. A host runtime creates one [`arena::Arena`]
//! per run, threads it through the operator suite as the run context,
//! and drops it at run end; boxed values travel as
//! [`types::Int64Handle`]s (with `None` as the host's null reference).
//!
//! # Quick start
//!
//! ```rust
//! use ingot::prelude::*;
//! use ingot::value::{arith, convert, divide, text};
//!
//! // Run start: construct the arena with the host's diagnostic sink.
//! let sink = MemorySink::new();
//! let mut arena = Arena::new(sink.clone());
//!
//! // Box two values and add them; `add` accumulates into the left
//! // operand and consumes the right operand's reference.
//! let a = convert::from_int(&mut arena, 40).unwrap();
//! let b = convert::from_int(&mut arena, 2).unwrap();
//! let sum = arith::add(&mut arena, Some(a), Some(b)).unwrap();
//! assert_eq!(text::to_text(&arena, sum), "42");
//!
//! // Division by zero is a non-fatal math error: it reports through
//! // the sink and completes with a signed-infinity sentinel.
//! let quotient = divide::div(&mut arena, sum, None);
//! assert!(quotient.is_math_error());
//! assert_eq!(quotient.into_value(), f64::INFINITY);
//! assert!(sink.contains("division by zero"));
//!
//! // Run end: dropping the arena releases all backing storage.
//! drop(arena);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `ingot-arena` | Run context, slot store, growth policy |
//! | [`types`] | `ingot-core` | Handles, operands, diagnostic sinks |
//! | [`value`] | `ingot-value` | The boxed-integer operator suite |
//! | [`status`] | — | Host-facing status codes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod status;

/// Run context, slot store, and growth policy (`ingot-arena`).
pub use ingot_arena as arena;

/// Handles, operands, and diagnostic sinks (`ingot-core`).
pub use ingot_core as types;

/// The boxed-integer operator suite (`ingot-value`).
///
/// Organized by concern: [`value::convert`] (construction/coercion),
/// [`value::arith`], [`value::divide`], [`value::compare`],
/// [`value::copy`] (container copy policies), [`value::text`] and
/// [`value::binary`] (serialization).
pub use ingot_value as value;

/// Common imports for typical Ingot usage.
///
/// ```rust
/// use ingot::prelude::*;
/// ```
pub mod prelude {
    pub use ingot_arena::{Arena, ArenaError, GrowthPolicy};
    pub use ingot_core::{DiagnosticSink, Int64Handle, MemorySink, Operand, StderrSink};
    pub use ingot_value::{Computed, ValueError};

    pub use crate::status::Status;
}
