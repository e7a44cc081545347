//! Generator for composed list accessors (`car`, `cadr`, ..., `cddddr`).
//!
//! The generator enumerates every non-empty sequence of head/tail steps up to
//! a maximum depth and renders each one as a primitive registration entry for
//! an interpreter's primitive table. Enumeration ([`Sequences`]) and rendering
//! ([`Renderer`]) are independent, so the same accessor set can be emitted for
//! different host syntaxes.

pub mod errors;
pub mod generator;
pub mod op;
pub mod render;
pub mod sequences;

pub use errors::{GenerateError, GenerateResult};
pub use generator::{Generator, generate};
pub use op::{CallOrder, Op, OpSequence};
pub use render::{CppLambda, Names, Renderer, RustClosure, Template};
pub use sequences::{MaxDepth, Sequences, expected_fragment_count};
