//! Composed list accessors, generated at build time.
//!
//! The build script renders every accessor from `car` to `cddddr` with
//! [`cxr_gen::RustClosure`] and splices the entries into
//! [`primitives::PrimitiveTable::with_accessors`].

pub mod primitives;

pub use primitives::{Environment, Primitive, PrimitiveTable, RuntimeError, Variable};
