//! Vela Source Regeneration
//!
//! Turns an AST - possibly synthesized or rewritten by compiler passes -
//! back into textual Vela source. The generator walks each root depth-first
//! and appends to a single output buffer, inverting the surface-syntax
//! desugaring the lowering pass applied: marker calls such as `%add(a, b)`
//! come back out as `(a+b)`, ranges and list literals print in their
//! surface forms.
//!
//! # Modules
//!
//! - [`emitter`]: output buffer the generator appends to
//! - [`generator`]: the depth-first regeneration engine

pub mod emitter;
pub mod generator;

pub use emitter::SourceEmitter;
pub use generator::{GenError, SourceGen, STATEMENT_TERMINATOR};

use vela_ir::AstNode;

/// Regenerate source for `roots` with a fresh generator.
///
/// Convenience wrapper for the common one-shot case.
pub fn generate_source(roots: &[AstNode]) -> Result<String, GenError> {
    SourceGen::new().generate(roots)
}
