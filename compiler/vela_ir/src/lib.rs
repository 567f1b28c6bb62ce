//! Vela IR - AST Node Representation
//!
//! This crate contains the tree the rest of the compiler exchanges:
//! tagged-union AST nodes produced by the parser (or synthesized by rewrite
//! passes) and consumed read-only by downstream phases such as source
//! regeneration.
//!
//! # Design Philosophy
//!
//! - **Closed variant set**: every reachable node is one of the `AstNode`
//!   variants; an unsupported shape is unrepresentable, not a runtime case.
//! - **Literals keep their text**: int and double literals store the source
//!   spelling so regeneration reproduces them byte-for-byte.
//! - **No interior mutability**: consumers walk the tree, they never edit it.

pub mod ast;

pub use ast::{
    ArrayIndex, AstNode, BinaryExpression, BinaryOp, FunctionCall, FunctionDefinition, Identifier,
    RangeExpression, RangeStepKind,
};
