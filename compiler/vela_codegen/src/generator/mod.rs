//! Depth-first source regeneration engine.
//!
//! Statement-level decoration happens at the traversal entry point: a
//! non-assignment binary expression is parenthesized wherever it is entered,
//! an assignment is suffixed with the statement terminator instead. No
//! operator-precedence table is consulted; whether to parenthesize is
//! decided purely by assignment-vs-not.

use thiserror::Error;
use tracing::trace;

use vela_ir::{
    ArrayIndex, AstNode, BinaryExpression, BinaryOp, FunctionCall, FunctionDefinition, Identifier,
    RangeExpression, RangeStepKind,
};

use crate::emitter::SourceEmitter;

/// Statement terminator appended after assignments and body statements.
pub const STATEMENT_TERMINATOR: &str = ";\n";

/// Marker name for logical negation; regenerates in prefix form.
const NOT_MARKER: &str = "%Not";

/// Regeneration input-contract violation.
///
/// These indicate a defect in the caller, not a user error; they are never
/// downgraded or retried.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum GenError {
    /// `generate` was invoked with no root nodes.
    #[error("source regeneration invoked with no root nodes")]
    EmptyInput,
}

/// Source symbol for a binary operator.
fn binary_op_str(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Assign => "=",
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
        BinaryOp::Eq => "==",
        BinaryOp::NotEq => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::LtEq => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::GtEq => ">=",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
    }
}

/// Binary symbol for an operator-desugaring marker name.
///
/// `None` for the unary marker and for `%`-names outside the fixed set,
/// which emit their operands with no operator between them.
fn marker_symbol(name: &str) -> Option<&'static str> {
    match name {
        "%add" => Some("+"),
        "%sub" => Some("-"),
        "%mul" => Some("*"),
        "%div" => Some("/"),
        "%mod" => Some("%"),
        _ => None,
    }
}

/// Display tag for traversal tracing.
fn node_kind(node: &AstNode) -> &'static str {
    match node {
        AstNode::Identifier(_) => "identifier",
        AstNode::IdentifierList { .. } => "identifier_list",
        AstNode::IntLiteral(_) => "int_literal",
        AstNode::DoubleLiteral(_) => "double_literal",
        AstNode::NullLiteral => "null_literal",
        AstNode::FunctionCall(_) => "function_call",
        AstNode::BinaryExpression(_) => "binary_expression",
        AstNode::FunctionDefinition(_) => "function_definition",
        AstNode::Return { .. } => "return",
        AstNode::RangeExpression(_) => "range_expression",
        AstNode::ArrayIndex(_) => "array_index",
        AstNode::ExprList(_) => "expr_list",
    }
}

/// Depth-first source regenerator.
///
/// One instance per generation task: the output buffer is a single shared
/// accumulator for the duration of one [`SourceGen::generate`] call, and
/// `generate` consumes the generator to enforce that.
#[derive(Default)]
pub struct SourceGen {
    out: SourceEmitter,
}

impl SourceGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerate source text for `roots`, in order.
    ///
    /// The tree is read-only; every reachable node is handled by the
    /// exhaustive match in the traversal (the variant set is closed).
    pub fn generate(mut self, roots: &[AstNode]) -> Result<String, GenError> {
        if roots.is_empty() {
            return Err(GenError::EmptyInput);
        }
        for node in roots {
            self.traverse(node);
        }
        Ok(self.out.finish())
    }

    /// Traversal entry point; applies statement-level decoration to binary
    /// expressions.
    fn traverse(&mut self, node: &AstNode) {
        trace!(kind = node_kind(node), "traverse");
        match node {
            AstNode::Identifier(ident) => self.emit_identifier(ident),
            AstNode::IdentifierList { left, right } => {
                self.traverse(left);
                self.out.emit(".");
                self.traverse(right);
            }
            AstNode::IntLiteral(value) | AstNode::DoubleLiteral(value) => self.out.emit(value),
            AstNode::NullLiteral => self.out.emit("null"),
            AstNode::FunctionCall(call) => self.emit_call(call),
            AstNode::BinaryExpression(binary) => {
                if binary.op.is_assign() {
                    self.emit_binary(binary);
                    self.out.emit(STATEMENT_TERMINATOR);
                } else {
                    self.out.emit("(");
                    self.emit_binary(binary);
                    self.out.emit(")");
                }
            }
            AstNode::FunctionDefinition(def) => self.emit_function_def(def),
            AstNode::Return { expr } => self.emit_return(expr),
            AstNode::RangeExpression(range) => self.emit_range(range),
            AstNode::ArrayIndex(index) => self.emit_array_index(index),
            AstNode::ExprList(elements) => self.emit_expr_list(elements),
        }
    }

    fn emit_identifier(&mut self, ident: &Identifier) {
        self.out.emit(&ident.name);
        if let Some(dimensions) = &ident.dimensions {
            self.emit_array_index(dimensions);
        }
    }

    fn emit_array_index(&mut self, index: &ArrayIndex) {
        self.out.emit("[");
        self.traverse(&index.index);
        self.out.emit("]");
        if let Some(annotation) = &index.type_annotation {
            self.traverse(annotation);
        }
    }

    fn emit_call(&mut self, call: &FunctionCall) {
        if call.name.starts_with('%') {
            self.emit_marker_call(call);
        } else {
            self.out.emit(&call.name);
            self.out.emit("(");
            for (n, argument) in call.arguments.iter().enumerate() {
                self.traverse(argument);
                if n + 1 < call.arguments.len() {
                    self.out.emit(",");
                }
            }
            self.out.emit(")");
        }
    }

    /// Invert the operator desugaring: `%add(a, b)` came from `a + b`,
    /// `%Not(a)` from `!a`.
    fn emit_marker_call(&mut self, call: &FunctionCall) {
        self.out.emit("(");
        if call.name == NOT_MARKER {
            self.out.emit("!");
            if let Some(operand) = call.arguments.first() {
                self.traverse(operand);
            }
        } else {
            if let Some(first) = call.arguments.first() {
                self.traverse(first);
            }
            if let Some(symbol) = marker_symbol(&call.name) {
                self.out.emit(symbol);
            }
            if let Some(second) = call.arguments.get(1) {
                self.traverse(second);
            }
        }
        self.out.emit(")");
    }

    /// Operands go back through the traversal entry point, so nested
    /// non-assignment binaries keep their parentheses. The immediate
    /// right-hand side of an assignment is the exception: `=` needs no
    /// grouping, so it prints bare.
    fn emit_binary(&mut self, binary: &BinaryExpression) {
        self.traverse(&binary.left);
        self.out.emit(binary_op_str(binary.op));

        if binary.op.is_assign() {
            if let AstNode::BinaryExpression(rhs) = binary.right.as_ref() {
                if !rhs.op.is_assign() {
                    self.emit_binary(rhs);
                    return;
                }
            }
        }
        self.traverse(&binary.right);
    }

    fn emit_function_def(&mut self, def: &FunctionDefinition) {
        self.out.emit("def ");
        self.out.emit(&def.name);

        if let Some(return_type) = &def.return_type {
            self.out.emit(": ");
            self.out.emit(return_type);
        }

        match &def.signature {
            Some(signature) => self.out.emit(signature),
            None => self.out.emit("()\n"),
        }

        self.out.emit("{\n");
        for statement in &def.body {
            // Binary expressions and return statements are the two shapes a
            // body holds; a body-level binary prints unwrapped.
            match statement {
                AstNode::BinaryExpression(binary) => self.emit_binary(binary),
                AstNode::Return { expr } => self.emit_return(expr),
                _ => {}
            }
            self.out.emit(STATEMENT_TERMINATOR);
        }
        self.out.emit("}");
        self.out.emit("\n");
    }

    fn emit_return(&mut self, expr: &AstNode) {
        self.out.emit("return = ");
        self.traverse(expr);
    }

    /// Range endpoints print only in int-literal or identifier form; other
    /// shapes produce no text for that endpoint.
    fn emit_range(&mut self, range: &RangeExpression) {
        self.emit_range_endpoint(&range.from);
        self.out.emit("..");
        self.emit_range_endpoint(&range.to);

        if let Some(step) = &range.step {
            self.out.emit("..");
            if range.step_kind == RangeStepKind::StepCount {
                self.out.emit("#");
            }
            self.emit_range_endpoint(step);
        }
    }

    fn emit_range_endpoint(&mut self, endpoint: &AstNode) {
        match endpoint {
            AstNode::IntLiteral(value) => self.out.emit(value),
            AstNode::Identifier(ident) => self.out.emit(&ident.name),
            _ => {}
        }
    }

    fn emit_expr_list(&mut self, elements: &[AstNode]) {
        self.out.emit("{");
        let mark = self.out.mark();
        for element in elements {
            self.traverse(element);
            self.out.emit(",");
        }
        self.out.trim_trailing_comma_since(mark);
        self.out.emit("}");
    }
}
