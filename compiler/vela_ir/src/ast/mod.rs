//! AST node types.
//!
//! The tree is handed to consumers read-only; it has no cycles (the parser
//! guarantees this, it is not re-verified here).

/// Binary operator tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    /// Check if this is the assignment operator.
    ///
    /// Assignment is the one operator with statement semantics: emitters
    /// terminate it instead of parenthesizing it.
    pub fn is_assign(self) -> bool {
        matches!(self, BinaryOp::Assign)
    }
}

/// How the step value of a range expression is interpreted.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RangeStepKind {
    /// The step value is the increment between consecutive elements.
    StepSize,
    /// The step value is the number of steps dividing the range (`#` form).
    StepCount,
}

/// Identifier with an optional attached array dimension.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub name: String,
    /// Array-dimension sub-expression, the `[i]` in `xs[i]`.
    pub dimensions: Option<Box<ArrayIndex>>,
}

impl Identifier {
    /// Create a plain identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Identifier {
            name: name.into(),
            dimensions: None,
        }
    }

    /// Attach an array dimension.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: ArrayIndex) -> Self {
        self.dimensions = Some(Box::new(dimensions));
        self
    }
}

/// Bracketed index expression with an optional trailing type annotation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArrayIndex {
    pub index: Box<AstNode>,
    pub type_annotation: Option<Box<AstNode>>,
}

impl ArrayIndex {
    /// Create an index expression with no annotation.
    pub fn new(index: AstNode) -> Self {
        ArrayIndex {
            index: Box::new(index),
            type_annotation: None,
        }
    }

    /// Attach a type-annotation sub-node.
    #[must_use]
    pub fn with_type_annotation(mut self, annotation: AstNode) -> Self {
        self.type_annotation = Some(Box::new(annotation));
        self
    }
}

/// Function call with a plain callee name and ordered arguments.
///
/// Callee names beginning with `%` are operator-desugaring markers produced
/// by the lowering pass (`%add`, `%sub`, `%mul`, `%div`, `%mod`, `%Not`);
/// the regenerator prints them back as operator expressions.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<AstNode>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: Vec<AstNode>) -> Self {
        FunctionCall {
            name: name.into(),
            arguments,
        }
    }
}

/// Binary expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BinaryExpression {
    pub op: BinaryOp,
    pub left: Box<AstNode>,
    pub right: Box<AstNode>,
}

impl BinaryExpression {
    pub fn new(op: BinaryOp, left: AstNode, right: AstNode) -> Self {
        BinaryExpression {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Function definition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDefinition {
    pub name: String,
    /// `None` models an undeclared return type.
    pub return_type: Option<String>,
    /// Pre-rendered parameter signature, e.g. `"(a : int, b : int)"`.
    /// `None` stands for an empty parameter list.
    pub signature: Option<String>,
    /// Ordered statement list.
    pub body: Vec<AstNode>,
}

impl FunctionDefinition {
    /// Create a definition with no return type, no signature, empty body.
    pub fn new(name: impl Into<String>) -> Self {
        FunctionDefinition {
            name: name.into(),
            return_type: None,
            signature: None,
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Vec<AstNode>) -> Self {
        self.body = body;
        self
    }
}

/// Range expression: `from..to` with an optional third step slot.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RangeExpression {
    pub from: Box<AstNode>,
    pub to: Box<AstNode>,
    pub step: Option<Box<AstNode>>,
    pub step_kind: RangeStepKind,
}

impl RangeExpression {
    /// Create a range with no step.
    pub fn new(from: AstNode, to: AstNode) -> Self {
        RangeExpression {
            from: Box::new(from),
            to: Box::new(to),
            step: None,
            step_kind: RangeStepKind::StepSize,
        }
    }

    #[must_use]
    pub fn with_step(mut self, step: AstNode, kind: RangeStepKind) -> Self {
        self.step = Some(Box::new(step));
        self.step_kind = kind;
        self
    }
}

/// A node in the Vela AST.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AstNode {
    Identifier(Identifier),
    /// Member-access chain: `left.right`.
    IdentifierList {
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    /// Integer literal, textual value as written in the source.
    IntLiteral(String),
    /// Floating literal, textual value as written in the source.
    DoubleLiteral(String),
    NullLiteral,
    FunctionCall(FunctionCall),
    BinaryExpression(BinaryExpression),
    FunctionDefinition(FunctionDefinition),
    Return {
        expr: Box<AstNode>,
    },
    RangeExpression(RangeExpression),
    ArrayIndex(ArrayIndex),
    /// Brace-delimited literal list.
    ExprList(Vec<AstNode>),
}

impl AstNode {
    /// Plain identifier node.
    pub fn ident(name: impl Into<String>) -> Self {
        AstNode::Identifier(Identifier::new(name))
    }

    /// Integer literal node from its source spelling.
    pub fn int(value: impl Into<String>) -> Self {
        AstNode::IntLiteral(value.into())
    }

    /// Floating literal node from its source spelling.
    pub fn double(value: impl Into<String>) -> Self {
        AstNode::DoubleLiteral(value.into())
    }

    /// Function-call node.
    pub fn call(name: impl Into<String>, arguments: Vec<AstNode>) -> Self {
        AstNode::FunctionCall(FunctionCall::new(name, arguments))
    }

    /// Binary-expression node.
    pub fn binary(op: BinaryOp, left: AstNode, right: AstNode) -> Self {
        AstNode::BinaryExpression(BinaryExpression::new(op, left, right))
    }

    /// Assignment node, `left = right`.
    pub fn assign(left: AstNode, right: AstNode) -> Self {
        Self::binary(BinaryOp::Assign, left, right)
    }

    /// Member-access node, `left.right`.
    pub fn member(left: AstNode, right: AstNode) -> Self {
        AstNode::IdentifierList {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Return node.
    pub fn ret(expr: AstNode) -> Self {
        AstNode::Return {
            expr: Box::new(expr),
        }
    }
}

#[cfg(test)]
mod tests;
