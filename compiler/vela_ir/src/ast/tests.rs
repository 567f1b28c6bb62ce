use pretty_assertions::assert_eq;

use super::*;

#[test]
fn ident_builds_plain_identifier() {
    let node = AstNode::ident("x");
    assert_eq!(node, AstNode::Identifier(Identifier::new("x")));
}

#[test]
fn identifier_with_dimensions_attaches_index() {
    let ident = Identifier::new("xs").with_dimensions(ArrayIndex::new(AstNode::ident("i")));
    let Some(dimensions) = &ident.dimensions else {
        panic!("expected dimensions");
    };
    assert_eq!(*dimensions.index, AstNode::ident("i"));
    assert!(dimensions.type_annotation.is_none());
}

#[test]
fn assign_uses_assignment_operator() {
    let node = AstNode::assign(AstNode::ident("x"), AstNode::int("1"));
    let AstNode::BinaryExpression(binary) = node else {
        panic!("expected binary expression");
    };
    assert!(binary.op.is_assign());
    assert_eq!(*binary.left, AstNode::ident("x"));
    assert_eq!(*binary.right, AstNode::int("1"));
}

#[test]
fn non_assignment_operators_are_not_assign() {
    for op in [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
        BinaryOp::And,
        BinaryOp::Or,
    ] {
        assert!(!op.is_assign(), "{op:?} must not count as assignment");
    }
}

#[test]
fn function_definition_builder_fills_slots() {
    let def = FunctionDefinition::new("foo")
        .with_return_type("int")
        .with_signature("(a : int)")
        .with_body(vec![AstNode::ret(AstNode::ident("a"))]);
    assert_eq!(def.name, "foo");
    assert_eq!(def.return_type.as_deref(), Some("int"));
    assert_eq!(def.signature.as_deref(), Some("(a : int)"));
    assert_eq!(def.body.len(), 1);
}

#[test]
fn range_defaults_to_step_size() {
    let range = RangeExpression::new(AstNode::int("1"), AstNode::int("10"));
    assert!(range.step.is_none());
    assert_eq!(range.step_kind, RangeStepKind::StepSize);

    let counted = RangeExpression::new(AstNode::int("1"), AstNode::int("10"))
        .with_step(AstNode::int("5"), RangeStepKind::StepCount);
    assert_eq!(counted.step_kind, RangeStepKind::StepCount);
}

#[test]
fn literals_keep_source_spelling() {
    assert_eq!(AstNode::double("1.50"), AstNode::DoubleLiteral("1.50".into()));
    assert_eq!(AstNode::int("007"), AstNode::IntLiteral("007".into()));
}
