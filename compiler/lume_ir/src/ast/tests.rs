use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::expr::format_float;
use super::*;
use crate::{Type, Var};

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr, ty: Type) -> Expr {
    Expr::new(ExprKind::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        ty,
    })
}

fn var_ref(var: &Var) -> Expr {
    Expr::new(ExprKind::VarRef(var.clone()))
}

#[test]
fn literal_descriptions() {
    assert_eq!(Expr::int_literal(1).description(), "1");
    assert_eq!(Expr::int_literal(-2_147_483_648).description(), "-2147483648");
    assert_eq!(Expr::float_literal(1.0).description(), "1.0");
    assert_eq!(Expr::float_literal(-99.0).description(), "-99.0");
    assert_eq!(Expr::float_literal(-0.5).description(), "-0.5");
    assert_eq!(Expr::bool_literal(true).description(), "true");
    assert_eq!(Expr::bool_literal(false).description(), "false");
}

#[test]
fn float_formatting_always_shows_fraction_or_exponent() {
    assert_eq!(format_float(0.0), "0.0");
    assert_eq!(format_float(1.0), "1.0");
    assert_eq!(format_float(0.75), "0.75");
    assert!(format_float(f32::MAX).contains('e') || format_float(f32::MAX).contains('.'));
}

#[test]
fn provisional_literal_types() {
    assert_eq!(Expr::int_literal(1).ty(), Type::INT);
    assert_eq!(Expr::float_literal(1.0).ty(), Type::FLOAT);
    assert_eq!(Expr::bool_literal(true).ty(), Type::BOOL);
}

#[test]
fn literal_resolution() {
    let mut lit = Expr::int_literal(1);
    assert!(lit.resolve_literal(crate::ScalarKind::Half));
    assert_eq!(lit.ty(), Type::HALF);
    assert_eq!(lit.description(), "1.0");

    // Already resolved: a second resolution is refused.
    assert!(!lit.resolve_literal(crate::ScalarKind::Int));
    assert_eq!(lit.ty(), Type::HALF);

    let mut lit = Expr::float_literal(0.5);
    assert!(!lit.resolve_literal(crate::ScalarKind::Int));
    assert_eq!(lit.ty(), Type::FLOAT);

    let mut lit = Expr::bool_literal(true);
    assert!(!lit.resolve_literal(crate::ScalarKind::Float));
    assert!(lit.resolve_literal(crate::ScalarKind::Bool));
    assert_eq!(lit.ty(), Type::BOOL);
}

#[test]
fn binary_description_is_fully_parenthesized() {
    let a = Var::new(Type::INT, "a");
    let b = Var::new(Type::INT, "b");
    let inner = binary(BinaryOp::Sub, var_ref(&a), Expr::int_literal(1), Type::INT);
    let outer = binary(BinaryOp::Mul, var_ref(&b), inner, Type::INT);
    assert_eq!(outer.description(), "(b * (a - 1))");
}

#[test]
fn comma_description_spaces_both_sides() {
    let a = Var::new(Type::INT, "a");
    let b = Var::new(Type::INT, "b");
    let e = binary(BinaryOp::Comma, var_ref(&a), var_ref(&b), Type::INT);
    assert_eq!(e.description(), "(a , b)");
}

#[test]
fn unary_descriptions_attach_directly() {
    let a = Var::new(Type::INT, "a");
    let pre = Expr::new(ExprKind::Unary {
        op: UnaryOp::Inc,
        fix: Fixity::Prefix,
        operand: Box::new(var_ref(&a)),
    });
    assert_eq!(pre.description(), "++a");

    let post = Expr::new(ExprKind::Unary {
        op: UnaryOp::Dec,
        fix: Fixity::Postfix,
        operand: Box::new(var_ref(&a)),
    });
    assert_eq!(post.description(), "a--");
}

#[test]
fn construct_description_preserves_nesting() {
    let inner = Expr::new(ExprKind::Construct {
        ty: Type::FLOAT2,
        args: vec![Expr::float_literal(0.0), Expr::float_literal(1.0)],
    });
    let outer = Expr::new(ExprKind::Construct {
        ty: Type::FLOAT3,
        args: vec![inner, Expr::float_literal(-2.0)],
    });
    assert_eq!(outer.description(), "float3(float2(0.0, 1.0), -2.0)");
}

#[test]
fn assignability() {
    let a = Var::new(Type::INT, "a");
    let b = Var::new(Type::INT, "b");
    assert!(var_ref(&a).is_assignable());
    assert!(!Expr::int_literal(1).is_assignable());
    assert!(!binary(BinaryOp::Add, var_ref(&a), var_ref(&b), Type::INT).is_assignable());

    // An assignment resolves to its (assignable) target.
    let assign = binary(BinaryOp::AddAssign, var_ref(&a), var_ref(&b), Type::INT);
    assert!(assign.is_assignable());

    // A comma takes its right operand's assignability.
    let comma = binary(BinaryOp::Comma, Expr::int_literal(1), var_ref(&b), Type::INT);
    assert!(comma.is_assignable());
    let comma = binary(BinaryOp::Comma, var_ref(&b), Expr::int_literal(1), Type::INT);
    assert!(!comma.is_assignable());

    assert!(Expr::poison().is_assignable());
}

#[test]
fn poison_answers_safely() {
    let poison = Expr::poison();
    assert!(poison.is_poison());
    assert_eq!(poison.ty(), Type::BOOL);
    assert_eq!(poison.description(), "<poison>");
}

#[test]
fn operator_symbols() {
    assert_eq!(BinaryOp::Add.as_symbol(), "+");
    assert_eq!(BinaryOp::ShlAssign.as_symbol(), "<<=");
    assert_eq!(BinaryOp::Comma.as_symbol(), ",");
    assert_eq!(UnaryOp::BitNot.as_symbol(), "~");
    assert_eq!(UnaryOp::Inc.to_string(), "++");
    assert_eq!(BinaryOp::NotEq.to_string(), "!=");
}

#[test]
fn operator_categories() {
    use crate::ScalarKind;
    assert!(BinaryOp::Add.operand_category().permits(ScalarKind::Float));
    assert!(!BinaryOp::Add.operand_category().permits(ScalarKind::Bool));
    assert!(BinaryOp::Shl.operand_category().permits(ScalarKind::Int));
    assert!(!BinaryOp::Shl.operand_category().permits(ScalarKind::Float));
    assert!(BinaryOp::And.operand_category().permits(ScalarKind::Bool));
    assert!(!BinaryOp::And.operand_category().permits(ScalarKind::Int));
    assert!(BinaryOp::Eq.operand_category().permits(ScalarKind::Bool));
}

#[test]
fn assignment_predicates() {
    assert!(BinaryOp::Assign.is_assignment());
    assert!(BinaryOp::BitXorAssign.is_assignment());
    assert!(!BinaryOp::Assign.is_compound_assignment());
    assert!(BinaryOp::AddAssign.is_compound_assignment());
    assert!(!BinaryOp::Add.is_assignment());
    assert!(BinaryOp::Lt.yields_bool());
    assert!(BinaryOp::Or.yields_bool());
    assert!(!BinaryOp::Add.yields_bool());
}

#[test]
fn block_description() {
    let empty = Stmt::new(StmtKind::Block(Vec::new()));
    assert_eq!(empty.description(), "{ }");

    let a = Var::new(Type::INT, "a");
    let stmt = Stmt::new(StmtKind::Expr(binary(
        BinaryOp::Assign,
        var_ref(&a),
        Expr::int_literal(1),
        Type::INT,
    )));
    let block = Stmt::new(StmtKind::Block(vec![stmt, Stmt::nop()]));
    assert_eq!(block.description(), "{ (a = 1); ; }");
}

#[test]
fn declare_description() {
    let a = Var::new(Type::HALF4, "a");
    let plain = Stmt::new(StmtKind::Declare {
        var: a.clone(),
        init: None,
    });
    assert_eq!(plain.description(), "half4 a;");

    let b = Var::new(Type::INT, "b");
    let with_init = Stmt::new(StmtKind::Declare {
        var: b.clone(),
        init: Some(Expr::int_literal(2)),
    });
    assert_eq!(with_init.description(), "int b = 2;");
}

#[test]
fn for_description_with_empty_slots() {
    let stmt = Stmt::new(StmtKind::For {
        init: Box::new(Stmt::nop()),
        cond: None,
        next: None,
        body: Box::new(Stmt::new(StmtKind::Block(Vec::new()))),
    });
    assert_eq!(stmt.description(), "for (; ; ) { }");
}

#[test]
fn do_description() {
    let stmt = Stmt::new(StmtKind::Do {
        body: Box::new(Stmt::new(StmtKind::Block(Vec::new()))),
        cond: Expr::bool_literal(true),
    });
    assert_eq!(stmt.description(), "do { } while (true);");
}

#[test]
fn nop_and_poison_statements() {
    assert_eq!(Stmt::nop().description(), ";");
    assert_eq!(Stmt::poison().description(), "<poison>;");
    assert!(Stmt::poison().is_poison());
}

proptest! {
    #[test]
    fn int_literal_descriptions_reparse(value in any::<i64>()) {
        let text = Expr::int_literal(value).description();
        prop_assert_eq!(text.parse::<i64>().ok(), Some(value));
    }

    #[test]
    fn float_literal_descriptions_reparse(bits in any::<u32>()) {
        let value = f32::from_bits(bits);
        prop_assume!(value.is_finite());
        let text = Expr::float_literal(value).description();
        prop_assert!(text.contains(['.', 'e', 'E']), "no fraction or exponent in {}", text);
        prop_assert_eq!(text.parse::<f32>().ok(), Some(value));
    }
}
