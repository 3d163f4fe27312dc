//! Export pretty printed version of core.
//!
//! Abstractions print as `λ.`, recursive abstractions as `μ.` and
//! variables by de Bruijn index as `#i`. Literals print as their text
//! when the literal table is available and as `%i` otherwise.
use crate::common::prettify::ToPretty;
use crate::core::desugar::literal::Literal;
use crate::core::expr::*;
use pretty::{DocAllocator, DocBuilder};

impl ToPretty for Literal {
    fn pretty<'b, D, A>(&'b self, allocator: &'b D) -> DocBuilder<'b, D, A>
    where
        D: DocAllocator<'b, A>,
        D::Doc: Clone,
        A: Clone,
    {
        allocator.text(self.to_string())
    }
}

impl ToPretty for Expr {
    fn pretty<'b, D, A>(&'b self, allocator: &'b D) -> DocBuilder<'b, D, A>
    where
        D: DocAllocator<'b, A>,
        D::Doc: Clone,
        A: Clone,
    {
        expr_doc(self, &[], allocator)
    }
}

impl ToPretty for Program {
    fn pretty<'b, D, A>(&'b self, allocator: &'b D) -> DocBuilder<'b, D, A>
    where
        D: DocAllocator<'b, A>,
        D::Doc: Clone,
        A: Clone,
    {
        expr_doc(&self.expr, &self.literals, allocator)
    }
}

fn literal_doc<'b, D, A>(
    index: usize,
    literals: &'b [Literal],
    allocator: &'b D,
) -> DocBuilder<'b, D, A>
where
    D: DocAllocator<'b, A>,
    D::Doc: Clone,
    A: Clone,
{
    match literals.get(index) {
        Some(literal) => literal.pretty(allocator),
        None => allocator.text(format!("%{}", index)),
    }
}

/// Parenthesised, comma separated operands of a built-in form
fn form_doc<'b, D, A>(
    name: &'static str,
    operands: &'b [Expr],
    literals: &'b [Literal],
    allocator: &'b D,
) -> DocBuilder<'b, D, A>
where
    D: DocAllocator<'b, A>,
    D::Doc: Clone,
    A: Clone,
{
    let operand_docs = operands
        .iter()
        .map(|x| expr_doc(x, literals, allocator));

    allocator
        .text(name)
        .append(allocator.text("("))
        .append(
            allocator
                .intersperse(operand_docs, allocator.text(",").append(allocator.line()))
                .align(),
        )
        .append(allocator.text(")"))
        .group()
}

/// Arrange core expression into pretty doc
fn expr_doc<'b, D, A>(
    expr: &'b Expr,
    literals: &'b [Literal],
    allocator: &'b D,
) -> DocBuilder<'b, D, A>
where
    D: DocAllocator<'b, A>,
    D::Doc: Clone,
    A: Clone,
{
    match expr {
        Expr::Var(i) => allocator.text(format!("#{}", i)),
        Expr::Lit(i) | Expr::Effect(i) => literal_doc(*i, literals, allocator),
        Expr::Abs(body) => allocator
            .text("λ.")
            .append(
                allocator
                    .line()
                    .append(expr_doc(body, literals, allocator))
                    .nest(2),
            )
            .group(),
        Expr::Rec(body) => allocator
            .text("μ.")
            .append(
                allocator
                    .line()
                    .append(expr_doc(body, literals, allocator))
                    .nest(2),
            )
            .group(),
        Expr::App(f, x) => allocator
            .text("(")
            .append(expr_doc(f, literals, allocator))
            .append(
                allocator
                    .line()
                    .append(expr_doc(x, literals, allocator))
                    .nest(2),
            )
            .append(allocator.text(")"))
            .group(),
        Expr::TypeOf(x) => form_doc("type", std::slice::from_ref(&**x), literals, allocator),
        Expr::Unpack(xs) => form_doc("unpack", &xs[..], literals, allocator),
        Expr::Handle(xs) => form_doc("handle", &xs[..], literals, allocator),
        Expr::Compare(xs) => form_doc("compare", &xs[..], literals, allocator),
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::{
        common::prettify::{prettify, prettify_width},
        core::desugar::{desugar_program, DesugarSettings},
        core::expr::acore::*,
        syntax::make,
    };

    #[test]
    pub fn test_bare_expressions() {
        assert_eq!(prettify(&abs(var(0))), "λ. #0\n");
        assert_eq!(prettify(&abs(lit(4))), "λ. %4\n");
        assert_eq!(prettify(&rec(app(var(1), var(0)))), "μ. (#1 #0)\n");
        assert_eq!(prettify(&type_of(var(2))), "type(#2)\n");
    }

    #[test]
    pub fn test_builtin_forms() {
        assert_eq!(
            prettify(&compare(var(3), var(2), var(1), var(0)).abstracted(4)),
            "λ. λ. λ. λ. compare(#3, #2, #1, #0)\n"
        );
        assert_eq!(
            prettify(&handle(var(1), var(0))),
            "handle(#1, #0)\n"
        );
    }

    #[test]
    pub fn test_literals() {
        assert_eq!(prettify(&Literal::Atom("foo".to_string())), "foo\n");
        assert_eq!(prettify(&Literal::Text("foo".to_string())), "\"foo\"\n");
    }

    #[test]
    pub fn test_program() {
        let program = desugar_program(
            &[make::call_named(
                0,
                "f",
                vec![make::atom(2, "a"), make::text(4, "b")],
            )],
            &DesugarSettings::default().with_value("f"),
        )
        .unwrap();
        assert_eq!(prettify(&program), "λ. ((#1 a) \"b\")\n");
    }

    #[test]
    pub fn test_effect_prints_name() {
        let program = desugar_program(
            &[make::name(0, "print!")],
            &DesugarSettings::default(),
        )
        .unwrap();
        assert_eq!(prettify(&program), "λ. print!\n");
    }

    #[test]
    pub fn test_narrow_width_breaks() {
        let text = prettify_width(&abs(app(var(0), var(1))), 4);
        assert!(text.lines().count() > 1);
    }
}
