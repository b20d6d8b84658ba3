use crate::{Expressible, Expression, separated_by};

/// Concatenate the operands' templates with `separator` interleaved,
/// accumulating their bindings in encounter order.
///
/// This is the single flattening step every other composition reduces to;
/// placeholders and bindings stay paired because both sequences grow
/// strictly left to right. Zero operands produce the empty fragment and a
/// single operand passes through unchanged, so no separator ever dangles.
pub fn join(separator: &str, operands: &[&dyn Expressible]) -> Expression {
    let mut template = String::new();
    let mut bindings = Vec::new();
    separated_by(
        &mut template,
        operands,
        |out, operand| {
            let (t, b) = operand.expression().into_parts();
            out.push_str(&t);
            bindings.extend(b);
        },
        separator,
    );
    Expression::new(template, bindings)
}

/// `lhs OP rhs`, parenthesized when `parenthesize` is set so the result
/// keeps its precedence under further composition. Callers pass `true`
/// unless the fragment is known to be consumed alone.
pub fn infix<T>(
    operator: &str,
    lhs: &dyn Expressible,
    rhs: &dyn Expressible,
    parenthesize: bool,
) -> Expression<T> {
    let expression = join(&format!(" {operator} "), &[lhs, rhs]);
    if parenthesize {
        wrap("", &[&expression])
    } else {
        expression.retyped()
    }
}

/// `OP operand(s)`: the operator text followed by the comma-joined
/// operands, without parentheses.
pub fn prefix<T>(operator: &str, operands: &[&dyn Expressible]) -> Expression<T> {
    let (template, bindings) = join(", ", operands).into_parts();
    Expression::new(format!("{operator} {template}"), bindings)
}

/// `NAME(a, b, c)`: SQL function-call text around the comma-joined
/// operands. A sole operand contributes its template as is, so wrapping
/// adds exactly one layer of parentheses and never two.
pub fn wrap<T>(name: &str, operands: &[&dyn Expressible]) -> Expression<T> {
    let (template, bindings) = join(", ", operands).into_parts();
    Expression::new(format!("{name}({template})"), bindings)
}
