//! Renderers turn an operation sequence into one registration entry.
//!
//! Each renderer targets the primitive-table syntax of one host. The output of
//! a single call is a complete entry including its trailing separator, so the
//! concatenation of all entries can be pasted between the opening and closing
//! brackets of the host's table literal.

use crate::op::{CallOrder, OpSequence};

/// Maps an accessor's sequence to the source text that registers it.
pub trait Renderer {
    fn render(&self, seq: &OpSequence) -> String;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, seq: &OpSequence) -> String {
        (**self).render(seq)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, seq: &OpSequence) -> String {
        (**self).render(seq)
    }
}

/// The registration syntaxes shipped with the generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Template {
    /// Lambda entries for a C++ `Variable` primitive table.
    #[default]
    CppLambda,
    /// `Primitive::new` entries for a Rust `Vec<Primitive>` table.
    RustClosure,
    /// Bare accessor names, one per line.
    Names,
}

impl Template {
    pub fn renderer(self, order: CallOrder) -> Box<dyn Renderer> {
        match self {
            Template::CppLambda => Box::new(CppLambda { order }),
            Template::RustClosure => Box::new(RustClosure { order }),
            Template::Names => Box::new(Names),
        }
    }
}

/// Renders
///
/// ```text
/// Variable("cadr", [](const Variable& args, Environment& env)->Variable{
///     return FIRST_ARG(args).cdr().car();
/// }),
/// ```
///
/// followed by an empty line.
#[derive(Clone, Copy, Debug, Default)]
pub struct CppLambda {
    pub order: CallOrder,
}

impl Renderer for CppLambda {
    fn render(&self, seq: &OpSequence) -> String {
        let mut code = format!(
            "Variable(\"{}\", [](const Variable& args, Environment& env)->Variable{{\n",
            seq.name()
        );
        code.push_str("\treturn FIRST_ARG(args)");
        for op in seq.applications(self.order) {
            code.push('.');
            code.push_str(op.accessor());
            code.push_str("()");
        }
        code.push_str(";\n}),\n\n");
        code
    }
}

/// Renders `Primitive::new("cadr", |args, _env| first_arg(args)?.cdr()?.car()),`.
///
/// Every step is fallible on the consumer side, so each call but the last is
/// followed by `?` and the closure returns the final `Result` unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct RustClosure {
    pub order: CallOrder,
}

impl Renderer for RustClosure {
    fn render(&self, seq: &OpSequence) -> String {
        let mut code = format!("Primitive::new(\"{}\", |args, _env| first_arg(args)", seq.name());
        for op in seq.applications(self.order) {
            code.push_str("?.");
            code.push_str(op.accessor());
            code.push_str("()");
        }
        code.push_str("),\n");
        code
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Names;

impl Renderer for Names {
    fn render(&self, seq: &OpSequence) -> String {
        format!("{}\n", seq.name())
    }
}
