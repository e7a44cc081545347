//! Minimal primitive table populated with the generated list accessors.
//!
//! This is not an interpreter. It provides just enough of a value model for the
//! build-time accessor table to compile and be called: pairs with `car`/`cdr`,
//! a first-argument helper, and a name-indexed table of primitives.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use derive_more::{Display, Error};

include!(concat!(env!("OUT_DIR"), "/accessors.rs"));

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[display("{operation}: expected a pair, got {found}")]
    NotAPair {
        operation: &'static str,
        found: String,
    },

    #[display("Missing argument")]
    MissingArgument,

    #[display("Unknown primitive: {name}")]
    UnknownPrimitive { name: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Variable {
    Null,
    Number(i64),
    Symbol(String),
    Pair(Rc<(Variable, Variable)>),
}

impl Variable {
    pub fn cons(car: Variable, cdr: Variable) -> Self {
        Variable::Pair(Rc::new((car, cdr)))
    }

    /// Builds a proper list from `items`.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Variable>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(Variable::Null, |tail, head| Variable::cons(head, tail))
    }

    pub fn car(&self) -> RuntimeResult<Variable> {
        match self {
            Variable::Pair(pair) => Ok(pair.0.clone()),
            other => Err(other.not_a_pair("car")),
        }
    }

    pub fn cdr(&self) -> RuntimeResult<Variable> {
        match self {
            Variable::Pair(pair) => Ok(pair.1.clone()),
            other => Err(other.not_a_pair("cdr")),
        }
    }

    fn not_a_pair(&self, operation: &'static str) -> RuntimeError {
        RuntimeError::NotAPair {
            operation,
            found: self.to_string(),
        }
    }
}

impl From<i64> for Variable {
    fn from(n: i64) -> Self {
        Variable::Number(n)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Null => write!(f, "()"),
            Variable::Number(n) => write!(f, "{n}"),
            Variable::Symbol(s) => write!(f, "{s}"),
            Variable::Pair(pair) => {
                write!(f, "({}", pair.0)?;
                let mut rest = &pair.1;
                loop {
                    match rest {
                        Variable::Null => break,
                        Variable::Pair(next) => {
                            write!(f, " {}", next.0)?;
                            rest = &next.1;
                        }
                        atom => {
                            write!(f, " . {atom}")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

/// Global definitions visible to primitives. Accessors never consult it.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Variable>,
}

impl Environment {
    pub fn define(&mut self, name: impl Into<String>, value: Variable) {
        self.bindings.insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.bindings.get(name)
    }
}

/// The first element of a primitive's argument list.
pub fn first_arg(args: &Variable) -> RuntimeResult<Variable> {
    args.car().map_err(|_| RuntimeError::MissingArgument)
}

pub type PrimitiveFn = fn(&Variable, &mut Environment) -> RuntimeResult<Variable>;

#[derive(Clone, Copy)]
pub struct Primitive {
    name: &'static str,
    call: PrimitiveFn,
}

impl Primitive {
    pub fn new(name: &'static str, call: PrimitiveFn) -> Self {
        Self { name, call }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: &Variable, env: &mut Environment) -> RuntimeResult<Variable> {
        (self.call)(args, env)
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<primitive {}>", self.name)
    }
}

/// Primitives in registration order, looked up by name.
#[derive(Debug)]
pub struct PrimitiveTable {
    entries: Vec<Primitive>,
    index: HashMap<&'static str, usize>,
}

impl PrimitiveTable {
    pub fn new(entries: Vec<Primitive>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, prim)| (prim.name, i))
            .collect();
        Self { entries, index }
    }

    /// Every composed accessor from `car` to `cddddr`.
    pub fn with_accessors() -> Self {
        Self::new(accessor_table())
    }

    pub fn get(&self, name: &str) -> Option<&Primitive> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|prim| prim.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn call(
        &self,
        name: &str,
        args: &Variable,
        env: &mut Environment,
    ) -> RuntimeResult<Variable> {
        let prim = self
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownPrimitive {
                name: name.to_owned(),
            })?;
        prim.call(args, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let list = Variable::list([1.into(), 2.into(), 3.into()]);
        assert_eq!(list.to_string(), "(1 2 3)");

        let dotted = Variable::cons(1.into(), 2.into());
        assert_eq!(dotted.to_string(), "(1 . 2)");
        assert_eq!(Variable::Null.to_string(), "()");
    }

    #[test]
    fn test_car_of_atom_is_an_error() {
        let err = Variable::Number(5).car().unwrap_err();
        assert_eq!(err.to_string(), "car: expected a pair, got 5");
    }

    #[test]
    fn test_first_arg_of_empty_args() {
        assert_eq!(first_arg(&Variable::Null), Err(RuntimeError::MissingArgument));
    }

    #[test]
    fn test_environment_bindings() {
        let mut env = Environment::default();
        env.define("x", 1.into());
        assert_eq!(env.lookup("x"), Some(&Variable::Number(1)));
        assert_eq!(env.lookup("y"), None);
    }
}
