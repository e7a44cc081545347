//! Calls the accessors spliced in by the build script.

use cxr::{Environment, PrimitiveTable, RuntimeError, Variable};

fn numbers(ns: &[i64]) -> Variable {
    Variable::list(ns.iter().map(|&n| Variable::Number(n)))
}

/// Calls `name` with a single argument.
fn apply(table: &PrimitiveTable, name: &str, arg: Variable) -> Result<Variable, RuntimeError> {
    let mut env = Environment::default();
    table.call(name, &Variable::list([arg]), &mut env)
}

#[test]
fn test_registers_every_reference_accessor() {
    let table = PrimitiveTable::with_accessors();
    assert_eq!(table.len(), 30);

    let names: Vec<_> = table.names().collect();
    assert_eq!(&names[..4], ["car", "caar", "caaar", "caaaar"]);
    assert_eq!(names.last(), Some(&"cddddr"));
}

#[test]
fn test_accessors_follow_the_conventional_order() {
    let table = PrimitiveTable::with_accessors();
    let list = numbers(&[1, 2, 3]);

    assert_eq!(apply(&table, "car", list.clone()), Ok(Variable::Number(1)));
    assert_eq!(apply(&table, "cadr", list.clone()), Ok(Variable::Number(2)));
    assert_eq!(apply(&table, "caddr", list.clone()), Ok(Variable::Number(3)));
    assert_eq!(apply(&table, "cddr", list.clone()), Ok(numbers(&[3])));
    assert_eq!(apply(&table, "cdddr", list), Ok(Variable::Null));
}

#[test]
fn test_nested_lists() {
    let table = PrimitiveTable::with_accessors();
    // ((1 2) 3)
    let nested = Variable::list([numbers(&[1, 2]), Variable::Number(3)]);

    assert_eq!(apply(&table, "caar", nested.clone()), Ok(Variable::Number(1)));
    assert_eq!(apply(&table, "cadar", nested.clone()), Ok(Variable::Number(2)));
    assert_eq!(apply(&table, "cdar", nested), Ok(numbers(&[2])));
}

#[test]
fn test_non_pair_is_an_error() {
    let table = PrimitiveTable::with_accessors();
    let err = apply(&table, "caddr", numbers(&[1, 2])).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::NotAPair {
            operation: "car",
            found: "()".to_owned(),
        }
    );
}

#[test]
fn test_missing_argument() {
    let table = PrimitiveTable::with_accessors();
    let mut env = Environment::default();
    let err = table.call("cadr", &Variable::Null, &mut env).unwrap_err();
    assert_eq!(err, RuntimeError::MissingArgument);
}

#[test]
fn test_unknown_primitive() {
    let table = PrimitiveTable::with_accessors();
    let err = apply(&table, "caddddr", numbers(&[1])).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::UnknownPrimitive {
            name: "caddddr".to_owned()
        }
    );
}
