//! Operation markers and the sequences built from them.

use std::fmt;

/// A single list access step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Op {
    /// Take the first element of a pair (`car`).
    Head,
    /// Take the rest of a pair (`cdr`).
    Tail,
}

impl Op {
    /// The letter this step contributes to an accessor name.
    pub fn letter(self) -> char {
        match self {
            Op::Head => 'a',
            Op::Tail => 'd',
        }
    }

    /// The name of the single-step accessor, i.e. `car` or `cdr`.
    pub fn accessor(self) -> &'static str {
        match self {
            Op::Head => "car",
            Op::Tail => "cdr",
        }
    }
}

/// Order in which a rendered body applies the steps of a sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallOrder {
    /// The rightmost letter is applied first: `cadr` is the head of the tail.
    #[default]
    Conventional,
    /// Letters are applied left to right: `cadr` is the tail of the head.
    NameOrder,
}

/// A non-empty run of [`Op`]s, in name order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OpSequence {
    ops: Vec<Op>,
}

impl OpSequence {
    /// Returns `None` for an empty slice; the empty sequence is never an accessor.
    pub fn new(ops: &[Op]) -> Option<Self> {
        if ops.is_empty() {
            return None;
        }
        Some(Self { ops: ops.to_vec() })
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Always false for a sequence built through [`OpSequence::new`].
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The accessor name, e.g. `cadr` for `[Head, Tail]`.
    pub fn name(&self) -> String {
        let mut name = String::with_capacity(self.ops.len() + 2);
        name.push('c');
        name.extend(self.ops.iter().map(|op| op.letter()));
        name.push('r');
        name
    }

    /// The steps in the order a body applies them to the argument.
    pub fn applications(&self, order: CallOrder) -> Box<dyn Iterator<Item = Op> + '_> {
        match order {
            CallOrder::Conventional => Box::new(self.ops.iter().rev().copied()),
            CallOrder::NameOrder => Box::new(self.ops.iter().copied()),
        }
    }
}

impl fmt::Display for OpSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
