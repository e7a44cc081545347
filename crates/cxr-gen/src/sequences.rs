//! Pre-order enumeration of every operation sequence up to a depth.

use std::iter::FusedIterator;

use crate::errors::GenerateError;
use crate::op::{Op, OpSequence};

/// Longest sequence the generator enumerates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxDepth(usize);

impl MaxDepth {
    /// Depth of the accessor set a standard interpreter registers (`car` .. `cddddr`).
    pub const REFERENCE: MaxDepth = MaxDepth(4);

    pub const fn new(depth: usize) -> Self {
        MaxDepth(depth)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl TryFrom<i64> for MaxDepth {
    type Error = GenerateError;

    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        usize::try_from(depth)
            .map(MaxDepth)
            .map_err(|_| GenerateError::invalid_argument(depth))
    }
}

/// Number of accessors for `depth`: `2^(depth+1) - 2`, or `None` on overflow.
pub fn expected_fragment_count(depth: MaxDepth) -> Option<usize> {
    let shift = u32::try_from(depth.get().checked_add(1)?).ok()?;
    1usize.checked_shl(shift).map(|n| n - 2)
}

/// Lazily yields sequences in pre-order: a sequence comes right before its
/// extensions, and `Head` is explored before `Tail`.
///
/// For depth 2 this is `a, aa, ad, d, da, dd`.
#[derive(Clone, Debug)]
pub struct Sequences {
    max_depth: usize,
    current: Vec<Op>,
    exhausted: bool,
}

impl Sequences {
    pub fn new(max_depth: MaxDepth) -> Self {
        Self {
            max_depth: max_depth.get(),
            current: Vec::new(),
            exhausted: false,
        }
    }

    /// Moves `current` to its pre-order successor. Returns false once the
    /// enumeration wraps back to the empty sequence.
    fn advance(&mut self) -> bool {
        if self.current.len() < self.max_depth {
            self.current.push(Op::Head);
            return true;
        }

        while self.current.last() == Some(&Op::Tail) {
            self.current.pop();
        }
        match self.current.last_mut() {
            Some(last) => {
                *last = Op::Tail;
                true
            }
            None => false,
        }
    }
}

impl Iterator for Sequences {
    type Item = OpSequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.advance() {
            self.exhausted = true;
            return None;
        }
        OpSequence::new(&self.current)
    }
}

impl FusedIterator for Sequences {}
