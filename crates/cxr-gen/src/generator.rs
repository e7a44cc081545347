//! Ties enumeration and rendering together.

use std::io::Write;

use crate::errors::GenerateResult;
use crate::render::Renderer;
use crate::sequences::{MaxDepth, Sequences};

/// Produces one fragment per accessor up to `max_depth`, in pre-order.
#[derive(Clone, Debug)]
pub struct Generator<R> {
    max_depth: MaxDepth,
    renderer: R,
}

impl<R: Renderer> Generator<R> {
    pub fn new(max_depth: MaxDepth, renderer: R) -> Self {
        Self {
            max_depth,
            renderer,
        }
    }

    pub fn max_depth(&self) -> MaxDepth {
        self.max_depth
    }

    /// Lazily renders every fragment.
    pub fn fragments(&self) -> impl Iterator<Item = String> + '_ {
        Sequences::new(self.max_depth).map(|seq| self.renderer.render(&seq))
    }

    /// Writes all fragments to `out` and returns how many were written.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> GenerateResult<usize> {
        tracing::debug!(depth = self.max_depth.get(), "Generating accessors");

        let mut count = 0;
        for fragment in self.fragments() {
            out.write_all(fragment.as_bytes())?;
            count += 1;
        }
        out.flush()?;

        tracing::debug!(count, "Accessor generation finished");
        Ok(count)
    }
}

/// Renders every accessor up to `max_depth` into a list of fragments.
///
/// A negative depth is rejected before anything is rendered.
pub fn generate<R: Renderer>(max_depth: i64, renderer: R) -> GenerateResult<Vec<String>> {
    let max_depth = MaxDepth::try_from(max_depth)?;
    Ok(Generator::new(max_depth, renderer).fragments().collect())
}
