use crate::model::{Glyph, Projection};
use crossterm::{queue, style::Print, style::ResetColor};
use std::io::{self, Write};

/// One row of glyphs plus the depth that put each one there.
#[derive(Clone, Debug)]
pub(crate) struct Frame {
    cells: Vec<char>,
    depth: Vec<Option<f64>>,
}

impl Frame {
    /// `width + 1` blank columns with no depth recorded.
    pub(crate) fn new(width: usize) -> Self {
        Self {
            cells: vec![' '; width + 1],
            depth: vec![None; width + 1],
        }
    }

    /// Depth-tested write. Returns whether the light became visible.
    ///
    /// A cell already holding an equal or nearer depth keeps its glyph.
    pub(crate) fn plot(&mut self, p: Projection) -> bool {
        let Some(slot) = self.depth.get_mut(p.column) else {
            return false;
        };
        if matches!(*slot, Some(d) if p.depth <= d) {
            return false;
        }
        *slot = Some(p.depth);
        self.cells[p.column] = Glyph::from_depth(p.depth).ch();
        true
    }

    pub(crate) fn to_line(&self) -> String {
        self.cells.iter().collect()
    }
}

/// Scrolling line output. Nothing is redrawn in place; every frame is a new line.
pub(crate) struct Console<W: Write> {
    out: W,
    margin: String,
}

impl<W: Write> Console<W> {
    pub(crate) fn new(out: W, margin: usize) -> Self {
        Self {
            out,
            margin: " ".repeat(margin),
        }
    }

    pub(crate) fn banner(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            Print("\n"),
            Print("This is a smol script to test terminal auto scroll :)\n"),
            Print("Press Ctrl + C to stop\n"),
            Print("\n")
        )?;
        self.out.flush()
    }

    pub(crate) fn present(&mut self, frame: &Frame) -> io::Result<()> {
        let line = format!("{}{}\n", self.margin, frame.to_line());
        queue!(self.out, Print(line))?;
        self.out.flush()
    }

    /// Farewell line; the colour reset undoes anything the shell left behind.
    pub(crate) fn farewell(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\n"), Print("bye o/"), ResetColor, Print("\n\n"))?;
        self.out.flush()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}
