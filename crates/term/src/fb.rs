//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
///
/// One `char` per cell. Combining marks (Hebrew vowel points, Latin
/// diacritics) are dropped on write since they have no cell of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` from `(x, y)`; returns the number of cells written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        self.put_str_max(x, y, s, u16::MAX, style)
    }

    /// Like [`FrameBuffer::put_str`] but writes at most `max` cells.
    pub fn put_str_max(&mut self, x: u16, y: u16, s: &str, max: u16, style: CellStyle) -> u16 {
        let mut written = 0u16;
        for ch in s.chars().filter(|c| !is_combining(*c)) {
            if written >= max {
                break;
            }
            let cx = x.saturating_add(written);
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            written += 1;
        }
        written
    }

    /// Write `s` centered within `[x, x + w)`, truncated to fit.
    pub fn put_str_centered(&mut self, x: u16, y: u16, w: u16, s: &str, style: CellStyle) {
        let len = text_width(s).min(w);
        let start = x.saturating_add((w - len) / 2);
        self.put_str_max(start, y, s, len, style);
    }

    pub fn put_usize(&mut self, x: u16, y: u16, v: usize, style: CellStyle) -> u16 {
        self.put_str(x, y, &v.to_string(), style)
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// All characters, one line per row (test and debugging helper).
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }
}

/// Number of cells `s` occupies.
pub fn text_width(s: &str) -> u16 {
    let n = s.chars().filter(|c| !is_combining(*c)).count();
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Combining marks common in the datasets: Latin diacritics and Hebrew points.
fn is_combining(ch: char) -> bool {
    matches!(
        ch as u32,
        0x0300..=0x036F | 0x0591..=0x05BD | 0x05BF | 0x05C1..=0x05C2 | 0x05C4..=0x05C5 | 0x05C7
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        assert_eq!(fb.put_str(2, 0, "abc", CellStyle::default()), 2);
        assert_eq!(fb.to_text(), "  ab\n");
    }

    #[test]
    fn put_str_skips_vowel_points() {
        let mut fb = FrameBuffer::new(4, 1);
        // shin + shin dot + qamats, lamed, vav + holam, mem
        let written = fb.put_str(0, 0, "שָׁלוֹם", CellStyle::default());
        assert_eq!(written, 4);
        assert_eq!(fb.to_text(), "שלום\n");
        assert_eq!(text_width("שָׁלוֹם"), 4);
    }

    #[test]
    fn centered_text_truncates() {
        let mut fb = FrameBuffer::new(7, 1);
        fb.put_str_centered(0, 0, 7, "abc", CellStyle::default());
        assert_eq!(fb.to_text(), "  abc  \n");

        fb.clear(Cell::default());
        fb.put_str_centered(1, 0, 3, "abcdef", CellStyle::default());
        assert_eq!(fb.to_text(), " abc   \n");
    }

    #[test]
    fn resize_keeps_default_cells() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.resize(3, 2);
        assert_eq!(fb.cells().len(), 6);
        assert_eq!(fb.get(2, 1), Some(Cell::default()));
        assert_eq!(fb.get(3, 0), None);
    }
}
