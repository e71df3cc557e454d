//! BoardView: maps a game snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//!                 topic name
//! ┌──────────────────────────────────────────┐
//! │[    ?     ] ┌──────────┐ ...             │
//! │             │   word   │                 │
//! └──────────────────────────────────────────┘
//! PAIRS 1/10
//!      arrows move  enter flip  n new game  t topics  q quit
//! ```

use crate::bidi::display_order;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{TileId, BOARD_COLUMNS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Everything drawn on the game screen.
#[derive(Debug, Clone, Copy)]
pub struct BoardScene<'a> {
    pub snap: &'a GameSnapshot,
    /// Tile under the cursor.
    pub cursor: Option<TileId>,
    /// Shown above the board.
    pub topic: &'a str,
}

pub const HINT: &str = "arrows move  enter flip  n new game  t topics  q quit";
pub const WIN_TEXT: &str = "WELL DONE!";
const WIN_HINT: &str = "n: new game   t: topics";

const MIN_TILE_W: u16 = 6;

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const BOARD_BG: CellStyle = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
const FACE_DOWN: CellStyle = CellStyle::new(Rgb::new(150, 160, 210), Rgb::new(55, 65, 120));
const FACE_UP: CellStyle = CellStyle::new(Rgb::new(20, 20, 30), Rgb::new(235, 235, 240)).bold();
const MATCHED: CellStyle = CellStyle::new(Rgb::new(235, 255, 235), Rgb::new(45, 120, 70));
const CURSOR: CellStyle = CellStyle::new(Rgb::new(255, 220, 80), Rgb::new(30, 30, 40)).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Tile grid geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub columns: u16,
    pub rows: u16,
    pub tile_w: u16,
    pub tile_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

impl BoardLayout {
    /// Top-left cell of tile `id`.
    pub fn tile_origin(&self, id: TileId) -> (u16, u16) {
        let id = u16::try_from(id).unwrap_or(u16::MAX);
        let col = id % self.columns;
        let row = id / self.columns;
        (
            self.frame_x + 1 + col * (self.tile_w + self.gap_x),
            self.frame_y + 1 + row * (self.tile_h + self.gap_y),
        )
    }
}

/// Terminal renderer for the tile grid.
pub struct BoardView {
    columns: usize,
    max_tile_w: u16,
    anchor_y: AnchorY,
    reverse_rtl: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            columns: BOARD_COLUMNS,
            max_tile_w: 14,
            anchor_y: AnchorY::Center,
            reverse_rtl: true,
        }
    }
}

impl BoardView {
    pub fn new(columns: usize, max_tile_w: u16) -> Self {
        Self {
            columns: columns.max(1),
            max_tile_w: max_tile_w.max(MIN_TILE_W),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Whether Hebrew words are reversed for terminals without bidi support.
    pub fn with_reverse_rtl(mut self, reverse_rtl: bool) -> Self {
        self.reverse_rtl = reverse_rtl;
        self
    }

    /// Geometry for `tiles` tiles in `viewport`.
    ///
    /// Tiles are three rows tall with a blank row between them; on short
    /// terminals they collapse to single rows.
    pub fn layout(&self, tiles: usize, viewport: Viewport) -> BoardLayout {
        let columns = self.columns.min(tiles).max(1) as u16;
        let rows = tiles.div_ceil(columns as usize).max(1) as u16;
        let gap_x = 1;

        let avail_w = viewport.width.saturating_sub(2 + (columns - 1) * gap_x);
        let tile_w = (avail_w / columns).clamp(MIN_TILE_W, self.max_tile_w);
        let frame_w = columns * tile_w + (columns - 1) * gap_x + 2;

        // title + frame + status + hint
        let chrome_h = 3;
        let (tile_h, gap_y) = if rows * 3 + (rows - 1) + 2 + chrome_h <= viewport.height {
            (3, 1)
        } else {
            (1, 0)
        };
        let frame_h = rows * tile_h + (rows - 1) * gap_y + 2;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + chrome_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            columns,
            rows,
            tile_w,
            tile_h,
            gap_x,
            gap_y,
            frame_x,
            frame_y: top + 1,
            frame_w,
            frame_h,
        }
    }

    /// Render the scene into an existing framebuffer.
    pub fn render_into(&self, scene: &BoardScene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let snap = scene.snap;
        let layout = self.layout(snap.tiles.len(), viewport);

        // Title.
        let topic = display_order(scene.topic, self.reverse_rtl);
        fb.put_str_centered(
            layout.frame_x,
            layout.frame_y.saturating_sub(1),
            layout.frame_w,
            &topic,
            LABEL,
        );

        // Board.
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            BOARD_BG,
        );
        draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            BORDER,
        );

        for (id, tile) in snap.tiles.iter().enumerate() {
            let (x, y) = layout.tile_origin(id);
            let (style, text) = if tile.matched {
                (MATCHED, display_order(&tile.word, self.reverse_rtl))
            } else if tile.flipped {
                (FACE_UP, display_order(&tile.word, self.reverse_rtl))
            } else {
                (FACE_DOWN, "?".into())
            };

            fb.fill_rect(x, y, layout.tile_w, layout.tile_h, ' ', style);
            let mid = y + layout.tile_h / 2;
            fb.put_str_centered(x + 1, mid, layout.tile_w - 2, &text, style);

            if scene.cursor == Some(id) {
                let cursor = CellStyle { bg: style.bg, ..CURSOR };
                fb.put_char(x, mid, '[', cursor);
                fb.put_char(x + layout.tile_w - 1, mid, ']', cursor);
            }
        }

        // Status and hint.
        let status_y = layout.frame_y + layout.frame_h;
        let mut x = layout.frame_x;
        x += fb.put_str(x, status_y, "PAIRS ", LABEL);
        x += fb.put_usize(x, status_y, snap.pairs_found, VALUE);
        x += fb.put_str(x, status_y, "/", VALUE);
        fb.put_usize(x, status_y, snap.target, VALUE);

        if snap.round > 0 {
            let round = format!("ROUND {}", snap.round + 1);
            let rx = (layout.frame_x + layout.frame_w).saturating_sub(round.len() as u16);
            fb.put_str(rx, status_y, &round, VALUE.dim());
        }

        fb.put_str_centered(0, status_y + 1, viewport.width, HINT, VALUE.dim());

        if snap.win_announced {
            self.draw_overlay(fb, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &BoardScene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let box_w = (WIN_HINT.len() as u16 + 4).min(layout.frame_w);
        let box_h = 4;
        let x = layout.frame_x + (layout.frame_w - box_w) / 2;
        let y = layout.frame_y + layout.frame_h.saturating_sub(box_h) / 2;

        fb.fill_rect(x, y, box_w, box_h, ' ', style);
        draw_border(fb, x, y, box_w, box_h, style);
        fb.put_str_centered(x + 1, y + 1, box_w.saturating_sub(2), WIN_TEXT, style);
        fb.put_str_centered(
            x + 1,
            y + 2,
            box_w.saturating_sub(2),
            WIN_HINT,
            CellStyle { bold: false, ..style },
        );
    }
}

/// Single-line box border.
pub fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
