//! TopicView: the topic menu, also used for loading and error notices.

use crate::bidi::display_order;
use crate::board_view::{draw_border, Viewport};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub const TITLE: &str = "MEMORY MATCH";
pub const HINT: &str = "up/down choose  enter play  q quit";

/// One-line message under the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    Info(&'a str),
    Error(&'a str),
}

#[derive(Debug, Clone, Copy)]
pub struct TopicScene<'a> {
    /// Menu entries: display name and optional entry count.
    pub items: &'a [(String, Option<u64>)],
    pub selected: usize,
    pub notice: Option<Notice<'a>>,
}

pub struct TopicView {
    width: u16,
    reverse_rtl: bool,
}

impl Default for TopicView {
    fn default() -> Self {
        Self {
            width: 44,
            reverse_rtl: true,
        }
    }
}

impl TopicView {
    pub fn with_reverse_rtl(mut self, reverse_rtl: bool) -> Self {
        self.reverse_rtl = reverse_rtl;
        self
    }

    /// First visible item when `visible` rows are available.
    pub fn scroll_offset(selected: usize, visible: usize) -> usize {
        if visible == 0 {
            return selected;
        }
        selected.saturating_sub(visible - 1)
    }

    pub fn render_into(&self, scene: &TopicScene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let title = CellStyle::new(Rgb::new(255, 220, 80), Rgb::new(0, 0, 0)).bold();
        let normal = CellStyle::default();
        let highlight = CellStyle::new(Rgb::new(20, 20, 30), Rgb::new(235, 235, 240)).bold();
        let dim = CellStyle::default().dim();

        let box_w = self.width.min(viewport.width);
        let x = viewport.width.saturating_sub(box_w) / 2;

        fb.put_str_centered(x, 1, box_w, TITLE, title);
        fb.put_str_centered(x, 2, box_w, "choose a topic", dim);

        // Rows 4.. up to the notice line, inside a border.
        let list_y = 4u16;
        let box_h = viewport.height.saturating_sub(list_y + 3);
        draw_border(fb, x, list_y, box_w, box_h, normal);
        let visible = box_h.saturating_sub(2) as usize;
        let inner_w = box_w.saturating_sub(4);

        if scene.items.is_empty() {
            fb.put_str_centered(x + 2, list_y + 1, inner_w, "(no topics found)", dim);
        }

        let offset = Self::scroll_offset(scene.selected, visible);
        for (row, (i, (name, entries))) in scene
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let y = list_y + 1 + row as u16;
            let style = if i == scene.selected { highlight } else { normal };
            fb.fill_rect(x + 1, y, box_w.saturating_sub(2), 1, ' ', style);

            let count = entries.map(|n| n.to_string()).unwrap_or_default();
            let count_w = count.len() as u16;
            let name_w = inner_w.saturating_sub(count_w + 1);
            fb.put_str_max(
                x + 2,
                y,
                &display_order(name, self.reverse_rtl),
                name_w,
                style,
            );
            if !count.is_empty() {
                let count_style = if i == scene.selected { style } else { dim };
                fb.put_str((x + 2 + inner_w).saturating_sub(count_w), y, &count, count_style);
            }
        }

        let notice_y = viewport.height.saturating_sub(2);
        match scene.notice {
            Some(Notice::Info(msg)) => {
                fb.put_str_centered(0, notice_y, viewport.width, msg, normal);
            }
            Some(Notice::Error(msg)) => {
                let style = CellStyle::new(Rgb::new(255, 110, 110), Rgb::new(0, 0, 0)).bold();
                fb.put_str_centered(0, notice_y, viewport.width, msg, style);
            }
            None => {}
        }
        fb.put_str_centered(0, viewport.height.saturating_sub(1), viewport.width, HINT, dim);
    }

    pub fn render(&self, scene: &TopicScene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }
}
