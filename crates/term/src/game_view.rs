//! GameView: maps a [`PuzzleSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::PuzzleSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::CellState;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

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

/// Where the board frame landed in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// Terminal renderer for any board size.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame placement for a board of the snapshot's size.
    pub fn board_rect(&self, snap: &PuzzleSnapshot, viewport: Viewport) -> BoardRect {
        let w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let h = snap.height.saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        BoardRect { x, y, w, h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &PuzzleSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let rect = self.board_rect(snap, viewport);
        self.draw_border(fb, rect, Style::new(Rgb::new(200, 200, 200), Rgb::BLACK));

        let empty = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for y in 0..snap.height {
            for x in 0..snap.width {
                let Some(cell) = snap.get(x, y) else {
                    continue;
                };
                let (ch, style) = match cell.state {
                    CellState::Locked => ('█', Style::new(cell.color, WELL_BG)),
                    CellState::Moving => ('█', Style::new(cell.color, WELL_BG).bold()),
                    CellState::Empty if cell.ghost => ('░', Style::new(cell.color.half(), WELL_BG).dim()),
                    CellState::Empty => ('·', empty),
                };
                self.fill_cell(fb, rect, x, y, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, rect);

        if snap.game_over {
            self.draw_overlay(fb, rect, &["GAME OVER", "R TO RESTART"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PuzzleSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, rect: BoardRect, style: Style) {
        let BoardRect { x, y, w, h } = rect;
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

    fn fill_cell(&self, fb: &mut FrameBuffer, rect: BoardRect, x: u16, y: u16, ch: char, style: Style) {
        let px = rect.x + 1 + x * self.cell_w;
        let py = rect.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &PuzzleSnapshot, viewport: Viewport, rect: BoardRect) {
        let panel_x = rect.x.saturating_add(rect.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        let mut y = rect.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "PACK", label);
        fb.put_str(panel_x, y + 1, snap.pack.map(|p| p.as_str()).unwrap_or("custom"), value);
        y = y.saturating_add(3);

        // A spent hold shows dimmed until the next lock re-arms it.
        let hold_style = if snap.has_swapped { value.dim() } else { value };
        fb.put_str(panel_x, y, "HOLD", label);
        fb.put_str(panel_x, y + 1, snap.held.unwrap_or("-"), hold_style);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_str(panel_x, y + 1, snap.next.unwrap_or("-"), value);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, rect: BoardRect, lines: &[&str]) {
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::BLACK).bold();
        let top = rect.y.saturating_add(rect.h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = rect.x.saturating_add(rect.w.saturating_sub(text_w) / 2);
            fb.put_str(x, top.saturating_add(i as u16), text, style);
        }
    }
}
