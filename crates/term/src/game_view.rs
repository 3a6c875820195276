//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Where the field frame lands inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the playfield.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
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

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can keep one framebuffer across frames; nothing here allocates
    /// unless the viewport grows.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let frame = self.frame(viewport);
        draw_border(fb, frame, Style::new(Rgb::new(200, 200, 200), SCREEN_BG));

        // Settled cells.
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                match PieceKind::from_code(code) {
                    Some(kind) => self.draw_block(fb, frame, x as u16, y as u16, kind),
                    None => self.draw_empty(fb, frame, x as u16, y as u16),
                }
            }
        }

        // Active piece; rows above the field are not drawn.
        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(fb, frame, x as u16, y as u16, active.kind);
                }
            }
        }

        draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            draw_overlay(fb, frame, "GAME OVER", Some("r: new game"));
        } else if snap.paused {
            draw_overlay(fb, frame, "PAUSED", None);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = Style::new(Rgb::new(90, 90, 100), FIELD_BG).dim();
        self.fill_cell(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = Style::new(kind_color(kind), FIELD_BG).bold();
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: Style) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: Style) {
    let Frame { x, y, w, h } = frame;
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

fn draw_side_panel(fb: &mut FrameBuffer, snap: &SessionSnapshot, viewport: Viewport, frame: Frame) {
    let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 8 {
        return;
    }

    let label = Style::default().bold();
    let value = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

    let mut y = frame.y;
    fb.put_str(panel_x, y, "SCORE", label);
    fb.put_u32(panel_x, y + 1, snap.score, value);
    y += 3;

    fb.put_str(panel_x, y, "LINES", label);
    fb.put_u32(panel_x, y + 1, snap.lines, value);
    y += 3;

    let hint = value.dim();
    for line in ["←→ move", "↑ rotate", "↓ drop", "esc pause", "q quit"] {
        if y >= viewport.height {
            break;
        }
        fb.put_str(panel_x, y, line, hint);
        y += 1;
    }
}

fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, text: &str, detail: Option<&str>) {
    let style = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let mid_y = frame.y.saturating_add(frame.h / 2);
    fb.put_str(centered(frame, text), mid_y, text, style);
    if let Some(detail) = detail {
        fb.put_str(centered(frame, detail), mid_y + 1, detail, Style::new(style.fg, SCREEN_BG));
    }
}

fn centered(frame: Frame, text: &str) -> u16 {
    let text_w = text.chars().count() as u16;
    frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2)
}

/// Display colour for each kind.
pub fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::J => Rgb::new(30, 144, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(0, 200, 0),
        PieceKind::T => Rgb::new(238, 130, 238),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}
