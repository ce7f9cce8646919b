//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: a HOLD panel, the framed board, then a panel with
//! the NEXT previews and the score block. Panels are dropped when the
//! viewport is too narrow for them; the board always renders.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_LEN};

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

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Width of a side panel in columns (4 minos at the default cell width).
const PANEL_W: u16 = 10;
/// Gap between the board frame and a side panel.
const PANEL_GAP: u16 = 2;

const CONTROLS: &str = "←→ move  ↓ soft  ↑/x/z rotate  space drop  c hold  p pause  r restart  q quit";

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Screen position of the board frame's top-left corner.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Columns and rows needed to show board, panels and the controls line.
    pub fn preferred_size(&self) -> Viewport {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        Viewport::new(frame_w + 2 * (PANEL_W + PANEL_GAP), frame_h + 1)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(viewport);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), WELL_BG),
        );
        self.draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                match PieceKind::from_tag(tag) {
                    Some(kind) => self.draw_mino(fb, frame, x as i8, y as i8, kind),
                    None => self.fill_board_cell(
                        fb,
                        frame,
                        x as i8,
                        y as i8,
                        '·',
                        CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim(),
                    ),
                }
            }
        }

        // Ghost first so the active piece wins where they overlap.
        if let Some(cells) = snap.ghost_cells {
            let style = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG).dim();
            for (x, y) in cells {
                self.fill_board_cell(fb, frame, x, y, '░', style);
            }
        }
        if let Some(active) = snap.active {
            for (x, y) in active.cells {
                self.draw_mino(fb, frame, x, y, active.kind);
            }
        }

        self.draw_hold_panel(fb, snap, frame);
        self.draw_info_panel(fb, snap, viewport, frame);

        match snap.phase {
            GamePhase::Idle => self.draw_banner(fb, frame, "PRESS R", Some("to start")),
            GamePhase::Paused => self.draw_banner(fb, frame, "PAUSED", Some("p to resume")),
            GamePhase::GameOver => self.draw_banner(fb, frame, "GAME OVER", Some("r to restart")),
            GamePhase::Playing => {}
        }

        let controls_y = frame.y + frame.h;
        if controls_y < viewport.height {
            let style = CellStyle::new(Rgb::new(120, 120, 130), SCREEN_BG);
            fb.put_str_centered(0, controls_y, viewport.width, CONTROLS, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            // Leave the last row for the controls line.
            AnchorY::Center => viewport.height.saturating_sub(h + 1) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);
        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    /// Fill one board cell; cells outside the visible board are skipped.
    fn fill_board_cell(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = f.x + 1 + (x as u16) * self.cell_w;
        let py = f.y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_mino(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), WELL_BG).bold();
        self.fill_board_cell(fb, f, x, y, '█', style);
    }

    /// Draw `kind` in its spawn orientation with its box's top-left at (x, y).
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, dim: bool) {
        let mut style = CellStyle::new(piece_color(kind), SCREEN_BG);
        if dim {
            style = style.dim();
        }
        for (mx, my) in get_shape(kind, Rotation::North) {
            let px = x + (mx as u16) * 2;
            fb.fill_rect(px, y + my as u16, 2, 1, '█', style);
        }
    }

    fn draw_hold_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, f: Frame) {
        let Some(x) = f.x.checked_sub(PANEL_W + PANEL_GAP) else {
            return;
        };
        fb.put_str(x, f.y, "HOLD", label_style());
        match snap.hold {
            Some(kind) => self.draw_preview(fb, x, f.y + 2, kind, !snap.can_hold),
            None => {
                fb.put_str(x, f.y + 2, "-", value_style());
            }
        }
    }

    fn draw_info_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let x = f.x + f.w + PANEL_GAP;
        if x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let mut y = f.y;
        fb.put_str(x, y, "NEXT", label_style());
        y += 2;
        for (i, kind) in snap.next_queue.iter().enumerate().take(PREVIEW_LEN) {
            if let Some(kind) = kind {
                self.draw_preview(fb, x, y, *kind, i > 0);
            }
            y += 3;
        }

        for (label, value) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            if y + 1 >= viewport.height {
                return;
            }
            fb.put_str(x, y, label, label_style());
            fb.put_u32(x, y + 1, value, value_style());
            y += 3;
        }

        if y + 1 < viewport.height {
            fb.put_str(x, y, "SPEED", label_style());
            let end = fb.put_u32(x, y + 1, snap.drop_interval_ms, value_style());
            fb.put_str(end, y + 1, "ms", value_style().dim());
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, f: Frame, title: &str, hint: Option<&str>) {
        let mid_y = f.y + f.h / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        // Blank the rows behind the text so it stays readable over the stack.
        fb.fill_rect(f.x + 1, mid_y - 1, f.w - 2, 3, ' ', CellStyle::new(style.fg, SCREEN_BG));
        fb.put_str_centered(f.x, mid_y - 1, f.w, title, style);
        if let Some(hint) = hint {
            fb.put_str_centered(f.x, mid_y + 1, f.w, hint, value_style().dim());
        }
    }
}

fn label_style() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold()
}

fn value_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG)
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
