//! GameView: maps a [`GameEngine`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameEngine;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellState, GamePhase, Pos};

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

const PLAYFIELD_BG: Rgb = Rgb::new(24, 28, 24);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Glyph and style for one board cell
    pub fn cell_look(state: CellState, is_head: bool) -> (char, CellStyle) {
        match state {
            CellState::Empty => {
                ('·', CellStyle::new(Rgb::new(70, 80, 70), PLAYFIELD_BG).dim())
            }
            CellState::Snake if is_head => {
                ('█', CellStyle::new(Rgb::new(160, 255, 140), PLAYFIELD_BG).bold())
            }
            CellState::Snake => ('█', CellStyle::new(Rgb::new(80, 200, 90), PLAYFIELD_BG)),
            CellState::Apple => {
                ('●', CellStyle::new(Rgb::new(230, 60, 60), PLAYFIELD_BG).bold())
            }
        }
    }

    /// Render the engine into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, engine: &GameEngine, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board = engine.board();
        let frame_w = board.width() * self.cell_w + 2;
        let frame_h = board.height() * self.cell_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let head = engine.snake().head();
        for (pos, state) in board.iter() {
            let (ch, style) = Self::cell_look(state, pos == head);
            self.fill_cell_rect(fb, start_x, start_y, pos, ch, style);
        }

        self.draw_side_panel(fb, engine, viewport, start_x + frame_w + 2, start_y);

        match engine.phase() {
            GamePhase::Idle => {
                draw_banner(fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER");
            }
            GamePhase::Crashed => {
                draw_banner(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            }
            GamePhase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, engine: &GameEngine, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(engine, viewport, &mut fb);
        fb
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: Pos,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + pos.x as u16 * self.cell_w;
        let py = start_y + 1 + pos.y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        engine: &GameEngine,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let rows: [(&str, Option<u32>, &str); 4] = [
            ("LENGTH", Some(engine.snake().len() as u32), ""),
            ("APPLES", Some(engine.apples_eaten()), ""),
            ("SPEED", Some(engine.tick_ms().round() as u32), "ms"),
            ("STATE", None, engine.phase().as_str()),
        ];

        let mut y = start_y;
        for (name, number, text) in rows {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            let mut x = panel_x;
            if let Some(n) = number {
                fb.put_u32(x, y, n, value);
                x += digit_count(n);
            }
            fb.put_str(x, y, text, value);
            y = y.saturating_add(2);
        }
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

fn draw_banner(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let y = start_y.saturating_add(frame_h / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, y, text, style);
}
