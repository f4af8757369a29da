use std::io::{self, Write};

use crossterm::style::{self, Color};
use crossterm::{cursor, execute, queue, terminal};

use lightcycle_core::controller::Hud;
use lightcycle_core::player::PlayerColor;
use lightcycle_core::surface::Surface;
use lightcycle_duel::grid::CELL_SIZE;

const ARENA_BG: Color = Color::Rgb {
    r: 8,
    g: 8,
    b: 16,
};
const BORDER: Color = Color::Rgb {
    r: 70,
    g: 70,
    b: 110,
};
const TEXT: Color = Color::Rgb {
    r: 220,
    g: 220,
    b: 230,
};
const HINT: Color = Color::Rgb {
    r: 255,
    g: 210,
    b: 60,
};

/// Status line plus restart hint below the arena.
const HUD_ROWS: u16 = 2;

fn to_color(c: PlayerColor) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Pixel surface shown in a terminal.
///
/// One grid cell is one terminal column wide and half a terminal row tall:
/// each character is an upper half block whose foreground is the upper cell
/// and whose background is the lower cell.
pub struct TerminalSurface {
    width: u32,
    height: u32,
    columns: usize,
    rows: usize,
    cells: Vec<Option<PlayerColor>>,
}

impl TerminalSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let columns = (width / CELL_SIZE as u32) as usize;
        let rows = (height / CELL_SIZE as u32) as usize;
        Self {
            width,
            height,
            columns,
            rows,
            cells: vec![None; columns * rows],
        }
    }

    /// Terminal columns and rows needed to show the arena, its border and the HUD.
    pub fn required_size(&self) -> (u16, u16) {
        Self::required_size_for(self.width, self.height)
    }

    /// [`required_size`](Self::required_size) for a surface of `width × height`
    /// pixels, without allocating one.
    pub fn required_size_for(width: u32, height: u32) -> (u16, u16) {
        let columns = width / CELL_SIZE as u32;
        let rows = height / CELL_SIZE as u32;
        let cols = columns.saturating_add(2);
        let text_rows = rows.div_ceil(2).saturating_add(2 + u32::from(HUD_ROWS));
        (
            u16::try_from(cols).unwrap_or(u16::MAX),
            u16::try_from(text_rows).unwrap_or(u16::MAX),
        )
    }

    /// Color of the grid cell at `(column, row)`.
    pub fn cell(&self, column: usize, row: usize) -> Option<PlayerColor> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[row * self.columns + column]
    }

    /// Queue the full frame (border, arena, HUD) and flush it.
    pub fn present<W: Write>(&self, out: &mut W, title: &str, hud: &Hud) -> io::Result<()> {
        let inner = self.columns;
        let text_rows = self.rows.div_ceil(2);

        queue!(out, cursor::MoveTo(0, 0), style::SetForegroundColor(BORDER))?;
        queue!(out, style::Print(top_border(title, inner)))?;

        for text_row in 0..text_rows {
            let y = u16::try_from(text_row + 1).unwrap_or(u16::MAX);
            queue!(
                out,
                cursor::MoveTo(0, y),
                style::SetForegroundColor(BORDER),
                style::SetBackgroundColor(Color::Reset),
                style::Print('│')
            )?;
            for column in 0..inner {
                let upper = self.cell(column, text_row * 2);
                let lower = self.cell(column, text_row * 2 + 1);
                queue!(
                    out,
                    style::SetForegroundColor(upper.map_or(ARENA_BG, to_color)),
                    style::SetBackgroundColor(lower.map_or(ARENA_BG, to_color)),
                    style::Print('▀')
                )?;
            }
            queue!(
                out,
                style::SetForegroundColor(BORDER),
                style::SetBackgroundColor(Color::Reset),
                style::Print('│')
            )?;
        }

        let bottom = u16::try_from(text_rows + 1).unwrap_or(u16::MAX);
        queue!(
            out,
            cursor::MoveTo(0, bottom),
            style::Print(format!("└{}┘", "─".repeat(inner)))
        )?;

        queue!(
            out,
            cursor::MoveTo(0, bottom + 1),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::SetForegroundColor(TEXT),
            style::Print(&hud.status),
            cursor::MoveTo(0, bottom + 2),
            terminal::Clear(terminal::ClearType::CurrentLine),
        )?;
        if hud.restart_visible {
            queue!(
                out,
                style::SetForegroundColor(HINT),
                style::Print("[ Enter / r: restart ]  Esc: quit")
            )?;
        }

        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

fn top_border(title: &str, inner: usize) -> String {
    let label = format!(" {title} ");
    let label_len = label.chars().count();
    if label_len + 2 > inner {
        return format!("┌{}┐", "─".repeat(inner));
    }
    let left = 2;
    let right = inner - left - label_len;
    format!("┌{}{label}{}┐", "─".repeat(left), "─".repeat(right))
}

impl Surface for TerminalSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: PlayerColor) {
        if width == 0 || height == 0 {
            return;
        }
        let cell = CELL_SIZE as i64;
        let (x, y) = (i64::from(x), i64::from(y));
        let col_start = x.div_euclid(cell).max(0);
        let row_start = y.div_euclid(cell).max(0);
        let col_end = (x + i64::from(width) - 1)
            .div_euclid(cell)
            .min(self.columns as i64 - 1);
        let row_end = (y + i64::from(height) - 1)
            .div_euclid(cell)
            .min(self.rows as i64 - 1);

        for row in row_start..=row_end {
            for column in col_start..=col_end {
                self.cells[row as usize * self.columns + column as usize] = Some(color);
            }
        }
    }
}

/// Raw mode plus alternate screen for the lifetime of the guard.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
