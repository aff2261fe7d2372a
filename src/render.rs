use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};

use crate::state::State;

pub const LIVE_CELL: char = '*';
const KEYS_INFO: &str = "pause: p  exit: q";
const RESUME_INFO: &str = "press any key to resume";
const TOO_SMALL_INFO: &str = "terminal too small";

/// Draw the field and the status lines for the current state.
pub fn draw<W: Write>(out: &mut W, state: &State) -> io::Result<()> {
    let (cols, rows) = state.size;

    queue!(out, BeginSynchronizedUpdate, Clear(ClearType::All))?;

    match state.grid.as_ref() {
        Some(grid) => {
            for (row, col, cell) in grid.printable() {
                if !cell.is_alive() {
                    continue;
                }
                // The grid can outgrow the viewport between a resize and the
                // next event; skip what isn't visible.
                let (Ok(x), Ok(y)) = (u16::try_from(col), u16::try_from(row)) else {
                    continue;
                };
                if x >= cols || y >= rows {
                    continue;
                }
                queue!(out, MoveTo(x, y), Print(LIVE_CELL))?;
            }
        }
        None => queue!(out, MoveTo(0, 0), Print(TOO_SMALL_INFO))?,
    }

    draw_status(out, state)?;

    queue!(out, EndSynchronizedUpdate)?;
    out.flush()
}

fn draw_status<W: Write>(out: &mut W, state: &State) -> io::Result<()> {
    let (cols, rows) = state.size;
    if rows < 2 {
        return Ok(());
    }

    let live_info = format!("living cells: {}", state.live_cells());
    let generation_info = format!("generation:   {}", state.generation);
    queue!(
        out,
        MoveTo(0, rows - 2),
        Print(clip(&live_info, cols)),
        MoveTo(0, rows - 1),
        Print(clip(&generation_info, cols)),
    )?;

    let keys_info = if state.paused { RESUME_INFO } else { KEYS_INFO };
    let keys_len = keys_info.len() as u16;
    // Right-align the key hints only when they fit beside the generation line
    if cols > keys_len + generation_info.len() as u16 {
        queue!(out, MoveTo(cols - keys_len - 1, rows - 1), Print(keys_info))?;
    }

    Ok(())
}

fn clip(text: &str, cols: u16) -> &str {
    &text[..text.len().min(cols as usize)]
}
