use std::io;

use crossterm::terminal;

/// Current viewport width in columns, read synchronously.
pub fn width() -> io::Result<u16> {
    let (width, _height) = terminal::size()?;
    Ok(width)
}
