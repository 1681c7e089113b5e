use std::io::{self, Write};

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    ExecutableCommand,
};

/// Clears the terminal and homes the cursor before redrawing a view.
pub fn clear() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(terminal::Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()
}
