//! Interactive prompt loop: read note ids, print note texts.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::NotesCli;

/// Input that ends the session.
pub const QUIT: &str = "\\q";

/// Prompt for ids on `input` and print each note's text, or the error, to
/// `output`.
///
/// Returns when `\q` is entered or `input` is exhausted.
pub async fn run<R, W>(cli: &NotesCli, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(output, "enter {QUIT} to quit")?;
    loop {
        write!(output, "\nid=")?;
        output.flush()?;
        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };
        let id = line.trim();
        if id == QUIT {
            return Ok(());
        }
        match cli.get_note_text(id).await {
            Ok(text) => writeln!(output, "{text}")?,
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}
