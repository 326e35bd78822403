//! Line-oriented terminal I/O around the game.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::Game;
use crate::engine::{Output, OutputBlock};
use crate::error::GameError;

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Best effort. A terminal that can't be cleared just isn't.
    pub fn clear_screen(&mut self) {
        if let Err(e) = execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0)) {
            tracing::warn!(error = %e, "could not clear the screen");
        }
    }

    pub fn prompt(&mut self) -> Result<(), GameError> {
        write!(self.writer, ">")?;
        self.writer.flush()?;
        Ok(())
    }

    /// One line without its line ending, or `None` at end of input. Bytes
    /// that aren't UTF-8 become U+FFFD instead of failing the read.
    pub fn read_command(&mut self) -> Result<Option<String>, GameError> {
        let mut buf = Vec::new();
        let bytes_read = self.reader.read_until(b'\n', &mut buf)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn show(&mut self, out: &Output) -> Result<(), GameError> {
        let mut printed_anything = false;
        let mut started_events = false;

        for block in &out.blocks {
            match block {
                OutputBlock::Title(t) | OutputBlock::Text(t) => {
                    writeln!(self.writer, "{t}")?;
                }
                OutputBlock::Event(ev) => {
                    if !started_events && printed_anything {
                        writeln!(self.writer)?; // visual separation before first event
                    }
                    started_events = true;
                    writeln!(self.writer, "{ev}")?;
                }
            }
            printed_anything = true;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn say(&mut self, line: &str) -> Result<(), GameError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Runs the whole session: banner, then one command per line until the
    /// game ends or input runs out. A broken terminal ends the session
    /// quietly.
    pub fn play(&mut self, game: &mut Game) {
        if let Err(e) = self.run_session(game) {
            tracing::warn!(error = %e, "console failed, ending session");
        }
    }

    fn run_session(&mut self, game: &mut Game) -> Result<(), GameError> {
        self.show(&game.start())?;

        loop {
            self.prompt()?;

            let line = match self.read_command() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.say("\nThanks for playing!")?;
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "console read failed");
                    self.say("error reading console")?;
                    return Ok(());
                }
            };

            let (out, status) = game.step(&line);
            self.show(&out)?;

            if status.is_over() {
                return Ok(());
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
