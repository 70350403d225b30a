use super::chrome::{parse_action, Chrome};
use crate::app::{ActionResult, JokeWidget, WidgetAction};
use crate::net::JokeSource;
use crate::storage::Storage;
use std::io::{self, BufRead, Write};

/// Line-driven front-end. Actions are handled one at a time in input order,
/// so a fetch always finishes before the next action is read.
pub struct Console<R, W> {
    input: R,
    output: W,
    chrome: Chrome,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            chrome: Chrome::default(),
        }
    }

    pub fn run<S: Storage, J: JokeSource>(&mut self, widget: &mut JokeWidget<S, J>) -> io::Result<()> {
        self.draw(widget)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let Some(action) = parse_action(&line) else {
                writeln!(self.output, "Unknown command {:?}, use g, p, n or q", line.trim())?;
                continue;
            };

            if action == WidgetAction::GetJoke {
                writeln!(self.output, "Fetching a joke...")?;
            }

            match widget.activate(action) {
                ActionResult::Updated => self.draw(widget)?,
                ActionResult::Ignored => log::debug!("Ignored {:?}", action),
                ActionResult::Quit => break,
            }
        }
        Ok(())
    }

    fn draw<S, J>(&mut self, widget: &JokeWidget<S, J>) -> io::Result<()> {
        let frame = self
            .chrome
            .build_frame(widget.display(), widget.controls(), widget.status());
        self.output.write_all(frame.as_bytes())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
