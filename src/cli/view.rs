//! Terminal rendering of a conversation.
use std::io::{self, Write};

use crate::chat::{Message, Sender, SessionEvent, Transcript};

pub struct View<W: Write> {
    out: W,
}

impl<W: Write> View<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render_transcript(&mut self, transcript: &Transcript) -> io::Result<()> {
        for msg in transcript.iter() {
            self.render_message(msg)?;
        }
        self.out.flush()
    }

    /// Redraw in response to a session change. User messages are not
    /// echoed since the terminal already shows what was typed.
    pub fn render(&mut self, event: &SessionEvent) -> io::Result<()> {
        match event {
            SessionEvent::MessageAppended(msg) if msg.sender() == Sender::Tutor => {
                self.render_message(msg)?
            }
            SessionEvent::BusyChanged(true) => writeln!(self.out, "Thinking...")?,
            _ => {}
        }
        self.out.flush()
    }

    fn render_message(&mut self, msg: &Message) -> io::Result<()> {
        match msg.sender() {
            Sender::Tutor => writeln!(self.out, "Tutor: {}", msg.text()),
            Sender::User => writeln!(self.out, "You: {}", msg.text()),
        }
    }
}
