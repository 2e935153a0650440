//! Output sinks standing in for the clipboard and browser
//!
//! The command line has no clipboard or browser of its own, so links are
//! written to an output stream instead. Pipe stdout into `pbcopy`, `xclip`
//! or `xdg-open` as needed.

use std::cell::RefCell;
use std::io::{self, Write};

use portal_ui::{Browser, Clipboard, CollaboratorError};

/// Writes each copied text or opened URL as one line
pub struct WriterSink<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn write_line(&self, line: &str) -> io::Result<()> {
        writeln!(self.out.borrow_mut(), "{}", line)
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for WriterSink<W> {
    fn copy_text(&self, text: &str) -> Result<(), CollaboratorError> {
        self.write_line(text)
            .map_err(|e| CollaboratorError::Clipboard(e.to_string()))
    }
}

impl<W: Write> Browser for WriterSink<W> {
    fn open_url(&self, url: &str) -> Result<(), CollaboratorError> {
        self.write_line(url)
            .map_err(|e| CollaboratorError::Browser(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_copy_and_open_write_lines() {
        let sink = WriterSink::new(Vec::new());

        sink.copy_text("https://a").unwrap();
        sink.open_url("https://b").unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "https://a\nhttps://b\n");
    }

    #[test]
    fn test_write_failure_maps_to_collaborator_error() {
        let sink = WriterSink::new(BrokenPipe);

        assert!(matches!(
            sink.copy_text("x"),
            Err(CollaboratorError::Clipboard(_))
        ));
        assert!(matches!(
            sink.open_url("x"),
            Err(CollaboratorError::Browser(_))
        ));
    }
}
