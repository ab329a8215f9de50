//! The messenger: sender-tagged console lines and the welcome banner
//!
//! Every operation renders its full text first and hands it to the sink in a
//! single `write_all`, so a line written to stdout is never split by another
//! thread's output. Operations return `&mut Self` for chaining:
//!
//! ```no_run
//! use cosmid_messenger::Messenger;
//!
//! # fn main() -> cosmid_messenger::Result<()> {
//! Messenger::new("cosmid")
//!     .welcome("0.2.0")?
//!     .send("update", "fetching reference")?
//!     .send("warning", "checksum missing")?;
//! # Ok(())
//! # }
//! ```

use crate::banner;
use crate::category::Category;
use crate::config::MessengerConfig;
use crate::error::Result;
use std::io::{self, Stdout, Write};
use tracing::{debug, warn};

pub struct Messenger<W: Write = Stdout> {
    sender: String,
    use_color: bool,
    out: W,
}

impl Messenger<Stdout> {
    /// Colored messenger writing to stdout
    pub fn new(sender: impl Into<String>) -> Self {
        Self::with_config(sender, &MessengerConfig::default())
    }

    /// Messenger without a sender; lines start with an empty field
    pub fn anonymous() -> Self {
        Self::new(String::new())
    }

    pub fn with_config(sender: impl Into<String>, config: &MessengerConfig) -> Self {
        Self::with_writer(sender, config, io::stdout())
    }
}

impl<W: Write> Messenger<W> {
    pub fn with_writer(sender: impl Into<String>, config: &MessengerConfig, out: W) -> Self {
        Messenger {
            sender: sender.into(),
            use_color: config.color.enabled(),
            out,
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Print the banner with `version` interpolated verbatim
    pub fn welcome(&mut self, version: &str) -> Result<&mut Self> {
        let mut text = banner::render_welcome(version, self.use_color);
        text.push('\n');
        debug!(sender = %self.sender, version, "writing welcome banner");
        self.emit(&text)?;
        Ok(self)
    }

    /// Print `sender<TAB>LABEL<TAB>message`. Unknown categories print as `NOTE`.
    pub fn send<C: Into<Category>>(&mut self, category: C, message: &str) -> Result<&mut Self> {
        let category = category.into();
        let mut line = self.format_line(category, message);
        line.push('\n');
        debug!(
            sender = %self.sender,
            category = %category,
            len = message.len(),
            "sending message"
        );
        self.emit(&line)?;
        Ok(self)
    }

    pub fn warn(&mut self, message: &str) -> Result<&mut Self> {
        self.send(Category::Warning, message)
    }

    pub fn error(&mut self, message: &str) -> Result<&mut Self> {
        self.send(Category::Error, message)
    }

    pub fn update(&mut self, message: &str) -> Result<&mut Self> {
        self.send(Category::Update, message)
    }

    pub fn note(&mut self, message: &str) -> Result<&mut Self> {
        self.send(Category::Note, message)
    }

    pub fn ghost(&mut self, message: &str) -> Result<&mut Self> {
        self.send(Category::Ghost, message)
    }

    /// The line `send` would write, without the trailing newline
    pub fn format_line(&self, category: Category, message: &str) -> String {
        let label = category.render(self.use_color);
        [self.sender.as_str(), label.as_str(), message].join("\t")
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        let written = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = &written {
            warn!(sender = %self.sender, error = %e, "failed to write message");
        }
        Ok(written?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(sender: &str) -> Messenger<Vec<u8>> {
        Messenger::with_writer(sender, &MessengerConfig::plain(), Vec::new())
    }

    fn output(messenger: Messenger<Vec<u8>>) -> String {
        String::from_utf8(messenger.into_inner()).unwrap()
    }

    #[test]
    fn test_format_line_fields() {
        let m = plain("build");
        assert_eq!(m.format_line(Category::Error, "disk full"), "build\tERROR\tdisk full");
    }

    #[test]
    fn test_send_appends_newline() {
        let mut m = plain("build");
        m.send("update", "done").unwrap();
        assert_eq!(output(m), "build\tUPDATE\tdone\n");
    }

    #[test]
    fn test_shortcuts_match_send() {
        let mut a = plain("x");
        a.warn("w").unwrap().error("e").unwrap().update("u").unwrap();
        a.note("n").unwrap().ghost("g").unwrap();

        let mut b = plain("x");
        b.send("warning", "w").unwrap().send("error", "e").unwrap();
        b.send("update", "u").unwrap().send("note", "n").unwrap();
        b.send("ghost", "g").unwrap();

        assert_eq!(output(a), output(b));
    }

    #[test]
    fn test_empty_sender() {
        let m = Messenger::with_writer("", &MessengerConfig::plain(), Vec::new());
        assert_eq!(m.format_line(Category::Note, "hi"), "\tNOTE\thi");
    }

    #[test]
    fn test_config_controls_color() {
        let m = Messenger::with_writer("s", &MessengerConfig::default(), Vec::new());
        assert!(m.use_color());
        assert!(m.format_line(Category::Warning, "x").contains('\x1b'));
        assert!(!plain("s").use_color());
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut m = Messenger::with_writer("s", &MessengerConfig::plain(), Broken);
        let err = m.send("error", "boom").err().unwrap();
        assert!(matches!(err, crate::MessengerError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
