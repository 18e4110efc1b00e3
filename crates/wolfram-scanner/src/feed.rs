//! Line feeders.
//!
//! The tokenizer consumes source one logical line at a time and does not
//! care where the lines come from: a complete string, a pre-split list of
//! lines, or a stream read on demand. A feeder mediates that, and also
//! owns the diagnostic messages recorded while its input is scanned.

use std::io::BufRead;

/// A recorded diagnostic.
///
/// `Syntax` messages are stored as the fixed seven-part record
/// `[symbol, tag, arg0, arg1, arg2, line_no, source_id]`, with missing
/// arguments padded out as empty quoted strings. Other symbols keep their
/// arguments as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub parts: Vec<String>,
}

impl Message {
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.parts[0]
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.parts[1]
    }
}

/// State shared by every feeder: the message log and the source position
/// attributes that go into `Syntax` records.
#[derive(Debug, Default)]
pub struct FeederCore {
    messages: Vec<Message>,
    line_no: usize,
    source_id: String,
}

impl FeederCore {
    #[must_use]
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            line_no: 0,
            source_id: source_id.into(),
        }
    }

    /// Count one more fed line.
    pub fn advance_line(&mut self) {
        self.line_no += 1;
    }
}

/// A source of logical lines plus the diagnostics recorded against them.
///
/// Every implementation is interchangeable at each call site that takes a
/// feeder.
pub trait LineFeeder {
    /// Consume and return the next line, including its terminating
    /// newline. Returns the empty string at end of input, and keeps
    /// returning it on every later call.
    fn feed(&mut self) -> String;

    /// True once every further [`feed`](Self::feed) will return empty.
    fn empty(&self) -> bool;

    fn core(&self) -> &FeederCore;

    fn core_mut(&mut self) -> &mut FeederCore;

    /// Number of lines fed so far.
    fn line_no(&self) -> usize {
        self.core().line_no
    }

    /// Description of the source, e.g. a file name.
    fn source_id(&self) -> &str {
        &self.core().source_id
    }

    /// The diagnostics recorded so far, in insertion order.
    fn messages(&self) -> &[Message] {
        &self.core().messages
    }

    /// Record a diagnostic of the given symbol and tag.
    ///
    /// # Panics
    ///
    /// Panics if a `Syntax` message is given more than three arguments.
    fn message(&mut self, symbol: &str, tag: &str, args: &[&str]) {
        let message = if symbol == "Syntax" {
            assert!(args.len() <= 3, "too many args");
            let core = self.core();
            let mut parts = vec![symbol.to_owned(), tag.to_owned()];
            for slot in 0..3 {
                match args.get(slot) {
                    Some(arg) => parts.push(format!("\"{arg}\"")),
                    None => parts.push(String::from("\"\"")),
                }
            }
            parts.push(core.line_no.to_string());
            parts.push(format!("\"{}\"", core.source_id));
            Message { parts }
        } else {
            let mut parts = vec![symbol.to_owned(), tag.to_owned()];
            parts.extend(args.iter().map(|arg| (*arg).to_owned()));
            Message { parts }
        };
        self.core_mut().messages.push(message);
    }
}

/// Feeds the whole source as one line.
#[derive(Debug)]
pub struct SingleLineFeeder {
    core: FeederCore,
    source: Option<String>,
}

impl SingleLineFeeder {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_source_id(source, "")
    }

    #[must_use]
    pub fn with_source_id(source: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            core: FeederCore::new(source_id),
            source: Some(source.into()),
        }
    }
}

impl LineFeeder for SingleLineFeeder {
    fn feed(&mut self) -> String {
        match self.source.take() {
            Some(source) => {
                self.core.advance_line();
                source
            }
            None => String::new(),
        }
    }

    fn empty(&self) -> bool {
        self.source.is_none()
    }

    fn core(&self) -> &FeederCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FeederCore {
        &mut self.core
    }
}

/// Feeds pre-split lines one at a time.
#[derive(Debug)]
pub struct MultiLineFeeder {
    core: FeederCore,
    lines: Vec<String>,
    next: usize,
}

impl MultiLineFeeder {
    /// Split `source` into lines, keeping each terminating newline.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self::from_lines(source.split_inclusive('\n').map(String::from).collect())
    }

    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            core: FeederCore::new(""),
            lines,
            next: 0,
        }
    }

    #[must_use]
    pub fn with_source_id(source: &str, source_id: impl Into<String>) -> Self {
        let mut feeder = Self::new(source);
        feeder.core.source_id = source_id.into();
        feeder
    }
}

impl LineFeeder for MultiLineFeeder {
    fn feed(&mut self) -> String {
        match self.lines.get(self.next) {
            Some(line) => {
                self.next += 1;
                self.core.advance_line();
                line.clone()
            }
            None => String::new(),
        }
    }

    fn empty(&self) -> bool {
        self.next >= self.lines.len()
    }

    fn core(&self) -> &FeederCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FeederCore {
        &mut self.core
    }
}

/// Feeds lines read from a [`BufRead`] source, silently collapsing runs
/// of blank lines.
#[derive(Debug)]
pub struct FileLineFeeder<R> {
    core: FeederCore,
    reader: R,
    eof: bool,
}

impl<R: BufRead> FileLineFeeder<R> {
    #[must_use]
    pub fn new(reader: R, source_id: impl Into<String>) -> Self {
        Self {
            core: FeederCore::new(source_id),
            reader,
            eof: false,
        }
    }
}

impl<R: BufRead> LineFeeder for FileLineFeeder<R> {
    fn feed(&mut self) -> String {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    self.eof = true;
                    return String::new();
                }
                Ok(_) if line == "\n" => {
                    self.core.advance_line();
                }
                Ok(_) => {
                    self.core.advance_line();
                    return line;
                }
            }
        }
    }

    fn empty(&self) -> bool {
        self.eof
    }

    fn core(&self) -> &FeederCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FeederCore {
        &mut self.core
    }
}
