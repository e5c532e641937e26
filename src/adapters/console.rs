use crate::domain::ports::Console;

/// Prints each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Keeps every line in memory, in the order it was printed.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    lines: Vec<String>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn count(&self, text: &str) -> usize {
        self.lines.iter().filter(|line| *line == text).count()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Console for MemoryConsole {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// Forwards to an inner console while counting lines, so the tour can
/// attribute output to lessons without buffering it.
pub struct CountingConsole<'a> {
    inner: &'a mut dyn Console,
    transcript: Vec<String>,
}

impl<'a> CountingConsole<'a> {
    pub fn new(inner: &'a mut dyn Console) -> Self {
        Self {
            inner,
            transcript: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.transcript.len()
    }

    pub fn into_transcript(self) -> Vec<String> {
        self.transcript
    }
}

impl Console for CountingConsole<'_> {
    fn line(&mut self, text: &str) {
        self.transcript.push(text.to_string());
        self.inner.line(text);
    }
}
