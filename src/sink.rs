// src/sink.rs
use std::fmt;
use std::io::{self, Write};

/// Destination for finished log lines. The logger formats, the sink writes
/// one line per call.
pub trait ConsoleSink {
    fn write_line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()>;
}

impl<S: ConsoleSink + ?Sized> ConsoleSink for &mut S {
    fn write_line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        (**self).write_line(args)
    }
}

impl<S: ConsoleSink + ?Sized> ConsoleSink for Box<S> {
    fn write_line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        (**self).write_line(args)
    }
}

/// Writes each line to an `io::Write` and flushes it
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        WriterSink::new(io::stdout())
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        WriterSink::new(io::stderr())
    }
}

impl<W: Write> ConsoleSink for WriterSink<W> {
    fn write_line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.writer.write_fmt(args)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Keeps lines in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl ConsoleSink for MemorySink {
    fn write_line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.lines.push(args.to_string());
        Ok(())
    }
}

/// Forwards lines as `info` events to whatever tracing subscriber is installed
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ConsoleSink for TracingSink {
    fn write_line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        tracing::info!(target: "huelog", "{}", args);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_appends_newline() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line(format_args!("a {}", 1)).unwrap();
        sink.write_line(format_args!("b")).unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "a 1\nb\n");
    }

    #[test]
    fn test_memory_sink_collects_and_takes() {
        let mut sink = MemorySink::new();
        sink.write_line(format_args!("first")).unwrap();
        sink.write_line(format_args!("second {}", 2)).unwrap();
        assert_eq!(sink.lines(), ["first", "second 2"]);

        let taken = sink.take();
        assert_eq!(taken.len(), 2);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_boxed_and_borrowed_sinks() {
        fn emit<S: ConsoleSink>(mut sink: S, text: &str) {
            sink.write_line(format_args!("{}", text)).unwrap();
        }

        let mut memory = MemorySink::new();
        emit(&mut memory, "via ref");
        assert_eq!(memory.lines(), ["via ref"]);

        let boxed: Box<dyn ConsoleSink> = Box::new(MemorySink::new());
        emit(boxed, "via box");
    }

    #[test]
    fn test_tracing_sink_never_fails() {
        let mut sink = TracingSink;
        assert!(sink.write_line(format_args!("no subscriber installed")).is_ok());
    }
}
