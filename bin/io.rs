use std::fmt::Display;
use std::io::{self, BufRead, BufReader, ErrorKind, Lines, Read, Write};
use tracing::instrument;

/// A line oriented terminal.
#[derive(Debug)]
pub struct Io<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Io<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Io {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Receive a line, without the line break.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn recv(&mut self) -> io::Result<String> {
        self.reader.next().ok_or(ErrorKind::UnexpectedEof)?
    }

    /// Send a line.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{msg}")
    }

    /// Send a prompt and wait for the reply.
    ///
    /// Returns `None` once the reader is exhausted.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn ask<T: Display>(&mut self, msg: T) -> io::Result<Option<String>> {
        write!(&mut self.writer, "{msg}> ")?;
        self.writer.flush()?;

        match self.recv() {
            Ok(reply) => Ok(Some(reply)),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn recv_waits_for_line_break(#[strategy("[^\r\n]*")] s: String) {
        let input = format!("{s}\n");
        let mut io = Io::new(Vec::new(), input.as_bytes());
        assert_eq!(io.recv()?, s);
    }

    #[test]
    fn recv_fails_at_end_of_input() {
        let mut io = Io::new(Vec::new(), empty());
        assert_eq!(io.recv().map_err(|e| e.kind()), Err(ErrorKind::UnexpectedEof));
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf, empty());
        io.send(&s)?;
        drop(io);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }

    #[proptest]
    fn ask_prompts_and_returns_reply(
        #[strategy("[^\r\n]*")] prompt: String,
        #[strategy("[^\r\n]*")] reply: String,
    ) {
        let input = format!("{reply}\n");
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf, input.as_bytes());
        assert_eq!(io.ask(&prompt)?, Some(reply));
        drop(io);
        assert_eq!(str::from_utf8(&buf)?, format!("{prompt}> "));
    }

    #[proptest]
    fn ask_returns_none_at_end_of_input(prompt: String) {
        let mut io = Io::new(Vec::new(), empty());
        assert_eq!(io.ask(&prompt)?, None);
    }
}
