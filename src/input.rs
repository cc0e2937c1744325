use std::io::Write;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Where the shell reads its commands from
#[allow(async_fn_in_trait)]
pub trait LineSource {
    /// Prompt for and read one line; `None` once input has ended
    async fn read_line(&mut self, prompt: &str, out: &mut impl Write) -> std::io::Result<Option<String>>;
}

/// Line-at-a-time reader for piped input
///
/// Bytes that aren't UTF-8 are replaced rather than ending the shell.
pub struct ByteLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> ByteLines<R> {
    pub fn new(reader: R) -> ByteLines<R> {
        ByteLines { reader, buf: Vec::new() }
    }
}

impl<R: AsyncBufRead + Unpin> LineSource for ByteLines<R> {
    async fn read_line(&mut self, prompt: &str, out: &mut impl Write) -> std::io::Result<Option<String>> {
        write!(out, "{prompt}")?;
        out.flush()?;
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

/// Line editor with history for an attended terminal
pub struct Editor {
    editor: DefaultEditor,
}

impl Editor {
    pub fn new() -> Result<Editor, ReadlineError> {
        Ok(Editor { editor: DefaultEditor::new()? })
    }
}

impl LineSource for Editor {
    async fn read_line(&mut self, prompt: &str, _out: &mut impl Write) -> std::io::Result<Option<String>> {
        let read = tokio::task::block_in_place(|| self.editor.readline(prompt));
        match read {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            },
            // Ctrl-C and Ctrl-D both close the shell
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn read_all(input: &[u8]) -> (Vec<String>, String) {
        let mut lines = ByteLines::new(input);
        let mut out = Vec::new();
        let mut read = vec![];
        while let Some(line) = lines.read_line("> ", &mut out).await.unwrap() {
            read.push(line);
        }
        (read, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_lines_and_prompts() {
        let (lines, out) = read_all(b"help\r\n\nbuckets").await;
        assert_eq!(lines, vec!["help", "", "buckets"]);
        assert_eq!(out, "> > > > \n");
    }

    #[tokio::test]
    async fn test_invalid_utf8_replaced() {
        let (lines, _) = read_all(b"caf\xe9\nbuckets\n").await;
        assert_eq!(lines, vec!["caf\u{FFFD}", "buckets"]);
    }
}
