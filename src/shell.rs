use std::io::Write;

use crate::cli::Format;
use crate::flags::{Flags, NONE};
use crate::input::LineSource;
use crate::s3::{self, Storage, Uri};

pub const PROMPT: &str = "{s3} ";
pub const UNRECOGNISED: &str = "The command you entered doesn't exist!";
const MISSING_PARAMS: &str = "Important params are missing. See params list in help section!";
/// Flags `upload` needs: bucket, company, local file path, object name
const UPLOAD_FLAGS: [&str; 4] = ["b", "c", "f", "n"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Buckets,
    Upload,
}

/// Searched in this order; the first keyword found anywhere in a line wins,
/// so `upload --f help.txt` is a `help`
pub const COMMANDS: [Command; 4] = [
    Command::Exit,
    Command::Help,
    Command::Buckets,
    Command::Upload,
];

impl Command {
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Help => "help",
            Command::Buckets => "buckets",
            Command::Upload => "upload",
        }
    }
    pub fn find(line: &str) -> Option<Command> {
        let line = line.to_lowercase();
        COMMANDS.into_iter().find(|command| line.contains(command.keyword()))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive (thiserror::Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Validation(String),
    #[error("{}", .0)]
    Service(#[from] s3::Error),
    #[error("writing output: {}", .0)]
    Output(#[from] std::io::Error),
}

/// Reads commands one line at a time and runs each to completion before
/// prompting again
pub struct Shell<S, O, E> {
    storage: S,
    out: O,
    err: E,
    format: Format,
    verbose: bool,
}

impl<S: Storage, O: Write, E: Write> Shell<S, O, E> {
    pub fn new(storage: S, out: O, err: E, width: usize, verbose: bool) -> Self {
        Shell {
            storage,
            out,
            err,
            format: Format { width },
            verbose,
        }
    }

    pub fn greet(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", console::style("The CLI is running").blue())?;
        self.format.help(&mut self.out)
    }

    /// Returns once `exit` is entered or `input` ends
    pub async fn run(&mut self, input: &mut impl LineSource) -> std::io::Result<()> {
        while let Some(line) = input.read_line(PROMPT, &mut self.out).await? {
            if self.process_line(&line).await? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Command failures are reported here; only console errors are returned
    pub async fn process_line(&mut self, line: &str) -> std::io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        let Some(command) = Command::find(line) else {
            writeln!(self.out, "{UNRECOGNISED}")?;
            return Ok(Flow::Continue);
        };
        if self.verbose {
            writeln!(self.err, "🏁 {} '{line}'", command.keyword())?;
        }
        match self.dispatch(command, line).await {
            Ok(flow) => Ok(flow),
            Err(CommandError::Output(e)) => Err(e),
            Err(e) => {
                self.format.println_error(&mut self.err, format_args!("{e}"))?;
                self.format.vertical_space(&mut self.err, 1)?;
                Ok(Flow::Continue)
            },
        }
    }

    pub async fn dispatch(&mut self, command: Command, line: &str) -> Result<Flow, CommandError> {
        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => self.format.help(&mut self.out)?,
            Command::Buckets => self.buckets(line).await?,
            Command::Upload => self.upload(line).await?,
        }
        Ok(Flow::Continue)
    }

    async fn buckets(&mut self, line: &str) -> Result<(), CommandError> {
        let flags = Flags::parse(line);
        match flags.get("name") {
            Some(NONE) => return Err(CommandError::Validation("a bucket is required: buckets --name <bucket>".to_owned())),
            Some(bucket) => return self.objects(bucket).await,
            None => {},
        }
        self.format.heading(&mut self.out, "Buckets List")?;
        writeln!(self.out, "Loading...")?;
        self.out.flush()?;
        for name in self.storage.list_buckets().await? {
            writeln!(self.out, "{name}")?;
        }
        Ok(())
    }

    async fn objects(&mut self, bucket: &str) -> Result<(), CommandError> {
        self.format.heading(&mut self.out, &format!("Objects in {bucket}"))?;
        writeln!(self.out, "Loading...")?;
        self.out.flush()?;
        for entry in self.storage.list_objects(bucket).await? {
            match entry.last_modified {
                Some(modified) => writeln!(self.out, "{modified}  {}", entry.key)?,
                None => writeln!(self.out, "{}", entry.key)?,
            }
        }
        Ok(())
    }

    async fn upload(&mut self, line: &str) -> Result<(), CommandError> {
        self.format.heading(&mut self.out, "Upload")?;
        let flags = Flags::parse(line);
        if self.verbose {
            let parsed: Vec<String> = flags.iter().map(|(name, value)| format!("{name}={value}")).collect();
            writeln!(self.err, "parsed {} flag segments: {}", flags.length, parsed.join(" "))?;
        }
        let (path, to) = upload_request(&flags)?;
        let uploaded = self.storage.upload(std::path::Path::new(path), &to).await?;
        self.format.println_done(&mut self.out, format_args!("Upload Successful!"))?;
        writeln!(self.out, "Bucket: {}", uploaded.bucket)?;
        writeln!(self.out, "Key: {}", uploaded.key)?;
        Ok(())
    }
}

/// Local path and destination named by `upload` flags
fn upload_request(flags: &Flags) -> Result<(&str, Uri), CommandError> {
    if !flags.error.is_empty() {
        return Err(CommandError::Validation(flags.error.clone()));
    }
    let [Some(bucket), Some(company), Some(path), Some(name)] = UPLOAD_FLAGS.map(|name| flags.value(name)) else {
        let missing: Vec<String> = UPLOAD_FLAGS.iter()
            .filter(|name| flags.value(name).is_none())
            .map(|name| format!("--{name}"))
            .collect();
        return Err(CommandError::Validation(format!("{MISSING_PARAMS} (missing {})", missing.join(", "))));
    };
    Ok((path, Uri::for_company(bucket, company, name)))
}
