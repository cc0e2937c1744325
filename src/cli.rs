use std::io::Write;

pub const PREFIX_ERROR: console::Emoji = console::Emoji("❌ ", "error: ");
pub const PREFIX_DONE: console::Emoji = console::Emoji("✅ ", "");

/// Column at which help descriptions start
const HELP_COMMAND_WIDTH: usize = 60;

pub const HELP: &[(&str, &str)] = &[
    ("exit", "Kill the application"),
    ("help", "Show this help page"),
    ("buckets", "List out all buckets"),
    ("buckets --name <bucket>", "Show keys in a bucket"),
    ("upload --b <bucket> --c <company> --f <filepath> --n <name>", "Upload file to S3 bucket with given parameters"),
];

/// Used when stdout isn't a terminal
const FALLBACK_WIDTH: usize = 80;

pub fn terminal_width() -> usize {
    width_or_fallback(console::Term::stdout().size_checked())
}

fn width_or_fallback(size: Option<(u16, u16)>) -> usize {
    match size {
        Some((_rows, columns)) if columns > 0 => columns as usize,
        _ => FALLBACK_WIDTH,
    }
}

fn stderr_println(prefix: &impl std::fmt::Display, args: std::fmt::Arguments) {
    eprintln!("{prefix}{args}");
}

/// Use only outside of a running shell
pub fn println_error(args: std::fmt::Arguments) {
    stderr_println(&PREFIX_ERROR, args)
}

/// Shell output formatting at a fixed width
pub struct Format {
    pub width: usize,
}

impl Format {
    pub fn horizontal_line(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", "-".repeat(self.width))
    }
    pub fn centered(&self, out: &mut impl Write, text: &str) -> std::io::Result<()> {
        let text = text.trim();
        let padding = self.width.saturating_sub(text.chars().count()) / 2;
        writeln!(out, "{:padding$}{text}", "")
    }
    pub fn vertical_space(&self, out: &mut impl Write, lines: usize) -> std::io::Result<()> {
        for _ in 0..lines.max(1) {
            writeln!(out)?;
        }
        Ok(())
    }
    pub fn heading(&self, out: &mut impl Write, text: &str) -> std::io::Result<()> {
        self.vertical_space(out, 1)?;
        self.horizontal_line(out)?;
        self.centered(out, text)?;
        self.horizontal_line(out)?;
        self.vertical_space(out, 1)
    }
    pub fn help(&self, out: &mut impl Write) -> std::io::Result<()> {
        self.heading(out, "S3 Bucket Manual")?;
        for (command, description) in HELP {
            let command = console::style(format!("{command:HELP_COMMAND_WIDTH$}")).magenta();
            writeln!(out, "{command}{description}")?;
        }
        self.vertical_space(out, 1)?;
        self.horizontal_line(out)?;
        self.vertical_space(out, 2)
    }
    pub fn println_error(&self, out: &mut impl Write, args: std::fmt::Arguments) -> std::io::Result<()> {
        writeln!(out, "{PREFIX_ERROR}{args}")
    }
    pub fn println_done(&self, out: &mut impl Write, args: std::fmt::Arguments) -> std::io::Result<()> {
        writeln!(out, "{PREFIX_DONE}{args}")
    }
}
