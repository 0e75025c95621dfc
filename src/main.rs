use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use shell_lexer::{DoubleQuoteEscapes, LexerConfig, quote, tokenize_with};
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = LexerConfig::from(Cli::parse());
    debug!(?config, "lexer configured");

    if use_raw_mode(termion::is_tty(&io::stdin()), termion::is_tty(&io::stdout())) {
        interactive(config)
    } else {
        batch(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Split shell command lines read from stdin and print the resulting words.
#[derive(Parser, Debug, Default)]
#[command(version)]
struct Cli {
    /// Treat `#` at the start of a word as a comment to end of line.
    #[arg(long)]
    comments: bool,

    /// Also honor `\$`, `` \` `` and backslash-newline inside double quotes.
    #[arg(long)]
    posix: bool,
}

impl From<Cli> for LexerConfig {
    fn from(cli: Cli) -> Self {
        let escapes = if cli.posix {
            DoubleQuoteEscapes::Posix
        } else {
            DoubleQuoteEscapes::Minimal
        };
        LexerConfig::default()
            .with_comments(cli.comments)
            .with_double_quote_escapes(escapes)
    }
}

/// Raw-mode line editing needs a terminal on both ends.
fn use_raw_mode(stdin_tty: bool, stdout_tty: bool) -> bool {
    stdin_tty && stdout_tty
}

/// Tokenizes one line and prints each word quoted, one per line.
///
/// Lex errors go to `stderr`; only write failures are returned.
fn report<W: Write, E: Write>(
    line: &str,
    config: LexerConfig,
    stdout: &mut W,
    stderr: &mut E,
) -> io::Result<()> {
    match tokenize_with(line, config) {
        Ok(words) => {
            for (i, word) in words.iter().enumerate() {
                writeln!(stdout, "{}: {}", i, quote(word))?;
            }
        }
        Err(err) => writeln!(stderr, "error: {}", err)?,
    }
    Ok(())
}

fn interactive(config: LexerConfig) -> anyhow::Result<()> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = read_line()? else {
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        report(&line, config, &mut io::stdout(), &mut io::stderr())?;
    }
}

/// Reads a line in raw mode. Returns `None` on Ctrl-D with an empty line or
/// when stdin closes.
fn read_line() -> anyhow::Result<Option<String>> {
    let mut stdout = io::stdout()
        .into_raw_mode()
        .context("failed to enter raw mode")?;
    let mut buffer = String::new();
    let mut keys = io::stdin().keys();

    loop {
        let Some(key) = keys.next() else {
            write!(stdout, "\r\n")?;
            return Ok((!buffer.is_empty()).then_some(buffer));
        };
        match key.context("failed to read key")? {
            Key::Ctrl('c') => {
                buffer.clear();
                write!(stdout, "\r\n")?;
                return Ok(Some(buffer));
            }
            Key::Ctrl('d') if buffer.is_empty() => {
                write!(stdout, "\r\n")?;
                return Ok(None);
            }
            Key::Char('\n') | Key::Char('\r') => {
                write!(stdout, "\r\n")?;
                return Ok(Some(buffer));
            }
            Key::Backspace => {
                if buffer.pop().is_some() {
                    // Move back, blank the character, move back again
                    write!(stdout, "\x08 \x08")?;
                    stdout.flush()?;
                }
            }
            Key::Char(c) => {
                buffer.push(c);
                write!(stdout, "{}", c)?;
                stdout.flush()?;
            }
            _ => {}
        }
    }
}

fn batch(config: LexerConfig) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        report(&line, config, &mut stdout, &mut stderr)?;
    }
    Ok(())
}
