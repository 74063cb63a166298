//! Renders text as a PNG image.
//!
//! With a text argument the image is written to `<text>.png`; without one,
//! the message is read from standard input and the image is written to
//! standard output:
//!
//! ```text
//! printf 'Hello\nworld' | texttopng > hello.png
//! ```

mod output;

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

/// Exit code reported when the command line cannot be parsed.
const EXIT_BAD_ARGUMENTS: u8 = 4;

#[derive(Debug, Parser)]
#[command(
    name = "texttopng",
    about = "Render text as a 1-bit-per-pixel PNG image",
    long_about = None
)]
struct Arguments {
    /// Text to render; read from standard input if omitted
    text: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) if error.kind() == clap::error::ErrorKind::DisplayHelp => {
            // -h/--help goes to stdout and exits successfully.
            let _ = error.print();
            return ExitCode::SUCCESS;
        },
        Err(error) => {
            // Anything else starting with "-" is rejected, with the
            // diagnostic and usage on stderr.
            let _ = error.print();
            return ExitCode::from(EXIT_BAD_ARGUMENTS);
        },
    };

    match run(arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error:#}");
            ExitCode::FAILURE
        },
    }
}

fn run(arguments: Arguments) -> Result<()> {
    match arguments.text {
        Some(text) => {
            let path = format!("{text}.png");
            let file = fs::File::create(&path)
                .with_context(|| format!("creating output file {path}"))?;
            output::write_png(&raster::rasterize_message(&text), file)
        },
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading message from standard input")?;
            output::write_png(&raster::rasterize_message(&text), io::stdout().lock())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn help_is_not_an_argument_error() {
        for flag in ["-h", "--help"] {
            let error = Arguments::try_parse_from(["texttopng", flag]).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn unknown_flags_are_rejected() {
        for flag in ["-x", "--frobnicate", "--version"] {
            let error = Arguments::try_parse_from(["texttopng", flag]).unwrap_err();
            assert_ne!(error.kind(), ErrorKind::DisplayHelp, "flag {flag}");
        }
    }

    #[test]
    fn positional_text_is_taken_literally() {
        let arguments = Arguments::try_parse_from(["texttopng", "Hello, world"]).unwrap();
        assert_eq!(arguments.text.as_deref(), Some("Hello, world"));
    }

    #[test]
    fn text_may_be_omitted() {
        let arguments = Arguments::try_parse_from(["texttopng"]).unwrap();
        assert_eq!(arguments.text, None);
    }
}
