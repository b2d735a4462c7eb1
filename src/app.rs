use std::io::{self, Write};

use crate::cli::{Action, Actions, CliError};
use crate::fonts::{CANDIDATE_FONTS, LINK_FAMILIES};
use crate::linker;
use crate::registry::FontRegistry;

pub const EXIT_OK: u8 = 0;
pub const EXIT_USAGE: u8 = 1;

/// Runs one invocation against `registry` and returns the process exit code.
///
/// `args` excludes the program name. Usage text, acknowledgements and link
/// confirmations go to `out`.
pub fn run<R, A, W>(registry: &mut R, args: A, out: &mut W) -> io::Result<u8>
where
    R: FontRegistry,
    A: IntoIterator<Item = String>,
    W: Write,
{
    let mut args = args.into_iter().peekable();
    if args.peek().is_none() {
        auto_link(registry, out)?;
        return Ok(EXIT_OK);
    }

    for action in Actions::new(args) {
        match action {
            Ok(Action::Help) => {
                usage(out)?;
                return Ok(EXIT_OK);
            }
            Ok(Action::Link(font)) => {
                linker::link_font(registry, &font, LINK_FAMILIES, out)?;
            }
            Ok(Action::Replace(font)) => {
                writeln!(out, "{}", t!(replace_font, font = font))?;
            }
            Err(e @ CliError::MissingArgument(_)) => {
                writeln!(out, "{}", e)?;
                usage(out)?;
                return Ok(EXIT_USAGE);
            }
            Err(e @ CliError::UnknownFlag(_)) => {
                debug!("{}", e);
                return Ok(EXIT_USAGE);
            }
        }
    }
    Ok(EXIT_OK)
}

fn auto_link<R: FontRegistry, W: Write>(registry: &mut R, out: &mut W) -> io::Result<()> {
    match linker::detect_font(registry, CANDIDATE_FONTS) {
        Some(font) => {
            info!("{}", t!(font_detected, font = font));
            linker::link_font(registry, font, LINK_FAMILIES, out)?;
        }
        None => info!("{}", t!(no_font_detected)),
    }
    Ok(())
}

pub fn usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", t!(usage_title))?;
    writeln!(out, "{}", t!(usage_summary))?;
    writeln!(out)?;
    writeln!(out, "{}", t!(usage_help))?;
    writeln!(out, "{}", t!(usage_link))?;
    writeln!(out, "{}", t!(usage_replace))
}
