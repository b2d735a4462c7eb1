use std::fmt;

/// One thing the command line asks for, in the order it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Link(String),
    Replace(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// `-l` or `-r` was the last argument. Holds the flag letter.
    MissingArgument(char),
    /// A two-character flag with an unknown letter.
    UnknownFlag(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingArgument(letter) => {
                write!(f, "{}", t!(missing_argument, flag = format!("-{}", letter)))
            }
            Self::UnknownFlag(flag) => write!(f, "{}", t!(unknown_flag, flag = flag)),
        }
    }
}

impl std::error::Error for CliError {}

/// Reads actions lazily so earlier ones can run before a later error.
///
/// Iteration ends after `Help` or the first error. Tokens that are not
/// two-character flags are skipped.
pub struct Actions<I> {
    args: I,
    finished: bool,
}

impl<I: Iterator<Item = String>> Actions<I> {
    pub fn new<A: IntoIterator<IntoIter = I>>(args: A) -> Self {
        Self {
            args: args.into_iter(),
            finished: false,
        }
    }

    fn value_for(&mut self, letter: char) -> Result<String, CliError> {
        self.args.next().ok_or(CliError::MissingArgument(letter))
    }
}

impl<I: Iterator<Item = String>> Iterator for Actions<I> {
    type Item = Result<Action, CliError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(arg) = self.args.next() {
            if arg == "-h" || arg == "/?" {
                self.finished = true;
                return Some(Ok(Action::Help));
            }

            let Some(letter) = flag_letter(&arg) else {
                continue;
            };

            let item = match letter {
                'L' => self.value_for('l').map(Action::Link),
                'R' => self.value_for('r').map(Action::Replace),
                _ => Err(CliError::UnknownFlag(arg)),
            };
            self.finished = item.is_err();
            return Some(item);
        }
        None
    }
}

/// Upper-cased letter of a `-x` or `/x` token.
fn flag_letter(arg: &str) -> Option<char> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-' | '/'), Some(letter), None) => Some(letter.to_ascii_uppercase()),
        _ => None,
    }
}
