use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static PLAIN_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$").expect("hard-coded pattern")
});
static DASHED_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)-(0|[1-9][0-9]*)$")
        .expect("hard-coded pattern")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed version string: `{input}`")]
    MalformedVersionString { input: String },
    #[error("Badly formatted dashed version: the hyphenated segment must split into exactly two pieces")]
    BadDashFormat,
}

/// A version read from or written to the version file.
///
/// `extra` is present exactly when the version was parsed or built in dashed
/// form (`MAJOR.MINOR.PATCH-EXTRA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub extra: Option<u64>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64, extra: Option<u64>) -> Self {
        Version { major, minor, patch, extra }
    }

    pub fn is_dashed(&self) -> bool {
        self.extra.is_some()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(extra) = self.extra {
            write!(f, "-{extra}")?;
        }
        Ok(())
    }
}

/// Parses `text` against the version grammar.
///
/// The empty string is the "no value supplied" sentinel and yields
/// `Ok(None)`; callers use it to detect that no override was requested.
/// Non-empty input must be three dot-separated integers without leading
/// zeros, plus a hyphenated fourth integer when `dashed` is true. A fourth
/// component is rejected when `dashed` is false.
pub fn parse(text: &str, dashed: bool) -> Result<Option<Version>, ParseError> {
    if text.is_empty() {
        return Ok(None);
    }

    let grammar = if dashed { &DASHED_GRAMMAR } else { &PLAIN_GRAMMAR };
    if !grammar.is_match(text) {
        return Err(ParseError::MalformedVersionString { input: text.to_string() });
    }

    let mut pieces: Vec<&str> = text.split('.').collect();
    let mut extra: Option<&str> = None;
    if dashed {
        let split: Vec<&str> = pieces[2].split('-').collect();
        if split.len() != 2 {
            return Err(ParseError::BadDashFormat);
        }
        pieces[2] = split[0];
        extra = Some(split[1]);
    }

    // Out-of-range components (u64 overflow) pass the grammar but not the
    // numeric conversion, and are reported as malformed input.
    let number = |piece: &str| -> Result<u64, ParseError> {
        piece
            .parse::<u64>()
            .map_err(|_| ParseError::MalformedVersionString { input: text.to_string() })
    };

    Ok(Some(Version {
        major: number(pieces[0])?,
        minor: number(pieces[1])?,
        patch: number(pieces[2])?,
        extra: extra.map(number).transpose()?,
    }))
}
