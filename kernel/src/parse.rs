//! Instance text format.
//!
//! ```text
//! n m
//! k e_1 e_2 ... e_k      (m lines, one per subset, elements in 1..=n)
//! ```
//!
//! Blank lines are ignored anywhere in the file. Every malformation is
//! reported here so that the search never receives a malformed instance.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::element_set::{ElementSet, MAX_UNIVERSE_SIZE};
use crate::instance::{Instance, InstanceError};

/// Malformed or unreadable instance input.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),
    #[error("instance is empty: missing `n m` header")]
    MissingHeader,
    #[error("line {line}: header must be exactly `n m`")]
    MalformedHeader { line: usize },
    #[error(
        "line {line}: universe size {universe_size} exceeds the maximum {max}",
        max = MAX_UNIVERSE_SIZE
    )]
    UniverseTooLarge { line: usize, universe_size: usize },
    #[error("line {line}: `{token}` is not a non-negative integer")]
    InvalidToken { line: usize, token: String },
    #[error("line {line}: subset declares {declared} elements but lists {found}")]
    SubsetSizeMismatch {
        line: usize,
        declared: usize,
        found: usize,
    },
    #[error("line {line}: element {element} is outside 1..={universe_size}")]
    ElementOutOfRange {
        line: usize,
        element: usize,
        universe_size: usize,
    },
    #[error("expected {expected} subset lines, found {found}")]
    SubsetCountMismatch { expected: usize, found: usize },
    #[error("line {line}: unexpected data after the last subset")]
    TrailingData { line: usize },
    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Read and parse an instance file.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be opened, otherwise any
/// error from [`parse_instance`].
pub fn read_instance(path: &Path) -> Result<Instance, ParseError> {
    let file = File::open(path)?;
    parse_instance(BufReader::new(file))
}

/// Parse an instance from text.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first malformation encountered.
pub fn parse_instance<R: BufRead>(reader: R) -> Result<Instance, ParseError> {
    let mut lines = NumberedLines::new(reader);

    let Some((header_line, header)) = lines.next_non_blank()? else {
        return Err(ParseError::MissingHeader);
    };
    let header = parse_numbers(header_line, &header)?;
    let [universe_size, subset_count] = header[..] else {
        return Err(ParseError::MalformedHeader { line: header_line });
    };
    if universe_size > MAX_UNIVERSE_SIZE {
        return Err(ParseError::UniverseTooLarge {
            line: header_line,
            universe_size,
        });
    }

    // Grown as lines arrive; the declared count is untrusted.
    let mut subsets = Vec::new();
    while subsets.len() < subset_count {
        let Some((line, text)) = lines.next_non_blank()? else {
            return Err(ParseError::SubsetCountMismatch {
                expected: subset_count,
                found: subsets.len(),
            });
        };
        let numbers = parse_numbers(line, &text)?;
        let Some((&declared, elements)) = numbers.split_first() else {
            continue;
        };
        if elements.len() != declared {
            return Err(ParseError::SubsetSizeMismatch {
                line,
                declared,
                found: elements.len(),
            });
        }
        let subset = ElementSet::from_elements(universe_size, elements.iter().copied())
            .map_err(|e| ParseError::ElementOutOfRange {
                line,
                element: e.element,
                universe_size,
            })?;
        subsets.push(subset);
    }

    if let Some((line, _)) = lines.next_non_blank()? {
        return Err(ParseError::TrailingData { line });
    }

    Instance::from_sets(universe_size, subsets).map_err(ParseError::from)
}

/// Render an instance in the text format accepted by [`parse_instance`].
#[must_use]
pub fn format_instance(instance: &Instance) -> String {
    let mut out = format!("{} {}\n", instance.universe_size(), instance.subset_count());
    for subset in instance.subsets() {
        out.push_str(&subset.len().to_string());
        for element in subset.iter() {
            out.push(' ');
            out.push_str(&element.to_string());
        }
        out.push('\n');
    }
    out
}

fn parse_numbers(line: usize, text: &str) -> Result<Vec<usize>, ParseError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|_| ParseError::InvalidToken {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Line reader that tracks 1-based line numbers and skips blank lines.
struct NumberedLines<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    fn next_non_blank(&mut self) -> Result<Option<(usize, String)>, ParseError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let trimmed = self.buf.trim();
            if !trimmed.is_empty() {
                return Ok(Some((self.line, trimmed.to_string())));
            }
        }
    }
}
