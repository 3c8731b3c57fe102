use std::fmt;

use super::operation::{GAME_BASE_PATH, placeholder_name};
use super::types::{Faction, PvpBracket};
use crate::Result;
use crate::error::Error;

/// Value substituted for a `{placeholder}` in an endpoint path.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
    Number(u64),
    Text(String),
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathValue::Number(n) => write!(f, "{n}"),
            PathValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PathValue {
    fn from(value: u64) -> Self {
        PathValue::Number(value)
    }
}

impl From<u32> for PathValue {
    fn from(value: u32) -> Self {
        PathValue::Number(u64::from(value))
    }
}

impl From<&str> for PathValue {
    fn from(value: &str) -> Self {
        PathValue::Text(value.to_owned())
    }
}

impl From<String> for PathValue {
    fn from(value: String) -> Self {
        PathValue::Text(value)
    }
}

impl From<Faction> for PathValue {
    fn from(value: Faction) -> Self {
        PathValue::Text(value.to_string())
    }
}

impl From<PvpBracket> for PathValue {
    fn from(value: PvpBracket) -> Self {
        PathValue::Text(value.to_string())
    }
}

/// Renders `template` under [`GAME_BASE_PATH`] into raw, unencoded path segments.
///
/// Every placeholder must have exactly one non-empty value in `args`, and every entry in
/// `args` must name a placeholder of the template. The dot segments `.` and `..` are rejected
/// since URL normalization would drop them from the emitted path.
pub(crate) fn render(template: &str, args: &[(&str, PathValue)]) -> Result<Vec<String>> {
    let mut used = 0_usize;
    let mut segments = Vec::new();

    for segment in GAME_BASE_PATH.split('/').chain(template.split('/')) {
        if segment.is_empty() {
            continue;
        }

        let Some(name) = placeholder_name(segment) else {
            segments.push(segment.to_owned());
            continue;
        };

        let mut matches = args.iter().filter(|(key, _)| *key == name);
        let value = match (matches.next(), matches.next()) {
            (Some((_, value)), None) => value,
            (None, _) => return Err(Error::validation(format!("missing value for {{{name}}}"))),
            (Some(_), Some(_)) => {
                return Err(Error::validation(format!(
                    "duplicate values for {{{name}}}"
                )));
            }
        };

        let rendered = value.to_string();
        if rendered.is_empty() {
            return Err(Error::validation(format!("empty value for {{{name}}}")));
        }
        if is_dot_segment(&rendered) {
            return Err(Error::validation(format!(
                "dot segment {rendered:?} is not a valid value for {{{name}}}"
            )));
        }

        used += 1;
        segments.push(rendered);
    }

    if used != args.len() {
        let unknown: Vec<_> = args
            .iter()
            .map(|(key, _)| *key)
            .filter(|key| !template.contains(&format!("{{{key}}}")))
            .collect();
        return Err(Error::validation(format!(
            "unexpected path parameters: {}",
            unknown.join(", ")
        )));
    }

    Ok(segments)
}

pub(crate) fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}
