//! Helpers for reading resolved interaction options.

use serenity::all::{ResolvedOption, ResolvedValue};

/// Returns the invoked subcommand and its options.
pub fn subcommand<'o, 'a>(
    options: &'o [ResolvedOption<'a>],
) -> Option<(&'a str, &'o [ResolvedOption<'a>])> {
    options.iter().find_map(|option| match &option.value {
        ResolvedValue::SubCommand(inner) => Some((option.name, inner.as_slice())),
        _ => None,
    })
}

/// Reads a string option, including the partial value of a focused autocomplete
/// option.
pub fn string<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| match &option.value {
            ResolvedValue::String(value) => Some(*value),
            ResolvedValue::Autocomplete { value, .. } => Some(*value),
            _ => None,
        })
}
