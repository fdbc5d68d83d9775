//! Error messages with actionable suggestions.

use std::path::Path;
use tabula::{Format, Surface};

/// Build an error message for when format detection fails.
pub fn format_detection_error(path: &str, is_source: bool) -> String {
    let direction = if is_source { "source" } else { "target" };
    let flag = if is_source { "--from" } else { "--to" };

    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let mut msg = format!("Could not detect {} format", direction);

    if let Some(ref ext) = ext {
        if let Some(suggestion) = find_similar_format(ext) {
            msg.push_str(&format!(
                ".\n\nDid you mean '{}'? Use {} {} to specify.",
                suggestion, flag, suggestion
            ));
            return msg;
        }
        msg.push_str(&format!(". Unknown extension '.{}'", ext));
    } else {
        msg.push_str(". No file extension found");
    }

    msg.push_str(&format!(
        ".\n\nUse {} <format> to specify. Supported formats: {}",
        flag,
        format_names(Format::ALL)
    ));
    msg
}

/// Build an error message for an unrecognized format name.
pub fn unknown_format_error(name: &str) -> String {
    let mut msg = format!("Unknown format '{}'", name);
    if let Some(suggestion) = find_similar_format(name) {
        msg.push_str(&format!(". Did you mean '{}'?", suggestion));
    } else {
        msg.push_str(&format!(
            ". Supported formats: {}",
            format_names(Format::ALL)
        ));
    }
    msg
}

/// Build an error message for an unrecognized surface name.
pub fn unknown_surface_error(name: &str) -> String {
    let names: Vec<&str> = Surface::ALL.iter().map(|s| s.name).collect();
    format!(
        "Unknown surface '{}'. Available surfaces: {}",
        name,
        names.join(", ")
    )
}

/// Build an error message for a format the surface does not offer.
pub fn surface_format_error(surface: &Surface, format: Format, is_source: bool) -> String {
    let (role, allowed) = if is_source {
        ("input", surface.inputs)
    } else {
        ("output", surface.outputs)
    };
    let mut msg = format!(
        "Surface '{}' does not offer {} as {} format. Allowed: {}",
        surface.name,
        format,
        role,
        format_names(allowed)
    );

    // Point at a surface that does offer it
    let other = Surface::ALL.iter().find(|s| {
        s.name != surface.name
            && if is_source {
                s.accepts_input(format)
            } else {
                s.accepts_output(format)
            }
    });
    if let Some(other) = other {
        msg.push_str(&format!(". Try --surface {}", other.name));
    }
    msg
}

/// Build an error message for file read errors.
pub fn file_read_error(path: &str, err: &std::io::Error) -> String {
    use std::io::ErrorKind;

    let mut msg = format!("Failed to read '{}'", path);

    match err.kind() {
        ErrorKind::NotFound => msg.push_str(": file not found"),
        ErrorKind::PermissionDenied => {
            msg.push_str(": permission denied. Check file permissions.")
        }
        ErrorKind::InvalidData => msg.push_str(": file is not valid UTF-8 text."),
        _ => msg.push_str(&format!(": {}", err)),
    }

    msg
}

fn format_names(formats: &[Format]) -> String {
    formats
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Find a similar format name (for typo suggestions).
fn find_similar_format(input: &str) -> Option<&'static str> {
    let input = input.to_lowercase();

    // Common aliases
    let aliases: &[(&str, &str)] = &[
        ("htm", "html"),
        ("tab", "tsv"),
        ("xhtml", "html"),
    ];

    for (alias, canonical) in aliases {
        if input == *alias {
            return Some(canonical);
        }
    }

    Format::ALL
        .iter()
        .map(|f| f.name())
        .find(|name| levenshtein(&input, name) <= 1 && input != *name)
}

/// Simple Levenshtein distance for short strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
