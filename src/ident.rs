//! Identifier normalization
//! ------------------------
//! Single source of truth for the engine's canonical casing rule. Type
//! names, function names and column identifiers all normalize the same way
//! before they are compared or resolved.

/// Normalize an identifier according to the engine's SQL rules:
/// - If enclosed in double-quotes, strip quotes and preserve case
/// - Otherwise, convert to uppercase (the engine's canonical case)
///
/// Normalizing an already-canonical name is a no-op, which lets resolution
/// paths normalize defensively without tracking whether a name came from
/// the parser or from a persisted record.
pub fn normalize_identifier(ident: &str) -> String {
    let trimmed = ident.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        // Double-quoted: preserve case, strip quotes
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        // Unquoted: fold to the canonical uppercase
        trimmed.to_ascii_uppercase()
    }
}

/// True when the identifier would survive normalization unchanged.
pub fn is_canonical(ident: &str) -> bool {
    normalize_identifier(ident) == ident
}
