//! Shared atom-sequence helpers used by the path value types.

use crate::atom::Atom;
use crate::error::Result;
use crate::flavor::Flavor;

/// Resolves a possibly-negative index into an atom sequence of `len`.
///
/// Negative indices count from the end: `-1` is the last atom. Returns
/// `None` when the index falls outside the sequence.
pub(crate) fn locate(len: usize, index: isize) -> Option<usize> {
    if let Ok(forward) = usize::try_from(index) {
        (forward < len).then_some(forward)
    } else {
        let back = index.unsigned_abs();
        (back <= len).then(|| len - back)
    }
}

/// Replaces `count` atoms starting at `index` with `replacement`.
///
/// Both bounds clamp to the sequence, so out-of-range requests replace
/// nothing or less than asked rather than failing.
pub(crate) fn splice(
    atoms: &[Atom],
    index: usize,
    count: usize,
    replacement: Vec<Atom>,
) -> Vec<Atom> {
    let start = index.min(atoms.len());
    let end = start.saturating_add(count).min(atoms.len());
    let mut result = Vec::with_capacity(atoms.len() - (end - start) + replacement.len());
    result.extend_from_slice(&atoms[..start]);
    result.extend(replacement);
    result.extend_from_slice(&atoms[end..]);
    result
}

/// Validates an iterator of raw strings into atoms for `flavor`.
pub(crate) fn validate_atoms<I, S>(atoms: I, flavor: Flavor) -> Result<Vec<Atom>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    atoms
        .into_iter()
        .map(|atom| Atom::new(atom.as_ref(), flavor))
        .collect()
}

/// Renders an atom sequence with the canonical separator between atoms.
pub(crate) fn render_atoms(atoms: &[Atom]) -> String {
    let mut text = String::new();
    for (index, atom) in atoms.iter().enumerate() {
        if index > 0 {
            text.push(Flavor::RENDER_SEPARATOR);
        }
        text.push_str(atom.as_str());
    }
    text
}

/// Splits an atom's text into its dot-separated name parts.
///
/// Leading dots stay glued to the first part, so a dotfile like
/// `.bashrc` has one part and therefore no extension, while `.foo.txt`
/// has the parts `.foo` and `txt`. The reserved atoms `.` and `..` are
/// returned whole, as is text made only of dots.
pub(crate) fn name_parts(atom: &str) -> Vec<&str> {
    if atom == Atom::SELF || atom == Atom::PARENT {
        return vec![atom];
    }
    let mut parts: Vec<&str> = atom.split('.').collect();
    let Some(first_real) = parts.iter().position(|part| !part.is_empty()) else {
        return vec![atom];
    };
    if first_real > 0 {
        let merged = &atom[..first_real + parts[first_real].len()];
        parts.splice(0..=first_real, [merged]);
    }
    parts
}

/// The extension, when the atom's name has at least two parts.
pub(crate) fn extension_of(atom: &str) -> Option<&str> {
    let parts = name_parts(atom);
    if parts.len() >= 2 {
        parts.last().copied()
    } else {
        None
    }
}

/// Every name part after the first, outermost last.
pub(crate) fn extensions_of(atom: &str) -> Vec<&str> {
    let mut parts = name_parts(atom);
    if parts.len() >= 2 {
        parts.split_off(1)
    } else {
        Vec::new()
    }
}

/// The atom text with its final name part and the preceding dot removed.
pub(crate) fn without_extension(atom: &str) -> &str {
    match extension_of(atom) {
        Some(extension) => &atom[..atom.len() - extension.len() - 1],
        None => atom,
    }
}
