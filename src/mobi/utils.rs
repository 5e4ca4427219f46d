//! Small text helpers shared by the pipeline and the exporters

use encoding_rs::Encoding;

/// Decode raw index or flow bytes with the dictionary's encoding.
///
/// Malformed sequences are replaced, never rejected; trailing NULs from
/// padded labels are dropped.
pub fn decode_text(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _) = encoding.decode_without_bom_handling(trim_label(bytes));
    text.into_owned()
}

/// Strip the NUL padding some indexes leave after a label.
pub fn trim_label(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |last| last + 1);
    &bytes[..end]
}

/// Replace characters that are not allowed in file names.
pub fn safe_file_name(name: &str) -> String {
    const INVALID: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
    let safe: String = name
        .chars()
        .map(|c| if c.is_control() || INVALID.contains(&c) { '_' } else { c })
        .collect();
    safe.trim().to_owned()
}
