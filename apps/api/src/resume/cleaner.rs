/// Punctuation that survives cleanup. Covers emails, phone numbers and skill
/// tokens such as `c++`, `c#`, `node.js` and `ci/cd`.
const KEPT_PUNCTUATION: &[char] = &['@', '.', ',', '+', '#', '/', '-', '_', '%'];

/// Normalizes extracted PDF text.
///
/// Any character that is not ASCII alphanumeric or kept punctuation becomes a
/// space, runs of spaces collapse, and blank lines are dropped. Line breaks
/// are preserved so section headers can still be found.
pub fn clean_text(text: &str) -> String {
    text.lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn clean_line(line: &str) -> String {
    let replaced: String = line
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || KEPT_PUNCTUATION.contains(&c) {
                c
            } else {
                ' '
            }
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
