use std::path::Path;

/// One label per line. Blank lines are skipped and a leading WordNet synset
/// id (`n01440764 tench, Tinca tinca`) is dropped.
pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_synset_id)
        .map(str::to_string)
        .collect()
}

pub fn load_labels(path: &Path) -> std::io::Result<Vec<String>> {
    Ok(parse_labels(&std::fs::read_to_string(path)?))
}

fn strip_synset_id(line: &str) -> &str {
    match line.split_once(' ') {
        Some((id, rest))
            if id.len() == 9
                && id.starts_with('n')
                && id[1..].chars().all(|c| c.is_ascii_digit()) =>
        {
            rest.trim()
        }
        _ => line,
    }
}
