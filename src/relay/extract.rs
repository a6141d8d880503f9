/// Pulls the added source lines out of a unified diff, dropping the leading `+`.
///
/// This is a prefix filter, not a diff parser: file and hunk boundaries are not
/// tracked, order is preserved and duplicates are kept.
pub fn extract_added_lines(diff: &str) -> Vec<String> {
    diff.split('\n')
        .filter(|line| is_added_line(line))
        .map(|line| line[1..].to_string())
        .collect()
}

fn is_added_line(line: &str) -> bool {
    line.starts_with('+')
        && !line.starts_with("+++")
        && !line.starts_with("++ ")
        && !line.starts_with("+--")
        // Unreachable once the `+` check passed; hunk headers start with `@@`.
        && !line.starts_with("@@")
}
