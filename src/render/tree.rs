use std::collections::HashSet;

/// Spaces per depth level
pub const INDENT_WIDTH: usize = 2;

/// Fold a sorted list of paths into indented tree lines.
///
/// Directory headers are emitted the first time a path under them is seen,
/// so the input order (raw lexicographic order of full paths) decides the
/// output order. Nothing is regrouped.
pub fn render_tree<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    let (lines, _seen) = paths.iter().fold(
        (Vec::new(), HashSet::new()),
        |(mut lines, mut seen), path| {
            push_path(path.as_ref(), &mut lines, &mut seen);
            (lines, seen)
        },
    );
    lines
}

fn push_path(path: &str, lines: &mut Vec<String>, seen: &mut HashSet<String>) {
    let segments: Vec<&str> = path.split('/').collect();
    let Some((file, dirs)) = segments.split_last() else {
        return;
    };

    let mut prefix = String::new();
    for (depth, dir) in dirs.iter().enumerate() {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(dir);

        if seen.insert(prefix.clone()) {
            lines.push(format!("{}- {}/", indent(depth), dir));
        }
    }

    lines.push(format!("{}- {}", indent(dirs.len()), file));
}

fn indent(depth: usize) -> String {
    " ".repeat(depth * INDENT_WIDTH)
}
