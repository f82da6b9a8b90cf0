/// A path is hidden when any of its segments starts with a period.
pub fn is_hidden(path: &str) -> bool {
    path.split('/').any(|segment| segment.starts_with('.'))
}

/// Drop hidden paths unless `include_hidden` is set. Order is preserved.
pub fn filter_hidden(paths: &[String], include_hidden: bool) -> Vec<String> {
    if include_hidden {
        return paths.to_vec();
    }

    paths.iter().filter(|p| !is_hidden(p)).cloned().collect()
}
