use std::path::MAIN_SEPARATOR;

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Everything up to and including the last path separator, or an empty string
/// if `path` has none.
pub fn directory_prefix(path: &str) -> &str {
    match path.rfind(SEPARATORS) {
        Some(pos) => &path[..=pos],
        None => "",
    }
}

/// Rewrites both `/` and `\` to the host's native separator.
pub fn normalize_separators(path: &str) -> String {
    path.replace(SEPARATORS, &MAIN_SEPARATOR.to_string())
}

/// Path of `relative` as seen from the directory containing `current_file`,
/// with `.` and `..` folded away.
pub fn join_include(current_file: &str, relative: &str) -> String {
    let mut full = directory_prefix(current_file).to_owned();
    full.push_str(relative);
    collapse_dot_components(&full)
}

/// Lexically drops `.` components and folds `..` into the component before it.
///
/// Separators are rewritten to the host's native one. Leading `..` of a relative
/// path are kept; `..` directly under a root is dropped.
pub fn collapse_dot_components(path: &str) -> String {
    let (root, rest) = split_root(path);

    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split(SEPARATORS) {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if !root.is_empty() => {}
                _ => parts.push(".."),
            },
            _ => parts.push(part),
        }
    }

    let separator = MAIN_SEPARATOR.to_string();
    let mut collapsed = normalize_separators(root);
    collapsed.push_str(&parts.join(separator.as_str()));
    collapsed
}

/// Splits off a leading `/`, `\` or drive root such as `C:\`.
fn split_root(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    let has_drive = bytes.len() >= 3 && bytes[1] == b':' && SEPARATORS.contains(&(bytes[2] as char));

    let root_len = if has_drive {
        3
    } else if path.starts_with(SEPARATORS) {
        1
    } else {
        0
    };

    path.split_at(root_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_up_to_last_separator() {
        assert_eq!(directory_prefix("shaders/lib/colors.glsl"), "shaders/lib/");
        assert_eq!(directory_prefix("shaders\\main.glsl"), "shaders\\");
        assert_eq!(directory_prefix("a/b\\c.glsl"), "a/b\\");
        assert_eq!(directory_prefix("/root.glsl"), "/");
    }

    #[test]
    fn no_separator_gives_empty_prefix() {
        assert_eq!(directory_prefix("main.glsl"), "");
        assert_eq!(directory_prefix(""), "");
    }

    #[test]
    fn separators_follow_host() {
        let sep = MAIN_SEPARATOR.to_string();
        assert_eq!(
            normalize_separators("lib\\util/noise.glsl"),
            format!("lib{sep}util{sep}noise.glsl")
        );
        assert_eq!(normalize_separators("noise.glsl"), "noise.glsl");
    }

    #[test]
    fn join_against_directory() {
        let sep = MAIN_SEPARATOR.to_string();
        assert_eq!(
            join_include("shaders/main.glsl", "lib/colors.glsl"),
            format!("shaders{sep}lib{sep}colors.glsl")
        );
        assert_eq!(join_include("main.glsl", "common.glsl"), "common.glsl");
    }

    #[test]
    fn join_folds_dot_components() {
        let sep = MAIN_SEPARATOR.to_string();
        assert_eq!(join_include("dir/sub/b.glsl", "../a.glsl"), format!("dir{sep}a.glsl"));
        assert_eq!(join_include("dir/a.glsl", "./d.glsl"), format!("dir{sep}d.glsl"));
        assert_eq!(join_include("a.glsl", "./d.glsl"), "d.glsl");
        assert_eq!(join_include("a.glsl", "../up.glsl"), format!("..{sep}up.glsl"));
    }

    #[test]
    fn collapse_keeps_roots_and_leading_parents() {
        let sep = MAIN_SEPARATOR.to_string();
        assert_eq!(
            collapse_dot_components("/shaders/./lib/../main.glsl"),
            format!("{sep}shaders{sep}main.glsl")
        );
        assert_eq!(collapse_dot_components("/../a.glsl"), format!("{sep}a.glsl"));
        assert_eq!(
            collapse_dot_components("../../x/../a.glsl"),
            format!("..{sep}..{sep}a.glsl")
        );
        assert_eq!(
            collapse_dot_components("C:\\shaders\\..\\a.glsl"),
            format!("C:{sep}a.glsl")
        );
        assert_eq!(collapse_dot_components("a//b.glsl"), format!("a{sep}b.glsl"));
    }
}
