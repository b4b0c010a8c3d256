//! Keyword-anchored path trimming.

/// Ensures exactly one leading `/`.
fn single_leading_slash(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Rebases `path` onto `keyword`.
///
/// Backslashes become `/`. If `keyword` occurs, the result starts at its
/// first occurrence; otherwise the whole path is kept. Either way the result
/// starts with exactly one `/`. Separators inside the path are left as they
/// are, and the keyword text itself is never altered.
pub fn trim_path_by_keyword(path: &str, keyword: Option<&str>) -> String {
    let path = path.replace('\\', "/");
    let keyword = keyword
        .map(|k| k.replace('\\', "/"))
        .filter(|k| !k.is_empty());

    match keyword.and_then(|k| path.find(&k)) {
        Some(pos) => single_leading_slash(&path[pos..]),
        None => single_leading_slash(&path),
    }
}

/// Directory part of a trimmed path, without leading separators.
///
/// `"/ShowA/Season 01/ep1.mkv"` → `"ShowA/Season 01"`; a top-level file
/// gives `""`.
pub fn relative_dir(trimmed: &str) -> &str {
    let dir = match trimmed.rfind('/') {
        Some(idx) => &trimmed[..idx],
        None => "",
    };
    dir.trim_start_matches(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keyword_keeps_whole_path() {
        assert_eq!(
            trim_path_by_keyword("ShowA/Season 01/ep1.mkv", None),
            "/ShowA/Season 01/ep1.mkv"
        );
        assert_eq!(
            trim_path_by_keyword("///ShowA/ep1.mkv", Some("")),
            "/ShowA/ep1.mkv"
        );
    }

    #[test]
    fn keyword_not_found_keeps_whole_path() {
        assert_eq!(
            trim_path_by_keyword("Shows/ep1.mkv", Some("Movies")),
            "/Shows/ep1.mkv"
        );
    }

    #[test]
    fn keyword_rebases_windows_path() {
        assert_eq!(
            trim_path_by_keyword(r"C:\Media\ShowA\ep1.mkv", Some("Media")),
            "/Media/ShowA/ep1.mkv"
        );
        assert_eq!(
            trim_path_by_keyword(r"C:\Media/ShowA\ep1.mkv", Some("Media")),
            "/Media/ShowA/ep1.mkv"
        );
    }

    #[test]
    fn keyword_with_separators() {
        assert_eq!(
            trim_path_by_keyword("/mnt/115/Media/a.mkv", Some(r"\Media")),
            "/Media/a.mkv"
        );
        assert_eq!(
            trim_path_by_keyword("/mnt//Media/a.mkv", Some("//Media")),
            "/Media/a.mkv"
        );
    }

    #[test]
    fn keyword_matches_first_occurrence() {
        assert_eq!(
            trim_path_by_keyword("x/Media/y/Media/z.mkv", Some("Media")),
            "/Media/y/Media/z.mkv"
        );
    }

    #[test]
    fn trimming_is_idempotent() {
        let cases = [
            ("C:/Media/ShowA/ep1.mkv", Some("Media")),
            ("a//Media/b.mkv", Some("//Media")),
            ("//x/y.mkv", None),
            ("x/y.mkv", Some("nope")),
            ("Media", Some("Media")),
        ];
        for (path, keyword) in cases {
            let once = trim_path_by_keyword(path, keyword);
            let twice = trim_path_by_keyword(&once, keyword);
            assert_eq!(once, twice, "path={path:?} keyword={keyword:?}");
        }
    }

    #[test]
    fn exactly_one_leading_separator() {
        let paths = ["", "/", "//a", r"\\a\b", "a", "x/Media", "x//Media//b"];
        let keywords = [None, Some(""), Some("Media"), Some("/Media"), Some("a")];
        for path in paths {
            for keyword in keywords {
                let out = trim_path_by_keyword(path, keyword);
                assert!(out.starts_with('/'), "{out:?}");
                assert!(!out.starts_with("//"), "{out:?}");
            }
        }
    }

    #[test]
    fn relative_dir_strips_leading_separators() {
        assert_eq!(relative_dir("/ShowA/Season 01/ep1.mkv"), "ShowA/Season 01");
        assert_eq!(relative_dir("/ep1.mkv"), "");
        assert_eq!(relative_dir("ep1.mkv"), "");
    }
}
