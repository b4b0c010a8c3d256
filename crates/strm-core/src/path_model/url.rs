//! Remote URL construction.

/// Percent-encodes each `/`-separated segment of `path` independently.
/// Separators are kept as they are.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Collapses runs of `/` to one, except the `//` of a `scheme://` delimiter.
pub fn collapse_separators(url: &str) -> String {
    let (scheme, rest) = match url.find("://") {
        Some(idx) => url.split_at(idx + 3),
        None => ("", url),
    };

    let mut out = String::with_capacity(url.len());
    out.push_str(scheme);
    let mut prev_slash = scheme.ends_with('/');
    for c in rest.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out
}

/// Builds `<prefix>/<path>` for a trimmed path, encoding segments if asked.
///
/// - `build_url("http://host/d", "/ShowA/Season 01/ep1.mkv", true)`
///   → `"http://host/d/ShowA/Season%2001/ep1.mkv"`
pub fn build_url(prefix: &str, trimmed: &str, encode: bool) -> String {
    let path = if encode {
        encode_path(trimmed)
    } else {
        trimmed.to_string()
    };
    collapse_separators(&format!("{}/{}", prefix.trim_end_matches('/'), path))
}
