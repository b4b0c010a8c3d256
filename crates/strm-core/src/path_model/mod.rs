//! Path modeling for pointer files.
//!
//! Rebases reconstructed remote paths onto the anchor keyword, derives safe
//! local file names, and builds the remote-access URL written into each
//! pointer file.

mod sanitize;
mod trim;
mod url;

pub use sanitize::sanitize_stem;
pub use trim::{relative_dir, trim_path_by_keyword};
pub use url::{build_url, collapse_separators, encode_path};
