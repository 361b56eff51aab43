//! Page-relative path resolution.

use crate::util::is_http_url;

/// Where the page hosting the search box sits within the site.
///
/// Pages inside one of the nested directories (walkthroughs, writeups,
/// projects) live one level below the site root, so both the index and every
/// relative result link need a `../` prefix there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    path: String,
    nested: bool,
}

impl PageLocation {
    /// Build a location from a page path such as `/HackSmarter/404bank.html`.
    pub fn new(page_path: &str, nested_dirs: &[String]) -> Self {
        let path = page_path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim()
            .trim_start_matches('/')
            .to_string();

        let nested = directory_of(&path)
            .split('/')
            .any(|segment| nested_dirs.iter().any(|dir| dir == segment));

        Self { path, nested }
    }

    /// Location of the site's landing page.
    pub fn root() -> Self {
        Self {
            path: "index.html".to_string(),
            nested: false,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.nested
    }

    /// Directory part of the page path, including the trailing slash.
    #[must_use]
    pub fn directory(&self) -> &str {
        directory_of(&self.path)
    }

    /// The index reference as the page itself would write it.
    ///
    /// Nested pages step up one level; pages in any other sub-directory use a
    /// root-relative reference.
    #[must_use]
    pub fn index_href(&self, index_file: &str) -> String {
        if self.nested {
            format!("../{index_file}")
        } else if self.directory().is_empty() {
            index_file.to_string()
        } else {
            format!("/{index_file}")
        }
    }

    /// Site-root-relative path of the index. Every page reads the same index
    /// at the site root.
    #[must_use]
    pub fn index_path(&self, index_file: &str) -> String {
        normalize_path(index_file)
    }

    #[must_use]
    pub const fn link_prefix(&self) -> &'static str {
        if self.nested {
            "../"
        } else {
            ""
        }
    }

    /// Turn an index URL into one navigable from this page.
    ///
    /// Absolute, root-relative and fragment-only URLs are returned unchanged.
    #[must_use]
    pub fn resolve_link(&self, url: &str) -> String {
        if url.is_empty()
            || is_http_url(url)
            || url.starts_with('/')
            || url.starts_with('#')
            || url.contains(':')
        {
            url.to_string()
        } else {
            format!("{}{url}", self.link_prefix())
        }
    }
}

impl Default for PageLocation {
    fn default() -> Self {
        Self::root()
    }
}

fn directory_of(path: &str) -> &str {
    path.rfind('/').map_or("", |index| &path[..=index])
}

/// Collapse `.` and `..` segments of a relative path. `..` never climbs above
/// the site root.
fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}
