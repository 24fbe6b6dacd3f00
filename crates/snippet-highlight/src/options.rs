/// Options that control how highlight patterns are compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// If `true`, matches are case-sensitive. Search UIs highlight case-insensitively by default.
    pub case_sensitive: bool,
    /// If `true`, a leading `^` and trailing `$` are removed from server-supplied patterns.
    ///
    /// Server patterns are anchored to whole sentences, while snippets are cut at arbitrary
    /// offsets, so the anchors rarely line up with the snippet edges.
    pub strip_server_anchors: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            strip_server_anchors: true,
        }
    }
}

impl ResolveOptions {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    pub fn strip_server_anchors(mut self, value: bool) -> Self {
        self.strip_server_anchors = value;
        self
    }
}
