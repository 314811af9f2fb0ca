use std::fmt;

/// A vault-relative path with `/` separators and no leading or trailing
/// slash. Notes and attachments are addressed with these; absolute
/// filesystem locations never leave the vault adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VaultPath(String);

impl VaultPath {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self(path.trim_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Folder containing this path, `None` at the vault root.
    pub fn parent(&self) -> Option<VaultPath> {
        self.0.rfind('/').map(|idx| VaultPath(self.0[..idx].to_string()))
    }
}

impl fmt::Display for VaultPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
