/// Repository identifiers recorded in a mod's `meta.ini`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModMetadata {
    /// `[General] modid`, the Nexus Mods mod id
    pub mod_id: String,
    /// `[installedFiles] 1\fileid`, the installed Nexus file id
    pub file_id: String,
}

impl ModMetadata {
    pub fn new(mod_id: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self {
            mod_id: mod_id.into(),
            file_id: file_id.into(),
        }
    }

    /// Both identifiers were present in the file.
    pub fn is_complete(&self) -> bool {
        !self.mod_id.is_empty() && !self.file_id.is_empty()
    }

    /// The mod id is a non-zero number.
    ///
    /// MO2 writes `modid=0` for mods that were not installed from Nexus.
    pub fn has_mod_page(&self) -> bool {
        self.mod_id.parse::<u64>().map(|id| id != 0).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        assert!(ModMetadata::new("3863", "1000000").is_complete());
        assert!(!ModMetadata::new("", "1000000").is_complete());
        assert!(!ModMetadata::new("3863", "").is_complete());
        assert!(!ModMetadata::default().is_complete());
    }

    #[test]
    fn test_has_mod_page() {
        assert!(ModMetadata::new("123", "").has_mod_page());
        assert!(!ModMetadata::new("0", "5").has_mod_page());
        assert!(!ModMetadata::new("00", "5").has_mod_page());
        assert!(!ModMetadata::new("", "5").has_mod_page());
        assert!(!ModMetadata::new("abc", "5").has_mod_page());
    }
}
