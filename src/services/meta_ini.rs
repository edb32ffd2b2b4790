use super::load_order::strip_bom;
use crate::models::ModMetadata;
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use regex::Regex;
use std::fs;
use thiserror::Error;

/// Section holding the Nexus mod id
pub const GENERAL_SECTION: &str = "General";
pub const MOD_ID_KEY: &str = "modid";
/// Section listing the archives MO2 installed the mod from
pub const INSTALLED_FILES_SECTION: &str = "installedFiles";
pub const FILE_ID_KEY: &str = r"1\fileid";

/// Problems reading a mod's `meta.ini`. None of these stop a run.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("meta.ini not found at {0}")]
    NotFound(Utf8PathBuf),

    #[error("Missing modid or fileid in {0}")]
    MissingFields(Utf8PathBuf),

    #[error("Error reading {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parsed sectioned key-value file.
///
/// Keys are stored lowercased, section names are kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaIni {
    sections: IndexMap<String, IndexMap<String, String>>,
}

impl MetaIni {
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(&key.to_lowercase())
            .map(String::as_str)
    }

    /// Value of `key` in `section`, or an empty string.
    pub fn get_or_empty(&self, section: &str, key: &str) -> String {
        self.get(section, key).unwrap_or_default().to_string()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// The two identifiers used for linking, with empty-string fallback.
    pub fn mod_metadata(&self) -> ModMetadata {
        ModMetadata::new(
            self.get_or_empty(GENERAL_SECTION, MOD_ID_KEY),
            self.get_or_empty(INSTALLED_FILES_SECTION, FILE_ID_KEY),
        )
    }
}

/// Reader for MO2 `meta.ini` files.
///
/// # Format
///
/// ```text
/// [General]
/// modid=12604
/// version=5.2.0
///
/// [installedFiles]
/// 1\modid=12604
/// 1\fileid=1000172397
/// size=1
/// ```
///
/// Lines starting with `;` or `#` are comments. Entries before the first
/// section header are ignored. A repeated key keeps its last value.
pub struct MetadataReader {
    /// Matches `[Section]` headers
    section_pattern: Regex,

    /// Matches `key=value` lines
    entry_pattern: Regex,
}

impl MetadataReader {
    pub fn new() -> Self {
        Self {
            section_pattern: Regex::new(r"^\[([^\]]+)\]$").expect("Invalid section regex"),
            entry_pattern: Regex::new(r"^([^=]+?)\s*=\s*(.*)$").expect("Invalid entry regex"),
        }
    }

    pub fn parse(&self, contents: &str) -> MetaIni {
        let mut ini = MetaIni::default();
        let mut current: Option<String> = None;

        let contents = strip_bom(contents);
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(caps) = self.section_pattern.captures(line) {
                let name = caps[1].trim().to_string();
                ini.sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let Some(section) = current.as_ref() else {
                tracing::debug!("Ignoring entry outside of any section: {}", line);
                continue;
            };

            if let Some(caps) = self.entry_pattern.captures(line) {
                let key = caps[1].trim().to_lowercase();
                let value = caps[2].trim().to_string();
                if let Some(entries) = ini.sections.get_mut(section) {
                    entries.insert(key, value);
                }
            }
        }

        ini
    }

    /// Read the identifiers from a `meta.ini`.
    ///
    /// # Errors
    ///
    /// - [`MetadataError::NotFound`] if the file does not exist
    /// - [`MetadataError::Io`] if it exists but cannot be read; invalid UTF-8
    ///   is replaced rather than rejected
    /// - [`MetadataError::MissingFields`] if either identifier is absent or empty
    pub fn read(&self, path: &Utf8Path) -> Result<ModMetadata, MetadataError> {
        if !path.exists() {
            return Err(MetadataError::NotFound(path.to_path_buf()));
        }

        // MO2 can leave ANSI-encoded text in free-form keys like `notes`
        let bytes = fs::read(path).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let contents = String::from_utf8_lossy(&bytes);

        let metadata = self.parse(&contents).mod_metadata();
        if !metadata.is_complete() {
            return Err(MetadataError::MissingFields(path.to_path_buf()));
        }

        Ok(metadata)
    }
}

impl Default for MetadataReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKYUI_META: &str = "[General]\r\n\
        gameName=SkyrimSE\r\n\
        modid=12604\r\n\
        version=5.2.0\r\n\
        \r\n\
        [installedFiles]\r\n\
        1\\modid=12604\r\n\
        1\\fileid=1000172397\r\n\
        size=1\r\n";

    #[test]
    fn test_parse_mo2_meta_ini() {
        let reader = MetadataReader::new();
        let ini = reader.parse(SKYUI_META);

        assert_eq!(ini.get("General", "modid"), Some("12604"));
        assert_eq!(ini.get("installedFiles", r"1\fileid"), Some("1000172397"));
        assert_eq!(ini.get("installedFiles", "size"), Some("1"));
        assert_eq!(
            ini.section_names().collect::<Vec<_>>(),
            vec!["General", "installedFiles"]
        );
    }

    #[test]
    fn test_keys_are_case_insensitive_sections_are_not() {
        let reader = MetadataReader::new();
        let ini = reader.parse("[General]\nModID=42\n");

        assert_eq!(ini.get("General", "modid"), Some("42"));
        assert_eq!(ini.get("General", "MODID"), Some("42"));
        assert_eq!(ini.get("general", "modid"), None);
    }

    #[test]
    fn test_comments_and_orphan_entries_ignored() {
        let reader = MetadataReader::new();
        let ini = reader.parse("orphan=1\n; comment\n# another\n[General]\nmodid = 7 \n");

        assert_eq!(ini.get("General", "orphan"), None);
        assert_eq!(ini.get("General", "modid"), Some("7"));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let reader = MetadataReader::new();
        let ini = reader.parse("[General]\nurl=https://example.com/?a=b\n");
        assert_eq!(ini.get("General", "url"), Some("https://example.com/?a=b"));
    }

    #[test]
    fn test_mod_metadata_fallback_is_empty() {
        let reader = MetadataReader::new();
        let metadata = reader.parse("[General]\nmodid=5\n").mod_metadata();

        assert_eq!(metadata.mod_id, "5");
        assert_eq!(metadata.file_id, "");
        assert!(!metadata.is_complete());
    }

    #[test]
    fn test_read_missing_file() {
        let reader = MetadataReader::new();
        let result = reader.read(Utf8Path::new("/nonexistent/mods/Foo/meta.ini"));
        assert!(matches!(result, Err(MetadataError::NotFound(_))));
    }

    #[test]
    fn test_read_incomplete_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[General]\nmodid=0\n").unwrap();
        temp_file.flush().unwrap();

        let path = Utf8PathBuf::try_from(temp_file.path().to_path_buf()).unwrap();
        let result = MetadataReader::new().read(&path);
        assert!(matches!(result, Err(MetadataError::MissingFields(_))));
    }

    #[test]
    fn test_read_file_with_latin1_notes() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[General]\nmodid=123\nnotes=Caf\xe9\n[installedFiles]\n1\\fileid=9\n")
            .unwrap();
        temp_file.flush().unwrap();

        let path = Utf8PathBuf::try_from(temp_file.path().to_path_buf()).unwrap();
        let metadata = MetadataReader::new().read(&path).unwrap();
        assert_eq!(metadata, ModMetadata::new("123", "9"));
    }

    #[test]
    fn test_parse_with_bom() {
        let reader = MetadataReader::new();
        let ini = reader.parse("\u{feff}[General]\nmodid=3\n");
        assert_eq!(ini.get("General", "modid"), Some("3"));
    }

    #[test]
    fn test_read_complete_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", SKYUI_META).unwrap();
        temp_file.flush().unwrap();

        let path = Utf8PathBuf::try_from(temp_file.path().to_path_buf()).unwrap();
        let metadata = MetadataReader::new().read(&path).unwrap();
        assert_eq!(metadata, ModMetadata::new("12604", "1000172397"));
    }
}
