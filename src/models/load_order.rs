use super::metadata::ModMetadata;

/// Suffix MO2 appends to separator entries in `modlist.txt`.
pub const SEPARATOR_SUFFIX: &str = "_separator";

/// Single-character state marker at the start of a `modlist.txt` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `+` mod is enabled in the profile
    Enabled,
    /// `-` mod is disabled in the profile
    Disabled,
    /// `*` unmanaged or locked entry
    Unmanaged,
}

impl Marker {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Marker::Enabled),
            '-' => Some(Marker::Disabled),
            '*' => Some(Marker::Unmanaged),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Marker::Enabled => '+',
            Marker::Disabled => '-',
            Marker::Unmanaged => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Cosmetic grouping marker, not a real mod
    Separator,
    Mod,
}

/// One retained line of a load order file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOrderEntry {
    pub marker: Option<Marker>,
    /// Mod name, or the separator's display name with the suffix removed
    pub name: String,
    pub kind: EntryKind,
}

impl LoadOrderEntry {
    /// Classify a trimmed, non-empty, non-comment line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        let marker = line.chars().next().and_then(Marker::from_char);
        let rest = match marker {
            Some(m) => &line[m.as_char().len_utf8()..],
            None => line,
        };

        match rest.strip_suffix(SEPARATOR_SUFFIX) {
            Some(name) => Self {
                marker,
                name: name.trim().to_string(),
                kind: EntryKind::Separator,
            },
            None => Self {
                marker,
                name: rest.trim().to_string(),
                kind: EntryKind::Mod,
            },
        }
    }

    pub fn is_separator(&self) -> bool {
        self.kind == EntryKind::Separator
    }

    /// Marker as displayed in the list, empty when the line had none.
    pub fn marker_str(&self) -> String {
        self.marker.map(|m| m.as_char().to_string()).unwrap_or_default()
    }
}

/// A load order entry joined with the metadata found for it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedEntry {
    pub entry: LoadOrderEntry,
    pub metadata: Option<ModMetadata>,
}

impl EnrichedEntry {
    pub fn unmatched(entry: LoadOrderEntry) -> Self {
        Self {
            entry,
            metadata: None,
        }
    }

    /// Metadata that is good enough to link to a mod page.
    pub fn linkable_metadata(&self) -> Option<&ModMetadata> {
        self.metadata.as_ref().filter(|m| m.has_mod_page())
    }
}
