use std::collections::{BTreeMap, BTreeSet};
use std::io;

use super::{FontRegistry, InstalledFont, LinkValue, SystemLinkKey};

/// In-process stand-in for the two font keys and the filesystem.
#[derive(Debug, Default, Clone)]
pub struct MemoryRegistry {
    fonts: Option<Vec<InstalledFont>>,
    files: BTreeSet<String>,
    links: BTreeMap<String, LinkValue>,
    system_link_denied: bool,
    failing_reads: BTreeSet<String>,
    failing_writes: BTreeSet<String>,
    writes: usize,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a font value whose file exists on disk.
    pub fn with_font(self, name: &str, path: &str) -> Self {
        self.with_font_entry(name, path).with_file(path)
    }

    /// Registers a font value without creating its file.
    pub fn with_font_entry(mut self, name: &str, path: &str) -> Self {
        self.fonts.get_or_insert_with(Vec::new).push(InstalledFont {
            name: name.to_string(),
            path: path.to_string(),
        });
        self
    }

    pub fn with_file(mut self, path: &str) -> Self {
        self.files.insert(path.to_string());
        self
    }

    pub fn with_link(mut self, family: &str, value: LinkValue) -> Self {
        self.links.insert(family.to_string(), value);
        self
    }

    /// Makes opening the system-link key fail.
    pub fn deny_system_link(mut self) -> Self {
        self.system_link_denied = true;
        self
    }

    /// Makes `get` fail for one family.
    pub fn fail_reads_for(mut self, family: &str) -> Self {
        self.failing_reads.insert(family.to_string());
        self
    }

    /// Makes `set` fail for one family.
    pub fn fail_writes_for(mut self, family: &str) -> Self {
        self.failing_writes.insert(family.to_string());
        self
    }

    pub fn link(&self, family: &str) -> Option<&LinkValue> {
        self.links.get(family)
    }

    pub fn links(&self) -> &BTreeMap<String, LinkValue> {
        &self.links
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Whether the installed-fonts key exists.
    pub fn has_fonts_key(&self) -> bool {
        self.fonts.is_some()
    }
}

pub struct MemorySystemLink<'a> {
    links: &'a mut BTreeMap<String, LinkValue>,
    failing_reads: &'a BTreeSet<String>,
    failing_writes: &'a BTreeSet<String>,
    writes: &'a mut usize,
}

impl FontRegistry for MemoryRegistry {
    type SystemLink<'a> = MemorySystemLink<'a>;

    fn installed_fonts(&self) -> io::Result<Vec<InstalledFont>> {
        self.fonts
            .clone()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn open_system_link(&mut self) -> io::Result<MemorySystemLink<'_>> {
        if self.system_link_denied {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(MemorySystemLink {
            links: &mut self.links,
            failing_reads: &self.failing_reads,
            failing_writes: &self.failing_writes,
            writes: &mut self.writes,
        })
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.contains(path)
    }
}

impl SystemLinkKey for MemorySystemLink<'_> {
    fn get(&self, family: &str) -> io::Result<Option<LinkValue>> {
        if self.failing_reads.contains(family) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(self.links.get(family).cloned())
    }

    fn set(&mut self, family: &str, value: &LinkValue) -> io::Result<()> {
        if self.failing_writes.contains(family) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        if let LinkValue::Other(kind) = value {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot store {kind} data"),
            ));
        }
        self.links.insert(family.to_string(), value.clone());
        *self.writes += 1;
        Ok(())
    }
}
