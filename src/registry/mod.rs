//! Narrow access to the two registry keys the configurator touches.
//!
//! The linker only talks to [`FontRegistry`] and [`SystemLinkKey`], so it
//! runs the same against the live Windows registry and [`MemoryRegistry`].

use std::io;
use std::path::Path;

pub mod encoding;
pub mod memory;
#[cfg(windows)]
pub mod windows;

pub use memory::MemoryRegistry;

/// Installed fonts, relative to `HKEY_LOCAL_MACHINE`.
pub const FONTS_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Fonts";

/// Font fallback links, relative to `HKEY_LOCAL_MACHINE`.
pub const SYSTEM_LINK_KEY: &str =
    r"Software\Microsoft\Windows NT\CurrentVersion\FontLink\SystemLink";

/// One string value of the installed-fonts key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledFont {
    pub name: String,
    pub path: String,
}

/// Stored data of a system-link value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkValue {
    /// `REG_SZ`
    String(String),
    /// `REG_NONE` holding string data.
    Untyped(String),
    /// `REG_MULTI_SZ`, first entry is tried first.
    MultiString(Vec<String>),
    /// Any other registry type, named for diagnostics.
    Other(String),
}

impl LinkValue {
    /// Substring containment over every entry of the value.
    pub fn mentions(&self, font: &str) -> bool {
        match self {
            LinkValue::String(s) | LinkValue::Untyped(s) => s.contains(font),
            LinkValue::MultiString(entries) => entries.iter().any(|e| e.contains(font)),
            LinkValue::Other(_) => false,
        }
    }
}

pub trait FontRegistry {
    type SystemLink<'a>: SystemLinkKey
    where
        Self: 'a;

    /// String values of the installed-fonts key in enumeration order.
    ///
    /// Must not create the key when it is missing.
    fn installed_fonts(&self) -> io::Result<Vec<InstalledFont>>;

    /// Opens the system-link key, creating it if absent. The handle is
    /// released when the returned value is dropped.
    fn open_system_link(&mut self) -> io::Result<Self::SystemLink<'_>>;

    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}

pub trait SystemLinkKey {
    /// `Ok(None)` when the family has no value yet.
    fn get(&self, family: &str) -> io::Result<Option<LinkValue>>;

    fn set(&mut self, family: &str, value: &LinkValue) -> io::Result<()>;
}
