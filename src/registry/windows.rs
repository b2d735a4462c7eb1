use std::io;

use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ, RegDisposition, RegType};
use winreg::types::FromRegValue;
use winreg::{RegKey, RegValue};

use super::encoding::{decode_untyped, encode_untyped};
use super::{FONTS_KEY, FontRegistry, InstalledFont, LinkValue, SYSTEM_LINK_KEY, SystemLinkKey};

/// `HKEY_LOCAL_MACHINE` as seen by the running process.
pub struct WinRegistry {
    hklm: RegKey,
}

impl WinRegistry {
    pub fn new() -> Self {
        Self {
            hklm: RegKey::predef(HKEY_LOCAL_MACHINE),
        }
    }
}

impl Default for WinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WinSystemLink {
    key: RegKey,
}

impl FontRegistry for WinRegistry {
    type SystemLink<'a> = WinSystemLink;

    fn installed_fonts(&self) -> io::Result<Vec<InstalledFont>> {
        let key = self.hklm.open_subkey_with_flags(FONTS_KEY, KEY_READ)?;
        let mut fonts = Vec::new();

        for entry in key.enum_values() {
            let (name, value) = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("skip unreadable font value: {}", e);
                    continue;
                }
            };
            match value.vtype {
                RegType::REG_SZ | RegType::REG_EXPAND_SZ => match String::from_reg_value(&value) {
                    Ok(path) => fonts.push(InstalledFont { name, path }),
                    Err(e) => debug!("skip font value {}: {}", name, e),
                },
                ref other => debug!("skip font value {} of type {:?}", name, other),
            }
        }
        Ok(fonts)
    }

    fn open_system_link(&mut self) -> io::Result<WinSystemLink> {
        let (key, disposition) = self.hklm.create_subkey(SYSTEM_LINK_KEY)?;
        if matches!(disposition, RegDisposition::REG_CREATED_NEW_KEY) {
            debug!("created {}", SYSTEM_LINK_KEY);
        }
        Ok(WinSystemLink { key })
    }
}

impl SystemLinkKey for WinSystemLink {
    fn get(&self, family: &str) -> io::Result<Option<LinkValue>> {
        let raw = match self.key.get_raw_value(family) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let value = match raw.vtype {
            RegType::REG_SZ => LinkValue::String(String::from_reg_value(&raw)?),
            RegType::REG_NONE => LinkValue::Untyped(decode_untyped(&raw.bytes)),
            RegType::REG_MULTI_SZ => LinkValue::MultiString(Vec::<String>::from_reg_value(&raw)?),
            ref other => LinkValue::Other(format!("{:?}", other)),
        };
        Ok(Some(value))
    }

    fn set(&mut self, family: &str, value: &LinkValue) -> io::Result<()> {
        match value {
            LinkValue::String(s) => self.key.set_value(family, s),
            LinkValue::MultiString(entries) => self.key.set_value(family, entries),
            LinkValue::Untyped(s) => {
                let raw = RegValue {
                    bytes: encode_untyped(s),
                    vtype: RegType::REG_NONE,
                };
                self.key.set_raw_value(family, &raw)
            }
            LinkValue::Other(kind) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot store {kind} data"),
            )),
        }
    }
}
