use std::io::{self, Write};

use crate::registry::{FontRegistry, LinkValue, SYSTEM_LINK_KEY, SystemLinkKey};

/// What [`write_link`] did to one family's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// No value existed; a single string was created.
    Created,
    /// A single string was overwritten, dropping the previous link.
    Replaced,
    /// The font became the first entry of an existing multi-string.
    Prepended,
    /// The value already mentions the font; nothing was written.
    AlreadyLinked,
    /// The value has a type the writer does not edit.
    Untouched,
}

/// Whether any installed font value mentions `font` and points at an
/// existing file. Registry errors count as "not installed".
pub fn has_font<R: FontRegistry>(registry: &R, font: &str) -> bool {
    let fonts = match registry.installed_fonts() {
        Ok(fonts) => fonts,
        Err(e) => {
            debug!("cannot read installed fonts: {}", e);
            return false;
        }
    };

    match fonts
        .iter()
        .find(|entry| entry.path.contains(font) && registry.file_exists(&entry.path))
    {
        Some(entry) => {
            debug!("{} provided by {} ({})", font, entry.name, entry.path);
            true
        }
        None => false,
    }
}

/// First candidate, in order, that [`has_font`] accepts.
pub fn detect_font<'a, R: FontRegistry>(registry: &R, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|candidate| has_font(registry, candidate))
}

pub fn write_link<K: SystemLinkKey>(key: &mut K, family: &str, font: &str) -> io::Result<LinkOutcome> {
    let outcome = match key.get(family)? {
        None => {
            key.set(family, &LinkValue::String(font.to_string()))?;
            LinkOutcome::Created
        }
        Some(LinkValue::String(current)) | Some(LinkValue::Untyped(current)) if current == font => {
            LinkOutcome::AlreadyLinked
        }
        Some(LinkValue::String(_)) => {
            key.set(family, &LinkValue::String(font.to_string()))?;
            LinkOutcome::Replaced
        }
        Some(LinkValue::Untyped(_)) => {
            key.set(family, &LinkValue::Untyped(font.to_string()))?;
            LinkOutcome::Replaced
        }
        Some(value @ LinkValue::MultiString(_)) if value.mentions(font) => LinkOutcome::AlreadyLinked,
        Some(LinkValue::MultiString(entries)) => {
            let mut linked = Vec::with_capacity(entries.len() + 1);
            linked.push(font.to_string());
            linked.extend(entries);
            key.set(family, &LinkValue::MultiString(linked))?;
            LinkOutcome::Prepended
        }
        Some(LinkValue::Other(kind)) => {
            debug!("{} holds {} data, left as is", family, kind);
            LinkOutcome::Untouched
        }
    };
    Ok(outcome)
}

/// Links `font` under every family and reports the families that succeeded.
///
/// A confirmation line per linked family goes to `out`. Each family is
/// written independently; a failure is logged and the next family is still
/// attempted. Only errors writing to `out` are returned.
pub fn link_font<'f, R: FontRegistry, W: Write>(
    registry: &mut R,
    font: &str,
    families: &[&'f str],
    out: &mut W,
) -> io::Result<Vec<(&'f str, LinkOutcome)>> {
    let mut key = match registry.open_system_link() {
        Ok(key) => key,
        Err(e) => {
            error!("{}", t!(key_open_failed, error = e, key = SYSTEM_LINK_KEY));
            return Ok(Vec::new());
        }
    };

    let mut linked = Vec::with_capacity(families.len());
    for &family in families {
        match write_link(&mut key, family, font) {
            Ok(outcome) => {
                writeln!(out, "{}", t!(font_linked, family = family, font = font))?;
                debug!("{}: {:?}", family, outcome);
                linked.push((family, outcome));
            }
            Err(e) => warn!("{}", t!(link_failed, family = family, error = e)),
        }
    }
    Ok(linked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{CANDIDATE_FONTS, LINK_FAMILIES};
    use crate::registry::MemoryRegistry;

    const WQY: &str = r"Z:\usr\share\fonts\wqy-microhei\wqy-microhei.ttc";
    const NOTO: &str = r"Z:\usr\share\fonts\noto-cjk\NotoSansCJK-Regular.ttc";

    #[test]
    fn missing_fonts_key_is_not_found() {
        let registry = MemoryRegistry::new();
        assert!(!has_font(&registry, "wqy-microhei.ttc"));
        assert!(!registry.has_fonts_key());
    }

    #[test]
    fn registered_font_without_file_is_not_found() {
        let registry = MemoryRegistry::new().with_font_entry("WenQuanYi Micro Hei", WQY);
        assert!(!has_font(&registry, "wqy-microhei.ttc"));
    }

    #[test]
    fn registered_font_with_file_is_found() {
        let registry = MemoryRegistry::new()
            .with_font("Arial (TrueType)", r"C:\windows\Fonts\arial.ttf")
            .with_font("WenQuanYi Micro Hei", WQY);
        assert!(has_font(&registry, "wqy-microhei.ttc"));
        assert!(!has_font(&registry, "SourceHanSansCN-Regular.otf"));
    }

    #[test]
    fn substring_match_is_lenient() {
        let registry = MemoryRegistry::new().with_font("WenQuanYi Micro Hei", WQY);
        assert!(has_font(&registry, "microhei.ttc"));
    }

    #[test]
    fn later_entry_with_file_still_matches() {
        let registry = MemoryRegistry::new()
            .with_font_entry("stale", r"Z:\gone\wqy-microhei.ttc")
            .with_font("WenQuanYi Micro Hei", WQY);
        assert!(has_font(&registry, "wqy-microhei.ttc"));
    }

    #[test]
    fn detection_respects_candidate_order() {
        let registry = MemoryRegistry::new()
            .with_font("Noto Sans CJK", NOTO)
            .with_font("WenQuanYi Micro Hei", WQY);
        assert_eq!(detect_font(&registry, CANDIDATE_FONTS), Some("wqy-microhei.ttc"));

        let registry = MemoryRegistry::new().with_font("Noto Sans CJK", NOTO);
        assert_eq!(detect_font(&registry, CANDIDATE_FONTS), Some("NotoSansCJK-Regular.ttc"));

        assert_eq!(detect_font(&MemoryRegistry::new(), CANDIDATE_FONTS), None);
    }

    #[test]
    fn absent_value_becomes_single_string() {
        let mut registry = MemoryRegistry::new();
        let mut key = registry.open_system_link().unwrap();
        assert_eq!(write_link(&mut key, "Tahoma", "a.ttf").unwrap(), LinkOutcome::Created);
        drop(key);
        assert_eq!(registry.link("Tahoma"), Some(&LinkValue::String("a.ttf".into())));
    }

    #[test]
    fn single_string_is_overwritten() {
        let mut registry =
            MemoryRegistry::new().with_link("Tahoma", LinkValue::String("MSGOTHIC.TTC".into()));
        let mut key = registry.open_system_link().unwrap();
        assert_eq!(write_link(&mut key, "Tahoma", "a.ttf").unwrap(), LinkOutcome::Replaced);
        drop(key);
        assert_eq!(registry.link("Tahoma"), Some(&LinkValue::String("a.ttf".into())));
    }

    #[test]
    fn untyped_value_keeps_its_type() {
        let mut registry =
            MemoryRegistry::new().with_link("Arial", LinkValue::Untyped("old.ttf".into()));
        let mut key = registry.open_system_link().unwrap();
        assert_eq!(write_link(&mut key, "Arial", "a.ttf").unwrap(), LinkOutcome::Replaced);
        drop(key);
        assert_eq!(registry.link("Arial"), Some(&LinkValue::Untyped("a.ttf".into())));
    }

    #[test]
    fn multi_string_gets_font_prepended() {
        let prior = vec!["MSGOTHIC.TTC,MS UI Gothic".to_string(), "gulim.ttc".to_string()];
        let mut registry =
            MemoryRegistry::new().with_link("SimSun", LinkValue::MultiString(prior.clone()));
        let mut key = registry.open_system_link().unwrap();
        assert_eq!(write_link(&mut key, "SimSun", "a.ttf").unwrap(), LinkOutcome::Prepended);
        drop(key);

        let mut expected = vec!["a.ttf".to_string()];
        expected.extend(prior);
        assert_eq!(registry.link("SimSun"), Some(&LinkValue::MultiString(expected)));
    }

    #[test]
    fn multi_string_already_mentioning_font_is_left_alone() {
        let prior = LinkValue::MultiString(vec!["gulim.ttc".into(), "x-a.ttf,Extra".into()]);
        let mut registry = MemoryRegistry::new().with_link("SimSun", prior.clone());
        let mut key = registry.open_system_link().unwrap();
        assert_eq!(write_link(&mut key, "SimSun", "a.ttf").unwrap(), LinkOutcome::AlreadyLinked);
        drop(key);
        assert_eq!(registry.link("SimSun"), Some(&prior));
        assert_eq!(registry.writes(), 0);
    }

    #[test]
    fn equal_single_string_is_not_rewritten() {
        let mut registry =
            MemoryRegistry::new().with_link("Arial", LinkValue::String("a.ttf".into()));
        let mut key = registry.open_system_link().unwrap();
        assert_eq!(write_link(&mut key, "Arial", "a.ttf").unwrap(), LinkOutcome::AlreadyLinked);
        drop(key);
        assert_eq!(registry.writes(), 0);
    }

    #[test]
    fn foreign_value_type_is_untouched() {
        let mut registry =
            MemoryRegistry::new().with_link("Arial", LinkValue::Other("REG_DWORD".into()));
        let mut key = registry.open_system_link().unwrap();
        assert_eq!(write_link(&mut key, "Arial", "a.ttf").unwrap(), LinkOutcome::Untouched);
        drop(key);
        assert_eq!(registry.link("Arial"), Some(&LinkValue::Other("REG_DWORD".into())));
    }

    #[test]
    fn single_string_containing_font_is_still_overwritten() {
        // only multi-strings accumulate; a single string is always replaced
        let mut registry =
            MemoryRegistry::new().with_link("Tahoma", LinkValue::String("old-a.ttf".into()));
        let mut key = registry.open_system_link().unwrap();
        assert_eq!(write_link(&mut key, "Tahoma", "a.ttf").unwrap(), LinkOutcome::Replaced);
        drop(key);
        assert_eq!(registry.link("Tahoma"), Some(&LinkValue::String("a.ttf".into())));
        assert_eq!(registry.writes(), 1);
    }

    #[test]
    fn link_font_covers_every_family() {
        let mut registry = MemoryRegistry::new();
        let mut out = Vec::new();
        let linked = link_font(&mut registry, "a.ttf", LINK_FAMILIES, &mut out).unwrap();
        assert_eq!(linked.len(), LINK_FAMILIES.len());
        for family in LINK_FAMILIES {
            assert_eq!(registry.link(family), Some(&LinkValue::String("a.ttf".into())));
        }

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), LINK_FAMILIES.len());
        assert_eq!(lines[0], t!(font_linked, family = "Arial", font = "a.ttf"));
    }

    #[test]
    fn failed_family_does_not_stop_the_others() {
        let mut registry = MemoryRegistry::new().fail_writes_for("SimSun");
        let mut out = Vec::new();
        let linked = link_font(&mut registry, "a.ttf", LINK_FAMILIES, &mut out).unwrap();

        assert_eq!(linked.len(), LINK_FAMILIES.len() - 1);
        assert!(linked.iter().all(|(family, _)| *family != "SimSun"));
        assert_eq!(registry.link("SimSun"), None);
        for family in LINK_FAMILIES.iter().filter(|f| **f != "SimSun") {
            assert_eq!(registry.link(family), Some(&LinkValue::String("a.ttf".into())));
        }

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), LINK_FAMILIES.len() - 1);
        assert!(!out.contains("\"SimSun\""));
    }

    #[test]
    fn failed_read_skips_only_that_family() {
        let mut registry = MemoryRegistry::new().fail_reads_for("Tahoma");
        let linked = link_font(&mut registry, "a.ttf", LINK_FAMILIES, &mut Vec::new()).unwrap();

        assert_eq!(linked.len(), LINK_FAMILIES.len() - 1);
        assert_eq!(registry.link("Tahoma"), None);
        assert_eq!(registry.writes(), LINK_FAMILIES.len() - 1);
    }

    #[test]
    fn link_font_without_key_writes_nothing() {
        let mut registry = MemoryRegistry::new().deny_system_link();
        let mut out = Vec::new();
        assert!(link_font(&mut registry, "a.ttf", LINK_FAMILIES, &mut out).unwrap().is_empty());
        assert!(registry.links().is_empty());
        assert!(out.is_empty());
    }
}
