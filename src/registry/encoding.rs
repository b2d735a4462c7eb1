//! UTF-16LE string data stored under `REG_NONE`.
//!
//! winreg only converts typed string values, so wine's untyped links are
//! laid out here the same way as `REG_SZ`.

pub fn encode_untyped(value: &str) -> Vec<u8> {
    let mut bytes: Vec<u8> = value.encode_utf16().flat_map(u16::to_le_bytes).collect();
    bytes.extend_from_slice(&[0, 0]);
    bytes
}

/// Reads up to the first NUL. Data written without a terminator is accepted.
pub fn decode_untyped(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    String::from_utf16_lossy(&units[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_is_nul_terminated_utf16() {
        assert_eq!(encode_untyped("Ab"), vec![b'A', 0, b'b', 0, 0, 0]);
        assert_eq!(encode_untyped("字").len(), 4);
    }

    #[test]
    fn decode_tolerates_missing_terminator_and_odd_length() {
        assert_eq!(decode_untyped(&[b'h', 0, b'i', 0]), "hi");
        assert_eq!(decode_untyped(&[b'h', 0, b'i']), "h");
        assert_eq!(decode_untyped(&[]), "");
    }

    #[test]
    fn decode_stops_at_first_nul() {
        let bytes = [b'x', 0, 0, 0, b'y', 0, 0, 0];
        assert_eq!(decode_untyped(&bytes), "x");
        assert_eq!(decode_untyped(&encode_untyped("文泉驿微米黑.ttc")), "文泉驿微米黑.ttc");
    }
}
