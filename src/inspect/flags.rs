/// Render a bitmask as its known bit names joined by " | ", any leftover
/// bits as a hex residue, and "<none>" when nothing is set.
pub fn describe_bits(value: u32, names: &[(u32, &str)]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut residue = value;

    for &(bit, name) in names {
        if value & bit != 0 {
            parts.push(name.to_string());
            residue &= !bit;
        }
    }

    if residue != 0 {
        parts.push(format!("0x{residue:x}"));
    }

    if parts.is_empty() {
        String::from("<none>")
    } else {
        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[(u32, &str)] = &[(0x1, "ALPHA"), (0x2, "BETA"), (0x8, "GAMMA")];

    #[test]
    fn test_describe_bits_empty() {
        assert_eq!(describe_bits(0, NAMES), "<none>");
    }

    #[test]
    fn test_describe_bits_single() {
        assert_eq!(describe_bits(0x2, NAMES), "BETA");
    }

    #[test]
    fn test_describe_bits_multiple_in_table_order() {
        assert_eq!(describe_bits(0x9, NAMES), "ALPHA | GAMMA");
    }

    #[test]
    fn test_describe_bits_residue() {
        assert_eq!(describe_bits(0x41, NAMES), "ALPHA | 0x40");
    }

    #[test]
    fn test_describe_bits_residue_only() {
        assert_eq!(describe_bits(0x100, NAMES), "0x100");
    }
}
