/// DISCO 区域代码 → 显示名称静态映射表 (11 个已知配电公司)
pub const DISCO_NAMES: [(&str, &str); 11] = [
    ("11", "LESCO"),
    ("12", "GEPCO"),
    ("13", "FESCO"),
    ("14", "IESCO"),
    ("15", "MEPCO"),
    ("26", "PESCO"),
    ("27", "HAZECO"),
    ("37", "HESCO"),
    ("38", "SEPCO"),
    ("48", "QESCO"),
    ("59", "TESCO"),
];

/// 未知代码的哨兵名称
pub const UNKNOWN_DISCO: &str = "UNKNOWN";

/// 查询区域显示名称, 未知代码返回 "UNKNOWN"
pub fn disco_name(code: &str) -> &'static str {
    DISCO_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_DISCO)
}

/// 从编号串提取批次号 (前 2 位)
///
/// 编号串短于预期时返回空串而不报错: 畸形编号按约定静默降级,
/// 由下游统计自然体现 (garbage-in, garbage-out)。
pub fn batch_number(ref_digits: &str) -> &str {
    ref_digits.get(0..2).unwrap_or("")
}

/// 从编号串提取区域代码 (第 3-4 位)
pub fn disco_code(ref_digits: &str) -> &str {
    ref_digits.get(2..4).unwrap_or("")
}

/// 从编号串提取分区编码 (前 5 位)
pub fn sub_division(ref_digits: &str) -> &str {
    ref_digits.get(0..5).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fixed_offsets() {
        let r = "11123456789012";
        assert_eq!(batch_number(r), "11");
        assert_eq!(disco_code(r), "12");
        assert_eq!(sub_division(r), "11123");
    }

    #[test]
    fn short_reference_degrades_silently() {
        assert_eq!(batch_number("1"), "");
        assert_eq!(disco_code("112"), "");
        assert_eq!(sub_division("1112"), "");
        assert_eq!(batch_number(""), "");
    }

    #[test]
    fn known_and_unknown_disco_names() {
        assert_eq!(disco_name("15"), "MEPCO");
        assert_eq!(disco_name("59"), "TESCO");
        assert_eq!(disco_name("99"), "UNKNOWN");
        assert_eq!(disco_name(""), "UNKNOWN");
    }
}
