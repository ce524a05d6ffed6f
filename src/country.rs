//! 国家代码显示名称映射模块
//!
//! 提供国家代码到本地化显示名称的纯查表转换，不依赖任何浏览器 API。

/// 固定的国家代码映射表
///
/// 仅包含当前参与排名的国家/地区；未收录的代码按原样显示。
const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("CN", "中国大陆"),
    ("IN", "印度"),
    ("KE", "肯尼亚"),
    ("US", "美国"),
    ("TW", "中国台湾"),
    ("KR", "韩国"),
    ("GB", "英国"),
    ("SG", "新加坡"),
    ("VN", "越南"),
    ("MY", "马来西亚"),
    ("HK", "中国香港"),
    ("NG", "尼日利亚"),
    ("ID", "印度尼西亚"),
    ("TH", "泰国"),
    ("HU", "匈牙利"),
    ("AM", "亚美尼亚"),
];

/// 将国家代码转换为显示名称
///
/// - 代码缺失或为空时返回占位符 `"-"`
/// - 命中映射表（不区分大小写）时返回本地化名称
/// - 未命中时原样返回输入的代码
pub fn country_name(code: Option<&str>) -> String {
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        return "-".to_string();
    };

    let key = code.to_uppercase();
    COUNTRY_NAMES
        .iter()
        .find(|(c, _)| *c == key)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes() {
        assert_eq!(country_name(Some("CN")), "中国大陆");
        assert_eq!(country_name(Some("US")), "美国");
        assert_eq!(country_name(Some("AM")), "亚美尼亚");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(country_name(Some("cn")), "中国大陆");
        assert_eq!(country_name(Some("hK")), "中国香港");
    }

    #[test]
    fn unknown_code_is_returned_unchanged() {
        assert_eq!(country_name(Some("FR")), "FR");
        // Input casing is preserved, not the uppercased lookup key
        assert_eq!(country_name(Some("fr")), "fr");
    }

    #[test]
    fn missing_or_empty_code_yields_placeholder() {
        assert_eq!(country_name(None), "-");
        assert_eq!(country_name(Some("")), "-");
    }
}
