//! 查询参数构造
//!
//! 稀疏构造：未设置的可选过滤条件完全不出现在请求里，
//! 而不是作为空字符串或 null 发送。

/// 查询参数构建器
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加必选参数
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// 追加可选参数；`None` 或空值时完全省略
    pub fn push_opt(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.pairs.push((key.to_string(), value));
            }
        }
        self
    }

    /// 追加列表参数，逗号拼接；空列表时完全省略
    pub fn push_list<S: AsRef<str>>(mut self, key: &str, values: &[S]) -> Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.as_ref())
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.push((key.to_string(), joined));
        }
        self
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_always_carries_the_pair() {
        let pairs = Query::new().push("page", 1).push("order", "desc").into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "1".to_string()),
                ("order".to_string(), "desc".to_string()),
            ]
        );
    }

    #[test]
    fn push_opt_omits_none_and_empty() {
        let pairs = Query::new()
            .push_opt("quarter", None::<&str>)
            .push_opt("country", Some(""))
            .push_opt("user", Some("alice"))
            .into_pairs();
        assert_eq!(pairs, vec![("user".to_string(), "alice".to_string())]);
    }

    #[test]
    fn push_list_joins_with_comma() {
        let pairs = Query::new()
            .push_list("countries", &["US", "CN"])
            .into_pairs();
        assert_eq!(pairs, vec![("countries".to_string(), "US,CN".to_string())]);
    }

    #[test]
    fn push_list_omits_empty_slice() {
        let pairs = Query::new()
            .push_list("genius_levels", &Vec::<String>::new())
            .into_pairs();
        assert!(pairs.is_empty());
    }
}
