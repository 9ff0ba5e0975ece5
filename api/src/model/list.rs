use kernel::model::list::ListOptions;
use serde::Deserialize;

// skip と limit は呼び出し側に委ねる。上限は設けない
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

impl From<ListQuery> for ListOptions {
    fn from(value: ListQuery) -> Self {
        ListOptions {
            limit: value.limit,
            offset: value.skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_skip_zero_limit_ten() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn given_values_are_passed_through() {
        let query: ListQuery = serde_json::from_str(r#"{"skip": 3, "limit": 100}"#).unwrap();
        let options = ListOptions::from(query);
        assert_eq!(options.offset, 3);
        assert_eq!(options.limit, 100);
    }
}
