use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// デフォルトページ番号
fn default_page() -> u32 {
    1
}

/// デフォルトページサイズ
fn default_per_page() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// 文字列または数値からu32をデシリアライズ
fn deserialize_u32_from_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u32),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.parse::<u32>().map_err(serde::de::Error::custom),
        StringOrNumber::Number(n) => Ok(n),
    }
}

/// `#[serde(flatten)]` 配下のクエリ値は文字列で届くため、文字列からも解釈する
pub fn deserialize_optional_from_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Str(String),
    }

    let raw = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Bool(b)) => b.to_string(),
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Str(s)) if s.trim().is_empty() => return Ok(None),
        Some(Raw::Str(s)) => s,
        None => return Ok(None),
    };
    raw.trim().parse::<T>().map(Some).map_err(serde::de::Error::custom)
}

/// 一覧系エンドポイント共通のページネーション
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_u32_from_string"
    )]
    pub page: u32,
    #[serde(
        default = "default_per_page",
        deserialize_with = "deserialize_u32_from_string"
    )]
    pub per_page: u32,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PaginationQuery {
    /// SeaORM の paginate 用 (0 始まりのページ番号, ページサイズ)
    pub fn page_index_and_size(&self) -> (u64, u64) {
        let page = self.page.max(1) as u64;
        let per_page = self.per_page.clamp(1, MAX_PAGE_SIZE) as u64;
        (page - 1, per_page)
    }
}

/// 一覧レスポンスのページ情報
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_count: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(query: &PaginationQuery, total_count: u64) -> Self {
        let (_, per_page) = query.page_index_and_size();
        Self {
            page: query.page.max(1),
            per_page: per_page as u32,
            total_count,
            total_pages: total_count.div_ceil(per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_clamped() {
        let query = PaginationQuery {
            page: 0,
            per_page: 1000,
        };
        assert_eq!(query.page_index_and_size(), (0, MAX_PAGE_SIZE as u64));
    }

    #[test]
    fn test_string_numbers_are_accepted() {
        let query: PaginationQuery = serde_json::from_str(r#"{"page":"3","per_page":"5"}"#).unwrap();
        assert_eq!(query.page_index_and_size(), (2, 5));
    }

    #[test]
    fn test_optional_values_from_strings() {
        #[derive(Deserialize)]
        struct Filter {
            #[serde(flatten)]
            pagination: PaginationQuery,
            #[serde(default, deserialize_with = "deserialize_optional_from_str")]
            is_active: Option<bool>,
            #[serde(default, deserialize_with = "deserialize_optional_from_str")]
            position_id: Option<i32>,
        }

        let filter: Filter =
            serde_json::from_str(r#"{"page":"2","is_active":"false","position_id":"7"}"#).unwrap();
        assert_eq!(filter.pagination.page, 2);
        assert_eq!(filter.is_active, Some(false));
        assert_eq!(filter.position_id, Some(7));

        let filter: Filter = serde_json::from_str(r#"{"is_active":true}"#).unwrap();
        assert_eq!(filter.is_active, Some(true));
        assert!(filter.position_id.is_none());
    }

    #[test]
    fn test_meta_total_pages() {
        let query = PaginationQuery {
            page: 2,
            per_page: 10,
        };
        let meta = PaginationMeta::new(&query, 21);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.page, 2);
    }
}
