// src/types/datetime.rs

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// 任意のオフセット付き日時を UTC オフセットへ揃える
pub fn normalize_to_utc(value: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    value.with_timezone(&Utc).fixed_offset()
}

/// 日時文字列を解釈して UTC に揃える
///
/// タイムゾーン指定のない値はローカル時刻ではなく UTC として扱う。
/// 日付のみの場合は UTC の 00:00 とする。
pub fn parse_utc_datetime(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    let raw = raw.trim();

    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Ok(normalize_to_utc(value));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    Err(format!("Invalid date-time value: '{}'", raw))
}

/// serde 用: 必須の日時フィールド
pub fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc_datetime(&raw).map_err(serde::de::Error::custom)
}

/// serde 用: 省略可能な日時フィールド（`#[serde(default)]` と併用）
pub fn deserialize_optional_utc<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_utc_datetime(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
