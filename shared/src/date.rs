//! 日期类型模块
//!
//! `AppliedDate` 表示投递日期（不含时间的日历日期）：
//! - 序列化为 `YYYY-MM-DD`
//! - 反序列化时同时接受 `YYYY-MM-DD` 与 RFC 3339 时间戳（只取日期部分），
//!   因为部分后端会把日期字段存成完整时间戳返回

use crate::DraftError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 投递日期
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppliedDate(NaiveDate);

impl AppliedDate {
    /// 由年月日构造，非法日期返回 None
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// 解析用户输入或接口返回的日期字符串
    pub fn parse(input: &str) -> Result<Self, DraftError> {
        let trimmed = input.trim();
        // RFC 3339 时间戳以 `YYYY-MM-DD` 开头，截取前 10 个字符即可
        let date_part = match trimmed.get(..10) {
            Some(prefix) if trimmed.len() > 10 && trimmed.as_bytes()[10] == b'T' => prefix,
            _ => trimmed,
        };

        NaiveDate::parse_from_str(date_part, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DraftError::InvalidDate(input.to_string()))
    }

    #[inline]
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for AppliedDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for AppliedDate {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AppliedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for AppliedDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AppliedDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_date() {
        let date = AppliedDate::parse("2024-01-01").unwrap();
        assert_eq!(date, AppliedDate::from_ymd(2024, 1, 1).unwrap());
        assert_eq!(date.to_string(), "2024-01-01");
    }

    #[test]
    fn parses_timestamp_prefix() {
        let date = AppliedDate::parse("2024-03-15T00:00:00.000Z").unwrap();
        assert_eq!(date.to_string(), "2024-03-15");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            AppliedDate::parse("15/03/2024"),
            Err(DraftError::InvalidDate(_))
        ));
        assert!(AppliedDate::parse("").is_err());
        assert!(AppliedDate::parse("2024-02-30").is_err());
    }

    #[test]
    fn serde_uses_iso_date() {
        let date = AppliedDate::from_ymd(2023, 12, 5).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2023-12-05\"");

        let back: AppliedDate = serde_json::from_str("\"2023-12-05T10:20:30Z\"").unwrap();
        assert_eq!(back, date);
    }
}
