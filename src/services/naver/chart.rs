//! 일봉 피드 추출
//!
//! `<item data="20240101|100|110|90|105|500" />` 형태의 XML 피드.
//! 필드 순서: 날짜|시가|고가|저가|종가|거래량

use chrono::NaiveDate;

use super::document::Document;
use super::normalize::{parse_int_or_default, truncate_date};
use crate::config::SelectorConfig;
use crate::models::Candle;

/// 레코드 한 줄 파싱
///
/// 숫자 필드는 실패 시 0. 날짜가 유효한 YYYYMMDD 가 아니면 None.
pub fn parse_candle_record(record: &str) -> Option<Candle> {
    let mut fields = record.split('|');
    let date = truncate_date(fields.next()?.trim());

    let is_valid_date = date.len() == 8
        && date.chars().all(|c| c.is_ascii_digit())
        && NaiveDate::parse_from_str(date, "%Y%m%d").is_ok();
    if !is_valid_date {
        log::debug!("잘못된 날짜의 레코드 건너뜀: {}", record);
        return None;
    }

    let mut next_int = || parse_int_or_default(fields.next().unwrap_or(""), 0);

    Some(Candle {
        date: date.to_string(),
        open: next_int(),
        high: next_int(),
        low: next_int(),
        close: next_int(),
        volume: next_int(),
    })
}

/// 피드의 레코드를 순서대로 파싱
pub fn parse_candles(xml: &str, selectors: &SelectorConfig) -> Vec<Candle> {
    let doc = Document::parse_xml(xml);

    let candles: Vec<Candle> = doc
        .select(&selectors.chart_item)
        .into_iter()
        .filter_map(|item| item.value().attr(&selectors.chart_item_attr))
        .filter_map(parse_candle_record)
        .collect();

    log::debug!("📈 일봉 {} 건", candles.len());
    candles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::naver::fixtures::CHART_XML;

    #[test]
    fn test_parse_candles() {
        let candles = parse_candles(CHART_XML, &SelectorConfig::default());

        assert_eq!(candles.len(), 3);
        assert_eq!(
            candles[0],
            Candle {
                date: "20240101".into(),
                open: 100,
                high: 110,
                low: 90,
                close: 105,
                volume: 500,
            }
        );
        let dates: Vec<&str> = candles.iter().map(|c| c.date.as_str()).collect();
        assert_eq!(dates, vec!["20240101", "20240102", "20240103"]);
    }

    #[test]
    fn test_malformed_fields_default_to_zero() {
        let candle = parse_candle_record("20240105|abc||90").unwrap();
        assert_eq!(candle.date, "20240105");
        assert_eq!((candle.open, candle.high, candle.low), (0, 0, 90));
        assert_eq!((candle.close, candle.volume), (0, 0));
    }

    #[test]
    fn test_date_is_truncated_and_validated() {
        let candle = parse_candle_record("202401051530|1|2|3|4|5").unwrap();
        assert_eq!(candle.date, "20240105");
        assert!(NaiveDate::parse_from_str(&candle.date, "%Y%m%d").is_ok());

        assert!(parse_candle_record("20241332|1|2|3|4|5").is_none());
        assert!(parse_candle_record("2024|1|2|3|4|5").is_none());
        assert!(parse_candle_record("").is_none());
    }

    #[test]
    fn test_items_without_data_are_skipped() {
        let xml = r#"<protocol><chartdata>
            <item />
            <item data="20240102|105|115|95|110|600" />
        </chartdata></protocol>"#;
        let candles = parse_candles(xml, &SelectorConfig::default());
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].volume, 600);
    }

    #[test]
    fn test_empty_feed() {
        assert!(parse_candles("<protocol></protocol>", &SelectorConfig::default()).is_empty());
    }
}
