//! 종목 현재가 추출
//!
//! `/item/main.naver` 페이지에서 종목명, 현재가, 전일대비, 시가/고가/저가/거래량을 읽는다.
//! 노드가 없거나 숫자가 아니면 해당 필드만 0 이 되고 오류는 나지 않는다.

use super::document::Document;
use super::normalize::parse_int_or_default;
use crate::config::SelectorConfig;
use crate::models::Quote;

/// 당일 시세 노드의 위치
const OPEN_IDX: usize = 0;
const HIGH_IDX: usize = 1;
const LOW_IDX: usize = 2;
const VOLUME_IDX: usize = 3;

pub fn parse_quote(html: &str, code: &str, selectors: &SelectorConfig) -> Quote {
    let doc = Document::parse_html(html);
    let int_at = |css: &str, n: usize| {
        doc.nth_text(css, n)
            .map(|text| parse_int_or_default(&text, 0))
            .unwrap_or(0)
    };

    let change_rate = doc
        .nth_text(&selectors.previous_close_delta, 1)
        .filter(|rate| !rate.is_empty())
        .unwrap_or_else(|| "0%".to_string());

    let quote = Quote {
        code: code.to_string(),
        name: doc.nth_text(&selectors.company_name, 0).unwrap_or_default(),
        price: int_at(&selectors.current_price, 0),
        change: int_at(&selectors.previous_close_delta, 0),
        change_rate,
        open: int_at(&selectors.today_range, OPEN_IDX),
        high: int_at(&selectors.today_range, HIGH_IDX),
        low: int_at(&selectors.today_range, LOW_IDX),
        volume: int_at(&selectors.today_range, VOLUME_IDX),
    };

    if quote.name.is_empty() {
        log::debug!("종목명 노드를 찾지 못했습니다: {}", code);
    }
    quote
}
