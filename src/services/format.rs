//! 결과 텍스트 변환
//!
//! 추출된 레코드를 사람이 읽는 고정폭 텍스트로 만든다. 추출 로직과는 분리되어 있다.

use std::fmt::Write;

use crate::models::{Candle, Market, Quote, RankEntry, RankingKind, SearchResult};

/// 차트에서 보여줄 최근 일수
pub const CHART_DISPLAY_DAYS: usize = 5;

/// 천 단위 구분 ("1234567" -> "1,234,567")
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// "20240101" -> "2024-01-01"
fn dashed_date(date: &str) -> String {
    match (date.get(0..4), date.get(4..6), date.get(6..8)) {
        (Some(y), Some(m), Some(d)) => format!("{}-{}-{}", y, m, d),
        _ => date.to_string(),
    }
}

pub fn format_quote(quote: &Quote) -> String {
    let sign = if quote.change >= 0 { "+" } else { "" };

    let mut text = format!("📊 {} ({})\n\n", quote.name, quote.code);
    let _ = writeln!(text, "현재가: {}원", group_thousands(quote.price));
    let _ = writeln!(
        text,
        "전일대비: {}{}원 ({})",
        sign,
        group_thousands(quote.change),
        quote.change_rate
    );
    let _ = writeln!(text, "시가: {}원", group_thousands(quote.open));
    let _ = writeln!(text, "고가: {}원", group_thousands(quote.high));
    let _ = writeln!(text, "저가: {}원", group_thousands(quote.low));
    let _ = writeln!(text, "거래량: {}주", group_thousands(quote.volume));
    text
}

pub fn format_search(keyword: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("❌ '{}'와 일치하는 종목을 찾을 수 없습니다.", keyword);
    }

    let mut text = format!("🔍 '{}' 검색 결과\n\n", keyword);
    for result in results {
        let _ = writeln!(text, "{}: {}", result.code, result.name);
    }
    text
}

/// 최근 5일만 표시
pub fn format_chart(code: &str, days: u32, candles: &[Candle]) -> String {
    let recent = &candles[candles.len().saturating_sub(CHART_DISPLAY_DAYS)..];

    let mut text = format!(
        "📈 {} 일봉 차트 (최근 {}일 중 최근 {}일)\n\n",
        code, days, CHART_DISPLAY_DAYS
    );
    text.push_str("날짜     | 시가   | 고가   | 저가   | 종가   | 거래량\n");
    text.push_str(&"-".repeat(60));
    text.push('\n');

    for candle in recent {
        let _ = writeln!(
            text,
            "{} | {:>6} | {:>6} | {:>6} | {:>6} | {}",
            dashed_date(&candle.date),
            group_thousands(candle.open),
            group_thousands(candle.high),
            group_thousands(candle.low),
            group_thousands(candle.close),
            group_thousands(candle.volume),
        );
    }
    text
}

pub fn format_ranking(
    kind: RankingKind,
    market: Market,
    limit: usize,
    entries: &[RankEntry],
) -> String {
    let (icon, title, column) = match kind {
        RankingKind::MarketCap => ("💰", "시가총액", "시가총액"),
        RankingKind::Volume => ("📊", "거래량", "거래량"),
    };

    let mut text = format!("{} {} {} 순위 (상위 {}개)\n\n", icon, market, title, limit);
    let _ = writeln!(
        text,
        "순위 | 종목코드 | 종목명              | 현재가      | {}",
        column
    );
    text.push_str(&"-".repeat(70));
    text.push('\n');

    for entry in entries {
        let _ = writeln!(
            text,
            "{:>3} | {} | {:<18} | {:>9} | {}",
            entry.rank,
            entry.code,
            entry.name,
            group_thousands(entry.price),
            entry.value.as_str()
        );
    }
    text
}

pub fn format_error(message: &str) -> String {
    format!("❌ 오류 발생: {}", message)
}
