//! 네이버 금융 엔드포인트 상수와 URL 조립

use url::form_urlencoded;

use crate::models::Market;

// ==================== 네이버 금융 경로 ====================

/// 종목 상세 (현재가)
pub const QUOTE_PATH: &str = "/item/main.naver";
/// 종목 검색
pub const SEARCH_PATH: &str = "/search/searchList.naver";
/// 시가총액 순위
pub const MARKET_CAP_PATH: &str = "/sise/sise_market_sum.naver";
/// 거래량 순위
pub const VOLUME_PATH: &str = "/sise/sise_quant.naver";
/// 일봉 차트 피드 (fchart 호스트)
pub const CHART_PATH: &str = "/sise.nhn";

/// 검색 결과 최대 개수
pub const SEARCH_LIMIT: usize = 10;

fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

pub fn quote_url(base: &str, code: &str) -> String {
    format!("{}?code={}", join(base, QUOTE_PATH), code)
}

pub fn search_url(base: &str, keyword: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(keyword.as_bytes()).collect();
    format!("{}?query={}", join(base, SEARCH_PATH), encoded)
}

pub fn market_cap_url(base: &str, market: Market) -> String {
    format!("{}?sosok={}&page=1", join(base, MARKET_CAP_PATH), market.sosok())
}

pub fn volume_url(base: &str, market: Market) -> String {
    format!("{}?sosok={}", join(base, VOLUME_PATH), market.sosok())
}

pub fn chart_url(base: &str, code: &str, days: u32) -> String {
    format!(
        "{}?symbol={}&timeframe=day&count={}&requestType=0",
        join(base, CHART_PATH),
        code,
        days
    )
}
