//! 네이버 금융 데이터 서비스
//!
//! 공식 API 가 없는 네이버 금융 페이지를 읽어 타입이 있는 레코드로 바꾼다.
//!
//! ## 데이터 소스
//! - `/item/main.naver`: 현재가
//! - `/search/searchList.naver`: 종목 검색
//! - `/sise/sise_market_sum.naver`: 시가총액 순위
//! - `/sise/sise_quant.naver`: 거래량 순위
//! - `fchart.stock.naver.com/sise.nhn`: 일봉 XML 피드

mod chart;
mod common;
mod document;
mod fetcher;
mod normalize;
mod quote;
mod ranking;
mod search;
mod service;

#[cfg(test)]
pub(crate) mod fixtures;

pub use service::StockService;
