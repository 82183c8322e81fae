//! 네이버 금융 주식 서비스
//!
//! 호출마다 URL 조립 → 요청 → 추출 순으로 처리하며 호출 사이에 상태를 두지 않는다.
//! 공유하는 것은 reqwest 클라이언트(연결 재사용)와 읽기 전용 설정뿐이다.

use super::chart::parse_candles;
use super::common::{chart_url, market_cap_url, quote_url, search_url, volume_url};
use super::fetcher::Fetcher;
use super::normalize::validate_code;
use super::quote::parse_quote;
use super::ranking::parse_ranking;
use super::search::parse_search_results;
use crate::config::NaverConfig;
use crate::errors::{Operation, StockError, StockResult};
use crate::models::{Candle, Market, Quote, RankEntry, RankingKind, SearchResult};

pub struct StockService {
    fetcher: Fetcher,
    config: NaverConfig,
}

impl StockService {
    pub fn new(config: NaverConfig) -> anyhow::Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(&config)?,
            config,
        })
    }

    /// 종목 현재가
    pub async fn get_quote(&self, code: &str) -> StockResult<Quote> {
        let code = validate_code(code)?;
        let url = quote_url(&self.config.finance_base_url, code);
        let html = self.fetcher.fetch(Operation::Quote, &url, false).await?;

        Ok(parse_quote(&html, code, &self.config.selectors))
    }

    /// 종목명 검색 (최대 10건)
    pub async fn search(&self, keyword: &str) -> StockResult<Vec<SearchResult>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(StockError::Validation("검색할 종목명을 입력해주세요".to_string()));
        }

        let url = search_url(&self.config.finance_base_url, keyword);
        let html = self.fetcher.fetch(Operation::Search, &url, false).await?;

        Ok(parse_search_results(&html, &self.config.selectors))
    }

    /// 순위 조회
    pub async fn ranking(
        &self,
        kind: RankingKind,
        market: Market,
        limit: usize,
    ) -> StockResult<Vec<RankEntry>> {
        let base = &self.config.finance_base_url;
        let (operation, url) = match kind {
            RankingKind::MarketCap => (Operation::MarketCapRanking, market_cap_url(base, market)),
            RankingKind::Volume => (Operation::VolumeRanking, volume_url(base, market)),
        };
        let html = self.fetcher.fetch(operation, &url, false).await?;

        Ok(parse_ranking(&html, &self.config.selectors, kind, limit))
    }

    /// 시가총액 순위
    pub async fn market_cap_ranking(&self, market: Market, limit: usize) -> StockResult<Vec<RankEntry>> {
        self.ranking(RankingKind::MarketCap, market, limit).await
    }

    /// 거래량 순위
    pub async fn volume_ranking(&self, market: Market, limit: usize) -> StockResult<Vec<RankEntry>> {
        self.ranking(RankingKind::Volume, market, limit).await
    }

    /// 일봉 (피드 순서 그대로). 한 건도 없으면 NoData
    pub async fn chart(&self, code: &str, days: u32) -> StockResult<Vec<Candle>> {
        let code = validate_code(code)?;
        let url = chart_url(&self.config.chart_base_url, code, days);
        let xml = self.fetcher.fetch(Operation::Chart, &url, true).await?;

        let candles = parse_candles(&xml, &self.config.selectors);
        if candles.is_empty() {
            return Err(StockError::NoData("차트 데이터를 가져올 수 없습니다".to_string()));
        }
        Ok(candles)
    }
}
