//! 주식 데이터 모델
//!
//! 네이버 금융에서 추출한 레코드 정의. 모든 레코드는 호출마다 새로 만들어진다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 종목 현재가
///
/// 숫자 필드는 원문이 없거나 파싱할 수 없으면 0
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Quote {
    /// 종목 코드 (6자리)
    pub code: String,
    /// 종목명 (마크업이 바뀌면 빈 문자열일 수 있음)
    pub name: String,
    /// 현재가
    pub price: i64,
    /// 전일대비
    pub change: i64,
    /// 등락률 (표시 그대로, 예: "+1.23%")
    pub change_rate: String,
    /// 시가
    pub open: i64,
    /// 고가
    pub high: i64,
    /// 저가
    pub low: i64,
    /// 거래량
    pub volume: i64,
}

/// 종목 검색 결과
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResult {
    pub code: String,
    pub name: String,
}

/// 순위 항목의 지표 값 (화면 표시 그대로)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RankValue {
    /// 시가총액 (억원)
    MarketCap(String),
    /// 거래량
    Volume(String),
}

impl RankValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::MarketCap(v) | Self::Volume(v) => v,
        }
    }
}

/// 순위 표의 한 행
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RankEntry {
    /// 순위 (1부터, 원문 그대로)
    pub rank: u32,
    pub code: String,
    pub name: String,
    /// 현재가
    pub price: i64,
    #[serde(flatten)]
    pub value: RankValue,
}

/// 일봉
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Candle {
    /// YYYYMMDD
    pub date: String,
    pub open: i64,
    pub high: i64,
    pub low: i64,
    pub close: i64,
    pub volume: i64,
}

/// 시장 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Market {
    /// 유가증권시장
    #[default]
    Kospi,
    /// 코스닥
    Kosdaq,
}

impl Market {
    /// "kospi" (대소문자 무시) 이외의 값은 모두 코스닥
    pub fn from_selector(selector: &str) -> Self {
        if selector.trim().eq_ignore_ascii_case("kospi") {
            Self::Kospi
        } else {
            Self::Kosdaq
        }
    }

    /// 네이버 sosok 파라미터
    pub fn sosok(&self) -> &'static str {
        match self {
            Self::Kospi => "0",
            Self::Kosdaq => "1",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kospi => write!(f, "KOSPI"),
            Self::Kosdaq => write!(f, "KOSDAQ"),
        }
    }
}

/// 순위 조회 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingKind {
    MarketCap,
    Volume,
}

/// 기본 조회 일수
pub const DEFAULT_CHART_DAYS: u32 = 30;
/// 기본 순위 개수
pub const DEFAULT_RANK_LIMIT: usize = 10;

/// 검색 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}

/// 차트 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// 조회 일수 (없거나 0 이면 30)
    pub days: Option<u32>,
}

impl ChartQuery {
    pub fn days(&self) -> u32 {
        match self.days {
            Some(days) if days > 0 => days,
            _ => DEFAULT_CHART_DAYS,
        }
    }
}

/// 순위 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    /// kospi | kosdaq (기본 kospi)
    pub market: Option<String>,
    /// 조회 개수 (없거나 0 이면 10)
    pub limit: Option<usize>,
}

impl RankingQuery {
    pub fn market(&self) -> Market {
        self.market
            .as_deref()
            .map(Market::from_selector)
            .unwrap_or_default()
    }

    pub fn limit(&self) -> usize {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_RANK_LIMIT,
        }
    }
}
