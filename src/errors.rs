//! 오류 분류
//!
//! - Validation: 호출자 입력 오류 (요청 전 즉시 반환)
//! - Fetch: 네트워크/타임아웃/비정상 상태 코드
//! - NoData: 사용할 수 있는 행이 하나도 없음 (차트 경로에서만 사용)
//!
//! 개별 필드의 파싱 실패는 오류가 아니라 기본값(0)으로 처리된다.

use std::fmt;

use actix_web::http::StatusCode;
use thiserror::Error;

/// 실패한 작업 구분 (오류 메시지 접두어로 사용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Quote,
    Search,
    MarketCapRanking,
    VolumeRanking,
    Chart,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Quote => "시세 조회",
            Self::Search => "종목 검색",
            Self::MarketCapRanking => "시가총액 순위 조회",
            Self::VolumeRanking => "거래량 순위 조회",
            Self::Chart => "차트 데이터 조회",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum StockError {
    #[error("{0}")]
    Validation(String),

    #[error("{operation} 오류: {message}")]
    Fetch { operation: Operation, message: String },

    #[error("{0}")]
    NoData(String),
}

impl StockError {
    pub fn fetch(operation: Operation, message: impl Into<String>) -> Self {
        Self::Fetch {
            operation,
            message: message.into(),
        }
    }

    /// REST 응답 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Fetch { .. } => StatusCode::BAD_GATEWAY,
            Self::NoData(_) => StatusCode::NOT_FOUND,
        }
    }
}

pub type StockResult<T> = Result<T, StockError>;
