//! 표시용 텍스트 정규화
//!
//! 천 단위 구분자 제거, 0 기본값 정수 파싱, 종목 코드 검증.
//! 추출기는 모두 이 함수들을 거쳐 숫자를 만든다.

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{StockError, StockResult};

/// 종목 코드 길이
pub const CODE_LEN: usize = 6;

static CODE_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"code=(\d+)").expect("code= 패턴"));

/// 천 단위 구분자 제거 ("70,000" -> "70000")
pub fn strip_separators(text: &str) -> String {
    text.trim().replace(',', "")
}

/// 정수 파싱, 실패 시 기본값
///
/// 구분자를 지운 뒤 앞쪽의 부호와 숫자만 읽는다. "1,234원" 은 1234,
/// "-500" 은 -500, 숫자로 시작하지 않으면 `default`.
pub fn parse_int_or_default(text: &str, default: i64) -> i64 {
    let cleaned = strip_separators(text);
    let unsigned = cleaned.trim_start_matches(&['+', '-'][..]);
    let sign_len = cleaned.len() - unsigned.len();
    if sign_len > 1 {
        return default;
    }

    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return default;
    }

    cleaned[..sign_len + digits_len].parse().unwrap_or(default)
}

/// 종목 코드 검증: 정확히 6자의 ASCII 영숫자
pub fn validate_code(code: &str) -> StockResult<&str> {
    let valid = code.chars().count() == CODE_LEN && code.chars().all(|c| c.is_ascii_alphanumeric());
    if valid {
        Ok(code)
    } else {
        Err(StockError::Validation(
            "6자리 종목 코드를 입력해주세요 (예: 005930)".to_string(),
        ))
    }
}

/// 링크에서 `code=` 뒤의 숫자 추출
pub fn extract_code(href: &str) -> Option<String> {
    CODE_PARAM_RE
        .captures(href)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// 앞 8자 (YYYYMMDD) 만 남김
pub fn truncate_date(raw: &str) -> &str {
    match raw.char_indices().nth(8) {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    }
}
