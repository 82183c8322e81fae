//! 비즈니스 로직 서비스
//!
//! 데이터 수집, 표시용 텍스트 변환, 도구 호출 처리

pub mod format;  // 결과 텍스트 변환
pub mod naver;   // 네이버 금융 데이터 수집
pub mod tools;   // 도구 목록/호출
