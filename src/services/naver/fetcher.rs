//! HTTP 요청
//!
//! 고정 헤더로 GET 요청을 보내고 본문을 문자열로 돌려준다.
//! 전송 오류, 타임아웃, 2xx 이외의 상태는 모두 `StockError::Fetch` 가 된다. 재시도는 하지 않는다.

use encoding_rs::{Encoding, EUC_KR, UTF_8};
use reqwest::header::{CONTENT_TYPE, REFERER, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

use crate::config::NaverConfig;
use crate::errors::{Operation, StockError, StockResult};

pub struct Fetcher {
    client: Client,
    user_agent: String,
    referer: String,
}

impl Fetcher {
    pub fn new(config: &NaverConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            referer: config.referer(),
        })
    }

    /// GET 요청 후 본문 반환
    ///
    /// `with_referer` 가 참이면 포털 루트를 Referer 로 붙인다 (차트 피드).
    pub async fn fetch(
        &self,
        operation: Operation,
        url: &str,
        with_referer: bool,
    ) -> StockResult<String> {
        log::info!("📡 요청 URL: {}", url);

        let mut request = self.client.get(url).header(USER_AGENT, &self.user_agent);
        if with_referer {
            request = request.header(REFERER, &self.referer);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StockError::fetch(operation, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StockError::fetch(operation, format!("HTTP {}", status)));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StockError::fetch(operation, e.to_string()))?;
        log::debug!("📥 {} 응답 {} 바이트", operation, bytes.len());

        Ok(decode_body(&bytes, content_type.as_deref()))
    }
}

/// Content-Type 의 charset 으로 디코딩
///
/// charset 이 없으면 UTF-8 로 읽을 수 있을 때 UTF-8, 아니면 EUC-KR
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let declared = content_type
        .and_then(|ct| {
            ct.split(';')
                .filter_map(|part| part.trim().strip_prefix("charset="))
                .next()
        })
        .and_then(|label| Encoding::for_label(label.trim_matches('"').as_bytes()));

    let encoding = match declared {
        Some(encoding) => encoding,
        None if std::str::from_utf8(bytes).is_ok() => UTF_8,
        None => EUC_KR,
    };

    encoding.decode(bytes).0.into_owned()
}
