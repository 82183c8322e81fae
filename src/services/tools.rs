//! 도구 목록과 호출 처리
//!
//! 다섯 개의 도구 이름과 입력 스키마를 선언하고, 호출을 해당 작업으로 보낸다.
//! 모든 실패는 `is_error` 가 켜진 결과 한 줄로 돌려주므로 호출 채널은 계속 살아 있다.

use serde_json::{json, Value};

use super::format::{format_chart, format_error, format_quote, format_ranking, format_search};
use super::naver::StockService;
use crate::errors::{StockError, StockResult};
use crate::models::{
    Market, RankingKind, ToolDescriptor, ToolResult, DEFAULT_CHART_DAYS, DEFAULT_RANK_LIMIT,
};

pub const GET_STOCK_PRICE: &str = "get_stock_price";
pub const SEARCH_STOCK: &str = "search_stock";
pub const GET_STOCK_CHART: &str = "get_stock_chart";
pub const GET_MARKET_CAP: &str = "get_market_cap";
pub const GET_TRADING_VOLUME: &str = "get_trading_volume";

fn market_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "market": {
                "type": "string",
                "description": "시장 (kospi 또는 kosdaq)",
                "enum": ["kospi", "kosdaq"],
                "default": "kospi"
            },
            "limit": {
                "type": "integer",
                "description": description,
                "default": DEFAULT_RANK_LIMIT
            }
        }
    })
}

/// 도구 목록
pub fn list_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: GET_STOCK_PRICE.to_string(),
            description: "특정 종목의 현재가 정보를 조회합니다. 6자리 종목 코드를 입력하세요.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "code": {
                        "type": "string",
                        "description": "종목 코드 (6자리, 예: 005930=삼성전자)"
                    }
                },
                "required": ["code"]
            }),
        },
        ToolDescriptor {
            name: SEARCH_STOCK.to_string(),
            description: "종목명으로 종목 코드를 검색합니다.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "keyword": {
                        "type": "string",
                        "description": "검색할 종목명 (예: 삼성전자, 카카오)"
                    }
                },
                "required": ["keyword"]
            }),
        },
        ToolDescriptor {
            name: GET_STOCK_CHART.to_string(),
            description: "특정 종목의 일봉 차트 데이터를 조회합니다.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "code": {
                        "type": "string",
                        "description": "종목 코드 (6자리)"
                    },
                    "days": {
                        "type": "integer",
                        "description": "조회할 일수 (기본값: 30일)",
                        "default": DEFAULT_CHART_DAYS
                    }
                },
                "required": ["code"]
            }),
        },
        ToolDescriptor {
            name: GET_MARKET_CAP.to_string(),
            description: "시가총액 순위를 조회합니다.".to_string(),
            input_schema: market_schema("조회할 종목 수 (기본값: 10)"),
        },
        ToolDescriptor {
            name: GET_TRADING_VOLUME.to_string(),
            description: "거래량 순위를 조회합니다.".to_string(),
            input_schema: market_schema("조회할 종목 수 (기본값: 10)"),
        },
    ]
}

// ==================== 인자 읽기 ====================

fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

/// 양의 정수 인자. 없거나 0 이면 기본값
fn positive_arg(args: &Value, key: &str, default: u64) -> StockResult<u64> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => match value.as_u64() {
            Some(0) => Ok(default),
            Some(n) => Ok(n),
            None => Err(StockError::Validation(format!(
                "{} 는 양의 정수여야 합니다",
                key
            ))),
        },
    }
}

fn market_args(args: &Value) -> StockResult<(Market, usize)> {
    let market = str_arg(args, "market")
        .map(Market::from_selector)
        .unwrap_or_default();
    let limit = positive_arg(args, "limit", DEFAULT_RANK_LIMIT as u64)?;
    let limit = usize::try_from(limit)
        .map_err(|_| StockError::Validation("limit 값이 너무 큽니다".to_string()))?;
    Ok((market, limit))
}

async fn dispatch(service: &StockService, name: &str, args: &Value) -> StockResult<String> {
    match name {
        GET_STOCK_PRICE => {
            let code = str_arg(args, "code").unwrap_or_default();
            let quote = service.get_quote(code).await?;
            Ok(format_quote(&quote))
        }
        SEARCH_STOCK => {
            let keyword = str_arg(args, "keyword").unwrap_or_default();
            let results = service.search(keyword).await?;
            Ok(format_search(keyword.trim(), &results))
        }
        GET_STOCK_CHART => {
            let code = str_arg(args, "code").unwrap_or_default();
            let days = positive_arg(args, "days", u64::from(DEFAULT_CHART_DAYS))?;
            let days = u32::try_from(days)
                .map_err(|_| StockError::Validation("days 값이 너무 큽니다".to_string()))?;
            let candles = service.chart(code, days).await?;
            Ok(format_chart(code, days, &candles))
        }
        GET_MARKET_CAP => {
            let (market, limit) = market_args(args)?;
            let entries = service.market_cap_ranking(market, limit).await?;
            Ok(format_ranking(RankingKind::MarketCap, market, limit, &entries))
        }
        GET_TRADING_VOLUME => {
            let (market, limit) = market_args(args)?;
            let entries = service.volume_ranking(market, limit).await?;
            Ok(format_ranking(RankingKind::Volume, market, limit, &entries))
        }
        _ => Err(StockError::Validation(format!("Unknown tool: {}", name))),
    }
}

/// 도구 호출. 실패는 is_error 결과로 변환된다
pub async fn call_tool(service: &StockService, name: &str, args: &Value) -> ToolResult {
    match dispatch(service, name, args).await {
        Ok(text) => ToolResult::text(text),
        Err(e) => {
            log::warn!("도구 {} 호출 실패: {}", name, e);
            ToolResult::error(format_error(&e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NaverConfig;
    use httpmock::prelude::*;

    /// 요청이 나가면 안 되는 경우용 (연결 불가 주소)
    fn offline_service() -> StockService {
        let config = NaverConfig {
            finance_base_url: "http://127.0.0.1:9".to_string(),
            chart_base_url: "http://127.0.0.1:9".to_string(),
            timeout_ms: 500,
            ..Default::default()
        };
        StockService::new(config).unwrap()
    }

    #[test]
    fn test_list_tools() {
        let tools = list_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![GET_STOCK_PRICE, SEARCH_STOCK, GET_STOCK_CHART, GET_MARKET_CAP, GET_TRADING_VOLUME]
        );
        assert_eq!(tools[0].input_schema["required"], json!(["code"]));
        assert_eq!(tools[2].input_schema["properties"]["days"]["default"], 30);
        assert_eq!(tools[3].input_schema["properties"]["market"]["default"], "kospi");
    }

    #[test]
    fn test_positive_arg() {
        let args = json!({ "days": 0, "limit": 7, "bad": "x" });
        assert_eq!(positive_arg(&args, "days", 30).unwrap(), 30);
        assert_eq!(positive_arg(&args, "limit", 10).unwrap(), 7);
        assert_eq!(positive_arg(&args, "missing", 10).unwrap(), 10);
        assert!(positive_arg(&args, "bad", 10).is_err());
        assert!(positive_arg(&json!({ "limit": -3 }), "limit", 10).is_err());
    }

    #[tokio::test]
    async fn test_validation_error_is_flagged() {
        let service = offline_service();

        let result = call_tool(&service, GET_STOCK_PRICE, &json!({ "code": "123" })).await;
        assert!(result.is_error);
        assert_eq!(
            result.first_text(),
            "❌ 오류 발생: 6자리 종목 코드를 입력해주세요 (예: 005930)"
        );

        let result = call_tool(&service, SEARCH_STOCK, &json!({})).await;
        assert!(result.is_error);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let result = call_tool(&offline_service(), "get_weather", &json!({})).await;
        assert!(result.is_error);
        assert_eq!(result.first_text(), "❌ 오류 발생: Unknown tool: get_weather");
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_channel_alive() {
        let service = offline_service();

        let first = call_tool(&service, GET_STOCK_PRICE, &json!({ "code": "005930" })).await;
        assert!(first.is_error);
        assert!(first.first_text().starts_with("❌ 오류 발생: 시세 조회 오류:"));

        // 같은 서비스로 다음 호출도 정상 처리
        let second = call_tool(&service, GET_STOCK_PRICE, &json!({ "code": "1" })).await;
        assert!(second.is_error);
    }

    #[tokio::test]
    async fn test_market_cap_tool_renders_table() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.path("/sise/sise_market_sum.naver").query_param("sosok", "1");
                then.status(200)
                    .body(crate::services::naver::fixtures::ranking_html());
            })
            .await;
        let service = StockService::new(NaverConfig {
            finance_base_url: server.base_url(),
            ..Default::default()
        })
        .unwrap();

        let result = call_tool(
            &service,
            GET_MARKET_CAP,
            &json!({ "market": "kosdaq", "limit": 3 }),
        )
        .await;

        assert!(!result.is_error);
        let text = result.first_text();
        assert!(text.starts_with("💰 KOSDAQ 시가총액 순위 (상위 3개)"));
        let rows = text.lines().skip_while(|l| !l.starts_with("---")).skip(1);
        assert_eq!(rows.count(), 3);
    }
}
