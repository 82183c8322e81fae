//! 주식 조회 처리기
//!
//! ## API 목록
//! - GET /stocks/search?keyword= - 종목 검색
//! - GET /stocks/{code} - 현재가
//! - GET /stocks/{code}/chart?days= - 일봉
//! - GET /rankings/market-cap?market=&limit= - 시가총액 순위
//! - GET /rankings/volume?market=&limit= - 거래량 순위

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::errors::StockResult;
use crate::models::{ApiResponse, ChartQuery, RankingKind, RankingQuery, SearchQuery};
use crate::services::naver::StockService;

/// 결과를 공통 응답으로 변환 (오류 종류에 따라 상태 코드 결정)
fn respond<T: Serialize>(result: StockResult<T>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data)),
        Err(e) => {
            log::warn!("요청 처리 실패: {}", e);
            HttpResponse::build(e.status_code()).json(ApiResponse::<T>::error(e.to_string()))
        }
    }
}

/// GET /api/v1/stocks/{code}
pub async fn get_quote(
    service: web::Data<StockService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let code = path.into_inner();
    Ok(respond(service.get_quote(&code).await))
}

/// GET /api/v1/stocks/search?keyword=카카오
pub async fn search_stock(
    service: web::Data<StockService>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let keyword = query.keyword.as_deref().unwrap_or_default();
    Ok(respond(service.search(keyword).await))
}

/// GET /api/v1/stocks/{code}/chart?days=30
pub async fn get_chart(
    service: web::Data<StockService>,
    path: web::Path<String>,
    query: web::Query<ChartQuery>,
) -> Result<HttpResponse> {
    let code = path.into_inner();
    Ok(respond(service.chart(&code, query.days()).await))
}

/// GET /api/v1/rankings/market-cap?market=kospi&limit=10
pub async fn get_market_cap(
    service: web::Data<StockService>,
    query: web::Query<RankingQuery>,
) -> Result<HttpResponse> {
    let result = service
        .ranking(RankingKind::MarketCap, query.market(), query.limit())
        .await;
    Ok(respond(result))
}

/// GET /api/v1/rankings/volume?market=kosdaq&limit=10
pub async fn get_trading_volume(
    service: web::Data<StockService>,
    query: web::Query<RankingQuery>,
) -> Result<HttpResponse> {
    let result = service
        .ranking(RankingKind::Volume, query.market(), query.limit())
        .await;
    Ok(respond(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stocks")
            .route("/search", web::get().to(search_stock))
            .route("/{code}", web::get().to(get_quote))
            .route("/{code}/chart", web::get().to(get_chart)),
    )
    .service(
        web::scope("/rankings")
            .route("/market-cap", web::get().to(get_market_cap))
            .route("/volume", web::get().to(get_trading_volume)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NaverConfig;
    use crate::services::naver::fixtures::{ranking_html, QUOTE_HTML};
    use actix_web::{test, App};
    use httpmock::prelude::*;

    fn service_for(base_url: String) -> web::Data<StockService> {
        let config = NaverConfig {
            finance_base_url: base_url.clone(),
            chart_base_url: base_url,
            ..Default::default()
        };
        web::Data::new(StockService::new(config).unwrap())
    }

    #[actix_web::test]
    async fn test_get_quote_endpoint() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.path("/item/main.naver").query_param("code", "005930");
                then.status(200).body(QUOTE_HTML);
            })
            .await;

        let app = test::init_service(
            App::new()
                .app_data(service_for(server.base_url()))
                .configure(config),
        )
        .await;
        let req = test::TestRequest::get().uri("/stocks/005930").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["price"], 70000);
        assert_eq!(body["data"]["name"], "삼성전자");
    }

    #[actix_web::test]
    async fn test_invalid_code_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(service_for("http://127.0.0.1:9".to_string()))
                .configure(config),
        )
        .await;
        let req = test::TestRequest::get().uri("/stocks/12345/chart").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_ranking_endpoint_defaults() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.path("/sise/sise_quant.naver").query_param("sosok", "0");
                then.status(200).body(ranking_html());
            })
            .await;

        let app = test::init_service(
            App::new()
                .app_data(service_for(server.base_url()))
                .configure(config),
        )
        .await;
        let req = test::TestRequest::get().uri("/rankings/volume").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        mock.assert_async().await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 8);
        assert_eq!(data[0]["volume"], "12,345,678");
    }
}
