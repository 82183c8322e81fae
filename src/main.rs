//! 한국 주식 데이터 백엔드
//!
//! 네이버 금융 페이지에서 현재가, 종목 검색, 시가총액/거래량 순위, 일봉을 읽어
//! REST API 와 도구 호출 API 로 제공한다

mod config;     // 설정
mod errors;     // 오류 분류
mod handlers;   // HTTP 요청 처리기
mod models;     // 데이터 모델
mod services;   // 데이터 수집 및 변환

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;
use crate::services::naver::StockService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = AppConfig::load();

    // RUST_LOG 가 없으면 설정 파일의 레벨 사용
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));
    source.log();

    let service = web::Data::new(StockService::new(config.naver.clone())?);
    let bind_addr = config.bind_addr();

    log::info!("한국 주식 데이터 서비스 시작: {}", bind_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(handlers::config)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_addr)?.run().await?;
    Ok(())
}
