//! 도구 프로토콜 처리기
//!
//! - GET /tools - 도구 목록
//! - POST /tools/call - 도구 호출 (실패해도 200 과 is_error 결과)

use actix_web::{web, HttpResponse, Result};

use crate::models::{ApiResponse, ToolCall};
use crate::services::naver::StockService;
use crate::services::tools::{call_tool, list_tools};

pub async fn get_tools() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(list_tools())))
}

pub async fn post_call(
    service: web::Data<StockService>,
    body: web::Json<ToolCall>,
) -> Result<HttpResponse> {
    let call = body.into_inner();
    log::info!("🔧 도구 호출: {}", call.name);

    let result = call_tool(&service, &call.name, &call.arguments).await;
    Ok(HttpResponse::Ok().json(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tools")
            .route("", web::get().to(get_tools))
            .route("/call", web::post().to(post_call)),
    );
}
