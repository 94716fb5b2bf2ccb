use actix_web::{get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::SubmitQuizRequest};

#[post("/api/quiz/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.result_service.submit(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/results")]
pub async fn list_results(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let results = state.result_service.list_results().await?;
    Ok(HttpResponse::Ok().json(results))
}
