use actix_web::{get, post, put, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::SaveQuizRequest};

#[get("/api/quizzes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<SaveQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.create_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/api/quiz/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/api/quiz/{id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SaveQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}
