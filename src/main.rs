use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizlink_server::{app_state::AppState, config::Config, handlers, middleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").map(|v| v == "production").unwrap_or(false) {
        config.validate_for_production();
    }

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    log::info!(
        "starting HTTP server on {}:{}",
        bind_addr.0,
        bind_addr.1
    );

    HttpServer::new(move || {
        let cors = match &state.config.cors_allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST", "PUT"])
                .allow_any_header()
                .max_age(3600),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(middleware::RequestIdMiddleware)
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::list_quizzes)
            .service(handlers::create_quiz)
            .service(handlers::submit_quiz)
            .service(handlers::get_quiz)
            .service(handlers::update_quiz)
            .service(handlers::list_results)
    })
    .bind(bind_addr)?
    .run()
    .await
}
