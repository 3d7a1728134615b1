// src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register/customer", post(handlers::auth::register_customer))
        .route("/register/dealer", post(handlers::auth::register_dealer))
        .route("/register/expert", post(handlers::auth::register_expert))
        .route("/login", post(handlers::auth::login));

    // Rotas da conta autenticada (protegidas pelo middleware)
    let account_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route("/password", post(handlers::auth::change_password))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Um router de perfil por papel; a checagem de papel fica no handler
    let customer_routes = Router::new()
        .route(
            "/me",
            get(handlers::customers::get_me)
                .put(handlers::customers::update_me)
                .delete(handlers::customers::delete_me),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let dealer_routes = Router::new()
        .route("/me", get(handlers::dealers::get_me))
        .route("/me", put(handlers::dealers::update_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let expert_routes = Router::new()
        .route("/me", get(handlers::experts::get_me))
        .route("/me", put(handlers::experts::update_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/auth", account_routes)
        .nest("/api/customers", customer_routes)
        .nest("/api/dealers", dealer_routes)
        .nest("/api/experts", expert_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
