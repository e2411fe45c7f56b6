use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::FakeDataGenerator;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<FakeDataGenerator>,
    pub batch_size: usize,
}

/// Configure all data routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/user", web::get().to(get_user))
        .route("/users", web::get().to(get_users))
        .route("/product", web::get().to(get_product))
        .route("/products", web::get().to(get_products))
        .route("/company", web::get().to(get_company))
        .route("/address", web::get().to(get_address))
        .route("/bank", web::get().to(get_bank_account));
}

/// Health check endpoint
///
/// GET /api/data/health
async fn health() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK")
}

/// Single synthetic user
///
/// GET /api/data/user
async fn get_user(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.generator.user())
}

/// Batch of synthetic users
///
/// GET /api/data/users
async fn get_users(state: web::Data<AppState>) -> impl Responder {
    tracing::debug!("Generating {} users", state.batch_size);
    HttpResponse::Ok().json(state.generator.users(state.batch_size))
}

/// Single synthetic product
///
/// GET /api/data/product
async fn get_product(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.generator.product())
}

/// Batch of synthetic products
///
/// GET /api/data/products
async fn get_products(state: web::Data<AppState>) -> impl Responder {
    tracing::debug!("Generating {} products", state.batch_size);
    HttpResponse::Ok().json(state.generator.products(state.batch_size))
}

/// Single synthetic company
///
/// GET /api/data/company
async fn get_company(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.generator.company())
}

/// Single synthetic postal address
///
/// GET /api/data/address
async fn get_address(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.generator.address())
}

/// Single synthetic bank account
///
/// GET /api/data/bank
async fn get_bank_account(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.generator.bank_account())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Locale;
    use actix_web::{test, App};

    fn test_state() -> AppState {
        AppState {
            generator: Arc::new(FakeDataGenerator::new(Locale::En)),
            batch_size: 10,
        }
    }

    #[actix_web::test]
    async fn test_health_returns_ok_body() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(b"OK"));
    }

    #[actix_web::test]
    async fn test_user_route_serves_json() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/user").to_request();
        let user: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert!(user["id"].is_u64());
        assert!(user["username"].is_string());
    }
}
