use actix_web::{web, Scope};

use crate::handlers::{chat_config, get_verse_of_day, health_check};

/// Configure all routes for the API
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(health_check)
        .service(get_verse_of_day)
        .configure(chat_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::{ChatService, InMemoryCorpus};
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_routes_are_mounted_under_api() {
        let chat_service = web::Data::new(ChatService::new(
            Arc::new(InMemoryCorpus::seeded()),
            &Config::default(),
        ));
        let app = test::init_service(App::new().app_data(chat_service).service(api_routes())).await;

        for uri in ["/api/health", "/api/verse-of-day"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        }

        let req = test::TestRequest::post()
            .uri("/api/classify")
            .set_json(serde_json::json!({"message": "hi"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
