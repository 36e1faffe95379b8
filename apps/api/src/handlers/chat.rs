use crate::{
    error::ApiError,
    models::{ChatRequest, ClassifyRequest},
    services::ChatService,
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use log::info;

pub fn chat_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/chat").route(web::post().to(chat)))
        .service(web::resource("/classify").route(web::post().to(classify)));
}

/// Classify a message and serve the matching retrieval path
pub async fn chat(
    request: Json<ChatRequest>,
    chat_service: web::Data<ChatService>,
) -> Result<HttpResponse, ApiError> {
    let response = chat_service.respond(&request)?;
    Ok(HttpResponse::Ok().json(response))
}

/// Return the bare intent for a message without any retrieval
pub async fn classify(
    request: Json<ClassifyRequest>,
    chat_service: web::Data<ChatService>,
) -> Result<HttpResponse, ApiError> {
    let intent = chat_service.classify(&request.message);
    info!("Classify request resolved to {}", intent.name());
    Ok(HttpResponse::Ok().json(intent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{ChatResponse, ErrorResponse, Intent};
    use crate::services::InMemoryCorpus;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use std::sync::Arc;

    fn chat_service() -> web::Data<ChatService> {
        web::Data::new(ChatService::new(
            Arc::new(InMemoryCorpus::seeded()),
            &Config::default(),
        ))
    }

    #[actix_web::test]
    async fn test_chat_returns_intent_and_verses() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(chat_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({"message": "Romans 8:28"}))
            .to_request();
        let body: ChatResponse = test::call_and_read_body_json(&app, req).await;

        assert!(matches!(body.intent, Intent::GetVerse { .. }));
        assert_eq!(body.verses.len(), 1);
        assert_eq!(body.verses[0].citation, "Romans 8:28");
    }

    #[actix_web::test]
    async fn test_chat_rejects_empty_message() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(chat_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({"message": "  "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.contains("Message cannot be empty"));
    }

    #[actix_web::test]
    async fn test_classify_returns_tagged_intent() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(chat_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/classify")
            .set_json(json!({"message": "What does the Bible say about anxiety?"}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"type": "search", "data": {"topic": "anxiety"}}));
    }
}
