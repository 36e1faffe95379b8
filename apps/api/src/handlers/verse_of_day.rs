use crate::{error::ApiError, services::ChatService};
use actix_web::{get, web, HttpResponse};
use chrono::Utc;

/// Today's verse, stable for the whole (UTC) day
#[get("/verse-of-day")]
pub async fn get_verse_of_day(
    chat_service: web::Data<ChatService>,
) -> Result<HttpResponse, ApiError> {
    let today = Utc::now().date_naive();
    let verse = chat_service.verse_of_the_day(today)?;
    Ok(HttpResponse::Ok().json(verse))
}
