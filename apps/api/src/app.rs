use crate::{
    config::Config,
    error::Result,
    routes::api_routes,
    services::{ChatService, InMemoryCorpus},
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::info;
use std::net::TcpListener;
use std::sync::Arc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        let bind_address = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&bind_address)
            .with_context(|| format!("Failed to bind {}", bind_address))?;
        info!("Starting server at http://{}", bind_address);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        let corpus = Arc::new(InMemoryCorpus::seeded());
        info!("Loaded scripture corpus with {} verses", corpus.len());

        let chat_service = web::Data::new(ChatService::new(corpus, &self.config));
        let allowed_origin = self.config.cors_allowed_origin.clone();

        HttpServer::new(move || {
            let cors = match &allowed_origin {
                Some(origin) => Cors::default().allowed_origin(origin),
                None => Cors::default().allow_any_origin(),
            }
            .allow_any_method()
            .allow_any_header();

            App::new()
                .wrap(cors)
                .wrap(Logger::default())
                .app_data(chat_service.clone())
                .service(api_routes())
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }
}
