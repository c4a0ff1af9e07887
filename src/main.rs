use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

use mergington::database::{self, schema};
use mergington::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://dev.db".to_string());
    let pool = database::connect(&db_url)
        .await
        .expect("failed to connect to database");

    // Create tables when starting in development (for now).
    schema::ensure_schema(&pool)
        .await
        .expect("failed to create schema");

    let app = web::app(pool);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app).await.expect("server error");
}
