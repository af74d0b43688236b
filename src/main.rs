mod handlers;
mod models;
mod routes;
mod store;
mod utils;

use axum::serve;
use routes::make_app;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let app = match make_app().await {
        Ok(app) => app,
        Err(err) => panic!("{}", err),
    };

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    // Bind to a TCP listener
    let listener = TcpListener::bind(&bind_addr).await;
    info!("Listening on http://{}", bind_addr);

    match listener {
        Ok(res) => serve(res, app).await.unwrap(),
        Err(err) => panic!("{}", err),
    }
}
