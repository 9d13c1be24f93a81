#[tokio::main]
async fn main() {
    campusfind_observability::init();

    let addr = std::env::var("CAMPUSFIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let seed_demo = matches!(
        std::env::var("CAMPUSFIND_SEED").as_deref(),
        Ok("1") | Ok("true")
    );

    let app = campusfind_api::app::build_app(seed_demo);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!(seed_demo, "listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
