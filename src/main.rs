use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::cors::CorsLayer;

use biblia_api::api::handlers::{
    handle_chapter, handle_default_books, handle_list_books, handle_root, handle_verse,
};
use biblia_api::config::Config;
use biblia_api::corpus::resolver::Resolver;
use biblia_api::loader::load_corpus;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 1. Configuration:
    let config = Config::from_env();
    tracing::info!(
        "Translations configured: {:?} (data dir: {})",
        config.translations,
        config.data_dir.display()
    );

    // 2. Corpus (loaded once, read-only for the process lifetime):
    let corpus = load_corpus(&config.sources());
    if corpus.is_empty() {
        tracing::warn!("No translation loaded; every query will answer 404");
    }
    let resolver = Arc::new(Resolver::with_policy(corpus, config.empty_verse_is_missing));
    let config = Arc::new(config);

    // 3. HTTP router:
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/books", get(handle_default_books))
        .route("/biblia/:versao/livros", get(handle_list_books))
        .route("/biblia/:versao/:livro/:capitulo", get(handle_chapter))
        .route(
            "/biblia/:versao/:livro/:capitulo/:versiculo",
            get(handle_verse),
        )
        .layer(Extension(resolver))
        .layer(Extension(config.clone()))
        .layer(CorsLayer::permissive());

    // 4. Serve:
    let addr = config.addr();
    tracing::info!("Bíblia API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
