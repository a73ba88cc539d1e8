use clap::Parser;
use miniblog::{config, state, store};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::parse();
    let state = std::sync::Arc::new(state::State::new(store::Store::new(&config.store)));

    let app = miniblog::app(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .expect("error binding listen address");

    tracing::info!("serving posts from {:?} on {}", config.store, config.bind);

    axum::serve(
        listener,
        axum::ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await
    .expect("error serving app")
}
