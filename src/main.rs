// Bring in required crates
use axum::{self, routing};
use clap::Parser;
use tokio::{net, sync::RwLock};
use tower_http::{services, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Bring in our local modules
mod card;
mod error;
mod recipe;
mod storage;
mod templates;
mod web;

use error::*;
use recipe::*;
use storage::*;
use templates::*;

use std::path::PathBuf;
use std::sync::Arc;

/// Recipe card web app: renders the persisted recipe list as cards and
/// appends new recipes submitted through the page's form.
#[derive(Parser)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: String,

    /// Path to the key-value storage file
    #[arg(long, default_value = "storage.json")]
    storage: PathBuf,
}

pub struct AppState {
    pub store: RecipeStore,
}

// Main server setup
async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Open the storage file up front: a corrupt store is a startup failure,
    // not something the list page recovers from.
    let backend = FileStorage::open(&args.storage)?;
    let state = Arc::new(RwLock::new(AppState {
        store: RecipeStore::new(Box::new(backend)),
    }));

    // Initialize structured logging and HTTP tracing for Axum with environment-based filtering.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_cards=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    let trace_layer = trace::TraceLayer::new_for_http()
        .make_span_with(trace::DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_response(trace::DefaultOnResponse::new().level(tracing::Level::INFO));

    // Create the router
    let app = axum::Router::new()
        .route("/", routing::get(web::get_index))
        .route("/recipes", routing::post(web::post_recipe))
        .route("/clear", routing::post(web::post_clear))
        // Serve static CSS file (must match file path & MIME)
        .route_service(
            "/recipes.css",
            services::ServeFile::new_with_mime(
                "assets/static/recipes.css",
                &mime::TEXT_CSS_UTF_8,
            ),
        )
        // Per-rating star icons, resolved by the {rating}-star.svg convention;
        // a missing file is a silent gap in the card, not an error.
        .nest_service(
            "/assets/images/icons",
            services::ServeDir::new("assets/images/icons"),
        )
        .layer(trace_layer)
        .with_state(state);

    // Bind and start the server
    let listener = net::TcpListener::bind(&args.listen).await?;
    tracing::info!("listening on {}", args.listen);
    axum::serve(listener, app).await?;
    Ok(())
}

// Entry point of the app
#[tokio::main]
async fn main() {
    // If serve() returns an error, log and exit
    if let Err(err) = serve().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
