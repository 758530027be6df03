use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{self, ApiHashtagRequest, RpcRequest, RpcResponse, ToolDescriptor};
use hashtag_gen::config::HashtagConfig;
use hashtag_gen::{generate_hashtags, HashtagOutput};

#[derive(Clone)]
struct AppState {
    config: Arc<HashtagConfig>,
}

pub async fn serve(args: crate::ServeArgs, config: HashtagConfig) -> Result<(), String> {
    let state = AppState {
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/tools", get(tools_handler))
        .route("/api/hashtags", post(hashtags_handler))
        .route("/rpc", post(rpc_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    info!(%addr, "hashtag server listening");

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn tools_handler() -> Json<Vec<ToolDescriptor>> {
    Json(api::tool_list())
}

async fn hashtags_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiHashtagRequest>,
) -> Result<Json<HashtagOutput>, (StatusCode, Json<Value>)> {
    let input = request
        .into_input(&state.config.defaults)
        .map_err(bad_request)?;
    let output = generate_hashtags(&input, &state.config).map_err(bad_request)?;
    info!(
        concept = %output.concept,
        total = output.statistics.total,
        "generated hashtags"
    );
    Ok(Json(output))
}

async fn rpc_handler(
    State(state): State<AppState>,
    Json(request): Json<RpcRequest>,
) -> Json<RpcResponse> {
    info!(method = %request.method, "rpc request");
    Json(api::handle_rpc(request, &state.config))
}

fn bad_request(err: hashtag_gen::HashtagError) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": err.to_string() })),
    )
}
