use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::{debug, error, info};
use thiserror::Error;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use crate::clipboard::Clipboard;
use crate::messages::{
    CopyRequest, MSG_CLIPBOARD_UNAVAILABLE, MSG_COPIED, MSG_MISSING_FIELD, MSG_NOT_FOUND,
    StatusResponse,
};
use crate::netutil;

#[derive(Clone)]
pub struct AppState {
    clipboard: Arc<Mutex<Box<dyn Clipboard>>>,
}

impl AppState {
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        AppState {
            clipboard: Arc::new(Mutex::new(clipboard)),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("network error: {0}")]
    Network(#[from] std::io::Error),
}

/// The full routing contract: `POST /copy` copies, everything else is a
/// JSON 404. The CORS layer answers every `OPTIONS` itself with 200 and
/// the permissive headers, and stamps `Access-Control-Allow-Origin: *` on
/// all other responses, so a browser client on the phone never trips over
/// a preflight.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/copy", post(post_copy).fallback(not_found))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

pub async fn serve(port: u16, state: AppState) -> Result<(), Error> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("listening on port {port}");
    info!(
        "point the phone client (same network) at http://{}:{port}/copy",
        netutil::local_ip()
    );
    info!("press Ctrl-C to stop");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl-C handler");
}

async fn post_copy(
    State(state): State<AppState>,
    payload: Result<Json<CopyRequest>, JsonRejection>,
) -> Response {
    let latex = match payload {
        Ok(Json(CopyRequest { latex: Some(latex) })) => latex,
        Ok(Json(CopyRequest { latex: None })) => {
            return reply(StatusCode::BAD_REQUEST, StatusResponse::error(MSG_MISSING_FIELD));
        }
        // Unreadable bodies get the same reply as a missing field.
        Err(rejection) => {
            debug!("rejecting body: {rejection}");
            return reply(StatusCode::BAD_REQUEST, StatusResponse::error(MSG_MISSING_FIELD));
        }
    };

    let mut clipboard = state.clipboard.lock().await;
    if let Err(err) = clipboard.set_text(&latex) {
        error!("clipboard write failed: {err}");
        return reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusResponse::error(MSG_CLIPBOARD_UNAVAILABLE),
        );
    }

    info!("copied to clipboard: {latex}");
    reply(StatusCode::OK, StatusResponse::success(MSG_COPIED))
}

async fn not_found() -> Response {
    reply(StatusCode::NOT_FOUND, StatusResponse::error(MSG_NOT_FOUND))
}

fn reply(status: StatusCode, body: StatusResponse) -> Response {
    (status, Json(body)).into_response()
}
