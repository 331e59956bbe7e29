#![allow(dead_code)]

use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use base64::{prelude::BASE64_STANDARD, Engine};
use serde_json::{json, Value};
use std::net::SocketAddr;

pub const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

pub fn annotated_uri() -> String {
    format!("data:image/png;base64,{}", BASE64_STANDARD.encode(PNG_MAGIC))
}

/// Lee el campo de subida que espera el backend y devuelve (nombre, tamaño).
async fn read_upload(mut multipart: Multipart, field_name: &str) -> Option<(String, usize)> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some(field_name) {
            let name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.ok()?;
            return Some((name, bytes.len()));
        }
    }
    None
}

async fn detect(multipart: Multipart) -> (StatusCode, Json<Value>) {
    match read_upload(multipart, "image").await {
        None => (StatusCode::BAD_REQUEST, Json(json!({ "error": "No image provided" }))),
        Some((name, _)) if name == "bad.jpg" => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad file" })))
        }
        Some((name, _)) if name == "empty.jpg" => (
            StatusCode::OK,
            Json(json!({
                "annotated_image": annotated_uri(),
                "detections": [],
                "total_objects": 0,
                "inference_time": 0.055
            })),
        ),
        Some(_) => (
            StatusCode::OK,
            Json(json!({
                "annotated_image": annotated_uri(),
                "detections": [{ "class": "cat", "confidence": 0.92, "bbox": [10.0, 20.0, 110.0, 220.0] }],
                "total_objects": 1,
                "inference_time": 0.045
            })),
        ),
    }
}

async fn detect_video(multipart: Multipart) -> (StatusCode, Json<Value>) {
    match read_upload(multipart, "video").await {
        None => (StatusCode::BAD_REQUEST, Json(json!({ "error": "No video provided" }))),
        Some(_) => (
            StatusCode::OK,
            Json(json!({
                "total_frames": 300,
                "processed_frames": 30,
                "total_detections": 42,
                "avg_processing_time": 0.025,
                "fps": 40.0
            })),
        ),
    }
}

async fn model_info() -> Json<Value> {
    Json(json!({
        "model_name": "YOLOv8n",
        "classes": ["person", "bicycle", "car"],
        "num_classes": 3,
        "model_size": "nano (lightweight)"
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "CV Detection API" }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>Internal Server Error</html>")
}

async fn blank_error() -> (StatusCode, Json<Value>) {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": "" })))
}

/// Backend de inferencia falso en un puerto efímero. `/broken` monta endpoints
/// que fallan sin cuerpo JSON de error; `/blank` responde con `error` vacío.
pub async fn spawn_backend() -> SocketAddr {
    let app = Router::new()
        .route("/api/cv/detect", post(detect))
        .route("/api/cv/detect_video", post(detect_video))
        .route("/api/cv/model_info", get(model_info))
        .route("/api/cv/health", get(health))
        .route("/broken/api/cv/model_info", get(broken))
        .route("/broken/api/cv/detect", post(broken))
        .route("/blank/api/cv/detect", post(blank_error))
        .layer(DefaultBodyLimit::disable());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
