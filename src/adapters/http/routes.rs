use axum::{
    extract::{Multipart, Path, State},
    response::{Html, IntoResponse, Redirect},
    Json,
};
use serde_json::json;

use crate::adapters::http::state::HttpState;
use crate::adapters::view::render_page;
use crate::application::dto::OkResponse;
use crate::domain::media::{MediaFile, Modality};

pub async fn index(State(st): State<HttpState>) -> Html<String> {
    let alerts = st.banner.drain();
    Html(render_page(&st.dashboard.snapshot(), &alerts))
}

/// Equivalente al drop en el área de subida: solo cuenta el primer archivo `file`
/// y solo si su MIME coincide con la modalidad. Un rechazo no genera mensaje.
pub async fn upload(
    State(st): State<HttpState>,
    Path(modality): Path<Modality>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut files = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (e.status(), Json(json!({ "error": e.body_text() }))).into_response();
            }
        };
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let mime = field.content_type().unwrap_or("application/octet-stream").to_string();
        match field.bytes().await {
            Ok(bytes) if !name.is_empty() => files.push(MediaFile::new(name, mime, bytes.to_vec())),
            Ok(_) => {}
            Err(e) => {
                return (e.status(), Json(json!({ "error": e.body_text() }))).into_response();
            }
        }
    }
    st.dashboard.drop_files(modality, files);
    Redirect::to("/").into_response()
}

pub async fn detect(State(st): State<HttpState>) -> Redirect {
    st.dashboard.detect_image().await;
    Redirect::to("/")
}

pub async fn process_video(State(st): State<HttpState>) -> Redirect {
    st.dashboard.process_video().await;
    Redirect::to("/")
}

pub async fn healthz() -> Json<OkResponse> {
    Json(OkResponse { ok: true })
}
