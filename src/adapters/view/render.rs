use std::fmt::Write;

use crate::domain::{
    detection::{Detection, DetectionResult, VideoResult},
    flow::ControlView,
    media::{Modality, UploadArea},
    model::ModelPanel,
    session::SessionStats,
};

pub const NO_OBJECTS: &str = "No objects detected";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn model_info(panel: &ModelPanel) -> String {
    match panel {
        ModelPanel::Loading => r#"<p class="muted">Loading model information...</p>"#.to_string(),
        ModelPanel::Failed(reason) => format!(r#"<p class="error">{}</p>"#, escape(reason)),
        ModelPanel::Loaded(info) => {
            let tags: String = info
                .classes
                .iter()
                .map(|c| format!(r#"<span class="class-tag">{}</span>"#, escape(c)))
                .collect();
            format!(
                concat!(
                    "<h3>Model Information</h3>",
                    "<p><strong>Model:</strong> {}</p>",
                    "<p><strong>Size:</strong> {}</p>",
                    "<p><strong>Classes:</strong> {} objects</p>",
                    r#"<div class="class-tags">{}</div>"#
                ),
                escape(&info.model_name),
                escape(&info.model_size),
                info.num_classes,
                tags
            )
        }
    }
}

fn area_id(modality: Modality) -> &'static str {
    match modality {
        Modality::Image => "imageUploadArea",
        Modality::Video => "videoUploadArea",
    }
}

/// Un decimal, con los empates redondeados hacia arriba (81.25 -> "81.3").
/// `{:.1}` a secas redondea los empates al par.
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// Widget de subida: formulario multipart que envía el archivo en el campo `file`.
pub fn upload_area(area: &UploadArea) -> String {
    let modality = area.modality;
    let class = if area.drag_over { "upload-area dragover" } else { "upload-area" };
    let summary = match &area.selected {
        Some(file) => format!(
            "<p><strong>{}</strong></p><p>Size: {:.2} MB</p>",
            escape(&file.name),
            file.size_mib()
        ),
        None => format!("<p>Drop or choose a {} file</p>", modality),
    };
    format!(
        concat!(
            r#"<form class="{class}" id="{id}" method="post" action="/upload/{modality}" enctype="multipart/form-data">"#,
            "{summary}",
            r#"<input type="file" name="file" accept="{accept}*"><button type="submit">Upload</button>"#,
            "</form>"
        ),
        class = class,
        id = area_id(modality),
        modality = modality,
        summary = summary,
        accept = modality.mime_prefix(),
    )
}

pub fn control(modality: Modality, view: &ControlView) -> String {
    let (id, action) = match modality {
        Modality::Image => ("detectImageBtn", "/detect"),
        Modality::Video => ("processVideoBtn", "/process_video"),
    };
    let spinner = if view.busy { r#"<span class="spinner"></span> "# } else { "" };
    let disabled = if view.enabled { "" } else { " disabled" };
    format!(
        r#"<form method="post" action="{}"><button class="btn" id="{}" type="submit"{}>{}{}</button></form>"#,
        action,
        id,
        disabled,
        spinner,
        escape(view.label)
    )
}

pub fn detection_list(detections: &[Detection]) -> String {
    if detections.is_empty() {
        return format!("<p>{}</p>", NO_OBJECTS);
    }
    let mut out = String::new();
    for det in detections {
        let pct = one_decimal(det.percent());
        let _ = write!(
            out,
            concat!(
                r#"<div class="detection-item"><div class="detection-label">"#,
                "<strong>{label}</strong>",
                r#"<div class="confidence-bar"><div class="confidence-fill" style="width: {pct}%"></div></div>"#,
                r#"</div><div class="confidence-value">{pct}%</div></div>"#
            ),
            label = escape(&det.label),
            pct = pct
        );
    }
    out
}

pub fn image_results(result: Option<&DetectionResult>) -> String {
    let Some(result) = result else {
        return r#"<section id="imageResults" hidden></section>"#.to_string();
    };
    format!(
        concat!(
            r#"<section id="imageResults">"#,
            r#"<img id="annotatedImage" alt="annotated result" src="{}">"#,
            r#"<div id="detectionList">{}</div>"#,
            "</section>"
        ),
        escape(&result.annotated_image),
        detection_list(&result.detections)
    )
}

fn stat_card(value: &str, label: &str) -> String {
    format!(
        r#"<div class="stat-card"><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
        value, label
    )
}

pub fn video_results(result: Option<&VideoResult>) -> String {
    let Some(r) = result else {
        return r#"<section id="videoResults" hidden></section>"#.to_string();
    };
    format!(
        r#"<section id="videoResults"><div id="videoStats">{}{}{}{}</div></section>"#,
        stat_card(&r.total_frames.to_string(), "Total Frames"),
        stat_card(&r.processed_frames.to_string(), "Processed Frames"),
        stat_card(&r.total_detections.to_string(), "Total Detections"),
        stat_card(&one_decimal(r.fps), "Processing FPS"),
    )
}

pub fn session_stats(stats: &SessionStats) -> String {
    format!(
        concat!(
            r#"<section id="sessionStats">"#,
            r#"<div class="stat-card"><div class="stat-value" id="totalDetections">{}</div><div class="stat-label">Total Detections</div></div>"#,
            r#"<div class="stat-card"><div class="stat-value" id="processedImages">{}</div><div class="stat-label">Images Processed</div></div>"#,
            r#"<div class="stat-card"><div class="stat-value" id="processedVideos">{}</div><div class="stat-label">Videos Processed</div></div>"#,
            r#"<div class="stat-card"><div class="stat-value" id="avgInferenceTime">{}ms</div><div class="stat-label">Avg Inference Time</div></div>"#,
            "</section>"
        ),
        stats.total_detections,
        stats.processed_images,
        stats.processed_videos,
        stats.mean_inference_ms()
    )
}
