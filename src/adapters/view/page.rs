use super::render::{self, escape};
use crate::domain::{dashboard::Dashboard, media::Modality};

/// Página completa. `alerts` son los mensajes pendientes de mostrar (una sola vez).
pub fn render_page(dash: &Dashboard, alerts: &[String]) -> String {
    let banner: String = alerts
        .iter()
        .map(|a| format!(r#"<div class="alert" role="alert">{}</div>"#, escape(a)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Object Detection Dashboard</title>
<link rel="stylesheet" href="/static/dashboard.css">
</head>
<body>
<main class="container">
<h1>Object Detection Dashboard</h1>
{banner}
<section id="modelInfo" class="card">{model}</section>
<div class="grid">
<section class="card">
<h2>Image Detection</h2>
{image_area}
{image_control}
{image_results}
</section>
<section class="card">
<h2>Video Processing</h2>
{video_area}
{video_control}
{video_results}
</section>
</div>
<h2>Session Statistics</h2>
{stats}
</main>
</body>
</html>
"#,
        banner = banner,
        model = render::model_info(&dash.model),
        image_area = render::upload_area(&dash.image.area),
        image_control = render::control(Modality::Image, &dash.image.control()),
        image_results = render::image_results(dash.image.last_result.as_ref()),
        video_area = render::upload_area(&dash.video.area),
        video_control = render::control(Modality::Video, &dash.video.control()),
        video_results = render::video_results(dash.video.last_result.as_ref()),
        stats = render::session_stats(&dash.stats),
    )
}
