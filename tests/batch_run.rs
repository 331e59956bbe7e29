mod common;

use cv_dashboard::cli::{build_service, run_batch, RunArgs};
use cv_dashboard::ClientConfig;

#[tokio::test]
async fn batch_run_renders_results_and_saves_annotated_image() {
    let addr = common::spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();

    let image = dir.path().join("cat.jpg");
    std::fs::write(&image, vec![0u8; 2 * 1024 * 1024]).unwrap();
    let video = dir.path().join("street.mp4");
    std::fs::write(&video, vec![0u8; 4096]).unwrap();
    let annotated = dir.path().join("annotated.png");

    let svc = build_service(&ClientConfig::new(format!("http://{}", addr), None)).unwrap();
    let args = RunArgs {
        image: Some(image),
        video: Some(video),
        html: None,
        save_annotated: Some(annotated.clone()),
    };
    let report = run_batch(&svc, &args).await.unwrap();

    assert_eq!(report.stats.total_detections, 43);
    assert_eq!(report.stats.processed_images, 1);
    assert_eq!(report.stats.processed_videos, 1);
    assert_eq!(report.stats.avg_inference_ms, 35);

    assert!(report.page.contains("<strong>cat</strong>"));
    assert!(report.page.contains("Size: 2.00 MB"));
    assert!(report.page.contains(r#"<span class="class-tag">bicycle</span>"#));
    assert!(report.page.contains(r#"id="avgInferenceTime">35ms<"#));
    assert_eq!(std::fs::read(&annotated).unwrap(), common::PNG_MAGIC);
}

#[tokio::test]
async fn mismatched_file_is_skipped_silently() {
    let addr = common::spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, b"hello").unwrap();

    let svc = build_service(&ClientConfig::new(format!("http://{}", addr), None)).unwrap();
    let args = RunArgs { image: Some(notes), ..RunArgs::default() };
    let report = run_batch(&svc, &args).await.unwrap();

    assert_eq!(report.stats.processed_images, 0);
    assert!(svc.snapshot().image.area.selected.is_none());
    assert!(report.page.contains(r#"id="detectImageBtn" type="submit" disabled>"#));
}
