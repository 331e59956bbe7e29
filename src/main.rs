use clap::Parser;
use cv_dashboard::{
    adapters::http::serve,
    cli::{build_service, run_batch, Cli, Command},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Inicializar logs (RUST_LOG=info por defecto)
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // 2. Configuración desde la línea de comandos / entorno
    let cli = Cli::parse();
    let config = cli.config();

    match cli.command {
        Command::Serve { .. } => serve(config).await?,
        Command::Run(args) => {
            let service = build_service(&config)?;
            let report = run_batch(&service, &args).await?;
            match &args.html {
                Some(path) => {
                    tokio::fs::write(path, &report.page).await?;
                    tracing::info!("📝 Dashboard written to {}", path.display());
                }
                None => println!("{}", report.page),
            }
            tracing::info!("📊 Session: {}", serde_json::to_string(&report.stats)?);
        }
        Command::Health => {
            let service = build_service(&config)?;
            let health = service.health().await?;
            println!("{} ({})", health.status, health.service);
            if !health.is_healthy() {
                anyhow::bail!("backend reports status '{}'", health.status);
            }
        }
    }

    Ok(())
}
