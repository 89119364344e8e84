mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "splitsync={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = engine::Engine::builder()
        .currency(settings.engine.currency)
        .reminder_policy(settings.engine.reminder_policy()?)
        .group_delete_policy(settings.engine.group_delete)
        .build();
    tracing::info!(
        currency = %engine.currency(),
        reminder_due_days = engine.reminder_policy().due_after.num_days(),
        group_delete = ?engine.group_delete_policy(),
        "engine ready"
    );

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|err| {
        tracing::error!("failed to bind server listener on {addr}: {err}");
        err
    })?;

    tokio::select! {
        result = server::run_with_listener(engine, listener) => {
            if let Err(err) = &result {
                tracing::error!("server failed: {err}");
            }
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down...");
        }
    }

    Ok(())
}
