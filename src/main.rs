use company_service::config::{Config, DatabaseClient};
use company_service::services::telemetry;
use company_service::{create_app, AppState};
use std::fmt::Display;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    telemetry::init_tracing(&config.app);

    let component = "main";
    tracing::info!(
        component,
        application_name = config.app.name,
        version = %config.app.version,
        env = %config.app.env,
        "initializing server..."
    );

    let db = match DatabaseClient::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => fatal("server/database", "failed to connect to db", e),
    };

    if let Err(e) = db.ping().await {
        fatal("server/database", "failed to ping db", e);
    }

    if let Ok(dsn) = config.database.dsn() {
        tracing::info!(component = "server/database", %dsn, "connected to db");
    }

    if config.database.settings.run_migrations {
        if let Err(e) = db.migrate().await {
            fatal("server/database", "failed to run migrations", e);
        }
        tracing::info!(component = "server/database", "migrations applied");
    }

    let address = config.http.address();
    let app = create_app(AppState::new(&config, db));

    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => fatal("server", "failed to start server", e),
    };

    tracing::info!(component = "server", %address, "listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        fatal("server", "server error", e);
    }

    tracing::info!(component, "exit");
}

fn fatal(component: &str, message: &str, error: impl Display) -> ! {
    tracing::error!(component, error = %error, "{message}");
    std::process::exit(1)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(component = "main", error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(component = "main", error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
