use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::{Config, Environment},
    error::AppError,
};

/// Sessions expire after this many days without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Installs the global tracing subscriber for the given environment.
///
/// `RUST_LOG` overrides the default filter. Production logs at `info` in compact form,
/// development at `debug`. The test environment installs no subscriber so request
/// logs stay out of test output.
///
/// # Arguments
/// - `environment` - Runtime environment selected by `APP_ENV`
pub fn init_tracing(environment: Environment) {
    let default_level = match environment {
        Environment::Production => "info",
        Environment::Development => "debug",
        Environment::Test => return,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if environment == Environment::Production {
        builder.compact().try_init()
    } else {
        builder.try_init()
    };

    if let Err(err) = result {
        eprintln!("Tracing subscriber already installed: {}", err);
    }
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema and lookup seed rows are up-to-date. This function must complete successfully before
/// the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr(_))` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite pool.
///
/// Session rows live in the same database as application data. The store's own table
/// is created on first start. Cookies are marked secure in production.
///
/// # Arguments
/// - `db` - Connected database whose pool backs the session store
/// - `environment` - Runtime environment selected by `APP_ENV`
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SqlxErr(_))` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    environment: Environment,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(environment == Environment::Production)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok(session_layer)
}
