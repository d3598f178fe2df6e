//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    ApplicationService, ApplicationServiceImpl, AuthService, CompanyService, CompanyServiceImpl,
    JobService, JobServiceImpl,
};
use crate::config::{Settings, StorageBackend};
use crate::infrastructure::database;
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::repositories::{
    PgApplicationRepository, PgCompanyRepository, PgJobRepository,
};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging};
use crate::presentation::web::Pages;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobService>,
    pub applications: Arc<dyn ApplicationService>,
    pub companies: Arc<dyn CompanyService>,
    pub auth: Arc<AuthService>,
    pub pages: Arc<Pages>,
    /// Present only with the postgres backend
    pub db: Option<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Services backed by PostgreSQL repositories
    pub fn with_postgres(db: PgPool, settings: Settings) -> Result<Self> {
        let companies = Arc::new(PgCompanyRepository::new(db.clone()));
        let jobs = Arc::new(PgJobRepository::new(db.clone()));
        let applications = Arc::new(PgApplicationRepository::new(db.clone()));

        Self::assemble(
            Arc::new(JobServiceImpl::new(jobs.clone(), companies.clone())),
            Arc::new(ApplicationServiceImpl::new(applications, jobs)),
            Arc::new(CompanyServiceImpl::new(companies)),
            Some(db),
            settings,
        )
    }

    /// Services backed by a fresh, empty in-process store
    pub fn in_memory(settings: Settings) -> Result<Self> {
        let store = Arc::new(MemoryStore::new());

        Self::assemble(
            Arc::new(JobServiceImpl::new(store.clone(), store.clone())),
            Arc::new(ApplicationServiceImpl::new(store.clone(), store.clone())),
            Arc::new(CompanyServiceImpl::new(store)),
            None,
            settings,
        )
    }

    fn assemble(
        jobs: Arc<dyn JobService>,
        applications: Arc<dyn ApplicationService>,
        companies: Arc<dyn CompanyService>,
        db: Option<PgPool>,
        mut settings: Settings,
    ) -> Result<Self> {
        let auth = AuthService::new(&settings.auth).context("Failed to set up admin login")?;
        // Only the hash is needed from here on
        settings.auth.admin_password.clear();
        let pages = Pages::new().context("Failed to compile page templates")?;

        Ok(Self {
            jobs,
            applications,
            companies,
            auth: Arc::new(auth),
            pages: Arc::new(pages),
            db,
            settings: Arc::new(settings),
        })
    }
}

/// Full router with tracing and CORS applied
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let state = match settings.storage.backend {
            StorageBackend::Postgres => {
                let db = database::create_pool(&settings.database)
                    .await
                    .context("Failed to connect to database")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&db)
                        .await
                        .context("Failed to run database migrations")?;
                    tracing::info!("Database migrations applied");
                }

                AppState::with_postgres(db, settings.clone())?
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on shutdown");
                AppState::in_memory(settings.clone())?
            }
        };

        let router = build_router(state);

        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
