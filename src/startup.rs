//! Application Startup
//!
//! Storage selection, state wiring and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    CustomerService, CustomerServiceImpl, ServiceService, ServiceServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryCustomerRepository, InMemoryServiceRepository, PgCustomerRepository,
    PgServiceRepository,
};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Where entities are persisted
#[derive(Clone)]
pub enum StorageBackend {
    Postgres(PgPool),
    Memory,
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Postgres(_) => "postgres",
            StorageBackend::Memory => "memory",
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceService>,
    pub customers: Arc<dyn CustomerService>,
    pub storage: StorageBackend,
}

impl AppState {
    pub fn new(
        services: Arc<dyn ServiceService>,
        customers: Arc<dyn CustomerService>,
        storage: StorageBackend,
    ) -> Self {
        Self {
            services,
            customers,
            storage,
        }
    }

    /// State backed by PostgreSQL repositories
    pub fn postgres(pool: PgPool) -> Self {
        let service_repo = Arc::new(PgServiceRepository::new(pool.clone()));
        let customer_repo = Arc::new(PgCustomerRepository::new(pool.clone()));

        Self::new(
            Arc::new(ServiceServiceImpl::new(service_repo)),
            Arc::new(CustomerServiceImpl::new(customer_repo)),
            StorageBackend::Postgres(pool),
        )
    }

    /// State backed by process memory; contents are lost on restart
    pub fn in_memory() -> Self {
        let service_repo = Arc::new(InMemoryServiceRepository::new());
        let customer_repo = Arc::new(InMemoryCustomerRepository::new());

        Self::new(
            Arc::new(ServiceServiceImpl::new(service_repo)),
            Arc::new(CustomerServiceImpl::new(customer_repo)),
            StorageBackend::Memory,
        )
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = match settings.database.url.as_deref() {
            Some(url) => {
                let pool = database::create_pool(&settings.database, url)
                    .await
                    .context("failed to connect to the database")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool)
                        .await
                        .context("failed to run database migrations")?;
                    tracing::info!("Database migrations applied");
                }

                AppState::postgres(pool)
            }
            None => {
                tracing::warn!("No database URL configured, using in-memory storage");
                AppState::in_memory()
            }
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address; the host may be a name such as "localhost"
        let listener = TcpListener::bind(settings.server.bind_target())
            .await
            .with_context(|| format!("failed to bind {}", settings.server_addr()))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

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
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
