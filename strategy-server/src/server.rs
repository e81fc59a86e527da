//! Shared server state and listener lifecycle.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use strategy_agents::AgentManager;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::ServerConfig;
use crate::db::TaskStore;

/// Live WebSocket sessions, keyed by a per-process connection id.
#[derive(Default)]
pub struct ConnectionRegistry {
    next_id: AtomicU64,
    live: Mutex<HashSet<u64>>,
}

impl ConnectionRegistry {
    /// Register a new session and return its id.
    pub fn connect(&self) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut live = self.live.lock();
        live.insert(id);
        tracing::info!(conn = id, "Client connected. Total connections: {}", live.len());
        id
    }

    /// Drop a session. Unknown ids are ignored.
    pub fn disconnect(&self, id: u64) {
        let mut live = self.live.lock();
        if live.remove(&id) {
            tracing::info!(conn = id, "Client disconnected. Total connections: {}", live.len());
        }
    }

    pub fn count(&self) -> usize {
        self.live.lock().len()
    }
}

pub struct SharedState {
    pub config: ServerConfig,
    pub agents: AgentManager,
    pub tasks: TaskStore,
    pub connections: ConnectionRegistry,
    pub started_at: Instant,
}

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    fn build_state(&self) -> Result<Arc<SharedState>> {
        let tasks = match &self.config.db_path {
            Some(path) => {
                tracing::info!("Task board at {path}");
                TaskStore::open(path).with_context(|| format!("opening task store {path}"))?
            }
            None => TaskStore::open_memory().context("opening in-memory task store")?,
        };
        Ok(Arc::new(SharedState {
            agents: AgentManager::new(self.config.manager_config()),
            tasks,
            connections: ConnectionRegistry::default(),
            started_at: Instant::now(),
            config: self.config.clone(),
        }))
    }

    /// Serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let state = self.build_state()?;
        let listener = TcpListener::bind(&self.config.listen_addr)
            .await
            .with_context(|| format!("binding {}", self.config.listen_addr))?;
        tracing::info!("HTTP/WebSocket listening on {}", listener.local_addr()?);

        axum::serve(listener, crate::web::router(state))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down");
            })
            .await?;
        Ok(())
    }

    /// Start the server in the background (for testing).
    pub async fn start(self) -> Result<(SocketAddr, JoinHandle<Result<()>>)> {
        let listener = TcpListener::bind(&self.config.listen_addr).await?;
        let addr = listener.local_addr()?;
        tracing::info!("Listening on {addr}");

        let state = self.build_state()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, crate::web::router(state)).await?;
            Ok(())
        });
        Ok((addr, handle))
    }
}
