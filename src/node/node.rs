//! Server orchestration: wire one store and one service into both transport
//! adapters and run them as independent listener tasks.

use std::sync::Arc;

use anyhow::Result;
use tokio::task::JoinHandle;
use tracing::info;

use crate::http::HttpServer;
use crate::node::config::NodeConfig;
use crate::node::service_handle::ServiceHandle;
use crate::observe::CallObserver;
use crate::rpc::RpcServer;
use crate::service::AccountService;
use crate::state::AccountStore;

/// Main server object
pub struct Node {
    cfg: NodeConfig,
}

impl Node {
    pub fn new(cfg: NodeConfig) -> Self {
        Self { cfg }
    }

    /// Start both adapters and return a ServiceHandle for graceful shutdown.
    pub async fn start(self) -> Result<ServiceHandle> {
        let (mut svc_handle, shutdown_rx) = ServiceHandle::new();

        // -----------------------
        // Shared dependencies
        // -----------------------
        let store = Arc::new(AccountStore::new());
        let service = Arc::new(AccountService::new(store));
        let observer = Arc::new(CallObserver::new());

        // -----------------------
        // HTTP adapter
        // -----------------------
        {
            let server =
                HttpServer::new(self.cfg.http_addr.clone(), service.clone(), observer.clone());
            let rx = shutdown_rx.clone();
            let h: JoinHandle<anyhow::Result<()>> =
                tokio::spawn(async move { server.start(rx).await });
            svc_handle.attach(h);
        }

        // -----------------------
        // RPC adapter
        // -----------------------
        {
            let addr = self.cfg.rpc_addr.parse()?;
            let server = RpcServer::new(addr, service.clone(), observer.clone());
            let (_bound, handle) = server.start().await?;

            let mut rx = shutdown_rx.clone();
            let h: JoinHandle<anyhow::Result<()>> = tokio::spawn(async move {
                let _ = rx.changed().await;
                if handle.stop().is_ok() {
                    handle.stopped().await;
                }
                Ok(())
            });
            svc_handle.attach(h);
        }

        info!(
            "accountd started, HTTP: {}, RPC: {}",
            self.cfg.http_addr, self.cfg.rpc_addr
        );
        Ok(svc_handle)
    }
}
