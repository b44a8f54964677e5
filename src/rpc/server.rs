//! JSON-RPC server: typed module, method discovery, logging middleware.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use futures::future::BoxFuture;
use futures::FutureExt;
use jsonrpsee::server::middleware::rpc::{RpcServiceBuilder, RpcServiceT};
use jsonrpsee::server::{MethodResponse, Server, ServerHandle};
use jsonrpsee::types::Request;
use tracing::info;

use crate::observe::{compact_json, CallObserver, CallRecord};
use crate::rpc::handlers::{AccountApiServer, AccountRpc};
use crate::service::AccountService;

/// Logging layer applied once to every call: the single interception point
/// for the call observer on this transport.
#[derive(Clone)]
pub struct CallLogger<S> {
    service: S,
    observer: Arc<CallObserver>,
}

impl<'a, S> RpcServiceT<'a> for CallLogger<S>
where
    S: RpcServiceT<'a> + Send + Sync + Clone + 'static,
{
    type Future = BoxFuture<'a, MethodResponse>;

    fn call(&self, req: Request<'a>) -> Self::Future {
        let service = self.service.clone();
        let observer = self.observer.clone();
        let label = req.method.to_string();
        let request = req
            .params
            .as_ref()
            .map(|p| compact_json(p.get().as_bytes()))
            .unwrap_or_else(|| "<empty>".to_string());

        async move {
            let started = Instant::now();
            let resp = service.call(req).await;
            let elapsed = started.elapsed();

            let status = match resp.as_error_code() {
                Some(code) => code.to_string(),
                None => "ok".to_string(),
            };
            observer.record(CallRecord {
                transport: "rpc",
                label,
                request,
                response: compact_json(resp.as_result().as_bytes()),
                status,
                success: resp.is_success(),
                elapsed,
            });
            resp
        }
        .boxed()
    }
}

/// RPC server tying the typed module, discovery, and middleware together.
pub struct RpcServer {
    addr: SocketAddr,
    service: Arc<AccountService>,
    observer: Arc<CallObserver>,
}

impl RpcServer {
    pub fn new(addr: SocketAddr, service: Arc<AccountService>, observer: Arc<CallObserver>) -> Self {
        Self {
            addr,
            service,
            observer,
        }
    }

    /// Build and start the server. Returns the bound address and the handle
    /// used for shutdown; the server itself runs on background tasks.
    pub async fn start(self) -> anyhow::Result<(SocketAddr, ServerHandle)> {
        let observer = self.observer.clone();
        let rpc_middleware = RpcServiceBuilder::new().layer_fn(move |service| CallLogger {
            service,
            observer: observer.clone(),
        });

        let server = Server::builder()
            .set_rpc_middleware(rpc_middleware)
            .build(self.addr)
            .await?;
        let addr = server.local_addr()?;

        let mut module = AccountRpc::new(self.service).into_rpc();

        // Method discovery for tooling; carries no behavioral contract.
        let mut methods: Vec<String> = module.method_names().map(|m| m.to_string()).collect();
        methods.push("rpc_methods".to_string());
        methods.sort();
        module.register_method("rpc_methods", move |_params, _ctx, _ext| {
            serde_json::json!({ "methods": methods.clone() })
        })?;

        info!("RPC server listening on {}", addr);
        let handle = server.start(module);
        Ok((addr, handle))
    }
}
