use crate::convocations::{ConvocationSource, InMemoryConvocations, SourceError};
use crate::handlers;
use crate::logging::LogFormat;
use crate::middleware::with_request_logging;
use std::convert::Infallible;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use warp::filters::BoxedFilter;
use warp::http::Method;
use warp::reply::{Reply, Response};
use warp::Filter;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    host: String,
    port: u16,
    data_file: Option<PathBuf>,
    log_format: LogFormat,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            data_file: None,
            log_format: LogFormat::default(),
        }
    }

    pub fn for_tests() -> Self {
        Self::new("127.0.0.1", 0)
    }

    /// JSON file of convocations served by the teams endpoint.
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

#[derive(Debug, Clone)]
pub struct AppContext {
    config: ServerConfig,
    convocations: Option<Arc<dyn ConvocationSource>>,
}

impl AppContext {
    /// Loads the configured data file, if any. Without one the teams
    /// endpoint answers 500 `configuration_missing`.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let convocations = match config.data_file() {
            Some(path) => {
                let store = InMemoryConvocations::from_json_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    convocations = store.len()?,
                    "loaded convocations"
                );
                Some(Arc::new(store) as Arc<dyn ConvocationSource>)
            }
            None => {
                tracing::warn!("no convocation data file configured");
                None
            }
        };
        Ok(Self::new_with_source(config, convocations))
    }

    pub fn new_with_source(
        config: ServerConfig,
        convocations: Option<Arc<dyn ConvocationSource>>,
    ) -> Self {
        Self {
            config,
            convocations,
        }
    }

    pub fn new_for_tests() -> Self {
        Self::new_with_source(ServerConfig::for_tests(), None)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn convocations(&self) -> Option<Arc<dyn ConvocationSource>> {
        self.convocations.clone()
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Convocation source error: {0}")]
    SourceError(#[from] SourceError),
}

#[derive(Debug, Clone)]
pub struct WebServer {
    context: AppContext,
}

impl WebServer {
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let context = AppContext::new(config)?;
        Ok(Self { context })
    }

    pub fn from_context(context: AppContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub async fn start(self) -> Result<ServerHandle, ServerError> {
        let WebServer { context } = self;
        let bind_addr = Self::bind_addr(context.config())?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
        };

        let (addr, server_future) = warp::serve(Self::filter(&context))
            .try_bind_with_graceful_shutdown(bind_addr, shutdown_signal)
            .map_err(Self::map_warp_error)?;

        tracing::info!(address = %addr, "web server listening");

        let task = tokio::spawn(server_future);

        Ok(ServerHandle::new(addr, shutdown_tx, task, context))
    }

    /// Full request pipeline: routes, request logging, JSON rejections.
    pub fn filter(
        context: &AppContext,
    ) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
        with_request_logging(Self::routes(context)).recover(handlers::handle_rejection)
    }

    fn bind_addr(config: &ServerConfig) -> Result<SocketAddr, ServerError> {
        let host = config.host();

        if let Ok(addr) = host.parse::<SocketAddr>() {
            return Ok(addr);
        }

        if let Ok(ip) = host.parse::<std::net::IpAddr>() {
            return Ok(SocketAddr::new(ip, config.port()));
        }

        let candidate = format!("{}:{}", host, config.port());
        let mut addrs = candidate.to_socket_addrs().map_err(|err| {
            ServerError::ConfigError(format!("failed to resolve address `{candidate}`: {err}"))
        })?;

        addrs.next().ok_or_else(|| {
            ServerError::ConfigError(format!("failed to resolve address `{candidate}`"))
        })
    }

    fn map_warp_error(err: warp::Error) -> ServerError {
        use std::error::Error as StdError;

        if let Some(io_err) = err
            .source()
            .and_then(|source| source.downcast_ref::<std::io::Error>())
        {
            return ServerError::BindError(std::io::Error::new(io_err.kind(), io_err.to_string()));
        }

        ServerError::ConfigError(err.to_string())
    }

    fn routes(context: &AppContext) -> BoxedFilter<(Response,)> {
        Self::health_route()
            .or(Self::teams_routes(context))
            .unify()
            .boxed()
    }

    fn health_route() -> BoxedFilter<(Response,)> {
        warp::path("health")
            .and(warp::get())
            .and(warp::path::end())
            .map(|| handlers::health().into_response())
            .boxed()
    }

    fn teams_routes(context: &AppContext) -> BoxedFilter<(Response,)> {
        let source = context.convocations();

        let get = warp::path!("api" / "convocations" / String / "teams")
            .and(warp::get())
            .and(Self::with_source(source))
            .and_then(
                |convocation_id: String, source: Option<Arc<dyn ConvocationSource>>| async move {
                    let response = handlers::get_teams(source, convocation_id).await;
                    Ok::<_, Infallible>(response)
                },
            );

        let other = warp::path!("api" / "convocations" / String / "teams")
            .and(warp::method())
            .and_then(|_convocation_id: String, method: Method| async move {
                let response = handlers::method_not_allowed(method).await;
                Ok::<_, Infallible>(response)
            });

        get.or(other).unify().boxed()
    }

    fn with_source(
        source: Option<Arc<dyn ConvocationSource>>,
    ) -> impl Filter<Extract = (Option<Arc<dyn ConvocationSource>>,), Error = Infallible> + Clone
    {
        warp::any().map(move || source.clone())
    }
}

#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
    context: AppContext,
}

impl ServerHandle {
    fn new(
        addr: SocketAddr,
        shutdown: oneshot::Sender<()>,
        task: JoinHandle<()>,
        context: AppContext,
    ) -> Self {
        Self {
            addr,
            shutdown: Some(shutdown),
            task: Some(task),
            context,
        }
    }

    pub fn address(&self) -> SocketAddr {
        self.addr
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub async fn shutdown(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        if let Some(task) = self.task.take() {
            task.await.map_err(|err| {
                ServerError::ConfigError(format!("server task join error: {err}"))
            })?;
        }

        Ok(())
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_accepts_ip_and_port() {
        let addr = WebServer::bind_addr(&ServerConfig::new("127.0.0.1", 8080)).unwrap();
        assert_eq!(addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn bind_addr_accepts_full_socket_address() {
        let addr = WebServer::bind_addr(&ServerConfig::new("0.0.0.0:9000", 1)).unwrap();
        assert_eq!(addr.port(), 9000);
    }

    #[test]
    fn missing_data_file_is_a_source_error() {
        let config = ServerConfig::for_tests().with_data_file("/nonexistent/convocations.json");
        assert!(matches!(
            AppContext::new(config),
            Err(ServerError::SourceError(_))
        ));
    }

    #[test]
    fn log_format_defaults_to_text_and_is_overridable() {
        assert_eq!(ServerConfig::for_tests().log_format(), LogFormat::Text);
        let config = ServerConfig::for_tests().with_log_format(LogFormat::Json);
        assert_eq!(config.log_format(), LogFormat::Json);
        let ctx = AppContext::new(config).unwrap();
        assert_eq!(ctx.config().log_format(), LogFormat::Json);
    }

    #[test]
    fn context_without_data_file_has_no_source() {
        let ctx = AppContext::new(ServerConfig::for_tests()).unwrap();
        assert!(ctx.convocations().is_none());
    }
}
