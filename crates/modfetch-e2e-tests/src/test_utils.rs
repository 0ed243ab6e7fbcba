use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use eyre::Result;
use modfetch_lib::cli::{FetchParams, run_fetch};
use modfetch_lib::download::{DownloadSummary, HttpClientOptions};
use modfetch_lib::error::ModFetchError;
use modfetch_lib::report::Reporter;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Clone)]
struct FileServerState {
    routes: Arc<HashMap<String, (StatusCode, Vec<u8>)>>,
    hits: Arc<AtomicUsize>,
}

/// Serves fixed responses by request path; every other path is a 404.
pub struct TestFileServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl TestFileServer {
    pub async fn start<'a>(
        routes: impl IntoIterator<Item = (&'a str, StatusCode, Vec<u8>)>,
    ) -> Result<Self> {
        let routes = routes
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), (status, body)))
            .collect();
        let hits = Arc::new(AtomicUsize::new(0));
        let state = FileServerState {
            routes: Arc::new(routes),
            hits: hits.clone(),
        };

        let app = Router::new().fallback(serve_route).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!("Test file server stopped: {}", err);
            }
        });

        Ok(Self { addr, hits, handle })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for TestFileServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_route(State(state): State<FileServerState>, uri: Uri) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match state.routes.get(uri.path()) {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Answers every connection with a 200 whose `Content-Length` promises more
/// bytes than it sends, then closes the connection.
pub struct ShortBodyServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl ShortBodyServer {
    pub async fn start(sent: &'static [u8], advertised_len: usize) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let head = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {advertised_len}\r\nConnection: close\r\n\r\n"
                );
                if stream.write_all(head.as_bytes()).await.is_err() {
                    continue;
                }
                let _ = stream.write_all(sent).await;
                let _ = stream.shutdown().await;
            }
        });

        Ok(Self { addr, handle })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for ShortBodyServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A report stream that rejects every write.
pub struct FailingWriter;

impl std::io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "report stream closed",
        ))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Writes a settings file that keeps requests away from any system proxy.
pub fn write_settings(dir: &Path, output_root: &Path) -> Result<PathBuf> {
    let path = dir.join("modfetch.toml");
    std::fs::write(
        &path,
        format!(
            "output_root = {}\nuse_system_proxy = false\nrequest_timeout_secs = 10\n",
            serde_json::to_string(&output_root.display().to_string())?
        ),
    )?;
    Ok(path)
}

pub fn write_manifest(dir: &Path, manifest: &serde_json::Value) -> Result<PathBuf> {
    let path = dir.join("modrinth.index.json");
    std::fs::write(&path, serde_json::to_string_pretty(manifest)?)?;
    Ok(path)
}

pub fn fetch_params(manifest_path: &Path, output_root: &Path) -> FetchParams {
    FetchParams {
        manifest_path: manifest_path.to_path_buf(),
        output_root: output_root.to_path_buf(),
        http: HttpClientOptions {
            user_agent: "modfetch-e2e-tests".to_string(),
            request_timeout: Some(Duration::from_secs(10)),
            use_system_proxy: false,
        },
    }
}

/// Runs the pipeline and returns its result together with the report text,
/// stripped of color codes.
pub async fn run_pipeline(
    params: FetchParams,
) -> (Result<DownloadSummary, ModFetchError>, String) {
    let mut reporter = Reporter::new(Vec::new());
    let result = run_fetch(params, &mut reporter).await;
    let output = String::from_utf8_lossy(&reporter.into_inner()).into_owned();
    (result, console::strip_ansi_codes(&output).into_owned())
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("modfetch_lib=debug,modfetch_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
