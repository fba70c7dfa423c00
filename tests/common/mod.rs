//! Shared utilities for integration tests.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use locale_edge::config::SiteEdgeConfig;
use locale_edge::http::HttpServer;
use locale_edge::lifecycle::Shutdown;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A running server plus the fixtures it serves.
pub struct TestSite {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    _public: TempDir,
}

impl TestSite {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestSite {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Write a tiny static export: localized pages plus a couple of assets.
pub fn write_static_export(root: &Path) {
    for locale in ["en", "ja", "ko", "zh", "es"] {
        let menu = root.join(locale).join("menu");
        fs::create_dir_all(&menu).unwrap();
        fs::write(
            root.join(locale).join("index.html"),
            format!("<html lang=\"{}\">home</html>", locale),
        )
        .unwrap();
        fs::write(
            menu.join("index.html"),
            format!("<html lang=\"{}\">menu</html>", locale),
        )
        .unwrap();
    }

    fs::write(root.join("favicon.ico"), b"icon").unwrap();
    fs::create_dir_all(root.join("_next").join("static")).unwrap();
    fs::write(root.join("_next").join("static").join("chunk.js"), "console.log(1)").unwrap();
}

/// Start a server on an ephemeral port with `configure` applied to the config.
pub async fn start_site<F>(configure: F) -> TestSite
where
    F: FnOnce(&mut SiteEdgeConfig),
{
    let public = TempDir::new().unwrap();
    write_static_export(public.path());

    let mut config = SiteEdgeConfig::default();
    config.site.base_url = "https://donuts.example".to_string();
    config.site.public_dir = public.path().to_string_lossy().into_owned();
    config.site.last_modified = Some("2024-05-01T09:00:00Z".to_string());
    configure(&mut config);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).expect("valid test config");
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestSite {
        addr,
        shutdown,
        _public: public,
    }
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
