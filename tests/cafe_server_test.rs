use anyhow::Result;
use cafe_service::{CafeServer, Dataset, Resolver};
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<cafe_service::Result<()>>,
}

impl TestServer {
    async fn start(dataset: Dataset) -> Result<Self> {
        let listener = CafeServer::<Dataset>::bind("127.0.0.1:0".parse()?).await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel::<()>();

        let server = CafeServer::new(Resolver::new(dataset));
        let handle = tokio::spawn(server.serve(listener, async move {
            let _ = rx.await;
        }));

        Ok(Self {
            addr,
            shutdown: Some(tx),
            handle,
        })
    }

    /// GET /cafe with the given parameters; returns status and split names.
    async fn cafes(&self, params: &[(&str, &str)]) -> Result<(u16, Vec<String>)> {
        let url = url::Url::parse_with_params(&format!("http://{}/cafe", self.addr), params)?;
        let response = reqwest::get(url).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        let cafes = match body.trim() {
            "" => Vec::new(),
            text => text.split(", ").map(str::to_string).collect(),
        };
        Ok((status, cafes))
    }

    async fn stop(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await??;
        Ok(())
    }
}

#[tokio::test]
async fn test_cafe_search() -> Result<()> {
    let server = TestServer::start(Dataset::builtin().clone()).await?;

    for (search, want) in [("фасоль", 0), ("кофе", 2), ("вилка", 1), ("КоФе", 2)] {
        let (status, cafes) = server.cafes(&[("city", "moscow"), ("search", search)]).await?;
        assert_eq!(status, 200);
        assert_eq!(cafes.len(), want, "search {:?}", search);

        for cafe in &cafes {
            assert!(cafe.to_lowercase().contains(&search.to_lowercase()));
        }
    }

    server.stop().await
}

#[tokio::test]
async fn test_cafe_count() -> Result<()> {
    let server = TestServer::start(Dataset::builtin().clone()).await?;
    let total = 5;

    for (count, want) in [("0", 0), ("1", 1), ("2", 2), ("100", total)] {
        let (status, cafes) = server.cafes(&[("city", "moscow"), ("count", count)]).await?;
        assert_eq!(status, 200);
        assert_eq!(cafes.len(), want, "count {}", count);
    }

    server.stop().await
}

#[tokio::test]
async fn test_configured_dataset() -> Result<()> {
    let dataset = Dataset::from_entries(vec![("kazan", vec!["Чайхана", "Эчпочмак"])])?;
    let server = TestServer::start(dataset).await?;

    let (status, cafes) = server.cafes(&[("city", "kazan")]).await?;
    assert_eq!(status, 200);
    assert_eq!(cafes, vec!["Чайхана", "Эчпочмак"]);

    let (status, _) = server.cafes(&[("city", "moscow")]).await?;
    assert_eq!(status, 400);

    server.stop().await
}

#[tokio::test]
async fn test_concurrent_requests() -> Result<()> {
    let server = TestServer::start(Dataset::builtin().clone()).await?;
    let base = format!("http://{}/cafe?city=tula&count=2", server.addr);

    let requests = (0..16).map(|_| {
        let url = base.clone();
        tokio::spawn(async move { reqwest::get(url).await?.text().await })
    });

    for request in requests.collect::<Vec<_>>() {
        assert_eq!(request.await??, "Кофе с собой, Пирожковая");
    }

    server.stop().await
}
