//! In-memory provider double shared by service and route tests.

use std::sync::atomic::{AtomicU16, AtomicU32, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use comicache_client::{ComicSource, FetchError, RawComic};

/// Serves comics `1..=latest`; even ids mention "xkcd" in their transcript.
#[derive(Debug, Default)]
pub struct StubSource {
    latest: AtomicU32,
    fail_status: AtomicU16,
    delay_ms: AtomicU32,
    latest_calls: AtomicUsize,
    by_id_calls: AtomicUsize,
}

impl StubSource {
    pub fn with_latest(latest: u32) -> Self {
        let stub = Self::default();
        stub.set_latest(latest);
        stub
    }

    pub fn set_latest(&self, latest: u32) {
        self.latest.store(latest, Ordering::SeqCst);
    }

    /// Answer every request with `status` (0 clears).
    pub fn fail_with(&self, status: u16) {
        self.fail_status.store(status, Ordering::SeqCst);
    }

    pub fn delay(&self, ms: u32) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    pub fn latest_calls(&self) -> usize {
        self.latest_calls.load(Ordering::SeqCst)
    }

    pub fn by_id_calls(&self) -> usize {
        self.by_id_calls.load(Ordering::SeqCst)
    }

    pub fn raw(id: u32) -> RawComic {
        let transcript = if id % 2 == 0 { Some(format!("[[Panel {id}: an xkcd reader]]")) } else { None };
        RawComic {
            num: id,
            title: format!("Comic {id}"),
            img: format!("https://imgs.xkcd.com/comics/{id}.png"),
            alt: format!("alt text {id}"),
            transcript,
            year: "2024".into(),
            month: "5".into(),
            day: "17".into(),
            safe_title: format!("Comic {id}"),
        }
    }

    async fn pause_and_check(&self) -> Result<(), FetchError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }
        match self.fail_status.load(Ordering::SeqCst) {
            0 => Ok(()),
            404 => Err(FetchError::NotFound("stub".into())),
            status => Err(FetchError::HttpError { status }),
        }
    }
}

#[async_trait]
impl ComicSource for StubSource {
    async fn latest(&self) -> Result<RawComic, FetchError> {
        self.latest_calls.fetch_add(1, Ordering::SeqCst);
        self.pause_and_check().await?;
        Ok(Self::raw(self.latest.load(Ordering::SeqCst)))
    }

    async fn by_id(&self, id: u32) -> Result<RawComic, FetchError> {
        self.by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.pause_and_check().await?;
        if id == 0 || id > self.latest.load(Ordering::SeqCst) {
            return Err(FetchError::NotFound(format!("stub/{id}")));
        }
        Ok(Self::raw(id))
    }
}
