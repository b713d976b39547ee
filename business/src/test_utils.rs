//! Fixtures and a mock-server harness for business tests.
//!
//! ```ignore
//! let mut test_ctx = TestContext::new().await;
//! test_ctx.mock_artworks_page(1, sample_artworks(0..12), 129).await;
//!
//! run_page_fetch_effect(&mut test_ctx.ctx);
//! test_ctx.flush_and_wait().await;
//!
//! assert_eq!(test_ctx.ctx.compute::<ArtworksPageCompute>().records.len(), 12);
//! ```

use std::ops::Range;

use crate::artwork::Artwork;

pub fn sample_artwork(id: u64, title: &str) -> Artwork {
    Artwork {
        id,
        title: title.to_owned(),
        place_of_origin: "Chicago".to_owned(),
        artist_display: "Unknown artist".to_owned(),
        inscriptions: None,
        date_start: Some(1900),
        date_end: Some(1901),
    }
}

pub fn sample_artworks(ids: Range<u64>) -> Vec<Artwork> {
    ids.map(|id| sample_artwork(id, &format!("Artwork {id}")))
        .collect()
}

/// A listing body shaped like the live endpoint's.
pub fn artworks_body(records: &[Artwork], total: u64) -> serde_json::Value {
    serde_json::json!({
        "pagination": {
            "total": total,
            "limit": 12,
            "offset": 0,
            "total_pages": total.div_ceil(12),
            "current_page": 1
        },
        "data": records,
        "info": { "license_text": "CC0" }
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub use mock::TestContext;

#[cfg(not(target_arch = "wasm32"))]
mod mock {
    use std::time::{Duration, Instant};

    use artworks_states::StateCtx;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::artworks_body;
    use crate::artwork::Artwork;
    use crate::{CatalogConfig, build_state_ctx};

    /// A mock catalog server plus a `StateCtx` pointed at it.
    pub struct TestContext {
        pub mock_server: MockServer,
        pub ctx: StateCtx,
    }

    impl TestContext {
        pub async fn new() -> Self {
            // Surfaces fetch logs under `RUST_LOG` when a test fails.
            let _ = env_logger::builder().is_test(true).try_init();
            let mock_server = MockServer::start().await;
            let ctx = build_state_ctx(CatalogConfig::new(mock_server.uri()));
            Self { mock_server, ctx }
        }

        /// Flushes queued commands and drives the task set until it is empty,
        /// syncing after every finished task.
        pub async fn flush_and_wait(&mut self) {
            self.ctx.sync_computes();
            self.ctx.flush_commands();

            let timeout = Duration::from_secs(5);
            let start = Instant::now();
            while self.ctx.task_count() > 0 {
                assert!(
                    start.elapsed() < timeout,
                    "Timed out waiting for {} pending tasks",
                    self.ctx.task_count()
                );
                if self.ctx.task_set_mut().join_next().await.is_some() {
                    self.ctx.sync_computes();
                }
            }

            self.ctx.sync_computes();
        }

        pub async fn mock_artworks_page(&self, page: u32, records: Vec<Artwork>, total: u64) {
            Mock::given(method("GET"))
                .and(path("/api/v1/artworks"))
                .and(query_param("page", page.to_string()))
                .and(query_param("limit", "12"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(artworks_body(&records, total)),
                )
                .mount(&self.mock_server)
                .await;
        }
    }
}
