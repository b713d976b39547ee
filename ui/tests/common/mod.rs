use std::time::Duration;

use artworks_business::{ArtworksPageCompute, ArtworksPageStatus};
use artworks_ui::ArtworksApp;
use artworks_ui::state::State;
use egui_kittest::Harness;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time given to the mock server between frames.
const API_RESPONSE_WAIT_MS: u64 = 25;

pub struct TestCtx<'a> {
    /// Kept alive so mounted endpoints keep answering; expectations are checked on drop.
    pub mock_server: MockServer,
    harness: Harness<'a, ArtworksApp>,
}

/// Mount mocks on the returned server before building the app: the first frame
/// already fetches page 1.
pub async fn start_mock_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

impl<'a> TestCtx<'a> {
    pub fn new_app(mock_server: MockServer) -> Self {
        let app = ArtworksApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, ArtworksApp> {
        &mut self.harness
    }

    pub fn page(&self) -> &ArtworksPageCompute {
        self.harness
            .state()
            .state
            .ctx
            .compute::<ArtworksPageCompute>()
    }

    /// Steps frames until no fetch is in flight and the page compute left `Idle`/`Loading`.
    pub async fn wait_for_settled_page(&mut self, max_frames: usize) -> ArtworksPageStatus {
        for _ in 0..max_frames {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(API_RESPONSE_WAIT_MS)).await;
            let settled = self.harness.state().state.ctx.task_count() == 0;
            if settled && !self.page().is_loading() {
                self.harness.step();
                return self.page().status.clone();
            }
        }
        panic!(
            "Timed out waiting for the page to settle, status: {:?}",
            self.page().status
        );
    }
}

pub fn artwork_json(id: u64, title: &str, artist: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "place_of_origin": "France",
        "artist_display": artist,
        "inscriptions": null,
        "date_start": 1900,
        "date_end": 1905
    })
}

pub async fn mock_page(
    server: &MockServer,
    page: u32,
    records: Vec<serde_json::Value>,
    total: u64,
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path("/api/v1/artworks"))
        .and(query_param("page", page.to_string()))
        .and(query_param("limit", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pagination": { "total": total, "limit": 12, "current_page": page },
            "data": records
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}
