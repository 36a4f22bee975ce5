
use cucumber::World;
use tokio::task::JoinHandle;

/// Shared state carried through each scenario.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct TaskflowWorld {
    /// Port of the in-process test server, once started.
    pub server_port: Option<u16>,
    /// Handle of the spawned server task, kept alive for the scenario.
    pub server_handle: Option<JoinHandle<()>>,
    /// HTTP client that does not follow redirects, so scenarios can assert
    /// on the 303 responses the mutating routes return.
    pub http_client: reqwest::Client,
    /// Status code of the most recent response.
    pub last_response_status: Option<u16>,
    /// Content-Type header of the most recent response.
    pub last_response_content_type: Option<String>,
    /// Location header of the most recent response, if any.
    pub last_response_location: Option<String>,
    /// Body of the most recent response.
    pub last_response_body: Option<String>,
}

impl TaskflowWorld {
    fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to build http client");
        TaskflowWorld {
            server_port: None,
            server_handle: None,
            http_client,
            last_response_status: None,
            last_response_content_type: None,
            last_response_location: None,
            last_response_body: None,
        }
    }
}

#[tokio::main]
async fn main() {
    TaskflowWorld::run("tests/features").await;
}
