use crate::crypto::random_server_secret;
use crate::tree::{Client, Server};

/// A server and a client sharing one cloud secret
///
/// The server secret is freshly generated for every `TestTree`, so tests that
/// compare against the fixtures in [`crate::testkit`] also show that the server
/// secret has no influence on derived values.
pub struct TestTree {
    pub server: Server,
    pub client: Client,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// A tree with an empty cloud secret
    pub fn new() -> Self {
        Self::with_cloud_secret("")
    }

    pub fn with_cloud_secret(cloud_secret: &str) -> Self {
        let server_secret = random_server_secret().expect("failed to generate server secret");
        Self {
            server: Server::new(server_secret, cloud_secret),
            client: Client::new(cloud_secret),
        }
    }
}
