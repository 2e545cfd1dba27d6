use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

// Shared by both providers so connections are reused across requests
pub(crate) static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});
