pub mod subscription;

pub use subscription::Subscription;

use reqwest::Client;
use std::time::Duration;

/// Build the HTTP client used for source fetches.
///
/// Without a `timeout` the reqwest default applies.
pub fn new_client(proxy: Option<&str>, timeout: Option<Duration>) -> anyhow::Result<Client> {
    let mut builder = Client::builder();

    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }

    if let Some(p) = proxy {
        if !p.is_empty() {
            let proxy_url = if p.contains("://") {
                reqwest::Proxy::all(p)?
            } else {
                reqwest::Proxy::all(format!("http://{}", p))?
            };
            builder = builder.proxy(proxy_url);
        }
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_and_without_proxy() {
        assert!(new_client(None, None).is_ok());
        assert!(new_client(Some(""), Some(Duration::from_secs(5))).is_ok());
        assert!(new_client(Some("127.0.0.1:8080"), None).is_ok());
    }
}
