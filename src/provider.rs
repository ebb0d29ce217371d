use async_trait::async_trait;

#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetch the source and return its config lines in order.
    async fn list(&mut self) -> anyhow::Result<Vec<String>>;
    fn name(&self) -> &str;
    fn set_proxy(&mut self, proxy: String);
}
