use crate::domain::model::{CollectionResult, Stratum};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn min_per_stratum(&self) -> usize;
    fn allow_short(&self) -> bool;
    fn output_path(&self) -> &str;
    fn seed_file(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Stratum>>;
    async fn transform(&self, strata: Vec<Stratum>) -> Result<CollectionResult>;
    async fn load(&self, result: &CollectionResult) -> Result<String>;
}
