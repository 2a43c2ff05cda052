pub mod cache_repository;
pub mod edge_synthesis_repository;
pub mod storage_cache_repository;
pub mod synthesis_repository;

pub use cache_repository::AudioCacheRepository;
pub use edge_synthesis_repository::EdgeSynthesisRepository;
pub use storage_cache_repository::StorageCacheRepository;
pub use synthesis_repository::SynthesisRepository;
