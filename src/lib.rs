//! Content-addressed audio cache and text-to-speech playback core.
//!
//! Speech audio for published content is generated once through a remote
//! synthesis function, stored under a content-addressed key in shared object
//! storage and replayed from the cache afterwards. [`PlaybackSession`]
//! drives the load/prepare/finalize state machine and the playback
//! transport; the storage and function boundaries are injected traits so the
//! whole pipeline runs against in-memory fakes in tests.
//!
//! Typical wiring:
//!
//! ```no_run
//! use std::sync::Arc;
//! use tma_voices::domain::audio::AudioService;
//! use tma_voices::infrastructure::config::Config;
//! use tma_voices::infrastructure::functions::RestFunctionInvoker;
//! use tma_voices::infrastructure::repositories::{
//!     EdgeSynthesisRepository, StorageCacheRepository,
//! };
//! use tma_voices::infrastructure::storage::RestObjectStore;
//!
//! let config = Config::from_env().expect("configuration");
//! let object_store = Arc::new(RestObjectStore::new(&config.backend_url, &config.api_key));
//! let invoker = Arc::new(RestFunctionInvoker::new(&config.backend_url, &config.api_key));
//!
//! let cache_repo = Arc::new(StorageCacheRepository::new(
//!     object_store,
//!     config.cache_control_secs,
//!     config.memory_cache_enabled,
//! ));
//! let synthesis_repo = Arc::new(EdgeSynthesisRepository::new(
//!     invoker,
//!     config.synthesis_function.clone(),
//! ));
//! let service = Arc::new(AudioService::new(cache_repo, synthesis_repo));
//! # let _ = service;
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::audio::{AudioService, AudioServiceApi, CacheKey, SynthesisError};
pub use domain::content::LanguageCode;
pub use domain::player::{LoadState, MediaOutput, PlaybackSession, PlayerEvent};
