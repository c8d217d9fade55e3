//! unidex CLI — application entry point and composition root.
//!
//! Selects the store backend from the environment (`UNIDEX_STORE`,
//! `UNIDEX_DATA_PATH`, `UNIDEX_API_URL`), then lists the directory as
//! JSON. An optional first argument becomes the search filter:
//!
//! ```text
//! unidex            # list everything
//! unidex stanford   # case-insensitive name search
//! ```

use tracing_subscriber::EnvFilter;
use unidex_core::error::UnidexResult;
use unidex_core::filter::UniversityFilter;
use unidex_core::models::university::{University, UniversityPatch};
use unidex_core::repository::UniversityRepository;
use unidex_store::{LocalUniversityStore, RemoteUniversityStore, StoreBackend, StoreConfig};

/// Composition-time backend choice. Callers only ever see the repository
/// trait; this enum is the single place that knows both variants.
enum AnyStore {
    Local(LocalUniversityStore),
    Remote(RemoteUniversityStore),
}

impl UniversityRepository for AnyStore {
    async fn list(&self, filter: UniversityFilter) -> UnidexResult<Vec<University>> {
        match self {
            AnyStore::Local(store) => store.list(filter).await,
            AnyStore::Remote(store) => store.list(filter).await,
        }
    }

    async fn get(&self, id: &str) -> UnidexResult<University> {
        match self {
            AnyStore::Local(store) => store.get(id).await,
            AnyStore::Remote(store) => store.get(id).await,
        }
    }

    async fn create(&self, input: UniversityPatch) -> UnidexResult<University> {
        match self {
            AnyStore::Local(store) => store.create(input).await,
            AnyStore::Remote(store) => store.create(input).await,
        }
    }

    async fn update(&self, id: &str, input: UniversityPatch) -> UnidexResult<University> {
        match self {
            AnyStore::Local(store) => store.update(id, input).await,
            AnyStore::Remote(store) => store.update(id, input).await,
        }
    }

    async fn delete(&self, id: &str) -> UnidexResult<()> {
        match self {
            AnyStore::Local(store) => store.delete(id).await,
            AnyStore::Remote(store) => store.delete(id).await,
        }
    }
}

fn build_store(config: StoreConfig) -> Result<AnyStore, reqwest::Error> {
    match config.backend {
        StoreBackend::Local { path } => Ok(AnyStore::Local(LocalUniversityStore::new(path))),
        StoreBackend::Remote { base_url } => {
            Ok(AnyStore::Remote(RemoteUniversityStore::new(base_url)?))
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("unidex=info".parse().unwrap()),
        )
        .json()
        .init();

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid store configuration");
            std::process::exit(1);
        }
    };

    let store = match build_store(config) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, "could not build the remote store");
            std::process::exit(1);
        }
    };

    let filter = UniversityFilter {
        search: std::env::args().nth(1),
        ..Default::default()
    };

    match store.list(filter).await {
        Ok(universities) => match serde_json::to_string_pretty(&universities) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!(error = %err, "could not render the listing");
                std::process::exit(1);
            }
        },
        Err(err) => {
            tracing::error!(error = %err, "listing failed");
            std::process::exit(1);
        }
    }
}
