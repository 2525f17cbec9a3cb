use std::sync::Arc;

use actix_web::web::Data;

use crate::errors::StoreError;
use crate::repositories::DocumentStore;

/// `store` is `None` when the process started without database configuration;
/// accessor-backed routes then fail as unavailable.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    pub fn new<S: DocumentStore + 'static>(store: S) -> Data<Self> {
        Data::new(Self {
            store: Some(Arc::new(store)),
        })
    }

    pub fn disconnected() -> Data<Self> {
        Data::new(Self { store: None })
    }

    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, StoreError> {
        self.store.as_ref().ok_or(StoreError::Unavailable)
    }
}
