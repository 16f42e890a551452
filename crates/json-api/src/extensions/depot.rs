//! Depot lookups for handlers.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

pub(crate) trait DepotExt {
    /// Fetch a value the router injected, such as the shared pantry state.
    ///
    /// A missing value is a wiring bug, so it surfaces as a 500.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(kind = type_name::<T>(), "depot is missing an injected value");

            StatusError::internal_server_error()
        })
    }
}
