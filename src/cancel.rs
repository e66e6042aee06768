//! Request Scopes
//!
//! Ties in-flight requests to the lifetime of the component that issued them.

use std::future::Future;

use futures::future::{select, Either};
use futures::pin_mut;
use leptos::prelude::on_cleanup;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiError, ApiResult};

/// Cancellation handle shared by every request of one page
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    token: CancellationToken,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope cancelled when the current reactive owner is disposed
    pub fn for_component() -> Self {
        let scope = Self::new();
        let token = scope.token.clone();
        on_cleanup(move || token.cancel());
        scope
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Race `request` against cancellation; a cancelled request never resolves to data
    pub async fn run<F, T>(&self, request: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
    {
        if self.token.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let cancelled = self.token.cancelled();
        pin_mut!(request);
        pin_mut!(cancelled);
        match select(request, cancelled).await {
            Either::Left((result, _)) if !self.token.is_cancelled() => result,
            _ => Err(ApiError::Cancelled),
        }
    }

    /// Like [`RequestScope::run`] for calls that cannot fail
    pub async fn run_infallible<F, T>(&self, request: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        self.run(async { Ok(request.await) }).await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{join, pending, ready};

    #[test]
    fn test_run_passes_result_through() {
        let scope = RequestScope::new();
        let result = block_on(scope.run(ready(Ok::<_, ApiError>(7))));
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_run_after_cancel_short_circuits() {
        let scope = RequestScope::new();
        scope.cancel();
        let result = block_on(scope.run(ready(Ok::<_, ApiError>(7))));
        assert!(result.unwrap_err().is_cancelled());
    }

    #[test]
    fn test_cancel_releases_pending_request() {
        let scope = RequestScope::new();
        let canceller = scope.clone();
        let (result, _) = block_on(join(
            scope.run(pending::<ApiResult<u32>>()),
            async move { canceller.cancel() },
        ));
        assert!(result.unwrap_err().is_cancelled());
    }

    #[test]
    fn test_run_infallible() {
        let scope = RequestScope::new();
        assert_eq!(block_on(scope.run_infallible(ready(12.5))), Some(12.5));
        scope.cancel();
        assert_eq!(block_on(scope.run_infallible(ready(12.5))), None);
    }
}
