use async_trait::async_trait;

use crate::window::ReservationWindow;

pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Read-only lookup of a reservation window by its canonical slug.
///
/// Implementations own their own timeout and retry policy; the validator
/// performs exactly one call per evaluation and treats any error as
/// terminal for that request.
#[async_trait]
pub trait WindowStore: Send + Sync {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<ReservationWindow>, StoreError>;
}
