use std::time::Duration;

/// Timer used by debouncing and toast lifecycles.
///
/// The browser shell implements it over `setTimeout`; native builds and tests
/// use [`TokioSleep`] (feature `tokio`) or a hand-rolled fake.
#[allow(async_fn_in_trait)]
pub trait Sleep {
    async fn sleep(&self, duration: Duration);
}

impl<S: Sleep + ?Sized> Sleep for &S {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}

/// [`Sleep`] backed by `tokio::time`; honours a paused test clock.
#[cfg(feature = "tokio")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleep;

#[cfg(feature = "tokio")]
impl Sleep for TokioSleep {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
