//! Delay abstractions
//!
//! The sequencer holds each phase through one of these traits, so tests can
//! advance virtual time instead of sleeping.

/// Blocking millisecond delay
pub trait Delay {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Async millisecond delay
///
/// Used under an executor that can sleep between phases instead of spinning.
#[allow(async_fn_in_trait)]
pub trait AsyncDelay {
    /// Resolve after at least `ms` milliseconds
    async fn after_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

/// Adapter from `embedded-hal` / `embedded-hal-async` delays
///
/// `embassy_time::Delay` implements both, so one wrapper gives the
/// sequencer either a blocking or an async hold.
pub struct EhDelay<D>(pub D);

impl<D: embedded_hal::delay::DelayNs> Delay for EhDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        embedded_hal::delay::DelayNs::delay_ms(&mut self.0, ms);
    }
}

impl<D: embedded_hal_async::delay::DelayNs> AsyncDelay for EhDelay<D> {
    async fn after_ms(&mut self, ms: u32) {
        embedded_hal_async::delay::DelayNs::delay_ms(&mut self.0, ms).await;
    }
}
