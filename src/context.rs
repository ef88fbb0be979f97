use std::time::Duration;

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::error::Error;

/// cancellation and deadline carrier of an api request
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// a context which is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// a context cancelled when `token` is cancelled
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// derive a context which also expires after `timeout`
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// derive a context which also expires at `deadline`, the earlier deadline wins
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };

        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// cancel this context and every context derived from it
    /// cancel this context and every context derived from it
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// the instant this context expires at, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// the reason this context is done, `None` while still alive
    pub fn err(&self) -> Option<Error> {
        if self.token.is_cancelled() {
            return Some(Error::Cancelled);
        }

        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Some(Error::DeadlineExceeded),
            _ => None,
        }
    }

    /// resolves with the reason once this context is done
    pub async fn done(&self) -> Error {
        match self.deadline {
            None => {
                self.token.cancelled().await;

                Error::Cancelled
            }

            Some(deadline) => {
                tokio::select! {
                    _ = self.token.cancelled() => Error::Cancelled,
                    _ = time::sleep_until(deadline) => Error::DeadlineExceeded,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_alive() {
        let ctx = Context::background();

        assert!(ctx.err().is_none());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn cancel_propagates_to_derived() {
        let parent = Context::background();
        let child = parent.with_timeout(Duration::from_secs(60));

        parent.cancel();

        assert!(matches!(child.err(), Some(Error::Cancelled)));
    }

    #[test]
    fn earlier_deadline_wins() {
        let parent = Context::background().with_timeout(Duration::from_secs(1));
        let child = parent.with_timeout(Duration::from_secs(60));

        assert_eq!(child.deadline(), parent.deadline());
    }

    #[tokio::test]
    async fn done_on_deadline() {
        let ctx = Context::background().with_timeout(Duration::from_millis(10));

        assert!(matches!(ctx.done().await, Error::DeadlineExceeded));
        assert!(matches!(ctx.err(), Some(Error::DeadlineExceeded)));
    }
}
