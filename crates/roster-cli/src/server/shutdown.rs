//! Termination signal handling.

use std::time::Duration;

use super::TRACING_TARGET_SHUTDOWN;

/// The process signal that ended the serve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Interrupt,
    Terminate,
}

impl Signal {
    fn as_str(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Resolves once the process is asked to stop, then announces the drain
/// window so in-flight requests are visible in the shutdown trace.
pub async fn shutdown_signal(shutdown_timeout: Duration) {
    let signal = wait_for_signal().await;

    tracing::info!(
        target: TRACING_TARGET_SHUTDOWN,
        signal = signal.as_str(),
        drain_secs = shutdown_timeout.as_secs(),
        "Termination signal received, draining in-flight requests"
    );
}

/// Waits for SIGINT (Ctrl+C) or, on Unix, SIGTERM.
///
/// A handler that cannot be installed is logged and parked forever, so
/// the other signal still terminates the server.
async fn wait_for_signal() -> Signal {
    let interrupt = tokio::signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_SHUTDOWN,
                    error = %error,
                    "Failed to install SIGTERM handler"
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        result = interrupt => {
            if let Err(error) = result {
                tracing::error!(
                    target: TRACING_TARGET_SHUTDOWN,
                    error = %error,
                    "Failed to install Ctrl+C handler"
                );
            }
            Signal::Interrupt
        }
        () = terminate => Signal::Terminate,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn signal_labels() {
        assert_eq!(Signal::Interrupt.as_str(), "SIGINT");
        assert_eq!(Signal::Terminate.as_str(), "SIGTERM");
    }

    #[tokio::test]
    async fn pends_until_a_signal_arrives() {
        let pending = shutdown_signal(Duration::from_secs(1));
        let result = tokio::time::timeout(Duration::from_millis(20), pending).await;
        assert!(result.is_err());
    }
}
