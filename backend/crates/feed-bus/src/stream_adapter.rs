use crate::frame::{self, KEEP_ALIVE_FRAME};
use crate::{BusError, Metrics, Result as BusResult, ShutdownGuard, StreamConfig, Subscriber};

use std::convert::Infallible;
use std::panic::Location;

use bytes::Bytes;
use error_location::ErrorLocation;
use futures::Stream;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::Span;

/// Why a stream ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Client went away (body dropped or write failed)
    Disconnected,
    /// Bus evicted the subscriber for falling behind
    Evicted,
    /// Every handle to the bus was dropped
    BusClosed,
    /// Process is shutting down
    Shutdown,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Evicted => "evicted",
            Self::BusClosed => "bus_closed",
            Self::Shutdown => "shutdown",
        }
    }
}

/// Drives one subscriber's event stream.
///
/// Each pull races the next event against shutdown and the keep-alive timer;
/// whichever fires first wins. The subscriber is unregistered when the adapter
/// is dropped, however the stream ended.
pub struct StreamAdapter {
    subscriber: Subscriber,
    shutdown: ShutdownGuard,
    keep_alive: Option<Interval>,
    preamble: Option<Bytes>,
    metrics: Metrics,
    span: Span,
    frames_sent: u64,
    close_reason: Option<CloseReason>,
}

impl StreamAdapter {
    pub fn new(
        subscriber: Subscriber,
        shutdown: ShutdownGuard,
        config: &StreamConfig,
        metrics: Metrics,
    ) -> Self {
        let keep_alive = config.keep_alive.filter(|period| !period.is_zero()).map(|period| {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
        let span = crate::create_stream_span(&subscriber.id().to_string());

        metrics.stream_opened();
        span.in_scope(|| log::info!("Event stream opened for subscriber {}", subscriber.id()));

        Self {
            subscriber,
            shutdown,
            keep_alive,
            preamble: config.retry_ms.map(frame::encode_retry),
            metrics,
            span,
            frames_sent: 0,
            close_reason: None,
        }
    }

    /// Pull the next wire frame, or `None` once the stream is over
    pub async fn next_frame(&mut self) -> Option<Bytes> {
        if self.close_reason.is_some() {
            return None;
        }

        if let Some(preamble) = self.preamble.take() {
            self.record_frame("retry");
            return Some(preamble);
        }

        tokio::select! {
            biased;

            _ = self.shutdown.wait() => {
                self.close(CloseReason::Shutdown);
                None
            }

            event = self.subscriber.recv() => match event {
                Some(event) => {
                    let label = self.metrics.event_label(event.event_type());
                    self.record_frame(label);
                    Some(event.to_frame())
                }
                None => {
                    let reason = if self.subscriber.is_bus_alive() {
                        CloseReason::Evicted
                    } else {
                        CloseReason::BusClosed
                    };
                    self.close(reason);
                    None
                }
            },

            _ = tick(&mut self.keep_alive) => {
                self.record_frame("keep_alive");
                Some(Bytes::from_static(KEEP_ALIVE_FRAME))
            }
        }
    }

    /// Write frames to `writer` until the stream ends.
    ///
    /// A failed write counts as a disconnect: the loop stops and the error is
    /// returned for logging. Nothing is retried.
    pub async fn run<W>(mut self, writer: &mut W) -> BusResult<CloseReason>
    where
        W: AsyncWrite + Unpin,
    {
        while let Some(frame) = self.next_frame().await {
            let written = match writer.write_all(&frame).await {
                Ok(()) => writer.flush().await,
                Err(e) => Err(e),
            };

            if let Err(e) = written {
                self.close(CloseReason::Disconnected);
                return Err(BusError::ConnectionClosed {
                    reason: format!("write to subscriber {} failed: {e}", self.subscriber.id()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(self.close_reason.unwrap_or(CloseReason::Disconnected))
    }

    /// Turn the adapter into a body stream for an HTTP response.
    ///
    /// When the client disconnects the server drops the body, and with it the
    /// adapter.
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static {
        futures::stream::unfold(self, |mut adapter| async move {
            adapter.next_frame().await.map(|frame| (Ok(frame), adapter))
        })
    }

    pub fn subscriber(&self) -> &Subscriber {
        &self.subscriber
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        self.close_reason
    }

    fn record_frame(&mut self, kind: &'static str) {
        self.frames_sent += 1;
        self.metrics.frame_sent(kind);
    }

    fn close(&mut self, reason: CloseReason) {
        if self.close_reason.is_none() {
            self.close_reason = Some(reason);
        }
    }
}

impl Drop for StreamAdapter {
    fn drop(&mut self) {
        let reason = self.close_reason.unwrap_or(CloseReason::Disconnected);
        self.metrics.stream_closed(reason.as_str());
        self.span.in_scope(|| {
            log::info!(
                "Event stream closed for subscriber {} ({}, {} frames sent)",
                self.subscriber.id(),
                reason.as_str(),
                self.frames_sent
            )
        });
    }
}

async fn tick(keep_alive: &mut Option<Interval>) {
    match keep_alive {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
