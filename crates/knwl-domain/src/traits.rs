//! Trait definitions for external interactions
//!
//! The triple store is a collaborator: the ontology layers only see it
//! through [`QuadStore`]. Implementations live in other crates (knwl-store).

use crate::quad::{Quad, QuadPattern};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Trait for storing and matching statements
///
/// Implemented by the infrastructure layer (knwl-store)
#[async_trait]
pub trait QuadStore: Send + Sync {
    /// Error type for store operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert statements, returning how many were new
    async fn put(&self, quads: Vec<Quad>) -> Result<usize, Self::Error>;

    /// All statements matching a pattern
    async fn get(&self, pattern: &QuadPattern) -> Result<Vec<Quad>, Self::Error>;

    /// Stream the statements matching a pattern
    fn match_quads(&self, pattern: QuadPattern) -> QuadStream<Self::Error>;

    /// Delete every statement matching a pattern, returning how many went
    async fn remove_matches(&self, pattern: &QuadPattern) -> Result<usize, Self::Error>;

    /// Total number of statements
    async fn count(&self) -> Result<usize, Self::Error>;

    /// Release the backend; later calls fail
    async fn close(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    Open,
    Ended,
    Failed,
}

/// A finite, single-pass stream of matched statements
///
/// Yields `Ok` items until the producer finishes. An error is yielded once
/// and terminates the stream.
#[derive(Debug)]
pub struct QuadStream<E> {
    rx: mpsc::Receiver<Result<Quad, E>>,
    state: StreamState,
}

/// Producer half of a [`QuadStream`]
#[derive(Debug)]
pub struct QuadSink<E> {
    tx: mpsc::Sender<Result<Quad, E>>,
}

impl<E> QuadStream<E> {
    /// Bounded producer/consumer pair
    pub fn channel(capacity: usize) -> (QuadSink<E>, QuadStream<E>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (
            QuadSink { tx },
            QuadStream {
                rx,
                state: StreamState::Open,
            },
        )
    }

    /// Stream over an already materialized result
    pub fn from_quads(quads: Vec<Quad>) -> Self {
        let (tx, rx) = mpsc::channel(quads.len().max(1));
        for quad in quads {
            // Capacity covers every item, so this cannot fail
            let _ = tx.try_send(Ok(quad));
        }
        QuadStream {
            rx,
            state: StreamState::Open,
        }
    }

    /// Stream that fails immediately
    pub fn failed(error: E) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let _ = tx.try_send(Err(error));
        QuadStream {
            rx,
            state: StreamState::Open,
        }
    }

    /// Next item, `None` once the stream has ended or failed
    pub async fn next(&mut self) -> Option<Result<Quad, E>> {
        if self.state != StreamState::Open {
            return None;
        }
        match self.rx.recv().await {
            Some(Ok(quad)) => Some(Ok(quad)),
            Some(Err(error)) => {
                self.state = StreamState::Failed;
                self.rx.close();
                Some(Err(error))
            }
            None => {
                self.state = StreamState::Ended;
                None
            }
        }
    }

    /// Drain the stream, stopping at the first error
    pub async fn collect(mut self) -> Result<Vec<Quad>, E> {
        let mut quads = Vec::new();
        while let Some(item) = self.next().await {
            quads.push(item?);
        }
        Ok(quads)
    }

    /// Whether at least one statement matches, without draining the rest
    pub async fn any(mut self) -> Result<bool, E> {
        match self.next().await {
            Some(Ok(_)) => Ok(true),
            Some(Err(error)) => Err(error),
            None => Ok(false),
        }
    }

    /// Whether the stream ended on an error
    pub fn is_failed(&self) -> bool {
        self.state == StreamState::Failed
    }
}

impl<E> QuadSink<E> {
    /// Send from a blocking worker; `false` once the consumer is gone
    pub fn blocking_send(&self, quad: Quad) -> bool {
        self.tx.blocking_send(Ok(quad)).is_ok()
    }

    /// Terminate the stream with an error from a blocking worker
    pub fn blocking_fail(self, error: E) {
        let _ = self.tx.blocking_send(Err(error));
    }

    /// Send from async code; `false` once the consumer is gone
    pub async fn send(&self, quad: Quad) -> bool {
        self.tx.send(Ok(quad)).await.is_ok()
    }

    /// Terminate the stream with an error from async code
    pub async fn fail(self, error: E) {
        let _ = self.tx.send(Err(error)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::Uri;
    use crate::quad::Term;
    use crate::vocabulary;

    fn quad(subject: &str) -> Quad {
        Quad::new(Uri::new(subject).unwrap(), vocabulary::label(), Term::literal("x"))
    }

    #[derive(Debug, PartialEq)]
    struct Boom;

    #[tokio::test]
    async fn test_stream_yields_then_ends() {
        let mut stream: QuadStream<Boom> =
            QuadStream::from_quads(vec![quad("http://a/1"), quad("http://a/2")]);

        assert!(matches!(stream.next().await, Some(Ok(_))));
        assert!(matches!(stream.next().await, Some(Ok(_))));
        assert!(stream.next().await.is_none());
        assert!(stream.next().await.is_none());
        assert!(!stream.is_failed());
    }

    #[tokio::test]
    async fn test_stream_error_terminates() {
        let (sink, mut stream) = QuadStream::channel(4);
        sink.send(quad("http://a/1")).await;
        sink.fail(Boom).await;

        assert!(matches!(stream.next().await, Some(Ok(_))));
        assert_eq!(stream.next().await, Some(Err(Boom)));
        assert!(stream.next().await.is_none());
        assert!(stream.is_failed());
    }

    #[tokio::test]
    async fn test_collect_stops_at_error() {
        let stream: QuadStream<Boom> = QuadStream::failed(Boom);
        assert_eq!(stream.collect().await, Err(Boom));
    }

    #[tokio::test]
    async fn test_blocking_producer() {
        let (sink, stream) = QuadStream::<Boom>::channel(1);
        tokio::task::spawn_blocking(move || {
            for i in 0..5 {
                if !sink.blocking_send(quad(&format!("http://a/{}", i))) {
                    break;
                }
            }
        });

        assert_eq!(stream.collect().await.unwrap().len(), 5);
    }
}
