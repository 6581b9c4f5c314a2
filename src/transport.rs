//! Connection plumbing: address parsing, channel setup and the outbound queue.
//!
//! Every frame the plugin writes (hello, subscribe, event results, actions,
//! logs) goes through one [`Outbound`] handle. The queue behind it is
//! unbounded so writers never wait on the host, and [`OutboundStream`] ends
//! after a [`Outbound::close`] once every frame queued before it has been
//! yielded, which tonic turns into "writes done" on the gRPC stream.

use std::fmt;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

#[cfg(unix)]
use std::path::PathBuf;

use tokio::sync::{mpsc, oneshot};
use tokio_stream::Stream;
use tonic::codec::Streaming;
use tonic::transport::{Channel, Endpoint};

use crate::error::RuntimeError;
use crate::types::{self, HostToPlugin, PluginClient, PluginToHost};

/// Where the host's plugin service listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    /// An `http://` or `https://` URI.
    Tcp(String),
    #[cfg(unix)]
    Unix(PathBuf),
}

impl FromStr for Address {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(RuntimeError::invalid_address(s, "address is empty"));
        }

        if let Some(rest) = raw.strip_prefix("unix:") {
            let path = rest.strip_prefix("//").unwrap_or(rest);
            return unix_address(raw, path);
        }
        if raw.starts_with('/') {
            return unix_address(raw, raw);
        }

        if let Some(rest) = raw.strip_prefix("tcp://") {
            if rest.is_empty() {
                return Err(RuntimeError::invalid_address(raw, "missing host"));
            }
            return Ok(Address::Tcp(format!("http://{rest}")));
        }
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return Ok(Address::Tcp(raw.to_owned()));
        }
        if let Some((scheme, _)) = raw.split_once("://") {
            return Err(RuntimeError::invalid_address(
                raw,
                format!("unsupported scheme `{scheme}`"),
            ));
        }

        Ok(Address::Tcp(format!("http://{raw}")))
    }
}

#[cfg(unix)]
fn unix_address(raw: &str, path: &str) -> Result<Address, RuntimeError> {
    if path.is_empty() {
        return Err(RuntimeError::invalid_address(raw, "missing socket path"));
    }
    Ok(Address::Unix(PathBuf::from(path)))
}

#[cfg(not(unix))]
fn unix_address(raw: &str, _path: &str) -> Result<Address, RuntimeError> {
    Err(RuntimeError::invalid_address(
        raw,
        "unix sockets are not supported on this platform",
    ))
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Tcp(uri) => f.write_str(uri),
            #[cfg(unix)]
            Address::Unix(path) => write!(f, "unix://{}", path.display()),
        }
    }
}

/// Opens a channel to the host.
pub async fn connect(address: &Address) -> Result<Channel, RuntimeError> {
    match address {
        Address::Tcp(uri) => {
            let endpoint = Endpoint::from_shared(uri.clone())
                .map_err(|e| RuntimeError::invalid_address(uri, e.to_string()))?;
            Ok(endpoint.connect().await?)
        }
        #[cfg(unix)]
        Address::Unix(path) => {
            use hyper_util::rt::TokioIo;
            use tokio::net::UnixStream;
            use tonic::transport::Uri;
            use tower::service_fn;

            let path = path.clone();
            // The URI is ignored by the connector but tonic requires a valid one.
            let channel = Endpoint::from_static("http://[::]:50050")
                .connect_with_connector(service_fn(move |_: Uri| {
                    let path = path.clone();
                    async move {
                        let stream = UnixStream::connect(path).await?;
                        Ok::<_, std::io::Error>(TokioIo::new(stream))
                    }
                }))
                .await?;
            Ok(channel)
        }
    }
}

/// Starts the `EventStream` call, handing tonic the outbound side.
pub async fn open(
    channel: Channel,
    outbound: OutboundStream,
) -> Result<Streaming<HostToPlugin>, RuntimeError> {
    let mut client = PluginClient::new(channel);
    let response = client.event_stream(outbound).await?;
    Ok(response.into_inner())
}

#[derive(Debug)]
enum Frame {
    Message(PluginToHost),
    Close,
}

/// Cloneable write handle for the outbound half of the stream.
#[derive(Debug, Clone)]
pub struct Outbound {
    plugin_id: Arc<str>,
    tx: mpsc::UnboundedSender<Frame>,
    closed: Arc<AtomicBool>,
}

impl Outbound {
    /// Creates a write handle and the stream that drains it.
    pub fn channel(plugin_id: impl Into<Arc<str>>) -> (Outbound, OutboundStream) {
        let (tx, rx) = mpsc::unbounded_channel();
        let outbound = Outbound {
            plugin_id: plugin_id.into(),
            tx,
            closed: Arc::new(AtomicBool::new(false)),
        };
        let stream = OutboundStream {
            rx,
            done: false,
            finished: None,
        };
        (outbound, stream)
    }

    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    /// Queues one payload, tagged with the plugin id.
    pub fn send(&self, payload: types::PluginPayload) -> Result<(), RuntimeError> {
        if self.is_closed() {
            return Err(RuntimeError::Closed);
        }
        let msg = PluginToHost {
            plugin_id: self.plugin_id.to_string(),
            payload: Some(payload),
        };
        self.tx
            .send(Frame::Message(msg))
            .map_err(|_| RuntimeError::Closed)
    }

    /// Ends the stream after everything queued so far. Idempotent.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            let _ = self.tx.send(Frame::Close);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Outbound frames in enqueue order, ending at close.
#[derive(Debug)]
pub struct OutboundStream {
    rx: mpsc::UnboundedReceiver<Frame>,
    done: bool,
    finished: Option<oneshot::Sender<()>>,
}

impl OutboundStream {
    /// Resolves once the stream has yielded its end, or errors if the stream
    /// is dropped first. Replaces any receiver handed out earlier.
    pub fn finished(&mut self) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        if self.done {
            let _ = tx.send(());
        } else {
            self.finished = Some(tx);
        }
        rx
    }
}

impl Stream for OutboundStream {
    type Item = PluginToHost;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.done {
            return Poll::Ready(None);
        }
        match self.rx.poll_recv(cx) {
            Poll::Ready(Some(Frame::Message(msg))) => Poll::Ready(Some(msg)),
            Poll::Ready(Some(Frame::Close)) | Poll::Ready(None) => {
                self.done = true;
                if let Some(finished) = self.finished.take() {
                    let _ = finished.send(());
                }
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    #[test]
    fn tcp_scheme_becomes_http() {
        let addr: Address = "tcp://127.0.0.1:50050".parse().unwrap();
        assert_eq!(addr, Address::Tcp("http://127.0.0.1:50050".into()));
    }

    #[test]
    fn bare_host_port_gets_http() {
        let addr: Address = "localhost:50050".parse().unwrap();
        assert_eq!(addr, Address::Tcp("http://localhost:50050".into()));
    }

    #[test]
    fn http_and_https_kept() {
        let addr: Address = "https://df.example:443".parse().unwrap();
        assert_eq!(addr, Address::Tcp("https://df.example:443".into()));
    }

    #[cfg(unix)]
    #[test]
    fn unix_forms() {
        for raw in ["unix:///tmp/df.sock", "unix:/tmp/df.sock", "/tmp/df.sock"] {
            let addr: Address = raw.parse().unwrap();
            assert_eq!(addr, Address::Unix(PathBuf::from("/tmp/df.sock")), "{raw}");
        }
    }

    #[test]
    fn rejects_empty_and_unknown_scheme() {
        assert!(matches!(
            "".parse::<Address>(),
            Err(RuntimeError::InvalidAddress { .. })
        ));
        assert!(matches!(
            "ftp://host:1".parse::<Address>(),
            Err(RuntimeError::InvalidAddress { .. })
        ));
    }

    #[tokio::test]
    async fn close_flushes_then_ends() {
        let (outbound, stream) = Outbound::channel("p");
        outbound
            .send(types::PluginPayload::Log(types::LogMessage::default()))
            .unwrap();
        outbound.close();
        outbound.close();

        assert!(matches!(
            outbound.send(types::PluginPayload::Log(types::LogMessage::default())),
            Err(RuntimeError::Closed)
        ));

        let frames: Vec<_> = stream.collect().await;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].plugin_id, "p");
    }

    #[tokio::test]
    async fn finished_fires_only_after_last_frame() {
        let (outbound, mut stream) = Outbound::channel("p");
        let mut finished = stream.finished();
        outbound
            .send(types::PluginPayload::Log(types::LogMessage::default()))
            .unwrap();
        outbound.close();

        assert!(stream.next().await.is_some());
        assert!(finished.try_recv().is_err());
        assert!(stream.next().await.is_none());
        assert_eq!(finished.await, Ok(()));

        // Asking again after the end resolves at once.
        assert_eq!(stream.finished().await, Ok(()));
    }

    #[tokio::test]
    async fn finished_errors_when_stream_dropped() {
        let (_outbound, mut stream) = Outbound::channel("p");
        let finished = stream.finished();
        drop(stream);
        assert!(finished.await.is_err());
    }
}
