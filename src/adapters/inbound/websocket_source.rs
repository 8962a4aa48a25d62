use crate::application::{DashboardCommand, DashboardHandle, TelemetrySource};
use crate::common::{ApplicationError, ApplicationResult};
use async_trait::async_trait;
use futures_util::StreamExt;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

/// Telemetry feed over a WebSocket. Connects once; there is no reconnect.
pub struct WebSocketSource {
    url: String,
}

impl WebSocketSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

fn transport_error(e: String) -> ApplicationError {
    ApplicationError::Transport(e)
}

#[async_trait]
impl TelemetrySource for WebSocketSource {
    async fn run(&self, dashboard: DashboardHandle) -> ApplicationResult<()> {
        info!("Connecting to telemetry feed at {}", self.url);
        let (mut stream, _) = match connect_async(self.url.as_str()).await {
            Ok(connection) => connection,
            Err(e) => {
                dashboard
                    .send(DashboardCommand::TransportError(e.to_string()))
                    .await
                    .map_err(transport_error)?;
                dashboard
                    .send(DashboardCommand::TransportClosed)
                    .await
                    .map_err(transport_error)?;
                return Err(ApplicationError::Transport(format!(
                    "Failed to connect to {}: {}",
                    self.url, e
                )));
            }
        };

        dashboard
            .send(DashboardCommand::TransportOpened)
            .await
            .map_err(transport_error)?;

        while let Some(message) = stream.next().await {
            match message {
                Ok(Message::Text(text)) => dashboard.inbound(text).await.map_err(transport_error)?,
                Ok(Message::Binary(bytes)) => match String::from_utf8(bytes) {
                    Ok(text) => dashboard.inbound(text).await.map_err(transport_error)?,
                    Err(_) => warn!("Dropping non UTF-8 binary frame"),
                },
                Ok(Message::Close(frame)) => {
                    debug!("Server closed the feed: {:?}", frame);
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    dashboard
                        .send(DashboardCommand::TransportError(e.to_string()))
                        .await
                        .map_err(transport_error)?;
                    break;
                }
            }
        }

        dashboard
            .send(DashboardCommand::TransportClosed)
            .await
            .map_err(transport_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::SinkExt;
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_forwards_frames_then_reports_close() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut socket = tokio_tungstenite::accept_async(stream).await.unwrap();
            socket.send(Message::Text("first".to_string())).await.unwrap();
            socket.send(Message::Binary(b"second".to_vec())).await.unwrap();
            socket.close(None).await.unwrap();
        });

        let (sender, mut receiver) = mpsc::channel(8);
        let source = WebSocketSource::new(format!("ws://{}", addr));
        source.run(DashboardHandle::new(sender)).await.unwrap();
        server.await.unwrap();

        assert_eq!(receiver.recv().await, Some(DashboardCommand::TransportOpened));
        assert_eq!(receiver.recv().await, Some(DashboardCommand::Inbound("first".to_string())));
        assert_eq!(receiver.recv().await, Some(DashboardCommand::Inbound("second".to_string())));
        assert_eq!(receiver.recv().await, Some(DashboardCommand::TransportClosed));
    }

    #[tokio::test]
    async fn test_connect_failure_reports_error_and_close() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (sender, mut receiver) = mpsc::channel(8);
        let source = WebSocketSource::new(format!("ws://{}", addr));
        let err = source.run(DashboardHandle::new(sender)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Transport(_)));

        assert!(matches!(receiver.recv().await, Some(DashboardCommand::TransportError(_))));
        assert_eq!(receiver.recv().await, Some(DashboardCommand::TransportClosed));
    }
}
