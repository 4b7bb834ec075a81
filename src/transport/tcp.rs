use std::io::ErrorKind;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::protocol::Message;
use crate::transport::Transport;

/// Tunables for `TcpTransport`.
#[derive(Debug, Clone, Copy)]
pub struct TcpConfig {
    /// Upper bound on a single send or receive.
    pub io_timeout: Duration,
    /// Largest accepted frame body, in bytes.
    pub max_frame: u32,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            io_timeout: Duration::from_secs(30),
            max_frame: 64 * 1024,
        }
    }
}

/// Bincode messages framed by a 4-byte big-endian length.
///
/// `recv` is cancel-safe: a partly received frame stays buffered for the
/// next call.
pub struct TcpTransport {
    stream: TcpStream,
    config: TcpConfig,
    pending: Vec<u8>,
}

impl TcpTransport {
    /// Wrap a connected stream with default settings.
    pub fn new(stream: TcpStream) -> Self {
        Self::with_config(stream, TcpConfig::default())
    }

    pub fn with_config(stream: TcpStream, config: TcpConfig) -> Self {
        Self {
            stream,
            config,
            pending: Vec::new(),
        }
    }

    /// Connect to `addr` with Nagle disabled.
    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        Ok(Self::new(stream))
    }

    async fn write_frame(&mut self, msg: &Message) -> anyhow::Result<()> {
        let data = bincode::serialize(msg)
            .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
        if data.len() > self.config.max_frame as usize {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                data.len(),
                self.config.max_frame
            ));
        }
        let len = (data.len() as u32).to_be_bytes();
        self.stream.write_all(&len).await.map_err(io_error)?;
        self.stream.write_all(&data).await.map_err(io_error)?;
        Ok(())
    }

    /// Reads until one whole frame is buffered. Only `read` is awaited, so
    /// dropping this future never loses bytes already taken off the socket.
    async fn read_frame(&mut self) -> anyhow::Result<Message> {
        loop {
            if let Some(msg) = self.take_frame()? {
                return Ok(msg);
            }
            let mut chunk = [0u8; 4096];
            let n = self.stream.read(&mut chunk).await.map_err(io_error)?;
            if n == 0 {
                return Err(anyhow::anyhow!("Connection closed by peer"));
            }
            self.pending.extend_from_slice(&chunk[..n]);
        }
    }

    /// Decode the first frame in `pending`, if it is complete.
    fn take_frame(&mut self) -> anyhow::Result<Option<Message>> {
        let Some(len_buf) = self.pending.get(..4) else {
            return Ok(None);
        };
        let len = u32::from_be_bytes([len_buf[0], len_buf[1], len_buf[2], len_buf[3]]);
        if len == 0 {
            return Err(anyhow::anyhow!("Invalid message length: 0"));
        }
        if len > self.config.max_frame {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                len,
                self.config.max_frame
            ));
        }
        let end = 4 + len as usize;
        if self.pending.len() < end {
            return Ok(None);
        }
        let decoded = bincode::deserialize(&self.pending[4..end]);
        self.pending.drain(..end);
        decoded
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
    }
}

fn io_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::BrokenPipe => {
            anyhow::anyhow!("Connection closed by peer")
        }
        ErrorKind::ConnectionReset => anyhow::anyhow!("Connection reset by peer"),
        _ => anyhow::anyhow!("I/O error: {}", e),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let limit = self.config.io_timeout;
        timeout(limit, self.write_frame(&msg))
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", limit))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let limit = self.config.io_timeout;
        timeout(limit, self.read_frame())
            .await
            .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", limit))?
    }
}
