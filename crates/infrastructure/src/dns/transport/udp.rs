//! UDP query engine (RFC 1035 §4.2.1)
//!
//! One datagram out, one datagram back. No EDNS(0), no TCP fallback when the
//! reply comes back truncated.

use async_trait::async_trait;
use ferrous_dig_application::ports::QueryEngine;
use ferrous_dig_domain::config::QueryConfig;
use ferrous_dig_domain::wire::encode_query;
use ferrous_dig_domain::{DomainError, Header, Question};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

pub struct UdpQueryEngine {
    timeout: Duration,
    receive_buffer_size: usize,
}

impl UdpQueryEngine {
    pub fn new(timeout: Duration, receive_buffer_size: usize) -> Self {
        Self {
            timeout,
            receive_buffer_size,
        }
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self::new(config.timeout(), config.receive_buffer_size)
    }

    fn server_socket_addr(server_address: &str, port: u16) -> Result<SocketAddr, DomainError> {
        if let Ok(v4) = server_address.parse::<Ipv4Addr>() {
            return Ok(SocketAddr::new(IpAddr::V4(v4), port));
        }
        if let Ok(v6) = server_address.parse::<Ipv6Addr>() {
            return Ok(SocketAddr::new(IpAddr::V6(v6), port));
        }
        Err(DomainError::InvalidServerAddress(server_address.to_string()))
    }
}

#[async_trait]
impl QueryEngine for UdpQueryEngine {
    async fn execute(
        &self,
        server_address: &str,
        port: u16,
        header: &Header,
        question: &Question,
    ) -> Result<Vec<u8>, DomainError> {
        let query = encode_query(header, question)?;
        let server_addr = Self::server_socket_addr(server_address, port)?;

        let socket_error = |reason: String| DomainError::SocketError {
            server: server_addr.to_string(),
            reason,
        };

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| socket_error(format!("failed to bind UDP socket: {}", e)))?;

        // connected socket: datagrams from other peers are filtered by the kernel
        socket
            .connect(server_addr)
            .await
            .map_err(|e| socket_error(format!("failed to connect: {}", e)))?;

        let bytes_sent = socket
            .send(&query)
            .await
            .map_err(|e| socket_error(format!("failed to send query: {}", e)))?;

        debug!(
            server = %server_addr,
            id = header.id,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; self.receive_buffer_size];

        let bytes_received = match tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf)).await
        {
            Ok(Ok(n)) if n > 0 => n,
            Ok(Ok(_)) => {
                debug!(server = %server_addr, "Empty UDP datagram received");
                return Err(DomainError::TimeoutOrNoData {
                    server: server_addr.to_string(),
                });
            }
            Ok(Err(e)) => return Err(socket_error(format!("failed to receive reply: {}", e))),
            Err(_) => {
                debug!(
                    server = %server_addr,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "UDP query timed out"
                );
                return Err(DomainError::TimeoutOrNoData {
                    server: server_addr.to_string(),
                });
            }
        };

        recv_buf.truncate(bytes_received);

        debug!(
            server = %server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }
}
