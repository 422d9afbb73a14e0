#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Echo the question and answer it with one A record (93.184.216.34).
    Answer,
    /// Read queries and never reply.
    Silent,
    /// Reply with a zero-length datagram.
    Empty,
}

/// Loopback UDP name server; every query it receives is forwarded to `queries`.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    queries: mpsc::UnboundedReceiver<Vec<u8>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let (query_tx, queries) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let query = buf[..len].to_vec();
                            let _ = query_tx.send(query.clone());

                            match behavior {
                                MockBehavior::Answer => {
                                    let response = Self::build_mock_response(&query);
                                    let _ = socket.send_to(&response, peer).await;
                                }
                                MockBehavior::Empty => {
                                    let _ = socket.send_to(&[], peer).await;
                                }
                                MockBehavior::Silent => {}
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            queries,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub async fn next_query(&mut self) -> Option<Vec<u8>> {
        self.queries.recv().await
    }

    fn build_mock_response(query: &[u8]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        // id
        response.extend_from_slice(&query[0..2]);

        // QR, RD echoed, RA
        response.push(0x80 | (query[2] & 0x01));
        response.push(0x80);

        // qdcount, ancount, nscount, arcount
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        response.extend_from_slice(&[
            0xc0, 0x0c, // name -> question
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3c, // 60s
            0x00, 0x04,
            93, 184, 216, 34,
        ]);

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
