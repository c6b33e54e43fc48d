//! Test utilities and mocks for Sockcat
//!
//! This module provides common test utilities used across integration tests.

#![allow(dead_code)]

use std::io;
use std::net::SocketAddr;
use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// SOCKS5 protocol version
pub const SOCKS5_VERSION: u8 = 0x05;
/// No authentication required
pub const SOCKS5_AUTH_METHOD_NONE: u8 = 0x00;
/// No acceptable methods
pub const SOCKS5_AUTH_METHOD_NOT_ACCEPTABLE: u8 = 0xFF;
/// TCP CONNECT command
pub const SOCKS5_CMD_TCP_CONNECT: u8 = 0x01;
/// IPv4 address
pub const SOCKS5_ADDR_TYPE_IPV4: u8 = 0x01;
/// Domain name
pub const SOCKS5_ADDR_TYPE_DOMAIN: u8 = 0x03;
/// IPv6 address
pub const SOCKS5_ADDR_TYPE_IPV6: u8 = 0x04;
/// Connection refused
pub const SOCKS5_REPLY_CONNECTION_REFUSED: u8 = 0x05;

/// Banner the mock proxy sends once the tunnel is up
pub const PROXY_BANNER: &[u8] = b"hello via proxy\n";

/// Create a pair of connected duplex streams standing in for the console
pub fn create_console_pair() -> (DuplexStream, DuplexStream) {
    duplex(8192)
}

/// Create a console line queue the test can feed directly
pub fn create_line_queue() -> (mpsc::Sender<Vec<u8>>, mpsc::Receiver<Vec<u8>>) {
    mpsc::channel(sockcat::helper::LINE_QUEUE_DEPTH)
}

/// Create a test TCP listener on an available port
pub async fn create_test_listener() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

/// An address on which nothing is listening
pub async fn unused_addr() -> SocketAddr {
    let (listener, addr) = create_test_listener().await;
    drop(listener);
    addr
}

/// How the mock proxy answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyBehavior {
    /// Accept "no auth", grant CONNECT, send a banner, then echo
    Grant,
    /// Refuse every offered authentication method
    RejectMethods,
    /// Accept "no auth" but answer CONNECT with "connection refused"
    RefuseConnect,
}

/// What the mock proxy saw from the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyRecord {
    /// Methods offered in the greeting
    pub methods: Vec<u8>,
    /// Command byte of the request, if one was sent
    pub command: Option<u8>,
    /// Address type of the request
    pub addr_type: Option<u8>,
    /// Raw address bytes (without the length prefix for domains)
    pub addr: Vec<u8>,
    /// Requested port
    pub port: u16,
}

/// Spawn a single-shot SOCKS5 proxy on loopback
pub async fn spawn_mock_proxy(
    behavior: ProxyBehavior,
) -> (SocketAddr, JoinHandle<io::Result<ProxyRecord>>) {
    let (listener, addr) = create_test_listener().await;
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;
        serve_socks5(&mut socket, behavior).await
    });
    (addr, handle)
}

async fn serve_socks5(socket: &mut TcpStream, behavior: ProxyBehavior) -> io::Result<ProxyRecord> {
    let mut record = ProxyRecord::default();

    let mut head = [0u8; 2];
    socket.read_exact(&mut head).await?;
    assert_eq!(head[0], SOCKS5_VERSION);
    record.methods = vec![0u8; head[1] as usize];
    socket.read_exact(&mut record.methods).await?;

    if behavior == ProxyBehavior::RejectMethods {
        socket
            .write_all(&[SOCKS5_VERSION, SOCKS5_AUTH_METHOD_NOT_ACCEPTABLE])
            .await?;
        return Ok(record);
    }
    socket
        .write_all(&[SOCKS5_VERSION, SOCKS5_AUTH_METHOD_NONE])
        .await?;

    let mut request = [0u8; 4];
    socket.read_exact(&mut request).await?;
    record.command = Some(request[1]);
    record.addr_type = Some(request[3]);
    record.addr = match request[3] {
        SOCKS5_ADDR_TYPE_IPV4 => read_vec(socket, 4).await?,
        SOCKS5_ADDR_TYPE_IPV6 => read_vec(socket, 16).await?,
        SOCKS5_ADDR_TYPE_DOMAIN => {
            let len = socket.read_u8().await? as usize;
            read_vec(socket, len).await?
        }
        other => panic!("unexpected address type {}", other),
    };
    record.port = socket.read_u16().await?;

    let status = match behavior {
        ProxyBehavior::RefuseConnect => SOCKS5_REPLY_CONNECTION_REFUSED,
        _ => 0x00,
    };
    socket
        .write_all(&[
            SOCKS5_VERSION,
            status,
            0x00,
            SOCKS5_ADDR_TYPE_IPV4,
            127,
            0,
            0,
            1,
            0,
            0,
        ])
        .await?;
    if status != 0x00 {
        return Ok(record);
    }

    // Echo until the client goes away; a reset counts as going away.
    if socket.write_all(PROXY_BANNER).await.is_err() {
        return Ok(record);
    }
    let mut buf = [0u8; 1024];
    loop {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                if socket.write_all(&buf[..n]).await.is_err() {
                    break;
                }
            }
        }
    }

    Ok(record)
}

async fn read_vec(socket: &mut TcpStream, len: usize) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    socket.read_exact(&mut buf).await?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_console_pair() {
        let (mut a, mut b) = create_console_pair();

        a.write_all(b"hello").await.unwrap();
        let mut buf = [0u8; 5];
        b.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"hello");
    }

    #[tokio::test]
    async fn test_create_test_listener() {
        let (listener, addr) = create_test_listener().await;
        assert!(addr.port() > 0);
        drop(listener);
    }
}
