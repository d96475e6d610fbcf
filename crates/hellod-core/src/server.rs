//! Fixed-response HTTP listener
//!
//! Binds a TCP port and answers every HTTP/1.1 request with the same
//! pre-rendered response. Method, path, headers and body are ignored.
//! Failing to acquire the port is fatal; nothing else is.

use crate::{Error, FixedResponse, Result, ServerConfig};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Create a TCP listener socket with transport options applied
fn create_socket(addr: &SocketAddr) -> std::io::Result<std::net::TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR - allow rebinding an address in TIME_WAIT
    socket.set_reuse_address(true)?;

    // TCP_NODELAY - disable Nagle's algorithm for lower latency
    socket.set_nodelay(true)?;

    socket.bind(&(*addr).into())?;
    socket.listen(1024)?;

    // tokio drives the accept loop, so the socket must not block
    socket.set_nonblocking(true)?;

    Ok(socket.into())
}

/// A listener bound to its configured port
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    response: FixedResponse,
}

impl Server {
    /// Bind the configured address
    ///
    /// Returns [`Error::Bind`] when the port cannot be acquired, for example
    /// because another listener holds it or it needs privileges the process
    /// lacks.
    pub async fn bind(config: &ServerConfig) -> Result<Server> {
        let addr = config.socket_addr()?;
        let std_listener =
            create_socket(&addr).map_err(|source| Error::Bind { addr, source })?;
        let listener = TcpListener::from_std(std_listener)?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            listener,
            local_addr,
            response: FixedResponse::new(),
        })
    }

    /// The bound address (port 0 resolves to the ephemeral port assigned)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections until the process terminates
    ///
    /// Every request on every connection receives the fixed response.
    /// Accept and per-connection errors never stop the loop.
    pub async fn serve(self) -> Result<()> {
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    tracing::debug!("accept error: {e}");
                    continue;
                }
            };
            tracing::trace!("accepted connection from {peer}");

            let response = self.response.clone();
            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let service = service_fn(move |_req: hyper::Request<Incoming>| {
                    let response = response.clone();
                    async move { Ok::<_, Infallible>(response.to_hyper()) }
                });

                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    // Only log if not a normal connection close
                    if !e.to_string().contains("connection closed") {
                        tracing::debug!("connection error: {e}");
                    }
                }
            });
        }
    }
}
