use bytes::Bytes;
use ferrous_responder_domain::{ServerConfig, Transport, MAX_MESSAGE_SIZE};
use ferrous_responder_infrastructure::dns::DnsServerHandler;
use futures::{SinkExt, StreamExt};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinSet;
use tokio::time::timeout;
use tokio_util::codec::{Framed, LengthDelimitedCodec};
use tracing::{debug, error, info, warn};

const UDP_RECV_BUFFER: usize = 4096;

/// Binds UDP and TCP on the same address and serves until both listeners
/// stop. Every query runs on its own task.
pub async fn start_dns_server(
    config: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let bind_ip: IpAddr = config.bind_address.parse()?;
    let socket_addr = SocketAddr::new(bind_ip, config.dns_port);
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let idle_timeout = Duration::from_secs(config.tcp_idle_timeout_secs);

    info!(bind_address = %socket_addr, "Starting DNS server");

    let handler = Arc::new(handler);
    let udp_socket = Arc::new(create_udp_socket(domain, socket_addr)?);
    let tcp_listener = create_tcp_listener(domain, socket_addr)?;

    let mut join_set: JoinSet<()> = JoinSet::new();
    join_set.spawn(run_udp_listener(udp_socket, handler.clone()));
    join_set.spawn(run_tcp_listener(tcp_listener, handler, idle_timeout));

    info!(bind_address = %socket_addr, "DNS server ready (udp + tcp)");

    while join_set.join_next().await.is_some() {}
    Ok(())
}

async fn run_udp_listener(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; UDP_RECV_BUFFER];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                // ICMP errors from earlier sends surface here on some platforms.
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        let query_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let handler = handler.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            if let Some(response) = handler
                .handle_raw(&query_buf, Transport::Datagram, from.ip())
                .await
            {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(error = %e, client = %from, "UDP send failed");
                }
            }
        });
    }
}

async fn run_tcp_listener(
    listener: TcpListener,
    handler: Arc<DnsServerHandler>,
    idle_timeout: Duration,
) {
    loop {
        match listener.accept().await {
            Ok((stream, from)) => {
                let handler = handler.clone();
                tokio::spawn(async move {
                    if let Err(e) = serve_tcp_connection(stream, from, handler, idle_timeout).await {
                        debug!(error = %e, client = %from, "TCP connection closed with error");
                    }
                });
            }
            Err(e) => {
                error!(error = %e, "TCP accept error");
            }
        }
    }
}

/// Messages on a stream carry a two-byte big-endian length prefix
/// (RFC 1035 §4.2.2). Queries on one connection are answered in order.
async fn serve_tcp_connection(
    stream: TcpStream,
    from: SocketAddr,
    handler: Arc<DnsServerHandler>,
    idle_timeout: Duration,
) -> std::io::Result<()> {
    let codec = LengthDelimitedCodec::builder()
        .length_field_length(2)
        .max_frame_length(usize::from(MAX_MESSAGE_SIZE))
        .new_codec();
    let mut framed = Framed::new(stream, codec);

    loop {
        let frame = match timeout(idle_timeout, framed.next()).await {
            Ok(Some(frame)) => frame?,
            Ok(None) => return Ok(()),
            Err(_) => {
                debug!(client = %from, "TCP connection idle, closing");
                return Ok(());
            }
        };

        let Some(response) = handler
            .handle_raw(&frame, Transport::Stream, from.ip())
            .await
        else {
            // An undecodable message leaves the stream in an unknown state.
            return Ok(());
        };

        if let Err(e) = framed.send(Bytes::from(response)).await {
            if e.kind() == std::io::ErrorKind::InvalidInput {
                error!(client = %from, error = %e, "Reply exceeds stream frame limit");
                return Ok(());
            }
            return Err(e);
        }
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
