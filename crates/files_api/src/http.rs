//! Minimal blocking HTTP front for the file endpoints.
//!
//! The server speaks just enough HTTP/1.1 for two GET endpoints and static-asset reads: one
//! request per connection, `Connection: close`, no keep-alive, no TLS. Request heads are
//! bounded to keep a misbehaving client from holding a worker in the read loop.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::handle_request;
use crate::service::ServedRoot;

const MAX_REQUEST_HEAD_BYTES: usize = 16 * 1024;
const READ_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
/// Listener configuration for [`serve`].
pub struct HttpServerConfig {
    /// Bind address, for example `127.0.0.1:3001`.
    pub bind_addr: String,
    /// Directory the `files/` request prefix resolves in.
    pub public_dir: std::path::PathBuf,
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        _ => "Internal Server Error",
    }
}

fn read_request_head(stream: &mut TcpStream) -> std::io::Result<String> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
        if head.len() > MAX_REQUEST_HEAD_BYTES {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "request head too large",
            ));
        }
    }
    Ok(String::from_utf8_lossy(&head).into_owned())
}

fn parse_request_line(head: &str) -> Option<(String, String)> {
    let line = head.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();
    Some((method, target))
}

fn handle_connection(root: &ServedRoot, mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(READ_TIMEOUT));

    let head = match read_request_head(&mut stream) {
        Ok(head) => head,
        Err(err) => {
            debug!("dropping connection: {err}");
            return;
        }
    };
    let Some((method, target)) = parse_request_line(&head) else {
        debug!("dropping connection: malformed request line");
        return;
    };

    let response = handle_request(root, &method, &target);
    debug!(%method, %target, status = response.status, "handled request");

    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        status_text(response.status),
        response.content_type,
        response.body.len(),
    );
    if let Err(err) = stream
        .write_all(header.as_bytes())
        .and_then(|_| stream.write_all(&response.body))
    {
        debug!("response write failed: {err}");
    }
}

/// Binds the listener and serves requests until the process exits.
///
/// Each connection is handled on its own thread; handler state is the shared read-only
/// [`ServedRoot`], so there is nothing to coordinate between requests.
pub fn serve(config: HttpServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.bind_addr)?;
    let root = Arc::new(ServedRoot::new(config.public_dir));
    info!(bind = %config.bind_addr, root = %root.public_dir().display(), "files api listening");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let root = Arc::clone(&root);
                thread::spawn(move || handle_connection(&root, stream));
            }
            Err(err) => warn!("accept failed: {err}"),
        }
    }
    Ok(())
}
