//! A one-shot HTTP server on localhost answering a canned response,
//! used to exercise the real `WebClient` end to end.

use super::Result;
use std::io;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct CapturedRequest {
	/// Request line and headers, as received.
	pub head: String,
	pub body: Vec<u8>,
}

impl CapturedRequest {
	pub fn request_line(&self) -> &str {
		self.head.lines().next().unwrap_or_default()
	}

	pub fn header(&self, name: &str) -> Option<&str> {
		self.head.lines().skip(1).find_map(|line| {
			let (header_name, value) = line.split_once(':')?;
			header_name.trim().eq_ignore_ascii_case(name).then(|| value.trim())
		})
	}
}

pub struct CannedServer {
	pub base_url: String,
	handle: JoinHandle<io::Result<CapturedRequest>>,
}

impl CannedServer {
	/// Serve one connection with `HTTP/1.1 {status_line}` and the given JSON body.
	pub async fn start(status_line: &str, body: &str) -> Result<Self> {
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;

		let response = format!(
			"HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
			body.len()
		);

		let handle = tokio::spawn(async move {
			let (mut socket, _) = listener.accept().await?;
			let captured = read_request(&mut socket).await?;
			socket.write_all(response.as_bytes()).await?;
			socket.shutdown().await?;
			Ok(captured)
		});

		Ok(Self {
			base_url: format!("http://{addr}/"),
			handle,
		})
	}

	pub async fn captured(self) -> Result<CapturedRequest> {
		Ok(self.handle.await??)
	}
}

/// Accepts one connection, reads the request, and never answers.
pub struct SilentServer {
	pub base_url: String,
	handle: JoinHandle<io::Result<()>>,
}

impl SilentServer {
	pub async fn start() -> Result<Self> {
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;

		let handle = tokio::spawn(async move {
			let (mut socket, _) = listener.accept().await?;
			read_request(&mut socket).await?;
			tokio::time::sleep(Duration::from_secs(30)).await;
			Ok(())
		});

		Ok(Self {
			base_url: format!("http://{addr}/"),
			handle,
		})
	}
}

impl Drop for SilentServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

async fn read_request(socket: &mut TcpStream) -> io::Result<CapturedRequest> {
	let mut buf: Vec<u8> = Vec::new();
	let mut chunk = [0u8; 4096];

	let head_end = loop {
		let n = socket.read(&mut chunk).await?;
		if n == 0 {
			return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "closed before end of headers"));
		}
		buf.extend_from_slice(&chunk[..n]);
		if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
			break pos + 4;
		}
	};

	let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
	let content_length = head
		.lines()
		.find_map(|line| {
			let (name, value) = line.split_once(':')?;
			if name.trim().eq_ignore_ascii_case("content-length") {
				value.trim().parse::<usize>().ok()
			} else {
				None
			}
		})
		.unwrap_or(0);

	while buf.len() < head_end + content_length {
		let n = socket.read(&mut chunk).await?;
		if n == 0 {
			break;
		}
		buf.extend_from_slice(&chunk[..n]);
	}

	let body_end = buf.len().min(head_end + content_length);
	let body = buf[head_end..body_end].to_vec();

	Ok(CapturedRequest { head, body })
}
