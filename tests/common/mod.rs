#![allow(dead_code)]

pub mod test_server {
    use std::sync::Once;

    /// Ensures May coroutines are configured only once
    static MAY_INIT: Once = Once::new();

    pub fn setup_may_runtime() {
        MAY_INIT.call_once(|| {
            may::config().set_stack_size(0x10000);
        });
    }
}

pub mod site {
    use deskfolio::bootstrap::build_service;
    use deskfolio::config::{ImagesConfig, SiteConfig};
    use deskfolio::server::{AppService, HttpServer, ServerHandle};
    use std::fs;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub fn templates_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
    }

    /// A running site over scratch posts and images directories.
    ///
    /// Stops the server on drop, even if the test panics.
    pub struct SiteFixture {
        pub service: AppService,
        pub posts: TempDir,
        pub images: TempDir,
        handle: Option<ServerHandle>,
        addr: SocketAddr,
    }

    impl SiteFixture {
        pub fn start(posts: &[(&str, &str)]) -> Self {
            super::test_server::setup_may_runtime();

            let posts_dir = tempfile::tempdir().unwrap();
            for (name, body) in posts {
                fs::write(posts_dir.path().join(name), body).unwrap();
            }
            let images_dir = tempfile::tempdir().unwrap();
            fs::write(images_dir.path().join("logo.svg"), "<svg/>").unwrap();

            let config = SiteConfig {
                addr: "127.0.0.1:0".to_string(),
                posts_dir: posts_dir.path().to_path_buf(),
                templates_dir: templates_dir(),
                images: ImagesConfig {
                    prefix: "/images/".to_string(),
                    dir: Some(images_dir.path().to_path_buf()),
                },
                ..SiteConfig::default()
            };
            let service = build_service(&config).unwrap();
            let handle = HttpServer(service.clone()).start(config.addr.as_str()).unwrap();
            handle.wait_ready().unwrap();
            let addr = handle.addr();

            Self {
                service,
                posts: posts_dir,
                images: images_dir,
                handle: Some(handle),
                addr,
            }
        }

        pub fn addr(&self) -> SocketAddr {
            self.addr
        }
    }

    impl Drop for SiteFixture {
        fn drop(&mut self) {
            if let Some(handle) = self.handle.take() {
                handle.stop();
            }
        }
    }
}

pub mod http {
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpStream};
    use std::time::Duration;

    /// A parsed HTTP/1.1 response.
    #[derive(Debug)]
    pub struct RawResponse {
        pub status: u16,
        pub headers: Vec<(String, String)>,
        pub body: String,
    }

    impl RawResponse {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|l| l.split_once(':'))
            .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Send a raw request and read exactly one response.
    pub fn send_request(addr: &SocketAddr, req: &str) -> RawResponse {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(req.as_bytes()).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();

        let mut buf = Vec::new();
        loop {
            let text = String::from_utf8_lossy(&buf);
            if let Some(idx) = text.find("\r\n\r\n") {
                let want = idx + 4 + content_length(&text[..idx]);
                if buf.len() >= want {
                    break;
                }
            }
            let mut tmp = [0u8; 4096];
            match stream.read(&mut tmp) {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&tmp[..n]),
                Err(ref e)
                    if e.kind() == std::io::ErrorKind::WouldBlock
                        || e.kind() == std::io::ErrorKind::TimedOut =>
                {
                    break
                }
                Err(e) => panic!("read error: {:?}", e),
            }
        }
        parse_response(&String::from_utf8_lossy(&buf))
    }

    pub fn parse_response(resp: &str) -> RawResponse {
        let (head, body) = resp.split_once("\r\n\r\n").unwrap_or((resp, ""));
        let mut lines = head.lines();
        let status = lines
            .next()
            .and_then(|l| l.split_whitespace().nth(1))
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        let headers = lines
            .filter_map(|l| l.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        RawResponse {
            status,
            headers,
            body: body.to_string(),
        }
    }

    pub fn get(addr: &SocketAddr, path: &str) -> RawResponse {
        send_request(addr, &format!("GET {path} HTTP/1.1\r\nHost: localhost\r\n\r\n"))
    }

    pub fn post(addr: &SocketAddr, path: &str, extra_headers: &str) -> RawResponse {
        send_request(
            addr,
            &format!("POST {path} HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\n{extra_headers}\r\n"),
        )
    }

    pub fn delete(addr: &SocketAddr, path: &str) -> RawResponse {
        send_request(addr, &format!("DELETE {path} HTTP/1.1\r\nHost: localhost\r\n\r\n"))
    }
}
