//! CAN bridge HTTP 客户端
//!
//! 通过 bridge 服务访问 CAN 接口：
//! - `POST {base}/api/can`：发送一条 JSON 编码的 [`RawMessage`]
//! - `GET {base}/api/status/all`：查询所有接口状态
//!
//! 连接建立/断开不在此处处理，每次请求都是独立的。

use crate::{CanError, Communicator, RawMessage};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, trace};

/// 发送接口路径
pub const SEND_PATH: &str = "/api/can";

/// 状态查询接口路径
pub const STATUS_PATH: &str = "/api/status/all";

/// 建立 TCP 连接的超时
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// 状态查询的超时（发送超时由调用方给定）
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct StatusResponse {
    interfaces: HashMap<String, bool>,
}

/// CAN bridge 客户端
///
/// 内部持有阻塞式 `reqwest` 客户端（连接池可跨线程复用）。
/// 不要在异步运行时的工作线程中直接调用。
#[derive(Debug, Clone)]
pub struct CanBridgeClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl CanBridgeClient {
    /// 创建客户端
    ///
    /// # 参数
    /// - `service_url`: bridge 服务地址（如 "http://127.0.0.1:5260"），末尾的 `/` 会被去掉
    ///
    /// # 错误
    /// - `CanError::InvalidUrl`: 地址为空或无法解析
    /// - `CanError::Http`: HTTP 客户端初始化失败
    pub fn new(service_url: impl AsRef<str>) -> Result<Self, CanError> {
        let base_url = service_url.as_ref().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CanError::InvalidUrl("empty service URL".to_string()));
        }
        reqwest::Url::parse(&base_url)
            .map_err(|e| CanError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        // bridge 部署在本机或局域网内，不走系统代理
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .no_proxy()
            .build()?;

        debug!("CAN bridge client created for {}", base_url);
        Ok(Self { base_url, http })
    }

    /// bridge 服务基础地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// reqwest 超时统一映射为 `CanError::Timeout`
fn map_http_error(err: reqwest::Error) -> CanError {
    if err.is_timeout() {
        CanError::Timeout
    } else {
        CanError::Http(err)
    }
}

fn check_status(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, CanError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(CanError::Bridge {
        status: status.as_u16(),
        body,
    })
}

impl Communicator for CanBridgeClient {
    fn send(&self, message: &RawMessage, timeout: Duration) -> Result<(), CanError> {
        trace!(
            "POST {} iface={} id=0x{:X} len={}",
            SEND_PATH,
            message.interface,
            message.id,
            message.data.len()
        );
        let response = self
            .http
            .post(self.endpoint(SEND_PATH))
            .timeout(timeout)
            .json(message)
            .send()
            .map_err(map_http_error)?;
        check_status(response)?;
        Ok(())
    }

    fn interface_statuses(&self) -> Result<HashMap<String, bool>, CanError> {
        let response = self
            .http
            .get(self.endpoint(STATUS_PATH))
            .timeout(STATUS_TIMEOUT)
            .send()
            .map_err(map_http_error)?;
        let parsed: StatusResponse = check_status(response)?
            .json()
            .map_err(|e| CanError::Decode(e.to_string()))?;
        Ok(parsed.interfaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// 单次请求的最小 HTTP 服务：读完请求后回复固定响应，并把请求行和正文回传给测试
    fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, mpsc::Receiver<(String, String)>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                let lower = line.to_ascii_lowercase();
                if let Some(value) = lower.strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
            }

            let mut request_body = vec![0u8; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let mut stream = stream;
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            let _ = tx.send((
                request_line.trim().to_string(),
                String::from_utf8(request_body).unwrap(),
            ));
        });

        (format!("http://{}", addr), rx)
    }

    fn sample_message() -> RawMessage {
        RawMessage {
            interface: "can0".to_string(),
            id: 0x27,
            data: vec![0x01, 64, 64, 64, 64, 64, 64],
        }
    }

    #[test]
    fn test_new_rejects_empty_url() {
        let err = CanBridgeClient::new("   ").unwrap_err();
        assert!(matches!(err, CanError::InvalidUrl(_)));
    }

    #[test]
    fn test_new_rejects_unparseable_url() {
        let err = CanBridgeClient::new("not a url").unwrap_err();
        assert!(matches!(err, CanError::InvalidUrl(_)));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = CanBridgeClient::new("http://127.0.0.1:5260/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5260");
        assert_eq!(client.endpoint(SEND_PATH), "http://127.0.0.1:5260/api/can");
    }

    #[test]
    fn test_send_posts_json_message() {
        let (url, rx) = serve_once("200 OK", "{}");
        let client = CanBridgeClient::new(&url).unwrap();

        client
            .send(&sample_message(), Duration::from_secs(3))
            .unwrap();

        let (request_line, body) = rx.recv_timeout(Duration::from_secs(3)).unwrap();
        assert!(request_line.starts_with("POST /api/can"), "{}", request_line);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["interface"], "can0");
        assert_eq!(json["id"], 0x27);
        assert_eq!(json["data"][0], 1);
    }

    #[test]
    fn test_send_non_success_status_is_bridge_error() {
        let (url, _rx) = serve_once("503 Service Unavailable", "can0 down");
        let client = CanBridgeClient::new(&url).unwrap();

        let err = client
            .send(&sample_message(), Duration::from_secs(3))
            .unwrap_err();
        match err {
            CanError::Bridge { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "can0 down");
            },
            other => panic!("Expected Bridge error, got {:?}", other),
        }
    }

    #[test]
    fn test_send_times_out_on_silent_bridge() {
        // 只接受连接，不回复
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_millis(500));
            drop(stream);
        });

        let client = CanBridgeClient::new(&url).unwrap();
        let err = client
            .send(&sample_message(), Duration::from_millis(100))
            .unwrap_err();
        assert!(err.is_timeout(), "Expected timeout, got {:?}", err);

        handle.join().unwrap();
    }

    #[test]
    fn test_interface_statuses() {
        let (url, rx) = serve_once("200 OK", r#"{"interfaces":{"can0":true,"can1":false}}"#);
        let client = CanBridgeClient::new(&url).unwrap();

        let statuses = client.interface_statuses().unwrap();
        assert_eq!(statuses.get("can0"), Some(&true));
        assert_eq!(statuses.get("can1"), Some(&false));

        let (request_line, _) = rx.recv_timeout(Duration::from_secs(3)).unwrap();
        assert!(request_line.starts_with("GET /api/status/all"), "{}", request_line);
    }

    #[test]
    fn test_interface_statuses_bad_body() {
        let (url, _rx) = serve_once("200 OK", r#"{"unexpected":1}"#);
        let client = CanBridgeClient::new(&url).unwrap();

        let err = client.interface_statuses().unwrap_err();
        assert!(matches!(err, CanError::Decode(_)), "{:?}", err);
    }
}
