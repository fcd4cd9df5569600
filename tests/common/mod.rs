#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use serde_json::{Value, json};

/// One-shot HTTP server answering a single request with a canned response
pub struct MockServer {
    pub url: String,
    handle: JoinHandle<String>,
}
impl MockServer {
    pub fn serve_once(status_line: &str, body: &str) -> MockServer {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request = String::new();
            loop {
                let mut line = String::new();
                let read = reader.read_line(&mut line).unwrap();
                if read == 0 || line == "\r\n" {
                    break;
                }
                request.push_str(&line);
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });

        MockServer {
            url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn ok(body: &Value) -> MockServer {
        MockServer::serve_once("200 OK", &body.to_string())
    }

    /// Request line and headers the server received
    pub fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

/// Base URL nothing is listening on
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn device(hostname: &str, id: i64) -> Value {
    json!({
        "device_id": id,
        "hostname": hostname,
        "sysName": format!("{hostname}.lab"),
        "ip": format!("10.0.0.{id}"),
        "hardware": "C9300-48P",
        "os": "iosxe",
        "sysObjectID": ".1.3.6.1.4.1.9.1.2494",
        "serial": format!("FOC{id:04}"),
        "location": "DC1, row 2",
        "location_id": 3,
        "uptime": 86400 * id,
        "sysDescr": "Cisco IOS Software, Catalyst L3 Switch",
        "status": 1,
        "last_polled_timetaken": 4.5,
        "community": "public",
        "attribs": { "override_sysLocation": 0 }
    })
}

pub fn devices_response(devices: Vec<Value>) -> Value {
    json!({
        "status": "ok",
        "count": devices.len(),
        "devices": devices,
    })
}
