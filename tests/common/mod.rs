//! Shared test utilities: a fake puzzle API on an ephemeral port

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::json;
use tiny_http::{Header, Response, Server};

/// Challenge id that makes the fake API answer with HTTP 500
pub const BROKEN_ID: u32 = 500;

#[derive(Debug, Clone)]
pub struct FakePuzzle {
    pub title: &'static str,
    pub points: u32,
    pub clue: &'static str,
    pub answer: &'static str,
}

/// A request the fake API received
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub body: String,
}

pub struct FakePuzzleApi {
    server: Arc<Server>,
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Drop for FakePuzzleApi {
    fn drop(&mut self) {
        self.server.unblock();
    }
}

fn json_content_type() -> Header {
    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).expect("static header")
}

/// Puzzles matching the builtin catalog ids 1 and 3
pub fn default_puzzles() -> HashMap<u32, FakePuzzle> {
    HashMap::from([
        (
            1,
            FakePuzzle {
                title: "Neural SQL Injection",
                points: 100,
                clue: "Try bypassing authentication with SQL injection.",
                answer: "admin' OR '1'='1' --",
            },
        ),
        (
            3,
            FakePuzzle {
                title: "Binary Neural Override",
                points: 300,
                clue: "The buffer is 64 bytes long.",
                answer: "0xdeadbeef",
            },
        ),
    ])
}

/// Start the fake API; it serves until dropped
pub fn start_fake_api(puzzles: HashMap<u32, FakePuzzle>) -> FakePuzzleApi {
    let server = Arc::new(Server::http("127.0.0.1:0").expect("bind fake api"));
    let addr = server
        .server_addr()
        .to_ip()
        .expect("fake api listens on ip");
    let requests = Arc::new(Mutex::new(Vec::new()));

    let worker = Arc::clone(&server);
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for mut request in worker.incoming_requests() {
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);
            let method = request.method().to_string();
            let url = request.url().to_string();
            log.lock().unwrap().push(Recorded {
                method: method.clone(),
                url: url.clone(),
                body: body.clone(),
            });

            let (status, payload) = route(&puzzles, &method, &url, &body);
            let response = Response::from_string(payload)
                .with_status_code(status)
                .with_header(json_content_type());
            let _ = request.respond(response);
        }
    });

    FakePuzzleApi {
        server,
        base_url: format!("http://{}/api/puzzle", addr),
        requests,
    }
}

fn route(puzzles: &HashMap<u32, FakePuzzle>, method: &str, url: &str, body: &str) -> (u16, String) {
    let not_found = (404, json!({ "error": "not_found" }).to_string());

    if let Some(id) = url
        .strip_prefix("/api/puzzle/challenge/")
        .and_then(|s| s.parse::<u32>().ok())
    {
        if method != "GET" {
            return (405, String::new());
        }
        if id == BROKEN_ID {
            return (500, "Internal Server Error".to_string());
        }
        return match puzzles.get(&id) {
            Some(p) => (
                200,
                json!({
                    "title": p.title,
                    "description": "served by the fake api",
                    "difficulty": "Easy",
                    "points": p.points,
                    "clue": p.clue,
                    "iconKey": "code",
                })
                .to_string(),
            ),
            None => not_found,
        };
    }

    if let Some(id) = url
        .strip_prefix("/api/puzzle/level")
        .and_then(|s| s.parse::<u32>().ok())
    {
        if method != "POST" {
            return (405, String::new());
        }
        if id == BROKEN_ID {
            return (500, json!({ "message": "database offline" }).to_string());
        }
        let Some(puzzle) = puzzles.get(&id) else {
            return not_found;
        };
        let answer = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("answer").and_then(|a| a.as_str()).map(str::to_string))
            .unwrap_or_default();
        let success = answer == puzzle.answer;
        let message = if success { "Access granted" } else { "Access denied" };
        return (200, json!({ "success": success, "message": message }).to_string());
    }

    not_found
}
