// src/core/net.rs
//
// HTTP GET with bounded retry. The roster site is HTTPS-only, so this rides
// on reqwest's blocking client rather than a raw socket.

use std::{error::Error, thread, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, RETRY_LIMIT, RETRY_PAUSE_MS, USER_AGENT};

enum FetchError {
    Retryable(String),
    Fatal(String),
}

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let mut last = s!();
    for attempt in 1..=RETRY_LIMIT {
        if attempt > 1 {
            let pause = RETRY_PAUSE_MS * (attempt as u64 - 1);
            logd!("GET {url}: retry {attempt}/{RETRY_LIMIT} after {pause} ms");
            thread::sleep(Duration::from_millis(pause));
        }
        match fetch_once(&client, url) {
            Ok(body) => return Ok(body),
            Err(FetchError::Retryable(msg)) => last = msg,
            Err(FetchError::Fatal(msg)) => return Err(msg.into()),
        }
    }
    Err(last.into())
}

fn fetch_once(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client
        .get(url)
        .send()
        .map_err(|e| FetchError::Retryable(format!("GET {url}: {e}")))?;

    let status = resp.status();
    if status.is_success() {
        return resp
            .text()
            .map_err(|e| FetchError::Retryable(format!("GET {url}: {e}")));
    }

    let msg = format!("HTTP error: {status} {url}");
    if status.is_server_error() {
        Err(FetchError::Retryable(msg))
    } else {
        // 4xx won't get better by asking again
        Err(FetchError::Fatal(msg))
    }
}
