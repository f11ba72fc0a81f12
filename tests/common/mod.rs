//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// A small news story with metadata in the head.
pub const STORY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Quiet Harbour Reopens</title>
    <meta name="author" content="Jane Roe">
    <meta name="description" content="A small town harbour reopens after a winter of repairs.">
    <meta property="og:site_name" content="Example Gazette">
</head>
<body>
    <nav><a href="/">Home</a> <a href="/world">World</a> <a href="/sport">Sport</a></nav>
    <article>
        <h1>Quiet Harbour Reopens</h1>
        <p>After a long winter of repairs, the harbour in the small coastal town reopened on Monday morning, and fishing boats, ferries, and a handful of yachts returned to the water within hours.</p>
        <p>Local officials said the work, which replaced the old stone breakwater and rebuilt two of the wooden piers, finished ahead of schedule and slightly under budget, a rare outcome for projects of this size.</p>
        <p>Residents gathered along the quay to watch the first <a href="/boats">boats</a> come in, and several shops that had closed for the season opened their doors early, hoping to catch the crowd.</p>
        <p>The harbour master said traffic should return to normal levels within a week, although the new mooring rules, which limit overnight stays for visiting boats, will take some getting used to.</p>
    </article>
    <footer><p>Copyright Example Gazette</p></footer>
</body>
</html>"#;

/// The minimal article from the CLI contract, with no `<title>` element.
pub const H1_ONLY_HTML: &str = "<html><body><article><h1>Title</h1>\
<p>Some sufficiently long paragraph of article text, repeated so that the readability pass \
treats it as the main content of the page, with commas, clauses, and ordinary words. \
Some sufficiently long paragraph of article text, repeated so that the readability pass \
treats it as the main content of the page, with commas, clauses, and ordinary words.</p>\
</article></body></html>";

/// A document with no identifiable main content.
pub const BARE_HTML: &str = "<html><body></body></html>";

/// Serve one HTTP response on a loopback port and return its URL.
///
/// The listener thread accepts a single connection, drains the request
/// headers, writes the response and closes.
pub fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    format!("http://{addr}/news/harbour")
}

/// A loopback URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/")
}
