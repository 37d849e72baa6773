//! Server-sent events wire framing.
//!
//! Every frame is a block of `field: value` lines terminated by one blank line.

use bytes::{BufMut, Bytes, BytesMut};

/// Comment frame written on idle connections so proxies keep them open
pub const KEEP_ALIVE_FRAME: &[u8] = b":\n\n";

/// Content type of the event stream response
pub const EVENT_STREAM_CONTENT_TYPE: &str = "text/event-stream";

/// Encode one event.
///
/// Multi-line data is split into one `data:` line per line (`\n`, `\r\n` and
/// `\r` all count as breaks), which the client joins back with `\n`.
pub fn encode_event(event_type: Option<&str>, data: &str) -> Bytes {
    let mut buf = BytesMut::with_capacity(data.len() + 16);

    if let Some(event_type) = event_type {
        put_field(&mut buf, "event", event_type);
    }

    for line in data_lines(data) {
        put_field(&mut buf, "data", line);
    }

    buf.put_u8(b'\n');
    buf.freeze()
}

/// Encode a `retry:` frame telling the client how long to wait before reconnecting
pub fn encode_retry(retry_ms: u64) -> Bytes {
    Bytes::from(format!("retry: {retry_ms}\n\n"))
}

fn put_field(buf: &mut BytesMut, name: &str, value: &str) {
    buf.put_slice(name.as_bytes());
    buf.put_slice(b": ");
    buf.put_slice(value.as_bytes());
    buf.put_u8(b'\n');
}

fn data_lines(data: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(data);

    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(idx) => {
                let skip = if current[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[idx + skip..]);
                Some(&current[..idx])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
