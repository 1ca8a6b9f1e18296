use router_lab_abstract::{Packet, SimError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a trace file and parse it into packets.
///
/// An unreadable or missing file is a hard error carrying the path and the
/// underlying io cause; it is never collapsed into an empty trace.
pub fn load_trace(path: &Path) -> Result<Vec<Packet>, SimError> {
    let content = fs::read_to_string(path).map_err(|source| SimError::TraceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let packets = parse_trace(&content);
    debug!("parsed {} packets from {}", packets.len(), path.display());
    Ok(packets)
}

/// Parse whitespace-separated `<arrival-time> <size-bytes>` pairs.
///
/// Tokens are consumed two at a time: one f64, one i64. Parsing stops at the
/// first read that fails (end of data, an odd trailing token, or a malformed
/// value) and the prefix parsed so far is returned as-is. No ordering or
/// positivity checks; the caller guarantees arrival-time order.
pub fn parse_trace(content: &str) -> Vec<Packet> {
    let mut packets = Vec::new();
    let mut tokens = content.split_whitespace();
    while let (Some(time), Some(size)) = (tokens.next(), tokens.next()) {
        let (Ok(arrival), Ok(size_bytes)) = (time.parse::<f64>(), size.parse::<i64>()) else {
            break;
        };
        packets.push(Packet::new(arrival, size_bytes));
    }
    packets
}
