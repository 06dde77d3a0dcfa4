//! Heredoc delimiter selection.
//!
//! A heredoc ends at the first line equal to its delimiter, so the delimiter
//! must not appear as a line of the body. The base token is used when it is
//! free; otherwise a suffix derived from the body's SHA-256 is appended and
//! lengthened until no line collides. The result is deterministic per body.

use sha2::{Digest, Sha256};

pub const BASE_DELIMITER: &str = "BASELINE_EOF";

/// Pick a delimiter that does not occur as a line of `body`.
pub fn delimiter_for(body: &str) -> String {
    if !collides(body, BASE_DELIMITER) {
        return BASE_DELIMITER.to_string();
    }

    let digest = hex_digest(body);
    for len in [8, 16, 32, 64] {
        let candidate = format!("{BASE_DELIMITER}_{}", &digest[..len]);
        if !collides(body, &candidate) {
            return candidate;
        }
    }

    // Only reachable when the body lists every hashed candidate on its own line.
    let mut counter = 0usize;
    loop {
        let candidate = format!("{BASE_DELIMITER}_{digest}_{counter}");
        if !collides(body, &candidate) {
            return candidate;
        }
        counter += 1;
    }
}

fn collides(body: &str, delimiter: &str) -> bool {
    body.lines().any(|line| line == delimiter)
}

/// Lowercase hex SHA-256 of `body`.
pub(crate) fn hex_digest(body: &str) -> String {
    Sha256::digest(body.as_bytes()).iter().map(|b| format!("{b:02x}")).collect()
}
