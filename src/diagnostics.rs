//! User-facing diagnostics.
//!
//! Warnings go through the `log` facade so `RUST_LOG` controls them; error
//! messages are formatted here and returned to the caller, which decides
//! whether to `bail!` with them.

use std::fmt::Display;

/// Emit a non-fatal warning.
pub fn warn(msg: impl Display) {
    log::warn!("{}", msg);
}

/// Format an error message consistently and record it at debug level.
pub fn error_message(msg: impl Display) -> String {
    let text = format!("error: {}", msg);
    log::debug!("{}", text);
    text
}
