//! Console logging
//!
//! On wasm32 every line goes to the browser console through `web_sys::console`.
//! Native builds (unit tests, integration tests) print to stderr instead, since
//! calling an imported JS function outside wasm aborts the process.
//!
//! Usage:
//! ```rust
//! use tumble_engine::{console_log, console_warn};
//!
//! let count = 3;
//! console_log!("discovered {} elements", count);
//! console_warn!("container is a <{}>", "canvas");
//! ```

const PREFIX: &str = "[tumble]";

pub fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&format!("{} {}", PREFIX, msg).into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("{} {}", PREFIX, msg);
    }
}

pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&format!("{} {}", PREFIX, msg).into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("{} warning: {}", PREFIX, msg);
    }
}

pub fn error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::error_1(&format!("{} {}", PREFIX, msg).into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("{} error: {}", PREFIX, msg);
    }
}

/// `console.log` with `format!` arguments
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::log::log(&format!($($arg)*))
    };
}

/// `console.warn` with `format!` arguments
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::log::warn(&format!($($arg)*))
    };
}

/// `console.error` with `format!` arguments
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::core::log::error(&format!($($arg)*))
    };
}
