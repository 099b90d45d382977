//! Error reporting for controller expressions.
//!
//! - [`ErrorCode`]: the closed set of syntax error kinds
//! - [`Diagnostic`]: a code plus a byte position, rendered with a caret
//!   under the offending position

mod diagnostic;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
