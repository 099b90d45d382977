//! The `explain` command: describe a syntax error code.

use ctl_diagnostic::ErrorCode;

use super::CommandResult;

/// Describe the error code given as a number, code string or name.
pub fn explain_error(code_str: &str) -> CommandResult {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(format!(
            "Unknown error code: {code_str}\n\n\
             Codes are C0001 to C0009, their numbers 1 to 9, or their names \
             (e.g. expect-function-name)."
        ));
    };
    let mut out = format!("{code} ({}): {}\n", code.name(), code.description());
    if code.is_unsupported_factory() {
        out.push_str("Run `ctl factories` to list the registered names.\n");
    }
    Ok(out)
}
