// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Single-line diagnostics.
//!
//! Every failure is reported as exactly one line on standard error:
//!
//! ```text
//! error[sol25::syntax]: expected expression, found ']' at 1:34
//! ```
//!
//! The code comes from the [`miette::Diagnostic`] code and the location from
//! its first label, resolved against the source when one is available.

use miette::Diagnostic;
use sol25_core::source_analysis::Span;

/// Renders `diagnostic` as `error[<code>]: <message>[ at <line>:<column>]`.
pub fn render(diagnostic: &dyn Diagnostic, source: Option<&str>) -> String {
    let code = diagnostic
        .code()
        .map_or_else(|| "sol25".to_string(), |code| code.to_string());
    let mut line = format!("error[{code}]: {diagnostic}");

    let offset = diagnostic
        .labels()
        .and_then(|mut labels| labels.next())
        .map(|label| label.offset());
    if let (Some(source), Some(offset)) = (source, offset) {
        let offset = u32::try_from(offset).unwrap_or(u32::MAX);
        let (row, column) = Span::new(offset, offset).line_column(source);
        line.push_str(&format!(" at {row}:{column}"));
    }

    // Messages may quote source text containing line breaks.
    line.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn syntax_error_with_location() {
        let source = "class Main : Object {\n  run [ x := ]\n}";
        let error = CliError::from(sol25_core::compile(source).unwrap_err());
        assert_eq!(
            render(&error, Some(source)),
            "error[sol25::syntax]: expected expression, found ']' at 2:14"
        );
    }

    #[test]
    fn semantic_error_with_location() {
        let source = "class Main : Object { run [ x := y. ] }";
        let error = CliError::from(sol25_core::compile(source).unwrap_err());
        assert_eq!(
            render(&error, Some(source)),
            "error[sol25::semantic::undefined_variable]: undefined variable 'y' at 1:34"
        );
    }

    #[test]
    fn usage_error_without_location() {
        let error = CliError::Usage("unexpected argument found".into());
        assert_eq!(
            render(&error, None),
            "error[sol25::usage]: unexpected argument found; run 'sol25 --help' for usage"
        );
    }

    #[test]
    fn multi_line_messages_stay_on_one_line() {
        let source = "class Main : Object { run [ x := 1 'a\nb' ] }";
        let error = CliError::from(sol25_core::compile(source).unwrap_err());
        let line = render(&error, Some(source));
        assert!(!line.contains('\n'), "{line}");
        assert!(line.starts_with("error[sol25::syntax]: "), "{line}");
    }
}
