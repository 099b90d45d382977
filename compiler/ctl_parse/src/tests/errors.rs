use pretty_assertions::assert_eq;

use ctl_controller::{lfo, Element};
use ctl_ir::Registry;

use super::failure;
use crate::{parse_control_expression, ControlParseError, ErrorCode};

#[test]
fn empty_expression() {
    assert_eq!(failure(""), (ErrorCode::ExpectFunctionName, 0));
    assert_eq!(failure("   \n"), (ErrorCode::ExpectFunctionName, 0));
}

#[test]
fn first_token_not_a_name() {
    assert_eq!(failure("(direct)"), (ErrorCode::ExpectFunctionName, 0));
    assert_eq!(failure("0.5"), (ErrorCode::ExpectFunctionName, 0));
    assert_eq!(failure("Direct()"), (ErrorCode::ExpectFunctionName, 0));
}

#[test]
fn missing_opening_paren() {
    assert_eq!(failure("direct"), (ErrorCode::ExpectOpeningParen, 6));
    assert_eq!(failure("direct control"), (ErrorCode::ExpectOpeningParen, 7));
}

#[test]
fn unknown_binding() {
    let registry = {
        let mut registry = Registry::new();
        registry.register_source("lfo", lfo);
        registry
    };
    let target = Element::video_source("src").object_ref();
    let error = parse_control_expression(
        &registry,
        "argb(control-source-b=lfo(waveform='sine'),control-source-g=lfo(waveform='sine'))",
        &target,
        "foreground-color",
    )
    .unwrap_err();
    assert_eq!(error.code(), Some(ErrorCode::UnsupportedControlBinding));
    assert_eq!(error.position(), Some(5));
}

#[test]
fn unknown_source_inside_silent_trial_is_fatal() {
    assert_eq!(
        failure("direct(control-source=add(v1=0.5))"),
        (ErrorCode::UnsupportedControlSource, 26)
    );
}

#[test]
fn missing_value_after_assignment() {
    let expression = "direct(control-source=lfo(waveform='sine',frequency=))";
    assert_eq!(
        failure(expression),
        (ErrorCode::ExpectFunctionOrValue, expression.find("frequency=").unwrap() + 10)
    );
}

#[test]
fn bare_word_is_neither_function_nor_value() {
    assert_eq!(
        failure("direct(control-source=sine)"),
        (ErrorCode::ExpectFunctionOrValue, 22)
    );
}

#[test]
fn missing_parameter_name() {
    assert_eq!(failure("direct(=lfo())"), (ErrorCode::ExpectParameterName, 7));
    assert_eq!(failure("direct(control-source=lfo(),)"), (ErrorCode::ExpectParameterName, 28));
}

#[test]
fn missing_assignment() {
    assert_eq!(failure("direct(control-source)"), (ErrorCode::ExpectAssignment, 21));
}

#[test]
fn missing_separator() {
    assert_eq!(
        failure("direct(control-source=lfo() absolute='x')"),
        (ErrorCode::ExpectCommaOrClosingParen, 28)
    );
}

#[test]
fn unterminated_call() {
    let expression = "direct(control-source=lfo(waveform='sine')";
    assert_eq!(
        failure(expression),
        (ErrorCode::ExpectCommaOrClosingParen, expression.len())
    );
}

#[test]
fn deepest_committed_failure_wins() {
    // The failing `phase` parameter sits three calls deep.
    let expression = "direct(control-source=lfo(frequency=direct(control-source=lfo(phase))))";
    assert_eq!(
        failure(expression),
        (ErrorCode::ExpectAssignment, expression.find("phase").unwrap() + 5)
    );
}

#[test]
fn empty_attribute_is_invalid_argument() {
    let target = Element::audio_source("src").object_ref();
    let error = parse_control_expression(
        &ctl_controller::default_registry(),
        "direct()",
        &target,
        "",
    )
    .unwrap_err();
    assert!(matches!(error, ControlParseError::InvalidArgument(_)));
    assert_eq!(error.code(), None);
    assert!(target.bindings().is_empty());
}

#[test]
fn diagnostic_rendering() {
    let (_, result) = super::parse_audio("direct(control-source=sine)");
    let error = result.unwrap_err();
    assert_eq!(
        error.to_string(),
        "Syntax error: expect <function> or <value> for parameter at pos: 22\n  \
         direct(control-source=sine)\n                        ^"
    );
}
