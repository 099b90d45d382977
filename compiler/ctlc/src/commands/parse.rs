//! The `parse` command: attach an expression to a fresh element.

use std::sync::Arc;

use ctl_controller::{default_registry, Element};
use ctl_ir::describe;
use ctl_parse::ControlParser;

use super::CommandResult;

/// Which target element to create.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ElementKind {
    #[default]
    Audio,
    Video,
}

impl ElementKind {
    pub fn create(self) -> Arc<Element> {
        match self {
            ElementKind::Audio => Element::audio_source("src"),
            ElementKind::Video => Element::video_source("src"),
        }
    }

    /// Attribute bound when none is given.
    pub fn default_attribute(self) -> &'static str {
        match self {
            ElementKind::Audio => "freq",
            ElementKind::Video => "foreground-color",
        }
    }
}

/// Options for `ctl parse`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub element: ElementKind,
    pub attribute: Option<String>,
}

impl ParseOptions {
    pub fn attribute(&self) -> &str {
        self.attribute
            .as_deref()
            .unwrap_or(self.element.default_attribute())
    }
}

/// Split `ctl parse` arguments into the expression and options.
pub fn parse_options(args: &[String]) -> Result<(String, ParseOptions), String> {
    let mut options = ParseOptions::default();
    let mut expression = None;

    for arg in args {
        if let Some(element) = arg.strip_prefix("--element=") {
            options.element = match element {
                "audio" => ElementKind::Audio,
                "video" => ElementKind::Video,
                other => return Err(format!("unknown element `{other}` (expected audio or video)")),
            };
        } else if let Some(attribute) = arg.strip_prefix("--attribute=") {
            options.attribute = Some(attribute.to_string());
        } else if arg.starts_with("--") {
            return Err(format!("unknown option `{arg}`"));
        } else if expression.is_none() {
            expression = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument `{arg}`"));
        }
    }

    let expression = expression.ok_or_else(|| "missing expression".to_string())?;
    Ok((expression, options))
}

/// Parse `expression` against a fresh element and render the result.
pub fn run_parse(expression: &str, options: &ParseOptions) -> CommandResult {
    let registry = default_registry();
    let element = options.element.create();
    let target = element.object_ref();

    match ControlParser::new(&registry).parse(expression, &target, options.attribute()) {
        Ok(_) => Ok(describe(&target)),
        Err(error) => Err(format!("expression has errors\n{error}")),
    }
}
