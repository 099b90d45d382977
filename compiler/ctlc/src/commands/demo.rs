//! The `demo` command: the stock expressions.

use super::parse::{run_parse, ElementKind, ParseOptions};
use super::CommandResult;

/// A demonstration expression and the element attribute it drives.
#[derive(Copy, Clone, Debug)]
pub struct Setup {
    pub expression: &'static str,
    pub element: ElementKind,
    pub attribute: &'static str,
}

pub const SETUPS: [Setup; 4] = [
    Setup {
        expression: "direct(control-source=lfo(waveform='sine',offset=0.5,amplitude=0.3,frequency=0.5))",
        element: ElementKind::Audio,
        attribute: "freq",
    },
    Setup {
        expression: "direct(control-source=lfo(waveform='sine',offset=0.5,amplitude=0.3,\
                     frequency=direct(control-source=lfo(waveform='sine',frequency=0.05,offset=0.005,amplitude=0.01))))",
        element: ElementKind::Audio,
        attribute: "freq",
    },
    // There is no `add` source, so this one is rejected.
    Setup {
        expression: "direct(control-source=add(v1=0.5,v2=direct(control-source=lfo(waveform='sine',frequency=0.5))))",
        element: ElementKind::Audio,
        attribute: "freq",
    },
    Setup {
        expression: "argb(control-source-b=lfo(waveform='sine',offset=0.5,amplitude=0.5,frequency=1.0),\
                     control-source-g=lfo(waveform='sine',offset=0.5,amplitude=0.5,frequency=0.2))",
        element: ElementKind::Video,
        attribute: "foreground-color",
    },
];

/// Run setup `index` (default 0). Indices past the end run the last one.
pub fn run_demo(index: Option<&str>) -> CommandResult {
    let index = match index {
        None => 0,
        Some(text) => text
            .parse::<usize>()
            .map_err(|_| format!("invalid setup index `{text}`"))?,
    };
    let setup = &SETUPS[index.min(SETUPS.len() - 1)];
    let options = ParseOptions {
        element: setup.element,
        attribute: Some(setup.attribute.to_string()),
    };

    let header = format!("{} = {}\n", setup.attribute, setup.expression);
    match run_parse(setup.expression, &options) {
        Ok(graph) => Ok(header + &graph),
        Err(error) => Err(header + &error),
    }
}
