use std::thread;

use ctl_controller::{default_registry, Element};
use ctl_ir::describe;

use crate::ControlParser;

#[test]
fn parallel_parses_share_registry() {
    let registry = default_registry();
    let parser = ControlParser::new(&registry);
    let expression = "direct(control-source=lfo(waveform='square',frequency=4.0))";

    let graphs: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    let target = Element::audio_source("src").object_ref();
                    parser.parse(expression, &target, "freq").unwrap();
                    describe(&target)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(graphs.len(), 8);
    assert!(graphs.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn parallel_failures_are_independent() {
    let registry = default_registry();
    let parser = ControlParser::new(&registry);

    thread::scope(|scope| {
        let good = scope.spawn(|| {
            let target = Element::audio_source("a").object_ref();
            parser.parse("direct(control-source=lfo())", &target, "freq").map(|_| target.bindings().len())
        });
        let bad = scope.spawn(|| {
            let target = Element::audio_source("b").object_ref();
            parser.parse("direct(control-source=lfo(", &target, "freq").map(|_| target.bindings().len())
        });
        assert_eq!(good.join().unwrap(), Ok(1));
        assert!(bad.join().unwrap().is_err());
    });
}
