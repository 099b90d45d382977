//! Concrete collaborators for the controller expression parser.
//!
//! The parser only knows factory names and the construction contract in
//! [`ctl_ir`]. This crate supplies the objects the demonstration setups
//! use:
//!
//! | Name | Kind | Attributes |
//! |------|------|------------|
//! | `direct` | binding | `control-source`, `absolute` |
//! | `argb` | binding | `control-source-a`, `-r`, `-g`, `-b` |
//! | `lfo` | source | `waveform`, `frequency`, `timeshift`, `amplitude`, `offset` |
//!
//! plus the two [`Element`] targets they are attached to. No value
//! generation happens here; objects only record their configuration.

mod binding;
mod element;
mod registry;
mod source;

pub use binding::{ArgbControlBinding, DirectControlBinding};
pub use element::Element;
pub use registry::{argb, default_registry, direct, lfo};
pub use source::{LfoControlSource, Waveform};
