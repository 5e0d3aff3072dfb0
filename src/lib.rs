//! Generator for the `UI.Spinner.Variant` Gren module.
//!
//! The library loads the cli-spinners catalogue, drops a denylist of
//! troublesome entries and renders one Gren declaration per spinner plus an
//! aggregate `all` dictionary. Loading and writing are thin wrappers around a
//! pure transformation, so the rendered text can be produced and tested
//! without network access.

mod config;
mod error;
mod render;
mod source;
mod spinner;

pub use config::{
    DEFAULT_DENYLIST, DEFAULT_SOURCE_URL, Denylist, EscapeMode, GeneratorConfig, HeaderStyle,
    load_config, parse_config,
};
pub use error::{Error, io_error};
pub use render::{
    MODULE_NAME, escape_frame, frames_literal, render_header, render_module, render_table,
    render_variant, write_module,
};
pub use source::{fetch_spinners, load_spinners, parse_spinners};
pub use spinner::{SpinnerCollection, SpinnerDefinition};
