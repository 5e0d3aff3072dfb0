// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rendering of the `UI.Spinner.Variant` Gren module.
//!
//! The module consists of three parts emitted in a fixed order:
//!
//! 1. a header with the export list, documentation, banner, import and the
//!    `Variant` type alias,
//! 2. one declaration per retained spinner in sorted name order,
//! 3. the `all` dictionary populated in source document order.
//!
//! Rendering is pure: the same collection and configuration always produce
//! byte-identical text.

use std::io;

use tracing::{debug, info};

use crate::{
    config::{EscapeMode, GeneratorConfig, HeaderStyle},
    error::{self, Error},
    spinner::{SpinnerCollection, SpinnerDefinition},
};

/// Name of the generated Gren module.
pub const MODULE_NAME: &str = "UI.Spinner.Variant";
/// Record type shared by every spinner declaration.
const TYPE_NAME: &str = "Variant";
/// Name of the aggregate lookup table.
const TABLE_NAME: &str = "all";
const FRAME_SEPARATOR: char = ',';
/// Token emitted for a missing `interval` or `frames` field.
const MISSING_VALUE: &str = "undefined";

const MODULE_DOC_INTRO: &str = "\n{-| These are most of the spinners from
https://github.com/sindresorhus/cli-spinners

See demos at https://jsfiddle.net/sindresorhus/2eLtsbey/embedded/result/

@docs ";

const GENERATED_BANNER: &str = "

------------------------------------------------------
------------------------------------------------------
-- THIS IS A GENERATED MODULE!
-- See Justfile and the spinner-variants generator
------------------------------------------------------
------------------------------------------------------


import Dict exposing (Dict)


";

const TYPE_DOC: &str = "{-| Type alias for a spinner variant.

`frames` is an array of strings to rotate through for the animation.
`interval` is the number of milliseconds before advancing to the next frame.
-}
";

const TYPE_ALIAS: &str = "type alias Variant =
    { interval : Int
    , frames : Array String
    }
";

/// Renders the complete module as a single string.
///
/// Denylisted spinners are removed before anything is rendered.
///
/// # Examples
///
/// ```
/// use spinner_variants::{GeneratorConfig, SpinnerCollection, SpinnerDefinition, render_module};
///
/// let spinners: SpinnerCollection =
///     [("dots", SpinnerDefinition::new(80, ["a", "b"],),)].into_iter().collect();
/// let module = render_module(&spinners, &GeneratorConfig::default(),);
/// assert!(module.starts_with("module UI.Spinner.Variant exposing\n"));
/// assert!(module.contains("    , frames = [\"a\",\"b\"]\n"));
/// assert!(module.contains("       |> Dict.set \"dots\" dots\n"));
/// ```
pub fn render_module(collection: &SpinnerCollection, config: &GeneratorConfig,) -> String
{
    render_sections(collection, config,).concat()
}

/// Streams the rendered module to `writer`, one section at a time.
///
/// Sections written before a failing write stay written.
///
/// # Errors
///
/// Returns [`Error::Emit`](Error::Emit) when the writer rejects data.
pub fn write_module<W: io::Write,>(
    writer: &mut W,
    collection: &SpinnerCollection,
    config: &GeneratorConfig,
) -> Result<(), Error,>
{
    let sections = render_sections(collection, config,);
    for section in &sections {
        writer.write_all(section.as_bytes(),).map_err(error::emit_error,)?;
    }
    writer.flush().map_err(error::emit_error,)?;

    info!("Wrote {} with {} spinner declarations", MODULE_NAME, sections.len() - 2);
    Ok((),)
}

fn render_sections(collection: &SpinnerCollection, config: &GeneratorConfig,) -> Vec<String,>
{
    let retained = collection.filtered(&config.denylist,);
    let sorted = retained.sorted_names();
    debug!("Rendering {} spinners", sorted.len());

    let mut sections = Vec::with_capacity(sorted.len() + 2,);
    sections.push(render_header(&sorted, config.header,),);
    for name in &sorted {
        if let Some(definition,) = retained.get(name,) {
            sections.push(render_variant(name, definition, config,),);
        }
    }
    sections.push(render_table(retained.names(), config.header,),);
    sections
}

/// Renders the module header for the given sorted spinner names.
///
/// Emits the export list, the optional documentation block, the generated
/// file banner, the `Dict` import and the `Variant` type alias.
pub fn render_header(sorted_names: &[&str], style: HeaderStyle,) -> String
{
    let mut exposed = Vec::with_capacity(sorted_names.len() + 2,);
    exposed.push(TYPE_NAME,);
    if style.expose_table {
        exposed.push(TABLE_NAME,);
    }
    exposed.extend_from_slice(sorted_names,);

    let mut header = format!("module {MODULE_NAME} exposing\n    ( {TYPE_NAME}");
    for name in &exposed[1..] {
        header.push_str("\n    , ",);
        header.push_str(name,);
    }
    header.push_str("\n    )\n",);

    if style.doc_comments {
        header.push_str(MODULE_DOC_INTRO,);
        header.push_str(&exposed.join(", ",),);
        header.push_str("\n-}\n",);
    }

    header.push_str(GENERATED_BANNER,);
    if style.doc_comments {
        header.push_str(TYPE_DOC,);
    }
    header.push_str(TYPE_ALIAS,);
    header.push('\n',);
    header
}

/// Renders the declaration of a single spinner.
pub fn render_variant(name: &str, definition: &SpinnerDefinition, config: &GeneratorConfig,)
-> String
{
    let interval =
        definition.interval.as_ref().map_or_else(|| MISSING_VALUE.to_owned(), ToString::to_string,);
    let frames = definition.frames.as_deref().map_or_else(
        || MISSING_VALUE.to_owned(),
        |frames| frames_literal(frames, config.escape,),
    );
    let doc = if config.header.doc_comments { "{-|-}\n" } else { "" };

    format!(
        "\n{doc}{name} : {TYPE_NAME}\n{name} =\n    {{ interval = {interval}\n    , frames = \
         {frames}\n    }}\n\n"
    )
}

/// Renders the `all` dictionary, inserting names in the order given.
pub fn render_table<'a,>(names: impl IntoIterator<Item = &'a str,>, style: HeaderStyle,) -> String
{
    let mut table = String::from("\n",);
    if style.expose_table && style.doc_comments {
        table.push_str("{-|-}\n",);
    }
    table.push_str(&format!(
        "{TABLE_NAME} : Dict String {TYPE_NAME}\n{TABLE_NAME} =\n    Dict.empty\n"
    ),);

    for name in names {
        table.push_str(&format!("       |> Dict.set \"{name}\" {name}\n"),);
    }

    table.push('\n',);
    table
}

/// Builds the Gren array literal for a list of frames.
///
/// Each frame is escaped and wrapped in double quotes. Frames are joined by a
/// single comma with no trailing separator.
///
/// # Examples
///
/// ```
/// use spinner_variants::{EscapeMode, frames_literal};
///
/// let frames = ["a".to_owned(), "b".to_owned(),];
/// assert_eq!(frames_literal(&frames, EscapeMode::FirstOccurrence,), r#"["a","b"]"#);
/// ```
pub fn frames_literal(frames: &[String], mode: EscapeMode,) -> String
{
    let mut literal = String::with_capacity(frames.iter().map(|frame| frame.len() + 3,).sum::<usize>() + 2,);
    literal.push('[',);
    for (index, frame,) in frames.iter().enumerate() {
        if index > 0 {
            literal.push(FRAME_SEPARATOR,);
        }
        literal.push('"',);
        literal.push_str(&escape_frame(frame, mode,),);
        literal.push('"',);
    }
    literal.push(']',);
    literal
}

/// Doubles backslashes in a frame string according to `mode`.
///
/// No other character is escaped. A frame containing `"` therefore yields
/// an invalid Gren string literal.
///
/// # Examples
///
/// ```
/// use spinner_variants::{EscapeMode, escape_frame};
///
/// assert_eq!(escape_frame(r"\\", EscapeMode::FirstOccurrence,), r"\\\");
/// assert_eq!(escape_frame(r"\\", EscapeMode::All,), r"\\\\");
/// ```
pub fn escape_frame(frame: &str, mode: EscapeMode,) -> String
{
    match mode {
        EscapeMode::FirstOccurrence => frame.replacen('\\', "\\\\", 1,),
        EscapeMode::All => frame.replace('\\', "\\\\",),
    }
}
