//! # Artifact JSON: Byte-Compatible Pretty Output
//!
//! Every artifact is rendered through [`to_artifact_string`], the single
//! serialization path for files this crate writes.
//!
//! ## Cross-Language Compatibility
//!
//! Existing `counter.json` files were produced by a generator using
//! `json.dump(obj, f, indent=2)`. To keep such a file byte-identical after a
//! no-op merge, the output follows the same rules:
//!
//! 1. **Two-space indentation**, `": "` between key and value, `","` at line
//!    ends, no trailing newline.
//! 2. **ASCII only**: every character outside `0x20..=0x7e` that serde_json
//!    would emit raw is written as `\uXXXX` with lowercase hex. Characters
//!    above the BMP become a UTF-16 surrogate pair.
//! 3. **Numbers verbatim**: the workspace enables serde_json's
//!    `arbitrary_precision`, so a number read from disk is written back with
//!    its original digits.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use cesr_core::CodexError;

/// Render `value` in artifact form.
pub fn to_artifact_string<T: Serialize + ?Sized>(value: &T) -> Result<String, CodexError> {
    let mut out = Vec::with_capacity(256);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, AsciiPrettyFormatter::new());
    value.serialize(&mut ser)?;
    let text = String::from_utf8(out).map_err(<serde_json::Error as serde::ser::Error>::custom)?;
    Ok(text)
}

/// [`PrettyFormatter`] with non-ASCII string content escaped.
struct AsciiPrettyFormatter {
    inner: PrettyFormatter<'static>,
}

impl AsciiPrettyFormatter {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

fn needs_escape(ch: char) -> bool {
    !ch.is_ascii() || ch == '\x7f'
}

impl Formatter for AsciiPrettyFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if !needs_escape(ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}
