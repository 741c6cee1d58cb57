// src/template.rs
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::{ConvertError, Result};

/// CDL template bundled with the crate; `--template` substitutes another.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/nsidc0803.cdl");

/// A replacement value for one `${name}` placeholder.
///
/// Numeric variants substitute as literal numeric text so the CDL keeps the
/// declared attribute types; `Text` substitutes as a quoted string with
/// internal quotes escaped; `Raw` passes preformatted text (coordinate value
/// lists) through unchanged.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Raw(String),
}

impl Value {
    fn write_cdl(&self, out: &mut String) {
        match self {
            Value::Int(v) => {
                let _ = write!(out, "{v}");
            }
            // Whole floats keep a trailing .0 so ncgen types them as double
            Value::Float(v) if v.fract() == 0.0 && v.is_finite() => {
                let _ = write!(out, "{v:.1}");
            }
            Value::Float(v) => {
                let _ = write!(out, "{v}");
            }
            Value::Text(s) => {
                out.push('"');
                for c in s.chars() {
                    match c {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        _ => out.push(c),
                    }
                }
                out.push('"');
            }
            Value::Raw(s) => out.push_str(s),
        }
    }
}

/// Flat placeholder-name to value mapping, fully assembled before rendering.
#[derive(Debug, Default)]
pub struct RenderContext {
    values: BTreeMap<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// Substitute every `${name}` in `template` from `context`.
///
/// Substitution is purely textual and total: a placeholder missing from the
/// context aborts rendering with the placeholder's name rather than emitting
/// a partially rendered document. Rendering the same template against the
/// same context is byte-stable.
pub fn render(template: &str, context: &RenderContext) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let body = &rest[start + 2..];
        let end = body.find('}').ok_or_else(|| {
            ConvertError::MalformedPlaceholder(rest[start..].chars().take(24).collect())
        })?;
        let name = &body[..end];
        let value = context
            .get(name)
            .ok_or_else(|| ConvertError::UnresolvedPlaceholder(name.to_string()))?;
        value.write_cdl(&mut out);
        rest = &body[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
