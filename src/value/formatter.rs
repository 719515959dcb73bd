use super::error::{RuntimeError, RuntimeErrorKind};
use super::Value;
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::path::Path;

const ARIADNE_MSG: &str = "Ariadne produces valid utf-8 strings";
const ARIADNE_WRITE_MSG: &str = "Write into buffer should not fail.";

pub trait ValueFormatter {
    fn format_error(&self, error: &RuntimeError) -> String;
}

pub struct DebugFormatter;

impl ValueFormatter for DebugFormatter {
    fn format_error(&self, error: &RuntimeError) -> String {
        format!("{error:?}")
    }
}

pub struct BasicFormatter;

impl BasicFormatter {
    pub fn format_verbose(value: &Value) -> String {
        match value {
            Value::Null => "Null".to_string(),
            Value::Integer(v) => format!("Integer({v})"),
            Value::Decimal(v) => format!("Decimal({})", v.literal()),
            Value::Boolean(v) => format!("Boolean({v})"),
            Value::String(v) => format!("String(\"{v}\")"),
        }
    }
}

impl ValueFormatter for BasicFormatter {
    fn format_error(&self, error: &RuntimeError) -> String {
        format!("{error}")
    }
}

pub struct PrettyFormatter<'src> {
    text: &'src str,
    path: &'src Path,
}

impl<'src> PrettyFormatter<'src> {
    pub fn new(text: &'src str, path: &'src Path) -> Self {
        Self { text, path }
    }
}

impl ValueFormatter for PrettyFormatter<'_> {
    fn format_error(&self, error: &RuntimeError) -> String {
        let path = self.path.to_string_lossy();
        let path: &str = &path;
        let mut output = std::io::Cursor::new(Vec::new());
        let span = error.span;
        let (message, label) = match &error.kind {
            RuntimeErrorKind::UnknownClass { class, object } => (
                "Attempted to instantiate a class that has not been declared",
                format!(
                    "`{}` is not a class, so `{}` can't be created.",
                    class.fg(Color::BrightRed),
                    object.fg(Color::BrightYellow),
                ),
            ),
            RuntimeErrorKind::UnknownObject { object, property } => (
                "Attempted to assign a property on an object that has not been declared",
                format!(
                    "`{}` of `{}` can't be set because `{}` does not exist.",
                    property.fg(Color::BrightYellow),
                    object.fg(Color::BrightRed),
                    object.fg(Color::BrightRed),
                ),
            ),
        };
        Report::build(ReportKind::Error, (path, span.range()))
            .with_code(error.code())
            .with_message(message)
            .with_label(
                Label::new((path, span.range()))
                    .with_message(label)
                    .with_color(Color::BrightRed),
            )
            .finish()
            .write((path, Source::from(self.text)), &mut output)
            .expect(ARIADNE_WRITE_MSG);
        String::from_utf8(output.into_inner()).expect(ARIADNE_MSG)
    }
}
