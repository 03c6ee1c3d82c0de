//! Reporting sink: message templates and diagnostic collection.

use crate::{Diagnostic, Location};

/// Substitute `{{name}}` placeholders in a message template.
pub fn render_template(template: &str, data: &[(&str, String)]) -> String {
    let mut message = template.to_string();
    for (key, value) in data {
        message = message.replace(&format!("{{{{{}}}}}", key), value);
    }
    message
}

/// Sink for diagnostics found during a walk. The engine records findings
/// through this; it never raises them.
pub trait Reporter {
    fn report(&mut self, location: Location, template: &str, data: &[(&str, String)]);
}

/// Collects diagnostics into a vector, in report order.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for DiagnosticSink {
    fn report(&mut self, location: Location, template: &str, data: &[(&str, String)]) {
        self.diagnostics.push(Diagnostic {
            message: render_template(template, data),
            location,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_placeholders() {
        let message = render_template(
            "Too many assertions ({{num}}). Maximum allowed is {{max}}.",
            &[("num", "4".to_string()), ("max", "3".to_string())],
        );
        assert_eq!(message, "Too many assertions (4). Maximum allowed is 3.");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let message = render_template("Test without assertions is not allowed.", &[]);
        assert_eq!(message, "Test without assertions is not allowed.");
    }

    #[test]
    fn sink_collects_in_order() {
        let mut sink = DiagnosticSink::new();
        sink.report(Location::new(1, 1), "first", &[]);
        sink.report(Location::new(2, 1), "second", &[]);
        let diagnostics = sink.into_diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message, "first");
        assert_eq!(diagnostics[1].message, "second");
    }
}
