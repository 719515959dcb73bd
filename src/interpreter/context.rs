use super::SystemContext;

pub struct StdioContext;

impl SystemContext for StdioContext {
    fn writeln(&mut self, text: &str) {
        println!("{text}");
    }

    fn ewriteln(&mut self, text: &str) {
        eprintln!("{text}");
    }
}

/// Captures program output and reports in memory.
#[derive(Debug, Default)]
pub struct BufferedContext {
    buffer: String,
    reports: String,
}

impl BufferedContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.buffer
    }

    pub fn reports(&self) -> &str {
        &self.reports
    }

    pub fn into_data(self) -> String {
        self.buffer
    }
}

impl SystemContext for BufferedContext {
    fn writeln(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn ewriteln(&mut self, text: &str) {
        self.reports.push_str(text);
        self.reports.push('\n');
    }
}
