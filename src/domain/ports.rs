use crate::utils::error::Result;
use std::io::Write;

/// Output sink for the formatted report line. Injected so the report logic
/// stays independent of process stdout and can be captured in tests.
pub trait ReportSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Production sink writing to the process's standard output.
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(line.as_bytes())?;
        handle.flush()?;
        Ok(())
    }
}
