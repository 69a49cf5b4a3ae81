//! Output sink for `Print` instructions.

/// Where `Print` lines go.
///
/// Enum dispatch instead of a trait object: there are exactly two
/// destinations, and tests want to read the buffer back without
/// process-level stdout capture.
#[derive(Clone, Debug)]
pub enum Output {
    /// Write each line to stdout (the default).
    Stdout,
    /// Capture lines into a buffer.
    Buffer(String),
}

impl Output {
    /// Write one line, newline-terminated.
    pub fn println(&mut self, line: &str) {
        match self {
            Output::Stdout => println!("{line}"),
            Output::Buffer(buffer) => {
                buffer.push_str(line);
                buffer.push('\n');
            }
        }
    }

    /// Everything captured so far.
    ///
    /// Empty for the stdout sink, which does not capture.
    pub fn captured(&self) -> &str {
        match self {
            Output::Stdout => "",
            Output::Buffer(buffer) => buffer,
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::Stdout
    }
}
