use crate::generator::ast::Documentation;

const INDENT: &str = "    ";

/// Line-oriented text buffer with brace-driven indentation.
#[derive(Debug, Default)]
pub(crate) struct CodeWriter {
  buffer: String,
  depth: usize,
}

impl CodeWriter {
  pub(crate) fn line(&mut self, text: impl AsRef<str>) {
    let text = text.as_ref();
    if !text.is_empty() {
      for _ in 0..self.depth {
        self.buffer.push_str(INDENT);
      }
      self.buffer.push_str(text);
    }
    self.buffer.push('\n');
  }

  pub(crate) fn blank(&mut self) {
    self.buffer.push('\n');
  }

  pub(crate) fn open_block(&mut self) {
    self.line("{");
    self.depth += 1;
  }

  pub(crate) fn close_block(&mut self) {
    self.depth = self.depth.saturating_sub(1);
    self.line("}");
  }

  /// Writes an XML `<summary>` doc comment; nothing for empty docs.
  pub(crate) fn docs(&mut self, docs: &Documentation) {
    if docs.is_empty() {
      return;
    }

    self.line("/// <summary>");
    for line in docs.lines() {
      if line.is_empty() {
        self.line("///");
      } else {
        self.line(format!("/// {}", escape_xml(line)));
      }
    }
    self.line("/// </summary>");
  }

  pub(crate) fn finish(self) -> String {
    self.buffer
  }
}

fn escape_xml(text: &str) -> String {
  text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
