use inksac::prelude::*;

/// Styles user-facing messages, degrading to plain text when the terminal
/// reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    color_support: ColorSupport,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStyle {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        message.style(error_style).to_string()
    }

    pub fn warning(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let warning_style = Style::builder().foreground(Color::Yellow).build();
        message.style(warning_style).to_string()
    }
}
