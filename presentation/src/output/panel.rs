//! Boxed panels sized to their content

use colored::{Color, Colorize};

/// One line of panel content: the plain text (for measuring) and the text
/// as it should be printed (possibly with color codes).
#[derive(Debug, Clone)]
pub struct PanelLine {
    plain: String,
    styled: String,
}

impl PanelLine {
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            styled: text.clone(),
            plain: text,
        }
    }

    pub fn styled(plain: impl Into<String>, styled: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            styled: styled.into(),
        }
    }

    fn width(&self) -> usize {
        self.plain.chars().count()
    }
}

/// Render lines inside a rounded box whose border is drawn in `border`.
///
/// The box is as wide as its widest line plus one column of padding on each
/// side.
pub fn render(lines: &[PanelLine], border: Color) -> String {
    let inner = lines.iter().map(PanelLine::width).max().unwrap_or(0);
    let horizontal = "─".repeat(inner + 2);

    let mut out = String::new();
    out.push_str(&format!("╭{}╮", horizontal).color(border).to_string());
    out.push('\n');
    for line in lines {
        let pad = " ".repeat(inner - line.width());
        out.push_str(&format!(
            "{} {}{} {}\n",
            "│".color(border),
            line.styled,
            pad,
            "│".color(border)
        ));
    }
    out.push_str(&format!("╰{}╯", horizontal).color(border).to_string());
    out
}
