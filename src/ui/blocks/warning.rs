use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One-line warning: icon, message, newline
pub fn render_warning(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(message).render(supports_color)
    )
}
