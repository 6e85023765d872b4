use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Upload,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons, icons_ascii};
        match self {
            Icon::Success if supports_unicode => icons::SUCCESS,
            Icon::Success => icons_ascii::SUCCESS,
            Icon::Error if supports_unicode => icons::ERROR,
            Icon::Error => icons_ascii::ERROR,
            Icon::Warning if supports_unicode => icons::WARNING,
            Icon::Warning => icons_ascii::WARNING,
            Icon::Progress if supports_unicode => icons::PROGRESS,
            Icon::Progress => icons_ascii::PROGRESS,
            Icon::Arrow if supports_unicode => icons::ARROW,
            Icon::Arrow => icons_ascii::ARROW,
            Icon::Upload if supports_unicode => icons::UPLOAD,
            Icon::Upload => icons_ascii::UPLOAD,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Upload => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
