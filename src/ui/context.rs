use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use ipa_ship::config::{ColorMode, Config};
use ipa_ship::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    /// Prompts may be shown
    pub interactive: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode,
            interactive: !json && caps.stdin_is_tty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            stdin_is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: false,
        }
    }

    #[test]
    fn json_mode_never_prompts() {
        let config = Config::default();
        let ui = UiContext::from_caps(true, 0, None, &config, tty_caps());
        assert!(!ui.interactive);
    }

    #[test]
    fn piped_stdin_never_prompts() {
        let config = Config::default();
        let caps = TerminalCapabilities {
            stdin_is_tty: false,
            ..tty_caps()
        };
        let ui = UiContext::from_caps(false, 0, None, &config, caps);
        assert!(!ui.interactive);
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let config = Config::default();
        let caps = TerminalCapabilities {
            is_ci: true,
            ..tty_caps()
        };
        let ui = UiContext::from_caps(false, 0, None, &config, caps);
        assert!(!ui.color);
    }

    #[test]
    fn cli_flag_beats_config() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Never), &config, tty_caps());
        assert!(!ui.color);
    }

    #[test]
    fn config_can_disable_unicode() {
        let mut config = Config::default();
        config.output.unicode = false;
        let ui = UiContext::from_caps(false, 0, None, &config, tty_caps());
        assert!(!ui.unicode);
    }
}
