// Game tunables, provided to the component tree as context.

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub width: f64,
    pub shadow_blur: f64,
    pub shadow_color: &'static str,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "black",
            width: 4.0,
            shadow_blur: 10.0,
            shadow_color: "black",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub title: &'static str,
    /// How long the mismatch advisory stays up.
    pub mismatch_message_ms: u32,
    pub shake_ms: u32,
    /// Quiet period before wheel/scroll bursts trigger a connector redraw.
    pub redraw_debounce_ms: u32,
    pub celebration_ms: u32,
    pub mismatch_text: &'static str,
    pub win_text: &'static str,
    pub connector: StrokeStyle,
    pub confetti_particles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Match Thai Words with Their Pictures",
            mismatch_message_ms: 1000,
            shake_ms: 300,
            redraw_debounce_ms: 150,
            celebration_ms: 7000,
            mismatch_text: "Incorrect match!",
            win_text: "Congrats, you win!",
            connector: StrokeStyle::default(),
            confetti_particles: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shake_ends_before_message_clears() {
        let c = GameConfig::default();
        assert!(c.shake_ms < c.mismatch_message_ms);
        assert_eq!(c.redraw_debounce_ms, 150);
        assert_eq!(c.celebration_ms, 7000);
        assert_eq!(c.connector.width, 4.0);
    }
}
