#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    Spring,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Self::EaseOut => "cubic-bezier(0, 0, 0.2, 1)",
            Self::EaseInOut => "cubic-bezier(0.4, 0, 0.2, 1)",
            Self::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Frame {
    pub const REST: Frame = Frame {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    const fn hidden(x: f32, y: f32, scale: f32) -> Frame {
        Frame {
            opacity: 0.0,
            x,
            y,
            scale,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub from: Frame,
    pub to: Frame,
}

impl Motion {
    pub const fn fade_in() -> Self {
        Self {
            duration_ms: 600,
            delay_ms: 0,
            easing: Easing::EaseOut,
            from: Frame::hidden(0.0, 0.0, 1.0),
            to: Frame::REST,
        }
    }

    pub const fn fade_up() -> Self {
        Self {
            from: Frame::hidden(0.0, 20.0, 1.0),
            ..Self::fade_in()
        }
    }

    pub const fn fade_down() -> Self {
        Self {
            from: Frame::hidden(0.0, -20.0, 1.0),
            ..Self::fade_in()
        }
    }

    pub const fn slide_from_left() -> Self {
        Self {
            duration_ms: 800,
            from: Frame::hidden(-50.0, 0.0, 1.0),
            ..Self::fade_in()
        }
    }

    pub const fn slide_from_right() -> Self {
        Self {
            duration_ms: 800,
            from: Frame::hidden(50.0, 0.0, 1.0),
            ..Self::fade_in()
        }
    }

    pub const fn pop_in() -> Self {
        Self {
            duration_ms: 800,
            easing: Easing::Spring,
            from: Frame::hidden(0.0, 0.0, 0.8),
            ..Self::fade_in()
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub const fn lasting(self, duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..self
        }
    }

    pub const fn stagger(self, index: usize, step_ms: u32) -> Self {
        Self {
            delay_ms: self.delay_ms + index as u32 * step_ms,
            ..self
        }
    }

    pub fn transition(&self) -> String {
        let timing = format!(
            "{}ms {} {}ms",
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        );
        format!("transition: opacity {timing}, transform {timing};")
    }

    pub fn style(&self, revealed: bool) -> String {
        let frame = if revealed { self.to } else { self.from };
        format!("{} {}", frame.css(), self.transition())
    }
}

pub fn bar_width_style(level: u8, revealed: bool, delay_ms: u32) -> String {
    let width = if revealed { level } else { 0 };
    format!("width: {width}%; transition: width 1000ms ease-out {delay_ms}ms;")
}

pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Drifts down by its own height over the whole page and fades out over
/// the first half.
pub fn parallax_style(progress: f64) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let y = progress * 100.0;
    let opacity = (1.0 - progress * 2.0).max(0.0);
    format!("transform: translateY({y}%); opacity: {opacity};")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_switches_frames() {
        let m = Motion::fade_up();
        assert!(m.style(false).starts_with("opacity: 0; transform: translate(0px, 20px) scale(1);"));
        assert!(m.style(true).starts_with("opacity: 1; transform: translate(0px, 0px) scale(1);"));
    }

    #[test]
    fn test_stagger_adds_to_delay() {
        let m = Motion::fade_up().delayed(300).stagger(2, 100);
        assert_eq!(m.delay_ms, 500);
        assert!(m
            .transition()
            .contains("opacity 600ms cubic-bezier(0, 0, 0.2, 1) 500ms"));
    }

    #[test]
    fn test_lasting_keeps_delay() {
        let m = Motion::fade_up().delayed(400).lasting(500);
        assert_eq!((m.duration_ms, m.delay_ms), (500, 400));
        assert!(m.transition().starts_with("transition: opacity 500ms"));
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 3000.0, 1000.0), 0.25);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        // page shorter than the viewport never scrolls
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_parallax_moves_and_fades() {
        assert_eq!(parallax_style(0.0), "transform: translateY(0%); opacity: 1;");
        assert_eq!(parallax_style(0.25), "transform: translateY(25%); opacity: 0.5;");
        assert_eq!(parallax_style(0.5), "transform: translateY(50%); opacity: 0;");
        assert_eq!(parallax_style(1.0), "transform: translateY(100%); opacity: 0;");
    }

    #[test]
    fn test_bar_width() {
        assert!(bar_width_style(85, false, 0).starts_with("width: 0%;"));
        assert!(bar_width_style(85, true, 200).starts_with("width: 85%;"));
        assert!(bar_width_style(85, true, 200).ends_with("200ms;"));
    }
}
