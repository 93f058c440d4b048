//! Typing Animation
//!
//! Reveals text one character per tick with a blinking cursor. Timing is
//! driven by the caller; this only tracks what is visible.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingOptions {
    /// Delay before the first character (ms)
    pub start_delay_ms: u32,
    /// Delay between characters (ms)
    pub speed_ms: u32,
    /// Cursor blink period (ms)
    pub cursor_blink_ms: u32,
    /// Keep the cursor once typing is done
    pub keep_cursor: bool,
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self {
            start_delay_ms: 0,
            speed_ms: 100,
            cursor_blink_ms: 530,
            keep_cursor: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    cursor_lit: bool,
    keep_cursor: bool,
}

impl Typewriter {
    pub fn new(text: &str, keep_cursor: bool) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            cursor_lit: true,
            keep_cursor,
        }
    }

    /// Reveal the next character; false once everything is visible
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn blink(&mut self) {
        self.cursor_lit = !self.cursor_lit;
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn visible(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// Whether the cursor element is rendered at all
    pub fn shows_cursor(&self) -> bool {
        self.keep_cursor || !self.is_complete()
    }

    /// Whether the cursor is in the "on" half of its blink
    pub fn cursor_lit(&self) -> bool {
        self.cursor_lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut typer = Typewriter::new("Ajith", false);
        assert_eq!(typer.visible(), "");

        assert!(typer.tick());
        assert_eq!(typer.visible(), "A");
        assert!(typer.tick());
        assert_eq!(typer.visible(), "Aj");
    }

    #[test]
    fn test_stops_at_text_length() {
        let mut typer = Typewriter::new("héllo", false);
        let ticks = std::iter::from_fn(|| typer.tick().then_some(())).count();

        assert_eq!(ticks, 5);
        assert!(typer.is_complete());
        assert_eq!(typer.visible(), "héllo");
        assert!(!typer.tick());
        assert_eq!(typer.visible(), "héllo");
    }

    #[test]
    fn test_cursor_visibility() {
        let mut typer = Typewriter::new("ab", false);
        assert!(typer.shows_cursor());
        typer.tick();
        typer.tick();
        assert!(!typer.shows_cursor());

        let mut kept = Typewriter::new("ab", true);
        kept.tick();
        kept.tick();
        assert!(kept.shows_cursor());
    }

    #[test]
    fn test_blink_toggles() {
        let mut typer = Typewriter::new("x", false);
        assert!(typer.cursor_lit());
        typer.blink();
        assert!(!typer.cursor_lit());
        typer.blink();
        assert!(typer.cursor_lit());
    }

    #[test]
    fn test_empty_text_is_complete_immediately() {
        let typer = Typewriter::new("", false);
        assert!(typer.is_complete());
        assert!(!typer.shows_cursor());
    }
}
