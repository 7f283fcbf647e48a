use log::debug;

use crate::config::Config;
use crate::key::{Key, Operator};

/// Button-driven calculator engine. Owns the display string, the pending
/// binary operator and the stored left-hand operand; the UI layer feeds it
/// one key per tap and renders whatever `handle_key` returns.
pub struct Calculator {
    display: String,
    pending: Option<Operator>,
    stored: f32,
    strict_negate: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            stored: 0.0,
            strict_negate: config.strict_negate,
        }
    }

    /// The string currently shown to the user.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Process one key press and return the updated display string.
    ///
    /// Never fails: unparseable display values fall back to 0.0 and division
    /// by zero shows "0", so the caller always gets something displayable.
    pub fn handle_key(&mut self, key: Key) -> &str {
        match key {
            Key::Clear => self.display = "0".to_string(),
            Key::Decimal => self.press_decimal(),
            Key::Negate => self.display = toggle_negate(&self.display, self.strict_negate),
            Key::Percent => self.press_percent(),
            Key::Equals => self.apply_pending(),
            other => {
                if let Some(op) = other.operator() {
                    self.capture_operand(op);
                } else if let Some(digit) = other.digit() {
                    self.press_digit(digit);
                }
            }
        }
        &self.display
    }

    fn press_digit(&mut self, digit: char) {
        if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    fn press_decimal(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn press_percent(&mut self) {
        // The length of the entry before the division drives the rounding
        // width: short entries keep the raw quotient, longer ones are
        // rounded to as many decimal places as the entry had characters.
        let len = self.display.len();
        let mut value = parse_or_zero(&self.display) / 100.0;
        if len >= 3 {
            let divisor = 10f64.powi(len as i32);
            value = ((f64::from(value) * divisor).round() / divisor) as f32;
        }
        self.display = format_value(value);
    }

    fn capture_operand(&mut self, op: Operator) {
        self.pending = Some(op);
        self.stored = parse_or_zero(&self.display);
        debug!("captured operand {} for {:?}", self.stored, op);
        self.display = "0".to_string();
    }

    // Pending operator and stored operand deliberately survive, so pressing
    // equals again re-applies the last operation against the result.
    fn apply_pending(&mut self) {
        let op = match self.pending {
            Some(op) => op,
            None => return,
        };
        let rhs = parse_or_zero(&self.display);
        self.display = match op {
            Operator::Add => format_value(self.stored + rhs),
            Operator::Subtract => format_value(self.stored - rhs),
            Operator::Multiply => format_value(self.stored * rhs),
            Operator::Divide => {
                if rhs != 0.0 {
                    format_value(self.stored / rhs)
                } else {
                    "0".to_string()
                }
            }
        };
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or_zero(display: &str) -> f32 {
    display.parse().unwrap_or(0.0)
}

// Shortest round-trip form, keeping the trailing ".0" on whole numbers.
fn format_value(value: f32) -> String {
    format!("{:?}", value)
}

// Literal mode treats any '-' in the string as "already negative" and drops
// the first character to un-negate; strict mode only looks at a leading '-'.
fn toggle_negate(display: &str, strict: bool) -> String {
    if strict {
        match display.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", display),
        }
    } else if display.contains('-') {
        display[1..].to_string()
    } else {
        format!("-{}", display)
    }
}
