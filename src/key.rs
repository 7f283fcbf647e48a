use serde::{Deserialize, Serialize};

/// One key per physical calculator button. The UI layer maps taps to these
/// variants; labels, colors and layout stay on the UI side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Decimal,
    Negate,
    Percent,
    Clear,
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Key {
    /// The digit character for digit keys, None for everything else.
    pub fn digit(self) -> Option<char> {
        match self {
            Key::Zero => Some('0'),
            Key::One => Some('1'),
            Key::Two => Some('2'),
            Key::Three => Some('3'),
            Key::Four => Some('4'),
            Key::Five => Some('5'),
            Key::Six => Some('6'),
            Key::Seven => Some('7'),
            Key::Eight => Some('8'),
            Key::Nine => Some('9'),
            _ => None,
        }
    }

    /// The binary operator for operator keys, None for everything else.
    pub fn operator(self) -> Option<Operator> {
        match self {
            Key::Add => Some(Operator::Add),
            Key::Subtract => Some(Operator::Subtract),
            Key::Multiply => Some(Operator::Multiply),
            Key::Divide => Some(Operator::Divide),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        assert_eq!(Key::Zero.digit(), Some('0'));
        assert_eq!(Key::Nine.digit(), Some('9'));
        assert_eq!(Key::Equals.digit(), None);
        assert_eq!(Key::Add.digit(), None);
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(Key::Add.operator(), Some(Operator::Add));
        assert_eq!(Key::Divide.operator(), Some(Operator::Divide));
        assert_eq!(Key::Five.operator(), None);
        assert_eq!(Key::Equals.operator(), None);
    }
}
