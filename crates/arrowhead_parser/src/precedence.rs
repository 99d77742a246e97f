//! Operator precedence for binary operators.

use arrowhead_ast::syntax_kind::SyntaxKind;

/// Operator precedence levels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Comma = 0,
    Spread = 1,
    Yield = 2,
    Assignment = 3,
    Conditional = 4,
    NullishCoalescing = 5,
    LogicalOr = 6,
    LogicalAnd = 7,
    BitwiseOr = 8,
    BitwiseXor = 9,
    BitwiseAnd = 10,
    Equality = 11,
    Relational = 12,
    Shift = 13,
    Additive = 14,
    Multiplicative = 15,
    Exponentiation = 16,
    Unary = 17,
    Update = 18,
    LeftHandSide = 19,
    Member = 20,
    Primary = 21,
    Highest = 22,
    Invalid = 255,
}

impl OperatorPrecedence {
    /// The level a whole binary expression is parsed at. Every binary
    /// operator binds tighter; `?:`, `=` and `,` are handled above the loop.
    pub const LOWEST: OperatorPrecedence = OperatorPrecedence::Comma;

    pub fn is_binary(self) -> bool {
        self >= Self::NullishCoalescing && self <= Self::Exponentiation
    }
}

/// Get the binary operator precedence for a given token kind.
pub fn get_binary_operator_precedence(kind: SyntaxKind) -> OperatorPrecedence {
    match kind {
        SyntaxKind::QuestionQuestionToken => OperatorPrecedence::NullishCoalescing,
        SyntaxKind::BarBarToken => OperatorPrecedence::LogicalOr,
        SyntaxKind::AmpersandAmpersandToken => OperatorPrecedence::LogicalAnd,
        SyntaxKind::BarToken => OperatorPrecedence::BitwiseOr,
        SyntaxKind::CaretToken => OperatorPrecedence::BitwiseXor,
        SyntaxKind::AmpersandToken => OperatorPrecedence::BitwiseAnd,
        SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken => OperatorPrecedence::Equality,
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken
        | SyntaxKind::InstanceOfKeyword
        | SyntaxKind::InKeyword
        | SyntaxKind::AsKeyword
        | SyntaxKind::SatisfiesKeyword => OperatorPrecedence::Relational,
        SyntaxKind::LessThanLessThanToken
        | SyntaxKind::GreaterThanGreaterThanToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanToken => OperatorPrecedence::Shift,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => OperatorPrecedence::Additive,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => {
            OperatorPrecedence::Multiplicative
        }
        SyntaxKind::AsteriskAsteriskToken => OperatorPrecedence::Exponentiation,
        _ => OperatorPrecedence::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_ordering() {
        assert!(
            get_binary_operator_precedence(SyntaxKind::AsteriskToken)
                > get_binary_operator_precedence(SyntaxKind::PlusToken)
        );
        assert!(
            get_binary_operator_precedence(SyntaxKind::AmpersandAmpersandToken)
                > get_binary_operator_precedence(SyntaxKind::BarBarToken)
        );
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::AsKeyword),
            OperatorPrecedence::Relational
        );
    }

    #[test]
    fn test_non_operators_are_invalid() {
        for kind in [
            SyntaxKind::CommaToken,
            SyntaxKind::EqualsToken,
            SyntaxKind::QuestionToken,
            SyntaxKind::EqualsGreaterThanToken,
        ] {
            let precedence = get_binary_operator_precedence(kind);
            assert_eq!(precedence, OperatorPrecedence::Invalid);
            assert!(!precedence.is_binary());
        }
        assert!(get_binary_operator_precedence(SyntaxKind::QuestionQuestionToken).is_binary());
    }
}
