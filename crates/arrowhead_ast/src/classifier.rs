//! Token classifier: named capability sets over token kinds.
//!
//! Parser decisions such as "can this token start a cover-grammar element"
//! are set-membership tests over [`TokenCategory`] rather than ad hoc lists
//! of kinds scattered through the parser.

use crate::syntax_kind::SyntaxKind;

bitflags::bitflags! {
    /// The capability set of a token kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenCategory: u32 {
        const NONE                 = 0;
        /// Identifiers plus every keyword that may be used as one somewhere.
        const IDENTIFIER_LIKE      = 1 << 0;
        const KEYWORD              = 1 << 1;
        const RESERVED             = 1 << 2;
        const FUTURE_RESERVED      = 1 << 3;
        const CONTEXTUAL           = 1 << 4;
        const ASSIGN_OP            = 1 << 5;
        const ELLIPSIS             = 1 << 6;
        const COMMA                = 1 << 7;
        /// Keywords that make a parameter a parameter property.
        const ACCESS_MODIFIER      = 1 << 8;
        const BINARY_OP            = 1 << 9;
        const UNARY_OP             = 1 << 10;
        const LITERAL              = 1 << 11;
        const PATTERN_START        = 1 << 12;
        const EXPRESSION_START     = 1 << 13;
        const STATEMENT_START      = 1 << 14;
        /// `(` or `.`, the tokens that turn `import` into an expression.
        const MEMBER_OR_CALL       = 1 << 15;
        /// Anything that may begin an element of a parenthesized cover list.
        const COVER_ELEMENT_START  = 1 << 16;
    }
}

impl SyntaxKind {
    /// Compute the capability set of this token kind.
    pub fn category(self) -> TokenCategory {
        let mut category = TokenCategory::NONE;

        if self.is_keyword() {
            category |= TokenCategory::KEYWORD;
        }
        if self.is_reserved_word() {
            category |= TokenCategory::RESERVED;
        }
        if self.is_future_reserved_word() {
            category |= TokenCategory::FUTURE_RESERVED | TokenCategory::IDENTIFIER_LIKE;
        }
        if self.is_contextual_keyword() {
            category |= TokenCategory::CONTEXTUAL | TokenCategory::IDENTIFIER_LIKE;
        }
        if self == SyntaxKind::Identifier {
            category |= TokenCategory::IDENTIFIER_LIKE;
        }
        if self.is_assignment_operator() {
            category |= TokenCategory::ASSIGN_OP;
        }

        category |= match self {
            SyntaxKind::DotDotDotToken => TokenCategory::ELLIPSIS,
            SyntaxKind::CommaToken => TokenCategory::COMMA,
            SyntaxKind::PublicKeyword
            | SyntaxKind::PrivateKeyword
            | SyntaxKind::ProtectedKeyword
            | SyntaxKind::ReadonlyKeyword
            | SyntaxKind::OverrideKeyword => TokenCategory::ACCESS_MODIFIER,
            SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken => {
                TokenCategory::PATTERN_START
            }
            SyntaxKind::OpenParenToken | SyntaxKind::DotToken => TokenCategory::MEMBER_OR_CALL,
            _ => TokenCategory::NONE,
        };

        if is_binary_operator(self) {
            category |= TokenCategory::BINARY_OP;
        }
        if is_unary_operator(self) {
            category |= TokenCategory::UNARY_OP;
        }
        if self.is_literal()
            || matches!(
                self,
                SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword | SyntaxKind::NullKeyword
            )
        {
            category |= TokenCategory::LITERAL;
        }

        if category.intersects(
            TokenCategory::IDENTIFIER_LIKE | TokenCategory::LITERAL | TokenCategory::UNARY_OP,
        ) || is_other_expression_start(self)
        {
            category |= TokenCategory::EXPRESSION_START;
        }
        if category.contains(TokenCategory::EXPRESSION_START) || is_statement_keyword(self) {
            category |= TokenCategory::STATEMENT_START;
        }
        if category.intersects(
            TokenCategory::EXPRESSION_START | TokenCategory::ELLIPSIS | TokenCategory::COMMA,
        ) {
            category |= TokenCategory::COVER_ELEMENT_START;
        }

        category
    }

    #[inline]
    pub fn is_identifier_like(self) -> bool {
        self.category().contains(TokenCategory::IDENTIFIER_LIKE)
    }

    #[inline]
    pub fn can_start_expression(self) -> bool {
        self.category().contains(TokenCategory::EXPRESSION_START)
    }

    #[inline]
    pub fn can_start_statement(self) -> bool {
        self.category().contains(TokenCategory::STATEMENT_START)
    }

    #[inline]
    pub fn can_start_cover_element(self) -> bool {
        self.category().contains(TokenCategory::COVER_ELEMENT_START)
    }

    #[inline]
    pub fn is_member_or_call_start(self) -> bool {
        self.category().contains(TokenCategory::MEMBER_OR_CALL)
    }

    #[inline]
    pub fn is_access_modifier(self) -> bool {
        self.category().contains(TokenCategory::ACCESS_MODIFIER)
    }

    /// Whether an identifier, or a binding pattern, starts with this token.
    #[inline]
    pub fn is_identifier_or_pattern_start(self) -> bool {
        self.category()
            .intersects(TokenCategory::IDENTIFIER_LIKE | TokenCategory::PATTERN_START)
    }

    /// Declaration keywords accepted after `declare` or `abstract`.
    ///
    /// Only `class` is legal after `abstract` and only a subset after
    /// `declare`; the rest are accepted so a later pass can report them.
    pub fn can_follow_declare_or_abstract(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::VarKeyword
                | SyntaxKind::LetKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::ImportKeyword
                | SyntaxKind::InterfaceKeyword
                | SyntaxKind::TypeKeyword
                | SyntaxKind::EnumKeyword
        )
    }
}

fn is_binary_operator(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::QuestionQuestionToken
            | SyntaxKind::BarBarToken
            | SyntaxKind::AmpersandAmpersandToken
            | SyntaxKind::BarToken
            | SyntaxKind::CaretToken
            | SyntaxKind::AmpersandToken
            | SyntaxKind::EqualsEqualsToken
            | SyntaxKind::ExclamationEqualsToken
            | SyntaxKind::EqualsEqualsEqualsToken
            | SyntaxKind::ExclamationEqualsEqualsToken
            | SyntaxKind::LessThanToken
            | SyntaxKind::GreaterThanToken
            | SyntaxKind::LessThanEqualsToken
            | SyntaxKind::GreaterThanEqualsToken
            | SyntaxKind::InstanceOfKeyword
            | SyntaxKind::InKeyword
            | SyntaxKind::AsKeyword
            | SyntaxKind::SatisfiesKeyword
            | SyntaxKind::LessThanLessThanToken
            | SyntaxKind::GreaterThanGreaterThanToken
            | SyntaxKind::GreaterThanGreaterThanGreaterThanToken
            | SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::AsteriskToken
            | SyntaxKind::SlashToken
            | SyntaxKind::PercentToken
            | SyntaxKind::AsteriskAsteriskToken
    )
}

fn is_unary_operator(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
    )
}

fn is_other_expression_start(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::TemplateHead
            | SyntaxKind::OpenParenToken
            | SyntaxKind::OpenBracketToken
            | SyntaxKind::OpenBraceToken
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::NewKeyword
            | SyntaxKind::SlashToken
            | SyntaxKind::SlashEqualsToken
            | SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::ImportKeyword
            | SyntaxKind::LessThanToken
    )
}

fn is_statement_keyword(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::VarKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::IfKeyword
            | SyntaxKind::DoKeyword
            | SyntaxKind::WhileKeyword
            | SyntaxKind::ForKeyword
            | SyntaxKind::ContinueKeyword
            | SyntaxKind::BreakKeyword
            | SyntaxKind::ReturnKeyword
            | SyntaxKind::WithKeyword
            | SyntaxKind::SwitchKeyword
            | SyntaxKind::ThrowKeyword
            | SyntaxKind::TryKeyword
            | SyntaxKind::CatchKeyword
            | SyntaxKind::FinallyKeyword
            | SyntaxKind::DebuggerKeyword
            | SyntaxKind::SemicolonToken
            | SyntaxKind::ExportKeyword
            | SyntaxKind::EnumKeyword
            | SyntaxKind::AtToken
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_like_excludes_reserved_words() {
        assert!(SyntaxKind::Identifier.is_identifier_like());
        assert!(SyntaxKind::LetKeyword.is_identifier_like());
        assert!(SyntaxKind::AsyncKeyword.is_identifier_like());
        assert!(SyntaxKind::YieldKeyword.is_identifier_like());
        assert!(!SyntaxKind::IfKeyword.is_identifier_like());
        assert!(!SyntaxKind::ThisKeyword.is_identifier_like());
    }

    #[test]
    fn test_cover_element_start() {
        for kind in [
            SyntaxKind::Identifier,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::CommaToken,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::OpenBraceToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::PublicKeyword,
            SyntaxKind::ExclamationToken,
        ] {
            assert!(kind.can_start_cover_element(), "{kind:?}");
        }
        assert!(!SyntaxKind::CloseParenToken.can_start_cover_element());
        assert!(!SyntaxKind::ColonToken.can_start_cover_element());
        assert!(!SyntaxKind::EqualsGreaterThanToken.can_start_cover_element());
    }

    #[test]
    fn test_statement_start() {
        assert!(SyntaxKind::SemicolonToken.can_start_statement());
        assert!(SyntaxKind::TryKeyword.can_start_statement());
        assert!(SyntaxKind::Identifier.can_start_statement());
        assert!(SyntaxKind::SlashToken.can_start_statement());
        assert!(!SyntaxKind::CloseBraceToken.can_start_statement());
        assert!(!SyntaxKind::PrivateIdentifier.can_start_statement());
        assert!(!SyntaxKind::EndOfFileToken.can_start_statement());
    }

    #[test]
    fn test_operator_categories() {
        assert!(SyntaxKind::PlusToken.category().contains(TokenCategory::BINARY_OP));
        assert!(SyntaxKind::PlusToken.category().contains(TokenCategory::UNARY_OP));
        assert!(SyntaxKind::InKeyword.category().contains(TokenCategory::BINARY_OP));
        assert!(SyntaxKind::PercentEqualsToken
            .category()
            .contains(TokenCategory::ASSIGN_OP));
        assert!(!SyntaxKind::EqualsEqualsToken
            .category()
            .contains(TokenCategory::ASSIGN_OP));
    }

    #[test]
    fn test_member_or_call_and_modifiers() {
        assert!(SyntaxKind::OpenParenToken.is_member_or_call_start());
        assert!(SyntaxKind::DotToken.is_member_or_call_start());
        assert!(!SyntaxKind::OpenBraceToken.is_member_or_call_start());
        assert!(SyntaxKind::ReadonlyKeyword.is_access_modifier());
        assert!(!SyntaxKind::StaticKeyword.is_access_modifier());
        assert!(SyntaxKind::EnumKeyword.can_follow_declare_or_abstract());
        assert!(!SyntaxKind::Identifier.can_follow_declare_or_abstract());
    }
}
