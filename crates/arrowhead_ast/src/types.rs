//! Flag types carried by tokens and AST nodes.

use crate::syntax_kind::SyntaxKind;

bitflags::bitflags! {
    /// Node-local facts recorded when a node is constructed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u32 {
        const NONE                  = 0;
        const LET                   = 1 << 0;
        const CONST                 = 1 << 1;
        /// At least one diagnostic was reported while this node was parsed.
        const HAS_ERRORS            = 1 << 2;
        /// The node was inserted by the parser rather than read from source.
        const SYNTHESIZED           = 1 << 3;
        const HAS_SIDE_EFFECTS      = 1 << 4;
        const ABSTRACT              = 1 << 5;
        const DECLARED              = 1 << 6;
        const AMBIENT               = 1 << 7;
        const PRECEDING_LINE_BREAK  = 1 << 8;
        const OPTIONAL_CHAIN        = 1 << 9;

        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits();
    }
}

bitflags::bitflags! {
    /// Modifier flags for declarations and parameter properties.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const NONE              = 0;
        const EXPORT            = 1 << 0;
        const AMBIENT           = 1 << 1;
        const PUBLIC            = 1 << 2;
        const PRIVATE           = 1 << 3;
        const PROTECTED         = 1 << 4;
        const STATIC            = 1 << 5;
        const READONLY          = 1 << 6;
        const ACCESSOR          = 1 << 7;
        const ABSTRACT          = 1 << 8;
        const ASYNC             = 1 << 9;
        const DEFAULT           = 1 << 10;
        const CONST             = 1 << 11;
        const OVERRIDE          = 1 << 12;
        const DECORATOR         = 1 << 13;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();

        const TYPE_SCRIPT_MODIFIER = Self::AMBIENT.bits()
            | Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits()
            | Self::READONLY.bits()
            | Self::ABSTRACT.bits()
            | Self::CONST.bits()
            | Self::OVERRIDE.bits();

        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();
    }
}

impl ModifierFlags {
    /// The flag a modifier keyword contributes, or `NONE` for other tokens.
    pub fn from_modifier_kind(kind: SyntaxKind) -> ModifierFlags {
        match kind {
            SyntaxKind::ExportKeyword => ModifierFlags::EXPORT,
            SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
            SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
            SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
            SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
            SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
            SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
            SyntaxKind::AccessorKeyword => ModifierFlags::ACCESSOR,
            SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
            SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
            SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
            SyntaxKind::ConstKeyword => ModifierFlags::CONST,
            SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
            _ => ModifierFlags::NONE,
        }
    }
}

bitflags::bitflags! {
    /// Syntax features present anywhere in a subtree.
    ///
    /// A node's transform flags are its own intrinsic bits unioned with the
    /// transform flags of every structural child, so a later pass can decide
    /// whether a subtree needs a given downlevel transform without walking it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TransformFlags: u32 {
        const NONE                   = 0;
        const CONTAINS_TYPESCRIPT    = 1 << 0;
        const CONTAINS_JSX           = 1 << 1;
        const CONTAINS_ES2015        = 1 << 2;
        const CONTAINS_ES2016        = 1 << 3;
        const CONTAINS_ES2017        = 1 << 4;
        const CONTAINS_ES2018        = 1 << 5;
        const CONTAINS_ES2020        = 1 << 6;
        const CONTAINS_ES2021        = 1 << 7;
        const CONTAINS_GENERATOR     = 1 << 8;
        const CONTAINS_YIELD         = 1 << 9;
        const CONTAINS_AWAIT         = 1 << 10;
        const CONTAINS_DECORATORS    = 1 << 11;
        const CONTAINS_LEXICAL_THIS  = 1 << 12;
    }
}

bitflags::bitflags! {
    /// Per-token facts reported by the scanner.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u16 {
        const NONE                              = 0;
        const PRECEDING_LINE_BREAK              = 1 << 0;
        const PRECEDING_JSX_TEXT_LINE_BREAK     = 1 << 1;
        const UNTERMINATED                      = 1 << 2;
        const EXTENDED_UNICODE_ESCAPE           = 1 << 3;
        const SCIENTIFIC                        = 1 << 4;
        const OCTAL                             = 1 << 5;
        const HEX_SPECIFIER                     = 1 << 6;
        const BINARY_SPECIFIER                  = 1 << 7;
        const OCTAL_SPECIFIER                   = 1 << 8;
        const CONTAINS_SEPARATOR                = 1 << 9;
        const UNICODE_ESCAPE                    = 1 << 10;
        const CONTAINS_INVALID_ESCAPE           = 1 << 11;
        const SINGLE_QUOTE                      = 1 << 12;

        const NUMERIC_LITERAL_FLAGS = Self::SCIENTIFIC.bits()
            | Self::OCTAL.bits()
            | Self::HEX_SPECIFIER.bits()
            | Self::BINARY_SPECIFIER.bits()
            | Self::OCTAL_SPECIFIER.bits()
            | Self::CONTAINS_SEPARATOR.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_from_kind() {
        assert_eq!(
            ModifierFlags::from_modifier_kind(SyntaxKind::PrivateKeyword),
            ModifierFlags::PRIVATE
        );
        assert!(ModifierFlags::PARAMETER_PROPERTY_MODIFIER.contains(ModifierFlags::READONLY));
        assert_eq!(
            ModifierFlags::from_modifier_kind(SyntaxKind::Identifier),
            ModifierFlags::NONE
        );
    }

    #[test]
    fn test_block_scoped() {
        assert!(NodeFlags::BLOCK_SCOPED.contains(NodeFlags::LET));
        assert!(!NodeFlags::BLOCK_SCOPED.contains(NodeFlags::HAS_ERRORS));
    }
}
