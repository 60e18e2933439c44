/**
 * GNAT project files (.gpr).
 */

use once_cell::sync::Lazy;
use dlx_regex::{Priority, RegexError};
use crate::lexer::Lexer;
use crate::rules::RuleTable;
use crate::token::TokenType;
use super::{comment, expect_grammar, identifier, string_literal, whitespace};

crate::token_types! {
    pub enum GprTokenKind {
        whitespace: WhiteSpace,
        bad_character: BadCharacter,

        Identifier => "IDENTIFIER",
        StringLiteral => "STRING_LITERAL",
        Comment => "COMMENT",

        Ampersand => "AMPERSAND" = "&",
        Apostrophe => "APOSTROPHE" = "'",
        LeftParenthesis => "LEFT_PARENTHESIS" = "(",
        RightParenthesis => "RIGHT_PARENTHESIS" = ")",
        Comma => "COMMA" = ",",
        FullStop => "FULL_STOP" = ".",
        Colon => "COLON" = ":",
        Semicolon => "SEMICOLON" = ";",
        VerticalLine => "VERTICAL_LINE" = "|",
        Arrow => "ARROW" = "=>",
        Assignment => "ASSIGNMENT" = ":=",

        AbstractKeyword => "ABSTRACT_KEYWORD" = "abstract",
        AllKeyword => "ALL_KEYWORD" = "all",
        AtKeyword => "AT_KEYWORD" = "at",
        CaseKeyword => "CASE_KEYWORD" = "case",
        EndKeyword => "END_KEYWORD" = "end",
        ExtendsKeyword => "EXTENDS_KEYWORD" = "extends",
        ExternalKeyword => "EXTERNAL_KEYWORD" = "external",
        ExternalAsListKeyword => "EXTERNAL_AS_LIST_KEYWORD" = "external_as_list",
        ForKeyword => "FOR_KEYWORD" = "for",
        IsKeyword => "IS_KEYWORD" = "is",
        LimitedKeyword => "LIMITED_KEYWORD" = "limited",
        NullKeyword => "NULL_KEYWORD" = "null",
        OthersKeyword => "OTHERS_KEYWORD" = "others",
        PackageKeyword => "PACKAGE_KEYWORD" = "package",
        ProjectKeyword => "PROJECT_KEYWORD" = "project",
        RenamesKeyword => "RENAMES_KEYWORD" = "renames",
        TypeKeyword => "TYPE_KEYWORD" = "type",
        UseKeyword => "USE_KEYWORD" = "use",
        WhenKeyword => "WHEN_KEYWORD" = "when",
        WithKeyword => "WITH_KEYWORD" = "with",

        AggregateKeyword => "AGGREGATE_KEYWORD" = "aggregate",
        LibraryKeyword => "LIBRARY_KEYWORD" = "library",
    }
}

pub const FIXED_PRIORITY: Priority = 1;

/// Words that only qualify a `project` declaration, like `library project`.
pub const QUALIFIERS: &[GprTokenKind] = &[
    GprTokenKind::AggregateKeyword,
    GprTokenKind::LibraryKeyword,
];

pub const COMMENTS: &[GprTokenKind] = &[GprTokenKind::Comment];

impl GprTokenKind {
    /// Reserved words, not counting the qualifiers.
    pub fn is_keyword(&self) -> bool {
        self.is_reserved_word() && !self.is_qualifier()
    }

    pub fn is_qualifier(&self) -> bool {
        QUALIFIERS.contains(self)
    }
}

pub fn build_rules() -> Result<RuleTable<GprTokenKind>, RegexError> {
    let mut table = RuleTable::new();
    table
        .register_rule(GprTokenKind::WhiteSpace, whitespace()?, 0)
        .register_rule(GprTokenKind::Identifier, identifier()?, 0)
        .register_rule(GprTokenKind::StringLiteral, string_literal()?, 0)
        .register_rule(GprTokenKind::Comment, comment()?, 0)
        .register_fixed_kinds_ignoring_case(FIXED_PRIORITY)?;
    Ok(table)
}

static RULES: Lazy<RuleTable<GprTokenKind>> = Lazy::new(|| expect_grammar("GPR", build_rules()));

pub fn rules() -> &'static RuleTable<GprTokenKind> {
    &RULES
}

pub fn lexer() -> Lexer<'static, GprTokenKind> {
    rules().lexer()
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod gpr_tests {
    use super::*;
    use GprTokenKind::*;

    fn kinds(source: &str) -> Vec<GprTokenKind> {
        lexer().iter(source).map(|t| t.kind).collect()
    }

    #[test]
    fn vocabulary() {
        let keywords = GprTokenKind::all().iter().filter(|k| k.is_keyword()).count();
        let delimiters = GprTokenKind::all().iter().filter(|k| k.is_delimiter()).count();
        assert_eq!(keywords, 20);
        assert_eq!(delimiters, 11);
        assert_eq!(QUALIFIERS.len(), 2);
        assert_eq!(rules().len(), 4 + 20 + 11 + 2);
    }

    #[test]
    fn keyword_with_underscores() {
        assert_eq!(kinds("external_as_list"), vec![ExternalAsListKeyword]);
        assert_eq!(kinds("external_as"), vec![Identifier]);
        assert_eq!(kinds("external"), vec![ExternalKeyword]);
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(kinds("Project"), vec![ProjectKeyword]);
        assert_eq!(kinds("END"), vec![EndKeyword]);
        assert_eq!(kinds("External_As_List"), vec![ExternalAsListKeyword]);
        assert_eq!(kinds("Library Project"), vec![LibraryKeyword, WhiteSpace, ProjectKeyword]);
        assert_eq!(kinds("Projects"), vec![Identifier]);
    }

    #[test]
    fn qualified_project() {
        assert_eq!(kinds("library project Lib is"), vec![
            LibraryKeyword, WhiteSpace, ProjectKeyword, WhiteSpace,
            Identifier, WhiteSpace, IsKeyword,
        ]);
        assert!(LibraryKeyword.is_qualifier());
        assert!(!LibraryKeyword.is_keyword());
    }

    #[test]
    fn attribute_declaration() {
        assert_eq!(kinds("for Source_Dirs use (\"src\", \"lib\");"), vec![
            ForKeyword, WhiteSpace, Identifier, WhiteSpace, UseKeyword, WhiteSpace,
            LeftParenthesis, StringLiteral, Comma, WhiteSpace, StringLiteral,
            RightParenthesis, Semicolon,
        ]);
        assert_eq!(kinds("Prj'Object_Dir"), vec![Identifier, Apostrophe, Identifier]);
    }

    #[test]
    fn ada_only_symbols_are_bad_characters() {
        assert_eq!(kinds("a + 1"), vec![
            Identifier, WhiteSpace, BadCharacter, WhiteSpace, BadCharacter,
        ]);
        assert_eq!(kinds("=:"), vec![BadCharacter, Colon]);
    }
}
