/**
 * Ada 2012 source files.
 */

use once_cell::sync::Lazy;
use dlx_regex::{Priority, Regex, RegexError};
use crate::lexer::Lexer;
use crate::rules::RuleTable;
use crate::token::TokenType;
use super::{comment, digit, expect_grammar, graphic_character, identifier, string_literal, whitespace};

crate::token_types! {
    pub enum AdaTokenKind {
        whitespace: WhiteSpace,
        bad_character: BadCharacter,

        Identifier => "IDENTIFIER",
        DecimalLiteral => "DECIMAL_LITERAL",
        BasedLiteral => "BASED_LITERAL",
        CharacterLiteral => "CHARACTER_LITERAL",
        StringLiteral => "STRING_LITERAL",
        Comment => "COMMENT",

        Ampersand => "AMPERSAND" = "&",
        Apostrophe => "APOSTROPHE" = "'",
        LeftParenthesis => "LEFT_PARENTHESIS" = "(",
        RightParenthesis => "RIGHT_PARENTHESIS" = ")",
        Asterisk => "ASTERISK" = "*",
        PlusSign => "PLUS_SIGN" = "+",
        Comma => "COMMA" = ",",
        HyphenMinus => "HYPHEN_MINUS" = "-",
        FullStop => "FULL_STOP" = ".",
        Solidus => "SOLIDUS" = "/",
        Colon => "COLON" = ":",
        Semicolon => "SEMICOLON" = ";",
        LessThanSign => "LESS_THAN_SIGN" = "<",
        EqualsSign => "EQUALS_SIGN" = "=",
        GreaterThanSign => "GREATER_THAN_SIGN" = ">",
        VerticalLine => "VERTICAL_LINE" = "|",

        Arrow => "ARROW" = "=>",
        DoubleDot => "DOUBLE_DOT" = "..",
        DoubleAsterisk => "DOUBLE_ASTERISK" = "**",
        Assignment => "ASSIGNMENT" = ":=",
        Inequality => "INEQUALITY" = "/=",
        GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL" = ">=",
        LessThanOrEqual => "LESS_THAN_OR_EQUAL" = "<=",
        LeftLabelBracket => "LEFT_LABEL_BRACKET" = "<<",
        RightLabelBracket => "RIGHT_LABEL_BRACKET" = ">>",
        Box => "BOX" = "<>",

        AbortKeyword => "ABORT_KEYWORD" = "abort",
        AbsKeyword => "ABS_KEYWORD" = "abs",
        AbstractKeyword => "ABSTRACT_KEYWORD" = "abstract",
        AcceptKeyword => "ACCEPT_KEYWORD" = "accept",
        AccessKeyword => "ACCESS_KEYWORD" = "access",
        AliasedKeyword => "ALIASED_KEYWORD" = "aliased",
        AllKeyword => "ALL_KEYWORD" = "all",
        AndKeyword => "AND_KEYWORD" = "and",
        ArrayKeyword => "ARRAY_KEYWORD" = "array",
        AtKeyword => "AT_KEYWORD" = "at",
        BeginKeyword => "BEGIN_KEYWORD" = "begin",
        BodyKeyword => "BODY_KEYWORD" = "body",
        CaseKeyword => "CASE_KEYWORD" = "case",
        ConstantKeyword => "CONSTANT_KEYWORD" = "constant",
        DeclareKeyword => "DECLARE_KEYWORD" = "declare",
        DelayKeyword => "DELAY_KEYWORD" = "delay",
        DeltaKeyword => "DELTA_KEYWORD" = "delta",
        DigitsKeyword => "DIGITS_KEYWORD" = "digits",
        DoKeyword => "DO_KEYWORD" = "do",
        ElseKeyword => "ELSE_KEYWORD" = "else",
        ElsifKeyword => "ELSIF_KEYWORD" = "elsif",
        EndKeyword => "END_KEYWORD" = "end",
        EntryKeyword => "ENTRY_KEYWORD" = "entry",
        ExceptionKeyword => "EXCEPTION_KEYWORD" = "exception",
        ExitKeyword => "EXIT_KEYWORD" = "exit",
        ForKeyword => "FOR_KEYWORD" = "for",
        FunctionKeyword => "FUNCTION_KEYWORD" = "function",
        GenericKeyword => "GENERIC_KEYWORD" = "generic",
        GotoKeyword => "GOTO_KEYWORD" = "goto",
        IfKeyword => "IF_KEYWORD" = "if",
        InKeyword => "IN_KEYWORD" = "in",
        InterfaceKeyword => "INTERFACE_KEYWORD" = "interface",
        IsKeyword => "IS_KEYWORD" = "is",
        LimitedKeyword => "LIMITED_KEYWORD" = "limited",
        LoopKeyword => "LOOP_KEYWORD" = "loop",
        ModKeyword => "MOD_KEYWORD" = "mod",
        NewKeyword => "NEW_KEYWORD" = "new",
        NotKeyword => "NOT_KEYWORD" = "not",
        NullKeyword => "NULL_KEYWORD" = "null",
        OfKeyword => "OF_KEYWORD" = "of",
        OrKeyword => "OR_KEYWORD" = "or",
        OthersKeyword => "OTHERS_KEYWORD" = "others",
        OutKeyword => "OUT_KEYWORD" = "out",
        OverridingKeyword => "OVERRIDING_KEYWORD" = "overriding",
        PackageKeyword => "PACKAGE_KEYWORD" = "package",
        PragmaKeyword => "PRAGMA_KEYWORD" = "pragma",
        PrivateKeyword => "PRIVATE_KEYWORD" = "private",
        ProcedureKeyword => "PROCEDURE_KEYWORD" = "procedure",
        ProtectedKeyword => "PROTECTED_KEYWORD" = "protected",
        RaiseKeyword => "RAISE_KEYWORD" = "raise",
        RangeKeyword => "RANGE_KEYWORD" = "range",
        RecordKeyword => "RECORD_KEYWORD" = "record",
        RemKeyword => "REM_KEYWORD" = "rem",
        RenamesKeyword => "RENAMES_KEYWORD" = "renames",
        RequeueKeyword => "REQUEUE_KEYWORD" = "requeue",
        ReturnKeyword => "RETURN_KEYWORD" = "return",
        ReverseKeyword => "REVERSE_KEYWORD" = "reverse",
        SelectKeyword => "SELECT_KEYWORD" = "select",
        SeparateKeyword => "SEPARATE_KEYWORD" = "separate",
        SomeKeyword => "SOME_KEYWORD" = "some",
        SubtypeKeyword => "SUBTYPE_KEYWORD" = "subtype",
        SynchronizedKeyword => "SYNCHRONIZED_KEYWORD" = "synchronized",
        TaggedKeyword => "TAGGED_KEYWORD" = "tagged",
        TaskKeyword => "TASK_KEYWORD" = "task",
        TerminateKeyword => "TERMINATE_KEYWORD" = "terminate",
        ThenKeyword => "THEN_KEYWORD" = "then",
        TypeKeyword => "TYPE_KEYWORD" = "type",
        UntilKeyword => "UNTIL_KEYWORD" = "until",
        UseKeyword => "USE_KEYWORD" = "use",
        WhenKeyword => "WHEN_KEYWORD" = "when",
        WhileKeyword => "WHILE_KEYWORD" = "while",
        WithKeyword => "WITH_KEYWORD" = "with",
        XorKeyword => "XOR_KEYWORD" = "xor",
    }
}

/// Reserved words and delimiters win ties against identifiers.
pub const FIXED_PRIORITY: Priority = 1;

pub const LITERALS: &[AdaTokenKind] = &[
    AdaTokenKind::DecimalLiteral,
    AdaTokenKind::BasedLiteral,
    AdaTokenKind::CharacterLiteral,
    AdaTokenKind::StringLiteral,
];

pub const COMMENTS: &[AdaTokenKind] = &[AdaTokenKind::Comment];

impl AdaTokenKind {
    pub fn is_keyword(&self) -> bool {
        self.is_reserved_word()
    }

    pub fn is_literal(&self) -> bool {
        LITERALS.contains(self)
    }
}

/// `digit {[_] digit}`
fn numeral() -> Result<Regex, RegexError> {
    let digit = digit()?;
    Ok(Regex::concatenation(
        digit.clone(),
        Regex::zero_or_more(Regex::concatenation(Regex::zero_or_one(Regex::unit("_")), digit)),
    ))
}

/// `E [+|-] numeral`, either case
fn exponent() -> Result<Regex, RegexError> {
    Regex::concatenation_of(vec![
        Regex::one_of("Ee")?,
        Regex::zero_or_one(Regex::one_of("+-")?),
        numeral()?,
    ])
}

/// `numeral [. numeral] [exponent]`
fn decimal_literal() -> Result<Regex, RegexError> {
    Regex::concatenation_of(vec![
        numeral()?,
        Regex::zero_or_one(Regex::concatenation(Regex::unit("."), numeral()?)),
        Regex::zero_or_one(exponent()?),
    ])
}

/// `base # based_numeral [. based_numeral] # [exponent]`
fn based_literal() -> Result<Regex, RegexError> {
    let extended_digit = Regex::union_of(vec![
        digit()?,
        Regex::range('A', 'F')?,
        Regex::range('a', 'f')?,
    ])?;
    let based_numeral = Regex::concatenation(
        extended_digit.clone(),
        Regex::zero_or_more(Regex::concatenation(
            Regex::zero_or_one(Regex::unit("_")),
            extended_digit,
        )),
    );
    Regex::concatenation_of(vec![
        numeral()?,
        Regex::unit("#"),
        based_numeral.clone(),
        Regex::zero_or_one(Regex::concatenation(Regex::unit("."), based_numeral)),
        Regex::unit("#"),
        Regex::zero_or_one(exponent()?),
    ])
}

/// `' graphic_character '`
fn character_literal() -> Result<Regex, RegexError> {
    Regex::concatenation_of(vec![Regex::unit("'"), graphic_character()?, Regex::unit("'")])
}

pub fn build_rules() -> Result<RuleTable<AdaTokenKind>, RegexError> {
    let mut table = RuleTable::new();
    table
        .register_rule(AdaTokenKind::WhiteSpace, whitespace()?, 0)
        .register_rule(AdaTokenKind::Identifier, identifier()?, 0)
        .register_rule(AdaTokenKind::DecimalLiteral, decimal_literal()?, 0)
        .register_rule(AdaTokenKind::BasedLiteral, based_literal()?, 0)
        .register_rule(AdaTokenKind::CharacterLiteral, character_literal()?, 0)
        .register_rule(AdaTokenKind::StringLiteral, string_literal()?, 0)
        .register_rule(AdaTokenKind::Comment, comment()?, 0)
        .register_fixed_kinds_ignoring_case(FIXED_PRIORITY)?;
    Ok(table)
}

static RULES: Lazy<RuleTable<AdaTokenKind>> = Lazy::new(|| expect_grammar("Ada", build_rules()));

/// The shared Ada rule table, built on first use.
pub fn rules() -> &'static RuleTable<AdaTokenKind> {
    &RULES
}

pub fn lexer() -> Lexer<'static, AdaTokenKind> {
    rules().lexer()
}

// Tests ///////////////////////////////////////////////////////////////////////
