//! Quoted strings, numbers, booleans and language tags.

use super::{
    automaton::{Production::*, State, Step::*, state},
    classes::*,
};

pub(crate) static STRING_LITERAL: State = state!("string_literal" {
    DQUOTE => Take(&DQ_OPEN),
    SQUOTE => Take(&SQ_OPEN),
} else None);

// "..." and """..."""

/// After one `"`.
pub(crate) static DQ_OPEN: State = state!("string \" open" {
    DQUOTE => Take(&DQ_EMPTY),
    BACKSLASH => Take(&DQ_ESCAPE),
    EOL => Reject,
    ANY => Take(&DQ_BODY),
} else None);

/// After `""`: an empty string, or the start of a long one.
static DQ_EMPTY: State = state!("string \"\"" {
    DQUOTE => Take(&DQ_LONG_BODY),
} else Some(StringLiteralQuote));

static DQ_BODY: State = state!("string \" body" {
    DQUOTE => Finish(StringLiteralQuote),
    BACKSLASH => Take(&DQ_ESCAPE),
    EOL => Reject,
    ANY => Take(&DQ_BODY),
} else None);

static DQ_ESCAPE: State = state!("string \" escape" {
    ECHAR => Take(&DQ_BODY),
    LOWER_U => Hex(4, &DQ_BODY),
    UPPER_U => Hex(8, &DQ_BODY),
} else None);

static DQ_LONG_BODY: State = state!("string \"\"\" body" {
    DQUOTE => Take(&DQ_LONG_QUOTE1),
    BACKSLASH => Take(&DQ_LONG_ESCAPE),
    ANY => Take(&DQ_LONG_BODY),
} else None);

static DQ_LONG_QUOTE1: State = state!("string \"\"\" quote" {
    DQUOTE => Take(&DQ_LONG_QUOTE2),
    BACKSLASH => Take(&DQ_LONG_ESCAPE),
    ANY => Take(&DQ_LONG_BODY),
} else None);

static DQ_LONG_QUOTE2: State = state!("string \"\"\" quotes" {
    DQUOTE => Finish(StringLiteralLongQuote),
    BACKSLASH => Take(&DQ_LONG_ESCAPE),
    ANY => Take(&DQ_LONG_BODY),
} else None);

static DQ_LONG_ESCAPE: State = state!("string \"\"\" escape" {
    ECHAR => Take(&DQ_LONG_BODY),
    LOWER_U => Hex(4, &DQ_LONG_BODY),
    UPPER_U => Hex(8, &DQ_LONG_BODY),
} else None);

// '...' and '''...'''

pub(crate) static SQ_OPEN: State = state!("string ' open" {
    SQUOTE => Take(&SQ_EMPTY),
    BACKSLASH => Take(&SQ_ESCAPE),
    EOL => Reject,
    ANY => Take(&SQ_BODY),
} else None);

static SQ_EMPTY: State = state!("string ''" {
    SQUOTE => Take(&SQ_LONG_BODY),
} else Some(StringLiteralSingleQuote));

static SQ_BODY: State = state!("string ' body" {
    SQUOTE => Finish(StringLiteralSingleQuote),
    BACKSLASH => Take(&SQ_ESCAPE),
    EOL => Reject,
    ANY => Take(&SQ_BODY),
} else None);

static SQ_ESCAPE: State = state!("string ' escape" {
    ECHAR => Take(&SQ_BODY),
    LOWER_U => Hex(4, &SQ_BODY),
    UPPER_U => Hex(8, &SQ_BODY),
} else None);

static SQ_LONG_BODY: State = state!("string ''' body" {
    SQUOTE => Take(&SQ_LONG_QUOTE1),
    BACKSLASH => Take(&SQ_LONG_ESCAPE),
    ANY => Take(&SQ_LONG_BODY),
} else None);

static SQ_LONG_QUOTE1: State = state!("string ''' quote" {
    SQUOTE => Take(&SQ_LONG_QUOTE2),
    BACKSLASH => Take(&SQ_LONG_ESCAPE),
    ANY => Take(&SQ_LONG_BODY),
} else None);

static SQ_LONG_QUOTE2: State = state!("string ''' quotes" {
    SQUOTE => Finish(StringLiteralLongSingleQuote),
    BACKSLASH => Take(&SQ_LONG_ESCAPE),
    ANY => Take(&SQ_LONG_BODY),
} else None);

static SQ_LONG_ESCAPE: State = state!("string ''' escape" {
    ECHAR => Take(&SQ_LONG_BODY),
    LOWER_U => Hex(4, &SQ_LONG_BODY),
    UPPER_U => Hex(8, &SQ_LONG_BODY),
} else None);

// Numbers

pub(crate) static NUMERIC: State = state!("numeric" {
    SIGN => Take(&NUMERIC_SIGN),
    DIGIT => Take(&NUMERIC_INTEGER),
    DOT => Take(&NUMERIC_LEADING_DOT),
} else None);

pub(crate) static NUMERIC_SIGN: State = state!("numeric sign" {
    DIGIT => Take(&NUMERIC_INTEGER),
    DOT => Take(&NUMERIC_LEADING_DOT),
} else None);

pub(crate) static NUMERIC_INTEGER: State = state!("numeric integer" {
    DIGIT => Take(&NUMERIC_INTEGER),
    DOT => Defer(&NUMERIC_INTEGER_DOT),
    EXPONENT => Take(&NUMERIC_EXPONENT),
} else Some(Integer));

/// `123.` so far; without a digit or exponent next, the dot ends the
/// statement instead.
static NUMERIC_INTEGER_DOT: State = state!("numeric integer dot" {
    DIGIT => Take(&NUMERIC_FRACTION),
    EXPONENT => Take(&NUMERIC_EXPONENT),
} else Some(Integer));

pub(crate) static NUMERIC_LEADING_DOT: State = state!("numeric leading dot" {
    DIGIT => Take(&NUMERIC_FRACTION),
} else None);

static NUMERIC_FRACTION: State = state!("numeric fraction" {
    DIGIT => Take(&NUMERIC_FRACTION),
    EXPONENT => Take(&NUMERIC_EXPONENT),
} else Some(Decimal));

static NUMERIC_EXPONENT: State = state!("numeric exponent" {
    SIGN => Take(&NUMERIC_EXPONENT_SIGN),
    DIGIT => Take(&NUMERIC_EXPONENT_DIGITS),
} else None);

static NUMERIC_EXPONENT_SIGN: State = state!("numeric exponent sign" {
    DIGIT => Take(&NUMERIC_EXPONENT_DIGITS),
} else None);

static NUMERIC_EXPONENT_DIGITS: State = state!("numeric exponent digits" {
    DIGIT => Take(&NUMERIC_EXPONENT_DIGITS),
} else Some(Double));

// Booleans

pub(crate) static BOOLEAN: State = state!("boolean" {
    lower!('t') => Take(&BOOLEAN_T),
    lower!('f') => Take(&BOOLEAN_F),
} else None);

static BOOLEAN_T: State = state!("boolean t" { lower!('r') => Take(&BOOLEAN_TR) } else None);
static BOOLEAN_TR: State = state!("boolean tr" { lower!('u') => Take(&BOOLEAN_TRU) } else None);
static BOOLEAN_TRU: State = state!("boolean tru" { lower!('e') => Finish(Boolean) } else None);
static BOOLEAN_F: State = state!("boolean f" { lower!('a') => Take(&BOOLEAN_FA) } else None);
static BOOLEAN_FA: State = state!("boolean fa" { lower!('l') => Take(&BOOLEAN_FAL) } else None);
static BOOLEAN_FAL: State = state!("boolean fal" { lower!('s') => Take(&BOOLEAN_FALS) } else None);
static BOOLEAN_FALS: State = state!("boolean fals" { lower!('e') => Finish(Boolean) } else None);

// Language tags

pub(crate) static LANG_TAG: State = state!("lang_tag" {
    AT => Take(&LANG_TAG_FIRST),
} else None);

pub(crate) static LANG_TAG_FIRST: State = state!("lang_tag first" {
    ALPHA => Take(&LANG_TAG_PRIMARY),
} else None);

static LANG_TAG_PRIMARY: State = state!("lang_tag primary" {
    ALPHA => Take(&LANG_TAG_PRIMARY),
    HYPHEN => Take(&LANG_TAG_SUBTAG_FIRST),
} else Some(LangTag));

static LANG_TAG_SUBTAG_FIRST: State = state!("lang_tag subtag first" {
    ALNUM => Take(&LANG_TAG_SUBTAG),
} else None);

static LANG_TAG_SUBTAG: State = state!("lang_tag subtag" {
    ALNUM => Take(&LANG_TAG_SUBTAG),
    HYPHEN => Take(&LANG_TAG_SUBTAG_FIRST),
} else Some(LangTag));
