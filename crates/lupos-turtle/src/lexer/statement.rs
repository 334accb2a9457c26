//! Composite entry points: statement start, predicate, object, literal
//! suffix and datatype positions, terminators and whitespace.
//!
//! Keywords (`@base`, `BASE`, `a`, `true`, ...) are spelled out one state per
//! letter. Bare keywords share their first letters with prefixed names, so
//! each keyword state delegates to [`PNAME_NS_BODY`] once the input stops
//! spelling the keyword.

use super::{
    automaton::{Production::*, State, Step::*, state},
    classes::*,
    literals::{
        DQ_OPEN, LANG_TAG_FIRST, NUMERIC_INTEGER, NUMERIC_LEADING_DOT, NUMERIC_SIGN, SQ_OPEN,
    },
    terms::{BLANK_NODE_COLON, IRI_BODY, PNAME_NS_BODY},
};

pub(crate) static STATEMENT: State = state!("statement" {
    AT => Take(&DIRECTIVE_AT),
    LT => Take(&IRI_BODY),
    UNDERSCORE => Take(&BLANK_NODE_COLON),
    COLON => Finish(PnameNs),
    either_case!('B', 'b') => Take(&SPARQL_B),
    either_case!('P', 'p') => Take(&SPARQL_P),
    PN_CHARS_BASE => Take(&PNAME_NS_BODY),
} else None);

static DIRECTIVE_AT: State = state!("directive @" {
    lower!('b') => Take(&AT_B),
    lower!('p') => Take(&AT_P),
} else None);

static AT_B: State = state!("directive @b" { lower!('a') => Take(&AT_BA) } else None);
static AT_BA: State = state!("directive @ba" { lower!('s') => Take(&AT_BAS) } else None);
static AT_BAS: State = state!("directive @bas" { lower!('e') => Finish(Base) } else None);
static AT_P: State = state!("directive @p" { lower!('r') => Take(&AT_PR) } else None);
static AT_PR: State = state!("directive @pr" { lower!('e') => Take(&AT_PRE) } else None);
static AT_PRE: State = state!("directive @pre" { lower!('f') => Take(&AT_PREF) } else None);
static AT_PREF: State = state!("directive @pref" { lower!('i') => Take(&AT_PREFI) } else None);
static AT_PREFI: State = state!("directive @prefi" { lower!('x') => Finish(Prefix) } else None);

static SPARQL_B: State = state!("BASE b" {
    either_case!('A', 'a') => Take(&SPARQL_BA),
} via(&PNAME_NS_BODY) else None);

static SPARQL_BA: State = state!("BASE ba" {
    either_case!('S', 's') => Take(&SPARQL_BAS),
} via(&PNAME_NS_BODY) else None);

static SPARQL_BAS: State = state!("BASE bas" {
    either_case!('E', 'e') => Take(&SPARQL_BASE),
} via(&PNAME_NS_BODY) else None);

static SPARQL_BASE: State = state!("BASE" {} via(&PNAME_NS_BODY) else Some(SparqlBase));

static SPARQL_P: State = state!("PREFIX p" {
    either_case!('R', 'r') => Take(&SPARQL_PR),
} via(&PNAME_NS_BODY) else None);

static SPARQL_PR: State = state!("PREFIX pr" {
    either_case!('E', 'e') => Take(&SPARQL_PRE),
} via(&PNAME_NS_BODY) else None);

static SPARQL_PRE: State = state!("PREFIX pre" {
    either_case!('F', 'f') => Take(&SPARQL_PREF),
} via(&PNAME_NS_BODY) else None);

static SPARQL_PREF: State = state!("PREFIX pref" {
    either_case!('I', 'i') => Take(&SPARQL_PREFI),
} via(&PNAME_NS_BODY) else None);

static SPARQL_PREFI: State = state!("PREFIX prefi" {
    either_case!('X', 'x') => Take(&SPARQL_PREFIX),
} via(&PNAME_NS_BODY) else None);

static SPARQL_PREFIX: State = state!("PREFIX" {} via(&PNAME_NS_BODY) else Some(SparqlPrefix));

pub(crate) static PREDICATE: State = state!("predicate" {
    LT => Take(&IRI_BODY),
    lower!('a') => Take(&PREDICATE_A),
    COLON => Finish(PnameNs),
    PN_CHARS_BASE => Take(&PNAME_NS_BODY),
    SEMICOLON => Finish(PredicateList),
    DOT => Finish(Dot),
} else None);

static PREDICATE_A: State = state!("predicate a" {} via(&PNAME_NS_BODY) else Some(A));

pub(crate) static OBJECT: State = state!("object" {
    LT => Take(&IRI_BODY),
    UNDERSCORE => Take(&BLANK_NODE_COLON),
    DQUOTE => Take(&DQ_OPEN),
    SQUOTE => Take(&SQ_OPEN),
    SIGN => Take(&NUMERIC_SIGN),
    DIGIT => Take(&NUMERIC_INTEGER),
    DOT => Defer(&NUMERIC_LEADING_DOT),
    lower!('t') => Take(&OBJECT_T),
    lower!('f') => Take(&OBJECT_F),
    COLON => Finish(PnameNs),
    PN_CHARS_BASE => Take(&PNAME_NS_BODY),
} else None);

static OBJECT_T: State = state!("object t" {
    lower!('r') => Take(&OBJECT_TR),
} via(&PNAME_NS_BODY) else None);

static OBJECT_TR: State = state!("object tr" {
    lower!('u') => Take(&OBJECT_TRU),
} via(&PNAME_NS_BODY) else None);

static OBJECT_TRU: State = state!("object tru" {
    lower!('e') => Take(&OBJECT_BOOLEAN),
} via(&PNAME_NS_BODY) else None);

static OBJECT_F: State = state!("object f" {
    lower!('a') => Take(&OBJECT_FA),
} via(&PNAME_NS_BODY) else None);

static OBJECT_FA: State = state!("object fa" {
    lower!('l') => Take(&OBJECT_FAL),
} via(&PNAME_NS_BODY) else None);

static OBJECT_FAL: State = state!("object fal" {
    lower!('s') => Take(&OBJECT_FALS),
} via(&PNAME_NS_BODY) else None);

static OBJECT_FALS: State = state!("object fals" {
    lower!('e') => Take(&OBJECT_BOOLEAN),
} via(&PNAME_NS_BODY) else None);

/// `true` or `false` read; a dot may still turn it into a prefix.
static OBJECT_BOOLEAN: State = state!("object boolean" {
    DOT => Defer(&OBJECT_BOOLEAN_DOT),
} via(&PNAME_NS_BODY) else Some(Boolean));

static OBJECT_BOOLEAN_DOT: State = state!("object boolean dot" {
    PN_CHARS => Take(&PNAME_NS_BODY),
    DOT => Defer(&OBJECT_BOOLEAN_DOT),
} else Some(Boolean));

pub(crate) static TRIPLE_END: State = state!("triple_end" {
    SEMICOLON => Finish(PredicateList),
    COMMA => Finish(ObjectList),
    DOT => Finish(Dot),
} else None);

pub(crate) static LITERAL_SUFFIX: State = state!("literal_suffix" {
    AT => Take(&LANG_TAG_FIRST),
    CARET => Take(&LITERAL_SUFFIX_CARET),
    SEMICOLON => Finish(PredicateList),
    COMMA => Finish(ObjectList),
    DOT => Finish(Dot),
} else None);

static LITERAL_SUFFIX_CARET: State = state!("literal_suffix ^" {
    CARET => Finish(Datatype),
} else None);

pub(crate) static DATATYPE_IRI: State = state!("datatype_iri" {
    LT => Take(&IRI_BODY),
    COLON => Finish(PnameNs),
    PN_CHARS_BASE => Take(&PNAME_NS_BODY),
} else None);

pub(crate) static WHITESPACE_RUN: State = state!("whitespace" {
    WHITESPACE => Skip(&WHITESPACE_RUN),
    HASH => Skip(&COMMENT),
} else Some(Whitespace));

static COMMENT: State = state!("comment" {
    EOL => Skip(&WHITESPACE_RUN),
    ANY => Skip(&COMMENT),
} else Some(Whitespace));
