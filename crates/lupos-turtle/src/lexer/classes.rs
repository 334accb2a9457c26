//! Character classes of the Turtle grammar as sorted range tables.
//!
//! Unions are spelled out (and adjacent ranges merged) instead of being
//! composed at run time, so that every lookup is a single binary search.

use super::automaton::{Class, Range};

const fn one(c: char) -> Range {
    Range(c as u32, c as u32)
}

pub(crate) const ANY: Class = &[Range(0, u32::MAX)];

pub(crate) const DIGIT: Class = &[Range(0x30, 0x39)];
pub(crate) const HEX: Class = &[Range(0x30, 0x39), Range(0x41, 0x46), Range(0x61, 0x66)];
pub(crate) const ALPHA: Class = &[Range(0x41, 0x5A), Range(0x61, 0x7A)];
pub(crate) const ALNUM: Class = &[Range(0x30, 0x39), Range(0x41, 0x5A), Range(0x61, 0x7A)];

/// Space, tab, CR and LF.
pub(crate) const WHITESPACE: Class = &[Range(0x09, 0x0A), one('\r'), one(' ')];
pub(crate) const EOL: Class = &[one('\n'), one('\r')];

/// Characters after `\` in a string: `tbnrf"'\`.
pub(crate) const ECHAR: Class = &[
    one('"'),
    one('\''),
    one('\\'),
    one('b'),
    one('f'),
    one('n'),
    one('r'),
    one('t'),
];

/// Characters after `\` in a local name: ``_~.-!$&'()*+,;=/?#@%``.
pub(crate) const PN_LOCAL_ESC: Class = &[
    one('!'),
    Range(0x23, 0x2F),
    one(';'),
    one('='),
    Range(0x3F, 0x40),
    one('_'),
    one('~'),
];

/// Forbidden inside `<...>` under strict IRI checking.
pub(crate) const IRI_FORBIDDEN: Class = &[
    Range(0x00, 0x20),
    one('"'),
    one('<'),
    one('^'),
    one('`'),
    Range(0x7B, 0x7D),
];

pub(crate) const PN_CHARS_BASE: Class = &[
    Range(0x41, 0x5A),
    Range(0x61, 0x7A),
    Range(0xC0, 0xD6),
    Range(0xD8, 0xF6),
    Range(0xF8, 0x2FF),
    Range(0x370, 0x37D),
    Range(0x37F, 0x1FFF),
    Range(0x200C, 0x200D),
    Range(0x2070, 0x218F),
    Range(0x2C00, 0x2FEF),
    Range(0x3001, 0xD7FF),
    Range(0xF900, 0xFDCF),
    Range(0xFDF0, 0xFFFD),
    Range(0x1_0000, 0xE_FFFF),
];

/// `PN_CHARS_U | [0-9]`: first character of a blank node label.
pub(crate) const PN_CHARS_U_DIGIT: Class = &[
    Range(0x30, 0x39),
    Range(0x41, 0x5A),
    one('_'),
    Range(0x61, 0x7A),
    Range(0xC0, 0xD6),
    Range(0xD8, 0xF6),
    Range(0xF8, 0x2FF),
    Range(0x370, 0x37D),
    Range(0x37F, 0x1FFF),
    Range(0x200C, 0x200D),
    Range(0x2070, 0x218F),
    Range(0x2C00, 0x2FEF),
    Range(0x3001, 0xD7FF),
    Range(0xF900, 0xFDCF),
    Range(0xFDF0, 0xFFFD),
    Range(0x1_0000, 0xE_FFFF),
];

/// `PN_CHARS_U | ':' | [0-9]`: first character of a local name.
pub(crate) const PNL_FIRST: Class = &[
    Range(0x30, 0x3A),
    Range(0x41, 0x5A),
    one('_'),
    Range(0x61, 0x7A),
    Range(0xC0, 0xD6),
    Range(0xD8, 0xF6),
    Range(0xF8, 0x2FF),
    Range(0x370, 0x37D),
    Range(0x37F, 0x1FFF),
    Range(0x200C, 0x200D),
    Range(0x2070, 0x218F),
    Range(0x2C00, 0x2FEF),
    Range(0x3001, 0xD7FF),
    Range(0xF900, 0xFDCF),
    Range(0xFDF0, 0xFFFD),
    Range(0x1_0000, 0xE_FFFF),
];

pub(crate) const PN_CHARS: Class = &[
    one('-'),
    Range(0x30, 0x39),
    Range(0x41, 0x5A),
    one('_'),
    Range(0x61, 0x7A),
    Range(0xB7, 0xB7),
    Range(0xC0, 0xD6),
    Range(0xD8, 0xF6),
    Range(0xF8, 0x37D),
    Range(0x37F, 0x1FFF),
    Range(0x200C, 0x200D),
    Range(0x203F, 0x2040),
    Range(0x2070, 0x218F),
    Range(0x2C00, 0x2FEF),
    Range(0x3001, 0xD7FF),
    Range(0xF900, 0xFDCF),
    Range(0xFDF0, 0xFFFD),
    Range(0x1_0000, 0xE_FFFF),
];

/// `PN_CHARS | ':'`: body of a local name.
pub(crate) const PN_CHARS_COLON: Class = &[
    one('-'),
    Range(0x30, 0x3A),
    Range(0x41, 0x5A),
    one('_'),
    Range(0x61, 0x7A),
    Range(0xB7, 0xB7),
    Range(0xC0, 0xD6),
    Range(0xD8, 0xF6),
    Range(0xF8, 0x37D),
    Range(0x37F, 0x1FFF),
    Range(0x200C, 0x200D),
    Range(0x203F, 0x2040),
    Range(0x2070, 0x218F),
    Range(0x2C00, 0x2FEF),
    Range(0x3001, 0xD7FF),
    Range(0xF900, 0xFDCF),
    Range(0xFDF0, 0xFFFD),
    Range(0x1_0000, 0xE_FFFF),
];

pub(crate) const AT: Class = &[one('@')];
pub(crate) const BACKSLASH: Class = &[one('\\')];
pub(crate) const CARET: Class = &[one('^')];
pub(crate) const COLON: Class = &[one(':')];
pub(crate) const COMMA: Class = &[one(',')];
pub(crate) const DOT: Class = &[one('.')];
pub(crate) const DQUOTE: Class = &[one('"')];
pub(crate) const EXPONENT: Class = &[one('E'), one('e')];
pub(crate) const GT: Class = &[one('>')];
pub(crate) const HASH: Class = &[one('#')];
pub(crate) const HYPHEN: Class = &[one('-')];
pub(crate) const LOWER_U: Class = &[one('u')];
pub(crate) const LT: Class = &[one('<')];
pub(crate) const PERCENT: Class = &[one('%')];
pub(crate) const SEMICOLON: Class = &[one(';')];
pub(crate) const SIGN: Class = &[one('+'), one('-')];
pub(crate) const SQUOTE: Class = &[one('\'')];
pub(crate) const UNDERSCORE: Class = &[one('_')];
pub(crate) const UPPER_U: Class = &[one('U')];

/// A single lowercase letter.
macro_rules! lower {
    ($c:literal) => {
        &[$crate::lexer::automaton::Range($c as u32, $c as u32)]
    };
}

/// An ASCII letter in either case.
macro_rules! either_case {
    ($upper:literal, $lower:literal) => {
        &[
            $crate::lexer::automaton::Range($upper as u32, $upper as u32),
            $crate::lexer::automaton::Range($lower as u32, $lower as u32),
        ]
    };
}

pub(crate) use {either_case, lower};
