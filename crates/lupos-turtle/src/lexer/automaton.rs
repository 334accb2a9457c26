//! Transition tables and their building blocks.
//!
//! Every recognizer is a graph of `static` [`State`]s. A state dispatches the
//! current code point through its ordered arms (first match wins), then
//! through the arms of its `via` state, and finally falls back to
//! `otherwise`. States refer to each other (and to themselves) by `&'static`
//! reference, so composites share sub-automata without copying them.

use core::{cmp::Ordering, fmt};

use crate::IriMode;

/// Grammar production a recognizer accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Production {
    /// `@base`
    Base,
    /// `@prefix`
    Prefix,
    /// `BASE`, any ASCII case.
    SparqlBase,
    /// `PREFIX`, any ASCII case.
    SparqlPrefix,
    /// `<...>`
    IriRef,
    /// `prefix:`, including the colon.
    PnameNs,
    /// The local part of a prefixed name, possibly empty.
    PnLocal,
    /// `_:label`
    BlankNodeLabel,
    /// `"..."`
    StringLiteralQuote,
    /// `'...'`
    StringLiteralSingleQuote,
    /// `"""..."""`
    StringLiteralLongQuote,
    /// `'''...'''`
    StringLiteralLongSingleQuote,
    /// `[+-]?[0-9]+`
    Integer,
    /// `[+-]?[0-9]*.[0-9]+`
    Decimal,
    /// Number with a mandatory exponent.
    Double,
    /// `true` or `false`
    Boolean,
    /// `@en-US`
    LangTag,
    /// `^^`
    Datatype,
    /// The `a` keyword.
    A,
    /// `;`
    PredicateList,
    /// `,`
    ObjectList,
    /// `.`
    Dot,
    /// A run of whitespace and comments, possibly empty.
    Whitespace,
}

/// Inclusive code point range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Range(pub(crate) u32, pub(crate) u32);

/// Sorted, disjoint ranges.
pub(crate) type Class = &'static [Range];

pub(crate) fn contains(class: &[Range], cp: u32) -> bool {
    class
        .binary_search_by(|r| {
            if r.1 < cp {
                Ordering::Less
            } else if r.0 > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Step {
    /// Accumulate the code point and move on.
    Take(&'static State),
    /// Consume the code point without accumulating it.
    Skip(&'static State),
    /// Consume the code point provisionally. A later `Take` keeps it; an
    /// accept puts it back into the input.
    Defer(&'static State),
    /// Accumulate the code point, then exactly this many hex digits.
    Hex(u8, &'static State),
    /// Accumulate the code point and accept.
    Finish(Production),
    /// Fail on this code point.
    Reject,
}

#[derive(Debug)]
pub(crate) struct Arm {
    pub(crate) class: Class,
    pub(crate) step: Step,
}

pub(crate) struct State {
    pub(crate) name: &'static str,
    pub(crate) arms: &'static [Arm],
    pub(crate) via: Option<&'static State>,
    /// Accepted without consuming when no arm matches or at end of input.
    pub(crate) otherwise: Option<Production>,
    /// Rejected before the arms are consulted, under [`IriMode::Strict`].
    pub(crate) strict_reject: Option<Class>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // States form cycles; print the name only.
        f.write_str(self.name)
    }
}

impl State {
    pub(crate) fn step_for(&self, cp: u32, iri: IriMode) -> Option<Step> {
        if iri == IriMode::Strict && self.strict_reject.is_some_and(|class| contains(class, cp)) {
            return Some(Step::Reject);
        }
        let delegated = self.via.map_or(&[][..], |via| via.arms);
        self.arms
            .iter()
            .chain(delegated)
            .find(|arm| contains(arm.class, cp))
            .map(|arm| arm.step)
    }
}

/// Builds a [`State`] literal.
///
/// `state!("name" { CLASS => step, ... } else otherwise)` or with a
/// delegate: `state!("name" { ... } via(&OTHER) else otherwise)`.
macro_rules! state {
    (@via) => { None };
    (@via $via:expr) => { Some($via) };
    ($name:literal { $($class:expr => $step:expr),* $(,)? } $(via($via:expr))? else $otherwise:expr) => {
        $crate::lexer::automaton::State {
            name: $name,
            arms: &[$($crate::lexer::automaton::Arm { class: $class, step: $step }),*],
            via: $crate::lexer::automaton::state!(@via $($via)?),
            otherwise: $otherwise,
            strict_reject: None,
        }
    };
}

pub(crate) use state;
