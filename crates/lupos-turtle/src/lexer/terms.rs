//! IRI references, prefixed names and blank node labels.

use super::{
    automaton::{Arm, Production::*, State, Step::*, state},
    classes::*,
};

pub(crate) static IRI_REF: State = state!("iri_ref" {
    LT => Take(&IRI_BODY),
} else None);

pub(crate) static IRI_BODY: State = State {
    name: "iri_ref body",
    arms: &[
        Arm { class: GT, step: Finish(IriRef) },
        Arm { class: BACKSLASH, step: Take(&IRI_ESCAPE) },
        Arm { class: ANY, step: Take(&IRI_BODY) },
    ],
    via: None,
    otherwise: None,
    strict_reject: Some(IRI_FORBIDDEN),
};

static IRI_ESCAPE: State = state!("iri_ref escape" {
    LOWER_U => Hex(4, &IRI_BODY),
    UPPER_U => Hex(8, &IRI_BODY),
} else None);

pub(crate) static PNAME_NS: State = state!("pname_ns" {
    COLON => Finish(PnameNs),
    PN_CHARS_BASE => Take(&PNAME_NS_BODY),
} else None);

/// Inside a prefix, after its first character. Also the fallback of keyword
/// states once the input stops spelling the keyword.
pub(crate) static PNAME_NS_BODY: State = state!("pname_ns body" {
    COLON => Finish(PnameNs),
    PN_CHARS => Take(&PNAME_NS_BODY),
    DOT => Take(&PNAME_NS_DOT),
} else None);

/// A prefix may contain dots but must not end with one.
static PNAME_NS_DOT: State = state!("pname_ns dot" {
    PN_CHARS => Take(&PNAME_NS_BODY),
    DOT => Take(&PNAME_NS_DOT),
} else None);

pub(crate) static PN_LOCAL: State = state!("pn_local" {
    PNL_FIRST => Take(&PN_LOCAL_BODY),
    PERCENT => Hex(2, &PN_LOCAL_BODY),
    BACKSLASH => Take(&PN_LOCAL_ESCAPE),
} else Some(PnLocal));

/// Dots are deferred: they stay in the name only when more name follows.
static PN_LOCAL_BODY: State = state!("pn_local body" {
    PN_CHARS_COLON => Take(&PN_LOCAL_BODY),
    PERCENT => Hex(2, &PN_LOCAL_BODY),
    BACKSLASH => Take(&PN_LOCAL_ESCAPE),
    DOT => Defer(&PN_LOCAL_BODY),
} else Some(PnLocal));

static PN_LOCAL_ESCAPE: State = state!("pn_local escape" {
    PN_LOCAL_ESC => Take(&PN_LOCAL_BODY),
} else None);

pub(crate) static BLANK_NODE_LABEL: State = state!("blank_node_label" {
    UNDERSCORE => Take(&BLANK_NODE_COLON),
} else None);

pub(crate) static BLANK_NODE_COLON: State = state!("blank_node_label colon" {
    COLON => Take(&BLANK_NODE_FIRST),
} else None);

static BLANK_NODE_FIRST: State = state!("blank_node_label first" {
    PN_CHARS_U_DIGIT => Take(&BLANK_NODE_BODY),
} else None);

static BLANK_NODE_BODY: State = state!("blank_node_label body" {
    PN_CHARS => Take(&BLANK_NODE_BODY),
    DOT => Defer(&BLANK_NODE_BODY),
} else Some(BlankNodeLabel));
