use rstest::rstest;

use super::utils::recognize_one;
use crate::{IriMode, LexerOptions, Recognizer};

fn run(recognizer: Recognizer, input: &str) -> alloc::string::String {
    recognize_one(input, recognizer, LexerOptions::default())
}

#[rstest]
#[case::integer("123", "1:1 Integer 123 | end")]
#[case::decimal("123.45", "1:1 Decimal 123.45 | end")]
#[case::double("123.45e6", "1:1 Double 123.45e6 | end")]
#[case::double_without_fraction("123e6", "1:1 Double 123e6 | end")]
#[case::plus("+5", "1:1 Integer +5 | end")]
#[case::minus("-5 .", "1:1 Integer -5 | ' ' at 1:3")]
#[case::leading_dot(".5", "1:1 Decimal .5 | end")]
#[case::trailing_dot("1.", "1:1 Integer 1 | '.' at 1:2")]
#[case::dot_then_name("1.x", "1:1 Integer 1 | '.' at 1:2")]
#[case::dot_then_exponent("1.e3", "1:1 Double 1.e3 | end")]
#[case::signed_exponent("-1.5E-3,", "1:1 Double -1.5E-3 | ',' at 1:8")]
#[case::missing_exponent("1e", "1:3 error PrematureEndOfStream")]
#[case::bad_exponent("1e+x", "1:4 error UnexpectedCharacter(120)")]
#[case::lone_sign("+", "1:2 error PrematureEndOfStream")]
#[case::not_a_number("x", "1:1 error UnexpectedCharacter(120)")]
fn numeric(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(Recognizer::Numeric, input), expected);
}

#[rstest]
#[case::prefix("@prefix ex:", "1:1 Prefix @prefix | ' ' at 1:8")]
#[case::base("@base <", "1:1 Base @base | ' ' at 1:6")]
#[case::sparql_base("BASE <", "1:1 SparqlBase BASE | ' ' at 1:5")]
#[case::sparql_base_lowercase("base<", "1:1 SparqlBase base | '<' at 1:5")]
#[case::sparql_prefix_mixed_case("PrEfIx ex:", "1:1 SparqlPrefix PrEfIx | ' ' at 1:7")]
#[case::keyword_then_prefix("BASEx: ", "1:1 PnameNs BASEx: | ' ' at 1:7")]
#[case::keyword_letter_prefix("B:x", "1:1 PnameNs B: | 'x' at 1:3")]
#[case::keyword_as_prefix("prefix:", "1:1 PnameNs prefix: | end")]
#[case::iri("<http://example.org/x> ", "1:1 IriRef <http://example.org/x> | ' ' at 1:23")]
#[case::blank_node("_:b1 ", "1:1 BlankNodeLabel _:b1 | ' ' at 1:5")]
#[case::empty_prefix(": ", "1:1 PnameNs : | ' ' at 1:2")]
#[case::dotted_prefix("ex.a:", "1:1 PnameNs ex.a: | end")]
#[case::misspelled_prefix("@prefxi", "1:6 error UnexpectedCharacter(120)")]
#[case::uppercase_directive("@Prefix", "1:2 error UnexpectedCharacter(80)")]
#[case::truncated_keyword("BAS ", "1:4 error UnexpectedCharacter(32)")]
#[case::prefix_ending_in_dot("ex.:", "1:4 error UnexpectedCharacter(58)")]
fn statement(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(Recognizer::Statement, input), expected);
}

#[rstest]
#[case::predicate_list(";", "1:1 PredicateList ; | end")]
#[case::object_list(",", "1:1 ObjectList , | end")]
#[case::dot(".", "1:1 Dot . | end")]
#[case::other("x", "1:1 error UnexpectedCharacter(120)")]
fn triple_end(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(Recognizer::TripleEnd, input), expected);
}

#[rstest]
#[case::escaped_quote(r#""abc\"def" ."#, r#"1:1 StringLiteralQuote "abc\"def" | ' ' at 1:11"#)]
#[case::single_quote("'x'", "1:1 StringLiteralSingleQuote 'x' | end")]
#[case::long_with_inner_quotes(r#""""a"b""c""""#, r#"1:1 StringLiteralLongQuote """a"b""c""" | end"#)]
#[case::long_single_empty("''''''", "1:1 StringLiteralLongSingleQuote '''''' | end")]
#[case::empty(r#""" x"#, r#"1:1 StringLiteralQuote "" | ' ' at 1:3"#)]
#[case::uchar(r#""\u00e9""#, r#"1:1 StringLiteralQuote "\u00e9" | end"#)]
#[case::long_with_newline("\"\"\"a\nb\"\"\"", "1:1 StringLiteralLongQuote \"\"\"a\nb\"\"\" | end")]
#[case::raw_newline("\"a\nb\"", "1:3 error UnexpectedCharacter(10)")]
#[case::bad_escape(r#""\q""#, "1:3 error UnexpectedCharacter(113)")]
#[case::bad_uchar(r#""\u00g""#, "1:6 error UnexpectedCharacter(103)")]
#[case::unterminated("\"abc", "1:5 error PrematureEndOfStream")]
fn string_literal(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(Recognizer::StringLiteral, input), expected);
}

#[rstest]
#[case::plain("<http://a/b>", "1:1 IriRef <http://a/b> | end")]
#[case::uchar(r"<a\u0041>", r"1:1 IriRef <a\u0041> | end")]
#[case::space_is_permitted("<a b>", "1:1 IriRef <a b> | end")]
#[case::unterminated("<http://exa", "1:12 error PrematureEndOfStream")]
#[case::bad_escape(r"<a\x>", "1:4 error UnexpectedCharacter(120)")]
fn iri_ref(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(Recognizer::IriRef, input), expected);
}

#[rstest]
#[case::space("<a b>", "1:3 error UnexpectedCharacter(32)")]
#[case::brace("<a{b>", "1:3 error UnexpectedCharacter(123)")]
#[case::clean("<http://a/b#c>", "1:1 IriRef <http://a/b#c> | end")]
fn iri_ref_strict(#[case] input: &str, #[case] expected: &str) {
    let options = LexerOptions {
        iri: IriMode::Strict,
        ..LexerOptions::default()
    };
    assert_eq!(recognize_one(input, Recognizer::IriRef, options), expected);
}

#[rstest]
#[case::pname_ns(Recognizer::PnameNs, "ex:foo", "1:1 PnameNs ex: | 'f' at 1:4")]
#[case::trailing_dot(Recognizer::PnLocal, "foo.bar. ", "1:1 PnLocal foo.bar | '.' at 1:8")]
#[case::percent(Recognizer::PnLocal, "a%20b ", "1:1 PnLocal a%20b | ' ' at 1:6")]
#[case::escape(Recognizer::PnLocal, r"a\.b", r"1:1 PnLocal a\.b | end")]
#[case::short_percent(Recognizer::PnLocal, "%2", "1:3 error PrematureEndOfStream")]
#[case::empty(Recognizer::PnLocal, " ", "1:1 PnLocal  | ' ' at 1:1")]
#[case::inner_dots(Recognizer::PnLocal, "a..b ", "1:1 PnLocal a..b | ' ' at 1:5")]
#[case::trailing_dots(Recognizer::PnLocal, "a.. ", "1:1 PnLocal a | '.' at 1:2")]
#[case::digits_and_colons(Recognizer::PnLocal, "0:x", "1:1 PnLocal 0:x | end")]
#[case::label_trailing_dot(Recognizer::BlankNodeLabel, "_:b.", "1:1 BlankNodeLabel _:b | '.' at 1:4")]
#[case::label_digit(Recognizer::BlankNodeLabel, "_:1a ", "1:1 BlankNodeLabel _:1a | ' ' at 1:5")]
#[case::label_inner_dot(Recognizer::BlankNodeLabel, "_:a.b", "1:1 BlankNodeLabel _:a.b | end")]
#[case::label_leading_dot(Recognizer::BlankNodeLabel, "_:.a", "1:3 error UnexpectedCharacter(46)")]
#[case::label_without_colon(Recognizer::BlankNodeLabel, "_x", "1:2 error UnexpectedCharacter(120)")]
fn names(#[case] recognizer: Recognizer, #[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(recognizer, input), expected);
}

#[rstest]
#[case::lang_tag(Recognizer::LangTag, "@en-US .", "1:1 LangTag @en-US | ' ' at 1:7")]
#[case::lang_tag_dangling_hyphen(Recognizer::LangTag, "@en-", "1:5 error PrematureEndOfStream")]
#[case::lang_tag_digit(Recognizer::LangTag, "@1", "1:2 error UnexpectedCharacter(49)")]
#[case::boolean_true(Recognizer::Boolean, "true", "1:1 Boolean true | end")]
#[case::boolean_false(Recognizer::Boolean, "false.", "1:1 Boolean false | '.' at 1:6")]
#[case::boolean_truncated(Recognizer::Boolean, "tru", "1:4 error PrematureEndOfStream")]
#[case::boolean_misspelled(Recognizer::Boolean, "trux", "1:4 error UnexpectedCharacter(120)")]
#[case::suffix_datatype(Recognizer::LiteralSuffix, "^^<x>", "1:1 Datatype ^^ | '<' at 1:3")]
#[case::suffix_lang(Recognizer::LiteralSuffix, "@en .", "1:1 LangTag @en | ' ' at 1:4")]
#[case::suffix_terminator(Recognizer::LiteralSuffix, ",", "1:1 ObjectList , | end")]
#[case::suffix_single_caret(Recognizer::LiteralSuffix, "^x", "1:2 error UnexpectedCharacter(120)")]
#[case::datatype_pname(Recognizer::DatatypeIri, "xsd:int", "1:1 PnameNs xsd: | 'i' at 1:5")]
#[case::datatype_iri(Recognizer::DatatypeIri, "<x>", "1:1 IriRef <x> | end")]
fn literal_parts(#[case] recognizer: Recognizer, #[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(recognizer, input), expected);
}

#[rstest]
#[case::boolean("true.", "1:1 Boolean true | '.' at 1:5")]
#[case::boolean_dot_prefix("true.x:", "1:1 PnameNs true.x: | end")]
#[case::boolean_like_prefix("trueish:a", "1:1 PnameNs trueish: | 'a' at 1:9")]
#[case::short_prefix("tr:", "1:1 PnameNs tr: | end")]
#[case::boolean_false("false ", "1:1 Boolean false | ' ' at 1:6")]
#[case::iri("<x>", "1:1 IriRef <x> | end")]
#[case::blank_node("_:b", "1:1 BlankNodeLabel _:b | end")]
#[case::string("'s'", "1:1 StringLiteralSingleQuote 's' | end")]
#[case::negative("-1", "1:1 Integer -1 | end")]
#[case::leading_dot(".5", "1:1 Decimal .5 | end")]
#[case::lone_letter("t ", "1:2 error UnexpectedCharacter(32)")]
#[case::lone_dot(". ", "1:2 error UnexpectedCharacter(32)")]
fn object(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(Recognizer::Object, input), expected);
}

#[rstest]
#[case::a("a <", "1:1 A a | ' ' at 1:2")]
#[case::a_prefix("ab:c", "1:1 PnameNs ab: | 'c' at 1:4")]
#[case::a_colon("a:", "1:1 PnameNs a: | end")]
#[case::predicate_list(";", "1:1 PredicateList ; | end")]
#[case::dot(".", "1:1 Dot . | end")]
#[case::iri("<p>", "1:1 IriRef <p> | end")]
fn predicate(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(Recognizer::Predicate, input), expected);
}

#[rstest]
#[case::comment("  # comment\n\t x", "1:1 Whitespace  | 'x' at 2:3")]
#[case::empty_input("", "1:1 Whitespace  | end")]
#[case::only_comment("# only comment", "1:1 Whitespace  | end")]
#[case::crlf("\r\n\r\nx", "1:1 Whitespace  | 'x' at 3:1")]
#[case::nothing_to_skip("x", "1:1 Whitespace  | 'x' at 1:1")]
fn whitespace(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(Recognizer::Whitespace, input), expected);
}
