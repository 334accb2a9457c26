use alloc::string::String;
use core::fmt;

/// `http://www.w3.org/2001/XMLSchema#integer`
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `http://www.w3.org/2001/XMLSchema#decimal`
pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
/// `http://www.w3.org/2001/XMLSchema#double`
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
/// `http://www.w3.org/2001/XMLSchema#boolean`
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
/// `http://www.w3.org/1999/02/22-rdf-syntax-ns#type`, spelled `a` in Turtle.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// An RDF literal with its escapes decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// Lexical form.
    pub lexical: String,
    /// Datatype IRI; `None` for simple and language-tagged strings.
    pub datatype: Option<String>,
    /// Language tag without the `@`.
    pub language: Option<String>,
}

/// A subject, predicate or object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// An IRI, resolved against the base when one is known.
    Iri(String),
    /// A blank node label without the `_:`.
    BlankNode(String),
    /// A literal.
    Literal(Literal),
}

/// One statement of the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple {
    /// IRI or blank node.
    pub subject: Term,
    /// Always an IRI.
    pub predicate: Term,
    /// Any term.
    pub object: Term,
}

impl Literal {
    pub(crate) fn typed(lexical: String, datatype: &str) -> Self {
        Self {
            lexical,
            datatype: Some(datatype.into()),
            language: None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                _ => fmt::Write::write_char(f, c)?,
            }
        }
        f.write_str("\"")?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")
        } else if let Some(datatype) = &self.datatype {
            write!(f, "^^<{datatype}>")
        } else {
            Ok(())
        }
    }
}

/// N-Triples syntax.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(label) => write!(f, "_:{label}"),
            Term::Literal(literal) => fmt::Display::fmt(literal, f),
        }
    }
}

/// One N-Triples line, without the line break.
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_is_ntriples() {
        let triple = Triple {
            subject: Term::BlankNode("b0".into()),
            predicate: Term::Iri(RDF_TYPE.into()),
            object: Term::Literal(Literal {
                lexical: "say \"hi\"\n".into(),
                datatype: None,
                language: Some("en".into()),
            }),
        };
        insta::assert_snapshot!(triple.to_string(), @r#"_:b0 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> "say \"hi\"\n"@en ."#);
    }

    #[test]
    fn typed_literal_display() {
        let literal = Literal::typed("42".into(), XSD_INTEGER);
        assert_eq!(
            literal.to_string(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }
}
