//! URL templates with `{placeholder}` markers.

use crate::encoding::{self, table};
use crate::error::TemplateError;

/// Replacement values for the `{placeholder}` markers in a URL template.
///
/// # Examples
///
/// ```
/// use urlsmith::{Placeholders, Url};
///
/// let vars = Placeholders::new().insert("term", "c++ & rust");
/// let url = Url::parse_template("https://example.com/search?q={term}", &vars)?;
/// assert_eq!(url.render(), "https://example.com/search?q=c%2B%2B%20%26%20rust");
/// # Ok::<_, urlsmith::error::TemplateError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placeholders {
    entries: Vec<(String, String)>,
}

impl Placeholders {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Placeholders {
        Placeholders::default()
    }

    /// Adds a replacement value, overwriting an earlier one with the same name.
    #[must_use]
    pub fn insert(mut self, name: impl Into<String>, value: impl Into<String>) -> Placeholders {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|entry| entry.0 == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Returns the replacement value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.0 == name)
            .map(|entry| entry.1.as_str())
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Placeholders {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Placeholders {
        iter.into_iter()
            .fold(Placeholders::new(), |vars, (name, value)| {
                vars.insert(name, value)
            })
    }
}

/// Expands every `{identifier}` marker, percent-encoding each replacement
/// value with the query table. Brace spans that are not identifiers stay
/// literal.
pub(crate) fn expand(template: &str, placeholders: &Placeholders) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];
        match rest[1..].find('}') {
            Some(len) if is_identifier(&rest[1..1 + len]) => {
                let name = &rest[1..1 + len];
                match placeholders.get(name) {
                    Some(value) => encoding::encode_to(value, table::QUERY_PART, &mut out),
                    None => {
                        return Err(TemplateError::Unresolved {
                            name: name.to_owned(),
                        });
                    }
                }
                rest = &rest[len + 2..];
            }
            _ => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// identifier = ( ALPHA / "_" ) *( ALPHA / DIGIT / "_" )
fn is_identifier(s: &str) -> bool {
    matches!(s.as_bytes(), [first, rem @ ..]
        if (first.is_ascii_alphabetic() || *first == b'_')
            && rem.iter().all(|x| x.is_ascii_alphanumeric() || *x == b'_'))
}
