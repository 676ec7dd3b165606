//! Search, filtering, and highlighting over extracted entities
//!
//! One compiled filter is applied uniformly to every entity kind: an
//! entity matches when any of its searchable fields matches (name first,
//! short-circuiting), and highlighting wraps match spans in a fixed
//! emphasis marker on copies produced at render time.

use regex::{Regex, RegexBuilder};

use crate::error::{CodesiftError, Result};
use crate::schema::{ClassEntity, ComponentEntity, EntitySet, FunctionEntity, Query};

/// Fixed emphasis marker wrapped around match spans
pub const HIGHLIGHT_MARK: &str = "**";

/// A compiled search specification
pub struct SearchFilter {
    term: String,
    term_lower: String,
    /// Compiled pattern: the user regex in regex mode, the escaped term in
    /// literal mode (used for highlighting); `None` for an empty query
    pattern: Option<Regex>,
    use_regex: bool,
    case_sensitive: bool,
    highlight: bool,
}

impl SearchFilter {
    /// Compile a query. A malformed user regex surfaces as
    /// `InvalidSearchPattern`; the escaped literal pattern cannot fail.
    pub fn compile(query: &Query) -> Result<Self> {
        let pattern = if query.search_term.is_empty() {
            None
        } else {
            let source = if query.use_regex {
                query.search_term.clone()
            } else {
                regex::escape(&query.search_term)
            };
            Some(
                RegexBuilder::new(&source)
                    .case_insensitive(!query.case_sensitive)
                    .build()
                    .map_err(|e| CodesiftError::InvalidSearchPattern {
                        message: e.to_string(),
                    })?,
            )
        };

        Ok(Self {
            term: query.search_term.clone(),
            term_lower: query.search_term.to_lowercase(),
            pattern,
            use_regex: query.use_regex,
            case_sensitive: query.case_sensitive,
            highlight: query.highlight_matches,
        })
    }

    /// True when the query is empty and everything matches
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Match one candidate string against the query
    pub fn matches(&self, s: &str) -> bool {
        if self.term.is_empty() {
            return true;
        }
        if self.use_regex {
            return self
                .pattern
                .as_ref()
                .map(|p| p.is_match(s))
                .unwrap_or(false);
        }
        if self.case_sensitive {
            s.contains(&self.term)
        } else {
            s.to_lowercase().contains(&self.term_lower)
        }
    }

    /// Wrap every non-overlapping match span in the emphasis marker.
    /// Returns the input unchanged when highlighting is off or the query
    /// is empty.
    pub fn highlight(&self, s: &str) -> String {
        if !self.highlight || self.term.is_empty() {
            return s.to_string();
        }
        let pattern = match &self.pattern {
            Some(p) => p,
            None => return s.to_string(),
        };

        let mut out = String::with_capacity(s.len());
        let mut last = 0;
        for m in pattern.find_iter(s) {
            if m.start() == m.end() {
                continue;
            }
            out.push_str(&s[last..m.start()]);
            out.push_str(HIGHLIGHT_MARK);
            out.push_str(m.as_str());
            out.push_str(HIGHLIGHT_MARK);
            last = m.end();
        }
        out.push_str(&s[last..]);
        out
    }

    /// Entity-level inclusion: OR across the entity's searchable fields,
    /// first match wins
    pub fn entity_matches<T: Searchable>(&self, entity: &T) -> bool {
        if self.term.is_empty() {
            return true;
        }
        entity.searchable_fields().iter().any(|f| self.matches(f))
    }

    /// Filter an aggregated entity list into an `EntitySet`, recording the
    /// pre-filter count and applying highlighting to the survivors.
    pub fn apply<T: Searchable>(&self, entities: Vec<T>) -> EntitySet<T> {
        let discovered = entities.len();
        let mut kept: Vec<T> = entities
            .into_iter()
            .filter(|e| self.entity_matches(e))
            .collect();
        if self.highlight && !self.term.is_empty() {
            kept = kept.iter().map(|e| e.highlighted(self)).collect();
        }
        EntitySet {
            entities: kept,
            discovered,
        }
    }
}

/// Entities expose their searchable fields in match order and know how to
/// produce a highlighted copy of themselves.
pub trait Searchable: Clone {
    fn searchable_fields(&self) -> Vec<&str>;
    fn highlighted(&self, filter: &SearchFilter) -> Self;
}

impl Searchable for FunctionEntity {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.parameters.iter().map(String::as_str));
        fields
    }

    fn highlighted(&self, filter: &SearchFilter) -> Self {
        Self {
            name: filter.highlight(&self.name),
            file: self.file.clone(),
            parameters: self.parameters.iter().map(|p| filter.highlight(p)).collect(),
        }
    }
}

impl Searchable for ClassEntity {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.bases.iter().map(String::as_str));
        fields.extend(self.methods.iter().map(|m| m.name.as_str()));
        fields
    }

    fn highlighted(&self, filter: &SearchFilter) -> Self {
        let mut copy = self.clone();
        copy.name = filter.highlight(&self.name);
        copy.bases = self.bases.iter().map(|b| filter.highlight(b)).collect();
        for method in &mut copy.methods {
            method.name = filter.highlight(&method.name);
        }
        copy
    }
}

impl Searchable for ComponentEntity {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.props.iter().map(String::as_str));
        fields.extend(self.hooks.iter().map(String::as_str));
        fields.extend(self.data.iter().map(String::as_str));
        fields.extend(self.methods.iter().map(String::as_str));
        fields.extend(self.computed.iter().map(String::as_str));
        fields
    }

    fn highlighted(&self, filter: &SearchFilter) -> Self {
        let hl = |v: &[String]| v.iter().map(|s| filter.highlight(s)).collect::<Vec<_>>();
        Self {
            name: filter.highlight(&self.name),
            file: self.file.clone(),
            props: hl(&self.props),
            hooks: hl(&self.hooks),
            data: hl(&self.data),
            methods: hl(&self.methods),
            computed: hl(&self.computed),
            setup_syntax: self.setup_syntax,
        }
    }
}
