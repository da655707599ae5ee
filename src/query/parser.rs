//! Recursive-descent parser for the query language.
//!
//! # Syntax
//!
//! - Bare words: `comet tuttle`
//! - Phrases: `"swift tuttle"`, proximity `"rocketship dark sky"~4`
//! - Wildcards: `explo*`, `?at`, `*`
//! - Fuzzy terms: `streak~` (2 edits) or `streak~1`
//! - Boolean operators `AND`/`&&`, `OR`/`||`, `NOT`/`!`/leading `-`,
//!   keywords are case-insensitive
//! - Grouping with `( ... )` and boosting with `^2.5`
//!
//! # Grammar
//!
//! ```text
//! or_expr  := and_expr ( [OR] and_expr )*
//! and_expr := unary ( AND unary )*
//! unary    := (NOT | '-') unary | primary
//! primary  := ( '(' or_expr ')' | PHRASE ['~' N] | TERM ['~' N] ) ['^' F]
//! ```
//!
//! Clauses written next to each other without an operator are joined with
//! the parser's default operator: at the `OR` level for
//! [`DefaultOperator::Or`], at the `AND` level for [`DefaultOperator::And`].
//! A negated clause written next to positive ones is subtracted from the
//! whole `OR` level it sits on, so `meteor shower -comet` and
//! `meteor -comet OR shower` both mean `(meteor OR shower) AND NOT comet`.
//! A negation standing alone between explicit `OR`s stays an alternative.
//!
//! Words and phrases are analyzed with the same analyzer as indexed text. A
//! word that analyzes to several tokens becomes one clause per token, joined
//! with the default operator. A word that analyzes to nothing is dropped.
//! Wildcard patterns are only lowercased.
//!
//! Nesting of parentheses and negations is limited to [`MAX_DEPTH`] levels.

use std::sync::Arc;

use tracing::trace;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::config::{DEFAULT_MAX_FUZZY_EXPANSIONS, DefaultOperator, IndexConfig};
use crate::error::ParseError;
use crate::query::QueryNode;
use crate::query::fuzzy::{DEFAULT_MAX_EDITS, FuzzyQuery};
use crate::query::lexer::{Lexer, Spanned, Token};
use crate::query::phrase::PhraseQuery;
use crate::query::term::TermQuery;
use crate::query::wildcard::WildcardQuery;

/// Maximum nesting of groups and negations in one expression.
pub const MAX_DEPTH: usize = 256;

/// Parses query expressions into [`QueryNode`] trees.
#[derive(Debug, Clone)]
pub struct QueryParser {
    analyzer: Arc<dyn Analyzer>,
    default_operator: DefaultOperator,
    max_fuzzy_expansions: usize,
    lowercase_wildcards: bool,
}

impl QueryParser {
    /// Create a parser analyzing words with `analyzer`.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        QueryParser {
            analyzer,
            default_operator: DefaultOperator::Or,
            max_fuzzy_expansions: DEFAULT_MAX_FUZZY_EXPANSIONS,
            lowercase_wildcards: true,
        }
    }

    /// Create a parser matching an index built with `config`.
    pub fn from_config(config: &IndexConfig) -> Self {
        QueryParser::new(Arc::new(StandardAnalyzer::from_config(&config.analyzer)))
            .with_default_operator(config.default_operator)
            .with_max_fuzzy_expansions(config.max_fuzzy_expansions)
            .with_lowercase_wildcards(config.analyzer.ignore_case)
    }

    pub fn with_default_operator(mut self, operator: DefaultOperator) -> Self {
        self.default_operator = operator;
        self
    }

    pub fn with_max_fuzzy_expansions(mut self, max_expansions: usize) -> Self {
        self.max_fuzzy_expansions = max_expansions;
        self
    }

    pub fn with_lowercase_wildcards(mut self, lowercase: bool) -> Self {
        self.lowercase_wildcards = lowercase;
        self
    }

    pub fn default_operator(&self) -> DefaultOperator {
        self.default_operator
    }

    /// Parse a query expression.
    ///
    /// Fails on malformed syntax, and on expressions none of whose words
    /// leave a searchable term after analysis.
    pub fn parse(&self, expression: &str) -> Result<QueryNode, ParseError> {
        let tokens = Lexer::new(expression).tokenize()?;
        let mut state = ParseState {
            parser: self,
            tokens,
            current: 0,
            depth: 0,
        };

        if state.peek() == &Token::Eof {
            return Err(ParseError::new(0, "empty query expression"));
        }

        let query = state.parse_or()?;
        let trailing = state.next();
        match trailing.token {
            Token::Eof => {}
            Token::RightParen => {
                return Err(ParseError::new(trailing.position, "unmatched ')'"));
            }
            token => {
                return Err(ParseError::new(
                    trailing.position,
                    format!("unexpected {token}"),
                ));
            }
        }

        let query = query.ok_or_else(|| {
            ParseError::new(0, "query contains no searchable terms")
        })?;
        trace!(expression, query = %query, "parsed query");
        Ok(query)
    }

    fn analyze(&self, text: &str, position: usize) -> Result<Vec<String>, ParseError> {
        self.analyzer
            .analyze_terms(text)
            .map_err(|e| ParseError::new(position, e.to_string()))
    }
}

/// Cursor over the token list of one expression.
struct ParseState<'p> {
    parser: &'p QueryParser,
    tokens: Vec<Spanned>,
    current: usize,
    depth: usize,
}

impl ParseState<'_> {
    fn peek(&self) -> &Token {
        &self.spanned().token
    }

    fn spanned(&self) -> &Spanned {
        // The lexer always terminates the list with Eof
        let last = self.tokens.len() - 1;
        &self.tokens[self.current.min(last)]
    }

    fn next(&mut self) -> Spanned {
        let spanned = self.spanned().clone();
        if spanned.token != Token::Eof {
            self.current += 1;
        }
        spanned
    }

    fn implicit(&self, operator: DefaultOperator) -> bool {
        self.parser.default_operator == operator && self.peek().starts_operand()
    }

    /// Enter one level of nesting at `position`.
    fn descend(&mut self, position: usize) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::new(position, "query nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_or(&mut self) -> Result<Option<QueryNode>, ParseError> {
        let mut level = OrLevel::default();
        let mut run = Vec::new();

        loop {
            if let Some(node) = self.parse_and()? {
                run.push(node);
            }

            if self.peek() == &Token::Or {
                self.next();
                level.push_run(std::mem::take(&mut run));
            } else if !self.implicit(DefaultOperator::Or) {
                break;
            }
        }
        level.push_run(run);

        Ok(level.finish())
    }

    fn parse_and(&mut self) -> Result<Option<QueryNode>, ParseError> {
        let mut clauses = Vec::new();
        clauses.extend(self.parse_unary()?);

        loop {
            if self.peek() == &Token::And {
                self.next();
            } else if !self.implicit(DefaultOperator::And) {
                break;
            }
            clauses.extend(self.parse_unary()?);
        }

        Ok(QueryNode::and(clauses))
    }

    fn parse_unary(&mut self) -> Result<Option<QueryNode>, ParseError> {
        match self.peek() {
            Token::Not | Token::Minus => {
                let position = self.next().position;
                self.descend(position)?;
                let child = self.parse_unary();
                self.depth -= 1;
                Ok(child?.map(|child| QueryNode::Not(Box::new(child))))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Option<QueryNode>, ParseError> {
        let Spanned { token, position } = self.next();

        let node = match token {
            Token::LeftParen => {
                self.descend(position)?;
                let inner = self.parse_or();
                self.depth -= 1;
                let inner = inner?;
                let closing = self.next();
                if closing.token != Token::RightParen {
                    return Err(ParseError::new(position, "missing closing ')'"));
                }
                inner.map(|inner| QueryNode::Group(Box::new(inner)))
            }
            Token::Quoted(phrase) => {
                let slop = self.modifier_value().unwrap_or(0);
                let terms = self.parser.analyze(&phrase, position)?;
                (!terms.is_empty())
                    .then(|| QueryNode::Phrase(PhraseQuery::new(terms).with_slop(slop)))
            }
            Token::Term(word) => match self.modifier() {
                Some(max_edits) => Some(self.fuzzy(&word, max_edits, position)?),
                None if WildcardQuery::is_pattern(&word) => Some(self.wildcard(&word, position)?),
                None => self.word(&word, position)?,
            },
            Token::Eof => {
                return Err(ParseError::new(position, "unexpected end of query"));
            }
            token => {
                return Err(ParseError::new(position, format!("unexpected {token}")));
            }
        };

        self.boost(node)
    }

    /// Consume a `~` modifier, returning its value if present.
    fn modifier(&mut self) -> Option<Option<u32>> {
        if let Token::Tilde(value) = *self.peek() {
            self.next();
            Some(value)
        } else {
            None
        }
    }

    fn modifier_value(&mut self) -> Option<u32> {
        self.modifier().flatten()
    }

    fn boost(&mut self, node: Option<QueryNode>) -> Result<Option<QueryNode>, ParseError> {
        let Token::Caret(value) = *self.peek() else {
            return Ok(node);
        };
        let position = self.next().position;
        let boost = value.ok_or_else(|| ParseError::new(position, "missing boost value after '^'"))?;

        Ok(node.map(|query| QueryNode::Boost {
            query: Box::new(query),
            boost,
        }))
    }

    fn word(&self, word: &str, position: usize) -> Result<Option<QueryNode>, ParseError> {
        let clauses = self
            .parser
            .analyze(word, position)?
            .into_iter()
            .map(|term| QueryNode::Term(TermQuery::new(term)))
            .collect();
        Ok(match self.parser.default_operator {
            DefaultOperator::Or => QueryNode::or(clauses),
            DefaultOperator::And => QueryNode::and(clauses),
        })
    }

    fn fuzzy(
        &self,
        word: &str,
        max_edits: Option<u32>,
        position: usize,
    ) -> Result<QueryNode, ParseError> {
        if WildcardQuery::is_pattern(word) {
            return Err(ParseError::new(
                position,
                "fuzzy modifier cannot follow a wildcard pattern",
            ));
        }

        let term = match self.parser.analyze(word, position)?.into_iter().next() {
            Some(term) => term,
            None => self.normalize(word),
        };

        Ok(QueryNode::Fuzzy(
            FuzzyQuery::new(term)
                .with_max_edits(max_edits.unwrap_or(DEFAULT_MAX_EDITS))
                .with_max_expansions(self.parser.max_fuzzy_expansions),
        ))
    }

    fn wildcard(&self, word: &str, position: usize) -> Result<QueryNode, ParseError> {
        WildcardQuery::new(self.normalize(word))
            .map(QueryNode::Wildcard)
            .map_err(|e| ParseError::new(position, e.to_string()))
    }

    fn normalize(&self, word: &str) -> String {
        if self.parser.lowercase_wildcards {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }
}

/// Clauses of one `OR` level, and the exclusions that apply to all of them.
#[derive(Default)]
struct OrLevel {
    alternatives: Vec<QueryNode>,
    exclusions: Vec<QueryNode>,
}

impl OrLevel {
    /// Add a run of implicitly OR-ed clauses. Negations next to positive
    /// clauses become exclusions of the level; a run of negations only is
    /// kept as one alternative.
    fn push_run(&mut self, run: Vec<QueryNode>) {
        let (negative, positive): (Vec<QueryNode>, Vec<QueryNode>) =
            run.into_iter().partition(QueryNode::is_negation);

        if positive.is_empty() {
            self.alternatives.extend(QueryNode::and(negative));
            return;
        }

        self.alternatives.extend(positive);
        self.exclusions.extend(negative);
    }

    fn finish(self) -> Option<QueryNode> {
        let disjunction = QueryNode::or(self.alternatives);
        if self.exclusions.is_empty() {
            return disjunction;
        }

        let mut clauses = Vec::with_capacity(self.exclusions.len() + 1);
        clauses.extend(disjunction);
        clauses.extend(self.exclusions);
        QueryNode::and(clauses)
    }
}
