//! Regex split expression node.
//!
//! One node shape for the engine's split function. Which back-end does the
//! splitting is decided once, at statement compile, from the statement's
//! engine config; the chosen back-end then owns pattern compilation. The
//! children are stored exactly as handed in: argument checking happened
//! upstream in the parser.

use tracing::debug;

use crate::config::{StatementContext, DEFAULT_USE_BYTE_BASED_REGEX, USE_BYTE_BASED_REGEX};
use crate::error::{PlanError, PlanResult};
use crate::expr::Expr;
use crate::splitter::{ByteSplitter, CharSplitter};

/// Child positions for the split call shape `REGEXP_SPLIT(source, pattern)`.
pub const SOURCE_ARG: usize = 0;
pub const PATTERN_ARG: usize = 1;

/// Which regex implementation a statement compiles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegexBackend {
    ByteBased,
    CharBased,
}

impl RegexBackend {
    /// Compile a pattern specification with this back-end.
    pub fn compile_pattern_spec(&self, pattern: &str) -> Result<Splitter, regex::Error> {
        match self {
            RegexBackend::ByteBased => Ok(Splitter::Byte(ByteSplitter::new(pattern)?)),
            RegexBackend::CharBased => Ok(Splitter::Char(CharSplitter::new(pattern)?)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegexBackend::ByteBased => "byte-based",
            RegexBackend::CharBased => "char-based",
        }
    }
}

/// A compiled splitter, tagged by the back-end that produced it.
#[derive(Debug, Clone)]
pub enum Splitter {
    Byte(ByteSplitter),
    Char(CharSplitter),
}

impl Splitter {
    pub fn backend(&self) -> RegexBackend {
        match self {
            Splitter::Byte(_) => RegexBackend::ByteBased,
            Splitter::Char(_) => RegexBackend::CharBased,
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            Splitter::Byte(s) => s.pattern(),
            Splitter::Char(s) => s.pattern(),
        }
    }

    /// Split UTF-8 text with whichever back-end was selected. The byte
    /// back-end splits the raw encoding and re-assembles text pieces.
    pub fn split_text(&self, input: &str) -> Vec<String> {
        match self {
            Splitter::Char(s) => s.split(input),
            Splitter::Byte(s) => s
                .split(input.as_bytes())
                .into_iter()
                .map(|piece| String::from_utf8_lossy(&piece).into_owned())
                .collect(),
        }
    }
}

/// The split-function node. `splitter` is `Some` only when the pattern
/// child was a string literal at compile time; a dynamic pattern leaves
/// the node uncompiled.
#[derive(Debug, Clone)]
pub struct RegexSplitNode {
    children: Vec<Expr>,
    backend: RegexBackend,
    splitter: Option<Splitter>,
}

impl RegexSplitNode {
    /// Build the node for one statement. The back-end flag is read here,
    /// once; later config changes do not touch this node.
    pub fn create(children: Vec<Expr>, ctx: &StatementContext) -> PlanResult<Self> {
        let config = ctx.config()?;
        let backend = if config.get_bool(USE_BYTE_BASED_REGEX, DEFAULT_USE_BYTE_BASED_REGEX) {
            RegexBackend::ByteBased
        } else {
            RegexBackend::CharBased
        };
        debug!(
            "[REGEX SPLIT] create: {} child(ren), {} back-end",
            children.len(),
            backend.label()
        );

        let splitter = match children.get(PATTERN_ARG).and_then(Expr::as_str_literal) {
            Some(pattern) => {
                let compiled = backend.compile_pattern_spec(pattern).map_err(|source| {
                    PlanError::InvalidPattern { backend: backend.label(), source }
                })?;
                Some(compiled)
            }
            None => None,
        };

        Ok(Self { children, backend, splitter })
    }

    /// The argument expressions, exactly as handed to [`create`](Self::create).
    pub fn children(&self) -> &[Expr] {
        &self.children
    }

    pub fn backend(&self) -> RegexBackend {
        self.backend
    }

    /// The compiled splitter, when the pattern was a compile-time literal.
    pub fn splitter(&self) -> Option<&Splitter> {
        self.splitter.as_ref()
    }
}
