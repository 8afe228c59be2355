//! Recursive-descent front-end: turns a pattern into an NFA.
//!
//! ```text
//! alternation : concat ('|' concat)*
//! concat      : repeat repeat*
//! repeat      : atom ('*' | '+' | '?')*
//! atom        : LITERAL
//!             | '\' ANY
//!             | '(' alternation ')'
//! ```
//!
//! LITERAL is any character except `| * + ? ( ) \`. Every construct is
//! emitted through the Thompson primitives of [`NfaBuilder`].

use std::iter::Peekable;
use std::str::{Chars, FromStr};

use crate::automaton::{Fragment, Nfa, NfaBuilder};
use crate::error::{Error, Result};

/// Deepest group nesting accepted. Each level costs a few parser frames.
pub const MAX_NESTING: usize = 256;

fn is_postfix(c: char) -> bool {
    matches!(c, '*' | '+' | '?')
}

fn starts_atom(c: char) -> bool {
    c != '|' && c != ')' && !is_postfix(c)
}

struct Parser<'a> {
    it: Peekable<Chars<'a>>,
    offset: usize,
    depth: usize,
    builder: NfaBuilder,
}

impl<'a> Parser<'a> {
    fn new(pattern: &'a str) -> Self {
        Parser {
            it: pattern.chars().peekable(),
            offset: 0,
            depth: 0,
            builder: NfaBuilder::new(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.it.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.it.next()?;
        self.offset += 1;
        Some(c)
    }

    fn alternation(&mut self) -> Result<Fragment> {
        let mut lhs = self.concat()?;
        while self.peek() == Some('|') {
            self.bump();
            let rhs = self.concat()?;
            lhs = self.builder.alternate(lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn concat(&mut self) -> Result<Fragment> {
        let mut acc: Option<Fragment> = None;
        while let Some(c) = self.peek() {
            if !starts_atom(c) {
                break;
            }
            let next = self.repeat()?;
            acc = Some(match acc {
                None => next,
                Some(prev) => self.builder.concatenate(prev, next)?,
            });
        }

        match acc {
            Some(fragment) => Ok(fragment),
            None => Err(self.empty_concat()),
        }
    }

    fn empty_concat(&mut self) -> Error {
        let offset = self.offset;
        match self.peek() {
            None if offset == 0 => Error::EmptyPattern { offset },
            None => Error::UnexpectedEnd { offset },
            Some('|') | Some(')') => Error::EmptyPattern { offset },
            Some(ch) => Error::UnexpectedChar { ch, offset },
        }
    }

    fn repeat(&mut self) -> Result<Fragment> {
        let mut fragment = self.atom()?;
        loop {
            fragment = match self.peek() {
                Some('*') => self.builder.kleene_closure(fragment)?,
                Some('+') => self.builder.positive_closure(fragment)?,
                Some('?') => self.builder.optional(fragment)?,
                _ => return Ok(fragment),
            };
            self.bump();
        }
    }

    fn atom(&mut self) -> Result<Fragment> {
        let offset = self.offset;
        match self.bump() {
            Some('(') => {
                if self.depth == MAX_NESTING {
                    return Err(Error::NestingTooDeep { offset });
                }
                self.depth += 1;
                let inner = self.alternation()?;
                self.depth -= 1;
                match self.bump() {
                    Some(')') => Ok(inner),
                    Some(ch) => Err(Error::UnexpectedChar {
                        ch,
                        offset: self.offset - 1,
                    }),
                    None => Err(Error::UnmatchedParen { offset }),
                }
            }
            Some('\\') => match self.bump() {
                Some(c) => self.builder.atomic(c),
                None => Err(Error::UnexpectedEnd {
                    offset: self.offset,
                }),
            },
            Some(c) => self.builder.atomic(c),
            None => Err(Error::UnexpectedEnd { offset }),
        }
    }

    fn parse(mut self) -> Result<Nfa> {
        let fragment = self.alternation()?;
        let offset = self.offset;
        if let Some(ch) = self.bump() {
            return Err(Error::UnexpectedChar { ch, offset });
        }
        Ok(self.builder.finish(fragment))
    }
}

/// Parse a pattern into an NFA with one start and one terminate state.
pub fn parse(pattern: &str) -> Result<Nfa> {
    Parser::new(pattern).parse()
}

impl FromStr for Nfa {
    type Err = Error;

    fn from_str(s: &str) -> Result<Nfa> {
        parse(s)
    }
}
