//! Textual pipelines.
//!
//! A pipeline is a `|`-separated list of stages applied to a list of
//! integers, optionally ending in a terminal operation:
//!
//! ```text
//! filter >1 | map *2 | sort desc | sum
//! ```
//!
//! The syntax lives in `pipeline.pest`. Parsing produces a [`Pipeline`];
//! which stage takes which kind of argument is checked while walking the
//! parse tree. [`Pipeline::execute`] assembles the matching sequence chain
//! and runs the terminal.

use std::fmt;
use std::str::FromStr;

use pest::Parser;
use pest::error::ErrorVariant;
use pest::iterators::Pair;
use pest_derive::Parser;
use pullseq::{Cursor, MaterializeOptions, Sequence, group_by, ord};
use thiserror::Error;

#[derive(Parser)]
#[grammar = "common/pipeline.pest"]
struct PipelineParser;

/// Errors found while parsing a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("syntax error\n{0}")]
    Syntax(Box<pest::error::Error<Rule>>),

    #[error("unknown stage `{0}`")]
    UnknownStage(String),

    #[error("`{stage}` expects {expected}")]
    MissingArgument {
        stage: &'static str,
        expected: &'static str,
    },

    #[error("unexpected argument `{argument}` for `{stage}`")]
    UnexpectedArgument {
        stage: &'static str,
        argument: String,
    },

    #[error("invalid predicate `{0}`")]
    InvalidPredicate(String),

    #[error("invalid operation `{0}`")]
    InvalidOp(String),

    #[error("invalid count `{0}`")]
    InvalidCount(String),

    #[error("division by zero in `{0}`")]
    DivisionByZero(String),

    #[error("`{0}` must be the last stage")]
    TerminalNotLast(String),
}

fn describe_rule(rule: &Rule) -> String {
    let description = match rule {
        Rule::segment | Rule::name => "a stage",
        Rule::predicate | Rule::parity | Rule::comparison => "a predicate",
        Rule::operation | Rule::unary | Rule::binary => "an operation",
        Rule::comparator => "a comparison operator",
        Rule::arithmetic => "an arithmetic operator",
        Rule::direction => "`asc` or `desc`",
        Rule::count => "a count",
        Rule::integer => "an integer",
        Rule::EOI => "end of input",
        other => return format!("{other:?}"),
    };
    description.to_string()
}

fn syntax_error(error: pest::error::Error<Rule>) -> PipelineError {
    PipelineError::Syntax(Box::new(error.renamed_rules(describe_rule)))
}

/// A pair whose children do not match the grammar's shape.
fn unhandled(pair: &Pair<'_, Rule>) -> PipelineError {
    PipelineError::Syntax(Box::new(pest::error::Error::new_from_span(
        ErrorVariant::CustomError {
            message: format!("unhandled rule: {:?}", pair.as_rule()),
        },
        pair.as_span(),
    )))
}

/// The single child of `pair`.
fn only_child<'i>(pair: &Pair<'i, Rule>) -> Result<Pair<'i, Rule>, PipelineError> {
    pair.clone().into_inner().next().ok_or_else(|| unhandled(pair))
}

/// The two children of `pair`.
fn child_pair<'i>(
    pair: &Pair<'i, Rule>,
) -> Result<(Pair<'i, Rule>, Pair<'i, Rule>), PipelineError> {
    let mut children = pair.clone().into_inner();
    match (children.next(), children.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(unhandled(pair)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

/// A test applied to each element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Even,
    Odd,
    Compare(Comparison, i64),
}

impl Predicate {
    pub fn test(self, value: i64) -> bool {
        match self {
            Predicate::Even => value % 2 == 0,
            Predicate::Odd => value % 2 != 0,
            Predicate::Compare(cmp, rhs) => match cmp {
                Comparison::Lt => value < rhs,
                Comparison::Le => value <= rhs,
                Comparison::Gt => value > rhs,
                Comparison::Ge => value >= rhs,
                Comparison::Eq => value == rhs,
                Comparison::Ne => value != rhs,
            },
        }
    }

    fn from_pair(pair: &Pair<'_, Rule>) -> Result<Self, PipelineError> {
        let invalid = || PipelineError::InvalidPredicate(pair.as_str().to_string());
        let inner = only_child(pair)?;
        match inner.as_rule() {
            Rule::parity if inner.as_str() == "even" => Ok(Predicate::Even),
            Rule::parity => Ok(Predicate::Odd),
            Rule::comparison => {
                let (comparator, rhs) = child_pair(&inner)?;
                let cmp = match comparator.as_str() {
                    ">=" => Comparison::Ge,
                    "<=" => Comparison::Le,
                    "==" => Comparison::Eq,
                    "!=" => Comparison::Ne,
                    ">" => Comparison::Gt,
                    "<" => Comparison::Lt,
                    _ => return Err(unhandled(&comparator)),
                };
                let rhs = rhs.as_str().parse().map_err(|_| invalid())?;
                Ok(Predicate::Compare(cmp, rhs))
            }
            _ => Err(unhandled(&inner)),
        }
    }
}

impl FromStr for Predicate {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PipelineError::InvalidPredicate(s.to_string());
        let pair = PipelineParser::parse(Rule::predicate_only, s)
            .map_err(|_| invalid())?
            .flat_map(Pair::into_inner)
            .find(|pair| pair.as_rule() == Rule::predicate)
            .ok_or_else(invalid)?;
        Predicate::from_pair(&pair)
    }
}

/// An arithmetic transform applied to each element.
///
/// Arithmetic saturates at the bounds of `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add(i64),
    Sub(i64),
    Mul(i64),
    Div(i64),
    Rem(i64),
    Neg,
    Square,
}

impl Op {
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Op::Add(n) => value.saturating_add(n),
            Op::Sub(n) => value.saturating_sub(n),
            Op::Mul(n) => value.saturating_mul(n),
            Op::Div(n) => value.saturating_div(n),
            Op::Rem(n) => value.wrapping_rem(n),
            Op::Neg => value.saturating_neg(),
            Op::Square => value.saturating_mul(value),
        }
    }

    fn from_pair(pair: &Pair<'_, Rule>) -> Result<Self, PipelineError> {
        let text = pair.as_str();
        let inner = only_child(pair)?;
        let op = match inner.as_rule() {
            Rule::unary if inner.as_str() == "neg" => Op::Neg,
            Rule::unary => Op::Square,
            Rule::binary => {
                let (symbol, operand) = child_pair(&inner)?;
                let operand: i64 = operand
                    .as_str()
                    .parse()
                    .map_err(|_| PipelineError::InvalidOp(text.to_string()))?;
                match symbol.as_str() {
                    "+" => Op::Add(operand),
                    "-" => Op::Sub(operand),
                    "*" => Op::Mul(operand),
                    "/" => Op::Div(operand),
                    "%" => Op::Rem(operand),
                    _ => return Err(unhandled(&symbol)),
                }
            }
            _ => return Err(unhandled(&inner)),
        };
        if matches!(op, Op::Div(0) | Op::Rem(0)) {
            return Err(PipelineError::DivisionByZero(text.to_string()));
        }
        Ok(op)
    }
}

impl FromStr for Op {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PipelineError::InvalidOp(s.to_string());
        let pair = PipelineParser::parse(Rule::operation_only, s)
            .map_err(|_| invalid())?
            .flat_map(Pair::into_inner)
            .find(|pair| pair.as_rule() == Rule::operation)
            .ok_or_else(invalid)?;
        Op::from_pair(&pair)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A lazy or buffering step in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Filter(Predicate),
    Map(Op),
    Sort(Direction),
    /// Cycle the elements and keep the first `n`.
    Cycle(usize),
}

/// The operation that drains the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminal {
    #[default]
    Collect,
    Sum,
    Min,
    Max,
    All(Predicate),
    Any(Predicate),
    Group(Predicate),
}

enum Step {
    Stage(Stage),
    Terminal(Terminal),
}

#[derive(Debug, Clone, Copy)]
enum ArgumentKind {
    Predicate(Predicate),
    Op(Op),
    Direction(Direction),
    Count(usize),
}

/// A stage argument, with its source text for error messages.
#[derive(Debug, Clone, Copy)]
struct Argument<'i> {
    kind: ArgumentKind,
    text: &'i str,
}

impl<'i> Argument<'i> {
    fn from_pair(pair: &Pair<'i, Rule>) -> Result<Self, PipelineError> {
        let text = pair.as_str();
        let kind = match pair.as_rule() {
            Rule::predicate => ArgumentKind::Predicate(Predicate::from_pair(pair)?),
            Rule::operation => ArgumentKind::Op(Op::from_pair(pair)?),
            Rule::direction if text == "desc" => ArgumentKind::Direction(Direction::Desc),
            Rule::direction => ArgumentKind::Direction(Direction::Asc),
            Rule::count => ArgumentKind::Count(
                text.parse()
                    .map_err(|_| PipelineError::InvalidCount(text.to_string()))?,
            ),
            _ => return Err(unhandled(pair)),
        };
        Ok(Self { kind, text })
    }
}

fn predicate_argument(
    stage: &'static str,
    argument: Option<Argument<'_>>,
) -> Result<Predicate, PipelineError> {
    match argument {
        Some(Argument {
            kind: ArgumentKind::Predicate(predicate),
            ..
        }) => Ok(predicate),
        Some(other) => Err(PipelineError::InvalidPredicate(other.text.to_string())),
        None => Err(PipelineError::MissingArgument {
            stage,
            expected: "a predicate",
        }),
    }
}

fn op_argument(argument: Option<Argument<'_>>) -> Result<Op, PipelineError> {
    match argument {
        Some(Argument {
            kind: ArgumentKind::Op(op),
            ..
        }) => Ok(op),
        Some(other) => Err(PipelineError::InvalidOp(other.text.to_string())),
        None => Err(PipelineError::MissingArgument {
            stage: "map",
            expected: "an operation",
        }),
    }
}

fn count_argument(argument: Option<Argument<'_>>) -> Result<usize, PipelineError> {
    match argument {
        Some(Argument {
            kind: ArgumentKind::Count(n),
            ..
        }) => Ok(n),
        Some(other) => Err(PipelineError::InvalidCount(other.text.to_string())),
        None => Err(PipelineError::MissingArgument {
            stage: "cycle",
            expected: "a count",
        }),
    }
}

fn direction_argument(argument: Option<Argument<'_>>) -> Result<Direction, PipelineError> {
    match argument {
        None => Ok(Direction::Asc),
        Some(Argument {
            kind: ArgumentKind::Direction(direction),
            ..
        }) => Ok(direction),
        Some(other) => Err(PipelineError::UnexpectedArgument {
            stage: "sort",
            argument: other.text.to_string(),
        }),
    }
}

fn no_argument<T>(
    stage: &'static str,
    argument: Option<Argument<'_>>,
    value: T,
) -> Result<T, PipelineError> {
    match argument {
        None => Ok(value),
        Some(other) => Err(PipelineError::UnexpectedArgument {
            stage,
            argument: other.text.to_string(),
        }),
    }
}

fn parse_step(segment: &Pair<'_, Rule>) -> Result<Step, PipelineError> {
    let mut children = segment.clone().into_inner();
    let name = children.next().ok_or_else(|| unhandled(segment))?;
    let argument = children
        .next()
        .map(|pair| Argument::from_pair(&pair))
        .transpose()?;

    let step = match name.as_str() {
        "filter" => Step::Stage(Stage::Filter(predicate_argument("filter", argument)?)),
        "map" => Step::Stage(Stage::Map(op_argument(argument)?)),
        "sort" => Step::Stage(Stage::Sort(direction_argument(argument)?)),
        "cycle" => Step::Stage(Stage::Cycle(count_argument(argument)?)),
        "collect" => Step::Terminal(no_argument("collect", argument, Terminal::Collect)?),
        "sum" => Step::Terminal(no_argument("sum", argument, Terminal::Sum)?),
        "min" => Step::Terminal(no_argument("min", argument, Terminal::Min)?),
        "max" => Step::Terminal(no_argument("max", argument, Terminal::Max)?),
        "all" => Step::Terminal(Terminal::All(predicate_argument("all", argument)?)),
        "any" => Step::Terminal(Terminal::Any(predicate_argument("any", argument)?)),
        "group" => Step::Terminal(Terminal::Group(predicate_argument("group", argument)?)),
        other => return Err(PipelineError::UnknownStage(other.to_string())),
    };
    Ok(step)
}

/// A parsed pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pipeline {
    pub stages: Vec<Stage>,
    pub terminal: Terminal,
}

impl FromStr for Pipeline {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<Pair<'_, Rule>> = PipelineParser::parse(Rule::pipeline, s)
            .map_err(syntax_error)?
            .flat_map(Pair::into_inner)
            .filter(|pair| pair.as_rule() == Rule::segment)
            .collect();

        let mut pipeline = Pipeline::default();
        let last = segments.len().saturating_sub(1);
        for (i, segment) in segments.iter().enumerate() {
            match parse_step(segment)? {
                Step::Stage(stage) => pipeline.stages.push(stage),
                Step::Terminal(terminal) if i == last => pipeline.terminal = terminal,
                Step::Terminal(_) => {
                    return Err(PipelineError::TerminalNotLast(
                        segment.as_str().trim().to_string(),
                    ));
                }
            }
        }
        Ok(pipeline)
    }
}

/// What a terminal produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    List(Vec<i64>),
    Value(Option<i64>),
    Bool(bool),
    Groups(Vec<(bool, Vec<i64>)>),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::List(values) => write!(f, "{values:?}"),
            Output::Value(Some(value)) => write!(f, "{value}"),
            Output::Value(None) => write!(f, "none"),
            Output::Bool(value) => write!(f, "{value}"),
            Output::Groups(groups) => {
                for (i, (key, values)) in groups.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key}: {values:?}")?;
                }
                Ok(())
            }
        }
    }
}

type Chain = Box<dyn Sequence<Item = i64>>;

impl Pipeline {
    /// Build the chain over `values` and run the terminal.
    pub fn execute(
        &self,
        values: Vec<i64>,
        options: &MaterializeOptions,
    ) -> pullseq::Result<Output> {
        tracing::debug!(
            stages = self.stages.len(),
            terminal = ?self.terminal,
            "executing pipeline"
        );
        let mut chain: Chain = Box::new(Cursor::new(values));
        for stage in &self.stages {
            chain = match *stage {
                Stage::Filter(predicate) => Box::new(chain.filter(move |v| predicate.test(*v))),
                Stage::Map(op) => Box::new(chain.map(move |v| op.apply(v))),
                Stage::Sort(Direction::Asc) => Box::new(chain.sort()),
                Stage::Sort(Direction::Desc) => Box::new(chain.sort_by(ord::gt)),
                Stage::Cycle(n) => Box::new(chain.cycle_with(options)?.take(n)),
            };
        }

        let output = match self.terminal {
            Terminal::Collect => Output::List(chain.to_vec()),
            Terminal::Sum => Output::Value(chain.reduce(i64::saturating_add)),
            Terminal::Min => Output::Value(ord::min(chain)),
            Terminal::Max => Output::Value(ord::max(chain)),
            Terminal::All(predicate) => Output::Bool(chain.all(|v| predicate.test(v))),
            Terminal::Any(predicate) => Output::Bool(chain.any(|v| predicate.test(v))),
            Terminal::Group(predicate) => {
                let mut groups: Vec<_> = group_by(chain, |v| predicate.test(*v))
                    .into_iter()
                    .collect();
                groups.sort_by_key(|(key, _)| *key);
                Output::Groups(groups)
            }
        };
        Ok(output)
    }
}
