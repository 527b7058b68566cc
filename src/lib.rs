pub mod ast;
pub mod batch;
pub mod error;
pub mod export;
pub mod lexer;
pub mod localisation;
pub mod options;
pub mod parser;
pub mod report;
pub mod script;
pub mod walker;

pub use ast::{Date, Document, Key, Scalar, Value};
pub use error::ScriptError;
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use options::{ParseOptions, ReportOptions, WalkOptions};
pub use parser::{parse, parse_str, parse_str_with};
pub use script::ScriptFile;
pub use walker::{collect_reachable, contains_mapping, ConditionTree};
