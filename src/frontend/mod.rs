pub mod cursor;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token;

pub use cursor::{TokenCursor, TokenSource, TokenStream};
pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics};
pub use lexer::Scanner;
pub use parser::{parse_source, parse_tokens, Parsed, Parser, SyntaxTree};
pub use token::{Token, TokenType};
