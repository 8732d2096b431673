use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::path::PathBuf;
use std::{fs::read_to_string, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(name = "quotient", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: QuotientCommand,
}

#[derive(Debug, Subcommand)]
pub enum QuotientCommand {
    /// Print the token stream of a source file.
    Tokenize { path: PathBuf },
    /// Print the parsed program as s-expressions.
    Parse { path: PathBuf },
    /// Evaluate a source file and print its value.
    Evaluate { path: PathBuf },
}

fn main() -> ExitCode {
    quotient_main().expect("Encountered an error!")
}

fn quotient_main() -> Result<ExitCode> {
    color_eyre::install().expect("Can't fail at first call!");
    let args = CLArgs::parse();
    match args.routine {
        QuotientCommand::Tokenize { path } => {
            let src = read_to_string(&path)?;
            tokenize(&src, &path.to_string_lossy())
        }
        QuotientCommand::Parse { path } => {
            let src = read_to_string(&path)?;
            parse(&src, &path.to_string_lossy())
        }
        QuotientCommand::Evaluate { path } => {
            let src = read_to_string(&path)?;
            evaluate(&src, &path.to_string_lossy())
        }
    }
}

fn tokenize(src: &str, name: &str) -> Result<ExitCode> {
    use quotient::lexer::Lexer;
    use quotient::token::TokenKind;

    let mut scanner = Lexer::new(src);
    loop {
        match scanner.next_token() {
            Ok(token) => {
                println!("{token}");
                if matches!(token.kind, TokenKind::Eof) {
                    return Ok(ExitCode::SUCCESS);
                }
            }
            Err(error) => {
                eprint!("{}", quotient::report::render(src, name, &error.into()));
                return Ok(ExitCode::from(65));
            }
        }
    }
}

fn parse(src: &str, name: &str) -> Result<ExitCode> {
    use quotient::ast::formatter::{AstFormatter, SExpressionFormatter};
    use quotient::lexer::Lexer;
    use quotient::parser::Parser;
    use quotient::EngineError;

    let result = Lexer::new(src)
        .scan_all()
        .map_err(EngineError::from)
        .and_then(|tokens| Parser::new(tokens).parse().map_err(EngineError::from));
    match result {
        Ok(program) => {
            println!("{}", SExpressionFormatter.format(&program));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprint!("{}", quotient::report::render(src, name, &error));
            Ok(ExitCode::from(65))
        }
    }
}

fn evaluate(src: &str, name: &str) -> Result<ExitCode> {
    use quotient::Stage;

    match quotient::evaluate(src) {
        Ok(value) => {
            println!("{value} : {}", value.type_name());
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprint!("{}", quotient::report::render(src, name, &error));
            let code = match error.stage() {
                Stage::Lex | Stage::Parse => 65,
                Stage::Runtime => 70,
            };
            Ok(ExitCode::from(code))
        }
    }
}
