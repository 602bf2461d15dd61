extern crate clap;

use std::{collections::HashSet, process::ExitCode, time::Instant};

use bfir::{
    codegen::generate,
    lexer::tokenize,
    output::write_ir,
    parser::{print_tree, Parser as AstParser},
};
use clap::{Parser, ValueEnum};
use colored::Colorize;

const DEMO_PROGRAM: &str = ".+.+.+.+.+.+.+.+.+.+.";

/// Brainf**k to LLVM IR compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(value_enum)]
    commands: Vec<Commands>,

    /// The file to compile
    #[arg(short, long)]
    file: Option<String>,

    /// Compile this text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    code: Option<String>,

    /// Where to write the generated IR
    #[arg(short, long, default_value = "brainfuck.ll")]
    output: String,

    /// Treat unbalanced brackets as errors
    #[arg(short, long)]
    strict: bool,
}

#[derive(ValueEnum, Debug, Clone, Hash, PartialEq, Eq)]
enum Commands {
    /// Output the tokens
    Tokens,
    /// Output the ast
    Ast,
    /// Output the generated IR
    Ir,
}

fn report<E: std::fmt::Display>(e: E) -> ExitCode {
    eprintln!("{0:}: {1:}", "Error".red(), e);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args = Args::parse();
    let commands: HashSet<Commands> = HashSet::from_iter(args.commands);

    let text = match (&args.file, args.code) {
        (Some(file), _) => {
            println!("Compiling {}", file);
            match std::fs::read_to_string(file) {
                Ok(text) => text,
                Err(e) => return report(e),
            }
        }
        (None, Some(code)) => code,
        (None, None) => String::from(DEMO_PROGRAM),
    };

    println!("{}", "Starting lexing".blue());
    let now = Instant::now();
    let tokens = tokenize(&text);
    println!("{} {:.2?}", "Finished lexing in".green(), now.elapsed());

    if commands.contains(&Commands::Tokens) {
        let stream: String = tokens.iter().map(|token| token.as_char()).collect();
        println!("{}", stream);
    }

    println!("{}", "Starting parsing".blue());
    let mut now = Instant::now();
    let mut parser = if args.strict {
        AstParser::strict(&tokens)
    } else {
        AstParser::new(&tokens)
    };
    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(e) => return report(e),
    };
    println!("{} {:.2?}", "Finished parsing in".green(), now.elapsed());

    if commands.contains(&Commands::Ast) {
        print!("{}", print_tree(&program));
    }

    println!("{}", "Starting codegen".blue());
    now = Instant::now();
    let ir = generate(&program);
    println!("{} {:.2?}", "Finished codegen in".green(), now.elapsed());

    if commands.contains(&Commands::Ir) {
        println!("{}", ir);
    }

    if let Err(e) = write_ir(&ir, &args.output) {
        return report(e);
    }
    println!("{} {}", "LLVM IR written to".green(), args.output);

    ExitCode::SUCCESS
}
