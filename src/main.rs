use std::fs;

use clap::Parser;
use dakota::interpreter::evaluator::Interpreter;
use rustyline::{DefaultEditor, error::ReadlineError};

/// Dakota is a small scripting language for numeric and matrix
/// computation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to execute.
    file: Option<String>,

    /// Execute a code string directly.
    #[arg(short = 'c', value_name = "CODE")]
    code: Option<String>,

    /// Start interactive mode (REPL).
    #[arg(short, long)]
    interactive: bool,

    /// Parse only, don't execute.
    #[arg(short, long)]
    parse_only: bool,

    /// Verbose output: token, node and memory figures.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.interactive {
        interactive_mode();
        return;
    }

    let source = if let Some(code) = args.code {
        code
    } else if let Some(path) = args.file {
        fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        eprintln!("Error: No input provided. Pass a source file, -c <code>, or -i.");
        std::process::exit(1);
    };

    if !run_code(&source, args.parse_only, args.verbose) {
        std::process::exit(1);
    }
}

/// Runs one source unit through the pipeline, reporting every error to
/// standard error. Returns `false` when anything failed.
fn run_code(source: &str, parse_only: bool, verbose: bool) -> bool {
    let tokens = match dakota::tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{error}");
            return false;
        },
    };

    if verbose {
        println!("Generated {} tokens", tokens.len());
    }

    let ast = match dakota::parse(&tokens) {
        Ok(ast) => ast,
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
            return false;
        },
    };

    if verbose {
        println!("Generated {} AST nodes", ast.node_count());
        println!("Interned {} strings", ast.strings.len());
        println!("Memory usage: {} bytes", ast.memory_usage());
    }

    if parse_only {
        println!("Parsing completed successfully.");
        return true;
    }

    let mut interpreter = Interpreter::new(&ast);
    if let Err(error) = interpreter.interpret() {
        eprintln!("{error}");
        return false;
    }

    true
}

fn interactive_mode() {
    println!("Dakota Interactive Mode");
    println!("Type 'exit' or 'quit' to exit, 'help' for help\n");

    let Ok(mut editor) = DefaultEditor::new() else {
        eprintln!("Failed to initialize the line editor.");
        return;
    };

    let mut line_number = 1;

    loop {
        match editor.readline(&format!("dakota:{line_number}> ")) {
            Ok(line) => {
                match line.as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        return;
                    },
                    "help" => {
                        print_repl_help();
                        continue;
                    },
                    "" => continue,
                    _ => {},
                }

                let _ = editor.add_history_entry(&line);
                run_code(&line, false, false);
                line_number += 1;
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Goodbye!");
                return;
            },
            Err(error) => {
                eprintln!("Error reading input: {error}");
                return;
            },
        }
    }
}

fn print_repl_help() {
    println!("Available commands:");
    println!("  exit, quit  - Exit the interpreter");
    println!("  help        - Show this help");
    println!("  Any Dakota code to execute\n");
    println!("Example Dakota code:");
    println!("  x = 42");
    println!("  y = 3.14");
    println!("  matrix = [1, 2; 3, 4]");
    println!("  print(x + y)");
    println!("  print(matrix)\n");
    println!("Built-in functions:");
    println!("  {}\n",
             dakota::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS.join(", "));
}
