use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use phrasing::formatting::{Identity, Render, Terminal};
use phrasing::language::Sentence;
use phrasing::parsing;

mod problem;

use problem::Present;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("phrasing")
        .version(VERSION)
        .propagate_version(true)
        .about("Compiler for sentence templates.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more detail to standard error. Repeat for even more."),
        )
        .subcommand(
            Command::new("check")
                .about("Syntax-check the templates in the given file")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing templates, one per line. Use '-' to read standard input."),
                ),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile templates and print the resulting expression trees")
                .arg(
                    Arg::new("sentence")
                        .short('s')
                        .long("sentence")
                        .action(ArgAction::Append)
                        .help("A template to compile. May be given more than once."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["debug", "json", "template"])
                        .default_value("debug")
                        .help("How to print the compiled sentences."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required_unless_present("sentence")
                        .conflicts_with("sentence")
                        .help("The file containing templates, one per line. Use '-' to read standard input."),
                ),
        )
        .get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));

            let content = load_or_exit(filename);
            let sentences = compile_or_exit(filename, &content);

            println!(
                "{}: {} sentence{}",
                filename.display(),
                sentences.len(),
                if sentences.len() == 1 { "" } else { "s" }
            );
        }
        Some(("compile", submatches)) => {
            let sentences = match submatches.get_many::<String>("sentence") {
                Some(lines) => {
                    let lines: Vec<&String> = lines.collect();
                    debug!("Compiling {} sentence(s) from arguments", lines.len());
                    match parsing::compile(&lines) {
                        Ok(sentences) => sentences,
                        Err(error) => {
                            debug!(?error);
                            // offsets are into the lines joined one per line
                            let joined = lines
                                .iter()
                                .map(|line| line.as_str())
                                .collect::<Vec<_>>()
                                .join("\n");
                            eprintln!(
                                "{}",
                                problem::concise_compile_error(
                                    &error,
                                    Path::new("<sentence>"),
                                    &joined,
                                    &Identity
                                )
                            );
                            std::process::exit(1);
                        }
                    }
                }
                None => {
                    let filename = submatches
                        .get_one::<String>("filename")
                        .map(Path::new)
                        .unwrap_or(Path::new("-"));
                    let content = load_or_exit(filename);
                    compile_or_exit(filename, &content)
                }
            };

            let output = submatches
                .get_one::<String>("output")
                .map(String::as_str)
                .unwrap_or("debug");

            let raw_output = submatches.get_flag("raw-control-chars");
            let renderer: &dyn Render = if raw_output || std::io::stdout().is_terminal() {
                &Terminal
            } else {
                &Identity
            };

            print_sentences(&sentences, output, renderer);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: phrasing [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn load_or_exit(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn compile_or_exit(filename: &Path, content: &str) -> Vec<Sentence> {
    match parsing::parse(filename, content) {
        Ok(sentences) => sentences,
        Err(error) => {
            debug!(?error);
            let renderer: &dyn Render = if std::io::stderr().is_terminal() {
                &Terminal
            } else {
                &Identity
            };
            eprintln!(
                "{}",
                problem::full_compile_error(&error, filename, content, renderer)
            );
            std::process::exit(1);
        }
    }
}

fn print_sentences(sentences: &[Sentence], output: &str, renderer: &dyn Render) {
    match output {
        "json" => match serde_json::to_string_pretty(sentences) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("{}: {}", "error".bright_red(), error);
                std::process::exit(1);
            }
        },
        "template" => {
            for sentence in sentences {
                println!("{}", sentence.present(renderer));
            }
        }
        _ => {
            for sentence in sentences {
                println!("{:#?}", sentence);
            }
        }
    }
}
