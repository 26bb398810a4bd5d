use brailler::{
    Direction,
    braille::markers_to_unicode,
    symbol::symbol_table,
    test::{TestResult, check_yaml},
    translate_with,
};
use clap::{CommandFactory, Parser, ValueEnum};
use std::{path::PathBuf, process};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    /// braille if the input consists of dot markers only, text otherwise
    Auto,
    /// text to braille
    Forward,
    /// braille to text
    Backward,
}

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "brailler")]
#[command(about = "A command line tool to translate to and from Braille")]
#[command(author, version, long_about = None)] // Read from `Cargo.toml`
struct Cli {
    /// Direction of the translation
    #[arg(short, long, value_enum, default_value_t = DirectionArg::Auto)]
    direction: DirectionArg,
    /// Print braille as Unicode braille patterns instead of dot markers
    #[arg(short, long)]
    unicode: bool,
    /// Print the symbol table
    #[arg(long)]
    symbols: bool,
    /// Run the tests defined in the <YAML> test file. Exit with 1 if any of
    /// the tests fail.
    #[arg(long, value_name = "YAML")]
    check_yaml: Option<PathBuf>,
    /// Text or braille to translate. Multiple arguments are joined with
    /// single spaces. Leading hyphens are part of the input, as in `-5`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    input: Vec<String>,
}

#[derive(Tabled)]
struct SymbolRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Cell")]
    cell: String,
    #[tabled(rename = "Dots")]
    dots: String,
    #[tabled(rename = "Unicode")]
    unicode: char,
}

fn print_symbols() {
    let rows = symbol_table().iter().map(|(symbol, cell)| SymbolRow {
        symbol: symbol.to_string(),
        cell: cell.to_string(),
        dots: cell.dot_numbers(),
        unicode: cell.to_unicode(),
    });
    println!("{}", Table::new(rows));
}

fn run_yaml_tests(yaml: PathBuf) {
    println!("Testing with {:?}", yaml);
    let results = match check_yaml(&yaml) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    for result in results.iter().filter(|r| !r.is_success()) {
        println!("{}", result);
    }
    let count = |f: fn(&TestResult) -> bool| results.iter().filter(|r| f(*r)).count();
    println!("Pass: {}", count(TestResult::is_success));
    println!("Fail: {}", count(TestResult::is_failure));
    println!("Expected Fail: {}", count(TestResult::is_expected_failure));
    println!("Unexpected Pass: {}", count(TestResult::is_unexpected_success));
    if results
        .iter()
        .any(|r| r.is_failure() || r.is_unexpected_success())
    {
        process::exit(1);
    }
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    if args.symbols {
        print_symbols();
        return;
    }
    if let Some(yaml) = args.check_yaml {
        run_yaml_tests(yaml);
        return;
    }
    if args.input.is_empty() {
        // no input is not an error
        println!("{}", Cli::command().render_help());
        return;
    }

    println!("{}", translate_input(&args));
}

fn translate_input(args: &Cli) -> String {
    let input = args.input.join(" ");
    let direction = match args.direction {
        DirectionArg::Auto => Direction::detect(&input),
        DirectionArg::Forward => Direction::Forward,
        DirectionArg::Backward => Direction::Backward,
    };
    let output = translate_with(&input, direction);
    if args.unicode && direction == Direction::Forward {
        markers_to_unicode(&output)
    } else {
        output
    }
}
