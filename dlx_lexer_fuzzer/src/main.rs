mod rnd;
mod str_gen;
mod fuzz_gen;
mod check;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dlx_lexer::grammar::{ada, gpr};
use dlx_lexer::{Lexer, TokenType};
use str_gen::*;
use fuzz_gen::*;

/// Randomly edits a document and checks the lexer output after every edit
#[derive(Parser, Debug)]
#[command(name = "dlx_lexer_fuzzer")]
struct Args {
    /// Grammar to lex with
    #[arg(long, value_enum, default_value_t = Grammar::Ada)]
    grammar: Grammar,

    /// RNG seed, defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Number of edits to make
    #[arg(long, default_value_t = 10_000)]
    iterations: usize,

    /// The document is cut at a random point when it grows longer than this
    #[arg(long, default_value_t = 4096)]
    max_len: usize,

    /// Characters random insertions are made of
    #[arg(long, value_enum, default_value_t = Charset::Printable)]
    charset: Charset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Grammar {
    Ada,
    Gpr,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Charset {
    /// Printable ASCII and whitespace
    Printable,
    /// All of ASCII, control characters included
    Ascii,
    /// Every character from U+0000 to U+00FF
    Bytes,
}

impl Charset {
    fn chars(self) -> String {
        match self {
            Charset::Printable => (' '..='~').chain("\t\n\r".chars()).collect(),
            Charset::Ascii => ('\u{0}'..='\u{7f}').collect(),
            Charset::Bytes => ('\u{0}'..='\u{ff}').collect(),
        }
    }
}

/// Snippets of the grammar: every fixed text plus a few variable tokens.
fn snippets<T>() -> Vec<String> where T : TokenType {
    let extra = ["X", "Foo_Bar", "42", "3.14", "16#FF#", "'a'", "\"str\"", "\"\"\"\"", "-- note\n", " ", "\n", "_"];
    T::all().iter()
        .filter_map(|kind| kind.fixed_text())
        .chain(extra.iter().copied())
        .map(String::from)
        .collect()
}

fn strategy<T>(charset: Charset) -> RandomEdit where T : TokenType {
    let random = RandomStringGenerator::with_len_and_charset(1..12, &charset.chars());
    let snippet = SnippetGenerator::with_count_and_snippets(1..6, snippets::<T>());

    let mut strategy = RandomEdit::new();
    strategy
        .add(AppendEdit::with_gen(snippet.clone()))
        .add(InsertEdit::with_gen(snippet.clone()))
        .add(SpliceEdit::with_gen(snippet))
        .add(AppendEdit::with_gen(random.clone()))
        .add(InsertEdit::with_gen(random.clone()))
        .add(SpliceEdit::with_gen(random))
        .add(EraseEdit::new());
    strategy
}

fn fuzz<T>(lexer: Lexer<'_, T>, args: &Args) -> Result<()> where T : TokenType {
    let strategy = strategy::<T>(args.charset);
    let mut document = String::new();
    let mut total_tokens = 0;

    for iteration in 0..args.iterations {
        let edit = strategy.make_edit(&document);
        apply_edit(&mut document, &edit);
        if document.len() > args.max_len {
            let cut = rnd::rand_char_boundary(&document, 0);
            document.truncate(cut);
        }

        total_tokens += check::check_source(lexer, &document).with_context(|| format!(
            "iteration {} (seed {}), after replacing {:?} with {:?}, document: {:?}",
            iteration, rnd::current_seed(), edit.0, edit.1, document))?;

        if (iteration + 1) % 1000 == 0 {
            println!("{} edits, {} bytes, {} tokens lexed", iteration + 1, document.len(), total_tokens);
        }
    }

    println!("Done, no violations in {} edits", args.iterations);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rnd::seed_from_system_time);
    rnd::set_seed(seed);
    println!("Fuzzing the {:?} grammar with seed {}", args.grammar, seed);

    let result = match args.grammar {
        Grammar::Ada => fuzz(ada::lexer(), &args),
        Grammar::Gpr => fuzz(gpr::lexer(), &args),
    };
    if result.is_err() {
        eprintln!("Violation found, rerun with --seed {} to reproduce", seed);
    }
    result
}
