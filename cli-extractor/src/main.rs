use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use parser::{ExtractedFields, ParseError, detect, split_transactions};

#[derive(Parser, Debug)]
#[command(
    name = "cli_extractor",
    version,
    about = "Извлекает счёт, имя контрагента и описание из проводок выписки MT940.",
    long_about = None,
)]
struct Args {
    /// Входной файл с выпиской MT940
    #[arg(long)]
    input: PathBuf,

    /// Печатать результат в формате JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), ParseError> {
    let args = Args::parse();

    if !args.input.exists() {
        eprintln!("input file does not exist: {}", args.input.display());
        process::exit(1);
    }

    let text = fs::read_to_string(&args.input)?;

    let Some(dialect) = detect(&text) else {
        eprintln!(
            "no registered dialect accepted the file {}",
            args.input.display()
        );
        process::exit(1);
    };

    let narratives = split_transactions(&text)?;
    let extracted: Vec<ExtractedFields> = narratives
        .iter()
        .map(|narrative| dialect.extract(narrative))
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&extracted)
            .map_err(|err| ParseError::BadInput(format!("json output failed: {err}")))?;
        println!("{json}");
    } else {
        println!("dialect: {}", dialect.name());
        for (index, fields) in extracted.iter().enumerate() {
            println!("-- transaction {}", index + 1);
            println!(
                "   account:     {}",
                fields.contra_account_number.as_deref().unwrap_or("-")
            );
            println!(
                "   name:        {}",
                fields.contra_account_name.as_deref().unwrap_or("-")
            );
            println!(
                "   description: {}",
                fields.description.replace(['\r', '\n'], " ")
            );
        }
    }

    Ok(())
}
