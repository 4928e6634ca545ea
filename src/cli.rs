// src/cli.rs
//
// `cli --url_pattern <url> --number_of_pages <n> --path <file.csv>`
// Any of the three left out is asked for on stdin.

use std::{
    env,
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::{
    config::options::{AppOptions, TextOptions, TextSource},
    file::normalize_separators,
    progress::ConsoleProgress,
    runner,
    text::{FrequencyTable, ScriptPolicy},
};

const HELP: &str = include_str!("cli_help.txt");
const TOP_WORDS_SHOWN: usize = 15;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub url_pattern: Option<String>,
    pub number_of_pages: Option<u32>,
    pub path: Option<String>,
    /// Recount an existing reviews file instead of crawling.
    pub from_file: Option<PathBuf>,
    pub text_source: Option<TextSource>,
    pub latin_only: bool,
    pub lexicon_dir: Option<PathBuf>,
    pub extra_stopwords: Vec<String>,
    pub help: bool,
}

/// Accepts both `--flag value` and `--flag=value`.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, Box<dyn Error>> {
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(raw) = args.next() {
        let (flag, inline) = match raw.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (s!(f), Some(s!(v))),
            _ => (raw.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, Box<dyn Error>> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => args.next().ok_or_else(|| format!("Missing value for {name}").into()),
            }
        };

        match flag.as_str() {
            "--url_pattern" | "-u" => out.url_pattern = Some(value("--url_pattern")?),
            "--number_of_pages" | "-n" => {
                out.number_of_pages = Some(parse_pages(&value("--number_of_pages")?)?);
            }
            "--path" | "-o" => out.path = Some(value("--path")?),
            "--from_file" => out.from_file = Some(PathBuf::from(value("--from_file")?)),
            "--text" => out.text_source = Some(parse_source(&value("--text")?)?),
            "--latin_only" => out.latin_only = true,
            "--lexicon" => out.lexicon_dir = Some(PathBuf::from(value("--lexicon")?)),
            "--stopwords" => {
                let v = value("--stopwords")?;
                out.extra_stopwords.extend(
                    v.split(',').map(str::trim).filter(|w| !w.is_empty()).map(String::from),
                );
            }
            "-h" | "--help" => out.help = true,
            _ => return Err(format!("Unknown arg: {raw}").into()),
        }
    }
    Ok(out)
}

fn parse_pages(v: &str) -> Result<u32, Box<dyn Error>> {
    v.trim()
        .parse::<u32>()
        .map_err(|e| format!("Invalid number of pages {v:?}: {e}").into())
}

fn parse_source(v: &str) -> Result<TextSource, Box<dyn Error>> {
    match v.trim().to_ascii_lowercase().as_str() {
        "body" => Ok(TextSource::Body),
        "title" => Ok(TextSource::Title),
        "both" | "title+body" => Ok(TextSource::TitleAndBody),
        other => Err(format!("Unknown text source: {other} (body, title, both)").into()),
    }
}

/// Ask until a non-empty line comes back. EOF is an error.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<String> {
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;
        let mut line = s!();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, format!("no input for {label:?}")));
        }
        let line = line.trim();
        if !line.is_empty() {
            return Ok(s!(line));
        }
    }
}

fn prompt_pages<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<u32> {
    loop {
        let v = prompt(input, out, "Number of pages to scrape")?;
        match v.parse::<u32>() {
            Ok(n) => return Ok(n),
            Err(_) => writeln!(out, "Error: {v:?} is not a valid integer.")?,
        }
    }
}

fn text_options(args: &CliArgs) -> TextOptions {
    let mut text = TextOptions::from_env();
    if let Some(source) = args.text_source {
        text.source = source;
    }
    if args.latin_only {
        text.script = ScriptPolicy::LatinOnly;
    }
    if let Some(dir) = &args.lexicon_dir {
        text.lexicon_dir = Some(dir.clone());
    }
    text.extra_stopwords.extend(args.extra_stopwords.iter().cloned());
    text
}

/// Fill the gaps in `args` from the prompt and build the run options.
pub fn resolve_options<R: BufRead, W: Write>(
    args: &CliArgs,
    input: &mut R,
    out: &mut W,
) -> io::Result<AppOptions> {
    let mut options = AppOptions::default();
    options.text = text_options(args);

    options.scrape.url_pattern = match &args.url_pattern {
        Some(u) => u.clone(),
        None => prompt(input, out, "Url of the first page of company reviews")?,
    };
    options.scrape.pages = match args.number_of_pages {
        Some(n) => n,
        None => prompt_pages(input, out)?,
    };
    let path = match &args.path {
        Some(p) => p.clone(),
        None => prompt(input, out, "Path where to store the result (csv)")?,
    };
    options.export.set_path(&normalize_separators(&path));
    Ok(options)
}

fn print_top(table: &FrequencyTable) {
    if table.is_empty() {
        println!("No words counted.");
        return;
    }
    println!("Top words:");
    for (lemma, n) in table.top(TOP_WORDS_SHOWN) {
        println!("  {n:>6}  {lemma}");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("{HELP}");
        return Ok(());
    }

    if let Some(src) = &args.from_file {
        let (records, table) = runner::count_file(src, &text_options(&args))?;
        println!("Read {} review(s) from {}", records.len(), src.display());
        if let Some(p) = &args.path {
            let mut options = AppOptions::default();
            options.export.set_path(&normalize_separators(p));
            let written = crate::file::write_frequencies(&options.export, &table)?;
            println!("Wrote {}", written.display());
        }
        print_top(&table);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let options = resolve_options(&args, &mut input, &mut stdout)?;

    logf!(
        "CLI: start url_pattern={} pages={} path={}",
        options.scrape.url_pattern,
        options.scrape.pages,
        options.export.out_path().display()
    );

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&options, &mut progress)?;
    for p in &summary.files_written {
        println!("Wrote {}", p.display());
    }
    print_top(&summary.frequencies);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|a| s!(*a)).collect()
    }

    #[test]
    fn both_flag_styles() {
        let a = parse_args(args(&[
            "--url_pattern=https://example.com/review/acme",
            "--number_of_pages", "3",
            "--path", "out/acme.csv",
        ]))
        .unwrap();
        assert_eq!(a.url_pattern.as_deref(), Some("https://example.com/review/acme"));
        assert_eq!(a.number_of_pages, Some(3));
        assert_eq!(a.path.as_deref(), Some("out/acme.csv"));
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(parse_args(args(&["--number_of_pages", "ten"])).is_err());
        assert!(parse_args(args(&["--path"])).is_err());
        assert!(parse_args(args(&["--what"])).is_err());
        assert!(parse_args(args(&["--text", "everything"])).is_err());
    }

    #[test]
    fn text_flags() {
        let a = parse_args(args(&["--text", "both", "--latin_only", "--stopwords", "acme, Shop"])).unwrap();
        assert_eq!(a.text_source, Some(TextSource::TitleAndBody));
        assert!(a.latin_only);
        assert_eq!(a.extra_stopwords, strs!["acme", "Shop"]);
    }

    #[test]
    fn missing_values_are_prompted() {
        let a = parse_args(args(&["--path", "out/x.tsv"])).unwrap();
        let mut input = Cursor::new("\nhttps://example.com/review/x\nfive\n2\n");
        let mut out: Vec<u8> = Vec::new();
        let opts = resolve_options(&a, &mut input, &mut out).unwrap();

        assert_eq!(opts.scrape.url_pattern, "https://example.com/review/x");
        assert_eq!(opts.scrape.pages, 2);
        assert_eq!(opts.export.out_path(), PathBuf::from("out").join("x.tsv"));

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Url of the first page").count(), 2);
        assert!(shown.contains("not a valid integer"));
    }

    #[test]
    fn eof_while_prompting_is_an_error() {
        let a = CliArgs::default();
        let mut input = Cursor::new("");
        let mut out: Vec<u8> = Vec::new();
        assert!(resolve_options(&a, &mut input, &mut out).is_err());
    }
}
