//! Extract Binary
//!
//! Walks a directory of hand-history logs, plain `.txt` files or `.zip`
//! archives of them, and writes one feature dataset per log for the
//! tracked nicknames.
//!
//! Options: --input, --output, --nicknames, --format, --json

use anyhow::Context;
use clap::Parser;
use handlog::features::FeatureExtractor;
use handlog::features::FeatureRow;
use handlog::history::Format;
use handlog::history::Splitter;
use rayon::prelude::*;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Per-decision feature datasets from hand histories", long_about = None)]
struct Args {
    /// Directory searched recursively for .txt and .zip logs
    #[arg(long, required = true)]
    input: PathBuf,
    /// Directory receiving one dataset per log
    #[arg(long, required = true)]
    output: PathBuf,
    /// File with one tracked nickname per line
    #[arg(long, required = true)]
    nicknames: PathBuf,
    #[arg(long, value_enum, default_value = "pokerstars")]
    format: Format,
    /// Write JSON lines instead of CSV
    #[arg(long)]
    json: bool,
}

/// One log's worth of text: a file, or one entry of an archive.
struct Source {
    name: String,
    text: String,
}

fn main() -> anyhow::Result<()> {
    handlog::log()?;
    let args = Args::parse();
    let nicknames = std::fs::read_to_string(&args.nicknames)
        .with_context(|| format!("read nicknames from {}", args.nicknames.display()))?;
    let extractor = FeatureExtractor::new(
        nicknames
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty()),
    );
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("create {}", args.output.display()))?;
    let files = walkdir::WalkDir::new(&args.input)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| matches!(extension(path), Some("txt" | "zip")))
        .collect::<Vec<PathBuf>>();
    log::info!("{:<32}{:<32}", "tracking nicknames", extractor.nicknames().len());
    log::info!("{:<32}{:<32}", "discovered logs", files.len());
    let rows = files
        .par_iter()
        .map(|path| match process(path, &args, &extractor) {
            Ok(n) => n,
            Err(e) => {
                log::warn!("{:<32}{:<32}", path.display().to_string(), e);
                0
            }
        })
        .sum::<usize>();
    log::info!("{:<32}{:<32}", "rows written", rows);
    Ok(())
}

fn process(path: &Path, args: &Args, extractor: &FeatureExtractor) -> anyhow::Result<usize> {
    sources(path)?
        .into_iter()
        .map(|source| emit(source, args, extractor))
        .sum()
}

fn sources(path: &Path) -> anyhow::Result<Vec<Source>> {
    let stem = stem(path);
    match extension(path) {
        Some("zip") => {
            let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
            let mut archive = zip::ZipArchive::new(file).context("read archive")?;
            let mut sources = Vec::new();
            for i in 0..archive.len() {
                let mut entry = archive.by_index(i)?;
                if !entry.is_file() || !entry.name().ends_with(".txt") {
                    continue;
                }
                let name = format!("{}_{}", stem, self::stem(Path::new(entry.name())));
                let mut bytes = Vec::new();
                entry.read_to_end(&mut bytes)?;
                let text = String::from_utf8_lossy(&bytes).into_owned();
                sources.push(Source { name, text });
            }
            Ok(sources)
        }
        _ => {
            let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            Ok(vec![Source { name: stem, text }])
        }
    }
}

/// Parses one log and writes its rows. Logs yielding no rows write nothing.
fn emit(source: Source, args: &Args, extractor: &FeatureExtractor) -> anyhow::Result<usize> {
    let mut splitter = Splitter::from(args.format);
    splitter.add_lines(source.text.lines());
    log::debug!(
        "{:<32}{:<32}",
        source.name,
        format!("{} hands, {} dropped", splitter.len(), splitter.failures())
    );
    let rows = splitter
        .hands()
        .values()
        .filter_map(|hands| hands.first())
        .flat_map(|hand| extractor.extract(hand))
        .collect::<Vec<FeatureRow>>();
    if rows.is_empty() {
        return Ok(0);
    }
    let ext = if args.json { "jsonl" } else { "csv" };
    let path = args.output.join(format!("{}.{}", source.name, ext));
    let file = std::fs::File::create(&path).with_context(|| format!("create {}", path.display()))?;
    let mut out = std::io::BufWriter::new(file);
    if args.json {
        for row in rows.iter() {
            serde_json::to_writer(&mut out, row)?;
            writeln!(out)?;
        }
    } else {
        writeln!(out, "{}", FeatureRow::csv_header())?;
        for row in rows.iter() {
            writeln!(out, "{}", row.to_csv())?;
        }
    }
    out.flush()?;
    Ok(rows.len())
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
