use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use legal_chunker::{
    emit_corpus, enumerate_documents, load_document, load_ocr_text, Document, DocumentKind, Error, Normalizer,
    Pipeline, PipelineConfig,
};

/// Segment OCR'd legal documents into labeled, size-bounded chunks.
#[derive(Parser, Debug)]
#[command(name = "legalchunk", version)]
struct Cli {
    /// YAML configuration; built-in defaults when absent
    #[arg(long, global = true, env = "LEGALCHUNK_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize, chunk, label and filter documents into a JSONL stream
    Run {
        /// Glob of OCR .txt files or Document .json records
        #[arg(long)]
        input: String,
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Output JSONL path; a manifest is written beside it
        #[arg(long)]
        out: PathBuf,
        /// Override the chunk size budget for this kind
        #[arg(long)]
        max_chars: Option<usize>,
    },
    /// Print the normalized text of one OCR file
    Normalize {
        file: PathBuf,
        #[arg(long, value_enum)]
        kind: KindArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Act,
    Gazette,
}

impl From<KindArg> for DocumentKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Act => DocumentKind::Act,
            KindArg::Gazette => DocumentKind::ExtraordinaryGazette,
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "legal_chunker=info,legalchunk=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig, Error> {
    let cfg = match path {
        Some(p) => PipelineConfig::load(p)?,
        None => PipelineConfig::default(),
    };
    tracing::info!(
        config = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "<built-in>".into()),
        language = %cfg.language,
        min_year = ?cfg.min_year,
        "configuration loaded"
    );
    Ok(cfg)
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut cfg = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Run { input, kind, out, max_chars } => {
            let kind = DocumentKind::from(kind);
            if let Some(n) = max_chars {
                cfg.profile_mut(kind).max_chars = n;
                cfg.validate()?;
            }
            let files = enumerate_documents(&input)?;
            tracing::info!(count = files.len(), input = %input, "documents enumerated");

            let mut docs: Vec<Document> = Vec::with_capacity(files.len());
            for file in &files {
                match load_document(file, kind, &cfg.language) {
                    Ok(doc) => docs.push(doc),
                    // A broken input file must not stop the run.
                    Err(e) => tracing::warn!(file = %file.display(), error = %e, "document skipped"),
                }
            }

            let pipeline = Pipeline::new(cfg);
            let result = pipeline.process_corpus(&docs);
            let paths = emit_corpus(&result.chunks, &result.summary, &out)?;
            tracing::info!(
                rows = result.chunks.len(),
                jsonl = %paths.jsonl_path,
                manifest = %paths.manifest_path,
                too_short = result.summary.stats.too_short,
                too_noisy = result.summary.stats.too_noisy,
                table_like = result.summary.stats.table_like,
                pure_metadata = result.summary.stats.pure_metadata,
                "chunks written"
            );
        }
        Command::Normalize { file, kind } => {
            let kind = DocumentKind::from(kind);
            let doc = load_ocr_text(&file, kind, &cfg.language)?;
            let normalizer = Normalizer::new(&cfg.profile(kind).normalizer);
            print!("{}", normalizer.normalize(&doc.raw_text));
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "run failed");
        if let Error::Enumerate(legal_chunker::EnumerateError::NoFilesFound { guidance }) = &e {
            eprintln!("{}", guidance);
        }
        std::process::exit(e.exit_code());
    }
}
