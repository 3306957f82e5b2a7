//! Original-language quotes → gateway-language quote columns.

use std::sync::Arc;

use anyhow::{Result, bail};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::{
    ConversionOptions, ConversionOutput, ORIGINAL_LANGUAGE_ORG, RowFailure, load_verses,
    parse_occurrence, require_book, require_repo, resolve_quote,
};
use crate::core::{
    AlignedQuote, BibleLink, QuoteColumn, Token, TokenStore, TsvTable, VerseCache, is_not_found,
    mark_not_found, normalize_separators, original_language_repo, strip_not_found,
};

struct TargetColumns {
    repo: String,
    quote: usize,
    occurrence: usize,
}

fn column_names(link: &BibleLink, multiple: bool) -> (String, String) {
    if multiple {
        (
            format!("GLQuote:{}", link.repo),
            format!("GLOccurrence:{}", link.repo),
        )
    } else {
        ("GLQuote".to_string(), "GLOccurrence".to_string())
    }
}

struct Job {
    row: usize,
    line: usize,
    reference: String,
    id: String,
    quote: String,
    occurrence_cell: String,
    occurrence: Result<i64, String>,
    source: Result<Arc<[Token]>, String>,
    targets: Vec<Result<Arc<[Token]>, String>>,
}

impl Job {
    fn resolve(&self, options: ConversionOptions) -> Vec<Result<AlignedQuote, String>> {
        let quote = normalize_separators(&self.quote);
        self.targets
            .iter()
            .map(|target| {
                let occurrence = self.occurrence.clone()?;
                let source = self.source.as_ref().map_err(Clone::clone)?;
                let target = target.as_ref().map_err(Clone::clone)?;
                resolve_quote(options, source, target, &quote, occurrence, true)
                    .map_err(|err| err.to_string())
            })
            .collect()
    }
}

/// Add a `GLQuote`/`GLOccurrence` column pair per link, filled by resolving
/// each row's original-language quote into that gateway-language text.
///
/// With a single link the columns are `GLQuote`/`GLOccurrence`; with several
/// they are suffixed with the repository (`GLQuote:en_ult`).
pub fn add_gl_quote_cols(
    store: &TokenStore,
    cache: &mut VerseCache,
    links: &[BibleLink],
    book: &str,
    tsv: &str,
    options: ConversionOptions,
) -> Result<ConversionOutput> {
    let book_info = require_book(book)?;
    let book = book_info.code;
    if links.is_empty() {
        bail!("No gateway-language Bible links given");
    }
    let source_repo = original_language_repo(book_info.testament);
    require_repo(store, source_repo)?;
    for link in links {
        require_repo(store, &link.repo)?;
    }

    let mut table = TsvTable::parse(tsv)?;
    let multiple = links.len() > 1;
    let names: Vec<(String, String)> = links
        .iter()
        .map(|link| column_names(link, multiple))
        .collect();
    for (quote_name, occurrence_name) in &names {
        table.ensure_column_pair(quote_name, occurrence_name);
    }
    // Indices are read after all insertions, which may shift earlier pairs.
    let columns: Vec<TargetColumns> = links
        .iter()
        .zip(&names)
        .map(|(link, (quote_name, occurrence_name))| {
            let (quote, occurrence) = table.ensure_column_pair(quote_name, occurrence_name);
            TargetColumns {
                repo: link.repo.clone(),
                quote,
                occurrence,
            }
        })
        .collect();
    let Some((_, quote_index)) = QuoteColumn::detect(&table.columns) else {
        bail!("TSV has no quote column (Quote, OrigQuote, OrigWords or OrigWord)");
    };

    let mut result = ConversionOutput::default();
    let mut jobs = Vec::new();
    let mut pass_through = Vec::new();

    for record in table.records() {
        let reference = record.get("Reference").trim();
        let quote = record.cell(quote_index);
        let occurrence = record.get("Occurrence").trim();
        if reference.is_empty() || quote.trim().is_empty() || occurrence.is_empty() {
            result.counts.skipped += 1;
            continue;
        }
        if is_not_found(quote) && !options.reprocess_not_found {
            pass_through.push((record.index, quote.to_string(), occurrence.to_string()));
            result.counts.skipped += 1;
            continue;
        }

        let source = load_verses(store, cache, ORIGINAL_LANGUAGE_ORG, source_repo, book, reference)
            .map_err(|err| format!("{err:#}"));
        let targets = links
            .iter()
            .map(|link| {
                load_verses(store, cache, &link.org, &link.repo, book, reference)
                    .map_err(|err| format!("{err:#}"))
            })
            .collect();

        jobs.push(Job {
            row: record.index,
            line: record.line,
            reference: reference.to_string(),
            id: record.get("ID").to_string(),
            quote: strip_not_found(quote).to_string(),
            occurrence_cell: occurrence.to_string(),
            occurrence: parse_occurrence(occurrence),
            source,
            targets,
        });
    }

    let resolved: Vec<Vec<Result<AlignedQuote, String>>> =
        jobs.par_iter().map(|job| job.resolve(options)).collect();

    for (row, quote, occurrence) in pass_through {
        for column in &columns {
            table.set(row, column.quote, quote.clone());
            table.set(row, column.occurrence, occurrence.clone());
        }
    }

    for (job, outcomes) in jobs.iter().zip(resolved) {
        for (column, outcome) in columns.iter().zip(outcomes) {
            match outcome {
                Ok(aligned) => {
                    debug!(reference = %job.reference, id = %job.id, target = %column.repo, quote = %aligned.quote, "resolved row");
                    let occurrence = if job.occurrence == Ok(-1) {
                        "-1".to_string()
                    } else {
                        aligned.occurrence.to_string()
                    };
                    table.set(job.row, column.quote, aligned.quote);
                    table.set(job.row, column.occurrence, occurrence);
                    result.counts.pass += 1;
                }
                Err(message) => {
                    warn!(reference = %job.reference, id = %job.id, target = %column.repo, "{message}");
                    table.set(job.row, column.quote, mark_not_found(&job.quote));
                    table.set(job.row, column.occurrence, job.occurrence_cell.clone());
                    result.record_failure(
                        book,
                        RowFailure {
                            line: job.line,
                            reference: job.reference.clone(),
                            id: job.id.clone(),
                            quote: job.quote.clone(),
                            target: column.repo.clone(),
                            message,
                        },
                    );
                }
            }
        }
    }

    info!(
        book,
        pass = result.counts.pass,
        fail = result.counts.fail,
        skipped = result.counts.skipped,
        "added gateway-language quotes"
    );
    result.output = table.to_tsv();
    Ok(result)
}
