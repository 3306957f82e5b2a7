//! Gateway-language quotes → original-language quotes, in place.

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
use crate::utils::contains_hebrew_or_greek;

struct Job {
    row: usize,
    line: usize,
    reference: String,
    id: String,
    /// Cell content as found, sentinel included.
    original_quote: String,
    quote: String,
    occurrence: Result<i64, String>,
    streams: Result<(Arc<[Token]>, Arc<[Token]>), String>,
}

impl Job {
    fn resolve(&self, options: ConversionOptions) -> Result<AlignedQuote, String> {
        let occurrence = self.occurrence.clone()?;
        let (source, target) = self.streams.as_ref().map_err(Clone::clone)?;
        resolve_quote(
            options,
            source,
            target,
            &normalize_separators(&self.quote),
            occurrence,
            false,
        )
        .map_err(|err| err.to_string())
    }
}

/// Replace each row's gateway-language quote (and occurrence) with the
/// aligned original-language quote.
///
/// Rows whose quote already contains Hebrew or Greek are left untouched.
pub fn convert_gl_quotes_to_ol_quotes(
    store: &TokenStore,
    cache: &mut VerseCache,
    link: &BibleLink,
    book: &str,
    tsv: &str,
    options: ConversionOptions,
) -> Result<ConversionOutput> {
    let book_info = require_book(book)?;
    let book = book_info.code;
    let target_repo = original_language_repo(book_info.testament);
    require_repo(store, &link.repo)?;
    require_repo(store, target_repo)?;

    let mut table = TsvTable::parse(tsv)?;
    let Some((_, quote_index)) = QuoteColumn::detect(&table.columns) else {
        bail!("TSV has no quote column (Quote, OrigQuote, OrigWords or OrigWord)");
    };
    let Some(occurrence_index) = table.column_index("Occurrence") else {
        bail!("TSV has no Occurrence column");
    };

    let mut result = ConversionOutput::default();
    let mut jobs = Vec::new();

    for record in table.records() {
        let reference = record.get("Reference").trim();
        let quote = record.cell(quote_index);
        let occurrence = record.cell(occurrence_index).trim();
        if reference.is_empty()
            || quote.trim().is_empty()
            || occurrence.is_empty()
            || contains_hebrew_or_greek(quote)
            || (is_not_found(quote) && !options.reprocess_not_found)
        {
            result.counts.skipped += 1;
            continue;
        }

        let streams = load_verses(store, cache, &link.org, &link.repo, book, reference)
            .and_then(|source| {
                let target =
                    load_verses(store, cache, ORIGINAL_LANGUAGE_ORG, target_repo, book, reference)?;
                Ok((source, target))
            })
            .map_err(|err| format!("{err:#}"));

        jobs.push(Job {
            row: record.index,
            line: record.line,
            reference: reference.to_string(),
            id: record.get("ID").to_string(),
            original_quote: quote.to_string(),
            quote: strip_not_found(quote).to_string(),
            occurrence: parse_occurrence(occurrence),
            streams,
        });
    }

    let resolved: Vec<Result<AlignedQuote, String>> =
        jobs.par_iter().map(|job| job.resolve(options)).collect();

    for (job, outcome) in jobs.iter().zip(resolved) {
        match outcome {
            Ok(aligned) => {
                debug!(reference = %job.reference, id = %job.id, quote = %aligned.quote, "resolved row");
                table.set(job.row, quote_index, aligned.quote);
                if job.occurrence != Ok(-1) {
                    table.set(job.row, occurrence_index, aligned.occurrence.to_string());
                }
                result.counts.pass += 1;
            }
            Err(message) => {
                warn!(reference = %job.reference, id = %job.id, "{message}");
                table.set(job.row, quote_index, mark_not_found(&job.original_quote));
                result.record_failure(
                    book,
                    RowFailure {
                        line: job.line,
                        reference: job.reference.clone(),
                        id: job.id.clone(),
                        quote: job.quote.clone(),
                        target: target_repo.to_string(),
                        message,
                    },
                );
            }
        }
    }

    info!(
        book,
        pass = result.counts.pass,
        fail = result.counts.fail,
        skipped = result.counts.skipped,
        "converted gateway-language quotes"
    );
    result.output = table.to_tsv();
    Ok(result)
}
