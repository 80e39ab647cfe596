// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use trawl::{
    article_fields, catalog_fields, CorpusKind, FieldSpec, MatchResult, Record, RecordScore,
    Searcher,
};

mod cli;
use cli::display::{self, BOX_WIDTH};
use cli::{input, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Search {
            query,
            catalog,
            articles,
            limit,
            config,
            explain,
            json,
        } => run_search(SearchArgs {
            query: &query,
            catalog: catalog.as_deref().map(Path::new),
            articles: articles.as_deref().map(Path::new),
            limit,
            config: config.as_deref().map(Path::new),
            explain,
            json,
        }),
        Commands::Fields => {
            print_fields();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "trawl=debug",
        _ => "trawl=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

struct SearchArgs<'a> {
    query: &'a str,
    catalog: Option<&'a Path>,
    articles: Option<&'a Path>,
    limit: Option<usize>,
    config: Option<&'a Path>,
    explain: bool,
    json: bool,
}

fn run_search(args: SearchArgs<'_>) -> Result<()> {
    let config = input::load_config(args.config)?;
    let items = input::load_catalog(args.catalog)?;
    let posts = input::load_articles(args.articles)?;

    let searcher = Searcher::storefront(items, posts, config)?;
    let limit = args.limit.unwrap_or(config.max_results);
    let results = searcher.search(args.query, limit);

    let explained: Vec<Option<RecordScore>> = if args.explain {
        results
            .iter()
            .map(|hit| {
                searcher
                    .corpora()
                    .get(hit.slot)
                    .and_then(|index| index.explain(args.query, hit.position))
            })
            .collect()
    } else {
        Vec::new()
    };

    if args.json {
        print_json(&results, &explained)
    } else {
        print_table(args.query, &searcher, &results, &explained);
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct JsonHit<'a> {
    rank: usize,
    corpus: CorpusKind,
    score: f64,
    record: &'a Record,
    #[serde(skip_serializing_if = "Option::is_none")]
    explain: Option<&'a RecordScore>,
}

fn print_json(results: &[MatchResult], explained: &[Option<RecordScore>]) -> Result<()> {
    let hits: Vec<JsonHit<'_>> = results
        .iter()
        .enumerate()
        .map(|(rank, hit)| JsonHit {
            rank: rank + 1,
            corpus: hit.corpus,
            score: hit.score,
            record: hit.record.as_ref(),
            explain: explained.get(rank).and_then(Option::as_ref),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

fn print_table(
    query: &str,
    searcher: &Searcher,
    results: &[MatchResult],
    explained: &[Option<RecordScore>],
) {
    let searched: usize = searcher.corpora().iter().map(|index| index.len()).sum();
    display::section_top(&format!("SEARCH \"{}\"", display::truncate(query, 40)));
    display::row(&display::muted(&format!(
        " {} records in {} corpora, {} hits",
        searched,
        searcher.corpora().len(),
        results.len()
    )));

    if results.is_empty() {
        display::section_mid("RESULTS");
        display::row(" no matches");
        display::section_bot();
        return;
    }

    display::section_mid("RESULTS");
    for (rank, hit) in results.iter().enumerate() {
        let title = display::truncate(hit.title(), BOX_WIDTH - 28);
        display::row(&format!(
            " {:>2}. {} {}  {}",
            rank + 1,
            display::corpus_badge(hit.corpus),
            display::score_value(hit.score),
            display::emphasis(&title)
        ));
        display::row(&display::muted(&format!("            {}", detail_line(&hit.record))));

        if let Some(Some(breakdown)) = explained.get(rank) {
            for field in &breakdown.fields {
                display::row(&format!(
                    "            {} {} x {:.2} = {:.4}",
                    display::pad_right(field.field, 12),
                    display::score_value(field.score),
                    field.weight,
                    field.contribution()
                ));
            }
        }
    }
    display::section_bot();
}

/// Secondary line under a hit: price and rating, or date and tags.
fn detail_line(record: &Record) -> String {
    let line = match record {
        Record::Catalog(item) => {
            let mut line = format!("${:.2}  ★ {:.1} ({})", item.price, item.rating, item.review_count);
            if let Some(badge) = &item.badge {
                line.push_str(&format!("  {}", badge));
            }
            line
        }
        Record::Article(post) => {
            if post.tags.is_empty() {
                post.date.clone()
            } else {
                format!("{}  #{}", post.date, post.tags.join(" #"))
            }
        }
    };
    display::truncate(&line, BOX_WIDTH - 13)
}

fn print_fields() {
    print_field_table("CATALOG FIELDS", &catalog_fields());
    print_field_table("ARTICLE FIELDS", &article_fields());
}

fn print_field_table(label: &str, fields: &[FieldSpec]) {
    display::section_top(label);
    for spec in fields {
        display::row(&format!(
            " {} {}",
            display::pad_right(spec.name, 14),
            display::weight_bar(spec.weight)
        ));
    }
    display::section_bot();
}
