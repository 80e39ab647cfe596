// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the trawl command-line interface.
//!
//! Two subcommands: `search` to run a query over catalog and article JSON
//! files, and `fields` to print the field tables the scorer uses. Handy for
//! checking why something ranks where it does before wiring the library into
//! a storefront.

pub mod display;
pub mod input;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "trawl",
    about = "Typo-tolerant search across a product catalog and a blog",
    version
)]
pub struct Cli {
    /// Log more (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search catalog items and articles loaded from JSON files
    Search {
        /// Search query
        query: String,

        /// JSON array of catalog items
        #[arg(short, long)]
        catalog: Option<String>,

        /// JSON array of articles
        #[arg(short, long)]
        articles: Option<String>,

        /// Maximum number of results to return
        ///
        /// Defaults to `maxResults` from the config file (10 if unset).
        #[arg(short, long)]
        limit: Option<usize>,

        /// JSON config file (matcher threshold, result cap, ...)
        #[arg(long)]
        config: Option<String>,

        /// Show the per-field score breakdown for every hit
        #[arg(long)]
        explain: bool,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the searchable fields and their weights
    Fields,
}
