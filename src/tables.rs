//! Wikipedia season-page scraping for team/stadium listings.
//!
//! Season pages carry several wikitables; exactly one is expected to
//! expose both a "Team" and a "Stadium" column (case-insensitive). Cell
//! text is cleaned of citation markers before use.

use anyhow::{Context, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::leagues::League;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("no table with team and stadium columns found")]
    SchemaNotFound,
    #[error("{0} tables with team and stadium columns; expected exactly one")]
    AmbiguousSchema(usize),
}

/// One row of the team listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStadium {
    pub team: String,
    pub stadium: String,
}

/// Source of a league's team/stadium listing. Seam for the pipeline so
/// tests can substitute canned rows for the network fetch.
pub trait TeamTableSource {
    async fn team_table(&self, league: &League) -> Result<Vec<TeamStadium>>;
}

/// HTTP-backed table source fetching the league's Wikipedia season page.
pub struct TableScraper {
    client: reqwest::Client,
}

impl TableScraper {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

impl TeamTableSource for TableScraper {
    async fn team_table(&self, league: &League) -> Result<Vec<TeamStadium>> {
        debug!("Fetching {}", league.url);
        let response = self
            .client
            .get(league.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", league.url))?
            .error_for_status()
            .with_context(|| format!("Bad response from {}", league.url))?;
        let html = response.text().await?;
        let rows = extract_team_table(&html)
            .with_context(|| format!("No team table found for {}", league.name))?;
        Ok(rows)
    }
}

/// Scan the document for the single table exposing case-insensitive
/// "team" and "stadium" header columns, and pull its rows in order.
/// Rows are deduplicated by full (team, stadium) identity; rows with an
/// empty team or stadium cell are dropped.
pub fn extract_team_table(html: &str) -> Result<Vec<TeamStadium>, TableError> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();
    let citation = Regex::new(r"\[[^\]]*\]").unwrap();

    // (table, team column index, stadium column index)
    let mut matching: Vec<(ElementRef, usize, usize)> = Vec::new();
    for table in document.select(&table_selector) {
        let Some(header) = table.select(&row_selector).next() else {
            continue;
        };
        let columns: Vec<String> = header
            .select(&cell_selector)
            .map(|cell| cell_text(&cell, &citation).to_lowercase())
            .collect();
        let team_idx = columns.iter().position(|c| c == "team");
        let stadium_idx = columns.iter().position(|c| c == "stadium");
        if let (Some(team_idx), Some(stadium_idx)) = (team_idx, stadium_idx) {
            matching.push((table, team_idx, stadium_idx));
        }
    }

    let (table, team_idx, stadium_idx) = match matching.len() {
        0 => return Err(TableError::SchemaNotFound),
        1 => matching.remove(0),
        n => return Err(TableError::AmbiguousSchema(n)),
    };

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut rows = Vec::new();
    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell_text(&cell, &citation))
            .collect();
        let team = cells.get(team_idx).cloned().unwrap_or_default();
        let stadium = cells.get(stadium_idx).cloned().unwrap_or_default();
        if team.is_empty() || stadium.is_empty() {
            continue;
        }
        if seen.insert((team.clone(), stadium.clone())) {
            rows.push(TeamStadium { team, stadium });
        }
    }

    debug!("Extracted {} team/stadium rows", rows.len());
    Ok(rows)
}

/// Cell text with citation markers ([1], [a], [note 2]) stripped and
/// whitespace collapsed.
fn cell_text(cell: &ElementRef, citation: &Regex) -> String {
    let text: String = cell.text().collect();
    let text = citation.replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
