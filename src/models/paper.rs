//! Paper model representing a research paper from any source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paper identifier.
///
/// Numeric ids come from the mock fixture and simple backends; text ids
/// carry external identifiers such as arXiv ids ("1706.03762") or DOIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaperId {
    Numeric(u64),
    Text(String),
}

impl From<u64> for PaperId {
    fn from(id: u64) -> Self {
        PaperId::Numeric(id)
    }
}

impl From<&str> for PaperId {
    fn from(id: &str) -> Self {
        PaperId::Text(id.to_string())
    }
}

impl From<String> for PaperId {
    fn from(id: String) -> Self {
        PaperId::Text(id)
    }
}

impl std::fmt::Display for PaperId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaperId::Numeric(n) => write!(f, "{}", n),
            PaperId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Kind of publication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperType {
    Research,
    Review,
    Preprint,
}

/// Publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperStatus {
    Published,
    InReview,
    Preprint,
}

/// An author entry. Order within a paper is author order; names are not
/// unique identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            affiliation: None,
            orcid: None,
        }
    }
}

/// Point-in-time citation snapshot. Counts are not live and may lag the
/// upstream index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationSnapshot {
    pub count: u64,
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
    /// e.g. "google_scholar", "semantic_scholar"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Kind of figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    Graph,
    Diagram,
    Photo,
    Table,
}

/// A figure referenced by a paper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub id: String,
    pub url: String,
    pub caption: String,
    #[serde(rename = "type")]
    pub kind: FigureKind,
}

/// Publication metadata beyond the headline fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperMetadata {
    pub published_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arxiv_categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

/// A research paper as shown on a card.
///
/// `id` is unique within the result set of a single listing or search call;
/// no uniqueness is enforced across calls, and mutable fields (citation
/// counts in particular) may change between fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: PaperId,

    pub title: String,

    /// Authors in author order
    pub authors: Vec<Author>,

    /// Abstract text
    pub r#abstract: String,

    pub journal: String,

    pub year: i32,

    /// Tag strings, insertion order preserved for display
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<CitationSnapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figures: Option<Vec<Figure>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<PaperType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaperStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PaperMetadata>,
}

impl Paper {
    /// Create a new paper with required fields
    pub fn new(
        id: impl Into<PaperId>,
        title: impl Into<String>,
        r#abstract: impl Into<String>,
        journal: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            r#abstract: r#abstract.into(),
            journal: journal.into(),
            year,
            keywords: Vec::new(),
            citations: None,
            doi: None,
            url: None,
            pdf_url: None,
            figures: None,
            r#type: None,
            status: None,
            metadata: None,
        }
    }

    /// Returns the primary identifier for this paper (DOI if available, else id)
    pub fn primary_id(&self) -> String {
        self.doi.clone().unwrap_or_else(|| self.id.to_string())
    }

    /// Joined author names, as rendered on a card
    pub fn author_line(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check if paper has a downloadable PDF
    pub fn has_pdf(&self) -> bool {
        self.pdf_url.is_some()
    }
}

/// Builder for constructing Paper objects
#[derive(Debug, Clone)]
pub struct PaperBuilder {
    paper: Paper,
}

impl PaperBuilder {
    /// Create a new builder with required fields
    pub fn new(
        id: impl Into<PaperId>,
        title: impl Into<String>,
        r#abstract: impl Into<String>,
        journal: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            paper: Paper::new(id, title, r#abstract, journal, year),
        }
    }

    /// Add a single author
    pub fn author(mut self, author: Author) -> Self {
        self.paper.authors.push(author);
        self
    }

    /// Set the full author list
    pub fn authors(mut self, authors: Vec<Author>) -> Self {
        self.paper.authors = authors;
        self
    }

    /// Set keywords
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paper.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set citation snapshot
    pub fn citations(mut self, count: u64, last_updated: DateTime<Utc>) -> Self {
        self.paper.citations = Some(CitationSnapshot {
            count,
            last_updated,
            source: None,
        });
        self
    }

    /// Set DOI
    pub fn doi(mut self, doi: impl Into<String>) -> Self {
        self.paper.doi = Some(doi.into());
        self
    }

    /// Set paper page URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.paper.url = Some(url.into());
        self
    }

    /// Set PDF URL
    pub fn pdf_url(mut self, url: impl Into<String>) -> Self {
        self.paper.pdf_url = Some(url.into());
        self
    }

    /// Set figures
    pub fn figures(mut self, figures: Vec<Figure>) -> Self {
        self.paper.figures = Some(figures);
        self
    }

    /// Set paper type
    pub fn paper_type(mut self, t: PaperType) -> Self {
        self.paper.r#type = Some(t);
        self
    }

    /// Set publication status
    pub fn status(mut self, status: PaperStatus) -> Self {
        self.paper.status = Some(status);
        self
    }

    /// Set publication metadata
    pub fn metadata(mut self, metadata: PaperMetadata) -> Self {
        self.paper.metadata = Some(metadata);
        self
    }

    /// Build the Paper
    pub fn build(self) -> Paper {
        self.paper
    }
}
