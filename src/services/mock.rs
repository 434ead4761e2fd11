//! In-memory paper service backed by a fixed seed list.

use async_trait::async_trait;
use chrono::Utc;

use crate::models::{Author, PagedResult, Paper, PaperBuilder, PaperId, PaperStatus, PaperType};
use crate::services::{validate_paging, PaperService, ServiceCapabilities, ServiceError};

/// A paper service backed by an in-memory list seeded at construction.
///
/// Fully implements the service surface. The like/unlike side channel is
/// stateless: calls succeed and are logged, but nothing is recorded and
/// `liked_papers` always comes back empty.
#[derive(Debug)]
pub struct MockPaperService {
    papers: Vec<Paper>,
}

impl MockPaperService {
    /// Create a mock service with the default seed papers.
    pub fn new() -> Self {
        Self {
            papers: seed_papers(),
        }
    }

    /// Create a mock service with a custom seed list.
    pub fn with_papers(papers: Vec<Paper>) -> Self {
        Self { papers }
    }

    /// Number of seeded papers
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether the seed list is empty
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

impl Default for MockPaperService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaperService for MockPaperService {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Paper Service"
    }

    fn capabilities(&self) -> ServiceCapabilities {
        ServiceCapabilities::LIST
            | ServiceCapabilities::LOOKUP
            | ServiceCapabilities::SEARCH
            | ServiceCapabilities::LIKES
    }

    async fn list_papers(&self, page: u32, per_page: u32) -> Result<PagedResult, ServiceError> {
        validate_paging(page, per_page)?;

        let start = (page as usize - 1).saturating_mul(per_page as usize);
        let end = start.saturating_add(per_page as usize).min(self.papers.len());
        let papers = if start < self.papers.len() {
            self.papers[start..end].to_vec()
        } else {
            Vec::new()
        };

        Ok(PagedResult::new(papers, self.papers.len(), page, per_page))
    }

    async fn get_paper(&self, id: &PaperId) -> Result<Paper, ServiceError> {
        self.papers
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    async fn search_papers(&self, query: &str) -> Result<PagedResult, ServiceError> {
        let needle = query.to_lowercase();
        let matches: Vec<Paper> = self
            .papers
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.r#abstract.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        Ok(PagedResult::single_page(matches))
    }

    async fn liked_papers(&self) -> Result<Vec<Paper>, ServiceError> {
        Ok(Vec::new())
    }

    async fn like_paper(&self, id: &PaperId) -> Result<(), ServiceError> {
        tracing::info!(paper = %id, "liked paper");
        Ok(())
    }

    async fn unlike_paper(&self, id: &PaperId) -> Result<(), ServiceError> {
        tracing::info!(paper = %id, "unliked paper");
        Ok(())
    }
}

/// Default seed: three well-known NLP papers.
fn seed_papers() -> Vec<Paper> {
    let now = Utc::now();
    vec![
        PaperBuilder::new(
            1u64,
            "Attention Is All You Need",
            "We propose a new network architecture based solely on attention mechanisms. \
             Experiments show these models to be superior in quality while being more \
             parallelizable and requiring significantly less time to train.",
            "NeurIPS",
            2017,
        )
        .author(Author::new("1", "Vaswani et al."))
        .keywords(["Deep Learning", "Attention", "Transformers"])
        .citations(52_000, now)
        .paper_type(PaperType::Research)
        .status(PaperStatus::Published)
        .build(),
        PaperBuilder::new(
            2u64,
            "BERT: Pre-training of Deep Bidirectional Transformers",
            "We introduce a new language representation model called BERT, which stands for \
             Bidirectional Encoder Representations from Transformers. Unlike recent language \
             representation models, BERT is designed to pre-train deep bidirectional \
             representations by jointly conditioning on both left and right context in all \
             layers.",
            "NAACL",
            2019,
        )
        .author(Author::new("2", "Devlin et al."))
        .keywords(["NLP", "Transformers", "Pre-training"])
        .citations(48_000, now)
        .paper_type(PaperType::Research)
        .status(PaperStatus::Published)
        .build(),
        PaperBuilder::new(
            3u64,
            "GPT-3: Language Models are Few-Shot Learners",
            "We demonstrate that scaling language models greatly improves task-agnostic, \
             few-shot performance, sometimes even reaching competitiveness with prior \
             state-of-the-art fine-tuning approaches. Specifically, we train GPT-3, an \
             autoregressive language model with 175 billion parameters.",
            "NeurIPS",
            2020,
        )
        .author(Author::new("3", "Brown et al."))
        .keywords(["Language Models", "Few-shot Learning", "AI"])
        .citations(25_000, now)
        .paper_type(PaperType::Research)
        .status(PaperStatus::Published)
        .build(),
    ]
}
