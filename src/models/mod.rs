//! Core data models for papers and paged listings.

mod page;
mod paper;

pub use page::PagedResult;
pub use paper::{
    Author, CitationSnapshot, Figure, FigureKind, Paper, PaperBuilder, PaperId, PaperMetadata,
    PaperStatus, PaperType,
};
