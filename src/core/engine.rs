//! Caller-owned engine tying corpus, index, search and pairing together.
//!
//! An engine starts empty; every query before a corpus is loaded fails
//! with [`VerseError::NotInitialized`], which is distinct from an empty
//! result.

use crate::core::config::Config;
use crate::core::corpus::CorpusLoader;
use crate::core::error::{Result, VerseError};
use crate::core::index::{CorpusIndex, TermMatcher};
use crate::core::pairing::{
    drive_with_progress, ChunkPolicy, ConsolidationMode, Consolidator, PairingGenerator,
    PairingJob, PairingLimits, PairingOutcome, RequestGenerations, RequestToken, TermRecords,
};
use crate::core::search::{dedup_preserving_order, VerseSearch};
use crate::core::terms::{Morphology, TermNormalizer};
use crate::core::types::{CorpusStats, Progress, SearchFilters, SearchResult};
use std::path::Path;
use std::sync::Arc;

/// Search and pairing over one loaded corpus
#[derive(Debug, Clone)]
pub struct VerseEngine {
    config: Arc<Config>,
    normalizer: TermNormalizer,
    index: Option<Arc<CorpusIndex>>,
    generations: RequestGenerations,
}

impl VerseEngine {
    /// Create an engine with no corpus loaded
    pub fn new(config: Config) -> Self {
        let normalizer = TermNormalizer::new(config.search.min_term_length);
        Self {
            config: Arc::new(config),
            normalizer,
            index: None,
            generations: RequestGenerations::new(),
        }
    }

    /// Create an engine with a custom word-equivalence strategy
    pub fn with_morphology(config: Config, morphology: Arc<dyn Morphology>) -> Self {
        let normalizer = TermNormalizer::with_morphology(config.search.min_term_length, morphology);
        Self {
            config: Arc::new(config),
            normalizer,
            index: None,
            generations: RequestGenerations::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn normalizer(&self) -> &TermNormalizer {
        &self.normalizer
    }

    /// Parse corpus text and build the index, replacing any previous corpus
    pub fn load_str(&mut self, raw: &str) -> CorpusStats {
        let corpus = CorpusLoader::new().parse(raw);
        self.install(CorpusIndex::build(corpus))
    }

    /// Read, parse and index a corpus file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<CorpusStats> {
        let corpus = CorpusLoader::new().load_file(path)?;
        Ok(self.install(CorpusIndex::build(corpus)))
    }

    /// Load the corpus named in the configuration
    pub fn load_configured(&mut self) -> Result<CorpusStats> {
        let path = self.config.corpus.path.clone().ok_or_else(|| {
            VerseError::CorpusUnavailable("no corpus path configured".to_string())
        })?;
        self.load_file(path)
    }

    fn install(&mut self, index: CorpusIndex) -> CorpusStats {
        let stats = index.stats();
        tracing::info!(
            "Indexed {} verses across {} books ({} distinct words)",
            stats.verses,
            stats.books,
            stats.distinct_words
        );
        // In-flight pairing runs belong to the old corpus
        self.generations.invalidate();
        self.index = Some(Arc::new(index));
        stats
    }

    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Result<&Arc<CorpusIndex>> {
        self.index.as_ref().ok_or(VerseError::NotInitialized)
    }

    pub fn stats(&self) -> Result<CorpusStats> {
        Ok(self.index()?.stats())
    }

    /// Verses matching any of `terms`, in reading order
    pub fn search<S: AsRef<str>>(
        &self,
        terms: &[S],
        filters: &SearchFilters,
    ) -> Result<Vec<SearchResult>> {
        let index = self.index()?;
        VerseSearch::new(self.normalizer.clone(), self.config.search.max_search_terms)
            .search(index, terms, filters)
    }

    /// Matching verses for each term, in term order.
    ///
    /// Terms are expected to be normalized already.
    pub fn term_records(&self, terms: &[String], filters: &SearchFilters) -> Result<TermRecords> {
        let index = self.index()?;
        let mut records = TermRecords::new();
        for term in terms {
            if records.get(term).is_some() {
                continue;
            }
            let matcher = TermMatcher::new(term)?;
            let verses = index.verses_matching(&matcher, filters);
            tracing::debug!("Term {:?} matched {} verses", term, verses.len());
            records.insert(term.as_str(), verses);
        }
        Ok(records)
    }

    /// Start a new request, superseding every pairing run already in flight
    pub fn begin_request(&self) -> RequestToken {
        self.generations.begin()
    }

    /// Within-group pairing over one term set
    pub async fn pair_terms<S: AsRef<str>>(
        &self,
        terms: &[S],
        filters: &SearchFilters,
        token: RequestToken,
    ) -> Result<PairingOutcome> {
        self.pair_terms_with_progress(terms, filters, token, |_| {})
            .await
    }

    pub async fn pair_terms_with_progress<S, F>(
        &self,
        terms: &[S],
        filters: &SearchFilters,
        token: RequestToken,
        on_progress: F,
    ) -> Result<PairingOutcome>
    where
        S: AsRef<str>,
        F: FnMut(Progress),
    {
        self.index()?;
        let terms = self.query_terms(terms);
        let records = Arc::new(self.term_records(&terms, filters)?);

        let generator = self.generator();
        let pairs = generator.within_group_pairs(&terms);
        let job = PairingJob::new(generator, pairs, Arc::clone(&records), self.chunk_policy(), token);

        let outcome = drive_with_progress(job, on_progress).await;
        Ok(self.finish(outcome, &records, ConsolidationMode::WithinGroup))
    }

    /// Between-groups pairing, one term from each group
    pub async fn pair_groups<S: AsRef<str>>(
        &self,
        group1: &[S],
        group2: &[S],
        filters: &SearchFilters,
        token: RequestToken,
    ) -> Result<PairingOutcome> {
        self.pair_groups_with_progress(group1, group2, filters, token, |_| {})
            .await
    }

    pub async fn pair_groups_with_progress<S, F>(
        &self,
        group1: &[S],
        group2: &[S],
        filters: &SearchFilters,
        token: RequestToken,
        on_progress: F,
    ) -> Result<PairingOutcome>
    where
        S: AsRef<str>,
        F: FnMut(Progress),
    {
        self.index()?;
        let group1 = self.group_terms(group1);
        let group2 = self.group_terms(group2);

        let mut all_terms = group1.clone();
        all_terms.extend(group2.iter().cloned());
        dedup_preserving_order(&mut all_terms);
        let records = Arc::new(self.term_records(&all_terms, filters)?);

        let generator = self.generator();
        let pairs = generator.between_groups_pairs(&group1, &group2);
        let job = PairingJob::new(generator, pairs, Arc::clone(&records), self.chunk_policy(), token);

        let outcome = drive_with_progress(job, on_progress).await;
        Ok(self.finish(
            outcome,
            &records,
            ConsolidationMode::BetweenGroups {
                group1: &group1,
                group2: &group2,
            },
        ))
    }

    /// Terms a search or within-group pairing will actually use
    pub fn query_terms<S: AsRef<str>>(&self, terms: &[S]) -> Vec<String> {
        self.prepare_terms(terms, self.config.search.max_search_terms)
    }

    /// Terms one between-groups group will actually use
    pub fn group_terms<S: AsRef<str>>(&self, group: &[S]) -> Vec<String> {
        self.prepare_terms(group, self.config.search.max_search_terms_per_group)
    }

    fn prepare_terms<S: AsRef<str>>(&self, terms: &[S], max: usize) -> Vec<String> {
        let mut prepared = self.normalizer.limit_and_validate(terms, max);
        dedup_preserving_order(&mut prepared);
        prepared
    }

    fn generator(&self) -> PairingGenerator {
        PairingGenerator::new(
            PairingLimits::from(&self.config.pairing),
            self.normalizer.clone(),
        )
    }

    fn chunk_policy(&self) -> ChunkPolicy {
        ChunkPolicy::from(&self.config.scheduler)
    }

    fn finish(
        &self,
        mut outcome: PairingOutcome,
        records: &TermRecords,
        mode: ConsolidationMode<'_>,
    ) -> PairingOutcome {
        if outcome.superseded {
            return outcome;
        }
        let consolidator = Consolidator::new(self.normalizer.clone(), self.config.pairing.extra_terms);
        let raw = std::mem::take(&mut outcome.pairings);
        outcome.pairings = consolidator.consolidate(raw, Some(records), mode);
        outcome
    }
}

impl Default for VerseEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
