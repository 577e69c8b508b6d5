//! Per-keyword aggregation and top-level digest orchestration.
//!
//! [`Aggregator::build_section`] runs the full chain for one keyword pair:
//! fetch from both providers, normalize, translate the English set, then
//! assemble a bounded, shuffled batch. [`DigestBuilder`] loops the
//! aggregator over every configured pair and renders the result. The loop
//! is strictly sequential: one keyword's work finishes before the next
//! starts.
//!
//! Provider failures are absorbed here: a fetch error is logged and
//! becomes an empty contribution, so one dead provider (or both) degrades
//! the section instead of aborting the run.

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{error, info, instrument};

use crate::config::DigestConfig;
use crate::models::{Article, Digest, KeywordPair, Section};
use crate::normalize;
use crate::render;
use crate::sources::naver::NaverClient;
use crate::sources::newsapi::NewsApiClient;
use crate::translate::{Translate, translate_or_original};
use crate::util::DateWindow;

/// Most articles one provider may contribute to a section.
pub const SECTION_SOURCE_CAP: usize = 5;

/// Language tags for the translation direction applied to foreign articles.
const FOREIGN_LANG: &str = "en";
const LOCAL_LANG: &str = "ko";

/// Builds one [`Section`] per keyword pair from both providers.
pub struct Aggregator<'a, T: Translate> {
    newsapi: &'a NewsApiClient,
    naver: &'a NaverClient,
    translator: &'a T,
    window: DateWindow,
}

impl<'a, T: Translate> Aggregator<'a, T> {
    pub fn new(
        newsapi: &'a NewsApiClient,
        naver: &'a NaverClient,
        translator: &'a T,
        window: DateWindow,
    ) -> Self {
        Self {
            newsapi,
            naver,
            translator,
            window,
        }
    }

    /// Build the article batch for one keyword pair.
    ///
    /// The shuffle is the only randomized step in the pipeline; callers
    /// supply the RNG so a seeded run is fully deterministic.
    #[instrument(level = "info", skip(self, rng), fields(foreign = %pair.foreign, local = %pair.local))]
    pub async fn build_section(&self, pair: &KeywordPair, rng: &mut impl Rng) -> Section {
        let foreign_raw = match self.newsapi.fetch(&pair.foreign).await {
            Ok(items) => items,
            Err(e) => {
                error!(keyword = %pair.foreign, error = %e, "NewsAPI fetch failed; continuing with empty set");
                Vec::new()
            }
        };

        let mut foreign = Vec::with_capacity(foreign_raw.len());
        for item in foreign_raw {
            let mut article = normalize::normalize_foreign(item);
            article.title =
                translate_or_original(self.translator, &article.title, FOREIGN_LANG, LOCAL_LANG)
                    .await;
            article.description = translate_or_original(
                self.translator,
                &article.description,
                FOREIGN_LANG,
                LOCAL_LANG,
            )
            .await;
            foreign.push(article);
        }

        let local: Vec<Article> = match self.naver.fetch(&pair.local).await {
            Ok(items) => items
                .into_iter()
                .filter_map(|item| normalize::normalize_local(item, self.window.today))
                .collect(),
            Err(e) => {
                error!(keyword = %pair.local, error = %e, "Naver fetch failed; continuing with empty set");
                Vec::new()
            }
        };

        info!(
            foreign_count = foreign.len(),
            local_count = local.len(),
            "Normalized provider batches"
        );

        Section {
            pair: pair.clone(),
            articles: assemble(foreign, local, rng),
        }
    }
}

/// Merge the two normalized lists into one presentation batch.
///
/// Each provider contributes its first [`SECTION_SOURCE_CAP`] articles in
/// source-native order (relevance for NewsAPI, recency for Naver); this is
/// a truncation, not a ranking. Duplicate links across providers are dropped
/// (title stands in as the key for link-less articles), then the combined
/// list is shuffled exactly once.
pub fn assemble(foreign: Vec<Article>, local: Vec<Article>, rng: &mut impl Rng) -> Vec<Article> {
    let mut combined: Vec<Article> = foreign
        .into_iter()
        .take(SECTION_SOURCE_CAP)
        .chain(local.into_iter().take(SECTION_SOURCE_CAP))
        .unique_by(|article| {
            if article.url.is_empty() {
                (String::new(), article.title.clone())
            } else {
                (article.url.clone(), String::new())
            }
        })
        .collect();
    combined.shuffle(rng);
    combined
}

/// Top-level orchestration: one section per configured keyword pair, in
/// configuration order, rendered into the final HTML document.
pub struct DigestBuilder<'a, T: Translate> {
    config: &'a DigestConfig,
    aggregator: Aggregator<'a, T>,
    rng: StdRng,
}

impl<'a, T: Translate> DigestBuilder<'a, T> {
    /// Wire up a builder. The RNG is seeded from the config when a seed is
    /// set, OS entropy otherwise.
    pub fn new(
        config: &'a DigestConfig,
        newsapi: &'a NewsApiClient,
        naver: &'a NaverClient,
        translator: &'a T,
        window: DateWindow,
    ) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            aggregator: Aggregator::new(newsapi, naver, translator, window),
            rng,
        }
    }

    /// Assemble the digest: every keyword pair, sequentially.
    pub async fn build_digest(&mut self) -> Digest {
        let mut digest = Digest::default();
        for pair in &self.config.keywords {
            let section = self.aggregator.build_section(pair, &mut self.rng).await;
            info!(
                foreign = %section.pair.foreign,
                local = %section.pair.local,
                articles = section.articles.len(),
                "Built section"
            );
            digest.sections.push(section);
        }
        digest
    }

    /// Assemble the digest and render it to the final HTML string.
    pub async fn build(&mut self) -> String {
        let digest = self.build_digest().await;
        render::render(&digest)
    }
}
