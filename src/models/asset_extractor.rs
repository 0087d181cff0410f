use crate::config::AssetExtractorConfig;
use crate::models::{
    Asset, AssetCollector, AssetDictionary, RecognitionContext, Recognizer,
};
use crate::recognizers::{
    CashtagRecognizer, CompanyNameRecognizer, ContextualTickerRecognizer, CusipRecognizer,
    EconomicIndicatorRecognizer, HeuristicTickerRecognizer, KnownTickerRecognizer,
    OptionPhraseRecognizer, OptionShorthandRecognizer,
};
use crate::Error;
use chrono::{Local, NaiveDate};
use log::{debug, trace};
use std::sync::Arc;

/// Runs every recognizer over a text, in priority order, and merges their candidates
/// into a single de-duplicated asset list.
///
/// Construction compiles all patterns up front; `extract` itself never fails and can be
/// shared across threads.
pub struct AssetExtractor {
    config: AssetExtractorConfig,
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl AssetExtractor {
    pub fn new(
        dictionary: Arc<AssetDictionary>,
        config: AssetExtractorConfig,
    ) -> Result<Self, Error> {
        // Earlier recognizers win when two produce the same asset
        let recognizers: Vec<Box<dyn Recognizer>> = vec![
            Box::new(CashtagRecognizer::new()?),
            Box::new(ContextualTickerRecognizer::new()?),
            Box::new(KnownTickerRecognizer::new(dictionary.clone())?),
            Box::new(HeuristicTickerRecognizer::new(
                dictionary.clone(),
                config.heuristic_min_length,
            )?),
            Box::new(OptionShorthandRecognizer::new(config.roll_past_expiries)?),
            Box::new(OptionPhraseRecognizer::new(config.roll_past_expiries)?),
            Box::new(EconomicIndicatorRecognizer::new(dictionary.clone())?),
            Box::new(CusipRecognizer::new()?),
            Box::new(CompanyNameRecognizer::new(dictionary)?),
        ];

        Ok(Self::with_recognizers(recognizers, config))
    }

    /// Builds an extractor from a custom recognizer list. Recognizers run in the order
    /// given.
    pub fn with_recognizers(
        recognizers: Vec<Box<dyn Recognizer>>,
        config: AssetExtractorConfig,
    ) -> Self {
        Self {
            config,
            recognizers,
        }
    }

    pub fn config(&self) -> &AssetExtractorConfig {
        &self.config
    }

    pub fn recognizer_names(&self) -> Vec<&'static str> {
        self.recognizers
            .iter()
            .map(|recognizer| recognizer.name())
            .collect()
    }

    pub fn extract(&self, text: &str) -> Vec<Asset> {
        let context = RecognitionContext::new(self.reference_date());
        let mut collector = AssetCollector::new();

        for recognizer in &self.recognizers {
            let candidates = recognizer.recognize(text, &context);

            debug!(
                "Recognizer `{}` produced {} candidate(s)",
                recognizer.name(),
                candidates.len()
            );

            for candidate in candidates {
                let key = candidate.key();

                if !collector.push(candidate) {
                    trace!(
                        "Dropped duplicate {} from recognizer `{}`",
                        key,
                        recognizer.name()
                    );
                }
            }
        }

        debug!("Extracted {} asset(s)", collector.len());

        collector.into_assets()
    }

    fn reference_date(&self) -> NaiveDate {
        self.config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
