//! Standard analyzer built from an [`AnalyzerConfig`].
//!
//! Separator tokenizer, then lowercasing when `ignore_case` is set, then
//! Porter stemming when `enable_stemming` is set.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::tokenizer::separator::SeparatorTokenizer;
use crate::config::AnalyzerConfig;
use crate::error::Result;

pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
    config: AnalyzerConfig,
}

impl StandardAnalyzer {
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let tokenizer = Arc::new(SeparatorTokenizer::new(config.separator_set()));
        let mut analyzer = PipelineAnalyzer::new(tokenizer);

        if config.ignore_case {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        if config.enable_stemming {
            analyzer = analyzer.add_filter(Arc::new(StemFilter::new()));
        }

        StandardAnalyzer {
            inner: analyzer,
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
