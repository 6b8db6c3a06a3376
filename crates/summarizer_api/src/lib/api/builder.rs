use crate::{
    api::AppState,
    llm::transcript::{NoTranscriptBackend, TranscriptSummarizer},
    GenerationParams, Summarizer,
};

pub struct AppStateBuilder<S = (), T = NoTranscriptBackend> {
    summarizer: S,
    transcripts: T,
    params: GenerationParams,
}

impl AppStateBuilder {
    pub fn new() -> Self {
        Self {
            summarizer: (),
            transcripts: NoTranscriptBackend,
            params: GenerationParams::default(),
        }
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> AppStateBuilder<S, T> {
    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> AppStateBuilder<S2, T> {
        AppStateBuilder {
            summarizer,
            transcripts: self.transcripts,
            params: self.params,
        }
    }

    pub fn transcript_summarizer<T2: TranscriptSummarizer + Send + Sync + 'static>(
        self,
        transcripts: T2,
    ) -> AppStateBuilder<S, T2> {
        AppStateBuilder {
            summarizer: self.summarizer,
            transcripts,
            params: self.params,
        }
    }

    pub fn generation_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

impl<S, T> AppStateBuilder<S, T>
where
    S: Summarizer + Send + Sync + 'static,
    T: TranscriptSummarizer + Send + Sync + 'static,
{
    pub fn build(self) -> AppState<S, T> {
        AppState {
            summarizer: self.summarizer,
            transcripts: self.transcripts,
            params: self.params,
        }
    }
}
