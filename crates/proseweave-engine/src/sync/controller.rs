use crate::editing::EditorState;
use crate::markup;
use crate::model::Document;

/// What the controller last saw from each side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSnapshot {
    /// The last value ingested from the host.
    pub last_external: Option<String>,
    /// The last markup the editor produced.
    pub last_emitted: Option<String>,
}

/// Result of ingesting an external value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Our own output came back; nothing touched.
    Echo,
    /// The document was replaced and history cleared.
    Replaced,
}

/// How an incoming value is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Text,
    Markup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Read values that look like markup with the markup reader instead of
    /// the text pipeline.
    pub detect_markup: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            detect_markup: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SyncController {
    snapshot: SyncSnapshot,
    options: SyncOptions,
}

impl SyncController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SyncOptions) -> Self {
        Self {
            snapshot: SyncSnapshot::default(),
            options,
        }
    }

    pub fn snapshot(&self) -> &SyncSnapshot {
        &self.snapshot
    }

    /// Remember markup the editor just produced so it is recognised as an
    /// echo if the host feeds it back.
    pub fn record_emitted(&mut self, markup: &str) {
        self.snapshot.last_emitted = Some(markup.to_string());
    }

    pub fn source_format(&self, value: &str) -> SourceFormat {
        if self.options.detect_markup && markup::looks_like_markup(value) {
            SourceFormat::Markup
        } else {
            SourceFormat::Text
        }
    }

    /// Decide what an external value means for `state` and act on it.
    ///
    /// Only our own last output is ignored. Any other value, including one
    /// equal to an earlier external value, replaces the document.
    pub fn ingest(&mut self, state: &mut EditorState, value: &str) -> SyncOutcome {
        if self.snapshot.last_emitted.as_deref() == Some(value) {
            log::debug!("sync: echo of emitted markup ({} bytes), ignoring", value.len());
            return SyncOutcome::Echo;
        }

        let format = self.source_format(value);
        let document = match format {
            SourceFormat::Markup => Document::from_markup(value),
            SourceFormat::Text => Document::from_text(value),
        };
        log::debug!(
            "sync: replacing document from {format:?} ({} blocks)",
            document.blocks.len()
        );
        state.replace_document(document);

        self.snapshot.last_external = Some(value.to_string());
        self.snapshot.last_emitted = Some(state.markup());
        SyncOutcome::Replaced
    }
}
