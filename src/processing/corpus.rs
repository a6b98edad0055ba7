use crate::fetchers::{FetchResult, SourceKind};

/// Outcome of fetching one reference for one candidate.
#[derive(Debug)]
pub struct FetchedText {
    pub kind: SourceKind,
    pub reference: String,
    pub result: FetchResult<String>,
}

/// One candidate's combined profile text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssembledDocument {
    pub text: String,
    /// True when at least one source was fetched without error.
    pub content_available: bool,
}

/// Downgrades a failed fetch to empty text.
///
/// Every error variant is logged and treated as "no content" so a single bad
/// reference never aborts the batch. Returns the text and whether the fetch
/// succeeded.
pub fn text_or_empty(fetched: FetchedText) -> (String, bool) {
    match fetched.result {
        Ok(text) => (text, true),
        Err(e) => {
            log::warn!(
                "No {:?} content for {}: {e}",
                fetched.kind,
                fetched.reference
            );
            (String::new(), false)
        }
    }
}

/// Joins a candidate's fetched texts with newlines, in fetch order.
pub fn assemble_document(fetched: Vec<FetchedText>) -> AssembledDocument {
    let mut parts = Vec::with_capacity(fetched.len());
    let mut content_available = false;
    for item in fetched {
        let (text, ok) = text_or_empty(item);
        content_available |= ok;
        parts.push(text);
    }
    AssembledDocument {
        text: parts.join("\n"),
        content_available,
    }
}

/// Builds one document per candidate, preserving input order.
pub fn assemble_corpus(fetches: Vec<Vec<FetchedText>>) -> Vec<AssembledDocument> {
    fetches.into_iter().map(assemble_document).collect()
}
