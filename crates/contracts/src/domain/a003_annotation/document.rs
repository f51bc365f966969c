use super::aggregate::{Annotation, AnnotationId, AnnotationKind};

/// A document body together with the clauses highlighted in it
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedDocument {
    pub id: String,
    pub title: String,
    pub body: String,
    pub annotations: Vec<Annotation>,
}

/// A run of the document body, either plain or highlighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSegment {
    Plain(String),
    Highlight {
        annotation_id: AnnotationId,
        kind: AnnotationKind,
        text: String,
    },
}

/// Per-kind annotation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub critical: usize,
    pub warnings: usize,
    pub info: usize,
}

impl AnnotatedDocument {
    pub fn annotation(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// Splits the body into plain and highlighted runs.
    ///
    /// Each annotation highlights the first occurrence of its text. Runs are
    /// ordered by position; an annotation that overlaps an earlier one or
    /// does not occur in the body is left out.
    pub fn segments(&self) -> Vec<DocumentSegment> {
        let mut located: Vec<(usize, usize, &Annotation)> = self
            .annotations
            .iter()
            .filter(|a| !a.text.is_empty())
            .filter_map(|a| self.body.find(&a.text).map(|start| (start, start + a.text.len(), a)))
            .collect();
        located.sort_by_key(|(start, _, _)| *start);

        let mut segments = Vec::new();
        let mut cursor = 0;
        for (start, end, annotation) in located {
            if start < cursor {
                continue;
            }
            if start > cursor {
                segments.push(DocumentSegment::Plain(self.body[cursor..start].to_string()));
            }
            segments.push(DocumentSegment::Highlight {
                annotation_id: annotation.id,
                kind: annotation.kind,
                text: self.body[start..end].to_string(),
            });
            cursor = end;
        }
        if cursor < self.body.len() {
            segments.push(DocumentSegment::Plain(self.body[cursor..].to_string()));
        }
        segments
    }

    pub fn summary(&self) -> AnnotationSummary {
        let mut summary = AnnotationSummary::default();
        for annotation in &self.annotations {
            match annotation.kind {
                AnnotationKind::Critical => summary.critical += 1,
                AnnotationKind::Warning => summary.warnings += 1,
                AnnotationKind::Info => summary.info += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_annotation::fixtures::sample_document;

    fn annotation(id: u32, text: &str) -> Annotation {
        Annotation {
            id: AnnotationId(id),
            kind: AnnotationKind::Info,
            text: text.into(),
            explanation: String::new(),
        }
    }

    fn doc(body: &str, annotations: Vec<Annotation>) -> AnnotatedDocument {
        AnnotatedDocument {
            id: "t".into(),
            title: "t".into(),
            body: body.into(),
            annotations,
        }
    }

    fn rebuild(segments: &[DocumentSegment]) -> String {
        segments
            .iter()
            .map(|s| match s {
                DocumentSegment::Plain(t) => t.as_str(),
                DocumentSegment::Highlight { text, .. } => text.as_str(),
            })
            .collect()
    }

    #[test]
    fn test_segments_preserve_body() {
        let document = sample_document("1");
        assert_eq!(rebuild(&document.segments()), document.body);
    }

    #[test]
    fn test_every_fixture_annotation_is_highlighted() {
        let document = sample_document("1");
        let highlighted: Vec<AnnotationId> = document
            .segments()
            .iter()
            .filter_map(|s| match s {
                DocumentSegment::Highlight { annotation_id, .. } => Some(*annotation_id),
                DocumentSegment::Plain(_) => None,
            })
            .collect();
        assert_eq!(highlighted.len(), document.annotations.len());
    }

    #[test]
    fn test_segments_are_ordered_by_position() {
        let document = doc("alpha beta gamma", vec![annotation(1, "gamma"), annotation(2, "alpha")]);
        let segments = document.segments();
        assert_eq!(
            segments,
            vec![
                DocumentSegment::Highlight {
                    annotation_id: AnnotationId(2),
                    kind: AnnotationKind::Info,
                    text: "alpha".into()
                },
                DocumentSegment::Plain(" beta ".into()),
                DocumentSegment::Highlight {
                    annotation_id: AnnotationId(1),
                    kind: AnnotationKind::Info,
                    text: "gamma".into()
                },
            ]
        );
    }

    #[test]
    fn test_overlapping_and_missing_annotations_are_skipped() {
        let document = doc(
            "one two three",
            vec![
                annotation(1, "one two"),
                annotation(2, "two three"),
                annotation(3, "four"),
            ],
        );
        let segments = document.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(rebuild(&segments), "one two three");
    }

    #[test]
    fn test_summary_counts() {
        let summary = sample_document("1").summary();
        assert_eq!(
            summary,
            AnnotationSummary {
                critical: 1,
                warnings: 2,
                info: 1,
            }
        );
    }
}
