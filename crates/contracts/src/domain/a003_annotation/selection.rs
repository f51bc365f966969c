use super::aggregate::AnnotationId;

/// Currently selected annotation of the document viewer.
///
/// The annotation list and the highlighted spans in the body both route
/// their clicks through [`AnnotationSelection::select`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSelection {
    selected: Option<AnnotationId>,
}

impl AnnotationSelection {
    pub fn select(&mut self, id: AnnotationId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<AnnotationId> {
        self.selected
    }

    pub fn is_selected(&self, id: AnnotationId) -> bool {
        self.selected == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_annotation::document::DocumentSegment;
    use crate::domain::a003_annotation::fixtures::sample_document;

    #[test]
    fn test_list_and_span_clicks_select_the_same_annotation() {
        let document = sample_document("1");
        for segment in document.segments() {
            let DocumentSegment::Highlight { annotation_id, .. } = segment else {
                continue;
            };

            let mut from_span = AnnotationSelection::default();
            from_span.select(annotation_id);

            let card = document
                .annotation(annotation_id)
                .expect("highlight refers to a known annotation");
            let mut from_list = AnnotationSelection::default();
            from_list.select(card.id);

            assert_eq!(from_span, from_list);
            assert!(from_list.is_selected(annotation_id));
        }
    }

    #[test]
    fn test_clear() {
        let mut selection = AnnotationSelection::default();
        selection.select(AnnotationId(2));
        selection.clear();
        assert_eq!(selection.selected(), None);
    }
}
