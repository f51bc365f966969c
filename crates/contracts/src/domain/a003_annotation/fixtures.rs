use super::aggregate::{Annotation, AnnotationId, AnnotationKind};
use super::document::AnnotatedDocument;
use crate::domain::a002_case::{find_case, CaseId};

const DEFAULT_TITLE: &str = "Employment Agreement";

const EMPLOYMENT_AGREEMENT: &str = r#"EMPLOYMENT AGREEMENT

This Employment Agreement ("Agreement") is entered into on [DATE], between [COMPANY NAME], a corporation organized under the laws of [STATE] ("Company"), and [EMPLOYEE NAME] ("Employee").

1. EMPLOYMENT RELATIONSHIP
Employee agrees to work exclusively for Company during the term of this Agreement. Employee shall not engage in any other business activity that competes with Company's business.

2. COMPENSATION
Company shall pay Employee a base salary of $[AMOUNT] per year, payable in accordance with Company's standard payroll practices. Employee shall be eligible for performance-based bonuses at the sole discretion of Company.

3. TERMINATION
This Agreement may be terminated by either party with or without cause upon thirty (30) days written notice. Upon termination, Employee shall return all Company property and confidential information.

4. NON-COMPETE CLAUSE
Employee agrees that for a period of two (2) years following termination of employment, Employee shall not directly or indirectly compete with Company within a 50-mile radius of Company's principal place of business.

5. CONFIDENTIALITY
Employee acknowledges that during employment, Employee may have access to confidential information. Employee agrees to maintain the confidentiality of such information both during and after employment.
"#;

fn sample_annotations() -> Vec<Annotation> {
    vec![
        Annotation {
            id: AnnotationId(1),
            kind: AnnotationKind::Warning,
            text: "work exclusively for Company".into(),
            explanation: "This clause prevents you from having any side jobs or freelance work. Consider negotiating for specific exceptions.".into(),
        },
        Annotation {
            id: AnnotationId(2),
            kind: AnnotationKind::Critical,
            text: "with or without cause".into(),
            explanation: "This means you can be fired for any reason or no reason at all. This provides very little job security.".into(),
        },
        Annotation {
            id: AnnotationId(3),
            kind: AnnotationKind::Warning,
            text: "two (2) years following termination".into(),
            explanation: "A 2-year non-compete period is quite long and may limit your future employment opportunities significantly.".into(),
        },
        Annotation {
            id: AnnotationId(4),
            kind: AnnotationKind::Info,
            text: "performance-based bonuses at the sole discretion".into(),
            explanation: "This means bonuses are not guaranteed and the company has complete control over whether you receive them.".into(),
        },
    ]
}

/// The analysed sample agreement, titled after the case when `id` names one
pub fn sample_document(id: &str) -> AnnotatedDocument {
    let title = CaseId::from_string(id)
        .ok()
        .and_then(find_case)
        .map(|c| c.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    AnnotatedDocument {
        id: id.to_string(),
        title,
        body: EMPLOYMENT_AGREEMENT.to_string(),
        annotations: sample_annotations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_follows_case() {
        assert_eq!(sample_document("1").title, "TechCorp Employment Agreement");
        assert_eq!(sample_document("42").title, DEFAULT_TITLE);
        assert_eq!(sample_document("draft").title, DEFAULT_TITLE);
    }

    #[test]
    fn test_annotation_texts_occur_in_body() {
        let document = sample_document("1");
        for annotation in &document.annotations {
            assert!(
                document.body.contains(&annotation.text),
                "missing clause: {}",
                annotation.text
            );
        }
    }
}
