/// One slide of the interactive demo carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSlide {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const DEMO_SLIDES: [DemoSlide; 3] = [
    DemoSlide {
        id: "analysis",
        icon: "file-text",
        title: "Document Analysis",
        description: "See how our AI instantly analyzes and highlights critical clauses in legal documents",
    },
    DemoSlide {
        id: "translation",
        icon: "message-square",
        title: "Plain Language Translation",
        description: "Transform complex legal jargon into clear, understandable language",
    },
    DemoSlide {
        id: "workflow",
        icon: "bar-chart",
        title: "Workflow Visualization",
        description: "Interactive flowcharts showing contract obligations and deadlines",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::carousel::Carousel;

    #[test]
    fn test_carousel_over_slides() {
        let mut carousel = Carousel::new(DEMO_SLIDES.len());
        carousel.prev();
        assert_eq!(DEMO_SLIDES[carousel.index()].id, "workflow");
        carousel.next();
        assert_eq!(DEMO_SLIDES[carousel.index()].id, "analysis");
    }
}
